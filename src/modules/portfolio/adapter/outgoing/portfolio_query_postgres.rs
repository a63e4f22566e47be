use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::portfolio::application::domain::entities::{
    Certification, Education, Experience, OtherLink, PortfolioSnapshot, Project, Skill,
};
use crate::portfolio::application::ports::outgoing::{
    ContentRepository, PortfolioQuery, PortfolioQueryError, ProfileRepository,
};

use super::{
    CertificationRepositoryPostgres, EducationRepositoryPostgres, ExperienceRepositoryPostgres,
    LinkRepositoryPostgres, ProfileRepositoryPostgres, ProjectRepositoryPostgres,
    SkillRepositoryPostgres,
};

/// Loads every section of the page concurrently.
#[derive(Clone)]
pub struct PortfolioQueryPostgres {
    profiles: ProfileRepositoryPostgres,
    projects: ProjectRepositoryPostgres,
    skills: SkillRepositoryPostgres,
    experiences: ExperienceRepositoryPostgres,
    educations: EducationRepositoryPostgres,
    certifications: CertificationRepositoryPostgres,
    links: LinkRepositoryPostgres,
}

impl PortfolioQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            profiles: ProfileRepositoryPostgres::new(db.clone()),
            projects: ProjectRepositoryPostgres::new(db.clone()),
            skills: SkillRepositoryPostgres::new(db.clone()),
            experiences: ExperienceRepositoryPostgres::new(db.clone()),
            educations: EducationRepositoryPostgres::new(db.clone()),
            certifications: CertificationRepositoryPostgres::new(db.clone()),
            links: LinkRepositoryPostgres::new(db),
        }
    }
}

fn query_err(err: impl std::fmt::Display) -> PortfolioQueryError {
    PortfolioQueryError::DatabaseError(err.to_string())
}

#[async_trait]
impl PortfolioQuery for PortfolioQueryPostgres {
    async fn load_snapshot(&self) -> Result<PortfolioSnapshot, PortfolioQueryError> {
        let (profile, projects, skills, experiences, educations, certifications, links) = tokio::try_join!(
            async { self.profiles.get().await.map_err(query_err) },
            async { ContentRepository::<Project>::list(&self.projects).await.map_err(query_err) },
            async { ContentRepository::<Skill>::list(&self.skills).await.map_err(query_err) },
            async {
                ContentRepository::<Experience>::list(&self.experiences)
                    .await
                    .map_err(query_err)
            },
            async {
                ContentRepository::<Education>::list(&self.educations)
                    .await
                    .map_err(query_err)
            },
            async {
                ContentRepository::<Certification>::list(&self.certifications)
                    .await
                    .map_err(query_err)
            },
            async { ContentRepository::<OtherLink>::list(&self.links).await.map_err(query_err) },
        )?;

        Ok(PortfolioSnapshot {
            profile,
            projects,
            skills,
            experiences,
            educations,
            certifications,
            links,
        })
    }
}
