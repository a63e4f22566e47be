use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use crate::portfolio::application::domain::drafts::{
    CertificationDraft, EducationDraft, ExperienceDraft, LinkDraft, ProjectDraft, SkillDraft,
    Validate,
};
use crate::portfolio::application::domain::entities::{
    Certification, Education, Experience, OtherLink, Project, Skill,
};

/// A list-style record managed through the admin CRUD endpoints.
pub trait ContentRecord: Clone + Serialize + Send + Sync + 'static {
    type Draft: Validate + DeserializeOwned + Clone + Send + Sync + 'static;

    /// Singular name used in logs and error messages.
    const KIND: &'static str;

    fn id(&self) -> Uuid;

    /// Media files owned by the record, removed along with it.
    fn stored_files(&self) -> Vec<String> {
        Vec::new()
    }
}

impl ContentRecord for Project {
    type Draft = ProjectDraft;
    const KIND: &'static str = "project";

    fn id(&self) -> Uuid {
        self.id
    }
}

impl ContentRecord for Skill {
    type Draft = SkillDraft;
    const KIND: &'static str = "skill";

    fn id(&self) -> Uuid {
        self.id
    }
}

impl ContentRecord for Experience {
    type Draft = ExperienceDraft;
    const KIND: &'static str = "experience";

    fn id(&self) -> Uuid {
        self.id
    }
}

impl ContentRecord for Education {
    type Draft = EducationDraft;
    const KIND: &'static str = "education";

    fn id(&self) -> Uuid {
        self.id
    }
}

impl ContentRecord for Certification {
    type Draft = CertificationDraft;
    const KIND: &'static str = "certification";

    fn id(&self) -> Uuid {
        self.id
    }

    fn stored_files(&self) -> Vec<String> {
        self.document
            .iter()
            .chain(self.thumbnail.iter())
            .cloned()
            .collect()
    }
}

impl ContentRecord for OtherLink {
    type Draft = LinkDraft;
    const KIND: &'static str = "link";

    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentRepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Lists come back in display order.
#[async_trait]
pub trait ContentRepository<C: ContentRecord>: Send + Sync {
    async fn list(&self) -> Result<Vec<C>, ContentRepositoryError>;

    async fn find(&self, id: Uuid) -> Result<C, ContentRepositoryError>;

    async fn create(&self, draft: C::Draft) -> Result<C, ContentRepositoryError>;

    async fn update(&self, id: Uuid, draft: C::Draft) -> Result<C, ContentRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), ContentRepositoryError>;
}
