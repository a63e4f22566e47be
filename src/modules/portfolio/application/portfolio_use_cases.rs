use std::sync::Arc;

use crate::portfolio::application::domain::entities::{
    Certification, Education, Experience, OtherLink, Project, Skill,
};
use crate::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioPageUseCase, ManageContentUseCase, ManageProfileUseCase,
    UploadCertificationDocumentUseCase,
};

#[derive(Clone)]
pub struct PortfolioUseCases {
    pub page: Arc<dyn GetPortfolioPageUseCase + Send + Sync>,
    pub profile: Arc<dyn ManageProfileUseCase + Send + Sync>,
    pub projects: Arc<dyn ManageContentUseCase<Project> + Send + Sync>,
    pub skills: Arc<dyn ManageContentUseCase<Skill> + Send + Sync>,
    pub experiences: Arc<dyn ManageContentUseCase<Experience> + Send + Sync>,
    pub educations: Arc<dyn ManageContentUseCase<Education> + Send + Sync>,
    pub certifications: Arc<dyn ManageContentUseCase<Certification> + Send + Sync>,
    pub links: Arc<dyn ManageContentUseCase<OtherLink> + Send + Sync>,
    pub certification_documents: Arc<dyn UploadCertificationDocumentUseCase + Send + Sync>,
}
