pub mod certification_repository_postgres;
pub mod education_repository_postgres;
pub mod experience_repository_postgres;
pub mod link_repository_postgres;
pub mod portfolio_query_postgres;
pub mod profile_repository_postgres;
pub mod project_repository_postgres;
pub mod sea_orm_entity;
pub mod skill_repository_postgres;

pub use certification_repository_postgres::CertificationRepositoryPostgres;
pub use education_repository_postgres::EducationRepositoryPostgres;
pub use experience_repository_postgres::ExperienceRepositoryPostgres;
pub use link_repository_postgres::LinkRepositoryPostgres;
pub use portfolio_query_postgres::PortfolioQueryPostgres;
pub use profile_repository_postgres::ProfileRepositoryPostgres;
pub use project_repository_postgres::ProjectRepositoryPostgres;
pub use skill_repository_postgres::SkillRepositoryPostgres;
