pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_profiles_table;
mod m20260301_000002_create_projects_table;
mod m20260301_000003_create_skills_table;
mod m20260301_000004_create_experiences_table;
mod m20260301_000005_create_educations_table;
mod m20260301_000006_create_certifications_table;
mod m20260301_000007_create_other_links_table;
mod m20260301_000008_create_contact_messages_table;
mod m20260301_000009_create_chat_logs_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_profiles_table::Migration),
            Box::new(m20260301_000002_create_projects_table::Migration),
            Box::new(m20260301_000003_create_skills_table::Migration),
            Box::new(m20260301_000004_create_experiences_table::Migration),
            Box::new(m20260301_000005_create_educations_table::Migration),
            Box::new(m20260301_000006_create_certifications_table::Migration),
            Box::new(m20260301_000007_create_other_links_table::Migration),
            Box::new(m20260301_000008_create_contact_messages_table::Migration),
            Box::new(m20260301_000009_create_chat_logs_table::Migration),
        ]
    }
}
