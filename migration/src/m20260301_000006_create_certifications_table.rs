use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Certifications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Certifications::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Certifications::Name).string_len(200).not_null())
                    .col(ColumnDef::new(Certifications::Issuer).string_len(200).not_null())
                    .col(ColumnDef::new(Certifications::IssueDate).date())
                    .col(ColumnDef::new(Certifications::CredentialUrl).text())
                    .col(ColumnDef::new(Certifications::Document).text())
                    .col(ColumnDef::new(Certifications::Thumbnail).text())
                    .col(
                        ColumnDef::new(Certifications::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Certifications::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Certifications {
    Table,
    Id,
    Name,
    Issuer,
    IssueDate,
    CredentialUrl,
    Document,
    Thumbnail,
    CreatedAt,
}
