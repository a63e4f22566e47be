use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OtherLinks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OtherLinks::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(OtherLinks::Name).string_len(100).not_null())
                    .col(ColumnDef::new(OtherLinks::Url).text().not_null())
                    .col(
                        ColumnDef::new(OtherLinks::CreatedAt)
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
            .drop_table(Table::drop().table(OtherLinks::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum OtherLinks {
    Table,
    Id,
    Name,
    Url,
    CreatedAt,
}
