use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChatLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ChatLogs::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(ChatLogs::SessionKey).string_len(64).not_null())
                    .col(ColumnDef::new(ChatLogs::UserQuery).text().not_null())
                    .col(ColumnDef::new(ChatLogs::AiResponse).text().not_null())
                    .col(ColumnDef::new(ChatLogs::ModelUsed).string_len(100).not_null())
                    .col(
                        ColumnDef::new(ChatLogs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Admin listing is always newest first
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_chat_logs_created_at
                ON chat_logs (created_at DESC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_chat_logs_session_key
                ON chat_logs (session_key);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_chat_logs_created_at;
                DROP INDEX IF EXISTS idx_chat_logs_session_key;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ChatLogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ChatLogs {
    Table,
    Id,
    SessionKey,
    UserQuery,
    AiResponse,
    ModelUsed,
    CreatedAt,
}
