use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DatabaseBackend;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Greeting {
    Table,
    Id,
    Sender,
    Recipient,
    Message,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut id = ColumnDef::new(Greeting::Id)
            .uuid()
            .not_null()
            .primary_key()
            .to_owned();
        // SQLite has no built-in UUID generator; the application supplies
        // the id on insert, so the server default is a Postgres extra.
        if manager.get_database_backend() == DatabaseBackend::Postgres {
            id.default(Expr::cust("gen_random_uuid()"));
        }

        manager
            .create_table(
                Table::create()
                    .table(Greeting::Table)
                    .if_not_exists()
                    .col(id)
                    .col(ColumnDef::new(Greeting::Sender).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Greeting::Recipient)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Greeting::Message)
                            .string_len(280)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Greeting::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Greeting::Table).to_owned())
            .await
    }
}
