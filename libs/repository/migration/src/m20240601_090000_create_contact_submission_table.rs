use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContactSubmission::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ContactSubmission::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ContactSubmission::Name)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ContactSubmission::Email)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ContactSubmission::Phone).string())
                    .col(
                        ColumnDef::new(ContactSubmission::ServiceType)
                            .string(),
                    )
                    .col(
                        ColumnDef::new(ContactSubmission::Message)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ContactSubmission::Status)
                            .text()
                            .not_null()
                            .default("new"),
                    )
                    .col(
                        ColumnDef::new(ContactSubmission::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop().table(ContactSubmission::Table).to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum ContactSubmission {
    Table,
    Id,
    Name,
    Email,
    Phone,
    ServiceType,
    Message,
    Status,
    CreatedAt,
}
