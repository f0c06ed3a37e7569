use sea_orm_migration::prelude::*;

use crate::m20240601_090000_create_contact_submission_table::ContactSubmission;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(ContactSubmission::Table)
                    .name("idx_contact_submission_created_at")
                    .col(ContactSubmission::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .table(ContactSubmission::Table)
                    .name("idx_contact_submission_created_at")
                    .to_owned(),
            )
            .await
    }
}
