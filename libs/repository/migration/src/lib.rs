pub use sea_orm_migration::prelude::*;

mod m20240601_090000_create_contact_submission_table;
mod m20240601_090500_create_index_at_contact_submission;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(
                m20240601_090000_create_contact_submission_table::Migration,
            ),
            Box::new(
                m20240601_090500_create_index_at_contact_submission::Migration,
            ),
        ]
    }
}
