use std::sync::Arc;

use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveValue, DatabaseConnection, EntityTrait};

use crate::active_models::{prelude::*, *};
use crate::error::{RepositoryResult, WithContext};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct ContactRepository {
    db: Arc<DatabaseConnection>,
}

impl ContactRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<SubmissionStatus> for sea_orm_active_enums::SubmissionStatus {
    fn from(value: SubmissionStatus) -> Self {
        match value {
            SubmissionStatus::New => Self::New,
            SubmissionStatus::Contacted => Self::Contacted,
            SubmissionStatus::Archived => Self::Archived,
        }
    }
}

impl From<ContactSubmissionEntity> for contact_submission::ActiveModel {
    fn from(value: ContactSubmissionEntity) -> Self {
        Self {
            id: if value.id == i32::default() {
                ActiveValue::not_set()
            } else {
                ActiveValue::Set(value.id)
            },
            name: ActiveValue::Set(value.name),
            email: ActiveValue::Set(value.email),
            phone: ActiveValue::Set(value.phone),
            service_type: ActiveValue::Set(value.service_type),
            message: ActiveValue::Set(value.message),
            status: ActiveValue::Set(value.status.into()),
            created_at: if value.created_at == NaiveDateTime::default() {
                ActiveValue::Set(Utc::now().naive_utc())
            } else {
                ActiveValue::Set(value.created_at)
            },
        }
    }
}

impl ContactRepository {
    /// Inserts one row. Submissions are append-only, so there is no
    /// upsert or dedup here.
    pub async fn save(
        &self,
        submission: ContactSubmissionEntity,
    ) -> RepositoryResult<()> {
        let model = contact_submission::ActiveModel::from(submission);

        ContactSubmission::insert(model)
            .exec_without_returning(self.db.as_ref())
            .await
            .context("in contact submission insert")?;

        Ok(())
    }
}
