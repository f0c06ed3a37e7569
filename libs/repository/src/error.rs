#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("database operation failed {}: {}", context, source)]
    Database {
        context: String,
        source: sea_orm::DbErr,
    },
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

pub(crate) trait WithContext<T> {
    fn context(self, context: &str) -> RepositoryResult<T>;
}

impl<T> WithContext<T> for Result<T, sea_orm::DbErr> {
    fn context(self, context: &str) -> RepositoryResult<T> {
        self.map_err(|e| RepositoryError::Database {
            context: context.to_string(),
            source: e,
        })
    }
}
