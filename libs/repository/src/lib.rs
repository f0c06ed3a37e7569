use std::sync::Arc;

use contact::ContactRepository;
use migration::Migrator;
use migration::MigratorTrait;
use error::WithContext;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

mod active_models;
pub mod contact;
mod error;

pub use error::{RepositoryError, RepositoryResult};

#[derive(Clone, Debug)]
pub struct Repository {
    pub contact: ContactRepository,
}

impl Repository {
    /// Wraps an already-open connection. Migrations are not run.
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            contact: ContactRepository::new(db),
        }
    }
}

pub async fn init_repository(db_url: &str) -> RepositoryResult<Repository> {
    let db = init_db(db_url).await?;

    Ok(Repository::new(Arc::new(db)))
}

async fn init_db(db_url: &str) -> RepositoryResult<DatabaseConnection> {
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(5)
        .min_connections(1)
        .sqlx_logging(true)
        .sqlx_logging_level(log::LevelFilter::Debug);

    let db = Database::connect(opt)
        .await
        .context("in database connect")?;

    Migrator::up(&db, None)
        .await
        .context("in migrator up")?;

    Ok(db)
}
