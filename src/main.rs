use api::Config;
use repository::init_repository;
use shuttle_runtime::{Error, SecretStore, Secrets};
use tracing_subscriber::EnvFilter;

#[shuttle_runtime::main]
async fn main(
    #[Secrets] secret_store: SecretStore,
    #[shuttle_shared_db::Postgres(local_uri = "{secrets.DATABASE_URL}")]
    conn_string: String,
) -> shuttle_axum::ShuttleAxum {
    let level = match secret_store.get("ENV").as_deref() {
        Some("prod") => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .init();

    let config = secret_store.get("CONFIG").unwrap_or_default();
    let config_name = format!("Config{}.toml", config);
    let config: Config = util::load_config(&config_name)
        .map_err(|e| Error::BuildPanic(e.to_string()))?;

    let repository = init_repository(&conn_string)
        .await
        .map_err(|e| Error::BuildPanic(e.to_string()))?;

    let router = api::serve(repository, &config)
        .await
        .map_err(|e| Error::BuildPanic(e.to_string()))?;

    Ok(router.into())
}
