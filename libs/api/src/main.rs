use std::net::{Ipv4Addr, SocketAddr};

use anyhow::Context;
use api::{serve, Config};
use repository::init_repository;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;
use util::{load_config, load_env};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let secrets = load_env()?;
    let conn_string = secrets
        .get("DATABASE_URL")
        .and_then(|value| value.as_str())
        .context("DATABASE_URL was not found")?;
    let repository = init_repository(conn_string).await?;

    let config = secrets
        .get("CONFIG")
        .and_then(|value| value.as_str())
        .unwrap_or_default();
    let config_name = &format!("Config{}.toml", config);
    let config: Config = load_config(config_name)?;

    let router = serve(repository, &config).await?;

    let address =
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.server.port));
    let listener = TcpListener::bind(&address).await?;
    info!(task = "listening", address = %address);

    Ok(axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?)
}
