use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::de::DeserializeOwned;
use toml::{map::Map, Value};

/// Root of the cargo workspace, where `Config*.toml` and `Secrets.toml`
/// live.
pub fn workspace_dir() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .ancestors()
        .nth(2)
        .unwrap_or(manifest_dir)
        .to_path_buf()
}

pub fn load_config<T: DeserializeOwned>(
    config_name: &str,
) -> anyhow::Result<T> {
    let path = workspace_dir().join(config_name);
    let config = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    parse_config(&config)
        .with_context(|| format!("failed to parse {}", path.display()))
}

pub fn parse_config<T: DeserializeOwned>(
    config: &str,
) -> anyhow::Result<T> {
    Ok(toml::from_str::<T>(config)?)
}

pub fn load_env() -> anyhow::Result<Map<String, Value>> {
    let workspace_dir = workspace_dir();
    let secrets = std::fs::read_to_string(workspace_dir.join("Secrets.toml"))
        .context("failed to read Secrets.toml")?;

    toml::from_str::<Map<String, Value>>(&secrets)
        .context("failed to parse Secrets.toml")
}

#[cfg(test)]
mod test {
    use serde::Deserialize;

    use super::*;

    #[derive(Deserialize)]
    struct Sample {
        server: Server,
    }

    #[derive(Deserialize)]
    struct Server {
        port: u16,
    }

    #[test]
    fn test_workspace_dir_contains_manifest() {
        assert!(workspace_dir().join("Cargo.toml").exists());
    }

    #[test]
    fn test_parse_config() {
        let sample: Sample = parse_config("[server]\nport = 8000\n").unwrap();

        assert_eq!(sample.server.port, 8000);
    }

    #[test]
    fn test_parse_config_rejects_missing_section() {
        assert!(parse_config::<Sample>("[cors]\n").is_err());
    }
}
