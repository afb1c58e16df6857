// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;

use muster_core::{APP_NAME, Config};

const MUSTER_CONFIG_ENV: &str = "MUSTER_CONFIG";

/// Resolve and parse the configuration file.
///
/// Precedence: the `--config` flag, then the `MUSTER_CONFIG` environment
/// variable, then `config.toml` in the user config directory. A missing
/// default file is not an error; the built-in defaults are used instead.
/// An explicitly named file must exist.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        Some(path)
    } else if let Ok(env_path) = std::env::var(MUSTER_CONFIG_ENV) {
        Some(PathBuf::from(env_path))
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        config.exists().then_some(config)
    };

    match path {
        Some(path) => {
            let raw = fs::read_to_string(&path)
                .await
                .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?;
            Ok(raw.parse::<ConfigRaw>()?.0)
        }
        None => Ok(Config::default()),
    }
}

#[derive(Debug, serde::Deserialize)]
#[serde(transparent)]
struct ConfigRaw(Config);

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific home directory not found".into())
}
