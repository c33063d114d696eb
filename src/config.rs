//! Application-level configuration loading, including the admin token and the
//! seed roster used when the document store is still empty.

use std::{env, fs, io::ErrorKind, path::PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "TORNEO_BACK_CONFIG_PATH";
/// Environment variable that overrides the admin token from the config file.
const ADMIN_TOKEN_ENV: &str = "ADMIN_TOKEN";

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    admin_token: Option<String>,
    seed_groups: Vec<SeedGroup>,
}

/// One group of the baked-in tournament seed.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedGroup {
    /// Group label, e.g. "A".
    pub id: String,
    /// Team names in display order.
    #[serde(default)]
    pub teams: Vec<String>,
}

impl AppConfig {
    /// Load the application configuration from disk, falling back to the
    /// baked-in tournament seed. `ADMIN_TOKEN` in the environment always wins
    /// over the file.
    pub fn load() -> Self {
        let path = resolve_config_path();
        let mut config = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    let app_config: Self = raw.into();
                    info!(
                        path = %path.display(),
                        groups = app_config.seed_groups.len(),
                        "loaded tournament configuration"
                    );
                    app_config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        };

        if let Ok(token) = env::var(ADMIN_TOKEN_ENV) {
            if !token.is_empty() {
                config.admin_token = Some(token);
            }
        }
        if config.admin_token.is_none() {
            warn!("no admin token configured; every mutating request will be rejected");
        }

        config
    }

    /// Token that grants administrator access, if one is configured.
    pub fn admin_token(&self) -> Option<&str> {
        self.admin_token.as_deref()
    }

    /// Groups (and their teams) used to seed an empty store.
    pub fn seed_groups(&self) -> &[SeedGroup] {
        &self.seed_groups
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            admin_token: None,
            seed_groups: default_seed_groups(),
        }
    }
}

#[derive(Debug, Deserialize)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    #[serde(default)]
    admin_token: Option<String>,
    #[serde(default)]
    groups: Option<Vec<SeedGroup>>,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        Self {
            admin_token: value.admin_token.filter(|token| !token.is_empty()),
            seed_groups: value.groups.unwrap_or_else(default_seed_groups),
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Built-in tournament seed shipped with the binary.
fn default_seed_groups() -> Vec<SeedGroup> {
    vec![
        SeedGroup {
            id: "A".into(),
            teams: vec![
                "Dorado Citty".into(),
                "CASAGRANDE".into(),
                "ATLETICO CHIVAO".into(),
                "GALACTICOS FC".into(),
                "El Dorado 1970".into(),
            ],
        },
        SeedGroup {
            id: "B".into(),
            teams: vec![
                "SAN JOSE".into(),
                "ALASKA FC".into(),
                "PARURUAKA".into(),
                "ESEQUIBO FC".into(),
                "SANTA RITA".into(),
                "CERVECEROS".into(),
            ],
        },
        SeedGroup {
            id: "C".into(),
            teams: vec!["MINESUR".into(), "ROSCIO ACTIVA".into()],
        },
    ]
}
