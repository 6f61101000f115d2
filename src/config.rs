use crate::errors::ServerError;
use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

pub const CONFIG_PATH: &str = "dashboard.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    /// Directory holding the CSV extracts.
    pub data_dir: PathBuf,
    /// Directory served under `/static/`.
    pub static_dir: PathBuf,
    /// `tracing_subscriber::EnvFilter` directive, e.g. "info" or "airbnb_dashboard=debug".
    pub log_filter: String,
    pub geospatial: GeospatialConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeospatialConfig {
    /// The geospatial extract stores latitude under "Longitude" and
    /// longitude under "Latitude".
    pub coordinates_swapped: bool,
    pub zoom: u8,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            data_dir: PathBuf::from("."),
            static_dir: PathBuf::from("static"),
            log_filter: "info".to_string(),
            geospatial: GeospatialConfig::default(),
        }
    }
}

impl Default for GeospatialConfig {
    fn default() -> Self {
        Self {
            coordinates_swapped: true,
            zoom: 2,
        }
    }
}

impl DashboardConfig {
    /// Read the config file if there is one; a missing file means defaults.
    pub fn load(path: &Path) -> Result<Self, ServerError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path).map_err(|e| {
            ServerError::Configuration(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml(&raw)
            .map_err(|e| ServerError::Configuration(format!("{}: {e}", path.display())))
    }

    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    #[cfg(test)]
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }
}
