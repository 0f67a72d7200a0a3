//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `SHORTLIST_*` environment variables.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

use crate::constants::{DEFAULT_EMBEDDING_DIM, DEFAULT_SIMILARITY_THRESHOLD, DEFAULT_TOP_K};

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `SHORTLIST_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Path to the sentence-embedding model directory (safetensors + tokenizer).
    pub model_path: Option<PathBuf>,

    /// Path to the JSON content catalog seeded into the store at startup.
    pub content_path: Option<PathBuf>,

    /// Path to the segment-model artifact (scaler + cluster centers + profiles).
    pub segment_model_path: Option<PathBuf>,

    /// Embedding vector dimension. Default: `384`.
    pub embedding_dim: usize,

    /// Default number of ranked results. Default: `3`.
    pub top_k: usize,

    /// Minimum cosine similarity for ranked output. Default: `0.5`.
    pub similarity_threshold: f32,

    /// Content-safety classifier endpoint. Absent means mock classification.
    pub safety_endpoint: Option<String>,

    /// Content-safety classifier API key. Absent means mock classification.
    pub safety_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            model_path: None,
            content_path: None,
            segment_model_path: None,
            embedding_dim: DEFAULT_EMBEDDING_DIM,
            top_k: DEFAULT_TOP_K,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            safety_endpoint: None,
            safety_key: None,
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "SHORTLIST_PORT";
    const ENV_BIND_ADDR: &'static str = "SHORTLIST_BIND_ADDR";
    const ENV_MODEL_PATH: &'static str = "SHORTLIST_MODEL_PATH";
    const ENV_CONTENT_PATH: &'static str = "SHORTLIST_CONTENT_PATH";
    const ENV_SEGMENT_MODEL_PATH: &'static str = "SHORTLIST_SEGMENT_MODEL_PATH";
    const ENV_EMBEDDING_DIM: &'static str = "SHORTLIST_EMBEDDING_DIM";
    const ENV_TOP_K: &'static str = "SHORTLIST_TOP_K";
    const ENV_SIMILARITY_THRESHOLD: &'static str = "SHORTLIST_SIMILARITY_THRESHOLD";
    const ENV_SAFETY_ENDPOINT: &'static str = "SHORTLIST_SAFETY_ENDPOINT";
    const ENV_SAFETY_KEY: &'static str = "SHORTLIST_SAFETY_KEY";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let model_path = Self::parse_optional_path_from_env(Self::ENV_MODEL_PATH);
        let content_path = Self::parse_optional_path_from_env(Self::ENV_CONTENT_PATH);
        let segment_model_path = Self::parse_optional_path_from_env(Self::ENV_SEGMENT_MODEL_PATH);
        let embedding_dim = Self::parse_embedding_dim_from_env(defaults.embedding_dim)?;
        let top_k = Self::parse_top_k_from_env(defaults.top_k)?;
        let similarity_threshold =
            Self::parse_threshold_from_env(defaults.similarity_threshold)?;
        let safety_endpoint = Self::parse_optional_string_from_env(Self::ENV_SAFETY_ENDPOINT);
        let safety_key = Self::parse_optional_string_from_env(Self::ENV_SAFETY_KEY);

        Ok(Self {
            port,
            bind_addr,
            model_path,
            content_path,
            segment_model_path,
            embedding_dim,
            top_k,
            similarity_threshold,
            safety_endpoint,
            safety_key,
        })
    }

    /// Validates paths and basic invariants (does not create anything).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.model_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        if let Some(ref path) = self.content_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }

        if let Some(ref path) = self.segment_model_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }

        if self.embedding_dim == 0 {
            return Err(ConfigError::InvalidEmbeddingDim {
                value: self.embedding_dim.to_string(),
            });
        }

        if self.top_k == 0 {
            return Err(ConfigError::InvalidTopK {
                value: self.top_k.to_string(),
            });
        }

        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(ConfigError::InvalidThreshold {
                value: self.similarity_threshold.to_string(),
            });
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_embedding_dim_from_env(default: usize) -> Result<usize, ConfigError> {
        match env::var(Self::ENV_EMBEDDING_DIM) {
            Ok(value) => {
                let dim: usize = value
                    .parse()
                    .map_err(|_| ConfigError::InvalidEmbeddingDim {
                        value: value.clone(),
                    })?;
                if dim == 0 {
                    return Err(ConfigError::InvalidEmbeddingDim { value });
                }
                Ok(dim)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_top_k_from_env(default: usize) -> Result<usize, ConfigError> {
        match env::var(Self::ENV_TOP_K) {
            Ok(value) => {
                let k: usize = value
                    .parse()
                    .map_err(|_| ConfigError::InvalidTopK {
                        value: value.clone(),
                    })?;
                if k == 0 {
                    return Err(ConfigError::InvalidTopK { value });
                }
                Ok(k)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_threshold_from_env(default: f32) -> Result<f32, ConfigError> {
        match env::var(Self::ENV_SIMILARITY_THRESHOLD) {
            Ok(value) => {
                let threshold: f32 = value
                    .parse()
                    .map_err(|_| ConfigError::InvalidThreshold {
                        value: value.clone(),
                    })?;
                if !(0.0..=1.0).contains(&threshold) {
                    return Err(ConfigError::InvalidThreshold { value });
                }
                Ok(threshold)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}
