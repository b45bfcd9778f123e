use serde::{Deserialize, Serialize};

use crate::loader::DEFAULT_ENDPOINT;
use crate::mapper::DEFAULT_MAX_DEPTH;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub loader: LoaderSettings,
    #[serde(default)]
    pub mapper: MapperSettings,
}

/// How documents are fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderSettings {
    /// Base URL storage keys are appended to.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Whole-request timeout in seconds (default: 30).
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u32,
    /// Basic auth user. Only sent together with `password`.
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Element mapper limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapperSettings {
    /// Deepest node that is still mapped, the root being at depth 0 (default: 64).
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_seconds() -> u32 {
    30
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_seconds: default_timeout_seconds(),
            username: None,
            password: None,
        }
    }
}

impl Default for MapperSettings {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}
