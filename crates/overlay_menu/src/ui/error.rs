//! Menu error types

use crate::config::ConfigError;
use thiserror::Error;

/// Errors surfaced while building a panel
#[derive(Error, Debug)]
pub enum MenuError {
    /// A font, shader program or geometry buffer failed to load
    #[error("Failed to load {resource}: {source}")]
    ResourceLoad {
        /// Resource that failed
        resource: String,
        /// Backend error
        source: Box<dyn std::error::Error>,
    },

    /// Configuration could not be read or is invalid
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Configuration values the panel cannot use
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl MenuError {
    pub(crate) fn resource(resource: impl Into<String>, source: Box<dyn std::error::Error>) -> Self {
        Self::ResourceLoad {
            resource: resource.into(),
            source,
        }
    }
}
