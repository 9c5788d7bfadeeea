//! Error types for thesis-attribution

use dspace_client::TransportError;
use thiserror::Error;

use crate::config::ConfigError;

/// Result type alias for attribution operations
pub type Result<T> = std::result::Result<T, AttributionError>;

/// Main error type for attribution operations
#[derive(Error, Debug)]
pub enum AttributionError {
    /// Repository or wiki could not be reached, or sent back something unreadable
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The wiki page or section asked for does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl AttributionError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, AttributionError::NotFound(_))
    }
}
