//! Message error types

use thiserror::Error;

/// Errors that can occur while building messages
#[derive(Debug, Error)]
pub enum MessageError {
    /// The content listing call failed. The cause is logged, not carried.
    #[error("Failed to fetch Templates")]
    FetchFailed,

    #[error("Template {name} not found")]
    TemplateNotFound { name: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MessageError {
    /// Check if this is a missing template error
    pub fn is_not_found(&self) -> bool {
        matches!(self, MessageError::TemplateNotFound { .. })
    }

    /// Get the lookup key if this is a missing template error
    pub fn template_name(&self) -> Option<&str> {
        match self {
            MessageError::TemplateNotFound { name } => Some(name),
            _ => None,
        }
    }
}
