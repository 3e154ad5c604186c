//! ContentSource trait definition

use async_trait::async_trait;

use super::Template;
use crate::error::MessageError;

/// Stateless template source - every call lists the templates afresh
///
/// Implementations must collapse all transport and decoding failures into
/// [`MessageError::FetchFailed`].
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// List every template visible to the configured account
    async fn list_templates(&self) -> Result<Vec<Template>, MessageError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing::debug;

    /// Mock content source for unit tests
    pub struct MockContentSource {
        templates: Option<Vec<Template>>,
        call_count: AtomicUsize,
    }

    impl MockContentSource {
        pub fn new(templates: Vec<Template>) -> Self {
            debug!(template_count = %templates.len(), "MockContentSource::new: called");
            Self {
                templates: Some(templates),
                call_count: AtomicUsize::new(0),
            }
        }

        /// A source whose every call fails
        pub fn failing() -> Self {
            Self {
                templates: None,
                call_count: AtomicUsize::new(0),
            }
        }

        pub fn call_count(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ContentSource for MockContentSource {
        async fn list_templates(&self) -> Result<Vec<Template>, MessageError> {
            debug!("MockContentSource::list_templates: called");
            self.call_count.fetch_add(1, Ordering::SeqCst);
            self.templates.clone().ok_or(MessageError::FetchFailed)
        }
    }
}
