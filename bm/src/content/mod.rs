//! Content template source
//!
//! Provides the remote template listing used to resolve content templates.

mod api;
pub mod client;
mod types;

pub use api::ContentApiClient;
pub use client::ContentSource;
pub use types::{ContentListResponse, Template};
