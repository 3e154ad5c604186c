//! Bot messages
//!
//! - [`text`] - plain-text messages sent as-is
//! - [`MessageBuilder`] - content-template messages resolved against the Content API

mod builder;
pub mod text;

pub use builder::{MessageBuilder, TemplatedMessage};
pub use text::{capitalize_first, mode_to_beverage};
