//! BaristaMsg - messages for the barista kiosk ordering bot
//!
//! Produces the texts the ordering bot sends to attendees, in two flavours:
//!
//! - **Plain text**: literal strings built by direct interpolation
//!   (see [`messages::text`])
//! - **Content templates**: rich messages whose layout lives in the Twilio
//!   Content API. The crate fetches the template list, picks the template by
//!   naming convention and assembles its positional content variables
//!   (see [`messages::MessageBuilder`])
//!
//! # Naming convention
//!
//! ```text
//! {prefix}_{kind}[_limitless][_without_email]_{option count}
//!
//! acme_wrong_order_3
//! acme_ready_to_order_limitless_without_email_4
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use baristamsg::{ContentApiClient, MessageBuilder, TemplateResolver};
//!
//! let client = ContentApiClient::from_config(&config.content)?;
//! let resolver = TemplateResolver::new(Arc::new(client), &config.service_instance_prefix);
//! let msg = MessageBuilder::new(resolver).wrong_order("latte pls", &options).await?;
//! println!("{} {}", msg.content_sid, msg.content_variables);
//! ```

pub mod cli;
pub mod config;
pub mod content;
pub mod domain;
mod error;
pub mod messages;
pub mod naming;
pub mod resolver;
pub mod variables;

pub use config::{Config, ContentConfig};
pub use content::{ContentApiClient, ContentSource, Template};
pub use domain::{Event, EventOption, MenuOption, Mode, Selection};
pub use error::MessageError;
pub use messages::{MessageBuilder, TemplatedMessage};
pub use naming::{LIMITLESS_THRESHOLD, TemplateKind, template_name};
pub use resolver::{TemplateResolver, find_template, require_template};
pub use variables::{ContentVariables, VariableValue};

/// Default base URL of the Twilio Content API
pub const DEFAULT_CONTENT_BASE_URL: &str = "https://content.twilio.com";

/// Environment variable holding the service instance prefix
pub const PREFIX_ENV: &str = "SERVICE_INSTANCE_PREFIX";
