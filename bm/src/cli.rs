//! CLI argument parsing for bm

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::naming::TemplateKind;

#[derive(Parser, Debug)]
#[command(name = "bm")]
#[command(author, version, about = "Barista kiosk message templates", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List content templates matching the service instance prefix
    Templates,

    /// Print the template name for a message kind without contacting the API
    Name {
        /// Message kind
        #[arg(value_enum)]
        kind: KindArg,

        /// Number of options the message lists
        #[arg(short, long)]
        options: usize,

        /// Maximum orders per attendee (ready-to-order kinds)
        #[arg(short, long, default_value = "0")]
        max_orders: u32,
    },

    /// Resolve a message kind to its template SID
    Resolve {
        /// Message kind
        #[arg(value_enum)]
        kind: KindArg,

        /// Number of options the message lists
        #[arg(short, long)]
        options: usize,

        /// Maximum orders per attendee (ready-to-order kinds)
        #[arg(short, long, default_value = "0")]
        max_orders: u32,
    },

    /// Build a templated message and print it as JSON
    Render {
        /// Message kind
        #[arg(value_enum)]
        kind: KindArg,

        /// Event JSON file; its menu items are the listed options
        #[arg(short, long)]
        event: Option<PathBuf>,

        /// Attendee message that matched no menu item (wrong-order)
        #[arg(long)]
        message: Option<String>,

        /// Maximum orders per attendee (ready-to-order kinds)
        #[arg(short, long, default_value = "0")]
        max_orders: u32,

        /// Event names to offer (event-registration), repeatable
        #[arg(long = "event-name")]
        event_names: Vec<String>,
    },
}

/// Message kinds as named on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindArg {
    WrongOrder,
    HelpPrivacy,
    ReadyToOrder,
    ReadyToOrderWithoutEmail,
    EventRegistration,
}

impl KindArg {
    pub fn to_kind(self, max_orders: u32) -> TemplateKind {
        match self {
            Self::WrongOrder => TemplateKind::WrongOrder,
            Self::HelpPrivacy => TemplateKind::HelpPrivacy,
            Self::ReadyToOrder => TemplateKind::ReadyToOrder { max_orders },
            Self::ReadyToOrderWithoutEmail => TemplateKind::ReadyToOrderWithoutEmail { max_orders },
            Self::EventRegistration => TemplateKind::EventRegistration,
        }
    }
}
