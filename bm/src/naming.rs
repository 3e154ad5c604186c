//! Template naming convention
//!
//! Remote templates are joined to local message kinds purely by name:
//! `{prefix}_{tag}_{count}` where the tag carries the kind and its modifiers.

use tracing::debug;

/// Max-orders value at or above which the "limitless" template variant is used
pub const LIMITLESS_THRESHOLD: u32 = 50;

/// Template-backed message kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    WrongOrder,
    HelpPrivacy,
    ReadyToOrder { max_orders: u32 },
    ReadyToOrderWithoutEmail { max_orders: u32 },
    EventRegistration,
}

impl TemplateKind {
    /// Get the kind tag including modifier segments, e.g. `ready_to_order_limitless`
    pub fn tag(&self) -> String {
        debug!(?self, "TemplateKind::tag: called");
        match self {
            Self::WrongOrder => "wrong_order".to_string(),
            Self::HelpPrivacy => "help_privacy".to_string(),
            Self::ReadyToOrder { max_orders } => {
                format!("ready_to_order{}", limitless_segment(*max_orders))
            }
            Self::ReadyToOrderWithoutEmail { max_orders } => {
                format!("ready_to_order{}_without_email", limitless_segment(*max_orders))
            }
            Self::EventRegistration => "event_registration".to_string(),
        }
    }
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Whether an event's order limit counts as unlimited
pub fn is_limitless(max_orders: u32) -> bool {
    max_orders >= LIMITLESS_THRESHOLD
}

fn limitless_segment(max_orders: u32) -> &'static str {
    if is_limitless(max_orders) { "_limitless" } else { "" }
}

/// Build the lookup key for a template
///
/// The prefix is lower-cased; `count` is the number of options the message lists.
pub fn template_name(prefix: &str, kind: TemplateKind, count: usize) -> String {
    let name = format!("{}_{}_{}", prefix.to_lowercase(), kind.tag(), count);
    debug!(%name, "template_name: built");
    name
}
