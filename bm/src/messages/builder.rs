//! Content-template messages
//!
//! Each message kind fetches the template listing once, assembles its
//! positional variables and resolves the template by name. A missing template
//! is always reported as [`MessageError::TemplateNotFound`].

use serde::Serialize;
use tracing::debug;

use super::text::mode_to_beverage;
use crate::domain::{Event, EventOption, MenuOption};
use crate::error::MessageError;
use crate::naming::TemplateKind;
use crate::resolver::{TemplateResolver, require_template};
use crate::variables::ContentVariables;

/// A message to dispatch through a content template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplatedMessage {
    pub content_sid: String,
    /// JSON text of the positional variable map
    pub content_variables: String,
}

/// Builds content-template messages for one service instance
#[derive(Clone)]
pub struct MessageBuilder {
    resolver: TemplateResolver,
}

impl MessageBuilder {
    pub fn new(resolver: TemplateResolver) -> Self {
        Self { resolver }
    }

    /// Reply to a message that matched no menu item
    ///
    /// Variables: original message, then title, short title, description per option.
    pub async fn wrong_order(
        &self,
        original_message: &str,
        options: &[MenuOption],
    ) -> Result<TemplatedMessage, MessageError> {
        debug!(option_count = options.len(), "wrong_order: called");
        let mut variables = ContentVariables::new();
        variables.push(original_message).extend_options(options);

        self.build(TemplateKind::WrongOrder, options.len(), variables).await
    }

    /// Help and privacy menu for an event
    ///
    /// Variables: plural beverage noun, then title, short title, description per menu item.
    pub async fn help(&self, event: &Event) -> Result<TemplatedMessage, MessageError> {
        let items = &event.selection.items;
        debug!(event = %event.name, item_count = items.len(), "help: called");
        let mut variables = ContentVariables::new();
        variables
            .push(mode_to_beverage(&event.selection.mode, true))
            .extend_options(items);

        self.build(TemplateKind::HelpPrivacy, items.len(), variables).await
    }

    /// Menu sent once an attendee may order
    ///
    /// Variables: max orders (number), plural beverage noun, then title, short
    /// title, description per option.
    pub async fn ready_to_order(
        &self,
        event: &Event,
        options: &[MenuOption],
        max_orders: u32,
    ) -> Result<TemplatedMessage, MessageError> {
        debug!(option_count = options.len(), %max_orders, "ready_to_order: called");
        let variables = ready_to_order_variables(event, options, max_orders);
        self.build(TemplateKind::ReadyToOrder { max_orders }, options.len(), variables)
            .await
    }

    /// Same as [`ready_to_order`](Self::ready_to_order) for events that skip email verification
    pub async fn ready_to_order_without_email(
        &self,
        event: &Event,
        options: &[MenuOption],
        max_orders: u32,
    ) -> Result<TemplatedMessage, MessageError> {
        debug!(option_count = options.len(), %max_orders, "ready_to_order_without_email: called");
        let variables = ready_to_order_variables(event, options, max_orders);
        self.build(
            TemplateKind::ReadyToOrderWithoutEmail { max_orders },
            options.len(),
            variables,
        )
        .await
    }

    /// Picker of events an attendee can register for
    ///
    /// Variables: name, name per event (list item title and id).
    pub async fn event_registration(&self, events: &[EventOption]) -> Result<TemplatedMessage, MessageError> {
        debug!(event_count = events.len(), "event_registration: called");
        let variables = ContentVariables::from_values(
            events
                .iter()
                .flat_map(|e| [e.name.as_str(), e.name.as_str()]),
        );

        self.build(TemplateKind::EventRegistration, events.len(), variables)
            .await
    }

    async fn build(
        &self,
        kind: TemplateKind,
        count: usize,
        variables: ContentVariables,
    ) -> Result<TemplatedMessage, MessageError> {
        let templates = self.resolver.fetch_templates().await?;
        let name = self.resolver.template_name(kind, count);
        let template = require_template(&templates, &name)?;
        debug!(%name, sid = %template.sid, variable_count = variables.len(), "build: resolved");

        Ok(TemplatedMessage {
            content_sid: template.sid.clone(),
            content_variables: variables.to_json()?,
        })
    }
}

fn ready_to_order_variables(event: &Event, options: &[MenuOption], max_orders: u32) -> ContentVariables {
    let mut variables = ContentVariables::new();
    variables
        .push(max_orders)
        .push(mode_to_beverage(&event.selection.mode, true))
        .extend_options(options);
    variables
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::content::Template;
    use crate::content::client::mock::MockContentSource;
    use crate::domain::{Mode, Selection};

    fn builder(templates: Vec<Template>) -> MessageBuilder {
        let source = Arc::new(MockContentSource::new(templates));
        MessageBuilder::new(TemplateResolver::new(source, "acme"))
    }

    fn option(title: &str, short: &str, description: &str) -> MenuOption {
        MenuOption {
            title: title.to_string(),
            short_title: short.to_string(),
            description: description.to_string(),
        }
    }

    fn menu() -> Vec<MenuOption> {
        vec![
            option("Latte", "latte", "Espresso with milk"),
            option("Mocha", "mocha", "Chocolate latte"),
        ]
    }

    fn event(mode: &str) -> Event {
        Event {
            name: "Signal".to_string(),
            selection: Selection {
                mode: Mode::new(mode),
                items: menu(),
            },
        }
    }

    #[tokio::test]
    async fn test_wrong_order() {
        let builder = builder(vec![Template::new("acme_wrong_order_2", "HX1")]);
        let msg = builder.wrong_order("pizza", &menu()).await.unwrap();

        assert_eq!(msg.content_sid, "HX1");
        assert_eq!(
            msg.content_variables,
            r#"{"0":"pizza","1":"Latte","2":"latte","3":"Espresso with milk","4":"Mocha","5":"mocha","6":"Chocolate latte"}"#
        );
    }

    #[tokio::test]
    async fn test_wrong_order_count_mismatch_is_not_found() {
        let builder = builder(vec![Template::new("acme_wrong_order_3", "HX1")]);
        let err = builder.wrong_order("pizza", &menu()).await.unwrap_err();
        assert_eq!(err.to_string(), "Template acme_wrong_order_2 not found");
    }

    #[tokio::test]
    async fn test_help_uses_plural_beverage_and_event_items() {
        let builder = builder(vec![Template::new("acme_help_privacy_2", "HX2")]);
        let msg = builder.help(&event("smoothie")).await.unwrap();

        assert_eq!(msg.content_sid, "HX2");
        assert!(msg.content_variables.starts_with(r#"{"0":"smoothies","1":"Latte""#));
    }

    #[tokio::test]
    async fn test_help_missing_template_fails_descriptively() {
        let builder = builder(vec![]);
        let err = builder.help(&event("coffee")).await.unwrap_err();
        assert_eq!(err.template_name(), Some("acme_help_privacy_2"));
    }

    #[tokio::test]
    async fn test_ready_to_order_limited() {
        let builder = builder(vec![
            Template::new("acme_ready_to_order_2", "HX3"),
            Template::new("acme_ready_to_order_limitless_2", "HX4"),
        ]);
        let msg = builder.ready_to_order(&event("coffee"), &menu(), 3).await.unwrap();

        assert_eq!(msg.content_sid, "HX3");
        assert!(msg.content_variables.starts_with(r#"{"0":3,"1":"coffee","2":"Latte""#));
    }

    #[tokio::test]
    async fn test_ready_to_order_limitless() {
        let builder = builder(vec![
            Template::new("acme_ready_to_order_2", "HX3"),
            Template::new("acme_ready_to_order_limitless_2", "HX4"),
        ]);
        let msg = builder.ready_to_order(&event("coffee"), &menu(), 50).await.unwrap();
        assert_eq!(msg.content_sid, "HX4");
    }

    #[tokio::test]
    async fn test_ready_to_order_without_email() {
        let builder = builder(vec![Template::new("acme_ready_to_order_limitless_without_email_2", "HX5")]);
        let msg = builder
            .ready_to_order_without_email(&event("smoothie"), &menu(), 99)
            .await
            .unwrap();

        assert_eq!(msg.content_sid, "HX5");
        assert!(msg.content_variables.starts_with(r#"{"0":99,"1":"smoothies""#));
    }

    #[tokio::test]
    async fn test_event_registration_duplicates_names() {
        let builder = builder(vec![Template::new("acme_event_registration_2", "HX6")]);
        let events = vec![
            EventOption { name: "Signal".to_string() },
            EventOption { name: "SIGNAL London".to_string() },
        ];
        let msg = builder.event_registration(&events).await.unwrap();

        assert_eq!(msg.content_sid, "HX6");
        assert_eq!(
            msg.content_variables,
            r#"{"0":"Signal","1":"Signal","2":"SIGNAL London","3":"SIGNAL London"}"#
        );
    }

    #[tokio::test]
    async fn test_event_registration_missing_template_fails_descriptively() {
        let builder = builder(vec![]);
        let err = builder.event_registration(&[]).await.unwrap_err();
        assert_eq!(err.template_name(), Some("acme_event_registration_0"));
    }

    #[tokio::test]
    async fn test_fetch_failure_propagates() {
        let source = Arc::new(MockContentSource::failing());
        let builder = MessageBuilder::new(TemplateResolver::new(source, "acme"));
        let err = builder.wrong_order("pizza", &menu()).await.unwrap_err();
        assert!(matches!(err, MessageError::FetchFailed));
    }

    #[test]
    fn test_templated_message_serializes_camel_case() {
        let msg = TemplatedMessage {
            content_sid: "HX1".to_string(),
            content_variables: "{}".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&msg).unwrap(),
            r#"{"contentSid":"HX1","contentVariables":"{}"}"#
        );
    }
}
