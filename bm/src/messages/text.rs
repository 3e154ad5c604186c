//! Plain-text messages
//!
//! Pure formatting functions; the returned strings are sent to attendees verbatim.

use std::fmt::Display;

use crate::domain::{Event, Mode};

/// Noun for what an event serves: "smoothie"/"smoothies" for smoothie mode, otherwise "coffee"
pub fn mode_to_beverage(mode: &Mode, plural: bool) -> &'static str {
    match (mode.is_smoothie(), plural) {
        (true, true) => "smoothies",
        (true, false) => "smoothie",
        (false, _) => "coffee",
    }
}

/// Upper-case the first character and lower-case the rest
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

pub fn order_created(product: &str, order_number: impl Display, event: &Event) -> String {
    format!(
        "Thanks for ordering a *{product}* from the Twilio-powered {} Bar.\n\n\
         Your order number is *#{order_number}*.\n\n\
         We'll text you back when the order is ready -- or send \"queue\" to determine your current position.\n\
         Send  \"change order to <new order>\" to change your existing order or \"cancel order\" to cancel it.",
        capitalize_first(event.selection.mode.as_str())
    )
}

/// Sent when staff cancel an order
pub fn order_cancelled(product: &str, order_number: impl Display) -> String {
    format!(
        "Your {product} order has been cancelled. Please check with our staff if you think something is wrong. \
         Your order number was #{order_number}."
    )
}

pub fn order_ready(product: &str, order_number: impl Display, pickup_location: &str) -> String {
    format!(
        "Your {product} is ready. You can skip the queue and collect it at {pickup_location} right away. \
         Ask for order number #{order_number}."
    )
}

pub fn order_ready_reminder(product: &str, order_number: impl Display, pickup_location: &str) -> String {
    format!(
        "Heya! Don't forget your {product}. You can skip the queue and collect it at {pickup_location}. \
         Ask for order number #{order_number}."
    )
}

/// Reply to a new order while one is still open
pub fn existing_order(product: &str, order_number: impl Display) -> String {
    format!(
        "We're still making you a {product}.\n\n\
         If you'd like to change or modify your order reply with 'Change order to {{your new choice}}'. \n\n\
         Check order #{order_number} with our staff if you think there's something wrong"
    )
}

/// Confirmation after the attendee cancels their own order
pub fn cancel_order(product: &str, order_number: impl Display) -> String {
    format!("Your order #{order_number} for {product} has been cancelled successfully.")
}

pub fn no_open_order() -> String {
    "It seems like you have no open orders at the moment. Simply message us the name of the beverage you would like."
        .to_string()
}

pub fn system_offline(event: &Event) -> String {
    let beverages = mode_to_beverage(&event.selection.mode, true);
    format!("No more {beverages} 😱\nIt seems like we are out of  {beverages} for today. Have a great day!")
}

pub fn queue_position(queue_position: usize) -> String {
    format!("There are currently {queue_position} orders before yours.")
}

/// Generic fallback for failures the caller cannot explain to the attendee
pub fn oops() -> String {
    "Oops, something went wrong! Talk to someone from Twilio and see if they can help you.".to_string()
}

pub fn invalid_email() -> String {
    "Invalid email address. Please reply with a valid business email address.".to_string()
}

pub fn sent_email() -> String {
    "We have sent you an email with a verification code. Please reply with the code we sent to your email address.\n\
     If you did not receive the email, please check your spam folder or enter a new email address."
        .to_string()
}

pub fn invalid_verification_code() -> String {
    "Invalid verification code. Please reply with the correct code.".to_string()
}

/// First message of a conversation
///
/// An empty custom message counts as no custom message.
pub fn welcome(mode: &Mode, custom_message: Option<&str>, collect_leads: bool) -> String {
    let greeting = match custom_message.filter(|m| !m.is_empty()) {
        Some(message) => message.to_string(),
        None => format!(
            "Welcome at the Twilio Booth! Are you ready for a {} on us? 🎉",
            mode_to_beverage(mode, false)
        ),
    };
    let lead_suffix = if collect_leads {
        "\nReply with your business email address to get started. We will then send you an email to verify your address."
    } else {
        ""
    };
    format!("{greeting}\n{lead_suffix}")
}

/// Greeting for an attendee returning at a new event
pub fn welcome_back(mode: &Mode, event_name: &str, custom_message: Option<&str>) -> String {
    let suffix = match custom_message.filter(|m| !m.is_empty()) {
        Some(message) => message.to_string(),
        None => format!("\nAre you ready for a {} on us?", mode_to_beverage(mode, false)),
    };
    format!("We're glad to see you again. You're now at {event_name}.\n{suffix}")
}

pub fn data_policy(mode: &Mode) -> String {
    format!(
        "We only use your phone number to notify you about our {mode} service and redact all the messages & \
         phone numbers afterward."
    )
}

pub fn max_orders() -> String {
    "It seems like you've reached the maximum number of orders we allowed at this event. Sorry.".to_string()
}

pub fn no_active_events() -> String {
    "Oh no! 😕 It seems like we are not serving at the moment. Please check back later. 🙂".to_string()
}

pub fn paused_event() -> String {
    "Hey there! We've paused orders for now. Please check back later.".to_string()
}

pub fn changed_order(order_number: impl Display, new_product: &str) -> String {
    format!("Your order #{order_number} has been changed. \nWe'll now make you a {new_product}.")
}
