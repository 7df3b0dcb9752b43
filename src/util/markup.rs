//! HTML fragments for chat messages and toasts.
//!
//! TRADE-OFFS
//! ==========
//! Fragments are built as strings and inserted with `innerHTML`, matching the
//! server templates' class names. Text fields pass through `escape_html`
//! unless the page opts into `MarkupPolicy::Trusted`.

#[cfg(test)]
#[path = "markup_test.rs"]
mod markup_test;

use crate::config::MarkupPolicy;
use crate::net::types::ChatMessage;

pub const TOAST_CONTAINER_ID: &str = "toast-container";
pub const TOAST_CONTAINER_CLASS: &str = "toast-container position-fixed bottom-0 end-0 p-3";
pub const TOAST_CLASS: &str = "toast align-items-center text-white bg-success border-0";
const EDITED_MARKER: &str = "(изменено)";

/// A rendered chat message: the wrapper's class list plus its inner markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageView {
    pub class_name: String,
    pub inner_html: String,
}

impl MessageView {
    pub fn is_own(&self) -> bool {
        self.class_name.split_whitespace().any(|c| c == "own")
    }
}

/// Escape the five HTML-significant characters.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn text(raw: &str, policy: MarkupPolicy) -> String {
    match policy {
        MarkupPolicy::Escape => escape_html(raw),
        MarkupPolicy::Trusted => raw.to_owned(),
    }
}

/// Build the view for one message. `current_user` decides own/other styling.
pub fn message_view(message: &ChatMessage, current_user: &str, policy: MarkupPolicy) -> MessageView {
    let side = if message.author == current_user { "own" } else { "other" };
    let edited = if message.is_edited {
        format!(" <span class=\"message-edited\">{EDITED_MARKER}</span>")
    } else {
        String::new()
    };
    let inner_html = format!(
        "<div class=\"message-author\">{}</div>\
         <div class=\"message-content\">{}</div>\
         <div class=\"message-time\">{}{edited}</div>",
        text(&message.author, policy),
        text(&message.content, policy),
        text(&message.created_at, policy),
    );
    MessageView { class_name: format!("chat-message {side}"), inner_html }
}

/// Inner markup for a dismissible success toast.
pub fn toast_markup(message: &str, policy: MarkupPolicy) -> String {
    format!(
        "<div class=\"d-flex\">\
         <div class=\"toast-body\">{}</div>\
         <button type=\"button\" class=\"btn-close btn-close-white me-2 m-auto\" data-bs-dismiss=\"toast\"></button>\
         </div>",
        text(message, policy)
    )
}
