//! DOM adapters for the chat controllers.
//!
//! Elements are looked up on every call rather than cached, so a page that
//! swaps its chat markup keeps working.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlTextAreaElement};

use crate::state::chat::{ChatSurface, MessageList};
use crate::state::composer::Composer;
use crate::util::markup::MessageView;

pub const CHAT_CONTAINER_ID: &str = "chat-container";
pub const MESSAGES_CONTAINER_ID: &str = "messages-container";
pub const MESSAGE_FORM_ID: &str = "message-form";
pub const MESSAGE_INPUT_ID: &str = "message-content";
const TEAM_ID_ATTR: &str = "data-team-id";

/// `#chat-container[data-team-id]`.
#[derive(Clone)]
pub struct DomChatSurface {
    document: Document,
}

impl DomChatSurface {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl ChatSurface for DomChatSurface {
    fn team_id(&self) -> Option<String> {
        self.document
            .get_element_by_id(CHAT_CONTAINER_ID)?
            .get_attribute(TEAM_ID_ATTR)
            .filter(|id| !id.is_empty())
    }
}

/// `#messages-container`. Missing container makes rendering a no-op.
#[derive(Clone)]
pub struct DomMessageList {
    document: Document,
}

impl DomMessageList {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn container(&self) -> Option<Element> {
        self.document.get_element_by_id(MESSAGES_CONTAINER_ID)
    }
}

impl MessageList for DomMessageList {
    fn replace_all(&self, views: &[MessageView]) {
        let Some(container) = self.container() else {
            return;
        };
        container.set_inner_html("");
        for view in views {
            let Ok(div) = self.document.create_element("div") else {
                log::warn!("failed to create message element");
                continue;
            };
            div.set_class_name(&view.class_name);
            div.set_inner_html(&view.inner_html);
            if let Err(err) = container.append_child(&div) {
                log::warn!("failed to append message: {err:?}");
            }
        }
    }

    fn scroll_to_bottom(&self) {
        if let Some(container) = self.container() {
            container.set_scroll_top(container.scroll_height());
        }
    }
}

/// `#message-form` with its `#message-content` input or textarea.
#[derive(Clone)]
pub struct DomComposer {
    document: Document,
    form: Element,
}

impl DomComposer {
    pub fn new(document: Document, form: Element) -> Self {
        Self { document, form }
    }

    fn input(&self) -> Option<Element> {
        self.document.get_element_by_id(MESSAGE_INPUT_ID)
    }
}

impl Composer for DomComposer {
    fn content(&self) -> String {
        let Some(input) = self.input() else {
            return String::new();
        };
        if let Some(field) = input.dyn_ref::<HtmlInputElement>() {
            return field.value();
        }
        input
            .dyn_ref::<HtmlTextAreaElement>()
            .map(HtmlTextAreaElement::value)
            .unwrap_or_default()
    }

    fn clear(&self) {
        let Some(input) = self.input() else {
            return;
        };
        if let Some(field) = input.dyn_ref::<HtmlInputElement>() {
            field.set_value("");
        } else if let Some(field) = input.dyn_ref::<HtmlTextAreaElement>() {
            field.set_value("");
        }
    }

    fn team_id(&self) -> Option<String> {
        self.form.get_attribute(TEAM_ID_ATTR)
    }
}
