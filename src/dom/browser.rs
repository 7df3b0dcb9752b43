//! Native browser capabilities: dialogs, clipboard, and inline styles.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, HtmlElement};

use crate::state::clipboard::{Clipboard, ClipboardError};
use crate::util::widget::{Dialogs, Reveal};

/// `window.alert` / `window.confirm`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowDialogs;

impl Dialogs for WindowDialogs {
    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.alert_with_message(message) {
                log::warn!("alert failed: {err:?}");
            }
        }
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

/// `navigator.clipboard.writeText`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebClipboard;

impl Clipboard for WebClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let clipboard = web_sys::window()
            .map(|w| w.navigator().clipboard())
            .ok_or(ClipboardError::Unavailable)?;
        JsFuture::from(clipboard.write_text(text))
            .await
            .map_err(|err| ClipboardError::Rejected(format!("{err:?}")))?;
        Ok(())
    }
}

/// A `.fade-in` element; reveal clears its initial offset and opacity.
pub struct FadeElement {
    element: Element,
}

impl FadeElement {
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

const REVEALED_STYLE: [(&str, &str); 2] = [("opacity", "1"), ("transform", "translateY(0)")];

impl Reveal for FadeElement {
    fn reveal(&self) {
        if let Some(html) = self.element.dyn_ref::<HtmlElement>() {
            let style = html.style();
            for (property, value) in REVEALED_STYLE {
                if let Err(err) = style.set_property(property, value) {
                    log::warn!("failed to set {property}: {err:?}");
                }
            }
            return;
        }
        // SVG and other non-HTML elements: append to the inline style attribute.
        let mut inline = self.element.get_attribute("style").unwrap_or_default();
        for (property, value) in REVEALED_STYLE {
            inline.push_str(&format!(";{property}:{value}"));
        }
        if let Err(err) = self.element.set_attribute("style", &inline) {
            log::warn!("failed to reveal element: {err:?}");
        }
    }
}
