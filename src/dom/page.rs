//! Document lookups and event wiring shared by the DOM adapters.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, EventTarget};

use crate::config::PageConfig;

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("invalid selector: {selector}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// `content` of `<meta name="{name}">`.
pub fn meta_content(document: &Document, name: &str) -> Option<String> {
    document
        .query_selector(&format!("meta[name=\"{name}\"]"))
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"))
}

pub fn read_config(document: &Document) -> PageConfig {
    PageConfig::from_meta(|name| meta_content(document, name))
}

/// Raw `document.cookie` string, empty when unavailable.
pub fn cookie_string(document: &Document) -> String {
    document
        .dyn_ref::<web_sys::HtmlDocument>()
        .and_then(|html| html.cookie().ok())
        .unwrap_or_default()
}

/// Attach `handler` for `event` on `target` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    if let Err(err) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("failed to attach {event} listener: {err:?}");
    }
    closure.forget();
}
