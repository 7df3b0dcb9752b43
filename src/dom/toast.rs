//! `ToastSurface` over `#toast-container`.

use web_sys::{Document, Element};

use super::bootstrap::BootstrapToast;
use super::page::listen;
use crate::state::toast::ToastSurface;
use crate::util::markup::{TOAST_CLASS, TOAST_CONTAINER_CLASS, TOAST_CONTAINER_ID};

const HIDDEN_EVENT: &str = "hidden.bs.toast";

#[derive(Clone)]
pub struct DomToastSurface {
    document: Document,
}

impl DomToastSurface {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn container(&self) -> Option<Element> {
        self.document.get_element_by_id(TOAST_CONTAINER_ID)
    }
}

impl ToastSurface for DomToastSurface {
    type Toast = BootstrapToast;

    fn has_container(&self) -> bool {
        self.container().is_some()
    }

    fn create_container(&self) {
        let Some(body) = self.document.body() else {
            log::warn!("no <body> for toast container");
            return;
        };
        let Ok(container) = self.document.create_element("div") else {
            log::warn!("failed to create toast container");
            return;
        };
        container.set_id(TOAST_CONTAINER_ID);
        container.set_class_name(TOAST_CONTAINER_CLASS);
        if let Err(err) = body.append_child(&container) {
            log::warn!("failed to mount toast container: {err:?}");
        }
    }

    fn append_toast(&self, id: &str, markup: &str) -> Option<BootstrapToast> {
        let container = self.container()?;
        let toast = self.document.create_element("div").ok()?;
        toast.set_id(id);
        toast.set_class_name(TOAST_CLASS);
        if let Err(err) = toast.set_attribute("role", "alert") {
            log::warn!("failed to set toast role: {err:?}");
        }
        toast.set_inner_html(markup);
        container.append_child(&toast).ok()?;
        BootstrapToast::attach(&toast)
    }

    fn on_hidden(&self, id: &str, callback: Box<dyn FnOnce()>) {
        let Some(toast) = self.document.get_element_by_id(id) else {
            return;
        };
        let mut callback = Some(callback);
        listen(&toast, HIDDEN_EVENT, move |_| {
            if let Some(callback) = callback.take() {
                callback();
            }
        });
    }

    fn remove_toast(&self, id: &str) {
        if let Some(toast) = self.document.get_element_by_id(id) {
            toast.remove();
        }
    }
}
