//! Bootstrap `Alert`/`Toast` bindings.
//!
//! The page loads Bootstrap's bundle as a global script, so the classes are
//! reached through the `bootstrap` namespace. Construction is `catch`ed: a page
//! without the bundle logs a warning instead of trapping.

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::util::widget::Dismissible;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap, js_name = Alert)]
    type BsAlert;

    #[wasm_bindgen(constructor, catch, js_namespace = bootstrap, js_class = "Alert")]
    fn new(element: &Element) -> Result<BsAlert, JsValue>;

    #[wasm_bindgen(method, structural)]
    fn close(this: &BsAlert);

    #[wasm_bindgen(js_namespace = bootstrap, js_name = Toast)]
    type BsToast;

    #[wasm_bindgen(constructor, catch, js_namespace = bootstrap, js_class = "Toast")]
    fn new(element: &Element) -> Result<BsToast, JsValue>;

    #[wasm_bindgen(method, structural)]
    fn show(this: &BsToast);

    #[wasm_bindgen(method, structural)]
    fn hide(this: &BsToast);
}

/// A server-rendered `.alert` element.
pub struct BootstrapAlert {
    element: Element,
}

impl BootstrapAlert {
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

impl Dismissible for BootstrapAlert {
    // Alerts arrive already visible.
    fn show(&self) {}

    fn close(&self) {
        match BsAlert::new(&self.element) {
            Ok(alert) => alert.close(),
            Err(err) => log::warn!("bootstrap.Alert unavailable: {err:?}"),
        }
    }
}

/// A toast element wrapped in a Bootstrap `Toast` instance.
pub struct BootstrapToast {
    toast: BsToast,
}

impl BootstrapToast {
    pub fn attach(element: &Element) -> Option<Self> {
        match BsToast::new(element) {
            Ok(toast) => Some(Self { toast }),
            Err(err) => {
                log::warn!("bootstrap.Toast unavailable: {err:?}");
                None
            }
        }
    }
}

impl Dismissible for BootstrapToast {
    fn show(&self) {
        self.toast.show();
    }

    fn close(&self) {
        self.toast.hide();
    }
}
