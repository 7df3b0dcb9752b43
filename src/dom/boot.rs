//! Page boot: builds the controllers and binds them to the document.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs once per page load. Each behavior is installed independently and is
//! skipped when its elements are absent. The only cross-link is the message
//! form, which triggers the chat poller right after a successful send.

use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

use super::bootstrap::BootstrapAlert;
use super::browser::{FadeElement, WebClipboard, WindowDialogs};
use super::chat::{CHAT_CONTAINER_ID, DomChatSurface, DomComposer, DomMessageList, MESSAGE_FORM_ID};
use super::page::{cookie_string, listen, query_all, read_config};
use super::timer::GlooScheduler;
use super::toast::DomToastSurface;
use crate::config::PageConfig;
use crate::net::api::HttpChatTransport;
use crate::state::chat::{ChatPoller, MessageRenderer, schedule_polling};
use crate::state::clipboard::copy_and_notify;
use crate::state::composer::ChatSender;
use crate::state::guard::confirm_delete;
use crate::state::toast::ToastNotifier;
use crate::state::{alerts, fade};
use crate::util::cookie::read_cookie;

const ALERT_SELECTOR: &str = ".alert";
const FADE_SELECTOR: &str = ".fade-in";
const DELETE_SELECTOR: &str = ".delete-confirm";
const COPY_SELECTOR: &str = ".copy-text";
const COPY_TEXT_ATTR: &str = "data-text";

type DomPoller = ChatPoller<HttpChatTransport, DomChatSurface, MessageRenderer<DomMessageList>>;

/// Install page behavior now if the DOM is parsed, else on `DOMContentLoaded`.
pub fn run() {
    let Some(document) = super::page::document() else {
        log::warn!("no document; page behavior not installed");
        return;
    };
    if document.ready_state() != "loading" {
        install(&document);
        return;
    }
    let mut pending = Some(document.clone());
    listen(&document, "DOMContentLoaded", move |_| {
        if let Some(document) = pending.take() {
            install(&document);
        }
    });
}

fn install(document: &Document) {
    let config = read_config(document);
    let scheduler = GlooScheduler;

    let flash_alerts = query_all(document, ALERT_SELECTOR)
        .into_iter()
        .map(BootstrapAlert::new)
        .collect::<Vec<_>>();
    alerts::schedule_alert_dismissal(flash_alerts, config.alert_dismiss_delay, &scheduler);

    let transport = Rc::new(HttpChatTransport::new(&config));
    let poller = Rc::new(ChatPoller::new(
        Rc::clone(&transport),
        DomChatSurface::new(document.clone()),
        MessageRenderer::new(DomMessageList::new(document.clone()), config.current_user.clone(), config.markup_policy),
    ));
    if document.get_element_by_id(CHAT_CONTAINER_ID).is_some() {
        schedule_polling(Rc::clone(&poller), config.poll_interval, &scheduler, |tick| spawn_local(tick));
    }
    if let Some(form) = document.get_element_by_id(MESSAGE_FORM_ID) {
        install_sender(document, &config, form, transport, poller);
    }

    let fade_elements = query_all(document, FADE_SELECTOR)
        .into_iter()
        .map(FadeElement::new)
        .collect::<Vec<_>>();
    fade::schedule_fade_in(fade_elements, config.fade_step, &scheduler);

    install_delete_guards(document, &config);
    install_copy_buttons(document, &config);
    log::debug!("page behavior installed");
}

fn install_sender(
    document: &Document,
    config: &PageConfig,
    form: Element,
    transport: Rc<HttpChatTransport>,
    poller: Rc<DomPoller>,
) {
    let cookie_doc = document.clone();
    let cookie_name = config.csrf_cookie.clone();
    let csrf = move || read_cookie(&cookie_string(&cookie_doc), &cookie_name);
    let sender = Rc::new(ChatSender::new(
        transport,
        DomComposer::new(document.clone(), form.clone()),
        csrf,
        WindowDialogs,
        poller,
        config.texts.send_failed.clone(),
    ));
    listen(&form, "submit", move |event| {
        event.prevent_default();
        let sender = Rc::clone(&sender);
        spawn_local(async move {
            sender.submit().await;
        });
    });
}

fn install_delete_guards(document: &Document, config: &PageConfig) {
    for control in query_all(document, DELETE_SELECTOR) {
        let prompt = config.texts.delete_prompt.clone();
        listen(&control, "click", move |event| {
            if confirm_delete(&WindowDialogs, &prompt).should_prevent_default() {
                event.prevent_default();
            }
        });
    }
}

fn install_copy_buttons(document: &Document, config: &PageConfig) {
    let controls = query_all(document, COPY_SELECTOR);
    if controls.is_empty() {
        return;
    }
    let notifier = Rc::new(ToastNotifier::new(DomToastSurface::new(document.clone()), config.markup_policy));
    for control in controls {
        let notifier = Rc::clone(&notifier);
        let notice = config.texts.copied_notice.clone();
        let target = control.clone();
        listen(&control, "click", move |_| {
            let text = target.get_attribute(COPY_TEXT_ATTR);
            let notifier = Rc::clone(&notifier);
            let notice = notice.clone();
            spawn_local(async move {
                copy_and_notify(&WebClipboard, text.as_deref(), notifier.as_ref(), &notice).await;
            });
        });
    }
}
