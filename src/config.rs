//! Page configuration read once at boot.
//!
//! DESIGN
//! ======
//! The server template publishes per-page values through `<meta>` tags. They
//! are parsed into a typed `PageConfig` and handed to each controller at
//! construction, so nothing downstream reads the document for settings.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_ALERT_DISMISS_MS: u64 = 5000;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 5000;
pub const DEFAULT_FADE_STEP_MS: u64 = 100;
pub const DEFAULT_CSRF_COOKIE: &str = "csrftoken";
pub const DEFAULT_MESSAGES_ENDPOINT_PREFIX: &str = "/chat/api/messages/";
pub const DEFAULT_SEND_ENDPOINT: &str = "/chat/api/send/";

/// Meta tag carrying the signed-in username.
pub const META_CURRENT_USER: &str = "current-user";

/// How untrusted message and toast text is placed into markup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MarkupPolicy {
    /// HTML-escape every text field before interpolation.
    #[default]
    Escape,
    /// Insert text as-is. Only for servers that sanitize content themselves.
    Trusted,
}

/// User-facing strings shown in dialogs and toasts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiTexts {
    pub delete_prompt: String,
    pub copied_notice: String,
    pub send_failed: String,
}

impl Default for UiTexts {
    fn default() -> Self {
        Self {
            delete_prompt: "Вы уверены, что хотите удалить этот элемент?".to_owned(),
            copied_notice: "Текст скопирован в буфер обмена".to_owned(),
            send_failed: "Ошибка отправки сообщения".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageConfig {
    /// Username of the signed-in user; messages by this author render as own.
    pub current_user: String,
    pub alert_dismiss_delay: Duration,
    pub poll_interval: Duration,
    /// Per-index delay between staggered fade-in reveals.
    pub fade_step: Duration,
    pub csrf_cookie: String,
    pub messages_endpoint_prefix: String,
    pub send_endpoint: String,
    pub markup_policy: MarkupPolicy,
    pub texts: UiTexts,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            current_user: String::new(),
            alert_dismiss_delay: Duration::from_millis(DEFAULT_ALERT_DISMISS_MS),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            fade_step: Duration::from_millis(DEFAULT_FADE_STEP_MS),
            csrf_cookie: DEFAULT_CSRF_COOKIE.to_owned(),
            messages_endpoint_prefix: DEFAULT_MESSAGES_ENDPOINT_PREFIX.to_owned(),
            send_endpoint: DEFAULT_SEND_ENDPOINT.to_owned(),
            markup_policy: MarkupPolicy::Escape,
            texts: UiTexts::default(),
        }
    }
}

impl PageConfig {
    /// Build config from page meta tags.
    ///
    /// `lookup` returns the `content` attribute of `<meta name=...>`, if any.
    /// Only `current-user` is read; timings are fixed by the page contract and
    /// cannot be overridden from markup.
    pub fn from_meta<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::default().with_current_user(lookup(META_CURRENT_USER).unwrap_or_default())
    }

    /// Replace the current user identifier.
    #[must_use]
    pub fn with_current_user(mut self, user: impl Into<String>) -> Self {
        self.current_user = user.into();
        self
    }
}
