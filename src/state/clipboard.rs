//! Copy-to-clipboard for `.copy-text` controls.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

use std::future::Future;

use super::toast::{ToastNotifier, ToastSurface};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard API unavailable")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

pub trait Clipboard {
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), ClipboardError>>;
}

/// Copy `text` and show `notice` once the write completes.
///
/// A control without `data-text` copies nothing. Write failures are logged and
/// produce no toast.
pub async fn copy_and_notify<C, S>(clipboard: &C, text: Option<&str>, notifier: &ToastNotifier<S>, notice: &str) -> bool
where
    C: Clipboard,
    S: ToastSurface,
{
    let Some(text) = text else {
        log::debug!("copy control has no data-text");
        return false;
    };
    match clipboard.write_text(text).await {
        Ok(()) => {
            notifier.notify(notice);
            true
        }
        Err(err) => {
            log::warn!("copy failed: {err}");
            false
        }
    }
}
