//! Chat message form submission.
//!
//! ERROR HANDLING
//! ==============
//! Blank input is dropped silently. A server rejection is shown verbatim in a
//! blocking alert and the input is kept so the user can retry. Transport or
//! decode failures are logged and shown as a generic alert.
//!
//! Overlapping submissions are not prevented; each one posts independently.

#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;

use std::rc::Rc;

use super::chat::ChatRefresh;
use crate::net::api::ChatTransport;
use crate::net::types::SendRequest;
use crate::util::widget::Dialogs;

/// The message form and its content input.
pub trait Composer {
    /// Current raw value of the content input.
    fn content(&self) -> String;
    fn clear(&self);
    /// The form's `data-team-id`, when present.
    fn team_id(&self) -> Option<String>;
}

/// Supplies the anti-forgery token, read fresh on every send.
pub trait CsrfSource {
    fn csrf_token(&self) -> Option<String>;
}

impl<F> CsrfSource for F
where
    F: Fn() -> Option<String>,
{
    fn csrf_token(&self) -> Option<String> {
        self()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was blank after trimming; nothing was sent.
    Blank,
    /// The server accepted the message.
    Sent,
    /// The server answered `success: false` with this reason.
    Rejected(String),
    /// The request or its response failed.
    Failed,
}

pub struct ChatSender<T, C, X, D, R> {
    transport: Rc<T>,
    composer: C,
    csrf: X,
    dialogs: D,
    refresh: Rc<R>,
    failure_text: String,
}

impl<T, C, X, D, R> ChatSender<T, C, X, D, R>
where
    T: ChatTransport,
    C: Composer,
    X: CsrfSource,
    D: Dialogs,
    R: ChatRefresh,
{
    pub fn new(transport: Rc<T>, composer: C, csrf: X, dialogs: D, refresh: Rc<R>, failure_text: impl Into<String>) -> Self {
        Self { transport, composer, csrf, dialogs, refresh, failure_text: failure_text.into() }
    }

    /// Handle one form submission.
    pub async fn submit(&self) -> SubmitOutcome {
        let Some(request) = SendRequest::from_input(&self.composer.content(), self.composer.team_id()) else {
            return SubmitOutcome::Blank;
        };
        let csrf = self.csrf.csrf_token();
        match self.transport.send_message(&request, csrf.as_deref()).await {
            Ok(resp) if resp.success => {
                self.composer.clear();
                self.refresh.refresh().await;
                SubmitOutcome::Sent
            }
            Ok(resp) => {
                let reason = resp.failure_reason().to_owned();
                self.dialogs.alert(&format!("{}: {reason}", self.failure_text));
                SubmitOutcome::Rejected(reason)
            }
            Err(err) => {
                log::error!("error sending message: {err}");
                self.dialogs.alert(&self.failure_text);
                SubmitOutcome::Failed
            }
        }
    }
}
