//! Team chat polling and rendering.
//!
//! DESIGN
//! ======
//! `ChatPoller` fetches the full message list for the page's team and hands it
//! to a `MessageSink`. The sink owns rendering and always replaces the whole
//! list, so a push-based source could feed the same sink unchanged.
//!
//! TRADE-OFFS
//! ==========
//! Timer ticks and post-send refreshes are not serialized. Responses render in
//! arrival order, so a slow tick can briefly overwrite a fresher list; the next
//! tick corrects it.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use futures::FutureExt;
use futures::future::LocalBoxFuture;

use crate::config::MarkupPolicy;
use crate::net::api::ChatTransport;
use crate::net::types::ChatMessage;
use crate::util::markup::{MessageView, message_view};
use crate::util::timer::Scheduler;

/// The chat container: source of the team id that scopes fetches.
pub trait ChatSurface {
    /// Team id from the container, or `None` when the container or its
    /// `data-team-id` is missing or empty.
    fn team_id(&self) -> Option<String>;
}

/// Receives each fetched message list in full.
pub trait MessageSink {
    fn on_messages(&self, messages: Vec<ChatMessage>);
}

/// The element that displays rendered messages.
pub trait MessageList {
    /// Drop all existing children and append `views` in order.
    fn replace_all(&self, views: &[MessageView]);
    fn scroll_to_bottom(&self);
}

/// `MessageSink` that renders into a `MessageList`.
pub struct MessageRenderer<L> {
    list: L,
    current_user: String,
    policy: MarkupPolicy,
}

impl<L: MessageList> MessageRenderer<L> {
    pub fn new(list: L, current_user: impl Into<String>, policy: MarkupPolicy) -> Self {
        Self { list, current_user: current_user.into(), policy }
    }
}

impl<L: MessageList> MessageSink for MessageRenderer<L> {
    fn on_messages(&self, messages: Vec<ChatMessage>) {
        let views = messages
            .iter()
            .map(|m| message_view(m, &self.current_user, self.policy))
            .collect::<Vec<_>>();
        self.list.replace_all(&views);
        self.list.scroll_to_bottom();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollOutcome {
    /// No chat container or team id on the page.
    Skipped,
    /// The list was replaced with this many messages.
    Rendered(usize),
    /// The request failed; logged only.
    Failed,
}

/// Something that can re-fetch the chat on demand.
pub trait ChatRefresh {
    fn refresh(&self) -> impl Future<Output = ()>;
}

pub struct ChatPoller<T, S, K> {
    transport: Rc<T>,
    surface: S,
    sink: K,
}

impl<T, S, K> ChatPoller<T, S, K>
where
    T: ChatTransport,
    S: ChatSurface,
    K: MessageSink,
{
    pub fn new(transport: Rc<T>, surface: S, sink: K) -> Self {
        Self { transport, surface, sink }
    }

    /// Fetch the current messages and replace the rendered list.
    pub async fn update_chat(&self) -> PollOutcome {
        let Some(team_id) = self.surface.team_id() else {
            log::debug!("chat poll skipped: no team id on page");
            return PollOutcome::Skipped;
        };
        match self.transport.fetch_messages(&team_id).await {
            Ok(messages) => {
                let count = messages.len();
                self.sink.on_messages(messages);
                PollOutcome::Rendered(count)
            }
            Err(err) => {
                log::error!("error updating chat: {err}");
                PollOutcome::Failed
            }
        }
    }
}

impl<T, S, K> ChatRefresh for ChatPoller<T, S, K>
where
    T: ChatTransport,
    S: ChatSurface,
    K: MessageSink,
{
    async fn refresh(&self) {
        self.update_chat().await;
    }
}

/// Run `poller.refresh()` every `period` for the lifetime of the page. Each
/// tick's future is handed to `spawn`; ticks never wait for one another.
pub fn schedule_polling<P, F>(poller: Rc<P>, period: Duration, scheduler: &impl Scheduler, spawn: F)
where
    P: ChatRefresh + 'static,
    F: Fn(LocalBoxFuture<'static, ()>) + 'static,
{
    scheduler.every(
        period,
        Box::new(move || {
            let poller = Rc::clone(&poller);
            spawn(async move { poller.refresh().await }.boxed_local());
        }),
    );
}
