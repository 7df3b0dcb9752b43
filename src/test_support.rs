//! Fakes shared by controller tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use crate::net::api::{ApiError, ChatTransport};
use crate::net::types::{ChatMessage, SendRequest, SendResponse};
use crate::state::toast::ToastSurface;
use crate::util::timer::Scheduler;
use crate::util::widget::{Dialogs, Dismissible, Reveal};

// =============================================================
// Virtual clock
// =============================================================

enum Task {
    Once(Box<dyn FnOnce()>),
    Repeat(Box<dyn FnMut()>, Duration),
}

struct Timer {
    due: Duration,
    seq: u64,
    task: Task,
}

/// Deterministic `Scheduler`: tasks run only when `advance` passes their due time.
#[derive(Default)]
pub struct VirtualScheduler {
    now: Cell<Duration>,
    next_seq: Cell<u64>,
    timers: RefCell<Vec<Timer>>,
}

impl VirtualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now.get()
    }

    pub fn pending(&self) -> usize {
        self.timers.borrow().len()
    }

    fn push(&self, due: Duration, task: Task) {
        let seq = self.next_seq.get();
        self.next_seq.set(seq + 1);
        self.timers.borrow_mut().push(Timer { due, seq, task });
    }

    fn pop_due(&self, until: Duration) -> Option<Timer> {
        let mut timers = self.timers.borrow_mut();
        let index = timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= until)
            .min_by_key(|(_, t)| (t.due, t.seq))
            .map(|(i, _)| i)?;
        Some(timers.remove(index))
    }

    /// Move the clock forward by `by`, running every task that falls due in
    /// due-time order.
    pub fn advance(&self, by: Duration) {
        let target = self.now.get() + by;
        while let Some(timer) = self.pop_due(target) {
            self.now.set(timer.due);
            match timer.task {
                Task::Once(task) => task(),
                Task::Repeat(mut task, period) => {
                    task();
                    self.push(timer.due + period, Task::Repeat(task, period));
                }
            }
        }
        self.now.set(target);
    }
}

impl Scheduler for VirtualScheduler {
    fn after(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        self.push(self.now.get() + delay, Task::Once(task));
    }

    fn every(&self, period: Duration, task: Box<dyn FnMut()>) {
        self.push(self.now.get() + period, Task::Repeat(task, period));
    }
}

// =============================================================
// Widgets
// =============================================================

/// Counts toolkit calls; clones share counters.
#[derive(Clone, Default)]
pub struct CountingWidget {
    pub shows: Rc<Cell<u32>>,
    pub closes: Rc<Cell<u32>>,
    pub reveals: Rc<Cell<u32>>,
}

impl Dismissible for CountingWidget {
    fn show(&self) {
        self.shows.set(self.shows.get() + 1);
    }

    fn close(&self) {
        self.closes.set(self.closes.get() + 1);
    }
}

impl Reveal for CountingWidget {
    fn reveal(&self) {
        self.reveals.set(self.reveals.get() + 1);
    }
}

/// Records dialog prompts and answers `confirm` with a fixed value.
#[derive(Clone, Default)]
pub struct RecordingDialogs {
    pub alerts: Rc<RefCell<Vec<String>>>,
    pub confirms: Rc<RefCell<Vec<String>>>,
    pub accept: Rc<Cell<bool>>,
}

impl RecordingDialogs {
    pub fn answering(accept: bool) -> Self {
        let dialogs = Self::default();
        dialogs.accept.set(accept);
        dialogs
    }
}

impl Dialogs for RecordingDialogs {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_owned());
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_owned());
        self.accept.get()
    }
}

// =============================================================
// Toasts
// =============================================================

#[derive(Default)]
pub struct ToastPage {
    pub containers_created: Cell<u32>,
    pub has_container: Cell<bool>,
    pub toasts: RefCell<Vec<(String, String)>>,
    pub hidden_callbacks: RefCell<HashMap<String, Box<dyn FnOnce()>>>,
    pub widgets: RefCell<HashMap<String, CountingWidget>>,
}

#[derive(Clone, Default)]
pub struct FakeToastSurface {
    pub page: Rc<ToastPage>,
}

impl FakeToastSurface {
    pub fn without_container() -> Self {
        Self::default()
    }

    pub fn with_container() -> Self {
        let surface = Self::default();
        surface.page.has_container.set(true);
        surface
    }

    pub fn hide(&self, id: &str) {
        let callback = self.page.hidden_callbacks.borrow_mut().remove(id);
        if let Some(callback) = callback {
            callback();
        }
    }

    pub fn toast_ids(&self) -> Vec<String> {
        self.page.toasts.borrow().iter().map(|(id, _)| id.clone()).collect()
    }
}

impl ToastSurface for FakeToastSurface {
    type Toast = CountingWidget;

    fn has_container(&self) -> bool {
        self.page.has_container.get()
    }

    fn create_container(&self) {
        self.page.containers_created.set(self.page.containers_created.get() + 1);
        self.page.has_container.set(true);
    }

    fn append_toast(&self, id: &str, markup: &str) -> Option<CountingWidget> {
        if !self.page.has_container.get() {
            return None;
        }
        self.page.toasts.borrow_mut().push((id.to_owned(), markup.to_owned()));
        let widget = CountingWidget::default();
        self.page.widgets.borrow_mut().insert(id.to_owned(), widget.clone());
        Some(widget)
    }

    fn on_hidden(&self, id: &str, callback: Box<dyn FnOnce()>) {
        self.page.hidden_callbacks.borrow_mut().insert(id.to_owned(), callback);
    }

    fn remove_toast(&self, id: &str) {
        self.page.toasts.borrow_mut().retain(|(t, _)| t != id);
    }
}

// =============================================================
// Transport
// =============================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransportCall {
    Fetch { team_id: String },
    Send { request: SendRequest, csrf: Option<String> },
}

/// In-memory `ChatTransport` with scripted replies.
pub struct FakeTransport {
    pub calls: RefCell<Vec<TransportCall>>,
    pub fetch_reply: RefCell<Result<Vec<ChatMessage>, ApiError>>,
    pub send_reply: RefCell<Result<SendResponse, ApiError>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fetch_reply: RefCell::new(Ok(Vec::new())),
            send_reply: RefCell::new(Ok(SendResponse { success: true, ..SendResponse::default() })),
        }
    }

    pub fn calls(&self) -> Vec<TransportCall> {
        self.calls.borrow().clone()
    }
}

impl ChatTransport for FakeTransport {
    async fn fetch_messages(&self, team_id: &str) -> Result<Vec<ChatMessage>, ApiError> {
        self.calls
            .borrow_mut()
            .push(TransportCall::Fetch { team_id: team_id.to_owned() });
        self.fetch_reply.borrow().clone()
    }

    async fn send_message(&self, request: &SendRequest, csrf: Option<&str>) -> Result<SendResponse, ApiError> {
        self.calls.borrow_mut().push(TransportCall::Send {
            request: request.clone(),
            csrf: csrf.map(str::to_owned),
        });
        self.send_reply.borrow().clone()
    }
}

pub fn make_message(author: &str, content: &str) -> ChatMessage {
    ChatMessage {
        id: None,
        author: author.to_owned(),
        content: content.to_owned(),
        created_at: "10:00".to_owned(),
        is_edited: false,
    }
}
