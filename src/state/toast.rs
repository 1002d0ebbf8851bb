//! Transient notifications.
//!
//! DESIGN
//! ======
//! `ToastState` is an ordered list; insertion order is display order. A
//! `Toaster` pairs the state holder with a `Scheduler` so auto-dismiss timers
//! run through `gloo-timers` in the browser and a manual clock in tests.
//! Timers are never cancelled: a timer firing for a toast that is already
//! gone does nothing.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use crate::util::constants::{
    TOAST_ERROR_DURATION_MS, TOAST_INFO_DURATION_MS, TOAST_SUCCESS_DURATION_MS, TOAST_WARNING_DURATION_MS,
};

use super::cell::StateCell;

/// Toast severity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
    Warning,
}

impl ToastKind {
    pub fn default_duration_ms(self) -> u32 {
        match self {
            Self::Success => TOAST_SUCCESS_DURATION_MS,
            Self::Error => TOAST_ERROR_DURATION_MS,
            Self::Info => TOAST_INFO_DURATION_MS,
            Self::Warning => TOAST_WARNING_DURATION_MS,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
            Self::Info => "toast toast--info",
            Self::Warning => "toast toast--warning",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "✕",
            Self::Info => "i",
            Self::Warning => "!",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub message: String,
    /// Lifetime; `0` keeps the toast until dismissed.
    pub duration_ms: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub toasts: Vec<ToastMessage>,
}

/// Runs a task once after a delay.
pub trait Scheduler: Clone + 'static {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// Browser timers via `gloo-timers`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    #[cfg(feature = "csr")]
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        gloo_timers::callback::Timeout::new(delay_ms, task).forget();
    }

    #[cfg(not(feature = "csr"))]
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        log::debug!("no timer outside the browser; dropping {delay_ms}ms task");
        drop(task);
    }
}

/// Show and dismiss toasts on a shared `ToastState`.
#[derive(Clone, Copy, Debug)]
pub struct Toaster<C, S> {
    state: C,
    scheduler: S,
}

impl<C, S> Toaster<C, S>
where
    C: StateCell<ToastState>,
    S: Scheduler,
{
    pub fn new(state: C, scheduler: S) -> Self {
        Self { state, scheduler }
    }

    /// Append a toast and arm its auto-dismiss timer. Returns the toast id.
    ///
    /// `duration_ms` overrides the kind's default lifetime.
    pub fn show(&self, message: impl Into<String>, kind: ToastKind, duration_ms: Option<u32>) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        let duration_ms = duration_ms.unwrap_or_else(|| kind.default_duration_ms());
        let toast = ToastMessage { id: id.clone(), kind, message: message.into(), duration_ms };
        self.state.mutate(|s| s.toasts.push(toast));

        if duration_ms > 0 {
            let toaster = self.clone();
            let timer_id = id.clone();
            self.scheduler
                .schedule(duration_ms, Box::new(move || toaster.dismiss(&timer_id)));
        }
        id
    }

    pub fn success(&self, message: impl Into<String>) -> String {
        self.show(message, ToastKind::Success, None)
    }

    pub fn error(&self, message: impl Into<String>) -> String {
        self.show(message, ToastKind::Error, None)
    }

    pub fn warning(&self, message: impl Into<String>) -> String {
        self.show(message, ToastKind::Warning, None)
    }

    pub fn info(&self, message: impl Into<String>) -> String {
        self.show(message, ToastKind::Info, None)
    }

    /// Remove a toast by id. Unknown ids are ignored.
    pub fn dismiss(&self, id: &str) {
        self.state.mutate(|s| s.toasts.retain(|t| t.id != id));
    }

    pub fn dismiss_all(&self) {
        self.state.mutate(|s| s.toasts.clear());
    }
}
