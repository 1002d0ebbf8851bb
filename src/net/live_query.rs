//! Live query results kept fresh by re-running the query.
//!
//! DESIGN
//! ======
//! `LiveQueryState` holds the latest result and a loading flag. A refresh
//! either keeps the previous value visible (`KeepMode::Last`) or clears it
//! until the new result lands (`KeepMode::None`). A failed refresh keeps
//! whatever value is present.
//!
//! In the browser the refresh is driven by a poll loop plus explicit nudges
//! after local writes. Push delivery and reconnection are the platform's
//! concern and are not modelled here.

#[cfg(test)]
#[path = "live_query_test.rs"]
mod live_query_test;

use std::str::FromStr;

use super::error::ServiceError;

/// Whether a refresh keeps the previous value visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeepMode {
    #[default]
    Last,
    None,
}

impl FromStr for KeepMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "last" => Ok(Self::Last),
            "none" => Ok(Self::None),
            other => Err(other.to_owned()),
        }
    }
}

/// Latest result of a live query.
#[derive(Clone, Debug, PartialEq)]
pub struct LiveQueryState<T> {
    pub value: Option<T>,
    pub is_loading: bool,
}

impl<T> Default for LiveQueryState<T> {
    fn default() -> Self {
        Self { value: None, is_loading: false }
    }
}

impl<T> LiveQueryState<T> {
    /// Mark a refresh in flight.
    pub fn begin_refresh(&mut self, keep: KeepMode) {
        self.is_loading = true;
        if keep == KeepMode::None {
            self.value = None;
        }
    }

    /// Store a refresh result. Returns the error when the refresh failed.
    pub fn resolve(&mut self, result: Result<T, ServiceError>) -> Option<ServiceError> {
        self.is_loading = false;
        match result {
            Ok(value) => {
                self.value = Some(value);
                None
            }
            Err(e) => Some(e),
        }
    }
}

/// Stops a poll loop started by [`spawn_poll_loop`].
#[derive(Clone, Debug, Default)]
pub struct PollHandle {
    alive: std::sync::Arc<std::sync::atomic::AtomicBool>,
}

impl PollHandle {
    pub fn stop(&self) {
        self.alive.store(false, std::sync::atomic::Ordering::Relaxed);
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(std::sync::atomic::Ordering::Relaxed)
    }
}

/// Run `refresh` now and then every `interval_ms` until the handle stops.
#[cfg(feature = "csr")]
pub fn spawn_poll_loop<F, Fut>(interval_ms: u32, refresh: F) -> PollHandle
where
    F: Fn() -> Fut + 'static,
    Fut: std::future::Future<Output = ()> + 'static,
{
    let handle = PollHandle { alive: std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true)) };
    let task_handle = handle.clone();
    leptos::task::spawn_local(async move {
        while task_handle.is_alive() {
            refresh().await;
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(interval_ms))).await;
        }
    });
    handle
}
