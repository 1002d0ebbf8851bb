//! Generation-counted debounce for timer-driven input handlers.
//!
//! Each keystroke arms a new generation and schedules a timer; when the timer
//! fires it only acts if its generation is still the latest. Timers are never
//! cancelled, they just go stale.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DebounceGate {
    generation: u64,
}

impl DebounceGate {
    /// Start a new generation and return its ticket.
    pub fn arm(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation == ticket
    }
}

/// Run `task` after `delay_ms` if no newer generation was armed meanwhile.
#[cfg(feature = "csr")]
pub fn debounce(gate: leptos::prelude::RwSignal<DebounceGate>, delay_ms: u32, task: impl FnOnce() + 'static) {
    use leptos::prelude::{Update, WithUntracked};

    let mut ticket = 0;
    gate.update(|g| ticket = g.arm());
    gloo_timers::callback::Timeout::new(delay_ms, move || {
        if gate.with_untracked(|g| g.is_current(ticket)) {
            task();
        }
    })
    .forget();
}
