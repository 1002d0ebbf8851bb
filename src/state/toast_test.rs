use super::*;
use std::cell::RefCell;
use std::rc::Rc;

// =============================================================
// ManualScheduler
// =============================================================

type Pending = Vec<(u64, Box<dyn FnOnce()>)>;

#[derive(Clone, Default)]
struct ManualScheduler {
    now: Rc<RefCell<u64>>,
    pending: Rc<RefCell<Pending>>,
}

impl ManualScheduler {
    fn advance(&self, ms: u64) {
        let target = *self.now.borrow() + ms;
        loop {
            let next = {
                let mut pending = self.pending.borrow_mut();
                let due = pending
                    .iter()
                    .enumerate()
                    .filter(|(_, (at, _))| *at <= target)
                    .min_by_key(|(_, (at, _))| *at)
                    .map(|(i, _)| i);
                due.map(|i| pending.remove(i))
            };
            let Some((at, task)) = next else { break };
            *self.now.borrow_mut() = at;
            task();
        }
        *self.now.borrow_mut() = target;
    }

    fn pending_count(&self) -> usize {
        self.pending.borrow().len()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let at = *self.now.borrow() + u64::from(delay_ms);
        self.pending.borrow_mut().push((at, task));
    }
}

fn toaster() -> (Toaster<Rc<RefCell<ToastState>>, ManualScheduler>, Rc<RefCell<ToastState>>, ManualScheduler) {
    let state = Rc::new(RefCell::new(ToastState::default()));
    let scheduler = ManualScheduler::default();
    (Toaster::new(state.clone(), scheduler.clone()), state, scheduler)
}

fn messages(state: &Rc<RefCell<ToastState>>) -> Vec<String> {
    state.borrow().toasts.iter().map(|t| t.message.clone()).collect()
}

// =============================================================
// ToastKind
// =============================================================

#[test]
fn default_durations_per_kind() {
    assert_eq!(ToastKind::Success.default_duration_ms(), 5_000);
    assert_eq!(ToastKind::Error.default_duration_ms(), 8_000);
    assert_eq!(ToastKind::Info.default_duration_ms(), 3_000);
    assert_eq!(ToastKind::Warning.default_duration_ms(), 6_000);
}

// =============================================================
// show / dismiss
// =============================================================

#[test]
fn show_appends_in_insertion_order_with_unique_ids() {
    let (toaster, state, _) = toaster();
    let a = toaster.info("first");
    let b = toaster.success("second");
    assert_ne!(a, b);
    assert_eq!(messages(&state), vec!["first", "second"]);
    assert_eq!(state.borrow().toasts[1].kind, ToastKind::Success);
}

#[test]
fn error_toast_expires_after_default_duration() {
    let (toaster, state, clock) = toaster();
    toaster.show("x", ToastKind::Error, None);
    clock.advance(7_999);
    assert_eq!(messages(&state), vec!["x"]);
    clock.advance(1);
    assert!(state.borrow().toasts.is_empty());
}

#[test]
fn early_dismiss_makes_timer_a_no_op() {
    let (toaster, state, clock) = toaster();
    let id = toaster.error("x");
    clock.advance(1_000);
    let keep = toaster.info("later");
    toaster.dismiss(&id);
    assert_eq!(messages(&state), vec!["later"]);

    clock.advance(2_500);
    assert_eq!(messages(&state), vec!["later"]);
    clock.advance(500);
    assert!(state.borrow().toasts.iter().all(|t| t.id != keep));
}

#[test]
fn explicit_duration_overrides_default() {
    let (toaster, state, clock) = toaster();
    toaster.show("quick", ToastKind::Error, Some(100));
    clock.advance(100);
    assert!(state.borrow().toasts.is_empty());
}

#[test]
fn zero_duration_is_sticky() {
    let (toaster, state, clock) = toaster();
    toaster.show("sticky", ToastKind::Warning, Some(0));
    assert_eq!(clock.pending_count(), 0);
    clock.advance(60_000);
    assert_eq!(messages(&state), vec!["sticky"]);
}

#[test]
fn dismiss_unknown_id_is_ignored() {
    let (toaster, state, _) = toaster();
    toaster.info("a");
    toaster.dismiss("missing");
    assert_eq!(state.borrow().toasts.len(), 1);
}

#[test]
fn dismiss_all_clears() {
    let (toaster, state, clock) = toaster();
    toaster.info("a");
    toaster.warning("b");
    toaster.dismiss_all();
    assert!(state.borrow().toasts.is_empty());
    clock.advance(10_000);
    assert!(state.borrow().toasts.is_empty());
}
