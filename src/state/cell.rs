//! Read/write access seam for shared state.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::{RwSignal, Update, WithUntracked};

/// A shared, single-threaded state holder.
///
/// Borrows are scoped to the closure, so no access is held across `.await`.
pub trait StateCell<T>: Clone + 'static {
    fn peek<R>(&self, f: impl FnOnce(&T) -> R) -> R;

    fn mutate(&self, f: impl FnOnce(&mut T));
}

impl<T: Send + Sync + 'static> StateCell<T> for RwSignal<T> {
    fn peek<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.with_untracked(f)
    }

    fn mutate(&self, f: impl FnOnce(&mut T)) {
        self.update(f);
    }
}

impl<T: 'static> StateCell<T> for Rc<RefCell<T>> {
    fn peek<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.borrow())
    }

    fn mutate(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.borrow_mut());
    }
}
