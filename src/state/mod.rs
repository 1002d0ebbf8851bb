//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `chat`, `toast`, etc.) so individual
//! components can depend on small focused models. Operations that cross an
//! `.await` go through `cell::StateCell` so they run against Leptos signals in
//! the browser and plain `Rc<RefCell<_>>` values in tests.

pub mod auth;
pub mod cell;
pub mod chat;
pub mod chat_input;
pub mod toast;
