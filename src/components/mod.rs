//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render chat and auth surfaces while reading/writing shared
//! state from Leptos context providers. Behavior that needs no DOM lives in
//! `state` and `util` so it can be tested natively.

pub mod auth_layout;
pub mod chat_input;
pub mod chat_list;
pub mod loading_indicator;
pub mod password_input;
pub mod search_bar;
pub mod toast_stack;
