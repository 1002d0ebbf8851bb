//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate formatting, validation, and browser concerns from
//! page and component logic to improve reuse and testability.

pub mod auth;
pub mod constants;
pub mod debounce;
pub mod display;
pub mod error_format;
pub mod token;
pub mod validate;
