//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages orchestrate layout, route guards, and high-level state wiring for
//! landing, sign-in, sign-up, and chat routes.

pub mod chat;
pub mod landing;
pub mod signin;
pub mod signup;
