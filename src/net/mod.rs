//! Networking modules for the hosted data platform and its auth endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `data_service` handles query/mutation calls, `auth_client` handles
//! credential and session calls, `live_query` keeps a query result fresh, and
//! `types` defines the shared wire schema.

pub mod auth_client;
pub mod data_service;
pub mod error;
pub mod live_query;
pub mod types;
