//! Chat view-model: one display list over the live stream and search results.
//!
//! SYSTEM CONTEXT
//! ==============
//! The chat page renders `ChatState::display_messages`, which is the search
//! result cache while search mode is on and the live query's latest value
//! otherwise. Every write goes through `send_message`.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures are rejected before any service call. Service failures
//! are formatted for display, stored on the state, and returned so the caller
//! can keep its input intact.
//!
//! TRADE-OFFS
//! ==========
//! Searches are not fenced: whichever query resolves last overwrites the
//! result cache, even after `clear_search` or a newer search.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::data_service::DataService;
use crate::net::live_query::{KeepMode, LiveQueryState};
use crate::net::types::MessageWithUser;
use crate::util::constants::MESSAGE_MAX_LENGTH;
use crate::util::error_format::format_service_error;

use super::cell::StateCell;

/// Chat view-model state.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    /// A send is in flight.
    pub is_loading: bool,
    /// Last formatted failure, until cleared.
    pub error: Option<String>,
    /// Search mode: the display list shows `search_results`.
    pub is_searching: bool,
    /// A search query is in flight.
    pub search_in_flight: bool,
    /// Result of the last search to resolve.
    pub search_results: Vec<MessageWithUser>,
    /// The live message stream.
    pub live: LiveQueryState<Vec<MessageWithUser>>,
}

impl ChatState {
    /// The list the chat view renders.
    pub fn display_messages(&self) -> &[MessageWithUser] {
        if self.is_searching {
            &self.search_results
        } else {
            self.live.value.as_deref().unwrap_or_default()
        }
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn is_search_active(&self) -> bool {
        self.is_searching
    }

    pub fn is_loading_messages(&self) -> bool {
        self.live.is_loading
    }
}

/// Failures surfaced by chat operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    /// Input rejected locally; nothing was sent.
    #[error("{0}")]
    Validation(String),
    /// The service call failed; carries the display message.
    #[error("{0}")]
    Failed(String),
}

/// Trim and bound-check message content.
///
/// # Errors
///
/// Returns `ChatError::Validation` for empty or over-length content.
pub fn validate_message_content(content: &str) -> Result<&str, ChatError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(ChatError::Validation("Message cannot be empty".to_owned()));
    }
    if trimmed.chars().count() > MESSAGE_MAX_LENGTH {
        return Err(ChatError::Validation(format!(
            "Message cannot exceed {MESSAGE_MAX_LENGTH} characters"
        )));
    }
    Ok(trimmed)
}

/// Send a message through the data service.
///
/// # Errors
///
/// Returns `ChatError::Validation` without calling the service when the
/// trimmed content is empty or too long, and `ChatError::Failed` with the
/// formatted message when the service call fails.
pub async fn send_message<C>(chat: &C, data: &dyn DataService, content: &str) -> Result<(), ChatError>
where
    C: StateCell<ChatState>,
{
    chat.mutate(|c| c.error = None);

    let trimmed = match validate_message_content(content) {
        Ok(trimmed) => trimmed,
        Err(e) => {
            log::debug!("message rejected: {e}");
            chat.mutate(|c| c.error = Some(e.to_string()));
            return Err(e);
        }
    };

    chat.mutate(|c| c.is_loading = true);
    let result = data.send_message(trimmed).await;
    chat.mutate(|c| c.is_loading = false);

    result.map_err(|e| {
        log::warn!("send message failed: {e}");
        let message = format_service_error(&e);
        chat.mutate(|c| c.error = Some(message.clone()));
        ChatError::Failed(message)
    })
}

/// Run a full-text search and show its results.
///
/// An empty or whitespace-only query leaves search mode and drops any shown
/// error without a call.
///
/// # Errors
///
/// Returns `ChatError::Failed` with the formatted message when the query fails.
pub async fn search_messages<C>(chat: &C, data: &dyn DataService, content: &str) -> Result<(), ChatError>
where
    C: StateCell<ChatState>,
{
    let query = content.trim();
    if query.is_empty() {
        clear_search(chat);
        clear_error(chat);
        return Ok(());
    }

    chat.mutate(|c| {
        c.error = None;
        c.is_searching = true;
        c.search_in_flight = true;
    });
    let result = data.get_filtered_messages_by_content(query).await;
    chat.mutate(|c| c.search_in_flight = false);

    match result {
        Ok(results) => {
            chat.mutate(|c| c.search_results = results);
            Ok(())
        }
        Err(e) => {
            log::warn!("search failed: {e}");
            let message = format_service_error(&e);
            chat.mutate(|c| c.error = Some(message.clone()));
            Err(ChatError::Failed(message))
        }
    }
}

/// Empty the result cache and leave search mode.
pub fn clear_search<C: StateCell<ChatState>>(chat: &C) {
    chat.mutate(|c| {
        c.search_results.clear();
        c.is_searching = false;
    });
}

pub fn clear_error<C: StateCell<ChatState>>(chat: &C) {
    chat.mutate(|c| c.error = None);
}

/// Re-run the live message query once.
pub async fn refresh_live_messages<C>(chat: &C, data: &dyn DataService, keep: KeepMode)
where
    C: StateCell<ChatState>,
{
    chat.mutate(|c| c.live.begin_refresh(keep));
    let result = data.get_messages().await;
    let mut failure = None;
    chat.mutate(|c| failure = c.live.resolve(result));
    if let Some(e) = failure {
        log::warn!("live messages refresh failed: {e}");
    }
}
