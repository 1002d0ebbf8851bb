//! Composer state for the chat message box.
//!
//! Pure logic behind `components::chat_input`: counts, limits, send gating and
//! textarea autosizing. Counts are in characters, not bytes.

#[cfg(test)]
#[path = "chat_input_test.rs"]
mod chat_input_test;

use crate::util::constants::{MESSAGE_MAX_LENGTH, MESSAGE_MIN_LENGTH};

/// Textarea height cap in pixels.
pub const MAX_INPUT_HEIGHT_PX: f64 = 120.0;
/// Height of one textarea row in pixels.
pub const ROW_HEIGHT_PX: f64 = 24.0;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatInputState {
    pub text: String,
    pub is_sending: bool,
    pub rows: u32,
    pub max_characters: usize,
}

impl Default for ChatInputState {
    fn default() -> Self {
        Self { text: String::new(), is_sending: false, rows: 1, max_characters: MESSAGE_MAX_LENGTH }
    }
}

impl ChatInputState {
    pub fn character_count(&self) -> usize {
        self.text.chars().count()
    }

    fn trimmed_count(&self) -> usize {
        self.text.trim().chars().count()
    }

    /// Trimmed text is within the message bounds.
    pub fn is_valid(&self) -> bool {
        let n = self.trimmed_count();
        n >= MESSAGE_MIN_LENGTH && n <= self.max_characters
    }

    /// Non-empty but out of bounds. Empty input is not flagged.
    pub fn is_invalid(&self) -> bool {
        let n = self.trimmed_count();
        n > 0 && (n < MESSAGE_MIN_LENGTH || n > self.max_characters)
    }

    /// Inline hint for invalid input.
    pub fn validation_message(&self) -> Option<&'static str> {
        if self.text.trim().is_empty() {
            None
        } else if self.is_invalid() {
            Some("Message exceeds maximum length")
        } else {
            None
        }
    }

    /// At least 90% of the limit but not at it.
    pub fn is_near_limit(&self) -> bool {
        let count = self.character_count();
        count * 10 >= self.max_characters * 9 && count < self.max_characters
    }

    pub fn is_at_limit(&self) -> bool {
        self.character_count() >= self.max_characters
    }

    pub fn can_send(&self, disabled: bool) -> bool {
        self.is_valid() && !disabled && !self.is_sending
    }

    pub fn send_button_text(&self) -> &'static str {
        if self.is_sending { "Sending..." } else { "Send" }
    }

    /// Text to submit, trimmed, when sending is allowed.
    pub fn take_submission(&mut self, disabled: bool) -> Option<String> {
        if !self.can_send(disabled) {
            return None;
        }
        self.is_sending = true;
        Some(self.text.trim().to_owned())
    }

    /// Settle a submission: clear on success, keep the text on failure.
    pub fn finish_submission(&mut self, sent: bool) {
        self.is_sending = false;
        if sent {
            self.text.clear();
            self.rows = 1;
        }
    }
}

/// Rows for a textarea whose content needs `scroll_height` pixels.
pub fn rows_for_height(scroll_height: f64) -> u32 {
    let height = scroll_height.clamp(0.0, MAX_INPUT_HEIGHT_PX);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let rows = (height / ROW_HEIGHT_PX).ceil() as u32;
    rows.max(1)
}

/// Keydown policy: plain Enter submits, Shift+Enter inserts a newline.
pub fn should_send_on_key(key: &str, shift: bool, send_on_enter: bool, valid: bool) -> bool {
    key == "Enter" && send_on_enter && !shift && valid
}
