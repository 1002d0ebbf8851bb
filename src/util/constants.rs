//! Static limits, route paths, and timing constants.

pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const PASSWORD_MAX_LENGTH: usize = 128;

/// Minimum password length accepted by the sign-in and sign-up forms.
pub const FORM_PASSWORD_MIN_LENGTH: usize = 6;

pub const EMAIL_MAX_LENGTH: usize = 254;

pub const NAME_MIN_LENGTH: usize = 2;
pub const NAME_MAX_LENGTH: usize = 100;

pub const MESSAGE_MIN_LENGTH: usize = 1;
pub const MESSAGE_MAX_LENGTH: usize = 1000;

pub const AUTH_TOKEN_EXPIRY_SKEW_MS: u64 = 45_000;

pub const TOAST_SUCCESS_DURATION_MS: u32 = 5_000;
pub const TOAST_ERROR_DURATION_MS: u32 = 8_000;
pub const TOAST_INFO_DURATION_MS: u32 = 3_000;
pub const TOAST_WARNING_DURATION_MS: u32 = 6_000;

pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Client-side route paths.
pub mod routes {
    pub const HOME: &str = "/";
    pub const SIGN_IN: &str = "/signin";
    pub const SIGN_UP: &str = "/signup";
    pub const DASHBOARD: &str = "/dashboard";
    pub const CHAT: &str = "/chat";
}
