//! Spinner with an optional caption.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadingSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl LoadingSize {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Small => "loading-indicator loading-indicator--small",
            Self::Medium => "loading-indicator loading-indicator--medium",
            Self::Large => "loading-indicator loading-indicator--large",
        }
    }
}

#[component]
pub fn LoadingIndicator(
    #[prop(optional)] size: LoadingSize,
    #[prop(optional, into)] message: Option<String>,
) -> impl IntoView {
    view! {
        <div class=size.css_class() role="status">
            <div class="loading-indicator__spinner"></div>
            {message.map(|m| view! { <p class="loading-indicator__message">{m}</p> })}
        </div>
    }
}
