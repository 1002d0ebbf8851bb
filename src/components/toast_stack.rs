//! Fixed-position stack of active toasts.

use leptos::prelude::*;

use crate::app::AppToaster;
use crate::state::toast::{ToastKind, ToastState};

/// Renders every active toast; clicking one dismisses it.
#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let toaster = expect_context::<AppToaster>();

    view! {
        <div class="toast-container">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id.clone()
                children=move |toast| {
                    let id = toast.id.clone();
                    let live = if toast.kind == ToastKind::Error { "assertive" } else { "polite" };
                    view! {
                        <div
                            class=toast.kind.css_class()
                            role="alert"
                            aria-live=live
                            on:click=move |_| toaster.dismiss(&id)
                        >
                            <span class="toast__icon">{toast.kind.icon()}</span>
                            <p class="toast__message">{toast.message.clone()}</p>
                            <button class="toast__close" type="button" aria-label="Close notification">
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
