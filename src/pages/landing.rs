//! Public landing page; signed-in visitors go straight to the chat.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::loading_indicator::{LoadingIndicator, LoadingSize};
use crate::state::auth::AuthState;
use crate::util::auth::{RouteAccess, install_route_guard};
use crate::util::constants::routes;

#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_route_guard(auth, RouteAccess::Landing, use_navigate());

    view! {
        <Show
            when=move || !auth.with(|a| a.loading)
            fallback=|| view! { <LoadingIndicator size=LoadingSize::Large message="Loading..."/> }
        >
            <div class="landing-page">
                <section class="landing-page__hero">
                    <h1>"Chat in real time"</h1>
                    <p class="landing-page__lead">
                        "One shared conversation, updated live for everyone signed in."
                    </p>
                    <div class="landing-page__actions">
                        <a class="btn btn--primary" href=routes::SIGN_UP>"Create an account"</a>
                        <a class="btn btn--secondary" href=routes::SIGN_IN>"Sign in"</a>
                    </div>
                </section>
                <section class="landing-page__features">
                    <div class="landing-page__feature">
                        <h3>"Live messages"</h3>
                        <p>"New messages appear without refreshing."</p>
                    </div>
                    <div class="landing-page__feature">
                        <h3>"Search history"</h3>
                        <p>"Find any message by its text."</p>
                    </div>
                    <div class="landing-page__feature">
                        <h3>"Secure sessions"</h3>
                        <p>"Email and password sign-in with expiring tokens."</p>
                    </div>
                </section>
            </div>
        </Show>
    }
}
