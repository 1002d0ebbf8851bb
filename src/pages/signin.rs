//! Email + password sign-in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::{AppToaster, use_services};
use crate::components::auth_layout::AuthLayout;
use crate::components::password_input::PasswordInput;
use crate::state::auth::AuthState;
use crate::util::auth::{RouteAccess, install_route_guard};
use crate::util::constants::routes;
use crate::util::validate::{SignInErrors, validate_sign_in};

#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toaster = expect_context::<AppToaster>();
    let services = use_services();
    let navigate = use_navigate();
    install_route_guard(auth, RouteAccess::PublicOnly, navigate.clone());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(SignInErrors::default());
    let failure = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let input = match validate_sign_in(&email.get_untracked(), &password.get_untracked()) {
            Ok(input) => input,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(SignInErrors::default());
        failure.set(None);
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let services = services.get_value();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::state::auth::sign_in(&auth, &*services.auth, &input.email, &input.password).await {
                    Ok(()) => {
                        toaster.success("Welcome back!");
                        navigate(routes::CHAT, NavigateOptions::default());
                    }
                    Err(e) => failure.set(Some(crate::util::error_format::handle_auth_error(&e))),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (input, services, toaster, &navigate, NavigateOptions::default());
            busy.set(false);
        }
    };

    let invalid_email = Signal::derive(move || errors.with(|e| e.email.is_some()));
    let invalid_password = Signal::derive(move || errors.with(|e| e.password.is_some()));

    view! {
        <AuthLayout title="Welcome back" subtitle="Sign in to continue chatting">
            <form class="auth-form" on:submit=on_submit novalidate=true>
                <label class="form-label" for="signin-email">"Email"</label>
                <input
                    id="signin-email"
                    class="form-input"
                    class:form-input--invalid=move || invalid_email.get()
                    type="email"
                    autocomplete="email"
                    placeholder="you@example.com"
                    disabled=move || busy.get()
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                {move || errors.with(|e| e.email).map(|e| view! { <p class="form-error">{e.to_string()}</p> })}

                <label class="form-label" for="signin-password">"Password"</label>
                <PasswordInput
                    value=password
                    id="signin-password"
                    invalid=invalid_password
                    disabled=busy
                />
                {move || errors.with(|e| e.password).map(|e| view! { <p class="form-error">{e.to_string()}</p> })}

                <Show when=move || failure.with(Option::is_some)>
                    <div class="auth-form__failure" role="alert">{move || failure.get().unwrap_or_default()}</div>
                </Show>

                <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
            <p class="auth-form__switch">
                "Don't have an account? "
                <a href=routes::SIGN_UP>"Sign up"</a>
            </p>
        </AuthLayout>
    }
}
