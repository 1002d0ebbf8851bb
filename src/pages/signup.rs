//! Account creation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::{AppToaster, use_services};
use crate::components::auth_layout::AuthLayout;
use crate::components::password_input::PasswordInput;
use crate::state::auth::AuthState;
use crate::util::auth::{RouteAccess, install_route_guard};
use crate::util::constants::routes;
use crate::util::validate::{SignUpErrors, password_strength, validate_sign_up};

#[component]
pub fn SignUpPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toaster = expect_context::<AppToaster>();
    let services = use_services();
    let navigate = use_navigate();
    install_route_guard(auth, RouteAccess::PublicOnly, navigate.clone());

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let errors = RwSignal::new(SignUpErrors::default());
    let failure = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let input = match validate_sign_up(
            &name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm.get_untracked(),
        ) {
            Ok(input) => input,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(SignUpErrors::default());
        failure.set(None);
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let services = services.get_value();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::state::auth::sign_up(
                    &auth,
                    &*services.auth,
                    &input.email,
                    &input.password,
                    &input.name,
                )
                .await;
                match result {
                    Ok(()) => {
                        toaster.success("Account created. Welcome!");
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

    let invalid_password = Signal::derive(move || errors.with(|e| e.password.is_some()));
    let invalid_confirm = Signal::derive(move || errors.with(|e| e.confirm.is_some()));
    let strength_hints = move || password.with(|p| password_strength(p).unmet_rules());

    view! {
        <AuthLayout title="Create an account" subtitle="Join the conversation">
            <form class="auth-form" on:submit=on_submit novalidate=true>
                <label class="form-label" for="signup-name">"Name"</label>
                <input
                    id="signup-name"
                    class="form-input"
                    class:form-input--invalid=move || errors.with(|e| e.name.is_some())
                    type="text"
                    autocomplete="name"
                    placeholder="Your name"
                    disabled=move || busy.get()
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                {move || errors.with(|e| e.name).map(|e| view! { <p class="form-error">{e.to_string()}</p> })}

                <label class="form-label" for="signup-email">"Email"</label>
                <input
                    id="signup-email"
                    class="form-input"
                    class:form-input--invalid=move || errors.with(|e| e.email.is_some())
                    type="email"
                    autocomplete="email"
                    placeholder="you@example.com"
                    disabled=move || busy.get()
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                {move || errors.with(|e| e.email).map(|e| view! { <p class="form-error">{e.to_string()}</p> })}

                <label class="form-label" for="signup-password">"Password"</label>
                <PasswordInput
                    value=password
                    id="signup-password"
                    autocomplete="new-password"
                    invalid=invalid_password
                    disabled=busy
                />
                {move || errors.with(|e| e.password).map(|e| view! { <p class="form-error">{e.to_string()}</p> })}
                <Show when=move || !strength_hints().is_empty()>
                    <ul class="auth-form__hints">
                        {move || strength_hints().into_iter().map(|hint| view! { <li>{hint}</li> }).collect_view()}
                    </ul>
                </Show>

                <label class="form-label" for="signup-confirm">"Confirm password"</label>
                <PasswordInput
                    value=confirm
                    id="signup-confirm"
                    placeholder="Repeat password"
                    autocomplete="new-password"
                    invalid=invalid_confirm
                    disabled=busy
                />
                {move || errors.with(|e| e.confirm).map(|e| view! { <p class="form-error">{e.to_string()}</p> })}

                <Show when=move || failure.with(Option::is_some)>
                    <div class="auth-form__failure" role="alert">{move || failure.get().unwrap_or_default()}</div>
                </Show>

                <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating account..." } else { "Sign up" }}
                </button>
            </form>
            <p class="auth-form__switch">
                "Already have an account? "
                <a href=routes::SIGN_IN>"Sign in"</a>
            </p>
        </AuthLayout>
    }
}
