//! Centered card shell shared by the sign-in and sign-up pages.

use leptos::prelude::*;

#[component]
pub fn AuthLayout(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] subtitle: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="auth-layout">
            <div class="auth-layout__background" aria-hidden="true">
                <div class="auth-layout__shape auth-layout__shape--1"></div>
                <div class="auth-layout__shape auth-layout__shape--2"></div>
            </div>
            <div class="auth-layout__container">
                {title.map(|title| {
                    view! {
                        <div class="auth-layout__header">
                            <h1>{title}</h1>
                            {subtitle.map(|s| view! { <p class="auth-layout__subtitle">{s}</p> })}
                        </div>
                    }
                })}
                {children()}
            </div>
        </div>
    }
}
