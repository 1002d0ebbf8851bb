//! Root application component with routing and context providers.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::toast_stack::ToastStack;
use crate::config::AppConfig;
use crate::net::auth_client::{AuthClient, HttpAuthClient};
use crate::net::data_service::{DataService, HttpDataService};
use crate::pages::{chat::ChatPage, landing::LandingPage, signin::SignInPage, signup::SignUpPage};
use crate::state::auth::AuthState;
use crate::state::chat::ChatState;
use crate::state::toast::{BrowserScheduler, ToastState, Toaster};
use crate::util::auth::route_segment;
use crate::util::constants::routes;

/// Toaster bound to the app's toast signal and browser timers.
pub type AppToaster = Toaster<RwSignal<ToastState>, BrowserScheduler>;

/// Service clients shared by every page.
#[derive(Clone)]
pub struct Services {
    pub data: Rc<dyn DataService>,
    pub auth: Rc<dyn AuthClient>,
}

impl Services {
    pub fn from_config(config: &AppConfig) -> Self {
        let auth: Rc<dyn AuthClient> = Rc::new(HttpAuthClient::new(&config.auth_base_url, config.auth_skew_ms));
        let data = Rc::new(HttpDataService::new(&config.convex_url, auth.clone()));
        Self { data, auth }
    }
}

/// Services as they travel through context.
///
/// Clients hold `Rc`s, so they are stored locally; the handle itself is `Copy`
/// and can be captured by `Send` callbacks.
pub type ServicesHandle = StoredValue<Services, LocalStorage>;

pub fn use_services() -> ServicesHandle {
    expect_context::<ServicesHandle>()
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build_env().unwrap_or_else(|e| {
        log::error!("invalid build configuration, using defaults: {e}");
        AppConfig::default()
    });
    let services = Services::from_config(&config);

    // Provide reactive state contexts for all child components.
    let auth = RwSignal::new(AuthState::pending());
    let chat = RwSignal::new(ChatState::default());
    let toasts = RwSignal::new(ToastState::default());
    let toaster: AppToaster = Toaster::new(toasts, BrowserScheduler);

    provide_context(config);
    provide_context::<ServicesHandle>(StoredValue::new_local(services.clone()));
    provide_context(auth);
    provide_context(chat);
    provide_context(toasts);
    provide_context(toaster);

    crate::state::auth::watch_session(&auth, &*services.auth);
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        crate::state::auth::refresh_session(&auth, &*services.auth).await;
    });
    #[cfg(not(feature = "csr"))]
    let _ = services;

    view! {
        <Title text="Chat App"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path=routes::HOME/> }>
                <Route path=StaticSegment(route_segment(routes::HOME)) view=LandingPage/>
                <Route path=StaticSegment(route_segment(routes::SIGN_IN)) view=SignInPage/>
                <Route path=StaticSegment(route_segment(routes::SIGN_UP)) view=SignUpPage/>
                <Route path=StaticSegment(route_segment(routes::CHAT)) view=ChatPage/>
                <Route path=StaticSegment(route_segment(routes::DASHBOARD)) view=|| view! { <Redirect path=routes::CHAT/> }/>
            </Routes>
        </Router>
        <ToastStack/>
    }
}
