//! Group chat page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticated home route. It keeps the live message query fresh while
//! mounted, renders `ChatState::display_messages`, and hosts the composer,
//! search box, profile rename and sign-out controls.
//!
//! DESIGN
//! ======
//! The live query re-runs on a fixed interval and once more right after a
//! successful send, so a user's own message shows up without waiting a full
//! interval. The loop stops on unmount.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::{AppToaster, use_services};
use crate::components::chat_input::ChatInput;
use crate::components::chat_list::ChatList;
use crate::components::loading_indicator::{LoadingIndicator, LoadingSize};
use crate::components::search_bar::SearchBar;
use crate::config::AppConfig;
use crate::state::auth::AuthState;
use crate::state::chat::{ChatState, clear_error, clear_search};
use crate::state::chat_input::ChatInputState;
use crate::util::auth::{RouteAccess, install_route_guard};
use crate::util::display::{display_name, user_initials};
use crate::util::validate::validate_display_name;

#[component]
pub fn ChatPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let toaster = expect_context::<AppToaster>();
    let config = expect_context::<AppConfig>();
    let services = use_services();
    install_route_guard(auth, RouteAccess::Protected, use_navigate());

    let keep = config.keep;
    let input = RwSignal::new(ChatInputState::default());

    #[cfg(feature = "csr")]
    {
        let handle = crate::net::live_query::spawn_poll_loop(config.live_poll_ms, move || async move {
            if !auth.with_untracked(|a| a.is_authenticated) {
                return;
            }
            let data = services.get_value().data;
            crate::state::chat::refresh_live_messages(&chat, &*data, keep).await;
        });
        on_cleanup(move || handle.stop());
    }
    #[cfg(not(feature = "csr"))]
    let _ = (services, toaster, config.live_poll_ms);

    let on_send = Callback::new(move |text: String| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let data = services.get_value().data;
            let sent = crate::state::chat::send_message(&chat, &*data, &text).await;
            input.update(|s| s.finish_submission(sent.is_ok()));
            if sent.is_ok() {
                crate::state::chat::refresh_live_messages(&chat, &*data, keep).await;
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (text, keep);
            input.update(|s| s.finish_submission(false));
        }
    });

    let on_search = Callback::new(move |query: String| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let data = services.get_value().data;
            let _ = crate::state::chat::search_messages(&chat, &*data, &query).await;
        });
        #[cfg(not(feature = "csr"))]
        let _ = query;
    });
    let on_clear_search = Callback::new(move |()| clear_search(&chat));

    // Profile rename.
    let editing_name = RwSignal::new(false);
    let name_draft = RwSignal::new(String::new());
    let name_error = RwSignal::new(None::<String>);

    let start_rename = move |_| {
        let current = auth.with_untracked(|a| a.user.as_ref().and_then(|u| u.name.clone()));
        name_draft.set(current.unwrap_or_default());
        name_error.set(None);
        editing_name.set(true);
    };

    let save_rename = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = match validate_display_name(&name_draft.get_untracked()) {
            Ok(name) => name,
            Err(e) => {
                name_error.set(Some(e.to_string()));
                return;
            }
        };
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let data = services.get_value().data;
            match crate::state::auth::update_profile(&auth, &*data, &name).await {
                Ok(()) => {
                    editing_name.set(false);
                    toaster.success("Profile updated");
                }
                Err(e) => {
                    log::warn!("profile update failed: {e}");
                    name_error.set(Some(crate::util::error_format::format_service_error(&e)));
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = name;
    };

    // The route guard takes over once the session is gone.
    let on_sign_out = move |_| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let client = services.get_value().auth;
            match crate::state::auth::sign_out(&auth, &*client).await {
                Ok(()) => {
                    chat.set(ChatState::default());
                    toaster.info("Signed out");
                }
                Err(e) => {
                    toaster.error(crate::util::error_format::handle_auth_error(&e));
                }
            }
        });
    };

    let user_name = move || auth.with(|a| a.user.as_ref().and_then(|u| u.name.clone()));
    let user_email = move || auth.with(|a| a.user.as_ref().map(|u| u.email.clone()));
    let header_name = move || display_name(user_name().as_deref(), user_email().as_deref());
    let header_initials = move || user_initials(user_name().as_deref(), user_email().as_deref());

    let messages = Signal::derive(move || chat.with(|c| c.display_messages().to_vec()));
    let current_user_id = Signal::derive(move || auth.with(|a| a.user_id().map(str::to_owned)));
    let is_searching = Signal::derive(move || chat.with(ChatState::is_search_active));
    let search_in_flight = Signal::derive(move || chat.with(|c| c.search_in_flight));
    let sending = Signal::derive(move || chat.with(|c| c.is_loading));
    let waiting_first_page = move || chat.with(|c| c.live.value.is_none() && !c.is_searching);
    let empty_text = move || {
        if is_searching.get() { "No messages match your search." } else { "No messages yet. Say hello!" }
    };

    view! {
        <Show
            when=move || auth.with(|a| !a.loading && a.is_authenticated)
            fallback=|| view! { <LoadingIndicator size=LoadingSize::Large message="Loading..."/> }
        >
            <div class="chat-page">
                <header class="chat-page__header">
                    <h1 class="chat-page__title">"Chat"</h1>
                    <SearchBar on_search=on_search on_clear=on_clear_search in_flight=search_in_flight/>
                    <div class="chat-page__user">
                        <span class="chat-page__avatar">{header_initials}</span>
                        <Show
                            when=move || editing_name.get()
                            fallback=move || {
                                view! {
                                    <button
                                        class="chat-page__name"
                                        type="button"
                                        title="Edit display name"
                                        on:click=start_rename
                                    >
                                        {header_name}
                                    </button>
                                }
                            }
                        >
                            <form class="chat-page__rename" on:submit=save_rename>
                                <input
                                    class="form-input"
                                    type="text"
                                    aria-label="Display name"
                                    prop:value=move || name_draft.get()
                                    on:input=move |ev| name_draft.set(event_target_value(&ev))
                                />
                                <button class="btn btn--primary" type="submit">"Save"</button>
                                <button class="btn" type="button" on:click=move |_| editing_name.set(false)>
                                    "Cancel"
                                </button>
                                {move || name_error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                            </form>
                        </Show>
                        <button class="btn chat-page__sign-out" type="button" on:click=on_sign_out>
                            "Sign out"
                        </button>
                    </div>
                </header>

                <Show when=move || chat.with(ChatState::has_error)>
                    <div class="chat-page__error" role="alert">
                        <span>{move || chat.with(|c| c.error.clone().unwrap_or_default())}</span>
                        <button
                            class="chat-page__error-dismiss"
                            type="button"
                            aria-label="Dismiss error"
                            on:click=move |_| clear_error(&chat)
                        >
                            "×"
                        </button>
                    </div>
                </Show>

                <main class="chat-page__body">
                    <Show
                        when=move || !waiting_first_page()
                        fallback=|| view! { <LoadingIndicator message="Loading messages..."/> }
                    >
                        <Show
                            when=move || !messages.with(Vec::is_empty)
                            fallback=move || view! { <p class="chat-page__empty">{empty_text}</p> }
                        >
                            <ChatList messages=messages current_user_id=current_user_id is_searching=is_searching/>
                        </Show>
                    </Show>
                </main>

                <footer class="chat-page__footer">
                    <ChatInput input=input disabled=sending on_submit=on_send/>
                </footer>
            </div>
        </Show>
    }
}
