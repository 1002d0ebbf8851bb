//! Message list with author avatars and relative timestamps.

#[cfg(test)]
#[path = "chat_list_test.rs"]
mod chat_list_test;

use leptos::prelude::*;

use crate::net::types::MessageWithUser;
use crate::util::display::{display_name, format_full_time, format_relative_time, now_ms, user_initials};

/// Whether the message was written by the signed-in user.
fn is_own_message(current_user_id: Option<&str>, author_id: &str) -> bool {
    current_user_id.is_some_and(|id| id == author_id)
}

/// Staggered entry animation, capped so long lists do not crawl in.
fn animation_delay(index: usize) -> String {
    format!("{}ms", index.min(20) * 30)
}

#[component]
pub fn ChatList(
    #[prop(into)] messages: Signal<Vec<MessageWithUser>>,
    #[prop(into)] current_user_id: Signal<Option<String>>,
    #[prop(into)] is_searching: Signal<bool>,
) -> impl IntoView {
    let list_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    Effect::new(move || {
        messages.track();
        gloo_timers::callback::Timeout::new(100, move || {
            if let Some(el) = list_ref.get_untracked() {
                el.set_scroll_top(el.scroll_height());
            }
        })
        .forget();
    });

    view! {
        <div class="chat-list" class:chat-list--searching=move || is_searching.get() node_ref=list_ref>
            {move || {
                let now = now_ms();
                let me = current_user_id.get();
                messages
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(index, entry)| {
                        let own = is_own_message(me.as_deref(), &entry.message.user_id);
                        let name = entry.user.as_ref().and_then(|u| u.name.as_deref());
                        let email = entry.user.as_ref().map(|u| u.email.as_str());
                        let created_at = entry.message.created_at;
                        view! {
                            <div
                                class="chat-list__row"
                                class:chat-list__row--own=own
                                style:animation-delay=animation_delay(index)
                            >
                                <div class="chat-list__avatar">{user_initials(name, email)}</div>
                                <div class="chat-list__bubble">
                                    <div class="chat-list__header">
                                        <span class="chat-list__author">{display_name(name, email)}</span>
                                        <span class="chat-list__time" title=format_full_time(created_at)>
                                            {format_relative_time(created_at, now)}
                                        </span>
                                    </div>
                                    <div class="chat-list__content">{entry.message.content.clone()}</div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
