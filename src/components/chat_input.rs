//! Message composer: autosizing textarea, character count, send button.
//!
//! The owning page holds the `ChatInputState` signal and settles each
//! submission with `finish_submission`, so a failed send keeps the text.

use leptos::prelude::*;

use crate::state::chat_input::{ChatInputState, rows_for_height, should_send_on_key};

#[component]
pub fn ChatInput(
    input: RwSignal<ChatInputState>,
    #[prop(into)] disabled: Signal<bool>,
    on_submit: Callback<String>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    let placeholder = placeholder.unwrap_or_else(|| "Type a message...".to_owned());
    let focused = RwSignal::new(false);
    let textarea_ref = NodeRef::<leptos::html::Textarea>::new();

    #[cfg(feature = "csr")]
    Effect::new(move || {
        if let Some(el) = textarea_ref.get() {
            let _ = el.focus();
        }
    });

    let submit = move || {
        let mut text = None;
        input.update(|s| text = s.take_submission(disabled.get_untracked()));
        if let Some(text) = text {
            on_submit.run(text);
        }
    };

    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        #[cfg(feature = "csr")]
        let rows = textarea_ref.get().map(|el| {
            let style = web_sys::HtmlElement::style(&el);
            let _ = style.set_property("height", "auto");
            let height = f64::from(el.scroll_height()).min(crate::state::chat_input::MAX_INPUT_HEIGHT_PX);
            let _ = style.set_property("height", &format!("{height}px"));
            rows_for_height(height)
        });
        #[cfg(not(feature = "csr"))]
        let rows = Some(rows_for_height(0.0));
        input.update(|s| {
            s.text = value;
            if let Some(rows) = rows {
                s.rows = rows;
            }
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let valid = input.with_untracked(ChatInputState::is_valid);
        if should_send_on_key(&ev.key(), ev.shift_key(), true, valid) {
            ev.prevent_default();
            submit();
        }
    };

    view! {
        <div class="chat-input" class:chat-input--disabled=move || disabled.get()>
            <div class="chat-input__wrapper" class:chat-input__wrapper--focused=move || focused.get()>
                <textarea
                    node_ref=textarea_ref
                    class="chat-input__textarea"
                    rows=move || input.with(|s| s.rows)
                    placeholder=placeholder.clone()
                    aria-label=placeholder
                    aria-invalid=move || input.with(ChatInputState::is_invalid).to_string()
                    disabled=move || disabled.get()
                    prop:value=move || input.with(|s| s.text.clone())
                    on:input=on_input
                    on:keydown=on_keydown
                    on:focus=move |_| focused.set(true)
                    on:blur=move |_| focused.set(false)
                ></textarea>
                <div class="chat-input__actions">
                    <span
                        class="chat-input__count"
                        class:chat-input__count--warning=move || input.with(ChatInputState::is_near_limit)
                        class:chat-input__count--error=move || input.with(ChatInputState::is_at_limit)
                    >
                        {move || input.with(|s| format!("{}/{}", s.character_count(), s.max_characters))}
                    </span>
                    <button
                        type="button"
                        class="chat-input__send"
                        disabled=move || !input.with(|s| s.can_send(disabled.get()))
                        aria-label=move || input.with(ChatInputState::send_button_text)
                        on:click=move |_| submit()
                    >
                        {move || {
                            if input.with(|s| s.is_sending) {
                                view! { <span class="chat-input__spinner"></span> }.into_any()
                            } else {
                                view! { <span class="chat-input__send-icon">"➤"</span> }.into_any()
                            }
                        }}
                    </button>
                </div>
            </div>
            {move || {
                input
                    .with(ChatInputState::validation_message)
                    .map(|msg| view! { <div class="chat-input__error" role="alert">{msg}</div> })
            }}
        </div>
    }
}
