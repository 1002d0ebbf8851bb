//! Password field with a show/hide toggle.

use leptos::prelude::*;

#[component]
pub fn PasswordInput(
    value: RwSignal<String>,
    #[prop(into)] id: String,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] autocomplete: Option<String>,
    #[prop(into)] invalid: Signal<bool>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let visible = RwSignal::new(false);
    let placeholder = placeholder.unwrap_or_else(|| "Enter password".to_owned());
    let autocomplete = autocomplete.unwrap_or_else(|| "current-password".to_owned());

    view! {
        <div class="password-input" class:password-input--invalid=move || invalid.get()>
            <input
                id=id
                class="form-input password-input__field"
                type=move || if visible.get() { "text" } else { "password" }
                placeholder=placeholder
                autocomplete=autocomplete
                aria-invalid=move || invalid.get().to_string()
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <button
                type="button"
                class="password-input__toggle"
                aria-label=move || if visible.get() { "Hide password" } else { "Show password" }
                disabled=move || disabled.get()
                on:click=move |_| visible.update(|v| *v = !*v)
            >
                {move || if visible.get() { "Hide" } else { "Show" }}
            </button>
        </div>
    }
}
