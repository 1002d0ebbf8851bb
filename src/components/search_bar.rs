//! Debounced message search box.

use leptos::prelude::*;

use crate::util::constants::SEARCH_DEBOUNCE_MS;
use crate::util::debounce::DebounceGate;

/// Emits `on_search` once typing pauses; clearing the box emits `on_clear`.
#[component]
pub fn SearchBar(
    on_search: Callback<String>,
    on_clear: Callback<()>,
    #[prop(into)] in_flight: Signal<bool>,
) -> impl IntoView {
    let query = RwSignal::new(String::new());
    let gate = RwSignal::new(DebounceGate::default());

    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        query.set(value.clone());
        if value.trim().is_empty() {
            gate.update(|g| {
                g.arm();
            });
            on_clear.run(());
            return;
        }
        #[cfg(feature = "csr")]
        crate::util::debounce::debounce(gate, SEARCH_DEBOUNCE_MS, move || on_search.run(value));
        #[cfg(not(feature = "csr"))]
        let _ = (SEARCH_DEBOUNCE_MS, on_search, value);
    };

    let on_clear_click = move |_| {
        query.set(String::new());
        gate.update(|g| {
            g.arm();
        });
        on_clear.run(());
    };

    view! {
        <div class="search-bar" class:search-bar--busy=move || in_flight.get()>
            <input
                class="search-bar__input"
                type="search"
                placeholder="Search messages..."
                aria-label="Search messages"
                prop:value=move || query.get()
                on:input=on_input
            />
            <Show when=move || !query.get().is_empty()>
                <button
                    type="button"
                    class="search-bar__clear"
                    aria-label="Clear search"
                    on:click=on_clear_click
                >
                    "×"
                </button>
            </Show>
        </div>
    }
}
