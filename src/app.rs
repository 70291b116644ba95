//! Shopping List App
//!
//! Root component: owns the state signals, loads the persisted list on
//! startup, and derives which controls are visible.

use leptos::prelude::*;

use crate::components::{ClearButton, FilterBox, ItemForm, ItemList};
use crate::context::AppContext;
use crate::models::EditMode;
use crate::store;

#[component]
pub fn App() -> impl IntoView {
    // localStorage reads are synchronous, so the initial list is
    // available before the first render
    let initial = store::load();
    web_sys::console::log_1(&format!("[APP] Loaded {} items", initial.len()).into());

    // State
    let (items, set_items) = signal(initial);
    let (edit_mode, set_edit_mode) = signal(EditMode::Adding);
    let (input_value, set_input_value) = signal(String::new());
    let (filter_query, set_filter_query) = signal(String::new());

    // Provide context to all children
    provide_context(AppContext::new(
        (items, set_items),
        (edit_mode, set_edit_mode),
        (input_value, set_input_value),
        (filter_query, set_filter_query),
    ));

    // Filter box and clear button only exist while the list is
    // non-empty
    let has_items = Memo::new(move |_| !items.get().is_empty());

    view! {
        <div class="container">
            <h1>"Shopping List"</h1>

            <ItemForm />

            <Show when=move || has_items.get()>
                <FilterBox />
            </Show>

            <ItemList />

            <Show when=move || has_items.get()>
                <ClearButton />
            </Show>
        </div>
    }
}
