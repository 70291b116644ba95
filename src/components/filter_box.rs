//! Filter Box Component
//!
//! Filter-as-you-type input. Keystrokes are debounced so only the last
//! query in a burst is applied to row visibility.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::AppContext;
use crate::filter::{Debouncer, DEBOUNCE_MS};

/// Debounced filter input
#[component]
pub fn FilterBox() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Timeout handles are browser-local, so keep the debouncer in
    // local storage
    let debouncer = StoredValue::new_local(Debouncer::new(DEBOUNCE_MS));

    view! {
        <input
            type="text"
            class="filter"
            placeholder="Filter Items"
            prop:value=move || ctx.filter_query.get()
            on:input=move |ev| {
                let target = ev.target().unwrap();
                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                let query = input.value().to_lowercase();
                debouncer.update_value(|d| d.schedule(move || ctx.apply_filter(query)));
            }
        />
    }
}
