//! Item Row Component
//!
//! A single list row: display text plus a delete button. Clicking the
//! button removes the row; clicking anywhere else on it enters edit
//! mode. Filtering toggles the row's visibility without touching the
//! list.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::filter;

/// One row in the item list
#[component]
pub fn ItemRow(text: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let edit_name = text.clone();
    let remove_name = text.clone();
    let target_name = text.clone();
    let filter_name = text.clone();

    let is_target = move || ctx.edit_mode.get().is_target(&target_name);
    let visible = move || filter::matches(&filter_name, &ctx.filter_query.get());

    view! {
        <li
            class=move || if is_target() { "item-row edit-mode" } else { "item-row" }
            style:display=move || if visible() { "flex" } else { "none" }
            on:click=move |_| ctx.begin_edit(&edit_name)
        >
            <span class="item-text">{text}</span>
            <button
                class="remove-item"
                on:click=move |ev: web_sys::MouseEvent| {
                    ev.stop_propagation();
                    ctx.remove_item(&remove_name);
                }
            >
                "×"
            </button>
        </li>
    }
}
