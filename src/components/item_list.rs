//! Item List Component
//!
//! Keyed view over the item vector, one row per item in insertion
//! order.

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::context::AppContext;

/// The rendered item list
#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Key by (position, text): edits can leave two rows with equal
    // text, so text alone is not a usable key
    let entries = move || ctx.items.get().into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <ul class="item-list">
            <For
                each=entries
                key=|(pos, text)| (*pos, text.clone())
                children=move |(_, text)| view! { <ItemRow text=text /> }
            />
        </ul>
    }
}
