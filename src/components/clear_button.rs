//! Clear Button Component
//!
//! Clear-all control; the destructive path sits behind a confirmation
//! prompt.

use leptos::prelude::*;

use crate::context::AppContext;

/// Button that empties the whole list after confirmation
#[component]
pub fn ClearButton() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <button class="btn-clear" on:click=move |_| ctx.clear_all()>
            "Clear All"
        </button>
    }
}
