//! Item Form Component
//!
//! Text input plus submit button; the button relabels to an update
//! affordance while a row is being edited.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::AppContext;

/// Form for adding a new item or updating the edited one
#[component]
pub fn ItemForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let editing = move || ctx.edit_mode.get().is_editing();

    view! {
        <form class="item-form" on:submit=move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            ctx.submit_input();
        }>
            <input
                type="text"
                class="form-input"
                placeholder="Enter Item"
                prop:value=move || ctx.input_value.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    ctx.set_input(input.value());
                }
            />
            <button
                type="submit"
                class=move || if editing() { "form-btn update" } else { "form-btn" }
            >
                {move || if editing() { "Update Item" } else { "Add Item" }}
            </button>
        </form>
    }
}
