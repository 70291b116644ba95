//! Application Context
//!
//! Shared state provided via Leptos Context API. Every structural
//! mutation goes through a method here so the in-memory list, the
//! storage slot, and the edit mode stay in step: either the whole
//! chain (model, store, mode reset) runs, or nothing changes.

use leptos::prelude::*;

use crate::dialog;
use crate::list;
use crate::models::EditMode;
use crate::store;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Item list, mirror of the storage slot - read
    pub items: ReadSignal<Vec<String>>,
    /// Item list - write
    set_items: WriteSignal<Vec<String>>,
    /// Add vs. edit interpretation of the form - read
    pub edit_mode: ReadSignal<EditMode>,
    /// Add vs. edit interpretation of the form - write
    set_edit_mode: WriteSignal<EditMode>,
    /// Form input field contents - read
    pub input_value: ReadSignal<String>,
    /// Form input field contents - write
    set_input_value: WriteSignal<String>,
    /// Applied (debounced) filter query - read
    pub filter_query: ReadSignal<String>,
    /// Applied (debounced) filter query - write
    set_filter_query: WriteSignal<String>,
}

impl AppContext {
    pub fn new(
        items: (ReadSignal<Vec<String>>, WriteSignal<Vec<String>>),
        edit_mode: (ReadSignal<EditMode>, WriteSignal<EditMode>),
        input_value: (ReadSignal<String>, WriteSignal<String>),
        filter_query: (ReadSignal<String>, WriteSignal<String>),
    ) -> Self {
        Self {
            items: items.0,
            set_items: items.1,
            edit_mode: edit_mode.0,
            set_edit_mode: edit_mode.1,
            input_value: input_value.0,
            set_input_value: input_value.1,
            filter_query: filter_query.0,
            set_filter_query: filter_query.1,
        }
    }

    /// Update the form input field
    pub fn set_input(&self, value: String) {
        self.set_input_value.set(value);
    }

    /// Interpret the current input per the edit mode: fresh add or
    /// replace of the remembered row. Validation failures alert and
    /// leave list, store and mode untouched.
    pub fn submit_input(&self) {
        let input = self.input_value.get();
        let mode = self.edit_mode.get();

        let mut items = self.items.get();
        match list::submit(&mut items, &mode, &input) {
            Ok(()) => {
                store::save(&items);
                self.set_items.set(items);
                self.finish_mutation();
            }
            Err(err) => dialog::alert(err.message()),
        }
    }

    /// Remove one item (first match) and persist
    pub fn remove_item(&self, name: &str) {
        let mut items = self.items.get();
        list::remove(&mut items, name);
        store::save(&items);
        self.set_items.set(items);
        self.finish_mutation();
    }

    /// Empty the list after user confirmation; declining is a no-op
    pub fn clear_all(&self) {
        if !dialog::confirm("Are you sure?") {
            return;
        }
        store::clear();
        self.set_items.set(Vec::new());
        self.finish_mutation();
    }

    /// Mark a row as the edit target and pre-fill the input with its
    /// text; any prior target is replaced
    pub fn begin_edit(&self, name: &str) {
        self.set_edit_mode.set(EditMode::Editing(name.to_string()));
        self.set_input_value.set(name.to_string());
    }

    /// Store the debounced filter query
    pub fn apply_filter(&self, query: String) {
        self.set_filter_query.set(query);
    }

    /// Every completed mutation returns the form to add mode with an
    /// empty input
    fn finish_mutation(&self) {
        self.set_edit_mode.set(EditMode::Adding);
        self.set_input_value.set(String::new());
    }
}
