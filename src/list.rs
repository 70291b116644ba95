//! List Model
//!
//! Pure operations over the in-memory item list. Components mutate the
//! list only through these functions so that validation stays in one
//! place.

use crate::models::EditMode;

/// Validation failures surfaced to the user on submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    EmptyInput,
    Duplicate,
}

impl SubmitError {
    /// User-facing alert text
    pub fn message(&self) -> &'static str {
        match self {
            SubmitError::EmptyInput => "Please add an item!",
            SubmitError::Duplicate => "Item already exists!",
        }
    }
}

/// Exact (case-sensitive) membership test
pub fn exists(items: &[String], name: &str) -> bool {
    items.iter().any(|item| item == name)
}

/// Apply a form submission to the list.
///
/// In `Adding` mode the input must not already be present. In
/// `Editing` mode the remembered entry is removed first and the
/// duplicate check is skipped, so an edit may produce a pair of equal
/// entries; the replacement lands at the end of the list either way.
pub fn submit(items: &mut Vec<String>, mode: &EditMode, input: &str) -> Result<(), SubmitError> {
    if input.is_empty() {
        return Err(SubmitError::EmptyInput);
    }

    match mode {
        EditMode::Editing(target) => remove(items, target),
        EditMode::Adding => {
            if exists(items, input) {
                return Err(SubmitError::Duplicate);
            }
        }
    }

    items.push(input.to_string());
    Ok(())
}

/// Remove the first entry matching `name`; absent names are a no-op
pub fn remove(items: &mut Vec<String>, name: &str) {
    if let Some(pos) = items.iter().position(|item| item == name) {
        items.remove(pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EditMode;

    fn make_list(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut items = Vec::new();
        for name in ["Milk", "Bread", "Eggs"] {
            submit(&mut items, &EditMode::Adding, name).expect("add failed");
        }
        assert_eq!(items, make_list(&["Milk", "Bread", "Eggs"]));
    }

    #[test]
    fn test_add_duplicate_rejected() {
        let mut items = make_list(&["Milk", "Bread"]);
        let result = submit(&mut items, &EditMode::Adding, "Milk");
        assert_eq!(result, Err(SubmitError::Duplicate));
        assert_eq!(items, make_list(&["Milk", "Bread"]));
    }

    #[test]
    fn test_add_empty_rejected_in_both_modes() {
        let mut items = make_list(&["Milk"]);

        let adding = submit(&mut items, &EditMode::Adding, "");
        assert_eq!(adding, Err(SubmitError::EmptyInput));

        let editing = submit(&mut items, &EditMode::Editing("Milk".to_string()), "");
        assert_eq!(editing, Err(SubmitError::EmptyInput));

        // Neither attempt touched the list
        assert_eq!(items, make_list(&["Milk"]));
    }

    #[test]
    fn test_duplicate_check_is_case_sensitive() {
        let mut items = make_list(&["Milk", "Bread", "Eggs"]);
        submit(&mut items, &EditMode::Adding, "eggs").expect("'eggs' is not 'Eggs'");
        assert_eq!(items, make_list(&["Milk", "Bread", "Eggs", "eggs"]));
    }

    #[test]
    fn test_remove_drops_first_match_only() {
        let mut items = make_list(&["Bread", "Milk", "Bread"]);
        remove(&mut items, "Bread");
        assert_eq!(items, make_list(&["Milk", "Bread"]));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut items = make_list(&["Milk"]);
        remove(&mut items, "Cheese");
        assert_eq!(items, make_list(&["Milk"]));
    }

    #[test]
    fn test_edit_replaces_and_moves_to_end() {
        let mut items = make_list(&["Milk", "Bread"]);
        submit(&mut items, &EditMode::Editing("Milk".to_string()), "Oat Milk").expect("edit failed");
        assert_eq!(items, make_list(&["Bread", "Oat Milk"]));
    }

    #[test]
    fn test_edit_with_unchanged_text_reorders() {
        let mut items = make_list(&["Milk", "Bread"]);
        submit(&mut items, &EditMode::Editing("Milk".to_string()), "Milk").expect("edit failed");
        assert_eq!(items, make_list(&["Bread", "Milk"]));
    }

    #[test]
    fn test_edit_skips_duplicate_check() {
        // Editing a row to another row's text is allowed and leaves two
        // equal entries behind
        let mut items = make_list(&["Milk", "Bread"]);
        submit(&mut items, &EditMode::Editing("Milk".to_string()), "Bread").expect("edit failed");
        assert_eq!(items, make_list(&["Bread", "Bread"]));
    }

    #[test]
    fn test_exists() {
        let items = make_list(&["Milk", "Bread"]);
        assert!(exists(&items, "Milk"));
        assert!(!exists(&items, "milk"));
        assert!(!exists(&items, "Cheese"));
    }
}
