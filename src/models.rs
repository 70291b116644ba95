//! Frontend Models
//!
//! Core state types shared across components.

/// Whether the form submits a fresh item or replaces an existing one
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Adding,
    /// Carries the text the edited row had when editing began
    Editing(String),
}

impl EditMode {
    pub fn is_editing(&self) -> bool {
        matches!(self, EditMode::Editing(_))
    }

    /// True when `name` is the row currently being edited
    pub fn is_target(&self, name: &str) -> bool {
        matches!(self, EditMode::Editing(target) if target == name)
    }
}
