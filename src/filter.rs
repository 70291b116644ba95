//! Filter Controller
//!
//! Case-insensitive substring matching plus the debounce timer that
//! holds evaluation back until typing settles.

use gloo_timers::callback::Timeout;

/// Delay before a filter keystroke is applied
pub const DEBOUNCE_MS: u32 = 300;

/// Case-insensitive substring match; an empty query matches everything
pub fn matches(text: &str, query: &str) -> bool {
    text.to_lowercase().contains(&query.to_lowercase())
}

/// Single-slot debouncer: each `schedule` cancels the pending timeout
/// and arms a new one, so only the most recent callback ever fires.
pub struct Debouncer {
    delay_ms: u32,
    pending: Option<Timeout>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    /// Cancel any pending callback and arm a new one
    pub fn schedule<F>(&mut self, callback: F)
    where
        F: FnOnce() + 'static,
    {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
        self.pending = Some(Timeout::new(self.delay_ms, callback));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_matches_everything() {
        assert!(matches("Milk", ""));
        assert!(matches("", ""));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert!(matches("Eggs", "egg"));
        assert!(matches("eggs", "EGG"));
        assert!(!matches("Bread", "egg"));
    }

    #[test]
    fn test_match_is_substring_anywhere() {
        assert!(matches("Oat Milk", "t m"));
        assert!(matches("Oat Milk", "milk"));
        assert!(!matches("Oat Milk", "milks"));
    }

    #[test]
    fn test_filter_egg_example() {
        let items = ["Milk", "Bread", "Eggs", "eggs"];
        let shown: Vec<&str> = items
            .iter()
            .copied()
            .filter(|item| matches(item, "egg"))
            .collect();
        assert_eq!(shown, vec!["Eggs", "eggs"]);
    }
}
