//! Entry constraints for the numeric input primitive.
//!
//! Constraints decide which edits the control accepts at entry time. They never
//! rewrite text; a rejected edit leaves the buffer as it was.

use crate::tolerance::percent_number;

/// Character filter function type
pub type CharFilter = fn(char) -> bool;

/// Limits applied to every edit of a [`NumericInput`](super::NumericInput).
#[derive(Debug, Clone)]
pub struct InputConstraints {
    /// Largest number the text may parse to (None = unbounded)
    pub max_value: Option<f64>,

    /// Maximum length in characters (None = unlimited)
    pub max_length: Option<usize>,

    /// Character filter (None = all characters allowed)
    /// Returns true if character is allowed
    pub char_filter: Option<CharFilter>,

    /// Allow a single decimal separator
    pub allow_decimal: bool,
}

impl Default for InputConstraints {
    fn default() -> Self {
        Self::percent(100.0)
    }
}

impl InputConstraints {
    /// Percent entry: digits with one `.`, bounded above by `max_percent`
    pub fn percent(max_percent: f64) -> Self {
        Self {
            max_value: Some(max_percent),
            max_length: Some(24),
            char_filter: Some(|c| c.is_ascii_digit() || c == '.'),
            allow_decimal: true,
        }
    }

    /// Check if a character passes the filter (if any)
    pub fn is_char_allowed(&self, ch: char) -> bool {
        match self.char_filter {
            Some(filter) => filter(ch),
            None => true,
        }
    }

    /// Check if inserting text would exceed max length
    pub fn would_exceed_max_length(&self, current_len: usize, insert_len: usize) -> bool {
        if let Some(max) = self.max_length {
            current_len + insert_len > max
        } else {
            false
        }
    }

    /// Whether `candidate` is acceptable as the full content of the field
    ///
    /// Partial text (`""`, `"."`, `"5."`) is allowed so the user can type
    /// through it; only a parseable number above the ceiling is refused.
    pub fn accepts(&self, candidate: &str) -> bool {
        if self.would_exceed_max_length(0, candidate.chars().count()) {
            return false;
        }
        if !candidate.chars().all(|c| self.is_char_allowed(c)) {
            return false;
        }

        let separators = candidate.matches('.').count();
        if separators > usize::from(self.allow_decimal) {
            return false;
        }

        match self.max_value {
            Some(max) => {
                let value = percent_number(candidate);
                value.is_nan() || value <= max
            }
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_constraints() {
        let c = InputConstraints::percent(100.0);
        assert!(c.is_char_allowed('0'));
        assert!(c.is_char_allowed('.'));
        assert!(!c.is_char_allowed('a'));
        assert!(!c.is_char_allowed('-'));
    }

    #[test]
    fn test_ceiling_is_inclusive() {
        let c = InputConstraints::percent(100.0);
        assert!(c.accepts("100"));
        assert!(c.accepts("99.99"));
        assert!(!c.accepts("100.5"));
        assert!(!c.accepts("101"));
    }

    #[test]
    fn test_partial_text_is_accepted() {
        let c = InputConstraints::percent(100.0);
        assert!(c.accepts(""));
        assert!(c.accepts("."));
        assert!(c.accepts("5."));
        assert!(!c.accepts("5.."));
    }

    #[test]
    fn test_decimal_can_be_disallowed() {
        let c = InputConstraints {
            allow_decimal: false,
            ..InputConstraints::percent(100.0)
        };
        assert!(c.accepts("42"));
        assert!(!c.accepts("1.5"));
    }

    #[test]
    fn test_max_length() {
        let c = InputConstraints::percent(100.0);
        assert!(!c.would_exceed_max_length(20, 4));
        assert!(c.would_exceed_max_length(22, 3));
        let at_limit = format!("0.{}1", "0".repeat(21));
        assert!(c.accepts(&at_limit));
        assert!(!c.accepts(&format!("{}0", at_limit)));
    }
}
