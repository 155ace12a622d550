//! Bounded numeric text field state.

use super::constraints::InputConstraints;

/// Text buffer behind a numeric input control
///
/// Holds the raw text exactly as typed. Every edit is checked against the
/// constraints as a whole-field candidate, so text produced by editing is
/// never something the control would have refused. A seed is the exception:
/// it is shown as given, fully selected, and the first edit replaces it.
#[derive(Debug, Clone)]
pub struct NumericInput {
    text: String,
    constraints: InputConstraints,
    /// The whole text is selected; the next edit replaces it
    replace_on_next_edit: bool,
}

impl NumericInput {
    pub fn new(constraints: InputConstraints) -> Self {
        Self {
            text: String::new(),
            constraints,
            replace_on_next_edit: false,
        }
    }

    /// Seed the field with text, bypassing constraints
    ///
    /// Seeds come from the caller's current value and are shown as-is even if
    /// they would not be typeable. The seed starts out selected, so typing or
    /// pasting replaces it and backspace clears it.
    pub fn with_text(text: impl Into<String>, constraints: InputConstraints) -> Self {
        Self {
            text: text.into(),
            constraints,
            replace_on_next_edit: true,
        }
    }

    /// Current raw text
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether the next edit replaces the whole text
    pub fn is_seed_selected(&self) -> bool {
        self.replace_on_next_edit
    }

    /// Append a character. Returns false if the edit was refused.
    pub fn insert_char(&mut self, ch: char) -> bool {
        if !self.constraints.is_char_allowed(ch) {
            return false;
        }
        let mut candidate = if self.replace_on_next_edit {
            String::new()
        } else {
            self.text.clone()
        };
        candidate.push(ch);
        self.commit_candidate(candidate)
    }

    /// Remove the last character, or the whole selected seed.
    /// Returns false if there was nothing to remove.
    pub fn delete_backward(&mut self) -> bool {
        if self.replace_on_next_edit {
            return self.clear();
        }
        self.text.pop().is_some()
    }

    /// Empty the field
    pub fn clear(&mut self) -> bool {
        self.replace_on_next_edit = false;
        if self.text.is_empty() {
            return false;
        }
        self.text.clear();
        true
    }

    /// Replace the whole content (paste). Returns false if the edit was refused.
    pub fn set_text(&mut self, text: &str) -> bool {
        self.commit_candidate(text.to_string())
    }

    fn commit_candidate(&mut self, candidate: String) -> bool {
        if self.constraints.accepts(&candidate) {
            self.text = candidate;
            self.replace_on_next_edit = false;
            true
        } else {
            tracing::trace!(candidate = %candidate, "numeric input refused edit");
            false
        }
    }
}

impl Default for NumericInput {
    fn default() -> Self {
        Self::new(InputConstraints::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn percent_input(text: &str) -> NumericInput {
        NumericInput::with_text(text, InputConstraints::percent(100.0))
    }

    #[test]
    fn test_typing_digits() {
        let mut input = percent_input("");
        assert!(input.insert_char('5'));
        assert!(input.insert_char('.'));
        assert!(input.insert_char('2'));
        assert_eq!(input.text(), "5.2");
    }

    #[test]
    fn test_filtered_chars_are_refused() {
        let mut input = percent_input("1");
        assert!(!input.insert_char('x'));
        assert!(!input.insert_char('-'));
        assert_eq!(input.text(), "1");
    }

    #[test]
    fn test_ceiling_refuses_above_hundred() {
        let mut input = percent_input("");
        assert!(input.set_text("10"));
        assert!(input.insert_char('0'));
        assert_eq!(input.text(), "100");
        assert!(!input.insert_char('1'));
        assert_eq!(input.text(), "100");
    }

    #[test]
    fn test_set_text_respects_ceiling() {
        let mut input = percent_input("1");
        assert!(!input.set_text("250"));
        assert_eq!(input.text(), "1");
        assert!(input.set_text("2.5"));
        assert_eq!(input.text(), "2.5");
    }

    #[test]
    fn test_seed_bypasses_constraints() {
        let input = percent_input("7.000000000000001");
        assert_eq!(input.text(), "7.000000000000001");
    }

    #[test]
    fn test_delete_and_clear() {
        let mut input = percent_input("");
        assert!(input.set_text("0.25"));
        assert!(input.delete_backward());
        assert_eq!(input.text(), "0.2");
        assert!(input.clear());
        assert!(input.is_empty());
        assert!(!input.delete_backward());
        assert!(!input.clear());
    }

    #[test]
    fn test_first_keystroke_replaces_seed() {
        let mut input = percent_input("0.1");
        assert!(input.is_seed_selected());
        assert!(input.insert_char('5'));
        assert_eq!(input.text(), "5");
        assert!(!input.is_seed_selected());
        assert!(input.insert_char('0'));
        assert_eq!(input.text(), "50");
    }

    #[test]
    fn test_refused_keystroke_keeps_seed_selected() {
        let mut input = percent_input("0.25");
        assert!(!input.insert_char('x'));
        assert!(input.is_seed_selected());
        assert!(input.insert_char('7'));
        assert_eq!(input.text(), "7");
    }

    #[test]
    fn test_backspace_clears_selected_seed() {
        let mut input = percent_input("0.25");
        assert!(input.delete_backward());
        assert!(input.is_empty());
        assert!(!input.delete_backward());
    }
}
