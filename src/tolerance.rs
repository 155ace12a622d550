//! Tolerance values and their percent text form
//!
//! The caller holds tolerances as fractions (`0.0025`); users see and type
//! percentages (`"0.25"`). These conversions are pure and never clamp.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A fractional acceptable-deviation setting, nominally `0.0..=1.0`
///
/// Construction does not validate. Invalid text typed by the user flows
/// through as NaN, see [`parse_percent`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToleranceValue(f64);

impl ToleranceValue {
    pub const ZERO: ToleranceValue = ToleranceValue(0.0);

    pub const fn new(fraction: f64) -> Self {
        Self(fraction)
    }

    /// The raw fraction
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Finite and within `0.0..=1.0`
    pub fn is_valid(self) -> bool {
        self.0.is_finite() && (0.0..=1.0).contains(&self.0)
    }

    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    /// Percent text without the `%` sign (e.g. `"0.25"`)
    pub fn to_display_percent(self) -> String {
        to_display_percent(self)
    }
}

impl fmt::Display for ToleranceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", to_display_percent(*self))
    }
}

/// Render `value * 100` as its shortest round-tripping decimal string
///
/// No fixed number of decimal places is imposed: `0.001` gives `"0.1"`,
/// `0.05` gives `"5"`, and `0.07` gives `"7.000000000000001"`.
pub fn to_display_percent(value: ToleranceValue) -> String {
    format!("{}", value.0 * 100.0)
}

/// Trigger text for the resting editor (e.g. `"0.25%"`)
pub fn format_percent_label(value: ToleranceValue) -> String {
    value.to_string()
}

/// Interpret percent text and divide by 100
///
/// - Surrounding whitespace is ignored
/// - Empty text is zero (a cleared input)
/// - Anything that is not a plain decimal number yields NaN
///
/// There is no range check; the input control owns the entry-time ceiling.
pub fn parse_percent(text: &str) -> ToleranceValue {
    ToleranceValue(parse_number(text) / 100.0)
}

/// Number-like parse of user text, NaN on failure
fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    // `f64::from_str` also accepts "inf" and "nan" spellings, which are not
    // numbers a user can type into a percent field.
    let plain = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'));
    if !plain {
        return f64::NAN;
    }

    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Percent text to a plain number without the /100 step, for bounds checks
pub(crate) fn percent_number(text: &str) -> f64 {
    parse_number(text)
}
