//! Numeric input primitive used for custom tolerance entry.
//!
//! The control enforces an entry-time ceiling and a character filter, and it
//! reports raw text only. Turning that text into a tolerance is the job of
//! [`crate::tolerance::parse_percent`].

mod constraints;
mod input;

pub use constraints::{CharFilter, InputConstraints};
pub use input::NumericInput;
