//! Quick-pick presets offered while selecting

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::strings::{keys, StringGetter};
use crate::tolerance::ToleranceValue;

/// Wire form of the custom-entry sentinel
pub const CUSTOM_SENTINEL: &str = "custom";

/// What picking a preset does
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PresetValue {
    /// Commit this tolerance immediately
    Value(ToleranceValue),
    /// Open free-text entry
    Custom,
}

impl PresetValue {
    /// The concrete tolerance, if any
    pub fn value(self) -> Option<ToleranceValue> {
        match self {
            PresetValue::Value(v) => Some(v),
            PresetValue::Custom => None,
        }
    }
}

impl FromStr for PresetValue {
    type Err = PresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(CUSTOM_SENTINEL) {
            return Ok(PresetValue::Custom);
        }
        let fraction: f64 = s
            .parse()
            .map_err(|_| PresetError::InvalidValue(s.to_string()))?;
        let value = ToleranceValue::new(fraction);
        if !value.is_valid() {
            return Err(PresetError::OutOfRange(fraction));
        }
        Ok(PresetValue::Value(value))
    }
}

impl fmt::Display for PresetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresetValue::Value(v) => write!(f, "{}", v.get()),
            PresetValue::Custom => f.write_str(CUSTOM_SENTINEL),
        }
    }
}

impl Serialize for PresetValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PresetValue {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Accept both `value: 0.001` and `value: "0.001"` in YAML
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        let text = match Raw::deserialize(deserializer)? {
            Raw::Number(n) => n.to_string(),
            Raw::Text(s) => s,
        };
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Where a preset's label comes from
#[derive(Debug, Clone, PartialEq)]
pub enum LabelSource {
    /// Shown verbatim (numeric labels like `0.1%` need no translation)
    Literal(String),
    /// Resolved through the string getter
    Key(String),
}

/// A caller-configured quick-pick option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPreset", into = "RawPreset")]
pub struct PresetOption {
    pub label: LabelSource,
    pub value: PresetValue,
}

/// Config file shape: exactly one of `label` / `label_key`
#[derive(Serialize, Deserialize)]
struct RawPreset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label_key: Option<String>,
    value: PresetValue,
}

impl TryFrom<RawPreset> for PresetOption {
    type Error = PresetError;

    fn try_from(raw: RawPreset) -> Result<Self, Self::Error> {
        let label = match (raw.label, raw.label_key) {
            (Some(text), None) => LabelSource::Literal(text),
            (None, Some(key)) => LabelSource::Key(key),
            (Some(_), Some(_)) => return Err(PresetError::AmbiguousLabel),
            (None, None) => return Err(PresetError::MissingLabel),
        };
        Ok(Self {
            label,
            value: raw.value,
        })
    }
}

impl From<PresetOption> for RawPreset {
    fn from(preset: PresetOption) -> Self {
        let (label, label_key) = match preset.label {
            LabelSource::Literal(text) => (Some(text), None),
            LabelSource::Key(key) => (None, Some(key)),
        };
        Self {
            label,
            label_key,
            value: preset.value,
        }
    }
}

impl PresetOption {
    pub fn literal(label: impl Into<String>, value: PresetValue) -> Self {
        Self {
            label: LabelSource::Literal(label.into()),
            value,
        }
    }

    pub fn keyed(key: impl Into<String>, value: PresetValue) -> Self {
        Self {
            label: LabelSource::Key(key.into()),
            value,
        }
    }

    /// Resolve the display label
    pub fn display_label(&self, strings: &dyn StringGetter) -> String {
        match &self.label {
            LabelSource::Literal(text) => text.clone(),
            LabelSource::Key(key) => strings.text(key),
        }
    }
}

/// `0.1%`, `0.25%`, then custom entry
pub fn default_presets() -> Vec<PresetOption> {
    vec![
        PresetOption::literal("0.1%", PresetValue::Value(ToleranceValue::new(0.001))),
        PresetOption::literal("0.25%", PresetValue::Value(ToleranceValue::new(0.0025))),
        PresetOption::keyed(keys::CUSTOM, PresetValue::Custom),
    ]
}

/// Errors from parsing configured presets
#[derive(Debug, Clone, PartialEq)]
pub enum PresetError {
    InvalidValue(String),
    OutOfRange(f64),
    MissingLabel,
    AmbiguousLabel,
    Empty,
}

impl fmt::Display for PresetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresetError::InvalidValue(v) => {
                write!(f, "Invalid preset value '{}' (expected a fraction or \"custom\")", v)
            }
            PresetError::OutOfRange(v) => write!(f, "Preset value {} is outside 0..=1", v),
            PresetError::MissingLabel => write!(f, "Preset needs a label or label_key"),
            PresetError::AmbiguousLabel => {
                write!(f, "Preset has both label and label_key, pick one")
            }
            PresetError::Empty => write!(f, "Preset list is empty"),
        }
    }
}

impl std::error::Error for PresetError {}
