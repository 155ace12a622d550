//! Localized string lookup
//!
//! The editor never hard-codes language text. Every label goes through a
//! [`StringGetter`], which hosts implement over their own translation tables.
//! A small English table ships for the demo binary and tests.

use std::fmt;

use serde::{Deserialize, Serialize};

/// String keys the editor and footer resolve
pub mod keys {
    pub const CUSTOM: &str = "APP.GENERAL.CUSTOM";
    pub const CANCEL: &str = "APP.GENERAL.CANCEL";
    pub const CONFIRM: &str = "APP.GENERAL.CONFIRM";
    pub const EDIT_SLIPPAGE: &str = "APP.TRADE.EDIT_SLIPPAGE";
    pub const OPERATIONAL: &str = "APP.FOOTER.OPERATIONAL";
    pub const DEGRADED: &str = "APP.FOOTER.DEGRADED";
    pub const HELP_AND_SUPPORT: &str = "APP.HEADER.HELP_AND_SUPPORT";
    pub const BLOCK_HEIGHT: &str = "APP.FOOTER.BLOCK_HEIGHT";
    pub const INDEXER_BLOCK_HEIGHT: &str = "APP.FOOTER.INDEXER_BLOCK_HEIGHT";
}

/// Resolve a key (with optional `{name}` parameters) to display text
///
/// Implementations must always return something renderable; a missing key is
/// the host's problem, not the editor's.
pub trait StringGetter {
    fn get(&self, key: &str, params: &[(&str, &str)]) -> String;

    /// Lookup without parameters
    fn text(&self, key: &str) -> String {
        self.get(key, &[])
    }
}

impl<F> StringGetter for F
where
    F: Fn(&str, &[(&str, &str)]) -> String,
{
    fn get(&self, key: &str, params: &[(&str, &str)]) -> String {
        self(key, params)
    }
}

/// Replace `{name}` placeholders with parameter values
pub fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    params
        .iter()
        .fold(template.to_string(), |acc, (name, value)| {
            acc.replace(&format!("{{{}}}", name), value)
        })
}

/// Bundled English strings, falling back to the key itself
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishStrings;

impl EnglishStrings {
    fn lookup(key: &str) -> Option<&'static str> {
        let text = match key {
            keys::CUSTOM => "Custom",
            keys::CANCEL => "Cancel",
            keys::CONFIRM => "Confirm",
            keys::EDIT_SLIPPAGE => "Edit slippage ({VALUE})",
            keys::OPERATIONAL => "Operational",
            keys::DEGRADED => "Degraded",
            keys::HELP_AND_SUPPORT => "Help & Support",
            keys::BLOCK_HEIGHT => "Block Height",
            keys::INDEXER_BLOCK_HEIGHT => "Indexer Block Height",
            _ => return None,
        };
        Some(text)
    }
}

impl StringGetter for EnglishStrings {
    fn get(&self, key: &str, params: &[(&str, &str)]) -> String {
        match Self::lookup(key) {
            Some(template) => interpolate(template, params),
            None => {
                tracing::debug!(key, "missing string key");
                key.to_string()
            }
        }
    }
}

// ============================================================================
// Locales
// ============================================================================

/// Locales the application ships translations for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SupportedLocale {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "zh-CN")]
    ZhCn,
    #[serde(rename = "ja")]
    Ja,
    #[serde(rename = "ko")]
    Ko,
    #[serde(rename = "ru")]
    Ru,
    #[serde(rename = "tr")]
    Tr,
    #[serde(rename = "fr")]
    Fr,
    #[serde(rename = "pt")]
    Pt,
    #[serde(rename = "es")]
    Es,
    #[serde(rename = "de")]
    De,
}

impl SupportedLocale {
    /// BCP 47 tag (e.g. `zh-CN`)
    pub fn tag(self) -> &'static str {
        match self {
            SupportedLocale::En => "en",
            SupportedLocale::ZhCn => "zh-CN",
            SupportedLocale::Ja => "ja",
            SupportedLocale::Ko => "ko",
            SupportedLocale::Ru => "ru",
            SupportedLocale::Tr => "tr",
            SupportedLocale::Fr => "fr",
            SupportedLocale::Pt => "pt",
            SupportedLocale::Es => "es",
            SupportedLocale::De => "de",
        }
    }
}

impl fmt::Display for SupportedLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
