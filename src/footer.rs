//! Footer status bar - exchange status, support entry and block heights
//!
//! Caller-side companion of the editor: a segment-based status bar derived
//! from the API state. The support chat is an injected capability, never a
//! global lookup.

use serde::Serialize;

use crate::strings::{keys, StringGetter};

/// Health reported by the API client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiStatus {
    Normal,
    Unknown,
    ValidatorDown,
    ValidatorHalted,
    IndexerDown,
    IndexerHalted,
    IndexerTrailing,
}

/// Snapshot of the API state the footer renders from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiState {
    pub height: Option<u64>,
    pub indexer_height: Option<u64>,
    pub status: Option<ApiStatus>,
    pub status_error_message: Option<String>,
}

/// Two-level summary of [`ApiStatus`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExchangeStatus {
    Operational,
    Degraded,
}

impl ExchangeStatus {
    /// No status yet counts as operational
    pub fn from_api(status: Option<ApiStatus>) -> Self {
        match status {
            None | Some(ApiStatus::Normal) => ExchangeStatus::Operational,
            Some(_) => ExchangeStatus::Degraded,
        }
    }

    fn label_key(self) -> &'static str {
        match self {
            ExchangeStatus::Operational => keys::OPERATIONAL,
            ExchangeStatus::Degraded => keys::DEGRADED,
        }
    }
}

/// Whether this is a production build of the host app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildMode {
    #[default]
    Production,
    Development,
}

/// Opens the host's support chat widget
pub trait SupportChat {
    fn show(&self);
}

// ============================================================================
// Segments
// ============================================================================

/// Identifier for footer segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FooterSegmentId {
    ExchangeStatus,
    SupportChat,
    ChainHeight,
    IndexerHeight,
}

/// A single footer segment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FooterSegment {
    pub id: FooterSegmentId,
    pub label: String,
    /// Right-hand value (block heights)
    pub value: Option<String>,
    pub tooltip: Option<String>,
    pub link: Option<String>,
    pub enabled: bool,
    /// Rendered in the warning color
    pub warning: bool,
}

impl FooterSegment {
    fn new(id: FooterSegmentId, label: String) -> Self {
        Self {
            id,
            label,
            value: None,
            tooltip: None,
            link: None,
            enabled: true,
            warning: false,
        }
    }
}

/// The complete footer state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FooterStatus {
    pub exchange_status: ExchangeStatus,
    segments: Vec<FooterSegment>,
}

impl FooterStatus {
    /// Build the footer for the current API state
    pub fn build(
        api: &ApiState,
        status_page: Option<&str>,
        support_available: bool,
        mode: BuildMode,
        strings: &dyn StringGetter,
    ) -> Self {
        let exchange_status = ExchangeStatus::from_api(api.status);
        let mut segments = Vec::new();

        let mut status = FooterSegment::new(
            FooterSegmentId::ExchangeStatus,
            strings.text(exchange_status.label_key()),
        );
        status.tooltip = api.status_error_message.clone();
        status.link = status_page.map(str::to_string);
        status.enabled = status_page.is_some();
        status.warning = exchange_status == ExchangeStatus::Degraded;
        segments.push(status);

        if support_available {
            segments.push(FooterSegment::new(
                FooterSegmentId::SupportChat,
                strings.text(keys::HELP_AND_SUPPORT),
            ));
        }

        if mode != BuildMode::Production {
            let mut chain = FooterSegment::new(
                FooterSegmentId::ChainHeight,
                strings.text(keys::BLOCK_HEIGHT),
            );
            chain.value = api.height.map(format_grouped);
            segments.push(chain);

            if api.height != api.indexer_height {
                let mut indexer = FooterSegment::new(
                    FooterSegmentId::IndexerHeight,
                    strings.text(keys::INDEXER_BLOCK_HEIGHT),
                );
                indexer.value = api.indexer_height.map(format_grouped);
                indexer.warning = true;
                segments.push(indexer);
            }
        }

        Self {
            exchange_status,
            segments,
        }
    }

    /// Get a segment by ID
    pub fn get_segment(&self, id: FooterSegmentId) -> Option<&FooterSegment> {
        self.segments.iter().find(|s| s.id == id)
    }

    /// Iterate over all segments, left to right
    pub fn segments(&self) -> impl Iterator<Item = &FooterSegment> {
        self.segments.iter()
    }
}

/// Footer with its injected capabilities
pub struct Footer {
    support_chat: Option<Box<dyn SupportChat>>,
    status_page: Option<String>,
    mode: BuildMode,
}

impl Footer {
    pub fn new(mode: BuildMode) -> Self {
        Self {
            support_chat: None,
            status_page: None,
            mode,
        }
    }

    /// Provide a support chat (builder pattern)
    pub fn with_support_chat(mut self, chat: impl SupportChat + 'static) -> Self {
        self.support_chat = Some(Box::new(chat));
        self
    }

    /// Link the status segment to a status page (builder pattern)
    pub fn with_status_page(mut self, url: impl Into<String>) -> Self {
        self.status_page = Some(url.into());
        self
    }

    pub fn status(&self, api: &ApiState, strings: &dyn StringGetter) -> FooterStatus {
        FooterStatus::build(
            api,
            self.status_page.as_deref(),
            self.support_chat.is_some(),
            self.mode,
            strings,
        )
    }

    /// Activate the support segment. Returns false when no chat is available.
    pub fn open_support_chat(&self) -> bool {
        match &self.support_chat {
            Some(chat) => {
                chat.show();
                true
            }
            None => false,
        }
    }
}

/// `1234567` → `"1,234,567"`
pub fn format_grouped(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(999), "999");
        assert_eq!(format_grouped(1_000), "1,000");
        assert_eq!(format_grouped(1_234_567), "1,234,567");
    }

    #[test]
    fn test_exchange_status_mapping() {
        assert_eq!(ExchangeStatus::from_api(None), ExchangeStatus::Operational);
        assert_eq!(
            ExchangeStatus::from_api(Some(ApiStatus::Normal)),
            ExchangeStatus::Operational
        );
        assert_eq!(
            ExchangeStatus::from_api(Some(ApiStatus::IndexerTrailing)),
            ExchangeStatus::Degraded
        );
    }
}
