//! Runtime configuration for the component gallery.
//!
//! Configuration is optional JSON; every field has a default so a partial
//! document only overrides what it names.

use serde::{Deserialize, Serialize};

use crate::core::carousel::CarouselOptions;
use crate::core::error::ConfigError;
use crate::core::table::{DEFAULT_PAGE_SIZE, NextPagePolicy};

/// Largest accepted table page size.
pub const MAX_PAGE_SIZE: usize = 500;
/// Shortest accepted autoplay interval.
pub const MIN_AUTOPLAY_MS: u32 = 250;
/// Longest accepted tooltip delay.
pub const MAX_TOOLTIP_DELAY_MS: u32 = 10_000;

/// Data table defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Rows per page.
    pub page_size: usize,
    /// Whether "Next" stops at the last page.
    pub next_page_policy: NextPagePolicy,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            next_page_policy: NextPagePolicy::Bounded,
        }
    }
}

/// Tooltip timing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
    /// Hover/focus time before the tooltip opens.
    pub delay_ms: u32,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self { delay_ms: 700 }
    }
}

/// Top-level UI configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Data table defaults.
    pub table: TableConfig,
    /// Carousel engine options.
    pub carousel: CarouselOptions,
    /// Tooltip timing.
    pub tooltip: TooltipConfig,
}

impl UiConfig {
    /// Parse and validate a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::InvalidField`] when a value is out of range.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError::InvalidField`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.table.page_size == 0 {
            return Err(invalid("table.page_size", "must_be_positive"));
        }
        if self.table.page_size > MAX_PAGE_SIZE {
            return Err(invalid("table.page_size", "too_large"));
        }
        if self.carousel.slides_to_scroll == 0 {
            return Err(invalid("carousel.slides_to_scroll", "must_be_positive"));
        }
        let threshold = self.carousel.drag_threshold_px;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(invalid("carousel.drag_threshold_px", "must_be_non_negative"));
        }
        if self
            .carousel
            .autoplay_ms
            .is_some_and(|interval| interval < MIN_AUTOPLAY_MS)
        {
            return Err(invalid("carousel.autoplay_ms", "too_short"));
        }
        if self.tooltip.delay_ms > MAX_TOOLTIP_DELAY_MS {
            return Err(invalid("tooltip.delay_ms", "too_long"));
        }
        Ok(())
    }
}

const fn invalid(field: &'static str, reason: &'static str) -> ConfigError {
    ConfigError::InvalidField { field, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = UiConfig::from_json("{}").expect("defaults");
        assert_eq!(config, UiConfig::default());
        assert_eq!(config.table.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.tooltip.delay_ms, 700);
    }

    #[test]
    fn partial_document_overrides_named_fields() {
        let config = UiConfig::from_json(
            r#"{"table":{"next_page_policy":"unbounded"},"carousel":{"loop":true}}"#,
        )
        .expect("config");
        assert_eq!(config.table.next_page_policy, NextPagePolicy::Unbounded);
        assert_eq!(config.table.page_size, DEFAULT_PAGE_SIZE);
        assert!(config.carousel.looping);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = UiConfig::from_json("{").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn out_of_range_values_name_the_field() {
        let cases = [
            (r#"{"table":{"page_size":0}}"#, "table.page_size"),
            (r#"{"table":{"page_size":501}}"#, "table.page_size"),
            (r#"{"carousel":{"slides_to_scroll":0}}"#, "carousel.slides_to_scroll"),
            (r#"{"carousel":{"drag_threshold_px":-1.0}}"#, "carousel.drag_threshold_px"),
            (r#"{"carousel":{"autoplay_ms":10}}"#, "carousel.autoplay_ms"),
            (r#"{"tooltip":{"delay_ms":60000}}"#, "tooltip.delay_ms"),
        ];
        for (raw, expected) in cases {
            match UiConfig::from_json(raw) {
                Err(ConfigError::InvalidField { field, .. }) => assert_eq!(field, expected),
                other => panic!("expected invalid field for {raw}, got {other:?}"),
            }
        }
    }
}
