//! Error types surfaced by the component layer.

use thiserror::Error;

/// Failures raised while wiring components together.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    /// A context consumer was rendered without its provider ancestor.
    #[error("{component} must be used within its provider")]
    OutsideProvider {
        /// Name of the consumer that looked up the context.
        component: &'static str,
    },
}

/// Failures raised while loading [`crate::core::config::UiConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON payload could not be decoded.
    #[error("failed to parse ui configuration")]
    Parse {
        /// Decoder error detail.
        #[from]
        source: serde_json::Error,
    },
    /// A field decoded but failed validation.
    #[error("invalid ui configuration field {field}: {reason}")]
    InvalidField {
        /// Dotted path of the offending field.
        field: &'static str,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outside_provider_names_the_component() {
        let err = UiError::OutsideProvider {
            component: "CarouselItem",
        };
        assert_eq!(
            err.to_string(),
            "CarouselItem must be used within its provider"
        );
    }

    #[test]
    fn parse_error_converts_from_serde() {
        let err: ConfigError = serde_json::from_str::<u8>("nope")
            .map_err(ConfigError::from)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn invalid_field_display_includes_reason() {
        let err = ConfigError::InvalidField {
            field: "table.page_size",
            reason: "must_be_positive",
        };
        assert_eq!(
            err.to_string(),
            "invalid ui configuration field table.page_size: must_be_positive"
        );
    }
}
