//! Error types for ferrara-site

use thiserror::Error;

/// Main error type for ferrara-site
#[derive(Debug, Error)]
pub enum SiteError {
    /// An anchor element the feature needs is not on the page
    #[error("Element not found: {0}")]
    MissingElement(String),

    /// A browser facility or script library is not available
    #[error("Unsupported facility: {0}")]
    UnsupportedFacility(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Review rating outside 1..=5
    #[error("Invalid rating: {0} (expected 1 to 5)")]
    InvalidRating(i64),

    /// Visibility threshold outside 0.0..=1.0
    #[error("Invalid visibility threshold: {0} (expected 0.0 to 1.0)")]
    InvalidThreshold(f64),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Exception raised by a DOM or script call
    #[error("JavaScript error: {0}")]
    Js(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<SiteError>,
    },
}

impl SiteError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        SiteError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Whether the error means "feature not present on this page"
    ///
    /// Missing anchors and missing facilities skip a feature quietly; every
    /// other error is worth a warning.
    pub fn is_absent_feature(&self) -> bool {
        match self {
            SiteError::MissingElement(_) | SiteError::UnsupportedFacility(_) => true,
            SiteError::WithContext { source, .. } => source.is_absent_feature(),
            _ => false,
        }
    }
}

impl From<toml::de::Error> for SiteError {
    fn from(err: toml::de::Error) -> Self {
        SiteError::Toml(err.to_string())
    }
}

/// Result type alias for ferrara-site
pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SiteError::MissingElement("#loadMoreReviews".to_string());
        assert_eq!(err.to_string(), "Element not found: #loadMoreReviews");
    }

    #[test]
    fn test_invalid_rating_display() {
        let err = SiteError::InvalidRating(7);
        assert_eq!(err.to_string(), "Invalid rating: 7 (expected 1 to 5)");
    }

    #[test]
    fn test_error_with_context() {
        let err = SiteError::Validation("batch size must be positive".to_string());
        let err = err.with_context("Failed to build review queue");
        assert!(err.to_string().contains("Failed to build review queue"));
    }

    #[test]
    fn test_absent_feature_sees_through_context() {
        let err = SiteError::UnsupportedFacility("Chart".to_string()).with_context("chart");
        assert!(err.is_absent_feature());
        assert!(!SiteError::Js("TypeError".to_string()).is_absent_feature());
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("= broken").unwrap_err();
        let err: SiteError = toml_err.into();
        assert!(matches!(err, SiteError::Toml(_)));
    }
}
