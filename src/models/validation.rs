use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// # Validation Failure
///
/// One variant per pipeline stage. The `Display` text of each variant is the
/// exact message returned to callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid email format")]
    Format,

    #[error("Invalid domain '{domain}'. Did you mean '{suggestion}'?")]
    DomainTypo { domain: String, suggestion: String },

    #[error("Invalid TLD '{tld}'. Did you mean '{suggestion}'?")]
    TldTypo { tld: String, suggestion: String },

    #[error("Disposable email addresses are not allowed")]
    Disposable,

    #[error("Operation timed out. Check your connection and try again.")]
    ResolverTimeout,

    #[error("No MX records found for domain '{domain}'")]
    NoMxRecords { domain: String },
}

impl ValidationError {
    /// Stable machine-readable code, used in logs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Format => "INVALID_FORMAT",
            Self::DomainTypo { .. } => "DOMAIN_TYPO",
            Self::TldTypo { .. } => "TLD_TYPO",
            Self::Disposable => "DISPOSABLE_EMAIL",
            Self::ResolverTimeout => "DNS_TIMEOUT",
            Self::NoMxRecords { .. } => "NO_MX_RECORDS",
        }
    }

    /// Only a resolver timeout says nothing about the address itself.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::ResolverTimeout)
    }
}

/// # Validation Result
///
/// Either `{"valid": true}` or `{"valid": false, "error": "<message>"}`.
///
/// ## Example JSON
/// ```json
/// {
///   "valid": false,
///   "error": "Invalid domain 'gnail.com'. Did you mean 'gmail.com'?"
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    pub fn invalid(error: &ValidationError) -> Self {
        Self {
            valid: false,
            error: Some(error.to_string()),
        }
    }
}

impl From<Result<(), ValidationError>> for ValidationResult {
    fn from(outcome: Result<(), ValidationError>) -> Self {
        match outcome {
            Ok(()) => Self::valid(),
            Err(e) => Self::invalid(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_messages_match_wire_format() {
        assert_eq!(ValidationError::Format.to_string(), "Invalid email format");
        assert_eq!(
            ValidationError::DomainTypo {
                domain: "gnail.com".to_string(),
                suggestion: "gmail.com".to_string(),
            }
            .to_string(),
            "Invalid domain 'gnail.com'. Did you mean 'gmail.com'?"
        );
        assert_eq!(
            ValidationError::TldTypo {
                tld: "co".to_string(),
                suggestion: "com".to_string(),
            }
            .to_string(),
            "Invalid TLD 'co'. Did you mean 'com'?"
        );
        assert_eq!(
            ValidationError::Disposable.to_string(),
            "Disposable email addresses are not allowed"
        );
        assert_eq!(
            ValidationError::ResolverTimeout.to_string(),
            "Operation timed out. Check your connection and try again."
        );
        assert_eq!(
            ValidationError::NoMxRecords {
                domain: "custom.com".to_string()
            }
            .to_string(),
            "No MX records found for domain 'custom.com'"
        );
    }

    #[test]
    fn test_only_timeout_is_retryable() {
        assert!(ValidationError::ResolverTimeout.is_retryable());
        assert!(!ValidationError::Disposable.is_retryable());
        assert!(!ValidationError::Format.is_retryable());
    }

    #[test]
    fn test_valid_result_omits_error() {
        let value = serde_json::to_value(ValidationResult::valid()).unwrap();
        assert_eq!(value, json!({ "valid": true }));
    }

    #[test]
    fn test_invalid_result_from_error() {
        let result = ValidationResult::from(Err(ValidationError::Disposable));
        assert!(!result.valid);
        assert_eq!(
            result.error.as_deref(),
            Some("Disposable email addresses are not allowed")
        );
    }
}
