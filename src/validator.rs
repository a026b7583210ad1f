use crate::handlers::validation::dnsmx::{MxOutcome, MxResolver};
use crate::handlers::validation::suggestion::{
    DOMAIN_SUGGESTION_THRESHOLD, TLD_SUGGESTION_THRESHOLD, suggest,
};
use crate::handlers::validation::{disposable, syntax};
use crate::models::email::{DomainParts, EmailParts};
use crate::models::reference::ReferenceData;
use crate::models::validation::{ValidationError, ValidationResult};
use std::sync::Arc;
use tracing::debug;

/// # Email Validator
///
/// Runs an address through a fixed sequence of checks and stops at the first
/// one that fails:
/// 1. Format check
/// 2. Domain typo suggestion against the popular-domain list
/// 3. TLD typo suggestion against the popular-TLD list
/// 4. Disposable domain check
/// 5. MX record lookup
///
/// The reference data is immutable and the resolver is shared, so one instance
/// can serve any number of concurrent validations. Cloning is cheap.
///
/// # Example
/// ```no_run
/// use email_validator::handlers::validation::dnsmx::DnsMxResolver;
/// use email_validator::models::ReferenceData;
/// use email_validator::validator::EmailValidator;
/// use std::time::Duration;
///
/// # async fn example() {
/// let reference = ReferenceData::builder()
///     .popular_domains(["gmail.com"])
///     .popular_tlds(["com"])
///     .disposable_domains(["mailinator.com"])
///     .build();
/// let validator = EmailValidator::new(reference, DnsMxResolver::new(Duration::from_secs(2), 2));
///
/// let result = validator.validate("user@gnail.com").await;
/// assert_eq!(
///     result.error.as_deref(),
///     Some("Invalid domain 'gnail.com'. Did you mean 'gmail.com'?")
/// );
/// # }
/// ```
#[derive(Clone)]
pub struct EmailValidator {
    reference: ReferenceData,
    resolver: Arc<dyn MxResolver>,
}

impl EmailValidator {
    pub fn new<R>(reference: ReferenceData, resolver: R) -> Self
    where
        R: MxResolver + 'static,
    {
        Self::with_shared_resolver(reference, Arc::new(resolver))
    }

    pub fn with_shared_resolver(reference: ReferenceData, resolver: Arc<dyn MxResolver>) -> Self {
        Self {
            reference,
            resolver,
        }
    }

    pub fn reference_data(&self) -> &ReferenceData {
        &self.reference
    }

    /// Validates `email` and reports the verdict as a [`ValidationResult`].
    pub async fn validate(&self, email: &str) -> ValidationResult {
        self.check(email).await.into()
    }

    /// Runs the pipeline, returning the first failing stage as an error.
    pub async fn check(&self, email: &str) -> Result<(), ValidationError> {
        let outcome = self.run_stages(email).await;
        let domain = EmailParts::split(email).map_or("", |parts| parts.domain_part);
        match &outcome {
            Ok(()) => debug!(domain, "email accepted"),
            Err(e) => debug!(domain, code = e.code(), retryable = e.is_retryable(), "email rejected"),
        }
        outcome
    }

    async fn run_stages(&self, email: &str) -> Result<(), ValidationError> {
        if !syntax::is_valid_email(email) {
            return Err(ValidationError::Format);
        }
        let parts = EmailParts::split(email).ok_or(ValidationError::Format)?;
        let domain = parts.domain_part.to_lowercase();

        self.check_domain(&domain)?;
        self.check_tld(&domain)?;
        self.check_disposable(&domain)?;
        self.check_mx(&domain).await
    }

    /// The popular-domain list only corrects typos: a domain that is neither
    /// listed nor close to a listed one passes.
    fn check_domain(&self, domain: &str) -> Result<(), ValidationError> {
        match suggest(
            domain,
            self.reference.popular_domains(),
            DOMAIN_SUGGESTION_THRESHOLD,
        ) {
            Some(suggestion) => {
                debug!(domain, suggestion, "domain looks like a typo");
                Err(ValidationError::DomainTypo {
                    domain: domain.to_string(),
                    suggestion: suggestion.to_string(),
                })
            }
            None => Ok(()),
        }
    }

    fn check_tld(&self, domain: &str) -> Result<(), ValidationError> {
        let Some(DomainParts { tld, .. }) = DomainParts::split(domain) else {
            return Ok(());
        };

        match suggest(tld, self.reference.popular_tlds(), TLD_SUGGESTION_THRESHOLD) {
            Some(suggestion) => {
                debug!(tld, suggestion, "TLD looks like a typo");
                Err(ValidationError::TldTypo {
                    tld: tld.to_string(),
                    suggestion: suggestion.to_string(),
                })
            }
            None => Ok(()),
        }
    }

    fn check_disposable(&self, domain: &str) -> Result<(), ValidationError> {
        if disposable::is_disposable_domain(domain, self.reference.disposable_domains()) {
            debug!(domain, "domain is a disposable provider");
            return Err(ValidationError::Disposable);
        }
        Ok(())
    }

    async fn check_mx(&self, domain: &str) -> Result<(), ValidationError> {
        match self.resolver.mx_exists(domain).await {
            MxOutcome::Exists => Ok(()),
            MxOutcome::Absent => Err(ValidationError::NoMxRecords {
                domain: domain.to_string(),
            }),
            MxOutcome::Timeout => Err(ValidationError::ResolverTimeout),
        }
    }
}

#[cfg(test)]
#[path = "validator_test.rs"]
mod tests;
