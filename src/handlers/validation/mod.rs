/// Mail-exchange lookup behind the [`dnsmx::MxResolver`] trait.
///
/// # Examples
/// ```no_run
/// use email_validator::handlers::validation::dnsmx::{DnsMxResolver, MxOutcome, MxResolver};
/// use std::time::Duration;
///
/// # async fn example() {
/// let resolver = DnsMxResolver::new(Duration::from_secs(2), 2);
/// assert_eq!(resolver.mx_exists("gmail.com").await, MxOutcome::Exists);
/// # }
/// ```
pub mod dnsmx;

/// Exact-match lookup of a domain in the disposable-provider list.
pub mod disposable;

/// Edit distance between short strings.
pub mod similarity;

/// "Did you mean" suggestions drawn from a reference set.
///
/// # Examples
/// ```
/// use email_validator::handlers::validation::suggestion::{suggest, DOMAIN_SUGGESTION_THRESHOLD};
/// use email_validator::models::ReferenceSet;
///
/// let domains: ReferenceSet = ["gmail.com", "yahoo.com"].into_iter().collect();
/// assert_eq!(suggest("gnail.com", &domains, DOMAIN_SUGGESTION_THRESHOLD), Some("gmail.com"));
/// assert_eq!(suggest("gmail.com", &domains, DOMAIN_SUGGESTION_THRESHOLD), None);
/// ```
pub mod suggestion;

/// Plausible-shape check of an email address.
pub mod syntax;
