use crate::models::reference::ReferenceSet;

/// Checks whether `domain` belongs to a known disposable email provider.
///
/// Exact membership only: subdomains of a listed domain are not matched.
///
/// # Example
/// ```
/// use email_validator::handlers::validation::disposable::is_disposable_domain;
/// use email_validator::models::ReferenceSet;
///
/// let disposable: ReferenceSet = ["mailinator.com"].into_iter().collect();
/// assert!(is_disposable_domain("mailinator.com", &disposable));
/// assert!(!is_disposable_domain("gmail.com", &disposable));
/// ```
pub fn is_disposable_domain(domain: &str, disposable: &ReferenceSet) -> bool {
    disposable.contains(domain)
}
