use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};
use trust_dns_resolver::{
    TokioAsyncResolver,
    config::{ResolverConfig, ResolverOpts},
    error::ResolveErrorKind,
    proto::op::ResponseCode,
};

/// Outcome of a mail-exchange lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MxOutcome {
    /// At least one MX record was returned.
    Exists,
    /// The lookup completed without MX records, or the domain does not exist.
    Absent,
    /// The lookup could not be completed within the resolver's budget.
    Timeout,
}

/// Looks up whether a domain publishes MX records.
///
/// This is the only stage of validation that performs I/O, so it sits behind a
/// trait and tests substitute a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MxResolver: Send + Sync {
    async fn mx_exists(&self, domain: &str) -> MxOutcome;
}

/// [`MxResolver`] backed by `trust-dns-resolver`.
///
/// Configured with:
/// - the library's default upstream servers
/// - a per-query timeout and a number of attempts, which together bound the
///   time a single lookup may take
#[derive(Clone)]
pub struct DnsMxResolver {
    resolver: TokioAsyncResolver,
}

impl DnsMxResolver {
    pub fn new(timeout: Duration, attempts: usize) -> Self {
        let mut opts = ResolverOpts::default();
        opts.timeout = timeout;
        opts.attempts = attempts;

        Self {
            resolver: TokioAsyncResolver::tokio(ResolverConfig::default(), opts),
        }
    }
}

#[async_trait]
impl MxResolver for DnsMxResolver {
    async fn mx_exists(&self, domain: &str) -> MxOutcome {
        match self.resolver.mx_lookup(domain).await {
            Ok(records) if records.iter().next().is_some() => MxOutcome::Exists,
            Ok(_) => MxOutcome::Absent,
            Err(e) => {
                let outcome = classify_error(e.kind());
                match outcome {
                    MxOutcome::Timeout => warn!(domain, error = %e, "MX lookup did not complete"),
                    _ => debug!(domain, error = %e, "MX lookup returned no records"),
                }
                outcome
            }
        }
    }
}

/// Maps a resolver failure onto a lookup outcome.
///
/// An empty answer (NOERROR) and a non-existent domain (NXDOMAIN) both mean
/// "no mail service". Every other failure, including a `NoRecordsFound` built
/// from a SERVFAIL or REFUSED response, means the answer is unknown and is
/// reported the same way as a timeout.
fn classify_error(kind: &ResolveErrorKind) -> MxOutcome {
    match kind {
        ResolveErrorKind::NoRecordsFound {
            response_code: ResponseCode::NoError | ResponseCode::NXDomain,
            ..
        } => MxOutcome::Absent,
        _ => MxOutcome::Timeout,
    }
}

#[cfg(test)]
#[path = "dnsmx_test.rs"]
mod tests;
