use serde::Deserialize;
use utoipa::ToSchema;

/// Request body of the validation endpoint.
#[derive(Deserialize, ToSchema)]
pub struct EmailRequest {
    pub email: String,
}

/// An address split on its *last* `@`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailParts<'a> {
    pub local_part: &'a str,
    pub domain_part: &'a str,
}

impl<'a> EmailParts<'a> {
    pub fn split(email: &'a str) -> Option<Self> {
        email
            .rsplit_once('@')
            .map(|(local_part, domain_part)| Self {
                local_part,
                domain_part,
            })
    }
}

/// A domain split on its last `.`; absent when the domain has no dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainParts<'a> {
    pub name: &'a str,
    pub tld: &'a str,
}

impl<'a> DomainParts<'a> {
    pub fn split(domain: &'a str) -> Option<Self> {
        domain
            .rsplit_once('.')
            .map(|(name, tld)| Self { name, tld })
    }
}
