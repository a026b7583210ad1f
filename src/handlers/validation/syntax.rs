use crate::models::email::EmailParts;

const MAX_EMAIL_LENGTH: usize = 254;
const MAX_LOCAL_PART_LENGTH: usize = 64;
const MAX_LABEL_LENGTH: usize = 63;

/// Characters allowed in an unquoted local part besides ASCII alphanumerics
/// (RFC 5322 `atext`).
const ATEXT_SPECIALS: &str = "!#$%&'*+-/=?^_`{|}~";

/// Checks that an email address has a plausible shape.
///
/// The address is split on its last `@`. The local part must be a dot-atom or
/// a quoted string of at most 64 octets; the domain must be an ASCII host name
/// with at least two labels, the last of which is two or more characters and
/// not purely numeric. Domain literals and internationalized domains are
/// rejected.
///
/// # Examples
/// ```
/// use email_validator::handlers::validation::syntax::is_valid_email;
///
/// assert!(is_valid_email("user.name+tag@example.com"));
/// assert!(is_valid_email("\"john@home\"@example.org"));
/// assert!(!is_valid_email("invalid-email"));
/// assert!(!is_valid_email("user@localhost"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.len() > MAX_EMAIL_LENGTH {
        return false;
    }

    let Some(EmailParts {
        local_part,
        domain_part,
    }) = EmailParts::split(email)
    else {
        return false;
    };

    is_valid_local_part(local_part) && is_valid_domain(domain_part)
}

fn is_valid_local_part(local: &str) -> bool {
    if local.is_empty() || local.len() > MAX_LOCAL_PART_LENGTH {
        return false;
    }

    match local.strip_prefix('"').and_then(|s| s.strip_suffix('"')) {
        Some(content) => is_valid_quoted_content(content),
        None => is_valid_dot_atom(local),
    }
}

/// Dot-atom: non-empty runs of `atext` separated by single dots.
fn is_valid_dot_atom(local: &str) -> bool {
    local.split('.').all(|atom| {
        !atom.is_empty()
            && atom
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || ATEXT_SPECIALS.contains(c))
    })
}

/// Content between the quotes of a quoted local part: printable ASCII, with
/// `"` and `\` only allowed when escaped.
fn is_valid_quoted_content(content: &str) -> bool {
    let mut escaped = false;

    for c in content.chars() {
        if !(c == ' ' || c.is_ascii_graphic()) {
            return false;
        }
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '"' {
            return false;
        }
    }

    !escaped
}

fn is_valid_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || !labels.iter().all(|label| is_valid_label(label)) {
        return false;
    }

    labels
        .last()
        .is_some_and(|tld| tld.len() >= 2 && !tld.chars().all(|c| c.is_ascii_digit()))
}

/// Host name label: 1-63 letters, digits and hyphens, not starting or
/// ending with a hyphen.
fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= MAX_LABEL_LENGTH
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

#[cfg(test)]
#[path = "syntax_test.rs"]
mod tests;
