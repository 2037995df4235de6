//! URL construction and validation utilities.
//!
//! Provides `mailto:` link validation for author bylines and action
//! selector URLs for the blog API endpoint.

/// Result of e-mail link validation
#[derive(Debug, Clone, PartialEq)]
pub enum MailtoValidation {
    /// Address is safe to place in a `mailto:` href
    Valid(String),
    /// Address is invalid or unsafe
    Invalid(MailtoValidationError),
}

/// Errors that can occur during e-mail link validation.
#[derive(Debug, Clone, PartialEq)]
pub enum MailtoValidationError {
    /// Address is empty
    Empty,
    /// Address does not have the `local@domain` shape
    Malformed,
    /// Address contains a character that could alter the link
    ForbiddenCharacter(char),
}

impl std::fmt::Display for MailtoValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "address is empty"),
            Self::Malformed => write!(f, "address must look like name@domain"),
            Self::ForbiddenCharacter(c) => write!(f, "address contains forbidden character {:?}", c),
        }
    }
}

/// Characters that would end the address or inject link headers.
const FORBIDDEN: &[char] = &['<', '>', '"', '\'', '`', '?', '&', '#', ':', '/', '\\', '%'];

/// Validate an e-mail address and build its `mailto:` href
///
/// Checks:
/// 1. Address is not empty
/// 2. No whitespace, control or link-altering characters
/// 3. Exactly one `@` with text on both sides
pub fn validate_mailto(email: &str) -> MailtoValidation {
    let email = email.trim();

    if email.is_empty() {
        return MailtoValidation::Invalid(MailtoValidationError::Empty);
    }

    if let Some(c) = email
        .chars()
        .find(|c| c.is_whitespace() || c.is_control() || FORBIDDEN.contains(c))
    {
        return MailtoValidation::Invalid(MailtoValidationError::ForbiddenCharacter(c));
    }

    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty() => {
            MailtoValidation::Valid(format!("mailto:{}", email))
        }
        _ => MailtoValidation::Invalid(MailtoValidationError::Malformed),
    }
}

/// Append the `action` selector to the API base endpoint.
///
/// Action names are plain ASCII slugs and need no encoding.
pub fn action_url(base: &str, action: &str) -> String {
    let separator = if base.contains('?') {
        if base.ends_with('?') || base.ends_with('&') {
            ""
        } else {
            "&"
        }
    } else {
        "?"
    };
    format!("{}{}action={}", base, separator, action)
}
