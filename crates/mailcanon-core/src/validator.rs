use crate::error::CoreError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

pub const MAX_LOCAL_PART_LEN: usize = 64;

/// Local part of 1..=64 chars from `[A-Za-z0-9_.+-]`, then `@`, then a domain
/// with at least one dot-separated label.
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9_.+-]{1,64}@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+$";

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern must compile"));

static SHARED: Lazy<EmailValidator> = Lazy::new(EmailValidator::new);

/// Strips Unicode whitespace plus the ASCII separators `\x1c`..=`\x1f`,
/// which `str::trim` leaves in place.
fn trim_email(email: &str) -> &str {
    email.trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}

/// Classifies and canonicalizes email-like strings.
#[derive(Debug, Clone)]
pub struct EmailValidator {
    pattern: Regex,
}

impl Default for EmailValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl EmailValidator {
    pub fn new() -> Self {
        Self {
            pattern: EMAIL_REGEX.clone(),
        }
    }

    /// Returns whether the trimmed input matches the accepted shape.
    pub fn validate(&self, email: &str) -> bool {
        self.pattern.is_match(trim_email(email))
    }

    /// Same as [`validate`](Self::validate) for input of unknown type.
    /// Non-string values are a caller error, not a `false` result.
    pub fn validate_value(&self, value: &Value) -> Result<bool, CoreError> {
        let email = value.as_str().ok_or(CoreError::InvalidArgument)?;
        Ok(self.validate(email))
    }

    /// Produces the canonical form: trimmed, dots removed from the local
    /// part, both parts lowercased.
    pub fn normalize(&self, email: &str) -> Result<String, CoreError> {
        if !self.validate(email) {
            return Err(CoreError::InvalidEmail);
        }

        let trimmed = trim_email(email);
        let (local_part, domain) = trimmed.split_once('@').ok_or(CoreError::InvalidEmail)?;
        let local_part = local_part.replace('.', "").to_ascii_lowercase();
        // A local part made only of dots has nothing left to keep.
        if local_part.is_empty() {
            return Err(CoreError::InvalidEmail);
        }
        let domain = domain.to_ascii_lowercase();

        Ok(format!("{}@{}", local_part, domain))
    }

    pub fn normalize_value(&self, value: &Value) -> Result<String, CoreError> {
        let email = value.as_str().ok_or(CoreError::InvalidArgument)?;
        self.normalize(email)
    }
}

pub fn validate_email(email: &str) -> bool {
    SHARED.validate(email)
}

pub fn normalize_email(email: &str) -> Result<String, CoreError> {
    SHARED.normalize(email)
}
