use crate::error::CoreError;
use crate::validator::normalize_email;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An address already in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NormalizedEmail(String);

impl NormalizedEmail {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        let normalized = normalize_email(raw)?;
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn local_part(&self) -> &str {
        self.split().0
    }

    pub fn domain(&self) -> &str {
        self.split().1
    }

    fn split(&self) -> (&str, &str) {
        self.0.split_once('@').unwrap_or((self.0.as_str(), ""))
    }
}

impl fmt::Display for NormalizedEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for NormalizedEmail {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for NormalizedEmail {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<NormalizedEmail> for String {
    fn from(value: NormalizedEmail) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::NormalizedEmail;

    #[test]
    fn normalized_email_exposes_parts() {
        let email = NormalizedEmail::new("  Ada.Lovelace@Example.com ").unwrap();
        assert_eq!(email.as_str(), "adalovelace@example.com");
        assert_eq!(email.local_part(), "adalovelace");
        assert_eq!(email.domain(), "example.com");
    }

    #[test]
    fn normalized_email_parses_from_str() {
        let email: NormalizedEmail = "bob.smith@example.com".parse().unwrap();
        assert_eq!(email.to_string(), "bobsmith@example.com");
        assert!("invalid.email".parse::<NormalizedEmail>().is_err());
    }

    #[test]
    fn normalized_email_serde_roundtrip_normalizes() {
        let email: NormalizedEmail =
            serde_json::from_str("\"Carol.X@Example.com\"").expect("deserialize");
        assert_eq!(email.as_str(), "carolx@example.com");
        let json = serde_json::to_string(&email).expect("serialize");
        assert_eq!(json, "\"carolx@example.com\"");
        assert!(serde_json::from_str::<NormalizedEmail>("\"nope\"").is_err());
    }
}
