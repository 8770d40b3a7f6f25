//! Affiliation value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Full-match pattern for affiliation names: one or more ASCII alphanumerics.
static AFFILIATION_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("affiliation name regex is valid"));

/// A type-safe wrapper for an affiliation attached to a contact, such as an
/// institution or company name.
///
/// The name is trimmed and validated at construction time and is immutable
/// afterwards. Equality is structural and case-sensitive, so `"Acme"` and
/// `"acme"` are distinct affiliations.
///
/// # Example
///
/// ```
/// use addressbook_core::domain::Affiliation;
///
/// let affiliation = Affiliation::new("  Acme ").unwrap();
/// assert_eq!(affiliation.as_str(), "Acme");
/// assert_eq!(affiliation.to_string(), "[Acme]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Affiliation(String);

impl Affiliation {
    /// Create a new Affiliation, trimming and validating the given name.
    ///
    /// # Validation Rules
    ///
    /// - Surrounding whitespace is trimmed before validation
    /// - The trimmed name must be non-empty
    /// - Every character must be ASCII alphanumeric
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidAffiliation` carrying the raw input
    /// if the trimmed name does not match the pattern.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let trimmed = name.trim();

        if !Self::is_valid(trimmed) {
            return Err(ValidationError::InvalidAffiliation(name));
        }

        tracing::trace!(affiliation = trimmed, "validated affiliation name");
        Ok(Self(trimmed.to_string()))
    }

    /// Returns true if the given string is a valid affiliation name.
    ///
    /// Pure predicate form of the constructor's check; the candidate is
    /// tested as-is, without trimming.
    pub fn is_valid(name: &str) -> bool {
        AFFILIATION_NAME_REGEX.is_match(name)
    }

    /// Get the affiliation name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for Affiliation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Affiliation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Affiliation::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support - bracketed, e.g. `[Acme]`
impl fmt::Display for Affiliation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(affiliation: &Affiliation) -> u64 {
        let mut hasher = DefaultHasher::new();
        affiliation.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_affiliation_valid() {
        let affiliation = Affiliation::new("Acme1").unwrap();
        assert_eq!(affiliation.as_str(), "Acme1");
    }

    #[test]
    fn test_affiliation_trims_input() {
        let affiliation = Affiliation::new("  Acme  ").unwrap();
        assert_eq!(affiliation.as_str(), "Acme");
    }

    #[test]
    fn test_affiliation_validates_format() {
        assert!(Affiliation::new("").is_err());
        assert!(Affiliation::new("   ").is_err());
        assert!(Affiliation::new("Acme!").is_err());
        assert!(Affiliation::new("Ac me").is_err());
        assert!(Affiliation::new("Acmé").is_err());
        assert!(Affiliation::new("Acme").is_ok());
        assert!(Affiliation::new("42").is_ok());
        assert!(Affiliation::new("NUS2024").is_ok());
    }

    #[test]
    fn test_is_valid_does_not_trim() {
        assert!(Affiliation::is_valid("Acme"));
        assert!(!Affiliation::is_valid(" Acme"));
        assert!(!Affiliation::is_valid(""));
    }

    #[test]
    fn test_affiliation_equality_case_sensitive() {
        let a = Affiliation::new("Acme").unwrap();
        let b = Affiliation::new("Acme").unwrap();
        let c = Affiliation::new("acme").unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, c);
    }

    #[test]
    fn test_affiliation_display() {
        let affiliation = Affiliation::new("Acme").unwrap();
        assert_eq!(format!("{}", affiliation), "[Acme]");
    }

    #[test]
    fn test_affiliation_display_roundtrip() {
        let affiliation = Affiliation::new("  Acme  ").unwrap();
        let rendered = affiliation.to_string();
        let core = rendered.trim_start_matches('[').trim_end_matches(']');
        assert_eq!(Affiliation::new(core).unwrap(), affiliation);
    }

    #[test]
    fn test_affiliation_serialization() {
        let affiliation = Affiliation::new("Acme").unwrap();
        let json = serde_json::to_string(&affiliation).unwrap();
        assert_eq!(json, "\"Acme\"");
    }

    #[test]
    fn test_affiliation_deserialization() {
        let affiliation: Affiliation = serde_json::from_str("\"Acme\"").unwrap();
        assert_eq!(affiliation.as_str(), "Acme");
    }

    #[test]
    fn test_affiliation_deserialization_invalid_fails() {
        let result: Result<Affiliation, _> = serde_json::from_str("\"Acme!\"");
        assert!(result.is_err());
    }
}
