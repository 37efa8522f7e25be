//! Input validation for name-based generation.
//!
//! Namespaces must be supplied in hyphenated form (`8-4-4-4-12` hex digits). Unlike
//! [`uuid::Uuid::parse_str`], the simple, braced and URN forms are rejected rather than
//! normalised. Hex digits of either case are accepted.
//!
//! A name only has to be present. The empty string is a valid name.

use crate::{GenerationError, GenerationResult};
use std::{fmt, str::FromStr};

/// Byte offsets of the hyphens in hyphenated UUID text.
const HYPHEN_POSITIONS: [usize; 4] = [8, 13, 18, 23];
const HYPHENATED_LEN: usize = 36;

/// A namespace UUID for versions 3 and 5.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Namespace(uuid::Uuid);

impl Namespace {
    /// Parses a namespace that must be in hyphenated form.
    ///
    /// # Arguments
    ///
    /// * `input` - Namespace text, `8-4-4-4-12` hex digits of either case.
    ///
    /// # Returns
    ///
    /// Returns the validated [`Namespace`] on success.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::NamespaceInvalid`] for wrong length, misplaced hyphens or
    /// non-hex digits.
    pub fn parse(input: &str) -> GenerationResult<Self> {
        if !Self::is_hyphenated(input) {
            return Err(GenerationError::NamespaceInvalid);
        }
        uuid::Uuid::try_parse(input)
            .map(Self)
            .map_err(|_| GenerationError::NamespaceInvalid)
    }

    /// Checks the hyphenated layout without allocating.
    ///
    /// # Arguments
    ///
    /// * `input` - Candidate namespace text.
    ///
    /// # Returns
    ///
    /// Returns `true` if `input` is 36 bytes with hyphens at 8, 13, 18 and 23 and hex digits
    /// everywhere else.
    pub fn is_hyphenated(input: &str) -> bool {
        input.len() == HYPHENATED_LEN
            && input.bytes().enumerate().all(|(i, b)| {
                if HYPHEN_POSITIONS.contains(&i) {
                    b == b'-'
                } else {
                    b.is_ascii_hexdigit()
                }
            })
    }

    /// The 16 raw bytes that prefix the hashed name.
    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }

    /// The namespace as a [`uuid::Uuid`].
    pub fn uuid(&self) -> uuid::Uuid {
        self.0
    }
}

impl From<uuid::Uuid> for Namespace {
    fn from(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for Namespace {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Namespace::parse(s)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// A name hashed together with a namespace.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// UTF-8 bytes fed to the digest.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validates the namespace parameter.
///
/// Does not log; failures are reported by
/// [`IdentifierService::generate`](crate::IdentifierService::generate).
///
/// # Errors
///
/// - [`GenerationError::NamespaceRequired`] if `raw` is absent.
/// - [`GenerationError::NamespaceInvalid`] if `raw` is not hyphenated UUID text.
pub fn validate_namespace(raw: Option<&str>) -> GenerationResult<Namespace> {
    let raw = raw.ok_or(GenerationError::NamespaceRequired)?;
    Namespace::parse(raw)
}

/// Validates the name parameter.
///
/// # Errors
///
/// Returns [`GenerationError::NameRequired`] if `raw` is absent.
pub fn validate_name(raw: Option<&str>) -> GenerationResult<Name> {
    raw.map(Name::new).ok_or(GenerationError::NameRequired)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMESPACE: &str = "63475079-2605-11e8-a408-27f70ff2806d";

    #[test]
    fn test_parse_valid_namespace() {
        let ns = Namespace::parse(NAMESPACE).unwrap();

        assert_eq!(ns.to_string(), NAMESPACE);
        assert_eq!(ns.as_bytes()[0], 0x63);
        assert_eq!(ns.as_bytes()[15], 0x6d);
    }

    #[test]
    fn test_parse_accepts_uppercase_and_renders_lowercase() {
        let ns = Namespace::parse("63475079-2605-11E8-A408-27F70FF2806D").unwrap();

        assert_eq!(ns.to_string(), NAMESPACE);
    }

    #[test]
    fn test_parse_rejects_truncated() {
        let result = Namespace::parse("63475079-2605-11e8-a408-27");

        assert_eq!(result, Err(GenerationError::NamespaceInvalid));
    }

    #[test]
    fn test_parse_rejects_simple_form() {
        let result = Namespace::parse("63475079260511e8a40827f70ff2806d");

        assert_eq!(result, Err(GenerationError::NamespaceInvalid));
    }

    #[test]
    fn test_parse_rejects_braced_and_urn_forms() {
        assert!(Namespace::parse("{63475079-2605-11e8-a408-27f70ff2806d}").is_err());
        assert!(Namespace::parse("urn:uuid:63475079-2605-11e8-a408-27f70ff2806d").is_err());
    }

    #[test]
    fn test_parse_rejects_misplaced_hyphens() {
        let result = Namespace::parse("634750792-605-11e8-a408-27f70ff2806d");

        assert_eq!(result, Err(GenerationError::NamespaceInvalid));
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        let result = Namespace::parse("63475079-2605-11e8-a408-27f70ff2806z");

        assert_eq!(result, Err(GenerationError::NamespaceInvalid));
    }

    #[test]
    fn test_parse_rejects_surrounding_whitespace() {
        assert!(Namespace::parse(" 63475079-2605-11e8-a408-27f70ff2806d").is_err());
        assert!(Namespace::parse("").is_err());
    }

    #[test]
    fn test_is_hyphenated() {
        assert!(Namespace::is_hyphenated(NAMESPACE));
        assert!(Namespace::is_hyphenated("00000000-0000-0000-0000-000000000000"));
        assert!(!Namespace::is_hyphenated("63475079260511e8a40827f70ff2806d"));
        // multi-byte characters must not slip past the length check
        assert!(!Namespace::is_hyphenated("63475079-2605-11e8-a408-27f70ff280é"));
    }

    #[test]
    fn test_validate_namespace_absent() {
        assert_eq!(
            validate_namespace(None),
            Err(GenerationError::NamespaceRequired)
        );
    }

    #[test]
    fn test_validate_namespace_invalid() {
        assert_eq!(
            validate_namespace(Some("not-a-namespace")),
            Err(GenerationError::NamespaceInvalid)
        );
    }

    #[test]
    fn test_validate_name_absent() {
        assert_eq!(validate_name(None), Err(GenerationError::NameRequired));
    }

    #[test]
    fn test_validate_name_accepts_empty() {
        let name = validate_name(Some("")).unwrap();

        assert_eq!(name.as_str(), "");
        assert!(name.as_bytes().is_empty());
    }

    #[test]
    fn test_name_bytes_are_utf8() {
        let name = validate_name(Some("naïve")).unwrap();

        assert_eq!(name.as_bytes(), "naïve".as_bytes());
        assert_eq!(name.as_bytes().len(), 6);
    }
}
