//! Canonical rendering of generated identifiers.

use crate::UuidVersion;
use std::fmt;

/// A generated UUID with its version nibble and RFC 4122 variant bits in place.
///
/// Displays as 36 lowercase characters: `xxxxxxxx-xxxx-Vxxx-Nxxx-xxxxxxxxxxxx`, where `V` is
/// the version digit and `N` is one of `8`, `9`, `a`, `b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct GeneratedIdentifier(uuid::Uuid);

impl GeneratedIdentifier {
    /// Overwrites the version nibble (high 4 bits of byte 6) and the variant bits (high 2
    /// bits of byte 8, set to `10`) of `bytes`.
    pub fn format(bytes: [u8; 16], version: UuidVersion) -> Self {
        let uuid = uuid::Builder::from_bytes(bytes)
            .with_version(version.as_uuid_version())
            .with_variant(uuid::Variant::RFC4122)
            .into_uuid();
        Self(uuid)
    }

    pub fn uuid(&self) -> uuid::Uuid {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }

    /// The version stamped into this identifier.
    pub fn version(&self) -> Option<UuidVersion> {
        i32::try_from(self.0.get_version_num())
            .ok()
            .and_then(|n| UuidVersion::try_from(n).ok())
    }
}

impl fmt::Display for GeneratedIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}
