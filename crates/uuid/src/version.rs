//! UUID versions with a generation strategy.

use crate::GenerationError;
use std::fmt;

/// A UUID version this crate can generate.
///
/// The discriminant is the version number written into the version nibble.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "i32", into = "i32")
)]
pub enum UuidVersion {
    /// Version 1: Gregorian timestamp, clock sequence and node.
    TimeBased = 1,
    /// Version 3: MD5 over namespace and name.
    NameBasedMd5 = 3,
    /// Version 4: random.
    Random = 4,
    /// Version 5: SHA-1 over namespace and name.
    NameBasedSha1 = 5,
}

impl UuidVersion {
    /// All supported versions, in ascending order.
    pub const ALL: [UuidVersion; 4] = [
        UuidVersion::TimeBased,
        UuidVersion::NameBasedMd5,
        UuidVersion::Random,
        UuidVersion::NameBasedSha1,
    ];

    /// Returns the version number.
    pub fn number(self) -> i32 {
        self as i32
    }

    pub(crate) fn as_uuid_version(self) -> uuid::Version {
        match self {
            UuidVersion::TimeBased => uuid::Version::Mac,
            UuidVersion::NameBasedMd5 => uuid::Version::Md5,
            UuidVersion::Random => uuid::Version::Random,
            UuidVersion::NameBasedSha1 => uuid::Version::Sha1,
        }
    }
}

impl TryFrom<i32> for UuidVersion {
    type Error = GenerationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        UuidVersion::ALL
            .into_iter()
            .find(|v| v.number() == value)
            .ok_or(GenerationError::UnrecognizedVersion(value))
    }
}

impl From<UuidVersion> for i32 {
    fn from(version: UuidVersion) -> Self {
        version.number()
    }
}

impl fmt::Display for UuidVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_known_versions() {
        assert_eq!(UuidVersion::try_from(1).unwrap(), UuidVersion::TimeBased);
        assert_eq!(UuidVersion::try_from(3).unwrap(), UuidVersion::NameBasedMd5);
        assert_eq!(UuidVersion::try_from(4).unwrap(), UuidVersion::Random);
        assert_eq!(UuidVersion::try_from(5).unwrap(), UuidVersion::NameBasedSha1);
    }

    #[test]
    fn test_try_from_unknown_versions() {
        for value in [0, 2, 6, 7, -1, i32::MAX] {
            assert_eq!(
                UuidVersion::try_from(value),
                Err(GenerationError::UnrecognizedVersion(value))
            );
        }
    }

    #[test]
    fn test_uuid_crate_version_numbers_agree() {
        for version in UuidVersion::ALL {
            let stamped = uuid::Builder::from_bytes([0u8; 16])
                .with_version(version.as_uuid_version())
                .into_uuid();
            assert_eq!(stamped.get_version_num() as i32, version.number());
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_number() {
        let json = serde_json::to_string(&UuidVersion::NameBasedSha1).unwrap();
        assert_eq!(json, "5");

        let parsed: UuidVersion = serde_json::from_str("3").unwrap();
        assert_eq!(parsed, UuidVersion::NameBasedMd5);

        assert!(serde_json::from_str::<UuidVersion>("2").is_err());
    }
}
