//! The 48-bit node field of version 1 identifiers.

use crate::{ConfigError, ConfigResult};
use rand_core::CryptoRngCore;
use std::{fmt, str::FromStr};

/// Multicast bit of the first node octet. Set on generated node ids so they can never
/// collide with a real IEEE 802 address (RFC 4122 section 4.5).
const MULTICAST_BIT: u8 = 0x01;

/// A node identifier for time-based UUIDs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId([u8; 6]);

impl NodeId {
    pub const fn from_bytes(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    /// Draws a random node id with the multicast bit set.
    pub fn random(rng: &mut dyn CryptoRngCore) -> Self {
        let mut bytes = [0u8; 6];
        rng.fill_bytes(&mut bytes);
        bytes[0] |= MULTICAST_BIT;
        Self(bytes)
    }

    /// Parses 12 hex digits, optionally grouped in octets separated by `:` or `-`
    /// (`02:00:5e:10:00:01`, `02-00-5E-10-00-01`, `02005e100001`).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidNodeId`] for anything else.
    pub fn parse(input: &str) -> ConfigResult<Self> {
        let invalid = || ConfigError::InvalidNodeId(input.to_string());

        let digits: String = if input.len() == 17 {
            let separator = input.as_bytes()[2];
            if separator != b':' && separator != b'-' {
                return Err(invalid());
            }
            let groups: Vec<&str> = input.split(separator as char).collect();
            if groups.len() != 6 || groups.iter().any(|g| g.len() != 2) {
                return Err(invalid());
            }
            groups.concat()
        } else {
            input.to_string()
        };

        let mut bytes = [0u8; 6];
        hex::decode_to_slice(&digits, &mut bytes).map_err(|_| invalid())?;
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }
}

impl FromStr for NodeId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeId::parse(s)
    }
}

impl fmt::Display for NodeId {
    /// Twelve lowercase hex digits, no separators.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}
