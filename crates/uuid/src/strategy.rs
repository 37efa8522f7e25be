//! Generation strategies.
//!
//! Every strategy produces 16 raw bytes. Version and variant bits are stamped afterwards by
//! [`GeneratedIdentifier::format`](crate::GeneratedIdentifier::format), so strategies do not
//! need to mask anything themselves.

use crate::{Clock, GenerationError, GenerationResult, Name, Namespace, NodeId, UuidVersion};
use md5::{Digest, Md5};
use rand_core::CryptoRngCore;
use sha1::Sha1;

/// Inputs a strategy needs before it can run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputRequirement {
    None,
    NamespaceAndName,
}

/// Validated inputs for name-based generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameInputs {
    pub namespace: Namespace,
    pub name: Name,
}

/// One way of producing the 128 bits of a UUID.
pub trait GeneratorStrategy: Send + Sync {
    /// Version stamped into the output.
    fn version(&self) -> UuidVersion;

    /// Inputs the pipeline must validate before calling
    /// [`generate_bytes`](Self::generate_bytes).
    fn inputs(&self) -> InputRequirement {
        InputRequirement::None
    }

    /// Produce the raw bytes. `names` is `Some` whenever [`inputs`](Self::inputs) asks for
    /// a namespace and name.
    fn generate_bytes(
        &self,
        names: Option<&NameInputs>,
        rng: &mut dyn CryptoRngCore,
        clock: &dyn Clock,
    ) -> GenerationResult<[u8; 16]>;
}

/// Version 1: timestamp, clock sequence and node.
///
/// The clock sequence is drawn fresh for every identifier, so no state survives between
/// calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeBased {
    node: NodeId,
}

impl TimeBased {
    /// # Arguments
    ///
    /// * `node` - Node id written into the last six bytes of every identifier.
    pub fn new(node: NodeId) -> Self {
        Self { node }
    }

    /// Lays out the RFC 4122 fields: time_low, time_mid, time_hi, clock_seq, node.
    fn layout(ticks: u64, clock_seq: u16, node: &NodeId) -> [u8; 16] {
        let time_low = (ticks & 0xFFFF_FFFF) as u32;
        let time_mid = ((ticks >> 32) & 0xFFFF) as u16;
        let time_hi = ((ticks >> 48) & 0x0FFF) as u16;

        let mut bytes = [0u8; 16];
        bytes[0..4].copy_from_slice(&time_low.to_be_bytes());
        bytes[4..6].copy_from_slice(&time_mid.to_be_bytes());
        bytes[6..8].copy_from_slice(&time_hi.to_be_bytes());
        bytes[8..10].copy_from_slice(&(clock_seq & 0x3FFF).to_be_bytes());
        bytes[10..16].copy_from_slice(node.as_bytes());
        bytes
    }
}

impl GeneratorStrategy for TimeBased {
    fn version(&self) -> UuidVersion {
        UuidVersion::TimeBased
    }

    fn generate_bytes(
        &self,
        _names: Option<&NameInputs>,
        rng: &mut dyn CryptoRngCore,
        clock: &dyn Clock,
    ) -> GenerationResult<[u8; 16]> {
        let mut seq = [0u8; 2];
        rng.fill_bytes(&mut seq);
        let clock_seq = u16::from_be_bytes(seq);

        Ok(Self::layout(clock.gregorian_ticks(), clock_seq, &self.node))
    }
}

/// Version 4: 128 bits of fresh randomness.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Random;

impl GeneratorStrategy for Random {
    fn version(&self) -> UuidVersion {
        UuidVersion::Random
    }

    fn generate_bytes(
        &self,
        _names: Option<&NameInputs>,
        rng: &mut dyn CryptoRngCore,
        _clock: &dyn Clock,
    ) -> GenerationResult<[u8; 16]> {
        let mut bytes = [0u8; 16];
        rng.fill_bytes(&mut bytes);
        Ok(bytes)
    }
}

/// Digest used by a name-based strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
}

impl HashAlgorithm {
    /// First 16 bytes of `hash(namespace ‖ name)`.
    pub fn digest(self, namespace: &Namespace, name: &Name) -> [u8; 16] {
        let mut out = [0u8; 16];
        match self {
            HashAlgorithm::Md5 => {
                let mut hasher = Md5::new();
                hasher.update(namespace.as_bytes());
                hasher.update(name.as_bytes());
                out.copy_from_slice(&hasher.finalize()[..16]);
            }
            HashAlgorithm::Sha1 => {
                let mut hasher = Sha1::new();
                hasher.update(namespace.as_bytes());
                hasher.update(name.as_bytes());
                out.copy_from_slice(&hasher.finalize()[..16]);
            }
        }
        out
    }
}

/// Versions 3 and 5: a digest over namespace and name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NameBased {
    algorithm: HashAlgorithm,
}

impl NameBased {
    /// Version 3.
    pub fn md5() -> Self {
        Self {
            algorithm: HashAlgorithm::Md5,
        }
    }

    /// Version 5.
    pub fn sha1() -> Self {
        Self {
            algorithm: HashAlgorithm::Sha1,
        }
    }
}

impl GeneratorStrategy for NameBased {
    fn version(&self) -> UuidVersion {
        match self.algorithm {
            HashAlgorithm::Md5 => UuidVersion::NameBasedMd5,
            HashAlgorithm::Sha1 => UuidVersion::NameBasedSha1,
        }
    }

    fn inputs(&self) -> InputRequirement {
        InputRequirement::NamespaceAndName
    }

    fn generate_bytes(
        &self,
        names: Option<&NameInputs>,
        _rng: &mut dyn CryptoRngCore,
        _clock: &dyn Clock,
    ) -> GenerationResult<[u8; 16]> {
        let names = names.ok_or(GenerationError::NamespaceRequired)?;
        Ok(self.algorithm.digest(&names.namespace, &names.name))
    }
}
