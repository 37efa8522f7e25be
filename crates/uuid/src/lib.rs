//! Deterministic and random UUID generation.
//!
//! A single generation step is a short pipeline:
//!
//! 1. The requested version string is parsed and looked up in a [`StrategyTable`].
//! 2. Name-based strategies validate their namespace and name ([`validate_namespace`],
//!    [`validate_name`]).
//! 3. The strategy produces 16 raw bytes.
//! 4. [`GeneratedIdentifier::format`] stamps the version nibble and RFC 4122 variant bits and
//!    renders the canonical text.
//!
//! [`IdentifierService`] runs the whole pipeline and returns a [`GenerationOutcome`].
//!
//! ## Canonical UUID text
//! - Length: 36 (32 hex digits grouped 8-4-4-4-12, four hyphens)
//! - Output is always lowercase
//! - Example: `8ee110a3-4998-3fe1-b47e-61e897ff1832`
//!
//! ## Supported versions
//!
//! | Version | Strategy | Inputs |
//! |---|---|---|
//! | 1 | time-based (clock + clock sequence + node) | none |
//! | 3 | name-based, MD5 | namespace, name |
//! | 4 | random | none |
//! | 5 | name-based, SHA-1 | namespace, name |
//!
//! Randomness and time are injected per call, so the service itself holds no mutable state
//! and can be shared freely between threads.

mod clock;
mod config;
mod dispatch;
mod format;
mod node;
mod service;
mod strategy;
mod validation;
mod version;

// Re-export public types
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{
    node_id_from_env_value, strict_versions_from_env_value, ConfigError, ConfigResult,
    GeneratorConfig,
};
pub use dispatch::StrategyTable;
pub use format::GeneratedIdentifier;
pub use node::NodeId;
pub use rand_core::CryptoRngCore;
pub use service::{GenerationOutcome, GenerationRequest, IdentifierService};
pub use strategy::{
    GeneratorStrategy, HashAlgorithm, InputRequirement, NameBased, NameInputs, Random, TimeBased,
};
pub use validation::{validate_name, validate_namespace, Name, Namespace};
pub use version::UuidVersion;

/// Error type for a generation request.
///
/// The `Display` text of each variant is the human-readable status message handed back to
/// the host.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    /// No version parameter was supplied.
    #[error("Version must be given.")]
    VersionRequired,
    /// The version parameter is not a 32-bit integer.
    #[error("Version '{0}' is not a valid integer.")]
    InvalidVersionFormat(String),
    /// The version is an integer with no registered strategy (strict mode only).
    #[error("UUID version {0} is not supported.")]
    UnrecognizedVersion(i32),
    #[error("Namespace must be given for UUID versions 3 and 5.")]
    NamespaceRequired,
    #[error("Namespace is not valid.")]
    NamespaceInvalid,
    #[error("Name must be given for UUID versions 3 and 5.")]
    NameRequired,
}

/// Result type for generation operations.
pub type GenerationResult<T> = Result<T, GenerationError>;
