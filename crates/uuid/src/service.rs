//! The generation pipeline.

use crate::{
    validate_name, validate_namespace, Clock, GeneratedIdentifier, GenerationError,
    GenerationResult, GeneratorConfig, InputRequirement, NameInputs, NodeId, StrategyTable,
};
use rand_core::CryptoRngCore;

/// Raw parameters of one generation request, as supplied by the host.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationRequest {
    pub version: Option<String>,
    pub namespace: Option<String>,
    pub name: Option<String>,
}

impl GenerationRequest {
    /// A request for `version` with no namespace or name.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: Some(version.into()),
            ..Self::default()
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Result of one generation request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenerationOutcome {
    Generated(GeneratedIdentifier),
    /// The version had no strategy and strict mode was off. Nothing was generated, but the
    /// request is not a failure.
    Skipped { version: i32 },
    Failed(GenerationError),
}

impl GenerationOutcome {
    /// True unless the request failed. A skipped version counts as success.
    pub fn is_success(&self) -> bool {
        !matches!(self, GenerationOutcome::Failed(_))
    }

    /// The generated identifier, if any.
    pub fn identifier(&self) -> Option<&GeneratedIdentifier> {
        match self {
            GenerationOutcome::Generated(id) => Some(id),
            _ => None,
        }
    }
}

impl From<GenerationResult<GeneratedIdentifier>> for GenerationOutcome {
    fn from(result: GenerationResult<GeneratedIdentifier>) -> Self {
        match result {
            Ok(id) => GenerationOutcome::Generated(id),
            Err(e) => GenerationOutcome::Failed(e),
        }
    }
}

/// Runs generation requests against a [`StrategyTable`].
///
/// The service is immutable once built. Randomness and time are supplied per call.
#[derive(Debug)]
pub struct IdentifierService {
    strategies: StrategyTable,
    strict_versions: bool,
}

impl IdentifierService {
    /// A service over a custom strategy table.
    ///
    /// # Arguments
    ///
    /// * `strategies` - Version number to strategy mapping.
    /// * `strict_versions` - Fail, rather than skip, versions missing from `strategies`.
    pub fn new(strategies: StrategyTable, strict_versions: bool) -> Self {
        Self {
            strategies,
            strict_versions,
        }
    }

    /// The standard table (versions 1, 3, 4, 5) built from `config`.
    ///
    /// Without a configured node id, a random multicast node id is drawn from `rng` and kept
    /// for the lifetime of the service.
    pub fn from_config(config: &GeneratorConfig, rng: &mut dyn CryptoRngCore) -> Self {
        let node = config.node_id().unwrap_or_else(|| NodeId::random(rng));
        tracing::debug!("version 1 node id: {}", node);
        Self::new(StrategyTable::standard(node), config.strict_versions())
    }

    /// Runs one request through the pipeline: parse version, select strategy, validate
    /// inputs (name-based only), generate, format.
    ///
    /// # Arguments
    ///
    /// * `request` - Raw parameters as supplied by the host.
    /// * `rng` - Randomness for versions 1 and 4.
    /// * `clock` - Time source for version 1.
    ///
    /// # Returns
    ///
    /// Returns [`GenerationOutcome::Generated`] on success, [`GenerationOutcome::Skipped`] for
    /// an unregistered version outside strict mode, and [`GenerationOutcome::Failed`] with
    /// the first error otherwise. Every failure is logged once at error level.
    pub fn generate(
        &self,
        request: &GenerationRequest,
        rng: &mut dyn CryptoRngCore,
        clock: &dyn Clock,
    ) -> GenerationOutcome {
        let version = match StrategyTable::parse_version(request.version.as_deref()) {
            Ok(version) => version,
            Err(e) => {
                tracing::error!("UUID version parameter rejected: {}", e);
                return GenerationOutcome::Failed(e);
            }
        };

        let Some(strategy) = self.strategies.dispatch(version) else {
            if self.strict_versions {
                let e = GenerationError::UnrecognizedVersion(version);
                tracing::error!("{}", e);
                return GenerationOutcome::Failed(e);
            }
            tracing::warn!("no strategy for UUID version {}, nothing generated", version);
            return GenerationOutcome::Skipped { version };
        };

        let names = match strategy.inputs() {
            InputRequirement::None => Ok(None),
            InputRequirement::NamespaceAndName => Self::read_name_inputs(request).map(Some),
        };

        let result = names.and_then(|names| {
            let bytes = strategy.generate_bytes(names.as_ref(), rng, clock)?;
            Ok(GeneratedIdentifier::format(bytes, strategy.version()))
        });

        if let Err(e) = &result {
            tracing::error!("UUID version {} generation failed: {}", version, e);
        } else {
            tracing::debug!("generated UUID version {}", version);
        }
        GenerationOutcome::from(result)
    }

    /// Namespace first: when it fails, the name is never looked at.
    fn read_name_inputs(request: &GenerationRequest) -> GenerationResult<NameInputs> {
        let namespace = validate_namespace(request.namespace.as_deref())?;
        let name = validate_name(request.name.as_deref())?;
        Ok(NameInputs { namespace, name })
    }
}
