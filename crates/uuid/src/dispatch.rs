//! Version dispatch.

use crate::{
    GenerationError, GenerationResult, GeneratorStrategy, NameBased, NodeId, Random, TimeBased,
};
use std::collections::BTreeMap;
use std::fmt;

/// Maps version numbers to strategies.
///
/// Lookup is by integer, so a strategy registered under a new number becomes reachable
/// without any change to the dispatcher.
pub struct StrategyTable {
    strategies: BTreeMap<i32, Box<dyn GeneratorStrategy>>,
}

impl StrategyTable {
    /// An empty table.
    pub fn empty() -> Self {
        Self {
            strategies: BTreeMap::new(),
        }
    }

    /// Versions 1, 3, 4 and 5, with `node` as the version 1 node id.
    pub fn standard(node: NodeId) -> Self {
        Self::empty()
            .with(TimeBased::new(node))
            .with(NameBased::md5())
            .with(Random)
            .with(NameBased::sha1())
    }

    /// Registers `strategy` under its own version number, replacing any previous entry.
    pub fn with(mut self, strategy: impl GeneratorStrategy + 'static) -> Self {
        self.register(Box::new(strategy));
        self
    }

    pub fn register(&mut self, strategy: Box<dyn GeneratorStrategy>) {
        self.strategies.insert(strategy.version().number(), strategy);
    }

    /// Strategy for `version`, if one is registered.
    pub fn dispatch(&self, version: i32) -> Option<&dyn GeneratorStrategy> {
        self.strategies.get(&version).map(|s| s.as_ref())
    }

    /// Registered version numbers, ascending.
    pub fn versions(&self) -> impl Iterator<Item = i32> + '_ {
        self.strategies.keys().copied()
    }

    /// Parses the raw version parameter.
    ///
    /// # Errors
    ///
    /// - [`GenerationError::VersionRequired`] if `raw` is absent.
    /// - [`GenerationError::InvalidVersionFormat`] if `raw` is not a 32-bit integer written
    ///   with ASCII digits and an optional sign.
    pub fn parse_version(raw: Option<&str>) -> GenerationResult<i32> {
        let raw = raw.ok_or(GenerationError::VersionRequired)?;
        raw.parse::<i32>()
            .map_err(|_| GenerationError::InvalidVersionFormat(raw.to_string()))
    }
}

impl fmt::Debug for StrategyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrategyTable")
            .field("versions", &self.strategies.keys().collect::<Vec<_>>())
            .finish()
    }
}
