//! Generator configuration.
//!
//! Configuration is resolved once at process startup and then passed into
//! [`IdentifierService::from_config`](crate::IdentifierService::from_config). Nothing in this
//! crate reads environment variables; the binary reads them and hands the raw values to the
//! `*_from_env_value` helpers below.

use crate::NodeId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid node id '{0}': expected 12 hex digits, optionally ':' or '-' separated")]
    InvalidNodeId(String),
    #[error("invalid boolean '{0}': expected one of true/false/1/0/yes/no/on/off")]
    InvalidBool(String),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Generator configuration resolved at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    node_id: Option<NodeId>,
    strict_versions: bool,
}

impl GeneratorConfig {
    /// Create a new `GeneratorConfig`.
    ///
    /// With `node_id` unset, the service draws a random multicast node id when it is built.
    /// With `strict_versions` set, versions without a strategy fail instead of being skipped.
    pub fn new(node_id: Option<NodeId>, strict_versions: bool) -> Self {
        Self {
            node_id,
            strict_versions,
        }
    }

    /// Node id for version 1, if one was configured.
    pub fn node_id(&self) -> Option<NodeId> {
        self.node_id
    }

    /// Whether versions without a strategy fail.
    pub fn strict_versions(&self) -> bool {
        self.strict_versions
    }

    pub fn with_strict_versions(mut self, strict_versions: bool) -> Self {
        self.strict_versions = strict_versions;
        self
    }
}

/// Parse the node id from an optional string value.
///
/// `None` or empty/whitespace yields `None`.
pub fn node_id_from_env_value(value: Option<String>) -> ConfigResult<Option<NodeId>> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(|v| v.parse::<NodeId>())
        .transpose()
}

/// Parse the strict-versions flag from an optional string value.
///
/// `None` or empty/whitespace yields `false`.
pub fn strict_versions_from_env_value(value: Option<String>) -> ConfigResult<bool> {
    let value = value
        .map(|v| v.trim().to_ascii_lowercase())
        .filter(|v| !v.is_empty());

    match value.as_deref() {
        None => Ok(false),
        Some("1" | "true" | "yes" | "on") => Ok(true),
        Some("0" | "false" | "no" | "off") => Ok(false),
        Some(other) => Err(ConfigError::InvalidBool(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();

        assert_eq!(config.node_id(), None);
        assert!(!config.strict_versions());
    }

    #[test]
    fn test_node_id_from_env_value_unset_or_blank() {
        assert_eq!(node_id_from_env_value(None), Ok(None));
        assert_eq!(node_id_from_env_value(Some("   ".into())), Ok(None));
    }

    #[test]
    fn test_node_id_from_env_value_trims() {
        let node = node_id_from_env_value(Some(" 02:00:5e:10:00:01 ".into()))
            .unwrap()
            .unwrap();

        assert_eq!(node.to_string(), "02005e100001");
    }

    #[test]
    fn test_node_id_from_env_value_invalid() {
        assert!(matches!(
            node_id_from_env_value(Some("nope".into())),
            Err(ConfigError::InvalidNodeId(_))
        ));
    }

    #[test]
    fn test_strict_versions_from_env_value() {
        assert_eq!(strict_versions_from_env_value(None), Ok(false));
        assert_eq!(strict_versions_from_env_value(Some("".into())), Ok(false));
        assert_eq!(strict_versions_from_env_value(Some("TRUE".into())), Ok(true));
        assert_eq!(strict_versions_from_env_value(Some("1".into())), Ok(true));
        assert_eq!(strict_versions_from_env_value(Some("off".into())), Ok(false));
        assert_eq!(
            strict_versions_from_env_value(Some("maybe".into())),
            Err(ConfigError::InvalidBool("maybe".into()))
        );
    }

    #[test]
    fn test_with_strict_versions() {
        let config = GeneratorConfig::default().with_strict_versions(true);

        assert!(config.strict_versions());
    }
}
