//! In-memory host.
//!
//! Backs the tests and the command-line host: inputs come from a map (optionally loaded
//! from a JSON parameter file), outputs and status messages are recorded for inspection.

use crate::{OutputType, PlaybookError, PlaybookIo, PlaybookResult};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryIo {
    inputs: BTreeMap<String, String>,
    expected: BTreeSet<(String, OutputType)>,
    outputs: BTreeMap<String, String>,
    messages: Vec<String>,
}

impl MemoryIo {
    /// An empty host: no inputs, no expected outputs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads inputs from a JSON object file.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybookError::ParamsRead`] if the file cannot be read, otherwise the errors
    /// of [`MemoryIo::from_json_str`].
    pub fn from_json_file(path: &Path) -> PlaybookResult<Self> {
        let text = std::fs::read_to_string(path).map_err(PlaybookError::ParamsRead)?;
        Self::from_json_str(&text)
    }

    /// Loads inputs from a JSON object.
    ///
    /// Strings are taken as-is, numbers and booleans by their JSON text; `null` leaves the
    /// parameter unset.
    ///
    /// # Errors
    ///
    /// - [`PlaybookError::ParamsParse`] if `text` is not a JSON object.
    /// - [`PlaybookError::InvalidParam`] if a value is an array or object.
    pub fn from_json_str(text: &str) -> PlaybookResult<Self> {
        let params: BTreeMap<String, Value> =
            serde_json::from_str(text).map_err(PlaybookError::ParamsParse)?;

        let mut io = Self::new();
        for (name, value) in params {
            match value {
                Value::Null => {}
                Value::String(s) => io.set_input(name, s),
                Value::Number(n) => io.set_input(name, n.to_string()),
                Value::Bool(b) => io.set_input(name, b.to_string()),
                Value::Array(_) | Value::Object(_) => {
                    return Err(PlaybookError::InvalidParam(name));
                }
            }
        }
        Ok(io)
    }

    /// Sets the named input parameter, replacing any previous value.
    ///
    /// # Arguments
    ///
    /// * `name` - Parameter name, e.g. `uuid_version`.
    /// * `value` - Raw parameter text.
    pub fn set_input(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.inputs.insert(name.into(), value.into());
    }

    /// Declares that a downstream step consumes `name`.
    pub fn expect_output(mut self, name: impl Into<String>, kind: OutputType) -> Self {
        self.expected.insert((name.into(), kind));
        self
    }

    /// Value written to the named output, if any.
    pub fn output(&self, name: &str) -> Option<&str> {
        self.outputs.get(name).map(String::as_str)
    }

    /// All written outputs, by name.
    pub fn outputs(&self) -> &BTreeMap<String, String> {
        &self.outputs
    }

    /// Status messages in emission order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn last_message(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }
}

impl PlaybookIo for MemoryIo {
    fn read_string(&self, name: &str) -> Option<String> {
        self.inputs.get(name).cloned()
    }

    fn is_output_expected(&self, name: &str, kind: OutputType) -> bool {
        self.expected.contains(&(name.to_string(), kind))
    }

    fn write_output(&mut self, name: &str, value: &str) {
        self.outputs.insert(name.to_string(), value.to_string());
    }

    fn emit_status_message(&mut self, text: &str) {
        tracing::debug!("status message: {}", text);
        self.messages.push(text.to_string());
    }
}
