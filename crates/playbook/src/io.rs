//! Host contract.
//!
//! A step sees the host runtime only through [`PlaybookIo`]. It reads named string
//! parameters, checks which outputs a downstream step consumes, writes outputs, and emits one
//! status message per run. The run ends with an [`ExitStatus`].

use std::fmt;

/// Type of a playbook output variable.
///
/// The generator only produces string outputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OutputType {
    String,
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputType::String => f.write_str("String"),
        }
    }
}

/// Exit signal handed back to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
}

impl ExitStatus {
    /// Process exit code for this status.
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
        }
    }
}

/// Parameter and message channel provided by the host runtime.
pub trait PlaybookIo {
    /// Value of the named input parameter, or `None` if it was not supplied.
    fn read_string(&self, name: &str) -> Option<String>;

    /// Whether a downstream step consumes the named output.
    fn is_output_expected(&self, name: &str, kind: OutputType) -> bool;

    /// Sets the named output. Only called for outputs the host expects.
    fn write_output(&mut self, name: &str, value: &str);

    /// Human-readable status shown by the host for this step.
    fn emit_status_message(&mut self, text: &str);
}
