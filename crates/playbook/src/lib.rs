//! # Playbook step
//!
//! Runs UUID generation as one step of a host automation runtime.
//!
//! The host is reached only through [`PlaybookIo`]: read a named string parameter, ask
//! whether an output is expected, write an output, emit a status message. The step returns
//! an [`ExitStatus`] that the host uses for downstream branching.
//!
//! **No generation logic lives here**: versions, validation and hashing belong to
//! `idgen-uuid`.

mod app;
mod io;
mod memory;

pub use app::{
    UuidGeneratorApp, INPUT_NAME, INPUT_NAMESPACE, INPUT_VERSION, OUTPUT_UUID, SUCCESS_MESSAGE,
};
pub use io::{ExitStatus, OutputType, PlaybookIo};
pub use memory::MemoryIo;

#[derive(Debug, thiserror::Error)]
pub enum PlaybookError {
    #[error("failed to read parameter file: {0}")]
    ParamsRead(std::io::Error),
    #[error("failed to parse parameter file: {0}")]
    ParamsParse(serde_json::Error),
    #[error("parameter '{0}' must be a string, number or boolean")]
    InvalidParam(String),
}

pub type PlaybookResult<T> = std::result::Result<T, PlaybookError>;
