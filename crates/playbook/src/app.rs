//! The UUID generation playbook step.

use crate::{ExitStatus, OutputType, PlaybookIo};
use idgen_uuid::{
    Clock, CryptoRngCore, GenerationOutcome, GenerationRequest, IdentifierService, SystemClock,
};

pub const INPUT_VERSION: &str = "uuid_version";
pub const INPUT_NAMESPACE: &str = "uuid_namespace";
pub const INPUT_NAME: &str = "uuid_name";
pub const OUTPUT_UUID: &str = "uuid";

pub const SUCCESS_MESSAGE: &str = "Successfully generated UUID.";

/// Playbook step that generates a UUID.
#[derive(Debug)]
pub struct UuidGeneratorApp {
    service: IdentifierService,
}

impl UuidGeneratorApp {
    pub fn new(service: IdentifierService) -> Self {
        Self { service }
    }

    /// Runs the step with thread-local randomness and the system clock.
    pub fn run(&self, io: &mut dyn PlaybookIo) -> ExitStatus {
        self.execute(io, &mut rand::thread_rng(), &SystemClock)
    }

    /// Reads the inputs, generates, and reports through `io`.
    ///
    /// # Arguments
    ///
    /// * `io` - Host parameter and message channel.
    /// * `rng` - Randomness for versions 1 and 4.
    /// * `clock` - Time source for version 1.
    ///
    /// # Returns
    ///
    /// Returns [`ExitStatus::Failure`] when generation fails, otherwise
    /// [`ExitStatus::Success`].
    ///
    /// On failure the error message is emitted and no output is written. On success the
    /// `uuid` output is written only if the host expects it; a skipped (unrecognised)
    /// version writes nothing but still succeeds.
    pub fn execute(
        &self,
        io: &mut dyn PlaybookIo,
        rng: &mut dyn CryptoRngCore,
        clock: &dyn Clock,
    ) -> ExitStatus {
        let request = GenerationRequest {
            version: io.read_string(INPUT_VERSION),
            namespace: io.read_string(INPUT_NAMESPACE),
            name: io.read_string(INPUT_NAME),
        };

        let identifier = match self.service.generate(&request, rng, clock) {
            GenerationOutcome::Generated(id) => Some(id),
            GenerationOutcome::Skipped { .. } => None,
            GenerationOutcome::Failed(e) => {
                io.emit_status_message(&e.to_string());
                return ExitStatus::Failure;
            }
        };

        if let Some(id) = identifier {
            if io.is_output_expected(OUTPUT_UUID, OutputType::String) {
                io.write_output(OUTPUT_UUID, &id.to_string());
            } else {
                tracing::debug!("output '{}' not expected, not written", OUTPUT_UUID);
            }
        }

        io.emit_status_message(SUCCESS_MESSAGE);
        ExitStatus::Success
    }
}
