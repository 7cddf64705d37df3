use log::debug;
use log::warn;

use crate::classifier::classify;
use crate::error::BridgeError;
use crate::error::BridgeResult;
use crate::options::BridgeOptions;
use crate::payload::FlatZincPayload;
use crate::payload::OptionsBlob;
use crate::process::run_merged;
use crate::result::TaggedResult;
use crate::scratch::ScratchFile;

/// Solves FlatZinc payloads by running the solver executable on a scratch copy of each payload.
///
/// Invocations share no state; each one creates, and always removes, its own scratch file. A call
/// to [`OutOfProcessBridge::solve`] blocks until the solver process has exited.
#[derive(Clone, Debug, Default)]
pub struct OutOfProcessBridge {
    options: BridgeOptions,
}

impl OutOfProcessBridge {
    pub fn new(options: BridgeOptions) -> OutOfProcessBridge {
        OutOfProcessBridge { options }
    }

    pub fn options(&self) -> &BridgeOptions {
        &self.options
    }

    /// Solves `payload` and classifies the solver's output.
    ///
    /// An empty payload is handed to the solver like any other; the solver's diagnostic decides
    /// the result. The `options` are accepted for the host contract but not forwarded, the scratch
    /// path is the solver's only argument.
    ///
    /// The outer error covers failures of the bridge itself (see [`BridgeError::reason`]); a
    /// solver which ran but failed yields `Ok(TaggedResult::Error(output))`.
    pub fn solve(
        &self,
        payload: &FlatZincPayload,
        options: &OptionsBlob,
    ) -> BridgeResult<TaggedResult> {
        debug!(
            "solving {} bytes of FlatZinc with options {}",
            payload.len(),
            String::from_utf8_lossy(options.as_bytes())
        );

        let scratch = ScratchFile::create(&self.options)?;
        scratch.write_payload(payload.as_bytes())?;

        let invocation = run_merged(&self.options.executable, scratch.path());

        let path = scratch.path().to_path_buf();
        if let Err(e) = scratch.remove() {
            warn!("failed to remove scratch file {}: {e}", path.display());
        }

        let process = invocation.map_err(BridgeError::ExecuteSolver)?;

        Ok(classify(process.exit_code, process.output))
    }
}
