use thiserror::Error;

pub type BridgeResult<T> = Result<T, BridgeError>;

/// The ways an invocation of the out-of-process bridge can fail before the solver gets to
/// classify its own output.
///
/// Every variant maps onto the reason reported to the host through [`BridgeError::reason`].
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("the FlatZinc payload is not a binary")]
    InvalidFlatZinc,

    #[error("failed to create the scratch file: {0}")]
    CreateScratchFile(#[source] std::io::Error),

    #[error("failed to open the scratch file for writing: {0}")]
    OpenScratchFile(#[source] std::io::Error),

    #[error("failed to write the payload to the scratch file: {0}")]
    WriteScratchFile(#[source] std::io::Error),

    #[error("failed to execute the solver: {0}")]
    ExecuteSolver(#[source] std::io::Error),

    #[error("the host could not allocate the requested object")]
    AllocationFailed,

    #[error("the value is not a solver handle")]
    InvalidResource,
}

impl BridgeError {
    /// The reason reported to the host in the `error` envelope.
    pub fn reason(&self) -> &'static str {
        match self {
            BridgeError::InvalidFlatZinc => "invalid_flatzinc",
            BridgeError::CreateScratchFile(_) => "failed_to_create_temp_file",
            BridgeError::OpenScratchFile(_) => "failed_to_open_temp_file",
            BridgeError::WriteScratchFile(_) => "failed_to_write_temp_file",
            BridgeError::ExecuteSolver(_) => "failed_to_execute_chuffed",
            BridgeError::AllocationFailed => "allocation_failed",
            BridgeError::InvalidResource => "invalid_resource",
        }
    }
}
