use thiserror::Error;

pub(crate) type DriverResult<T> = Result<T, DriverError>;

#[derive(Error, Debug)]
pub(crate) enum DriverError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("The embedded solver is already in use by this process.")]
    SolverUnavailable,
}
