use thiserror::Error;

/// The verdict an embedded engine reports once its solve entry point returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EngineStatus {
    Satisfied,
    /// Unsatisfiable under the current assumptions.
    LocallyUnsatisfiable,
    GloballyUnsatisfiable,
    /// Any other outcome, e.g. the search stopped before reaching a verdict.
    Unknown,
}

/// A failure escaping the embedded solver.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// A failure carrying a message.
    #[error("{0}")]
    Exception(String),
    #[error("Unknown exception")]
    Unknown,
}

/// A solver linked into the current process.
///
/// The operations follow the solver's own entry points and are called in order: the solver is
/// configured, the payload is parsed into the solver's current problem, the assumptions of that
/// problem are handed to the engine, and finally the engine is run.
pub trait EmbeddedSolver {
    /// Initialises the solver options from a command-line style argument vector.
    fn configure(&mut self, arguments: &[&str]) -> Result<(), EngineError>;

    /// Parses `flatzinc` into the current problem. Parser messages are appended to
    /// `diagnostics`.
    ///
    /// Returns `false` if no problem was produced.
    fn parse(&mut self, flatzinc: &[u8], diagnostics: &mut Vec<u8>) -> Result<bool, EngineError>;

    /// Moves the assumptions of the parsed problem into the engine.
    fn transfer_assumptions(&mut self) -> Result<(), EngineError>;

    /// Runs the engine on the parsed problem, writing its solution output to `output`.
    fn solve(&mut self, output: &mut Vec<u8>) -> Result<EngineStatus, EngineError>;
}
