//! Maps the way a solver run ended onto a [`TaggedResult`].
//!
//! Both entry paths share these rules. The out-of-process bridge only observes an exit code and the
//! captured output ([`classify`]), while the in-process driver can ask the engine directly
//! ([`TerminalStatus::from_engine`]).

use crate::driver::EngineStatus;
use crate::result::TaggedResult;

/// The marker which the FlatZinc output convention prints after every solution.
pub const SOLUTION_TERMINATOR: &[u8] = b"==========";

/// How a single solver invocation ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TerminalStatus {
    /// A solution was produced.
    Satisfied,
    /// The engine proved that the problem has no solution.
    Unsatisfiable,
    /// The engine stopped without a verdict and without output.
    NoSolution,
    /// The FlatZinc text did not produce a problem.
    ParseFailure,
    /// The solver process ended unsuccessfully without reporting a solution.
    ExecutionFailure,
    /// Something without a message escaped the solver.
    UnknownException,
}

impl TerminalStatus {
    /// Classifies a finished solver process.
    ///
    /// A non-zero exit code is tolerated when the output still contains a
    /// [`SOLUTION_TERMINATOR`]; some solver builds exit non-zero after printing a solution.
    pub fn from_exit(exit_code: i32, output: &[u8]) -> TerminalStatus {
        if exit_code == 0 || contains_solution_terminator(output) {
            TerminalStatus::Satisfied
        } else {
            TerminalStatus::ExecutionFailure
        }
    }

    /// Classifies an embedded engine run. When the engine gives no verdict, any captured output
    /// is taken to be a solution.
    pub fn from_engine(status: EngineStatus, output: &[u8]) -> TerminalStatus {
        match status {
            EngineStatus::Satisfied => TerminalStatus::Satisfied,
            EngineStatus::LocallyUnsatisfiable | EngineStatus::GloballyUnsatisfiable => {
                TerminalStatus::Unsatisfiable
            }
            EngineStatus::Unknown if output.is_empty() => TerminalStatus::NoSolution,
            EngineStatus::Unknown => TerminalStatus::Satisfied,
        }
    }

    pub fn is_success(self) -> bool {
        self == TerminalStatus::Satisfied
    }
}

/// Classifies the output of a solver process. The output itself is the payload of the result,
/// regardless of the tag.
pub fn classify(exit_code: i32, output: Vec<u8>) -> TaggedResult {
    if TerminalStatus::from_exit(exit_code, &output).is_success() {
        TaggedResult::Ok(output)
    } else {
        TaggedResult::Error(output)
    }
}

pub fn contains_solution_terminator(output: &[u8]) -> bool {
    output
        .windows(SOLUTION_TERMINATOR.len())
        .any(|window| window == SOLUTION_TERMINATOR)
}
