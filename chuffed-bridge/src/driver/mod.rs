//! Drives a solver linked into the current process.
//!
//! The driver owns the process: it reads a FlatZinc payload from its input stream, runs the
//! embedded solver on it, and writes exactly one result block. A successful run writes
//! `ok\n<solution output>` to the output stream; every failure writes `error\n<reason>\n` to the
//! error stream instead. Nothing else is written to either stream.

#[cfg(feature = "embedded-chuffed")]
mod chuffed;
mod engine;

use std::io::Read;
use std::io::Write;
use std::panic::AssertUnwindSafe;

#[cfg(feature = "embedded-chuffed")]
pub use chuffed::ChuffedSolver;
pub use engine::EmbeddedSolver;
pub use engine::EngineError;
pub use engine::EngineStatus;
use log::debug;

use crate::classifier::TerminalStatus;
use crate::payload::FlatZincPayload;
use crate::result::TaggedResult;

/// The argument vector the embedded solver is configured with. Callers cannot add options.
pub const SOLVER_ARGUMENTS: &[&str] = &["chuffed"];

pub const MSG_NO_CONTENT: &str = "No FlatZinc content provided";
pub const MSG_PARSE_FAILURE: &str = "Failed to parse FlatZinc problem";
pub const MSG_UNSATISFIABLE: &str = "UNSATISFIABLE";
pub const MSG_NO_SOLUTION: &str = "No solution found";

#[derive(Debug)]
pub struct InProcessDriver<S> {
    solver: S,
}

impl<S: EmbeddedSolver> InProcessDriver<S> {
    pub fn new(solver: S) -> InProcessDriver<S> {
        InProcessDriver { solver }
    }

    pub fn into_inner(self) -> S {
        self.solver
    }

    /// Reads `input` to the end, solves it and writes the result block to `output` or `error`.
    ///
    /// The returned result is the one that was written. An `Err` only reports that one of the
    /// streams failed.
    pub fn run(
        &mut self,
        mut input: impl Read,
        output: impl Write,
        error: impl Write,
    ) -> std::io::Result<TaggedResult> {
        let mut bytes = Vec::new();
        let _ = input.read_to_end(&mut bytes)?;

        let result = self.solve(FlatZincPayload::from(bytes));
        write_result(&result, output, error)?;

        Ok(result)
    }

    /// Solves `payload`. Failures escaping the solver, panics included, are turned into an
    /// `error` result.
    pub fn solve(&mut self, payload: FlatZincPayload) -> TaggedResult {
        if payload.is_empty() {
            return TaggedResult::error(MSG_NO_CONTENT);
        }

        let payload = payload.with_trailing_newline();

        match std::panic::catch_unwind(AssertUnwindSafe(|| self.solve_payload(&payload))) {
            Ok(Ok(result)) => result,
            Ok(Err(EngineError::Exception(message))) => TaggedResult::error(message),
            Ok(Err(EngineError::Unknown)) | Err(_) => {
                terminal_result(TerminalStatus::UnknownException, Vec::new())
            }
        }
    }

    fn solve_payload(&mut self, payload: &FlatZincPayload) -> Result<TaggedResult, EngineError> {
        self.solver.configure(SOLVER_ARGUMENTS)?;

        let mut diagnostics = Vec::new();
        let parsed = self.solver.parse(payload.as_bytes(), &mut diagnostics)?;
        if !diagnostics.is_empty() {
            debug!(
                "parser diagnostics: {}",
                String::from_utf8_lossy(&diagnostics).trim_end()
            );
        }

        if !parsed {
            return Ok(terminal_result(TerminalStatus::ParseFailure, diagnostics));
        }

        self.solver.transfer_assumptions()?;

        let mut output = Vec::new();
        let status = self.solver.solve(&mut output)?;
        debug!("engine finished with status {status:?}");

        let terminal_status = TerminalStatus::from_engine(status, &output);
        Ok(terminal_result(terminal_status, output))
    }
}

fn terminal_result(status: TerminalStatus, output: Vec<u8>) -> TaggedResult {
    match status {
        TerminalStatus::Satisfied => TaggedResult::Ok(output),
        TerminalStatus::Unsatisfiable => TaggedResult::error(MSG_UNSATISFIABLE),
        TerminalStatus::NoSolution => TaggedResult::error(MSG_NO_SOLUTION),
        TerminalStatus::ParseFailure => TaggedResult::error(MSG_PARSE_FAILURE),
        TerminalStatus::ExecutionFailure => TaggedResult::Error(output),
        TerminalStatus::UnknownException => TaggedResult::error(EngineError::Unknown.to_string()),
    }
}

/// Writes the result block in a single write, so a reader never observes half a block.
pub fn write_result(
    result: &TaggedResult,
    mut output: impl Write,
    mut error: impl Write,
) -> std::io::Result<()> {
    let mut block = format!("{}\n", result.tag()).into_bytes();
    block.extend_from_slice(result.payload());

    match result {
        TaggedResult::Ok(_) => {
            output.write_all(&block)?;
            output.flush()
        }
        TaggedResult::Error(_) => {
            block.push(b'\n');
            error.write_all(&block)?;
            error.flush()
        }
    }
}
