//! Binding to the Chuffed library through the C shim in `cpp/chuffed_shim.cpp`.

use std::ffi::c_char;
use std::ffi::c_int;
use std::ffi::CString;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

use super::EmbeddedSolver;
use super::EngineError;
use super::EngineStatus;

const SHIM_OK: c_int = 0;
const SHIM_NO_PROBLEM: c_int = 1;
const SHIM_EXCEPTION: c_int = 2;

const STATUS_SATISFIED: c_int = 1;
const STATUS_LOCALLY_UNSATISFIABLE: c_int = 2;
const STATUS_GLOBALLY_UNSATISFIABLE: c_int = 3;

/// A byte buffer allocated by the shim.
#[repr(C)]
#[derive(Debug)]
struct ShimBuffer {
    data: *mut c_char,
    len: usize,
}

extern "C" {
    fn chuffed_bridge_configure(
        argc: c_int,
        argv: *const *const c_char,
        message: *mut ShimBuffer,
    ) -> c_int;
    fn chuffed_bridge_parse(
        data: *const c_char,
        len: usize,
        diagnostics: *mut ShimBuffer,
        message: *mut ShimBuffer,
    ) -> c_int;
    fn chuffed_bridge_transfer_assumptions(message: *mut ShimBuffer) -> c_int;
    fn chuffed_bridge_solve(
        output: *mut ShimBuffer,
        status: *mut c_int,
        message: *mut ShimBuffer,
    ) -> c_int;
    fn chuffed_bridge_buffer_free(buffer: *mut ShimBuffer);
}

impl ShimBuffer {
    fn empty() -> ShimBuffer {
        ShimBuffer {
            data: std::ptr::null_mut(),
            len: 0,
        }
    }

    fn to_vec(&self) -> Vec<u8> {
        if self.data.is_null() {
            return Vec::new();
        }

        // SAFETY: the shim hands out buffers of exactly `len` initialised bytes, which stay alive
        // until `chuffed_bridge_buffer_free` is called in `drop`.
        unsafe { std::slice::from_raw_parts(self.data.cast::<u8>(), self.len) }.to_vec()
    }
}

impl Drop for ShimBuffer {
    fn drop(&mut self) {
        // SAFETY: the buffer is either empty or was allocated by the shim; freeing resets it to
        // empty, so a buffer is never freed twice.
        unsafe { chuffed_bridge_buffer_free(self) }
    }
}

/// Turns a shim return code into a result, taking the exception message if there was one.
fn check(code: c_int, message: &ShimBuffer) -> Result<c_int, EngineError> {
    match code {
        SHIM_OK | SHIM_NO_PROBLEM => Ok(code),
        SHIM_EXCEPTION => Err(EngineError::Exception(
            String::from_utf8_lossy(&message.to_vec()).into_owned(),
        )),
        _ => Err(EngineError::Unknown),
    }
}

static ACQUIRED: AtomicBool = AtomicBool::new(false);

/// The Chuffed solver linked into this process.
///
/// Chuffed keeps its options, the parsed problem and the engine in process-wide globals, so at
/// most one instance can ever be acquired per process.
#[derive(Debug)]
pub struct ChuffedSolver {
    _private: (),
}

impl ChuffedSolver {
    /// Returns the solver, or `None` if it was acquired before.
    pub fn acquire() -> Option<ChuffedSolver> {
        ACQUIRED
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| ChuffedSolver { _private: () })
    }
}

impl EmbeddedSolver for ChuffedSolver {
    fn configure(&mut self, arguments: &[&str]) -> Result<(), EngineError> {
        let arguments = arguments
            .iter()
            .map(|&argument| CString::new(argument))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| EngineError::Exception(e.to_string()))?;
        let mut argv = arguments
            .iter()
            .map(|argument| argument.as_ptr())
            .collect::<Vec<_>>();
        argv.push(std::ptr::null());

        let argc = c_int::try_from(arguments.len())
            .map_err(|e| EngineError::Exception(e.to_string()))?;

        let mut message = ShimBuffer::empty();
        // SAFETY: `argv` holds `argc` valid C strings followed by a null pointer, all of which
        // outlive the call.
        let code = unsafe { chuffed_bridge_configure(argc, argv.as_ptr(), &mut message) };

        check(code, &message).map(|_| ())
    }

    fn parse(&mut self, flatzinc: &[u8], diagnostics: &mut Vec<u8>) -> Result<bool, EngineError> {
        let mut parser_output = ShimBuffer::empty();
        let mut message = ShimBuffer::empty();
        // SAFETY: `flatzinc` is a valid slice for the duration of the call; the shim copies it.
        let code = unsafe {
            chuffed_bridge_parse(
                flatzinc.as_ptr().cast::<c_char>(),
                flatzinc.len(),
                &mut parser_output,
                &mut message,
            )
        };

        diagnostics.extend_from_slice(&parser_output.to_vec());

        check(code, &message).map(|code| code == SHIM_OK)
    }

    fn transfer_assumptions(&mut self) -> Result<(), EngineError> {
        let mut message = ShimBuffer::empty();
        // SAFETY: only called after a successful parse, as required by the shim.
        let code = unsafe { chuffed_bridge_transfer_assumptions(&mut message) };

        check(code, &message).map(|_| ())
    }

    fn solve(&mut self, output: &mut Vec<u8>) -> Result<EngineStatus, EngineError> {
        let mut solution_output = ShimBuffer::empty();
        let mut status: c_int = 0;
        let mut message = ShimBuffer::empty();
        // SAFETY: all out-pointers refer to live locals.
        let code =
            unsafe { chuffed_bridge_solve(&mut solution_output, &mut status, &mut message) };

        let _ = check(code, &message)?;
        output.extend_from_slice(&solution_output.to_vec());

        Ok(match status {
            STATUS_SATISFIED => EngineStatus::Satisfied,
            STATUS_LOCALLY_UNSATISFIABLE => EngineStatus::LocallyUnsatisfiable,
            STATUS_GLOBALLY_UNSATISFIABLE => EngineStatus::GloballyUnsatisfiable,
            _ => EngineStatus::Unknown,
        })
    }
}
