mod glue;
mod handle;

use chuffed_bridge::BridgeError;
use chuffed_bridge::FlatZincPayload;
use chuffed_bridge::OutOfProcessBridge;
use chuffed_bridge::SolverHandle;
use chuffed_bridge::Tag;
use pyo3::prelude::*;

use crate::glue::get_binary;
use crate::glue::get_binary_list;
use crate::glue::get_options;
use crate::glue::make_error;
use crate::glue::make_result;
use crate::glue::make_tag;
use crate::glue::make_tuple;
use crate::handle::PySolverHandle;

/// Solve a FlatZinc model with the `chuffed` executable.
///
/// `payload` is `bytes` or a list of `bytes` that is concatenated. `options` is passed along as
/// opaque bytes and defaults to `b"{}"`.
///
/// Returns `("ok", output)` or `("error", reason)`. The interpreter lock is released while the
/// solver runs.
#[pyfunction]
#[pyo3(signature = (payload, options=None))]
fn solve_flatzinc(
    py: Python<'_>,
    payload: &Bound<'_, PyAny>,
    options: Option<&Bound<'_, PyAny>>,
) -> PyResult<PyObject> {
    solve_with(py, OutOfProcessBridge::default(), payload, options)
}

fn solve_with(
    py: Python<'_>,
    bridge: OutOfProcessBridge,
    payload: &Bound<'_, PyAny>,
    options: Option<&Bound<'_, PyAny>>,
) -> PyResult<PyObject> {
    let Some(payload) = get_binary(payload)
        .map(FlatZincPayload::new)
        .or_else(|| get_binary_list(payload).map(FlatZincPayload::from_chunks))
    else {
        return make_error(py, &BridgeError::InvalidFlatZinc);
    };

    let options = get_options(options);

    match py.allow_threads(move || bridge.solve(&payload, &options)) {
        Ok(result) => make_result(py, &result),
        Err(e) => make_error(py, &e),
    }
}

/// Create a solver handle. Returns `("ok", handle)`.
#[pyfunction]
fn create_solver(py: Python<'_>) -> PyResult<PyObject> {
    match Py::new(py, PySolverHandle(SolverHandle::new())) {
        Ok(handle) => make_tuple(py, Tag::Ok, handle.into_bound(py).into_any()),
        Err(_) => make_error(py, &BridgeError::AllocationFailed),
    }
}

/// Destroy a solver handle. Destroying a handle more than once is allowed.
///
/// Returns `"ok"`, or `("error", "invalid_resource")` if `handle` is not a solver handle.
#[pyfunction]
fn destroy_solver(py: Python<'_>, handle: &Bound<'_, PyAny>) -> PyResult<PyObject> {
    let Ok(handle) = handle.downcast::<PySolverHandle>() else {
        return make_error(py, &BridgeError::InvalidResource);
    };

    match handle.try_borrow_mut() {
        Ok(mut handle) => {
            handle.0.release();
            Ok(make_tag(py, Tag::Ok))
        }
        Err(_) => make_error(py, &BridgeError::InvalidResource),
    }
}

#[pymodule]
fn chuffed_bridge_py(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySolverHandle>()?;

    m.add_function(wrap_pyfunction!(solve_flatzinc, m)?)?;
    m.add_function(wrap_pyfunction!(create_solver, m)?)?;
    m.add_function(wrap_pyfunction!(destroy_solver, m)?)?;

    Ok(())
}
