use chuffed_bridge::SolverHandle;
use pyo3::prelude::*;

/// The host-side wrapper of a [`SolverHandle`].
///
/// Python owns the object; when it is collected, dropping the inner handle runs the same cleanup
/// as `destroy_solver`.
#[pyclass(name = "SolverHandle", module = "chuffed_bridge_py")]
#[derive(Debug)]
pub(crate) struct PySolverHandle(pub(crate) SolverHandle);

#[pymethods]
impl PySolverHandle {
    #[getter]
    fn initialized(&self) -> bool {
        self.0.is_initialized()
    }

    fn __repr__(&self) -> String {
        format!("SolverHandle(initialized={})", self.0.is_initialized())
    }
}
