//! Conversions between Python values and the byte buffers of the bridge.

use chuffed_bridge::BridgeError;
use chuffed_bridge::OptionsBlob;
use chuffed_bridge::Tag;
use chuffed_bridge::TaggedResult;
use pyo3::prelude::*;
use pyo3::types::PyBytes;
use pyo3::types::PyList;
use pyo3::types::PyString;
use pyo3::types::PyTuple;

/// Copies the contents of a `bytes` object, or returns `None` if `term` is anything else.
///
/// The copy is taken while the interpreter lock is held, so the buffer stays valid after the lock
/// is released for solving.
pub(crate) fn get_binary(term: &Bound<'_, PyAny>) -> Option<Vec<u8>> {
    term.downcast::<PyBytes>()
        .ok()
        .map(|bytes| bytes.as_bytes().to_vec())
}

/// Copies every element of a list of `bytes`. A single element of another type fails the whole
/// conversion.
pub(crate) fn get_binary_list(term: &Bound<'_, PyAny>) -> Option<Vec<Vec<u8>>> {
    let list = term.downcast::<PyList>().ok()?;

    list.iter().map(|element| get_binary(&element)).collect()
}

/// The options blob of a call. Anything other than `bytes`, including no value, becomes `b"{}"`.
pub(crate) fn get_options(term: Option<&Bound<'_, PyAny>>) -> OptionsBlob {
    term.and_then(get_binary)
        .map(OptionsBlob::new)
        .unwrap_or_default()
}

/// Allocates a `bytes` object holding a copy of `bytes`.
pub(crate) fn make_binary<'py>(py: Python<'py>, bytes: &[u8]) -> PyResult<Bound<'py, PyBytes>> {
    PyBytes::new_with(py, bytes.len(), |buffer| {
        buffer.copy_from_slice(bytes);
        Ok(())
    })
}

pub(crate) fn make_tuple<'py>(
    py: Python<'py>,
    tag: Tag,
    value: Bound<'py, PyAny>,
) -> PyResult<PyObject> {
    let tag = PyString::new(py, tag.as_str()).into_any();

    Ok(PyTuple::new(py, [tag, value])?.into_any().unbind())
}

/// The bare tag, used where the tagged value itself could not be built.
pub(crate) fn make_tag(py: Python<'_>, tag: Tag) -> PyObject {
    PyString::new(py, tag.as_str()).into_any().unbind()
}

pub(crate) fn make_error(py: Python<'_>, error: &BridgeError) -> PyResult<PyObject> {
    let reason = PyString::new(py, error.reason()).into_any();

    make_tuple(py, Tag::Error, reason)
}

pub(crate) fn make_result(py: Python<'_>, result: &TaggedResult) -> PyResult<PyObject> {
    match make_binary(py, result.payload()) {
        Ok(payload) => make_tuple(py, result.tag(), payload.into_any()),
        Err(_) => Ok(make_tag(py, Tag::Error)),
    }
}
