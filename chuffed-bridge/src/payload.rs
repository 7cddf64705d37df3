//! The opaque inputs of a solver invocation.
//!
//! Neither the FlatZinc payload nor the options blob is interpreted by the bridge; both are owned
//! copies of whatever the caller handed over, so the caller's buffers can be released as soon as
//! the value is constructed.

/// The text of a FlatZinc problem, as raw bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlatZincPayload(Vec<u8>);

impl FlatZincPayload {
    pub fn new(bytes: impl Into<Vec<u8>>) -> FlatZincPayload {
        FlatZincPayload(bytes.into())
    }

    /// Concatenates the given chunks, in order, into a single payload.
    pub fn from_chunks<I>(chunks: I) -> FlatZincPayload
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let mut bytes = Vec::new();
        for chunk in chunks {
            bytes.extend_from_slice(chunk.as_ref());
        }

        FlatZincPayload(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Ensures the payload ends with a line terminator. An empty payload is left empty.
    pub fn with_trailing_newline(mut self) -> FlatZincPayload {
        if self.0.last().is_some_and(|&byte| byte != b'\n') {
            self.0.push(b'\n');
        }

        self
    }
}

impl From<Vec<u8>> for FlatZincPayload {
    fn from(bytes: Vec<u8>) -> Self {
        FlatZincPayload(bytes)
    }
}

/// Serialized solver options (typically JSON text) supplied alongside a payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionsBlob(Vec<u8>);

impl OptionsBlob {
    pub fn new(bytes: impl Into<Vec<u8>>) -> OptionsBlob {
        OptionsBlob(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Default for OptionsBlob {
    /// The empty JSON object, used whenever the caller supplies no usable options.
    fn default() -> Self {
        OptionsBlob(b"{}".to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunks_are_concatenated_in_order() {
        let payload = FlatZincPayload::from_chunks([
            &b"var 1..3: x;\n"[..],
            b"",
            b"solve satisfy;\n",
        ]);

        assert_eq!(payload.as_bytes(), b"var 1..3: x;\nsolve satisfy;\n");
    }

    #[test]
    fn no_chunks_give_an_empty_payload() {
        let payload = FlatZincPayload::from_chunks(Vec::<Vec<u8>>::new());

        assert!(payload.is_empty());
    }

    #[test]
    fn trailing_newline_is_appended_once() {
        let payload = FlatZincPayload::new("solve satisfy;").with_trailing_newline();
        assert_eq!(payload.as_bytes(), b"solve satisfy;\n");

        let payload = payload.with_trailing_newline();
        assert_eq!(payload.as_bytes(), b"solve satisfy;\n");
    }

    #[test]
    fn empty_payload_stays_empty() {
        let payload = FlatZincPayload::default().with_trailing_newline();

        assert_eq!(payload.len(), 0);
    }

    #[test]
    fn default_options_are_an_empty_object() {
        assert_eq!(OptionsBlob::default().as_bytes(), b"{}");
    }
}
