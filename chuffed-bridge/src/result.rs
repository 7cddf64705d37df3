use std::fmt::Display;
use std::fmt::Formatter;

/// The tag of a [`TaggedResult`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    Ok,
    Error,
}

impl Tag {
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Ok => "ok",
            Tag::Error => "error",
        }
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The value handed back to the caller of a solver invocation.
///
/// The tag is authoritative; the payload is either the solver's output or a diagnostic and should
/// not be inspected to decide between success and failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TaggedResult {
    Ok(Vec<u8>),
    Error(Vec<u8>),
}

impl TaggedResult {
    pub fn error(reason: impl Into<Vec<u8>>) -> TaggedResult {
        TaggedResult::Error(reason.into())
    }

    pub fn tag(&self) -> Tag {
        match self {
            TaggedResult::Ok(_) => Tag::Ok,
            TaggedResult::Error(_) => Tag::Error,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, TaggedResult::Ok(_))
    }

    pub fn payload(&self) -> &[u8] {
        match self {
            TaggedResult::Ok(payload) | TaggedResult::Error(payload) => payload,
        }
    }

    pub fn into_payload(self) -> Vec<u8> {
        match self {
            TaggedResult::Ok(payload) | TaggedResult::Error(payload) => payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_follows_variant() {
        let ok = TaggedResult::Ok(b"x = 2;\n".to_vec());
        let error = TaggedResult::error("UNSATISFIABLE");

        assert_eq!(ok.tag(), Tag::Ok);
        assert!(ok.is_ok());
        assert_eq!(error.tag(), Tag::Error);
        assert_eq!(error.payload(), b"UNSATISFIABLE");
    }

    #[test]
    fn tags_render_as_host_atoms() {
        assert_eq!(Tag::Ok.to_string(), "ok");
        assert_eq!(Tag::Error.to_string(), "error");
    }
}
