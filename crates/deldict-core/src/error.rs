/// Errors raised by dictionary construction and by the C boundary.
///
/// Absent or malformed required arguments are programmer errors and are
/// reported immediately. A query that matches nothing is not an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DictError {
    #[error("invalid argument `{arg}`: {reason}")]
    InvalidArgument {
        arg: &'static str,
        reason: &'static str,
    },
}

impl DictError {
    pub fn null(arg: &'static str) -> Self {
        DictError::InvalidArgument {
            arg,
            reason: "must not be null",
        }
    }

    pub fn invalid_utf8(arg: &'static str) -> Self {
        DictError::InvalidArgument {
            arg,
            reason: "must be valid UTF-8",
        }
    }
}
