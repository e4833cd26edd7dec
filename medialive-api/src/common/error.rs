/// Errors raised while building or checking API records on the client side.
///
/// Service-side validation failures are reported by the remote API and are
/// not represented here.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ModelError {
    #[error("Duplicated key {0:?} is provided.")]
    DuplicateTagKey(String),

    #[error("{field} is {value}, expected {expected}.")]
    OutOfRange {
        field: &'static str,
        value: String,
        expected: String,
    },

    #[error("{field} is invalid: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ModelError {
    pub fn invalid<S: Into<String>>(field: &'static str, reason: S) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}
