use thiserror::Error;

/// Caller contract violations.
///
/// Malformed identifiers never end up here: those are reported as a failed
/// [`ValidationResult`](crate::models::ValidationResult). This type is only
/// returned when a helper is called with arguments outside its domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KitError {
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("argument `{name}` out of range: {value}")]
    OutOfRange { name: &'static str, value: i64 },
}

impl KitError {
    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        KitError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}
