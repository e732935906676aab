use thiserror::Error;

/// Field-level validation failures for request payloads.
///
/// Raised by the controllers before the service layer is invoked. Always results in a
/// 400 Bad Request with the error message returned to the client.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must be at least {min} characters long, got {actual}")]
    TooShort {
        field: &'static str,
        min: usize,
        actual: usize,
    },

    #[error("{field} must be at most {max} characters long, got {actual}")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
}
