use thiserror::Error;

/// Top-level error type for the `bitly-api` crate.
///
/// This layer performs no I/O, so there is no transient/permanent
/// distinction here. Errors are returned to the immediate caller;
/// retry and recovery policy belong to the transport layer above.
#[derive(Debug, Error)]
pub enum Error {
    /// The in-memory record cannot be converted to the wire format.
    #[error("Encoding error: {message}")]
    Encoding { message: String },

    /// The received bytes cannot be parsed into the target shape,
    /// with the raw body for debugging.
    #[error("Decoding error: {message}")]
    Decoding { message: String, body: String },
}

impl Error {
    /// Returns `true` if this error came from decoding a response body.
    pub fn is_decoding(&self) -> bool {
        matches!(self, Self::Decoding { .. })
    }

    /// The raw wire body that failed to decode, if available.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Decoding { body, .. } => Some(body),
            Self::Encoding { .. } => None,
        }
    }
}
