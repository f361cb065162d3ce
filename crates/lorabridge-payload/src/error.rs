use thiserror::Error;

pub type Result<T> = std::result::Result<T, PayloadError>;

/// Errors that can occur during payload decoding
#[derive(Error, Debug)]
pub enum PayloadError {
    // Stored verbatim in failure records downstream, so the message text
    // must stay stable.
    #[error("payload too short")]
    FrameTooShort,

    #[error("insufficient data: need {expected} more bytes, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    #[error("unsupported sensor type: {0}")]
    UnsupportedType(u8),

    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
}
