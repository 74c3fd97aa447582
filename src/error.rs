use thiserror::Error;

/// Failure of the matrix encoder
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The UTF-8 payload does not fit the largest supported version
    #[error("payload too long: {len} bytes, capacity is {capacity}")]
    PayloadTooLarge {
        /// Payload length in bytes
        len: usize,
        /// Capacity of the version it was packed for
        capacity: usize,
    },
}

/// Failure of the contact share flow
#[derive(Debug, Error)]
pub enum ShareError {
    /// The contact has no usable phone number
    #[error("this contact has no phone number to share")]
    NoPhoneNumber,
    /// The payload could not be serialized
    #[error("could not build payload: {0}")]
    Payload(#[from] serde_json::Error),
    /// The payload was rejected by the encoder
    #[error(transparent)]
    Encode(#[from] EncodeError),
}
