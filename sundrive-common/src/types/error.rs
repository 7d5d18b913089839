use thiserror::Error;

pub type SystemResult<T> = core::result::Result<T, SystemError>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SystemError {
    #[error("storage error: {0:?}")]
    StorageError(StorageError),

    #[error("codec error: {0:?}")]
    CodecError(CodecError),

    #[error("transport error: {0:?}")]
    TransportError(TransportError),

    #[error("service error: {0:?}")]
    ServiceError(ServiceError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    NotFound,
    Corrupted,
    WriteFailed,
    ReadFailed,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CodecError {
    Encode,
    Decode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    NotConnected,
    Busy,
    Malformed,
    SendFailed,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ServiceError {
    NotInitialized,
    Unavailable,
    InvalidState,
    RenderFailed,
}
