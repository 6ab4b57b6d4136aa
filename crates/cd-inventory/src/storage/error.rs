use thiserror::Error;

/// An enum representing possible storage-related errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Error when failing to decode a frame.
    #[error("Failed to decode record frame: {0}")]
    Decode(#[from] DecodeError),
    /// Error when reading or writing the backing file.
    #[error("I/O error on backing store: {0}")]
    Io(#[from] std::io::Error),
    /// Error when an encoded record exceeds the frame length header capacity.
    #[error("Record too large for a frame (max: {max}, requested: {requested})")]
    RecordTooLarge { max: usize, requested: usize },
}

impl From<std::string::FromUtf8Error> for StorageError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        StorageError::Decode(DecodeError::from(err))
    }
}

/// An enum representing possible frame decoding errors.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Error when a payload holds fewer fields than a record requires.
    #[error("Expected {expected} comma-separated fields, got {got}")]
    BadFieldCount { expected: usize, got: usize },
    /// Error when the data is too short to decode.
    #[error("Data too short to decode")]
    TooShort,
    /// Error when failing to convert from UTF-8 string.
    #[error("Failed to convert from UTF-8 string: {0}")]
    Utf8(String),
}

impl From<std::string::FromUtf8Error> for DecodeError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        DecodeError::Utf8(err.to_string())
    }
}

/// Storage Result type
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_storage_error_display() {
        let error = StorageError::RecordTooLarge {
            max: 65535,
            requested: 70000,
        };
        assert_eq!(
            format!("{}", error),
            "Record too large for a frame (max: 65535, requested: 70000)"
        );
    }

    #[test]
    fn test_decode_error_display() {
        let error = DecodeError::TooShort;
        assert_eq!(format!("{}", error), "Data too short to decode");
    }
}
