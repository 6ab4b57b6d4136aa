use std::borrow::Cow;

use super::StorageResult;

/// This trait defines the encoding and decoding behaviour for data persisted
/// in the backing store.
pub trait Encode {
    /// Encodes the value into a vector of bytes.
    fn encode(&'_ self) -> Cow<'_, [u8]>;

    /// Decodes the value from a slice of bytes.
    fn decode(data: Cow<[u8]>) -> StorageResult<Self>
    where
        Self: Sized;
}
