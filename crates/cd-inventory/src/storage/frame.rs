use std::borrow::Cow;

use super::{DecodeError, Encode, StorageError, StorageResult};

/// Size in bytes of the length header preceding each frame payload.
pub const FRAME_LEN_SIZE: usize = 2;

/// One framed record in the backing store: a little-endian `u16` payload
/// length followed by the payload bytes.
///
/// The length header makes every frame a discrete unit, so a reader can
/// consume the store frame by frame without a separate length index.
pub struct Frame<E>
where
    E: Encode,
{
    length: u16,
    payload: E,
}

impl<E> Frame<E>
where
    E: Encode,
{
    /// Wraps a payload into a frame.
    ///
    /// # Errors
    ///
    /// [`StorageError::RecordTooLarge`] when the encoded payload does not
    /// fit the `u16` length header.
    pub fn new(payload: E) -> StorageResult<Self> {
        let encoded_len = payload.encode().len();
        let length =
            u16::try_from(encoded_len).map_err(|_| StorageError::RecordTooLarge {
                max: u16::MAX as usize,
                requested: encoded_len,
            })?;
        Ok(Self { length, payload })
    }

    /// Size in bytes of the whole encoded frame, header included.
    pub fn size(&self) -> usize {
        FRAME_LEN_SIZE + self.length as usize
    }

    /// Consumes the frame and returns its payload.
    pub fn into_payload(self) -> E {
        self.payload
    }
}

impl<E> Encode for Frame<E>
where
    E: Encode,
{
    fn encode(&'_ self) -> Cow<'_, [u8]> {
        let payload = self.payload.encode();
        let mut encoded = Vec::with_capacity(FRAME_LEN_SIZE + payload.len());
        encoded.extend_from_slice(&self.length.to_le_bytes());
        encoded.extend_from_slice(&payload);
        Cow::Owned(encoded)
    }

    fn decode(data: Cow<[u8]>) -> StorageResult<Self>
    where
        Self: Sized,
    {
        if data.len() < FRAME_LEN_SIZE {
            return Err(DecodeError::TooShort.into());
        }
        let length = u16::from_le_bytes([data[0], data[1]]);
        if data.len() < FRAME_LEN_SIZE + length as usize {
            return Err(DecodeError::TooShort.into());
        }
        let payload_slice = &data[FRAME_LEN_SIZE..FRAME_LEN_SIZE + length as usize];
        let payload = E::decode(Cow::Borrowed(payload_slice))?;
        Ok(Self { length, payload })
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::inventory::CdRecord;

    #[test]
    fn test_should_encode_and_decode_frame() {
        let record = CdRecord::new("1", "Harvest", "Neil Young");
        let frame = Frame::new(record.clone()).unwrap();
        let encoded = frame.encode();
        let decoded = Frame::<CdRecord>::decode(encoded).unwrap();
        assert_eq!(decoded.into_payload(), record);
    }

    #[test]
    fn test_should_prefix_payload_with_le_length() {
        let record = CdRecord::new("1", "A", "X");
        let frame = Frame::new(record.clone()).unwrap();
        let encoded = frame.encode();
        let payload = record.encode();
        assert_eq!(&encoded[..FRAME_LEN_SIZE], (payload.len() as u16).to_le_bytes());
        assert_eq!(&encoded[FRAME_LEN_SIZE..], payload.as_ref());
        assert_eq!(frame.size(), encoded.len());
    }

    #[test]
    fn test_should_fail_decoding_buffer_shorter_than_header() {
        let result = Frame::<CdRecord>::decode(Cow::Borrowed(&[0x05]));
        assert!(matches!(
            result,
            Err(StorageError::Decode(DecodeError::TooShort))
        ));
    }

    #[test]
    fn test_should_fail_decoding_truncated_payload() {
        let record = CdRecord::new("1", "A", "X");
        let frame = Frame::new(record).unwrap();
        let encoded = frame.encode();
        let truncated = &encoded[..encoded.len() - 1];
        let result = Frame::<CdRecord>::decode(Cow::Borrowed(truncated));
        assert!(matches!(
            result,
            Err(StorageError::Decode(DecodeError::TooShort))
        ));
    }

    #[test]
    fn test_should_fail_wrapping_oversized_payload() {
        let record = CdRecord::new("1", "x".repeat(u16::MAX as usize), "X");
        assert!(matches!(
            Frame::new(record),
            Err(StorageError::RecordTooLarge { .. })
        ));
    }
}
