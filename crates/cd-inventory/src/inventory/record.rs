use std::borrow::Cow;

use crate::storage::{DecodeError, Encode, StorageResult};

/// Number of comma-separated fields in an encoded record payload.
const RECORD_FIELDS: usize = 3;

/// A single CD entry in the inventory.
///
/// The identifier is integer-valued but carried as text, matching what the
/// backing store holds; it must be unique within a collection and never
/// blank. Uniqueness is the caller's responsibility, see
/// [`Inventory::next_id`](crate::inventory::Inventory::next_id).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CdRecord {
    pub id: String,
    pub title: String,
    pub artist: String,
}

impl CdRecord {
    /// Creates a new record from its three fields.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
        }
    }
}

impl Encode for CdRecord {
    fn encode(&'_ self) -> Cow<'_, [u8]> {
        Cow::Owned(format!("{},{},{}\n", self.id, self.title, self.artist).into_bytes())
    }

    fn decode(data: Cow<[u8]>) -> StorageResult<Self>
    where
        Self: Sized,
    {
        let text = String::from_utf8(data.into_owned())?;
        let fields: Vec<&str> = text.trim().split(',').collect();
        if fields.len() < RECORD_FIELDS {
            return Err(DecodeError::BadFieldCount {
                expected: RECORD_FIELDS,
                got: fields.len(),
            }
            .into());
        }
        // the payload has no escaping: a comma smuggled into a field shifts
        // the split, the first three fields win and the surplus is dropped
        Ok(Self::new(fields[0], fields[1], fields[2]))
    }
}
