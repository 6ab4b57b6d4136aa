use std::borrow::Cow;
use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use crate::inventory::{CdRecord, Inventory};

use super::{Encode, Frame, StorageResult};

/// Handle on the backing store file for the inventory.
///
/// The handle holds only the path: the file itself is opened and closed
/// within the scope of a single [`Store::load`] or [`Store::save`] call and
/// released on every exit path. Exactly one process is assumed to access
/// the file at a time; no locking is performed.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Creates a store handle for the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates an empty backing file if none exists at the path.
    ///
    /// Idempotent: a no-op when the file is already present, regardless of
    /// its contents.
    pub fn ensure_exists(&self) -> StorageResult<()> {
        if !self.path.exists() {
            File::create(&self.path)?;
        }
        Ok(())
    }

    /// Loads the inventory from the backing file.
    ///
    /// Returns a freshly built collection which replaces whatever the caller
    /// held before. A missing file is a valid initial state: it is reported
    /// through the log and yields an empty inventory, not an error. Frames
    /// are decoded sequentially in file order; the first truncated or
    /// undecodable frame ends decoding and the records decoded up to that
    /// point are returned.
    pub fn load(&self) -> StorageResult<Inventory> {
        let mut file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::warn!("No inventory file found at {}", self.path.display());
                return Ok(Inventory::new());
            }
            Err(err) => return Err(err.into()),
        };
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;
        Ok(decode_records(&data))
    }

    /// Saves the inventory to the backing file, replacing any previous
    /// content entirely. No append, no merge.
    ///
    /// Records are written in collection order with the same frame encoding
    /// [`Store::load`] reads back, so a save immediately followed by a load
    /// reproduces the collection exactly. On failure, partial writes already
    /// flushed are not rolled back; the in-memory collection is unaffected.
    pub fn save(&self, inventory: &Inventory) -> StorageResult<()> {
        let mut file = File::create(&self.path)?;
        for record in inventory {
            let frame = Frame::new(record.clone())?;
            file.write_all(&frame.encode())?;
        }
        Ok(())
    }
}

/// Decodes as many whole frames as the buffer holds, in order.
fn decode_records(mut data: &[u8]) -> Inventory {
    let mut records = Vec::new();
    while !data.is_empty() {
        match Frame::<CdRecord>::decode(Cow::Borrowed(data)) {
            Ok(frame) => {
                let size = frame.size();
                records.push(frame.into_payload());
                data = &data[size..];
            }
            Err(err) => {
                // end-of-data detection: an unreadable frame ends the scan
                log::debug!("Stopped decoding at unreadable frame: {err}");
                break;
            }
        }
    }
    Inventory::from_records(records)
}
