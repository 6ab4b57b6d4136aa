//! Prelude exposes all the public types of the `cd-inventory` crate.

pub use crate::error::{CdInventoryError, CdInventoryResult};
pub use crate::inventory::{CdRecord, Inventory, TableError};
pub use crate::storage::{
    DecodeError, Encode, FRAME_LEN_SIZE, Frame, StorageError, StorageResult, Store,
};
pub use crate::validate::{
    MaxStrlenValidator, RESERVED_CHARS, ReservedCharsValidator, Validate,
};
