//! Storage layer: frame encoding and file persistence for the inventory.
//!
//! The backing store is a binary file holding zero or more frames, one per
//! record, each independently readable in sequence without a separate length
//! index (see [`Frame`]). [`Store`] owns the load/save round-trip.

mod encode;
mod error;
mod frame;
mod store;

pub use encode::Encode;
pub use error::{DecodeError, StorageError, StorageResult};
pub use frame::{FRAME_LEN_SIZE, Frame};
pub use store::Store;
