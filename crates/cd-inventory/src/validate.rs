//! Input validators for record text fields.
//!
//! The frame payload is comma-joined text with no escaping, so reserved
//! characters must be kept out of title and artist before a record is ever
//! created. Enforcing this is the presentation layer's job; the validators
//! live here so every front-end applies the same rules.

use crate::{CdInventoryError, CdInventoryResult};

/// Characters that would corrupt the comma-joined frame payload.
pub const RESERVED_CHARS: [char; 2] = [',', '"'];

/// This trait defines the validation behaviour for a record text field.
pub trait Validate {
    /// Validates the provided value.
    fn validate(&self, value: &str) -> CdInventoryResult<()>;
}

/// A validator that rejects values containing a reserved character.
///
/// # Example
///
/// ```rust
/// use cd_inventory::prelude::{ReservedCharsValidator, Validate};
/// let validator = ReservedCharsValidator;
/// assert!(validator.validate("Abbey Road").is_ok());
/// assert!(validator.validate("Crosby, Stills & Nash").is_err());
/// ```
pub struct ReservedCharsValidator;

impl Validate for ReservedCharsValidator {
    fn validate(&self, value: &str) -> CdInventoryResult<()> {
        match value.chars().find(|c| RESERVED_CHARS.contains(c)) {
            Some(reserved) => Err(CdInventoryError::Validation(format!(
                "Character {reserved:?} is not allowed in record fields"
            ))),
            None => Ok(()),
        }
    }
}

/// A validator that checks if the length of a field does not exceed a
/// maximum length.
///
/// # Example
///
/// ```rust
/// use cd_inventory::prelude::{MaxStrlenValidator, Validate};
/// let validator = MaxStrlenValidator(10);
/// assert!(validator.validate("Hello").is_ok());
/// assert!(validator.validate("Hello, World!").is_err());
/// ```
pub struct MaxStrlenValidator(pub usize);

impl Validate for MaxStrlenValidator {
    fn validate(&self, value: &str) -> CdInventoryResult<()> {
        if value.len() <= self.0 {
            Ok(())
        } else {
            Err(CdInventoryError::Validation(format!(
                "Field length {} exceeds maximum allowed length of {}",
                value.len(),
                self.0
            )))
        }
    }
}
