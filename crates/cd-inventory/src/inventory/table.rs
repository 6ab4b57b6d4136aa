use std::num::ParseIntError;

use thiserror::Error;

use super::CdRecord;

/// An enum representing possible table operation errors.
#[derive(Debug, Error)]
pub enum TableError {
    /// A stored identifier is not integer-parseable. This means the backing
    /// store was edited outside the program; the error is not recovered.
    #[error("Record identifier {id:?} is not an integer: {source}")]
    InvalidId { id: String, source: ParseIntError },
}

/// The ordered in-memory collection of CD records for the session.
///
/// Insertion order is preserved; nothing beyond identifier uniqueness is
/// enforced, and even that is the caller's job (see [`Inventory::next_id`]).
/// The collection is created empty, replaced wholesale on load, mutated in
/// place by [`Inventory::append`] and [`Inventory::delete`], and written
/// wholesale on save.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    records: Vec<CdRecord>,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an inventory from an already ordered list of records.
    pub fn from_records(records: Vec<CdRecord>) -> Self {
        Self { records }
    }

    /// Returns the records in insertion order.
    pub fn records(&self) -> &[CdRecord] {
        &self.records
    }

    /// Returns an iterator over the records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, CdRecord> {
        self.records.iter()
    }

    /// Number of records in the collection.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends a record at the end of the collection.
    ///
    /// No uniqueness check is performed here; the caller must supply a
    /// pre-validated unique identifier. Always succeeds.
    pub fn append(&mut self, record: CdRecord) {
        self.records.push(record);
    }

    /// Removes the first record whose identifier equals `id`, returning it.
    ///
    /// Identifiers are compared as text. If duplicate identifiers exist
    /// (possible only when the backing store was edited by hand), only the
    /// first match is removed. A miss leaves the collection unchanged and
    /// returns `None`; it is a silent no-op, not an error.
    pub fn delete(&mut self, id: &str) -> Option<CdRecord> {
        let index = self.records.iter().position(|record| record.id == id)?;
        Some(self.records.remove(index))
    }

    /// Returns the next free identifier.
    ///
    /// Yields 1 for an empty collection, otherwise one more than the maximum
    /// existing identifier. Under the invariant that existing identifiers
    /// are unique integers, the returned value collides with none of them.
    ///
    /// # Errors
    ///
    /// [`TableError::InvalidId`] when a stored identifier does not parse as
    /// an integer.
    pub fn next_id(&self) -> Result<i64, TableError> {
        let mut max_id: Option<i64> = None;
        for record in &self.records {
            let id: i64 = record
                .id
                .trim()
                .parse()
                .map_err(|source| TableError::InvalidId {
                    id: record.id.clone(),
                    source,
                })?;
            max_id = Some(max_id.map_or(id, |max| max.max(id)));
        }
        Ok(max_id.map_or(1, |max| max + 1))
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a CdRecord;
    type IntoIter = std::slice::Iter<'a, CdRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn sample_inventory() -> Inventory {
        Inventory::from_records(vec![
            CdRecord::new("1", "A", "X"),
            CdRecord::new("2", "B", "Y"),
        ])
    }

    #[test]
    fn test_should_append_records_in_order() {
        let mut inventory = Inventory::new();
        inventory.append(CdRecord::new("1", "Blue Train", "John Coltrane"));
        inventory.append(CdRecord::new("2", "Blackstar", "David Bowie"));
        let titles: Vec<&str> = inventory.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Blue Train", "Blackstar"]);
    }

    #[test]
    fn test_should_delete_first_matching_record() {
        let mut inventory = sample_inventory();
        let deleted = inventory.delete("2").unwrap();
        assert_eq!(deleted, CdRecord::new("2", "B", "Y"));
        assert_eq!(inventory.records(), &[CdRecord::new("1", "A", "X")]);
    }

    #[test]
    fn test_should_leave_collection_unchanged_on_delete_miss() {
        let mut inventory = sample_inventory();
        let before = inventory.clone();
        assert!(inventory.delete("99").is_none());
        assert_eq!(inventory, before);
    }

    #[test]
    fn test_should_delete_only_first_of_duplicate_ids() {
        let mut inventory = Inventory::from_records(vec![
            CdRecord::new("1", "A", "X"),
            CdRecord::new("1", "B", "Y"),
        ]);
        let deleted = inventory.delete("1").unwrap();
        assert_eq!(deleted.title, "A");
        assert_eq!(inventory.records(), &[CdRecord::new("1", "B", "Y")]);
    }

    #[test]
    fn test_should_generate_one_as_first_id() {
        assert_eq!(Inventory::new().next_id().unwrap(), 1);
    }

    #[test]
    fn test_should_generate_max_plus_one() {
        let inventory = Inventory::from_records(vec![
            CdRecord::new("3", "A", "X"),
            CdRecord::new("7", "B", "Y"),
            CdRecord::new("5", "C", "Z"),
        ]);
        assert_eq!(inventory.next_id().unwrap(), 8);
    }

    #[test]
    fn test_should_never_collide_with_existing_ids() {
        let inventory = Inventory::from_records(vec![
            CdRecord::new("10", "A", "X"),
            CdRecord::new("2", "B", "Y"),
        ]);
        let next = inventory.next_id().unwrap().to_string();
        assert!(inventory.iter().all(|record| record.id != next));
    }

    #[test]
    fn test_should_fail_next_id_on_non_integer_identifier() {
        let inventory = Inventory::from_records(vec![CdRecord::new("abc", "A", "X")]);
        let err = inventory.next_id().unwrap_err();
        assert!(matches!(err, TableError::InvalidId { ref id, .. } if id == "abc"));
    }
}
