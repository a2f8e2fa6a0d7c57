use std::collections::{BTreeSet, HashSet};

use thiserror::Error;

use super::loader::{parse_records, SEED_JSON};
use super::model::{PuppyId, PuppyRecord};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Lookup miss. Expected and recoverable: the detail screen renders an
    /// empty state for it.
    #[error("no puppy with id {0}")]
    NotFound(PuppyId),
    #[error("duplicate puppy id {0}")]
    DuplicateId(PuppyId),
    #[error("puppy ids must be positive, got {0}")]
    InvalidId(PuppyId),
}

// ---------------------------------------------------------------------------
// Catalog – the read-only puppy collection
// ---------------------------------------------------------------------------

/// Ordered, immutable collection of puppies. Insertion order is display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<PuppyRecord>,
}

impl Catalog {
    /// Build the catalog from the compiled-in seed list.
    ///
    /// Each call parses the same static data, so repeated calls produce equal
    /// catalogs and never duplicate entries.
    pub fn seed() -> anyhow::Result<Self> {
        let records = parse_records(SEED_JSON)?;
        let catalog = Self::from_records(records)?;
        log::debug!("Seeded catalog with {} puppies", catalog.len());
        Ok(catalog)
    }

    /// Validate and wrap a record list.
    pub fn from_records(records: Vec<PuppyRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if record.id.0 == 0 {
                return Err(CatalogError::InvalidId(record.id));
            }
            if !seen.insert(record.id) {
                return Err(CatalogError::DuplicateId(record.id));
            }
        }
        Ok(Catalog { records })
    }

    /// All puppies in display order.
    pub fn list(&self) -> &[PuppyRecord] {
        &self.records
    }

    pub fn find_by_id(&self, id: PuppyId) -> Result<&PuppyRecord, CatalogError> {
        self.records
            .iter()
            .find(|record| record.id == id)
            .ok_or(CatalogError::NotFound(id))
    }

    /// Sorted set of distinct breeds, used to assign chip colours.
    pub fn breeds(&self) -> BTreeSet<String> {
        self.records.iter().map(|r| r.breed.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn record(id: u32, name: &str, breed: &str) -> PuppyRecord {
        PuppyRecord {
            id: PuppyId(id),
            name: name.to_string(),
            breed: breed.to_string(),
            age: 1,
            image_url: format!("https://example.test/{id}.jpg"),
            color: "White".to_string(),
            sex: "Male".to_string(),
            weight: "2KG".to_string(),
        }
    }

    #[test]
    fn test_seed_contains_carmen() {
        let catalog = Catalog::seed().unwrap();
        let carmen = catalog.find_by_id(PuppyId(1001)).unwrap();
        assert_eq!(carmen.name, "Carmen");
        assert_eq!(carmen.breed, "Barbet");
        assert_eq!(carmen.age, 1);
        assert_eq!(carmen.color, "White");
        assert_eq!(carmen.sex, "Male");
        assert_eq!(carmen.weight, "2KG");
    }

    #[test]
    fn test_seed_is_idempotent() {
        let first = Catalog::seed().unwrap();
        let second = Catalog::seed().unwrap();
        assert_eq!(first, second);
        assert_eq!(second.len(), 10);
    }

    #[test]
    fn test_list_is_stable_across_calls() {
        let catalog = Catalog::seed().unwrap();
        let a: Vec<PuppyId> = catalog.list().iter().map(|r| r.id).collect();
        let b: Vec<PuppyId> = catalog.list().iter().map(|r| r.id).collect();
        assert_eq!(a, b);
        assert_eq!(a.first(), Some(&PuppyId(1001)));
        assert_eq!(a.last(), Some(&PuppyId(1010)));
    }

    #[test]
    fn test_absent_ids_are_not_found() {
        let catalog = Catalog::seed().unwrap();
        for id in [0, 1, 1000, 1011, 9999, u32::MAX] {
            assert_eq!(
                catalog.find_by_id(PuppyId(id)),
                Err(CatalogError::NotFound(PuppyId(id)))
            );
        }
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = Catalog::from_records(vec![record(1, "A", "Pug"), record(1, "B", "Pug")]);
        assert_eq!(err, Err(CatalogError::DuplicateId(PuppyId(1))));
    }

    #[test]
    fn test_rejects_zero_id() {
        let err = Catalog::from_records(vec![record(0, "A", "Pug")]);
        assert_eq!(err, Err(CatalogError::InvalidId(PuppyId(0))));
    }

    #[test]
    fn test_breeds_are_unique_and_sorted() {
        let catalog = Catalog::from_records(vec![
            record(1, "A", "Pug"),
            record(2, "B", "Boxer"),
            record(3, "C", "Pug"),
        ])
        .unwrap();
        let breeds: Vec<String> = catalog.breeds().into_iter().collect();
        assert_eq!(breeds, vec!["Boxer".to_string(), "Pug".to_string()]);
    }
}
