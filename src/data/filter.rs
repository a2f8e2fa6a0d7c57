use super::catalog::Catalog;

// ---------------------------------------------------------------------------
// Breed filter: which catalog rows the vertical list shows
// ---------------------------------------------------------------------------

/// Return indices of puppies that pass the breed filter, in catalog order.
///
/// * `None` → no filter, every puppy is visible
/// * `Some(breed)` → only puppies of exactly that breed
pub fn visible_indices(catalog: &Catalog, breed: Option<&str>) -> Vec<usize> {
    catalog
        .list()
        .iter()
        .enumerate()
        .filter(|(_, record)| breed.map_or(true, |b| record.breed == b))
        .map(|(i, _)| i)
        .collect()
}
