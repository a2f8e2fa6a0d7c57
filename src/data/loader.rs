use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value as JsonValue;

use super::model::PuppyRecord;

// ---------------------------------------------------------------------------
// Compiled-in seed
// ---------------------------------------------------------------------------

/// The adoptable puppies shipped with the binary.
///
/// Expected JSON schema:
///
/// ```json
/// [
///   {
///     "id": 1001,
///     "name": "Carmen",
///     "breed": "Barbet",
///     "age": 1,
///     "image_url": "https://images.unsplash.com/...",
///     "color": "White",
///     "sex": "Male",
///     "weight": "2KG"
///   },
///   ...
/// ]
/// ```
pub const SEED_JSON: &str = include_str!("../../assets/puppies.json");

/// Parse the seed list. Errors name the offending row.
pub fn parse_records(text: &str) -> Result<Vec<PuppyRecord>> {
    let root: JsonValue = serde_json::from_str(text).context("parsing puppy seed JSON")?;

    let rows = root
        .as_array()
        .context("Expected top-level JSON array")?;

    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            PuppyRecord::deserialize(row).with_context(|| format!("Row {i} is not a valid puppy"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::PuppyId;

    #[test]
    fn test_seed_parses_all_rows() {
        let records = parse_records(SEED_JSON).unwrap();
        assert_eq!(records.len(), 10);
        assert_eq!(records[0].id, PuppyId(1001));
        assert_eq!(records[9].name, "Teddy");
    }

    #[test]
    fn test_rejects_non_array_root() {
        let err = parse_records(r#"{"id": 1}"#).unwrap_err();
        assert!(format!("{err:#}").contains("top-level JSON array"));
    }

    #[test]
    fn test_error_names_bad_row() {
        let text = r#"[
            {"id": 1, "name": "A", "breed": "B", "age": 1, "image_url": "", "color": "c", "sex": "s", "weight": "w"},
            {"id": "x"}
        ]"#;
        let err = parse_records(text).unwrap_err();
        assert!(format!("{err:#}").contains("Row 1"));
    }
}
