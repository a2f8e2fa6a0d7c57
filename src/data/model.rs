use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PuppyId – primary key of a catalog entry
// ---------------------------------------------------------------------------

/// Identifier of a puppy. Unique within a [`Catalog`](super::catalog::Catalog).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PuppyId(pub u32);

impl fmt::Display for PuppyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PuppyId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(PuppyId)
    }
}

// ---------------------------------------------------------------------------
// PuppyRecord – one adoptable puppy
// ---------------------------------------------------------------------------

/// A single catalog entry. Built once from the seed and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuppyRecord {
    pub id: PuppyId,
    pub name: String,
    pub breed: String,
    /// Age in whole years.
    pub age: u32,
    /// Remote image location, resolved by the image loader.
    pub image_url: String,
    pub color: String,
    pub sex: String,
    /// Display weight, e.g. `"2KG"`.
    pub weight: String,
}

impl PuppyRecord {
    /// Badge text used on list cards.
    pub fn age_label(&self) -> String {
        format!("{} year", self.age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_puppy_id_parses_trimmed_integer() {
        assert_eq!("1001".parse::<PuppyId>(), Ok(PuppyId(1001)));
        assert_eq!(" 7 ".parse::<PuppyId>(), Ok(PuppyId(7)));
    }

    #[test]
    fn test_puppy_id_rejects_non_integer() {
        assert!("abc".parse::<PuppyId>().is_err());
        assert!("-3".parse::<PuppyId>().is_err());
        assert!("".parse::<PuppyId>().is_err());
    }

    #[test]
    fn test_age_label() {
        let record = PuppyRecord {
            id: PuppyId(1),
            name: "Max".into(),
            breed: "Golden".into(),
            age: 2,
            image_url: String::new(),
            color: "Black".into(),
            sex: "Male".into(),
            weight: "2KG".into(),
        };
        assert_eq!(record.age_label(), "2 year");
    }
}
