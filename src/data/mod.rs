//! Data layer: puppy records, the compiled-in seed, and the catalog.
//!
//! Architecture:
//! ```text
//!  assets/puppies.json (compiled in)
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse seed → Vec<PuppyRecord>
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ catalog   │  validated, ordered, read-only; find_by_id
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  breed selection → visible indices
//!   └──────────┘
//! ```

pub mod catalog;
pub mod filter;
pub mod loader;
pub mod model;
