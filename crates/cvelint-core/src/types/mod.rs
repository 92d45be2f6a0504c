//! Shared data types for cvelint.

pub mod collections;
pub mod identifiers;

pub use collections::{FxHashMap, FxHashSet};
pub use identifiers::{RecordId, RecordKey};
