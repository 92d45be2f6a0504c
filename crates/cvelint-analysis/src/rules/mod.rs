//! Rules: catalogue, descriptors and the check operations behind them.

pub mod catalogue;
pub mod checks;
pub mod types;

pub use catalogue::RuleCatalogue;
pub use types::{CheckFn, RuleDescriptor, Violation};
