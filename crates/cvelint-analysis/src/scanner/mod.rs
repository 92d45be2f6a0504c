//! Scanner: record file enumeration and the cached public corpus.

pub mod collect;
pub mod corpus;

pub use collect::{collect_files, collect_record_files};
pub use corpus::CorpusCache;
