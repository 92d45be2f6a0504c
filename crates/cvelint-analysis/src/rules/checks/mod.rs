//! Check operations, one per catalogue rule.
//!
//! Every check is a pure function over a parsed record. Unexpected shapes
//! (missing fields, wrong JSON types) produce no violation.

pub mod affected;
pub mod cvss;
pub mod descriptions;
pub mod references;

pub use affected::{
    check_affected_product_present, check_invalid_product_string, check_invalid_vendor_string,
    check_invalid_version_string,
};
pub use cvss::{check_cvss_base_severity, severity_for_score};
pub use descriptions::{check_description_length, check_leading_trailing_space};
pub use references::{
    check_duplicate_reference_url, check_invalid_self_references, check_reference_url_protocol,
};
