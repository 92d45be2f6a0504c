//! The rule catalogue: an immutable registry of rule descriptors keyed by code.

use std::collections::BTreeMap;

use cvelint_core::errors::SelectionError;
use tracing::debug;

use super::checks;
use super::types::RuleDescriptor;

/// Registry of available rules. Built once at startup and passed to the engine.
#[derive(Debug, Clone, Default)]
pub struct RuleCatalogue {
    rules: BTreeMap<&'static str, RuleDescriptor>,
}

impl RuleCatalogue {
    /// Build a catalogue from explicit descriptors. A later descriptor with
    /// the same code replaces an earlier one.
    pub fn new(rules: impl IntoIterator<Item = RuleDescriptor>) -> Self {
        Self {
            rules: rules.into_iter().map(|rule| (rule.code, rule)).collect(),
        }
    }

    /// The standard E001-E010 rule set.
    pub fn standard() -> Self {
        Self::new(standard_rules())
    }

    pub fn lookup(&self, code: &str) -> Option<&RuleDescriptor> {
        self.rules.get(code)
    }

    /// All codes, sorted.
    pub fn all_codes(&self) -> Vec<&'static str> {
        self.rules.keys().copied().collect()
    }

    /// All descriptors in code order.
    pub fn rules(&self) -> impl Iterator<Item = &RuleDescriptor> {
        self.rules.values()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Resolve the rule subset to run.
    ///
    /// An empty `select` means every rule. Blank entries are ignored and
    /// duplicates collapse. Ignoring an unknown code is a no-op; selecting
    /// one is an error. The result is in code order, which is the order
    /// rules are evaluated in.
    pub fn select(
        &self,
        select: &[String],
        ignore: &[String],
    ) -> Result<Vec<RuleDescriptor>, SelectionError> {
        let mut chosen: BTreeMap<&'static str, RuleDescriptor> = BTreeMap::new();
        let requested: Vec<&str> = select
            .iter()
            .map(|code| code.trim())
            .filter(|code| !code.is_empty())
            .collect();

        if requested.is_empty() {
            chosen = self.rules.clone();
        } else {
            for code in requested {
                let rule = self.lookup(code).ok_or_else(|| SelectionError::UnknownRule {
                    code: code.to_string(),
                })?;
                chosen.insert(rule.code, *rule);
            }
        }

        for code in ignore.iter().map(|code| code.trim()) {
            if chosen.remove(code).is_none() && !code.is_empty() {
                debug!(code, "ignored rule was not selected");
            }
        }

        Ok(chosen.into_values().collect())
    }
}

fn standard_rules() -> [RuleDescriptor; 10] {
    [
        RuleDescriptor {
            code: "E001",
            name: "check-reference-url-protocol",
            description: "Reference URLs use allowed protocols (ftp(s)/http(s))",
            check: checks::check_reference_url_protocol,
        },
        RuleDescriptor {
            code: "E002",
            name: "check-duplicate-reference-url",
            description: "CVE record does not contain duplicate reference URLs",
            check: checks::check_duplicate_reference_url,
        },
        RuleDescriptor {
            code: "E003",
            name: "check-description-length",
            description: "Descriptions are unique per language and at least 10 characters long",
            check: checks::check_description_length,
        },
        RuleDescriptor {
            code: "E004",
            name: "check-leading-trailing-space",
            description: "CNA container descriptions do not have leading or trailing whitespace",
            check: checks::check_leading_trailing_space,
        },
        RuleDescriptor {
            code: "E005",
            name: "check-cvss-base-severity",
            description: "CVSS base severity matches the base score",
            check: checks::check_cvss_base_severity,
        },
        RuleDescriptor {
            code: "E006",
            name: "check-affected-product-present",
            description: "One affected/unknown product is present in CNA container",
            check: checks::check_affected_product_present,
        },
        RuleDescriptor {
            code: "E007",
            name: "check-invalid-version-string",
            description: "Version field contains invalid characters",
            check: checks::check_invalid_version_string,
        },
        RuleDescriptor {
            code: "E008",
            name: "check-invalid-vendor-string",
            description: "Vendor field contains an invalid value",
            check: checks::check_invalid_vendor_string,
        },
        RuleDescriptor {
            code: "E009",
            name: "check-invalid-product-string",
            description: "Product field contains an invalid value",
            check: checks::check_invalid_product_string,
        },
        RuleDescriptor {
            code: "E010",
            name: "check-invalid-self-references",
            description: "References contain an invalid self-reference value",
            check: checks::check_invalid_self_references,
        },
    ]
}
