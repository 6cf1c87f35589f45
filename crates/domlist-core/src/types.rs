//! Core type definitions for domlist
//!
//! These types map directly to the JSON rule-set document consumed by the
//! routing tool. Field order is significant: serde serializes struct fields
//! in declaration order, which is the key order of the output.

use serde::{Deserialize, Serialize};

/// Rule-set format version written into every document.
pub const RULE_SET_VERSION: u8 = 2;

/// Line prefix marking a domain-suffix entry.
pub const SUFFIX_PREFIX: &str = "+.";

// =============================================================================
// List Entries (one per non-blank input line)
// =============================================================================

/// A single classified line of a domain list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ListEntry {
    /// Exact-match hostname
    Domain(String),
    /// Hostname plus all of its subdomains (`+.` lines)
    DomainSuffix(String),
}

impl ListEntry {
    /// Classify an already-trimmed, non-blank line.
    ///
    /// A line starting with `+.` becomes a suffix entry holding everything
    /// after the prefix, untouched. Anything else is taken verbatim as an
    /// exact domain. No syntax checks are performed, so `+.` alone yields
    /// an empty suffix.
    pub fn classify(line: &str) -> Self {
        match line.strip_prefix(SUFFIX_PREFIX) {
            Some(suffix) => Self::DomainSuffix(suffix.to_string()),
            None => Self::Domain(line.to_string()),
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Domain(value) | Self::DomainSuffix(value) => value,
        }
    }

    pub fn is_suffix(&self) -> bool {
        matches!(self, Self::DomainSuffix(_))
    }
}

// =============================================================================
// Rule Record
// =============================================================================

/// One headless rule of the rule set.
///
/// Only `domain` and `domain_suffix` are ever populated; the remaining match
/// types are emitted empty so the document stays schema-compatible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleRecord {
    pub domain: Vec<String>,
    pub domain_suffix: Vec<String>,
    pub domain_keyword: Vec<String>,
    pub domain_regex: Vec<String>,
    pub source_ip_cidr: Vec<String>,
    pub ip_cidr: Vec<String>,
}

impl RuleRecord {
    pub fn new(domain: Vec<String>, domain_suffix: Vec<String>) -> Self {
        Self {
            domain,
            domain_suffix,
            ..Self::default()
        }
    }

    /// Number of populated match entries.
    pub fn entry_count(&self) -> usize {
        self.domain.len() + self.domain_suffix.len()
    }

    /// True when every reserved match type is empty.
    pub fn reserved_fields_empty(&self) -> bool {
        self.domain_keyword.is_empty()
            && self.domain_regex.is_empty()
            && self.source_ip_cidr.is_empty()
            && self.ip_cidr.is_empty()
    }
}

// =============================================================================
// Rule-set Document
// =============================================================================

/// Top-level rule-set document: a version tag and exactly one rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSetDocument {
    pub version: u8,
    pub rules: Vec<RuleRecord>,
}

impl RuleSetDocument {
    pub fn new(rule: RuleRecord) -> Self {
        Self {
            version: RULE_SET_VERSION,
            rules: vec![rule],
        }
    }
}
