//! domlist Core Library
//!
//! This crate defines the rule-set document model shared by the compiler and
//! the CLI.
//!
//! # Modules
//!
//! - `types`: List entries, rule records and the top-level document

pub mod types;

// Re-export commonly used types
pub use types::{ListEntry, RuleRecord, RuleSetDocument, RULE_SET_VERSION, SUFFIX_PREFIX};
