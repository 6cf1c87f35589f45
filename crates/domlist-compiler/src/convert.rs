use std::path::Path;

use crate::builder::build_document;
use crate::error::ConvertError;
use crate::parser::read_domain_list;
use crate::writer::write_document;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertStats {
    pub lines: usize,
    pub blank_lines: usize,
    pub domains: usize,
    pub domain_suffixes: usize,
}

/// Convert the domain list at `input` into a rule-set document at `output`.
///
/// The input is read completely before the output is opened; a read failure
/// never creates or modifies `output`.
pub fn convert_file(input: &Path, output: &Path) -> Result<ConvertStats, ConvertError> {
    let list = read_domain_list(input)?;

    let stats = ConvertStats {
        lines: list.lines,
        blank_lines: list.blank_lines,
        domains: list.domains.len(),
        domain_suffixes: list.domain_suffixes.len(),
    };

    let doc = build_document(list);
    write_document(output, &doc)?;

    Ok(stats)
}
