use std::fs;
use std::path::Path;

use domlist_core::types::ListEntry;

use crate::error::ConvertError;

/// Domain list split into its two entry kinds, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedList {
    pub domains: Vec<String>,
    pub domain_suffixes: Vec<String>,
    pub lines: usize,
    pub blank_lines: usize,
}

impl ParsedList {
    pub fn push(&mut self, entry: ListEntry) {
        match entry {
            ListEntry::Domain(domain) => self.domains.push(domain),
            ListEntry::DomainSuffix(suffix) => self.domain_suffixes.push(suffix),
        }
    }

    pub fn entry_count(&self) -> usize {
        self.domains.len() + self.domain_suffixes.len()
    }
}

pub fn parse_domain_list(text: &str) -> ParsedList {
    let mut list = ParsedList::default();

    for raw_line in split_lines(text) {
        list.lines += 1;

        let line = raw_line.trim();
        if line.is_empty() {
            list.blank_lines += 1;
            continue;
        }

        let entry = ListEntry::classify(line);
        log::trace!(
            "line {}: {} {:?}",
            list.lines,
            if entry.is_suffix() { "suffix" } else { "domain" },
            entry.value()
        );
        list.push(entry);
    }

    log::debug!(
        "parsed {} lines: {} domains, {} suffixes, {} blank",
        list.lines,
        list.domains.len(),
        list.domain_suffixes.len(),
        list.blank_lines
    );

    list
}

/// Split on `\r\n`, lone `\r` and `\n`; a trailing terminator does not
/// start an extra empty line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text
        .split("\r\n")
        .flat_map(|chunk| chunk.split(|c: char| c == '\r' || c == '\n'))
        .collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

pub fn read_domain_list(path: &Path) -> Result<ParsedList, ConvertError> {
    let content = fs::read_to_string(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_domain_list(&content))
}
