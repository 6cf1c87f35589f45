use domlist_core::types::{RuleRecord, RuleSetDocument};

use crate::parser::ParsedList;

pub fn build_document(list: ParsedList) -> RuleSetDocument {
    RuleSetDocument::new(RuleRecord::new(list.domains, list.domain_suffixes))
}

#[cfg(test)]
mod tests {
    use domlist_core::types::RULE_SET_VERSION;

    use crate::parser::parse_domain_list;

    use super::build_document;

    #[test]
    fn wraps_sequences_in_single_rule() {
        let doc = build_document(parse_domain_list("a.com\n+.b.com\nc.net"));

        assert_eq!(doc.version, RULE_SET_VERSION);
        assert_eq!(doc.rules.len(), 1);

        let rule = &doc.rules[0];
        assert_eq!(rule.domain, vec!["a.com", "c.net"]);
        assert_eq!(rule.domain_suffix, vec!["b.com"]);
        assert!(rule.reserved_fields_empty());
    }

    #[test]
    fn empty_list_still_has_one_rule() {
        let doc = build_document(parse_domain_list(""));

        assert_eq!(doc.rules.len(), 1);
        assert_eq!(doc.rules[0].entry_count(), 0);
        assert!(doc.rules[0].reserved_fields_empty());
    }
}
