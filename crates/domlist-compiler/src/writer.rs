use std::fs;
use std::path::Path;

use domlist_core::types::RuleSetDocument;

use crate::error::ConvertError;

/// Render the document as JSON with 2-space indentation.
pub fn render_document(doc: &RuleSetDocument) -> Result<String, ConvertError> {
    Ok(serde_json::to_string_pretty(doc)?)
}

/// Render the document and write it to `path`, creating or truncating it.
///
/// Rendering happens before the file is opened, so a serialization failure
/// leaves an existing file untouched.
pub fn write_document(path: &Path, doc: &RuleSetDocument) -> Result<(), ConvertError> {
    let json = render_document(doc)?;
    fs::write(path, &json).map_err(|source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("wrote {} bytes to '{}'", json.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use domlist_core::types::{RuleRecord, RuleSetDocument};

    use super::*;

    const EXPECTED: &str = r#"{
  "version": 2,
  "rules": [
    {
      "domain": [
        "a.com",
        "c.net"
      ],
      "domain_suffix": [
        "b.com"
      ],
      "domain_keyword": [],
      "domain_regex": [],
      "source_ip_cidr": [],
      "ip_cidr": []
    }
  ]
}"#;

    fn sample() -> RuleSetDocument {
        RuleSetDocument::new(RuleRecord::new(
            vec!["a.com".into(), "c.net".into()],
            vec!["b.com".into()],
        ))
    }

    #[test]
    fn renders_two_space_indent() {
        assert_eq!(render_document(&sample()).unwrap(), EXPECTED);
    }

    #[test]
    fn rendering_is_deterministic() {
        let first = render_document(&sample()).unwrap();
        let second = render_document(&sample()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn keeps_non_ascii_as_utf8() {
        let doc = RuleSetDocument::new(RuleRecord::new(
            vec!["bücher.de".into()],
            vec!["例え.jp".into()],
        ));
        let json = render_document(&doc).unwrap();

        assert!(json.contains("\"bücher.de\""));
        assert!(json.contains("\"例え.jp\""));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn truncates_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        fs::write(&path, "x".repeat(4096)).unwrap();

        write_document(&path, &sample()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), EXPECTED);
    }

    #[test]
    fn missing_directory_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.json");

        let err = write_document(&path, &sample()).unwrap_err();
        assert!(matches!(err, ConvertError::Write { .. }));
        assert!(!path.exists());
    }
}
