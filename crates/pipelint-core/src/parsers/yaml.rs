//! YAML document parser

use crate::diagnostics::{CoreResult, LintError};
use serde_yaml::Value;
use std::path::Path;

/// Read and parse a whole YAML file into an untyped document.
///
/// An empty file parses to `Value::Null`.
pub fn parse_yaml_file(path: &Path) -> CoreResult<Value> {
    let content = std::fs::read_to_string(path).map_err(|e| LintError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_yaml(&content).map_err(|source| LintError::YamlParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse YAML content, treating blank input as null
pub fn parse_yaml(content: &str) -> Result<Value, serde_yaml::Error> {
    if content.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_yaml::from_str(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_mapping() {
        let value = parse_yaml("export_plots: true\n").unwrap();
        assert_eq!(value["export_plots"], Value::Bool(true));
    }

    #[test]
    fn test_blank_is_null() {
        assert_eq!(parse_yaml("  \n").unwrap(), Value::Null);
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(parse_yaml("key: [unclosed").is_err());
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let temp = TempDir::new().unwrap();
        let err = parse_yaml_file(&temp.path().join("nope.yml")).unwrap_err();
        assert!(matches!(err, LintError::FileRead { .. }));
    }

    #[test]
    fn test_parse_error_keeps_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.yml");
        std::fs::write(&path, "a: b: c\n").unwrap();

        let err = parse_yaml_file(&path).unwrap_err();
        assert!(matches!(err, LintError::YamlParse { .. }));
        assert!(err.to_string().contains("broken.yml"));
    }
}
