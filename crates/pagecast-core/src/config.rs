use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConvertError;
use crate::layout::LayoutOptions;
use crate::tabular::report::ReportOptions;

/// Settings for one conversion call. Every field has a default, so an empty
/// JSON object is a valid config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    pub layout: LayoutOptions,
    pub report: ReportOptions,
}

/// Load a config from a JSON file.
pub fn load_config(path: &Path) -> Result<ConvertConfig, ConvertError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConvertError::ConfigLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_config(&content, path)
}

/// Parse a config from a JSON string, naming `source` in errors.
pub fn parse_config(json: &str, source: &Path) -> Result<ConvertConfig, ConvertError> {
    let config: ConvertConfig =
        serde_json::from_str(json).map_err(|e| ConvertError::ConfigLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_config(&config)?;
    Ok(config)
}

/// Parse a config from a JSON string (no file path context).
pub fn parse_config_str(json: &str) -> Result<ConvertConfig, ConvertError> {
    let config: ConvertConfig = serde_json::from_str(json)?;
    validate_config(&config)?;
    Ok(config)
}

pub fn validate_config(config: &ConvertConfig) -> Result<(), ConvertError> {
    config.layout.validate()?;

    if config.report.generator.trim().is_empty() {
        return Err(ConvertError::ConfigInvalid(
            "report.generator must not be empty".into(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        let config = parse_config_str("{}").unwrap();
        assert_eq!(config, ConvertConfig::default());
    }

    #[test]
    fn test_partial_layout() {
        let config = parse_config_str(r#"{ "layout": { "tab_gap": 40 } }"#).unwrap();
        assert_eq!(config.layout.tab_gap, 40.0);
        assert_eq!(config.layout.line_tolerance, 5.0);
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        let json = r#"{ "layout": { "line_tolerance": -1 } }"#;
        assert!(matches!(
            parse_config_str(json),
            Err(ConvertError::ConfigInvalid(_))
        ));
    }

    #[test]
    fn test_blank_generator_rejected() {
        let json = r#"{ "report": { "generator": "  " } }"#;
        assert!(parse_config_str(json).is_err());
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let err = load_config(Path::new("/nonexistent/pagecast.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/pagecast.json"));
    }
}
