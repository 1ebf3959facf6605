//! Data processing and serialization.

use anyhow::{Context, Result};
use serde::Serialize;

pub mod check;

pub use check::*;

/// Serializes data to pretty-printed JSON.
pub fn to_json<T: Serialize>(data: &T) -> Result<String> {
    serde_json::to_string_pretty(data).context("Failed to serialize to JSON")
}

/// Serializes data to YAML.
pub fn to_yaml<T: Serialize>(data: &T) -> Result<String> {
    serde_yaml::to_string(data).context("Failed to serialize to YAML")
}

/// Renders data in a machine-readable format, or `None` for text output.
pub fn render_structured<T: Serialize>(data: &T, format: OutputFormat) -> Result<Option<String>> {
    match format {
        OutputFormat::Text => Ok(None),
        OutputFormat::Json => to_json(data).map(Some),
        OutputFormat::Yaml => to_yaml(data).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaml_uses_wire_names() {
        let report = MessageReport::new("Feat: x");
        let yaml = to_yaml(&report).unwrap();
        assert!(yaml.contains("rule: type-case"));
        assert!(yaml.contains("level: error"));
        assert!(yaml.contains("type: Feat"));
    }

    #[test]
    fn text_has_no_structured_rendering() {
        let report = MessageReport::new("feat: add thing here");
        assert!(render_structured(&report, OutputFormat::Text)
            .unwrap()
            .is_none());
        let json = render_structured(&report, OutputFormat::Json)
            .unwrap()
            .unwrap();
        assert!(json.contains("\"is_valid\": true"));
    }
}
