//! Probe configuration loaded from YAML.
//!
//! ```yaml
//! schema: "l,p#,d*"
//! format: text
//! ```
//!
//! Values given on the command line take precedence over the file.

use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Output format for reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Text,
}

/// Settings shared by the `parse` and `check` commands.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Schema string, e.g. `"l,p#,d*"`.
    #[serde(default)]
    pub schema: Option<String>,
    /// Report format.
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

impl ProbeConfig {
    /// Loads configuration from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .map_err(|err| format!("Failed to read '{}': {err}", path.display()))?;
        serde_yaml::from_reader(BufReader::new(file))
            .map_err(|err| format!("Invalid config '{}': {err}", path.display()))
    }

    /// Overlays command-line values on top of this configuration.
    pub fn merge(self, schema: Option<String>, format: Option<OutputFormat>) -> Self {
        Self {
            schema: schema.or(self.schema),
            format: format.or(self.format),
        }
    }

    /// Returns the schema, failing if neither source provided one.
    pub fn require_schema(&self) -> Result<&str, String> {
        self.schema
            .as_deref()
            .ok_or_else(|| "no schema given; pass --schema or set `schema` in --config".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_complete() {
        let config: ProbeConfig = serde_yaml::from_str("schema: \"x,y*\"\nformat: yaml\n").unwrap();
        assert_eq!(config.schema.as_deref(), Some("x,y*"));
        assert_eq!(config.format, Some(OutputFormat::Yaml));
    }

    #[test]
    fn test_deserialize_empty_mapping() {
        let config: ProbeConfig = serde_yaml::from_str("{}").unwrap();
        assert!(config.schema.is_none());
        assert!(config.format.is_none());
        assert!(config.require_schema().is_err());
    }

    #[test]
    fn test_command_line_overrides_file() {
        let file = ProbeConfig {
            schema: Some("x".into()),
            format: Some(OutputFormat::Text),
        };
        let merged = file.clone().merge(Some("y#".into()), None);
        assert_eq!(merged.require_schema().unwrap(), "y#");
        assert_eq!(merged.format, Some(OutputFormat::Text));

        let kept = file.merge(None, Some(OutputFormat::Json));
        assert_eq!(kept.require_schema().unwrap(), "x");
        assert_eq!(kept.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("probe.yml");
        std::fs::write(&path, "schema: \"n#\"\n").unwrap();

        let config = ProbeConfig::load(&path).unwrap();
        assert_eq!(config.schema.as_deref(), Some("n#"));

        let missing = ProbeConfig::load(dir.path().join("absent.yml")).unwrap_err();
        assert!(missing.contains("Failed to read"));
    }
}
