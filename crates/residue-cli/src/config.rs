//! Pipeline configuration: JSON file first, command line flags on top.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use residue_model::{ColumnSelector, OutputMode, PipelineConfig};

/// Flag values that replace what the config file says.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub mode: Option<OutputMode>,
    pub off_label_marker: Option<ColumnSelector>,
    pub banned_marker: Option<ColumnSelector>,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut PipelineConfig) {
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(selector) = &self.off_label_marker {
            config.off_label_marker = selector.clone();
        }
        if let Some(selector) = &self.banned_marker {
            config.banned_marker = selector.clone();
        }
    }
}

/// Picks the manual marker selection, if any. A position wins over a name.
pub fn marker_selector(name: Option<&str>, column: Option<usize>) -> Option<ColumnSelector> {
    match (column, name.map(str::trim).filter(|name| !name.is_empty())) {
        (Some(index), _) => Some(ColumnSelector::Index(index)),
        (None, Some(name)) => Some(ColumnSelector::name(name)),
        (None, None) => None,
    }
}

/// Loads the JSON config at `path`, or the defaults when no path is given.
///
/// Fields missing from the file keep their default values.
pub fn load_config(path: Option<&Path>) -> Result<PipelineConfig> {
    let Some(path) = path else {
        return Ok(PipelineConfig::default());
    };
    let text =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let config: PipelineConfig =
        serde_json::from_str(&text).with_context(|| format!("parse config {}", path.display()))?;
    debug!(path = %path.display(), groups = config.groups.len(), "loaded config");
    Ok(config)
}

/// [`load_config`] followed by [`ConfigOverrides::apply`] and validation.
pub fn resolve_config(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<PipelineConfig> {
    let mut config = load_config(path)?;
    overrides.apply(&mut config);
    config.validate().context("invalid pipeline configuration")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use residue_model::{DEFAULT_BANNED_MARKER, MarkerMatch};

    use super::*;

    #[test]
    fn flags_override_file_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"mode": "long", "marker_match": "case_insensitive",
                "off_label_marker": {{"name": "Off Label"}}}}"#
        )
        .unwrap();

        let overrides = ConfigOverrides {
            mode: Some(OutputMode::Wide),
            off_label_marker: marker_selector(None, Some(7)),
            banned_marker: None,
        };
        let config = resolve_config(Some(file.path()), &overrides).unwrap();
        assert_eq!(config.mode, OutputMode::Wide);
        assert_eq!(config.marker_match, MarkerMatch::CaseInsensitive);
        assert_eq!(config.off_label_marker, ColumnSelector::Index(7));
        assert_eq!(
            config.banned_marker,
            ColumnSelector::name(DEFAULT_BANNED_MARKER)
        );
    }

    #[test]
    fn missing_path_gives_defaults() {
        let config = resolve_config(None, &ConfigOverrides::default()).unwrap();
        assert_eq!(config, PipelineConfig::default());
    }

    #[test]
    fn unreadable_config_is_reported_with_path() {
        let error = load_config(Some(Path::new("/nonexistent/residue.json"))).unwrap_err();
        assert!(error.to_string().contains("/nonexistent/residue.json"));
    }

    #[test]
    fn empty_group_list_fails_validation() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"groups": []}}"#).unwrap();
        assert!(resolve_config(Some(file.path()), &ConfigOverrides::default()).is_err());
    }

    #[test]
    fn blank_marker_name_is_ignored() {
        assert_eq!(marker_selector(Some("  "), None), None);
        assert_eq!(
            marker_selector(Some("Banned Starts"), None),
            Some(ColumnSelector::name("Banned Starts"))
        );
    }
}
