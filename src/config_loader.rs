use crate::config::EdgeConfig;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::info;
use std::fs::File;
use std::path::Path;

/// Load and parse edge configuration from a YAML file
pub fn load_config(config_path: &Path) -> Result<EdgeConfig> {
    info!("Loading edge configuration from: {:?}", config_path);

    let file = File::open(config_path)
        .wrap_err_with(|| format!("Failed to open configuration '{}'", config_path.display()))?;

    let config: EdgeConfig = serde_yaml::from_reader(file)
        .wrap_err_with(|| format!("Failed to parse configuration '{}'", config_path.display()))?;

    config.validate()?;

    Ok(config)
}

/// Load the configuration at `config_path`, or the built-in defaults when no
/// path is given
pub fn load_or_default(config_path: Option<&Path>) -> Result<EdgeConfig> {
    match config_path {
        Some(path) => load_config(path),
        None => {
            info!("No edge configuration given, using defaults");
            Ok(EdgeConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config() {
        let yaml = r##"
edge:
  color: "#0000ff"
  width: 2.0
labels:
  font:
    family: "Helvetica"
    size: 10
throughput:
  threshold: 500.0
  color: "#ffa500"
  width: 6.0
"##;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", yaml).unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.edge.color, "#0000ff");
        assert_eq!(config.labels.font.family, "Helvetica");
        assert_eq!(config.labels.text_distance, 0.30);
        assert_eq!(config.throughput.threshold, 500.0);
        assert_eq!(config.wireless.color, "#009933");
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let yaml = r#"
scale: -1.0
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", yaml).unwrap();

        assert!(load_config(temp_file.path()).is_err());
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(load_config(Path::new("/nonexistent/topolink.yaml")).is_err());
    }

    #[test]
    fn test_default_without_path() {
        let config = load_or_default(None).unwrap();
        assert_eq!(config, EdgeConfig::default());
    }
}
