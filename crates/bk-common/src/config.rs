//! Config file loading.
//!
//! Config files are plain serde documents. The parser is picked from the
//! file extension: `.toml` or `.json`.

use crate::{Error, Result};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Environment variable naming the default config file.
pub const BK_CONFIG_ENV: &str = "BK_CONFIG";

/// Supported config encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Detect the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(ConfigFormat::Toml),
            "json" => Some(ConfigFormat::Json),
            _ => None,
        }
    }
}

/// Parse a config document from a string.
pub fn parse_str<T: DeserializeOwned>(content: &str, format: ConfigFormat) -> Result<T> {
    let value = match format {
        ConfigFormat::Toml => toml::from_str(content)?,
        ConfigFormat::Json => serde_json::from_str(content)?,
    };
    Ok(value)
}

/// Load a config document from disk.
pub fn load_file<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)
        .ok_or_else(|| Error::UnsupportedFormat(path.to_path_buf()))?;
    let content = std::fs::read_to_string(path)?;
    let value = parse_str(&content, format)?;
    tracing::debug!(path = %path.display(), ?format, "loaded config file");
    Ok(value)
}

/// Config path from [`BK_CONFIG_ENV`], if set and non-empty.
pub fn config_path_from_env() -> Option<PathBuf> {
    std::env::var_os(BK_CONFIG_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::io::Write;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Demo {
        name: String,
        #[serde(default)]
        precision: usize,
    }

    #[test]
    fn detects_format_from_extension() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("a/b.toml")),
            Some(ConfigFormat::Toml)
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("b.JSON")),
            Some(ConfigFormat::Json)
        );
        assert_eq!(ConfigFormat::from_path(Path::new("b.yaml")), None);
        assert_eq!(ConfigFormat::from_path(Path::new("noext")), None);
    }

    #[test]
    fn parses_toml_and_json() {
        let t: Demo = parse_str("name = \"x\"\nprecision = 3\n", ConfigFormat::Toml).unwrap();
        assert_eq!(
            t,
            Demo {
                name: "x".to_string(),
                precision: 3
            }
        );
        let j: Demo = parse_str(r#"{"name": "y"}"#, ConfigFormat::Json).unwrap();
        assert_eq!(j.precision, 0);
    }

    #[test]
    fn load_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("demo.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "name = \"bench\"").unwrap();

        let demo: Demo = load_file(&path).unwrap();
        assert_eq!(demo.name, "bench");
    }

    #[test]
    fn load_file_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("demo.ini");
        std::fs::write(&path, "name = bench").unwrap();

        let err = load_file::<Demo, _>(&path).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }

    #[test]
    fn config_path_env() {
        std::env::set_var(BK_CONFIG_ENV, "/etc/benchkit/coercion.toml");
        assert_eq!(
            config_path_from_env(),
            Some(PathBuf::from("/etc/benchkit/coercion.toml"))
        );
        std::env::set_var(BK_CONFIG_ENV, "");
        assert_eq!(config_path_from_env(), None);
        std::env::remove_var(BK_CONFIG_ENV);
    }

    #[test]
    fn load_file_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("demo.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = load_file::<Demo, _>(&path).unwrap_err();
        assert_eq!(err.code(), "json");
    }
}
