//! INI file configuration adapter.
//!
//! Backs both the portfolio run config and the per-instrument snapshot files.

use crate::ports::config_port::ConfigPort;
use configparser::ini::Ini;
use std::path::Path;

#[derive(Debug)]
pub struct FileConfigAdapter {
    config: Ini,
}

impl FileConfigAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let mut config = Ini::new();
        config.load(path).map_err(std::io::Error::other)?;
        Ok(Self { config })
    }

    pub fn from_string(content: &str) -> Result<Self, String> {
        let mut config = Ini::new();
        config.read(content.to_string())?;
        Ok(Self { config })
    }

    fn parse_bool(value: &str) -> Option<bool> {
        match value.trim().to_lowercase().as_str() {
            "true" | "yes" | "1" => Some(true),
            "false" | "no" | "0" => Some(false),
            _ => None,
        }
    }
}

impl ConfigPort for FileConfigAdapter {
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.config.get(section, key)
    }

    fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        self.config
            .get(section, key)
            .as_ref()
            .and_then(|v| Self::parse_bool(v))
            .unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn from_string_parses_snapshot_sections() {
        let content = r#"
[snapshot]
symbol = NVDA
current_price = 120.5

[macd]
macd = 1.25
signal = 0.75
"#;
        let adapter = FileConfigAdapter::from_string(content).unwrap();
        assert_eq!(
            adapter.get_string("snapshot", "symbol"),
            Some("NVDA".to_string())
        );
        assert_eq!(
            adapter.get_string("macd", "signal"),
            Some("0.75".to_string())
        );
    }

    #[test]
    fn section_and_key_lookup_is_case_insensitive() {
        let adapter =
            FileConfigAdapter::from_string("[Bollinger]\nUpper = 110\n").unwrap();
        assert_eq!(
            adapter.get_string("bollinger", "upper"),
            Some("110".to_string())
        );
    }

    #[test]
    fn get_string_returns_none_for_missing_key() {
        let adapter = FileConfigAdapter::from_string("[rsi]\nvalue = 55\n").unwrap();
        assert_eq!(adapter.get_string("rsi", "period"), None);
        assert_eq!(adapter.get_string("macd", "macd"), None);
    }

    #[test]
    fn get_bool_returns_true_values() {
        let adapter =
            FileConfigAdapter::from_string("[report]\na = true\nb = yes\nc = 1\n").unwrap();
        assert!(adapter.get_bool("report", "a", false));
        assert!(adapter.get_bool("report", "b", false));
        assert!(adapter.get_bool("report", "c", false));
    }

    #[test]
    fn get_bool_returns_false_values() {
        let adapter =
            FileConfigAdapter::from_string("[report]\na = false\nb = no\nc = 0\n").unwrap();
        assert!(!adapter.get_bool("report", "a", true));
        assert!(!adapter.get_bool("report", "b", true));
        assert!(!adapter.get_bool("report", "c", true));
    }

    #[test]
    fn get_bool_returns_default_for_missing_or_garbage() {
        let adapter = FileConfigAdapter::from_string("[report]\nshow_detail = maybe\n").unwrap();
        assert!(adapter.get_bool("report", "missing", true));
        assert!(!adapter.get_bool("report", "missing", false));
        assert!(adapter.get_bool("report", "show_detail", true));
    }

    #[test]
    fn from_file_reads_config() {
        let file = create_temp_config("[portfolio]\nholdings = holdings.csv\n");
        let adapter = FileConfigAdapter::from_file(file.path()).unwrap();
        assert_eq!(
            adapter.get_string("portfolio", "holdings"),
            Some("holdings.csv".to_string())
        );
    }

    #[test]
    fn adapter_is_debug_printable() {
        let adapter = FileConfigAdapter::from_string("[rsi]\nvalue = 55\n").unwrap();
        assert!(format!("{:?}", adapter).starts_with("FileConfigAdapter"));
    }

    #[test]
    fn from_file_returns_error_for_missing_file() {
        let result = FileConfigAdapter::from_file("/nonexistent/path/snapshot.ini");
        assert!(result.is_err());
    }
}
