use crate::app::report::OutputFormat;
use crate::utils::error::{BricksetError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub output: Option<OutputConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub path: String,
    pub base_dir: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| BricksetError::ConfigError {
            message: format!(
                "Cannot read config file '{}': {}",
                path.as_ref().display(),
                e
            ),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BricksetError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BRICKSET_DATA})；找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BricksetError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn data_path(&self) -> &str {
        &self.source.path
    }

    pub fn base_dir(&self) -> Option<&str> {
        self.source.base_dir.as_deref()
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.format)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("source.path", &self.source.path)?;
        validation::validate_file_extension("source.path", &self.source.path, &["json"])?;

        if let Some(base_dir) = self.base_dir() {
            validation::validate_path("source.base_dir", base_dir)?;
        }

        if let Some(level) = self.log_level() {
            validation::validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[source]
path = "data/brickset.json"
base_dir = "/srv/brickset"

[output]
format = "json"

[logging]
level = "debug"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.data_path(), "data/brickset.json");
        assert_eq!(config.base_dir(), Some("/srv/brickset"));
        assert_eq!(config.output_format(), Some(OutputFormat::Json));
        assert_eq!(config.log_level(), Some("debug"));
        assert!(!config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_optional_sections_may_be_omitted() {
        let config = TomlConfig::from_toml_str("[source]\npath = \"sets.json\"\n").unwrap();
        assert_eq!(config.output_format(), None);
        assert_eq!(config.log_level(), None);
        assert_eq!(config.base_dir(), None);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("BRICKSET_TEST_DATA_PATH", "fixtures/sets.json");

        let toml_content = r#"
[source]
path = "${BRICKSET_TEST_DATA_PATH}"
base_dir = "${BRICKSET_TEST_UNSET_VARIABLE}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.data_path(), "fixtures/sets.json");
        assert_eq!(config.base_dir(), Some("${BRICKSET_TEST_UNSET_VARIABLE}"));

        std::env::remove_var("BRICKSET_TEST_DATA_PATH");
    }

    #[test]
    fn test_config_validation() {
        let wrong_extension = TomlConfig::from_toml_str("[source]\npath = \"sets.csv\"\n").unwrap();
        assert!(wrong_extension.validate().is_err());

        let bad_level = TomlConfig::from_toml_str(
            "[source]\npath = \"sets.json\"\n[logging]\nlevel = \"loud\"\n",
        )
        .unwrap();
        assert!(bad_level.validate().is_err());
    }

    #[test]
    fn test_unknown_output_format_fails_to_parse() {
        let result = TomlConfig::from_toml_str(
            "[source]\npath = \"sets.json\"\n[output]\nformat = \"xml\"\n",
        );
        assert!(matches!(
            result,
            Err(BricksetError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[source]\npath = \"file-test.json\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.data_path(), "file-test.json");
    }

    #[test]
    fn test_missing_config_file_is_config_error() {
        let result = TomlConfig::from_file("/definitely/not/here/brickset.toml");
        assert!(matches!(result, Err(BricksetError::ConfigError { .. })));
    }
}
