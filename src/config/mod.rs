pub mod cli;
pub mod toml_config;

use crate::app::report::OutputFormat;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

pub const DEFAULT_DATA_PATH: &str = "data/brickset.json";

/// 合併 TOML 與命令列之後的最終設定
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub data_path: String,
    pub base_dir: String,
    pub format: OutputFormat,
    pub log_level: Option<String>,
    pub json_logs: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_path: DEFAULT_DATA_PATH.to_string(),
            base_dir: ".".to_string(),
            format: OutputFormat::Text,
            log_level: None,
            json_logs: false,
        }
    }
}

impl Settings {
    pub fn from_toml(config: &TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            data_path: config.data_path().to_string(),
            base_dir: config
                .base_dir()
                .map(str::to_string)
                .unwrap_or(defaults.base_dir),
            format: config.output_format().unwrap_or(defaults.format),
            log_level: config.log_level().map(str::to_string),
            json_logs: config.json_logs(),
        }
    }

    /// 命令列參數覆蓋設定檔
    pub fn with_overrides(
        mut self,
        data_path: Option<String>,
        base_dir: Option<String>,
        format: Option<OutputFormat>,
    ) -> Self {
        if let Some(data_path) = data_path {
            self.data_path = data_path;
        }
        if let Some(base_dir) = base_dir {
            self.base_dir = base_dir;
        }
        if let Some(format) = format {
            self.format = format;
        }
        self
    }
}

impl ConfigProvider for Settings {
    fn data_path(&self) -> &str {
        &self.data_path
    }

    fn base_dir(&self) -> &str {
        &self.base_dir
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_path("data_path", &self.data_path)?;
        validation::validate_file_extension("data_path", &self.data_path, &["json"])?;
        validation::validate_path("base_dir", &self.base_dir)?;
        if let Some(level) = &self.log_level {
            validation::validate_one_of("log_level", level, &toml_config::LOG_LEVELS)?;
        }
        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "brickset")]
#[command(about = "Answer questions about a Brickset Lego set catalogue")]
pub struct CliConfig {
    /// Path of the JSON data file (relative to the base directory)
    #[arg(long, global = true)]
    pub data: Option<String>,

    /// Directory the data path is resolved against
    #[arg(long, global = true)]
    pub base_dir: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Output format
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub query: Option<Query>,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Query {
    /// Count Lego sets carrying a tag (case-sensitive)
    CountTag { tag: String },
    /// List names of Lego sets with a packaging type, sorted
    Packaging {
        #[arg(default_value = "")]
        packaging_type: String,
    },
    /// List Lego sets released between two years (inclusive, any order)
    Years { year1: i32, year2: i32 },
    /// Count Lego sets with dimensions specified
    CountDimensions,
    /// List names of Lego sets not heavier than a weight
    MaxWeight { weight: f64 },
    /// Name of the Lego set with the most pieces
    MostPieces,
    /// Number of Lego sets per theme
    Themes,
    /// Total number of pieces in the catalogue
    TotalPieces,
    /// Run the demonstration sequence
    Demo,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入 (可選的) TOML 設定後套用命令列覆蓋
    pub fn settings(&self) -> Result<Settings> {
        let base = match &self.config {
            Some(path) => {
                let toml = TomlConfig::from_file(path)?;
                toml.validate()?;
                Settings::from_toml(&toml)
            }
            None => Settings::default(),
        };

        let settings = base.with_overrides(self.data.clone(), self.base_dir.clone(), self.format);
        settings.validate()?;
        Ok(settings)
    }

    pub fn query(&self) -> Query {
        self.query.clone().unwrap_or(Query::Demo)
    }
}
