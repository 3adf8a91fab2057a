use thiserror::Error;

/// 資料來源載入失敗的原因
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Record source not found: {path}")]
    NotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Record source '{path}' could not be read: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Record source '{path}' does not match the record schema: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// 依 IO 錯誤種類區分「不存在」與「無法讀取」
    pub fn from_io(path: impl Into<String>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            LoadError::NotFound { path, source }
        } else {
            LoadError::Unreadable { path, source }
        }
    }

    pub fn path(&self) -> &str {
        match self {
            LoadError::NotFound { path, .. }
            | LoadError::Unreadable { path, .. }
            | LoadError::Malformed { path, .. } => path,
        }
    }
}

#[derive(Error, Debug)]
pub enum BricksetError {
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Collection is empty, cannot compute {operation}")]
    EmptyCollection { operation: &'static str },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Load,
    Query,
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BricksetError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BricksetError::Load(_) => ErrorCategory::Load,
            BricksetError::EmptyCollection { .. } => ErrorCategory::Query,
            BricksetError::IoError(_) | BricksetError::SerializationError(_) => {
                ErrorCategory::Output
            }
            BricksetError::ConfigError { .. }
            | BricksetError::ConfigValidationError { .. }
            | BricksetError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            BricksetError::EmptyCollection { .. } => ErrorSeverity::Medium,
            BricksetError::IoError(_) | BricksetError::SerializationError(_) => {
                ErrorSeverity::High
            }
            BricksetError::ConfigError { .. }
            | BricksetError::ConfigValidationError { .. }
            | BricksetError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            // 沒有資料就無法查詢
            BricksetError::Load(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            BricksetError::Load(LoadError::NotFound { path, .. }) => {
                format!("Check that '{}' exists or pass --data <path>", path)
            }
            BricksetError::Load(LoadError::Unreadable { path, .. }) => {
                format!("Check the read permissions of '{}'", path)
            }
            BricksetError::Load(LoadError::Malformed { path, .. }) => format!(
                "Make sure '{}' is a JSON array of Lego set objects",
                path
            ),
            BricksetError::EmptyCollection { .. } => {
                "Load a data file containing at least one record".to_string()
            }
            BricksetError::IoError(_) => "Check that the output stream is writable".to_string(),
            BricksetError::SerializationError(_) => {
                "Try the plain text output format instead".to_string()
            }
            BricksetError::ConfigError { .. } | BricksetError::ConfigValidationError { .. } => {
                "Check the TOML configuration file syntax".to_string()
            }
            BricksetError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of '{}'", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BricksetError::Load(e) => format!("Could not load Lego sets from '{}'", e.path()),
            BricksetError::EmptyCollection { operation } => {
                format!("No Lego sets loaded, {} has no answer", operation)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BricksetError>;
