use crate::core::{ConfigProvider, Storage};
use crate::utils::error::LoadError;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.base_dir().to_string())
    }

    fn full_path(&self, path: &str) -> std::path::PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(".".to_string())
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>, LoadError> {
        let full_path = self.full_path(path);
        tracing::debug!("Reading record source: {}", full_path.display());
        fs::read(&full_path).map_err(|e| LoadError::from_io(full_path.display().to_string(), e))
    }

    fn locate(&self, path: &str) -> String {
        self.full_path(path).display().to_string()
    }
}
