pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Query};

pub use app::report::{OutputFormat, Reporter};
pub use config::{cli::LocalStorage, Settings};
pub use crate::core::{lego_set_repository::LegoSetRepository, repository::Repository};
pub use domain::model::{Dimensions, LegoSet, PackagingType};
pub use utils::error::{BricksetError, LoadError, Result};
