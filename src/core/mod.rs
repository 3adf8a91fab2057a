pub mod lego_set_repository;
pub mod repository;

pub use crate::domain::model::{Dimensions, LegoSet, PackagingType};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
