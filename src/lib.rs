pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use crate::core::client::TacosClient;
pub use domain::model::{ResourceId, StoreRecord, StoreType};
pub use utils::error::{ClientError, Result};
