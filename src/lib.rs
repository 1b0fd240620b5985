pub mod config;
pub mod core;
pub mod utils;

pub use crate::core::{greeting, stats, textfile};
pub use config::CliConfig;
pub use utils::error::{Result, UtilError};
