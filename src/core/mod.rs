pub mod greeting;
pub mod stats;
pub mod textfile;

pub use crate::utils::error::Result;
