use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "small-utils")]
#[command(about = "A small utility for averaging numbers, greeting, and text file round-trips")]
pub struct CliConfig {
    #[arg(long, value_delimiter = ',', default_value = "10,20,30")]
    pub numbers: Vec<f64>,

    #[arg(long, default_value = "Alice")]
    pub name: String,

    #[arg(long, default_value = "output.txt")]
    pub output_path: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output_path", &self.output_path)?;
        Ok(())
    }
}
