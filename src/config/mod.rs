pub mod cli;

use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "image-cleanup")]
#[command(about = "Removes image fields from a restaurants JSON file, in place")]
pub struct CliConfig {
    /// Input JSON file, rewritten in place after cleaning
    #[arg(default_value = "restaurants.json")]
    pub input: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_file_extension("input", &self.input, &["json"])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_input_path() {
        let config = CliConfig::parse_from(["image-cleanup"]);
        assert_eq!(config.input, "restaurants.json");
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_json_input() {
        let config = CliConfig::parse_from(["image-cleanup", "restaurants.csv"]);
        assert!(config.validate().is_err());
    }
}
