pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Parser)]
#[command(name = "comp-dom")]
#[command(about = "Compare the domain set of a pattern group against the remaining identifiers")]
pub struct CliConfig {
    /// Space-separated `<id> <domain> <score>` records
    #[arg(value_name = "INPUT")]
    pub input_path: PathBuf,

    /// Identifier pattern; ids contained in its bytes literal form the pattern group
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &Path {
        &self.input_path
    }

    fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_path", &self.input_path)
    }
}
