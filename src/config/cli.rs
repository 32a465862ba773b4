use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "hello")]
#[command(about = "Prints a quote and a couple of greetings")]
pub struct CliConfig {
    /// Name used for the plain greeting [default: Ashish]
    #[arg(long)]
    pub name: Option<String>,

    /// Name passed to the checked greeting; empty triggers the error path [default: ""]
    #[arg(long)]
    pub checked_name: Option<String>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Prefix for the fatal error line [default: "app: "]
    #[arg(long)]
    pub log_prefix: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
        }
        if let Some(prefix) = &self.log_prefix {
            validation::validate_no_control_chars("log_prefix", prefix)?;
        }
        Ok(())
    }
}
