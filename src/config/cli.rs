use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "stroke-gesture")]
#[command(about = "Recognize a recorded single-stroke gesture against a gesture set")]
pub struct CliConfig {
    #[arg(long, help = "Gesture set in TOML format")]
    pub config: PathBuf,

    #[arg(long, help = "Recorded stroke as CSV with an x,y header")]
    pub stroke: PathBuf,

    #[arg(long, help = "Reject matches farther than this distance")]
    pub threshold: Option<f64>,

    #[arg(long, help = "Print the result as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(threshold) = self.threshold {
            validation::validate_non_negative_float("threshold", threshold)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let config = CliConfig::parse_from([
            "stroke-gesture",
            "--config",
            "swipes.toml",
            "--stroke",
            "live.csv",
            "--threshold",
            "0.4",
            "--json",
        ]);
        assert_eq!(config.config, PathBuf::from("swipes.toml"));
        assert_eq!(config.stroke, PathBuf::from("live.csv"));
        assert_eq!(config.threshold, Some(0.4));
        assert!(config.json);
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let config = CliConfig::parse_from([
            "stroke-gesture",
            "--config",
            "a.toml",
            "--stroke",
            "b.csv",
            "--threshold=-1",
        ]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_required_flags() {
        assert!(CliConfig::try_parse_from(["stroke-gesture", "--config", "a.toml"]).is_err());
    }
}
