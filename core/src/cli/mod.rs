pub mod report;

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for corpuscan
#[derive(Parser, Debug)]
#[command(name = "corpuscan")]
#[command(about = "De-identifying medical image analysis front end")]
#[command(version)]
pub struct Cli {
    /// Path to the image file (JPEG, PNG or DICOM)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Additional clinical context forwarded to the analyzer
    #[arg(short, long, default_value = "")]
    pub context: String,

    /// Model identifier, overriding the persisted configuration
    #[arg(short, long)]
    pub model: Option<String>,

    /// Path to the model configuration file
    #[arg(long, value_name = "PATH", default_value = "model_config.json")]
    pub config: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Send without the interactive confirmation
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Environment variable holding the provider API key
    #[arg(long, value_name = "VAR", default_value = "OPENAI_API_KEY")]
    pub api_key_env: String,

    /// Provider base URL override
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["corpuscan", "scan.dcm"]);
        assert_eq!(cli.file, PathBuf::from("scan.dcm"));
        assert_eq!(cli.context, "");
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.yes);
        assert_eq!(cli.api_key_env, "OPENAI_API_KEY");
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "corpuscan",
            "xray.png",
            "--context",
            "persistent cough",
            "--model",
            "gpt-5",
            "--format",
            "json",
            "--yes",
        ]);
        assert_eq!(cli.context, "persistent cough");
        assert_eq!(cli.model.as_deref(), Some("gpt-5"));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.yes);
    }
}
