//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::Parser;
use stockroom_inventory::DEFAULT_DATA_FILE;
use stockroom_observability::LogFormat;

/// Interactive inventory manager.
#[derive(Debug, Clone, Parser)]
#[command(name = "stockroom", version, about)]
pub struct CliArgs {
    /// File used by the save and load actions.
    #[arg(long, env = "STOCKROOM_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,

    /// Log line format on stderr (`text` or `json`). Verbosity follows RUST_LOG.
    #[arg(long, env = "STOCKROOM_LOG_FORMAT", default_value = "text")]
    pub log_format: LogFormat,

    /// Load the data file before showing the menu.
    #[arg(long)]
    pub load: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_arguments() {
        let args = CliArgs::try_parse_from(["stockroom"]).unwrap();
        assert_eq!(args.log_format, LogFormat::Text);
        assert!(!args.load);
    }

    #[test]
    fn flags_override_defaults() {
        let args = CliArgs::try_parse_from([
            "stockroom",
            "--data-file",
            "/tmp/shop.json",
            "--log-format",
            "json",
            "--load",
        ])
        .unwrap();
        assert_eq!(args.data_file, PathBuf::from("/tmp/shop.json"));
        assert_eq!(args.log_format, LogFormat::Json);
        assert!(args.load);
    }

    #[test]
    fn rejects_unknown_log_format() {
        assert!(CliArgs::try_parse_from(["stockroom", "--log-format", "xml"]).is_err());
    }
}
