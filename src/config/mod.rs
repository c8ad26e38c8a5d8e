pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use self::toml_config::{ExportFormat, TallyConfig};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "credit-tally")]
#[command(about = "Classify pass/defer/fail credits and chart the outcomes")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Also write the histogram as an SVG document
    #[arg(long)]
    pub svg: Option<String>,

    /// Write every recorded round to this file
    #[arg(long)]
    pub export: Option<String>,

    /// Format of the --export file
    #[arg(long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Skip the terminal histogram
    #[arg(long)]
    pub no_chart: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入配置檔 (若有) 並套用命令列覆蓋設定
    pub fn resolve(&self) -> Result<TallyConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path);
                TallyConfig::from_file(path)?
            }
            None => TallyConfig::default(),
        };

        if let Some(svg) = &self.svg {
            config.output.svg_path = Some(svg.clone());
        }
        if let Some(export) = &self.export {
            config.output.export_path = Some(export.clone());
        }
        if let Some(format) = self.format {
            config.output.export_format = format;
        }
        if self.no_chart {
            config.output.terminal_chart = false;
        }

        Ok(config)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::core::ConfigProvider;

    #[test]
    fn test_no_flags_is_plain_interactive_run() {
        let cli = CliConfig::parse_from(["credit-tally"]);
        let config = cli.resolve().unwrap();

        assert!(config.terminal_chart());
        assert!(config.svg_path().is_none());
        assert!(config.export_path().is_none());
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = CliConfig::parse_from([
            "credit-tally",
            "--svg",
            "out.svg",
            "--export",
            "rounds.json",
            "--format",
            "json",
            "--no-chart",
        ]);
        let config = cli.resolve().unwrap();

        assert!(!config.terminal_chart());
        assert_eq!(config.svg_path(), Some("out.svg"));
        assert_eq!(config.export_path(), Some("rounds.json"));
        assert_eq!(config.export_format(), ExportFormat::Json);
    }
}
