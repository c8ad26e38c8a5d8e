use crate::core::ConfigProvider;
use crate::utils::error::{Result, TallyError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TallyConfig {
    pub chart: ChartConfig,
    pub output: OutputConfig,
}

/// Histogram geometry, in canvas pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub bar_width: u32,
    pub bar_gap: u32,
    pub band_top: u32,
    pub band_bottom: u32,
    pub label_y: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Histogram Results".to_string(),
            width: 800,
            height: 600,
            bar_width: 100,
            bar_gap: 25,
            band_top: 100,
            band_bottom: 450,
            label_y: 475,
        }
    }
}

impl ChartConfig {
    pub fn band_height(&self) -> f64 {
        f64::from(self.band_bottom.saturating_sub(self.band_top))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub terminal_chart: bool,
    pub svg_path: Option<String>,
    pub export_path: Option<String>,
    pub export_format: ExportFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            terminal_chart: true,
            svg_path: None,
            export_path: None,
            export_format: ExportFormat::Csv,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl TallyConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            TallyError::ConfigValidationError {
                field: "config".to_string(),
                message: format!("Cannot read {}: {}", path.as_ref().display(), e),
            }
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TallyError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${REPORT_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TallyError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        let chart = &self.chart;

        validation::validate_non_empty_string("chart.title", &chart.title)?;
        validation::validate_positive_number("chart.width", chart.width, 1)?;
        validation::validate_positive_number("chart.height", chart.height, 1)?;
        validation::validate_positive_number("chart.bar_width", chart.bar_width, 1)?;
        validation::validate_ordered("chart.band_top", chart.band_top, chart.band_bottom)?;
        validation::validate_range("chart.band_bottom", chart.band_bottom, 0, chart.height)?;
        validation::validate_range("chart.label_y", chart.label_y, 0, chart.height)?;

        // 四根長條加上中間三個間距必須放得進畫布
        let group_width = 4 * u64::from(chart.bar_width) + 3 * u64::from(chart.bar_gap);
        if group_width > u64::from(chart.width) {
            return Err(TallyError::InvalidConfigValueError {
                field: "chart.width".to_string(),
                value: chart.width.to_string(),
                reason: format!("Bars need at least {} pixels", group_width),
            });
        }

        if let Some(path) = &self.output.svg_path {
            validation::validate_path("output.svg_path", path)?;
        }
        if let Some(path) = &self.output.export_path {
            validation::validate_path("output.export_path", path)?;
        }

        Ok(())
    }
}

impl ConfigProvider for TallyConfig {
    fn chart(&self) -> &ChartConfig {
        &self.chart
    }

    fn svg_path(&self) -> Option<&str> {
        self.output.svg_path.as_deref()
    }

    fn export_path(&self) -> Option<&str> {
        self.output.export_path.as_deref()
    }

    fn export_format(&self) -> ExportFormat {
        self.output.export_format
    }

    fn terminal_chart(&self) -> bool {
        self.output.terminal_chart
    }
}

impl Validate for TallyConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
