use crate::config::toml_config::{ChartConfig, ExportFormat};
use crate::domain::model::Shape;
use crate::utils::error::Result;

pub trait Storage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

/// Where the chart geometry and the optional outputs come from.
pub trait ConfigProvider {
    fn chart(&self) -> &ChartConfig;
    fn svg_path(&self) -> Option<&str>;
    fn export_path(&self) -> Option<&str>;
    fn export_format(&self) -> ExportFormat;
    fn terminal_chart(&self) -> bool;
}

/// A drawing surface for the histogram scene.
pub trait Canvas {
    fn size(&self) -> (u32, u32);
    fn draw(&mut self, shape: &Shape) -> Result<()>;
    /// Shows the finished drawing. Blocks until the user closes it, for
    /// surfaces that have a user.
    fn present(&mut self) -> Result<()>;
}
