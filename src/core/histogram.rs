//! Histogram layout.
//!
//! Turns a finished [`Session`] into a list of [`Shape`]s on a fixed canvas.
//! Text positions are anchors: canvases center text on them.

use crate::config::toml_config::ChartConfig;
use crate::domain::model::{Category, Color, Session, Shape};
use crate::domain::ports::Canvas;
use crate::utils::error::Result;

const TITLE_ANCHOR: (f64, f64) = (150.0, 50.0);
const TITLE_SIZE: u32 = 18;
const SUBTITLE_X: f64 = 125.0;
const SUBTITLE_SIZE: u32 = 14;
const LABEL_SIZE: u32 = 12;
/// Gap between a bar's top edge and its count label.
const COUNT_OFFSET: f64 = 15.0;

#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    pub category: Category,
    pub count: usize,
    pub x0: f64,
    pub x1: f64,
    pub top: f64,
    pub bottom: f64,
}

impl BarLayout {
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn center_x(&self) -> f64 {
        (self.x0 + self.x1) / 2.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramLayout {
    pub chart: ChartConfig,
    pub total: usize,
    pub bars: Vec<BarLayout>,
}

impl HistogramLayout {
    /// 計算四根長條的位置：水平置中，高度依比例縮放到固定區間
    pub fn compute(session: &Session, chart: &ChartConfig) -> Self {
        let counts = session.counts();
        let total = session.len();

        let bar_width = f64::from(chart.bar_width);
        let bar_gap = f64::from(chart.bar_gap);
        let bar_count = Category::ALL.len() as f64;
        let group_width = bar_width * bar_count + bar_gap * (bar_count - 1.0);
        let side_padding = (f64::from(chart.width) - group_width) / 2.0;

        let band_height = chart.band_height();
        let bottom = f64::from(chart.band_bottom);
        let unit = if total == 0 {
            0.0
        } else {
            band_height / total as f64
        };

        let bars = Category::ALL
            .iter()
            .enumerate()
            .map(|(i, category)| {
                let count = counts[category.index()];
                let x0 = side_padding + (bar_width + bar_gap) * i as f64;
                let height = (unit * count as f64).clamp(0.0, band_height);
                BarLayout {
                    category: *category,
                    count,
                    x0,
                    x1: x0 + bar_width,
                    top: bottom - height,
                    bottom,
                }
            })
            .collect();

        Self {
            chart: chart.clone(),
            total,
            bars,
        }
    }

    pub fn shapes(&self) -> Vec<Shape> {
        let mut shapes = vec![
            Shape::Text {
                x: TITLE_ANCHOR.0,
                y: TITLE_ANCHOR.1,
                content: self.chart.title.clone(),
                color: Color::Black,
                size: TITLE_SIZE,
                bold: true,
            },
            Shape::Text {
                x: SUBTITLE_X,
                y: f64::from(self.chart.height) - 50.0,
                content: format!("{} outcomes in total", self.total),
                color: Color::Black,
                size: SUBTITLE_SIZE,
                bold: false,
            },
        ];

        for bar in &self.bars {
            shapes.push(Shape::Rect {
                x0: bar.x0,
                y0: bar.top,
                x1: bar.x1,
                y1: bar.bottom,
                fill: bar.category.color(),
            });
            shapes.push(Shape::Text {
                x: bar.center_x(),
                y: f64::from(self.chart.label_y),
                content: bar.category.label().to_string(),
                color: Color::Grey,
                size: LABEL_SIZE,
                bold: true,
            });
            shapes.push(Shape::Text {
                x: bar.center_x(),
                y: bar.top - COUNT_OFFSET,
                content: bar.count.to_string(),
                color: Color::Grey,
                size: LABEL_SIZE,
                bold: false,
            });
        }

        shapes
    }
}

/// Draws the histogram for `session` and hands it to the canvas.
pub fn render<C: Canvas>(canvas: &mut C, session: &Session, chart: &ChartConfig) -> Result<()> {
    let layout = HistogramLayout::compute(session, chart);
    let shapes = layout.shapes();
    tracing::debug!(
        "Drawing {} shapes for {} outcomes on a {:?} canvas",
        shapes.len(),
        layout.total,
        canvas.size()
    );

    for shape in &shapes {
        canvas.draw(shape)?;
    }
    canvas.present()
}
