use crate::core::{Canvas, Result, Shape};
use crate::domain::model::Color;
use std::io::{BufRead, Write};

pub const CLOSE_PROMPT: &str = "Press Enter to close the histogram";

/// Canvas pixels per terminal cell.
const CELL_WIDTH: f64 = 10.0;
const CELL_HEIGHT: f64 = 20.0;

/// Character-cell canvas shown on the terminal. `present` waits for the user
/// to close it with Enter.
pub struct TerminalCanvas<R, W> {
    input: R,
    output: W,
    width: u32,
    height: u32,
    grid: Vec<Vec<char>>,
}

impl<R: BufRead, W: Write> TerminalCanvas<R, W> {
    pub fn new(input: R, output: W, width: u32, height: u32) -> Self {
        let cols = (f64::from(width) / CELL_WIDTH).ceil() as usize;
        let rows = (f64::from(height) / CELL_HEIGHT).ceil() as usize;
        Self {
            input,
            output,
            width,
            height,
            grid: vec![vec![' '; cols]; rows],
        }
    }

    fn fill_char(color: Color) -> char {
        match color {
            Color::Green => '#',
            Color::Yellow => '=',
            Color::Red => '%',
            Color::Black | Color::Grey => '.',
            Color::White => ' ',
        }
    }

    fn col(&self, x: f64) -> usize {
        let cols = self.grid.first().map_or(0, Vec::len);
        ((x / CELL_WIDTH).floor().max(0.0) as usize).min(cols)
    }

    fn row(&self, y: f64) -> usize {
        ((y / CELL_HEIGHT).floor().max(0.0) as usize).min(self.grid.len())
    }

    /// 以字元網格輸出目前畫面
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for row in &self.grid {
            let line: String = row.iter().collect();
            text.push_str(line.trim_end());
            text.push('\n');
        }
        text
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Canvas for TerminalCanvas<R, W> {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn draw(&mut self, shape: &Shape) -> Result<()> {
        match shape {
            Shape::Rect {
                x0,
                y0,
                x1,
                y1,
                fill,
            } => {
                let fill = Self::fill_char(*fill);
                let (c0, c1) = (self.col(*x0), self.col(*x1));
                let (r0, r1) = (self.row(*y0), self.row(*y1));
                if r0 >= r1 || c0 >= c1 {
                    return Ok(());
                }
                for row in &mut self.grid[r0..r1] {
                    for cell in &mut row[c0..c1] {
                        *cell = fill;
                    }
                }
            }
            Shape::Text { x, y, content, .. } => {
                let row = self.row(*y);
                if row >= self.grid.len() {
                    return Ok(());
                }
                let len = content.chars().count();
                let start = self.col(*x).saturating_sub(len / 2);
                let cells = &mut self.grid[row];
                for (cell, ch) in cells.iter_mut().skip(start).zip(content.chars()) {
                    *cell = ch;
                }
            }
        }
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        let text = self.to_text();
        write!(self.output, "{}", text)?;
        write!(self.output, "{}", CLOSE_PROMPT)?;
        self.output.flush()?;

        // Enter、任意位元組或輸入結束都代表關閉視窗
        let mut line = Vec::new();
        self.input.read_until(b'\n', &mut line)?;
        writeln!(self.output)?;
        tracing::debug!("Histogram closed");
        Ok(())
    }
}
