// Application layer: wires the interactive engine to the canvases and reports.

pub mod renderers;
pub mod report;

use crate::core::engine::TallyEngine;
use crate::core::histogram;
use crate::core::{ConfigProvider, Result, Session, Storage};
use renderers::{SvgCanvas, TerminalCanvas};
use std::io::{BufRead, Write};

pub struct TallyApp<C: ConfigProvider, S: Storage + Clone> {
    config: C,
    storage: S,
}

impl<C: ConfigProvider, S: Storage + Clone> TallyApp<C, S> {
    pub fn new(config: C, storage: S) -> Self {
        Self { config, storage }
    }

    /// 互動輸入 → 繪製直方圖 → 輸出摘要與匯出檔
    pub fn run<R: BufRead, W: Write>(&self, input: R, output: W) -> Result<Session> {
        let (session, prompter) = TallyEngine::new(input, output).run()?;
        let (input, mut output) = prompter.into_parts();
        let chart = self.config.chart();

        if let Some(path) = self.config.svg_path() {
            let mut canvas = SvgCanvas::new(self.storage.clone(), path, chart.width, chart.height);
            histogram::render(&mut canvas, &session, chart)?;
        }

        if self.config.terminal_chart() {
            let mut canvas = TerminalCanvas::new(input, &mut output, chart.width, chart.height);
            histogram::render(&mut canvas, &session, chart)?;
        }

        report::write_summary(&mut output, &session)?;

        if let Some(path) = self.config.export_path() {
            report::export(&self.storage, path, &session, self.config.export_format())?;
        }

        Ok(session)
    }
}
