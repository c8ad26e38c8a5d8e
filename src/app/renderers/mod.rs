pub mod svg_canvas;
pub mod terminal_canvas;

pub use svg_canvas::SvgCanvas;
pub use terminal_canvas::TerminalCanvas;
