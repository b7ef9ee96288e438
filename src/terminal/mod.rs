//! Terminal side of the viewer - geometry probing, sizing, and output.

mod dimensions;
mod render;
mod size;

pub use dimensions::{
    solve, solve_with_overrides, usable_rows, DisplayTarget, DEFAULT_CHAR_ASPECT_RATIO,
    RESERVED_ROWS,
};
pub use render::{render, RenderError, RenderStyle};
pub use size::TerminalSize;
