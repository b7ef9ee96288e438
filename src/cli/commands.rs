//! Handler for `--show-terminal`.

use crate::color::ColorDepth;
use crate::terminal::{usable_rows, TerminalSize};

/// Print what tintview detected about the terminal to stdout.
pub fn show_terminal(size: TerminalSize, depth: ColorDepth, char_aspect: f32) {
    println!("Terminal:");
    println!("  Size: {}x{} ({} rows usable)", size.cols, size.rows, usable_rows(size.rows));
    println!("  Color depth: {}", depth);
    println!("  Character ratio (H/W): {:.2}", char_aspect);
    println!();
    println!("Use --char-ratio to correct squashed or stretched images.");
}
