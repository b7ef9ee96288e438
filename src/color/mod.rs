//! Color encoding for terminal cells.
//!
//! Converts a 24-bit RGB pixel into the escape sequence for one cell at the
//! terminal's color depth:
//!
//! - `TrueColor` - `ESC[48;2;R;G;Bm`, formatted per cell
//! - `Indexed256` - 6x6x6 cube plus gray ramp, served from a table
//! - `Indexed16` - 3-bit RGB plus a bright bit, served from a table
//! - `Unknown` - a plain space

mod cell;
mod depth;
mod encoder;
mod quantize;

pub use cell::CellColor;
pub use depth::ColorDepth;
pub use encoder::{EncoderCache, RESET};
pub use quantize::{rgb_to_16, rgb_to_256};
