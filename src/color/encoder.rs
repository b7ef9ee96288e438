//! Escape-sequence encoding of colored cells.
//!
//! Indexed depths have bounded cardinality, so their cells are formatted
//! once into [`EncoderCache`] tables and copied on every use. True color has
//! 16.7M possible cells and is formatted directly.

use std::sync::OnceLock;

use super::cell::CellColor;
use super::depth::ColorDepth;
use super::quantize::{rgb_to_16, rgb_to_256};

/// Reset all attributes; terminates every rendered row.
pub const RESET: &[u8] = b"\x1b[0m";

static GLOBAL: OnceLock<EncoderCache> = OnceLock::new();

/// Precomputed background-color cells for the 16- and 256-color palettes.
///
/// Each entry is the full cell: the SGR sequence followed by one space.
#[derive(Debug, Clone)]
pub struct EncoderCache {
    ansi16: Vec<Box<[u8]>>,
    ansi256: Vec<Box<[u8]>>,
}

impl Default for EncoderCache {
    fn default() -> Self {
        Self::new()
    }
}

impl EncoderCache {
    /// Build both palette tables.
    pub fn new() -> Self {
        let ansi16 = (0..16u8).map(|i| format_16(i).into_boxed_slice()).collect();
        let ansi256 = (0..=255u8)
            .map(|i| format_256(i).into_boxed_slice())
            .collect();
        Self { ansi16, ansi256 }
    }

    /// The process-wide tables, built on first use and never mutated.
    pub fn global() -> &'static EncoderCache {
        GLOBAL.get_or_init(|| {
            log::debug!("Building ANSI palette cache");
            EncoderCache::new()
        })
    }

    /// Append the cell for `color` at `depth` to `out`.
    ///
    /// [`ColorDepth::Unknown`] writes a bare space with no color control.
    #[inline]
    pub fn encode_into(&self, out: &mut Vec<u8>, color: CellColor, depth: ColorDepth) {
        match depth {
            ColorDepth::TrueColor => {
                out.extend_from_slice(b"\x1b[48;2;");
                push_decimal(out, color.r);
                out.push(b';');
                push_decimal(out, color.g);
                out.push(b';');
                push_decimal(out, color.b);
                out.extend_from_slice(b"m ");
            }
            ColorDepth::Indexed256 => {
                let idx = rgb_to_256(color.r, color.g, color.b);
                match self.ansi256.get(idx as usize) {
                    Some(cell) => out.extend_from_slice(cell),
                    None => out.extend_from_slice(&format_256(idx)),
                }
            }
            ColorDepth::Indexed16 => {
                let idx = rgb_to_16(color.r, color.g, color.b);
                match self.ansi16.get(idx as usize) {
                    Some(cell) => out.extend_from_slice(cell),
                    None => out.extend_from_slice(&format_16(idx)),
                }
            }
            ColorDepth::Unknown => out.push(b' '),
        }
    }

    /// Encode a single cell into a fresh buffer.
    pub fn encode(&self, color: CellColor, depth: ColorDepth) -> Vec<u8> {
        let mut out = Vec::with_capacity(depth.max_cell_len());
        self.encode_into(&mut out, color, depth);
        out
    }
}

/// `ESC[4Nm ` for normal colors, `ESC[10Nm ` for bright ones.
fn format_16(idx: u8) -> Vec<u8> {
    let code = if idx < 8 { 40 + idx as u16 } else { 100 + (idx as u16 - 8) };
    format!("\x1b[{}m ", code).into_bytes()
}

fn format_256(idx: u8) -> Vec<u8> {
    format!("\x1b[48;5;{}m ", idx).into_bytes()
}

#[inline]
fn push_decimal(out: &mut Vec<u8>, v: u8) {
    if v >= 100 {
        out.push(b'0' + v / 100);
    }
    if v >= 10 {
        out.push(b'0' + (v / 10) % 10);
    }
    out.push(b'0' + v % 10);
}
