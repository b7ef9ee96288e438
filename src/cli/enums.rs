//! CLI value enums and their conversions into library types.

use clap::ValueEnum;

use crate::color::ColorDepth;

/// Color depth selection on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Detect from the environment
    #[default]
    Auto,
    /// 24-bit RGB
    Truecolor,
    /// xterm 256-color palette
    #[value(name = "256")]
    Ansi256,
    /// Basic 16 colors
    #[value(name = "16")]
    Ansi16,
    /// Plain spaces, no color codes
    None,
}

impl ColorChoice {
    /// The forced depth, or `None` when the terminal should be asked.
    pub fn depth(self) -> Option<ColorDepth> {
        match self {
            ColorChoice::Auto => None,
            ColorChoice::Truecolor => Some(ColorDepth::TrueColor),
            ColorChoice::Ansi256 => Some(ColorDepth::Indexed256),
            ColorChoice::Ansi16 => Some(ColorDepth::Indexed16),
            ColorChoice::None => Some(ColorDepth::Unknown),
        }
    }
}
