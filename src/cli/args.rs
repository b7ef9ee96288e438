//! CLI argument parsing with clap.

use clap::Parser;
use std::path::PathBuf;

use super::enums::ColorChoice;

/// Parse and validate the character aspect ratio (positive, finite)
fn parse_char_ratio(s: &str) -> Result<f32, String> {
    let ratio: f32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if !ratio.is_finite() || ratio <= 0.0 {
        return Err(format!(
            "Character ratio must be a positive number, got {}",
            ratio
        ));
    }
    Ok(ratio)
}

/// Show images in the terminal as colored character cells
#[derive(Parser, Debug)]
#[command(name = "tintview")]
#[command(version, about = "Show images in the terminal as colored cells", long_about = None)]
pub struct Args {
    /// Image file to show (extra files are ignored)
    #[arg(required_unless_present = "show_terminal")]
    pub files: Vec<PathBuf>,

    /// Output width in columns (0 = auto)
    #[arg(short, long, default_value = "0")]
    pub width: u32,

    /// Output height in rows (0 = auto)
    #[arg(short = 'H', long, default_value = "0")]
    pub height: u32,

    /// Zoom factor; 2.0 shows half of each axis
    #[arg(long, default_value = "1.0", allow_negative_numbers = true)]
    pub zoom: f32,

    /// Horizontal pan offset in pixels
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub offset_x: i64,

    /// Vertical pan offset in pixels
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub offset_y: i64,

    /// Mirror the image horizontally
    #[arg(long)]
    pub flip_h: bool,

    /// Mirror the image vertically
    #[arg(long)]
    pub flip_v: bool,

    /// Rotate clockwise by this many degrees (multiple of 90)
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub rotate: i32,

    /// Background for transparent pixels: black or white
    #[arg(long)]
    pub bg: Option<String>,

    /// Color depth (default: detect from the terminal)
    #[arg(long)]
    pub color: Option<ColorChoice>,

    /// Character cell height / width ratio (default: 1.5)
    #[arg(long, value_parser = parse_char_ratio)]
    pub char_ratio: Option<f32>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(long)]
    pub verbose: bool,

    /// Print the detected terminal size and color depth, then exit
    #[arg(long)]
    pub show_terminal: bool,
}

impl Args {
    /// Width override, `None` when left on auto.
    pub fn width_override(&self) -> Option<u32> {
        (self.width > 0).then_some(self.width)
    }

    /// Height override, `None` when left on auto.
    pub fn height_override(&self) -> Option<u32> {
        (self.height > 0).then_some(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Default Values Tests ====================

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["tintview", "cat.png"]);
        assert_eq!(args.files, vec![PathBuf::from("cat.png")]);
        assert_eq!(args.width, 0);
        assert_eq!(args.height, 0);
        assert_eq!(args.zoom, 1.0);
        assert_eq!(args.offset_x, 0);
        assert_eq!(args.offset_y, 0);
        assert!(!args.flip_h);
        assert!(!args.flip_v);
        assert_eq!(args.rotate, 0);
        assert!(args.bg.is_none());
        assert!(args.color.is_none());
        assert!(args.char_ratio.is_none());
        assert!(args.config.is_none());
        assert!(!args.verbose);
        assert!(!args.show_terminal);
        assert_eq!(args.width_override(), None);
        assert_eq!(args.height_override(), None);
    }

    #[test]
    fn test_args_requires_file() {
        assert!(Args::try_parse_from(["tintview"]).is_err());
    }

    #[test]
    fn test_args_show_terminal_without_file() {
        let args = Args::parse_from(["tintview", "--show-terminal"]);
        assert!(args.show_terminal);
        assert!(args.files.is_empty());
    }

    // ==================== Option Parsing Tests ====================

    #[test]
    fn test_args_dimensions() {
        let args = Args::parse_from(["tintview", "-w", "40", "-H", "12", "a.png"]);
        assert_eq!(args.width_override(), Some(40));
        assert_eq!(args.height_override(), Some(12));

        let args = Args::parse_from(["tintview", "--width", "0", "a.png"]);
        assert_eq!(args.width_override(), None);
    }

    #[test]
    fn test_args_negative_values() {
        let args = Args::parse_from([
            "tintview",
            "--rotate",
            "-90",
            "--offset-x",
            "-5",
            "--zoom",
            "-2",
            "a.png",
        ]);
        assert_eq!(args.rotate, -90);
        assert_eq!(args.offset_x, -5);
        assert_eq!(args.zoom, -2.0);
    }

    #[test]
    fn test_args_flags_and_multiple_files() {
        let args = Args::parse_from([
            "tintview", "--flip-h", "--flip-v", "--verbose", "a.png", "b.png",
        ]);
        assert!(args.flip_h && args.flip_v && args.verbose);
        assert_eq!(args.files.len(), 2);
    }

    #[test]
    fn test_args_color_values() {
        let args = Args::parse_from(["tintview", "--color", "256", "a.png"]);
        assert_eq!(args.color, Some(ColorChoice::Ansi256));

        let args = Args::parse_from(["tintview", "--color", "none", "a.png"]);
        assert_eq!(args.color, Some(ColorChoice::None));

        assert!(Args::try_parse_from(["tintview", "--color", "8", "a.png"]).is_err());
    }

    #[test]
    fn test_args_bg_is_free_text() {
        let args = Args::parse_from(["tintview", "--bg", "purple", "a.png"]);
        assert_eq!(args.bg.as_deref(), Some("purple"));
    }

    #[test]
    fn test_args_config_option() {
        let args = Args::parse_from(["tintview", "-c", "/tmp/test.toml", "a.png"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/test.toml")));
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_parse_char_ratio() {
        assert_eq!(parse_char_ratio("2.0"), Ok(2.0));
        assert!(parse_char_ratio("0").is_err());
        assert!(parse_char_ratio("-1.5").is_err());
        assert!(parse_char_ratio("tall").is_err());
    }
}
