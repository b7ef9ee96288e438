//! Terminal color depth and its detection from the environment.

use std::fmt;

/// Number of distinct colors a terminal cell can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorDepth {
    /// No color control; cells are plain spaces.
    #[default]
    Unknown,
    Indexed16,
    Indexed256,
    TrueColor,
}

/// `TERM` values known to support the 256-color palette.
const TERMS_256: &[&str] = &[
    "xterm-256color",
    "screen-256color",
    "tmux-256color",
    "rxvt-unicode-256color",
    "eterm-256color",
];

/// `TERM` fragments that indicate at least the basic 16 colors.
const TERMS_16: &[&str] = &["xterm", "screen", "vt100", "ansi", "linux"];

impl ColorDepth {
    /// Detect the depth of the controlling terminal from the process environment.
    pub fn detect() -> Self {
        if cfg!(windows) {
            // Windows Terminal and modern conhost both take 24-bit SGR codes.
            return ColorDepth::TrueColor;
        }
        Self::detect_from(|key| std::env::var(key).ok())
    }

    /// Detect the depth using `lookup` in place of environment variables.
    ///
    /// Checks, in order: explicit truecolor markers (`COLORTERM`, Konsole,
    /// iTerm), then known 256-color `TERM` names, then basic 16-color `TERM`
    /// names, and otherwise settles on 16 colors.
    pub fn detect_from<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(colorterm) = lookup("COLORTERM") {
            if colorterm.contains("truecolor") || colorterm.contains("24bit") {
                return ColorDepth::TrueColor;
            }
        }
        if lookup("KONSOLE_PROFILE_NAME").is_some() || lookup("KONSOLE_VERSION").is_some() {
            return ColorDepth::TrueColor;
        }
        if lookup("TERM_PROGRAM").is_some_and(|p| p.contains("iTerm")) {
            return ColorDepth::TrueColor;
        }

        if let Some(term) = lookup("TERM") {
            if TERMS_256.iter().any(|t| term.contains(t)) {
                return ColorDepth::Indexed256;
            }
            if TERMS_16.iter().any(|t| term.contains(t)) {
                return ColorDepth::Indexed16;
            }
        }

        ColorDepth::Indexed16
    }

    /// Longest byte sequence one encoded cell can take at this depth.
    pub fn max_cell_len(self) -> usize {
        match self {
            ColorDepth::TrueColor => 21,
            ColorDepth::Indexed256 => 13,
            ColorDepth::Indexed16 => 9,
            ColorDepth::Unknown => 2,
        }
    }
}

impl fmt::Display for ColorDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorDepth::TrueColor => "24-bit true color",
            ColorDepth::Indexed256 => "256 colors",
            ColorDepth::Indexed16 => "16 colors",
            ColorDepth::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn detect(vars: &[(&str, &str)]) -> ColorDepth {
        let env: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ColorDepth::detect_from(|key| env.get(key).cloned())
    }

    #[test]
    fn test_colorterm_truecolor() {
        assert_eq!(detect(&[("COLORTERM", "truecolor")]), ColorDepth::TrueColor);
        assert_eq!(detect(&[("COLORTERM", "24bit"), ("TERM", "xterm")]), ColorDepth::TrueColor);
    }

    #[test]
    fn test_konsole_and_iterm() {
        assert_eq!(detect(&[("KONSOLE_VERSION", "220401")]), ColorDepth::TrueColor);
        assert_eq!(detect(&[("TERM_PROGRAM", "iTerm.app")]), ColorDepth::TrueColor);
        assert_eq!(detect(&[("TERM_PROGRAM", "Apple_Terminal")]), ColorDepth::Indexed16);
    }

    #[test]
    fn test_term_256() {
        assert_eq!(detect(&[("TERM", "xterm-256color")]), ColorDepth::Indexed256);
        assert_eq!(detect(&[("TERM", "tmux-256color")]), ColorDepth::Indexed256);
    }

    #[test]
    fn test_term_16() {
        assert_eq!(detect(&[("TERM", "xterm")]), ColorDepth::Indexed16);
        assert_eq!(detect(&[("TERM", "linux")]), ColorDepth::Indexed16);
        assert_eq!(detect(&[("TERM", "vt100")]), ColorDepth::Indexed16);
    }

    #[test]
    fn test_fallback_is_16() {
        assert_eq!(detect(&[]), ColorDepth::Indexed16);
        assert_eq!(detect(&[("TERM", "dumb"), ("COLORTERM", "yes")]), ColorDepth::Indexed16);
    }

    #[test]
    fn test_max_cell_len_ordering() {
        assert!(ColorDepth::TrueColor.max_cell_len() > ColorDepth::Indexed256.max_cell_len());
        assert!(ColorDepth::Indexed256.max_cell_len() > ColorDepth::Indexed16.max_cell_len());
        assert!(ColorDepth::Indexed16.max_cell_len() > ColorDepth::Unknown.max_cell_len());
    }
}
