//! Terminal geometry probing.

use std::process::{Command, Stdio};
use std::sync::OnceLock;

static PROBED: OnceLock<TerminalSize> = OnceLock::new();

/// Terminal size in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub cols: u32,
    pub rows: u32,
}

impl Default for TerminalSize {
    fn default() -> Self {
        Self { cols: 80, rows: 24 }
    }
}

impl TerminalSize {
    pub fn new(cols: u32, rows: u32) -> Self {
        Self { cols, rows }
    }

    /// Size of the controlling terminal, probed once per process.
    ///
    /// Tries the `TIOCGWINSZ` ioctl on stdout, then `COLUMNS`/`LINES`, then
    /// `tput`, and falls back to 80x24.
    pub fn probe() -> Self {
        *PROBED.get_or_init(|| {
            let size = query_ioctl()
                .or_else(|| from_env(|key| std::env::var(key).ok()))
                .or_else(query_tput)
                .unwrap_or_default();
            log::info!("Detected terminal size: {}x{}", size.cols, size.rows);
            size
        })
    }
}

#[cfg(unix)]
fn query_ioctl() -> Option<TerminalSize> {
    // SAFETY: `winsize` is plain old data and TIOCGWINSZ only writes into it.
    let mut ws: libc::winsize = unsafe { std::mem::zeroed() };
    let rc = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut ws) };
    if rc == 0 && ws.ws_col > 0 && ws.ws_row > 0 {
        Some(TerminalSize::new(ws.ws_col as u32, ws.ws_row as u32))
    } else {
        None
    }
}

#[cfg(not(unix))]
fn query_ioctl() -> Option<TerminalSize> {
    None
}

/// Read `COLUMNS` and `LINES` through `lookup`. Both must be positive.
pub(crate) fn from_env<F>(lookup: F) -> Option<TerminalSize>
where
    F: Fn(&str) -> Option<String>,
{
    let cols = lookup("COLUMNS")?.trim().parse::<u32>().ok()?;
    let rows = lookup("LINES")?.trim().parse::<u32>().ok()?;
    (cols > 0 && rows > 0).then_some(TerminalSize::new(cols, rows))
}

fn query_tput() -> Option<TerminalSize> {
    let cols = tput("cols")?;
    let rows = tput("lines")?;
    (cols > 0 && rows > 0).then_some(TerminalSize::new(cols, rows))
}

fn tput(capability: &str) -> Option<u32> {
    let output = Command::new("tput")
        .arg(capability)
        .stdin(Stdio::inherit())
        .stderr(Stdio::null())
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8_lossy(&output.stdout).trim().parse().ok()
}
