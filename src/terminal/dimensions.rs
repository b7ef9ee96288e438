//! Dimension calculation for aspect-ratio-correct terminal rendering.

use super::size::TerminalSize;

/// Default terminal character aspect ratio (cell height / cell width).
/// Raise it if square images look squashed horizontally, lower it if they
/// look stretched.
pub const DEFAULT_CHAR_ASPECT_RATIO: f32 = 1.5;

/// Rows left free below the image for the shell prompt.
pub const RESERVED_ROWS: u32 = 2;

/// Size of the rendered image in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayTarget {
    pub cols: u32,
    pub rows: u32,
}

/// Rows available to the image once [`RESERVED_ROWS`] are set aside (at least 1).
pub fn usable_rows(terminal_rows: u32) -> u32 {
    terminal_rows.saturating_sub(RESERVED_ROWS).max(1)
}

/// Calculate display dimensions that fit the terminal and preserve the
/// window's aspect ratio.
///
/// Terminal cells are `char_aspect` times taller than wide, so a window of
/// `w x h` pixels looks right at `cols / (rows * char_aspect) == w / h`.
/// The image is fitted to whichever terminal axis it is relatively longer
/// along, scaled by `zoom`, then clamped back inside the terminal with the
/// other axis recomputed.
///
/// # Arguments
/// * `window_w` / `window_h` - Size of the source window in pixels
/// * `zoom` - Scale applied to the fitted axis (1.0 fits the terminal)
/// * `terminal` - Terminal size in cells
/// * `char_aspect` - Cell height / cell width
///
/// # Returns
/// A target of at least 1x1 that never exceeds `terminal.cols` columns or
/// the usable rows.
pub fn solve(
    window_w: u32,
    window_h: u32,
    zoom: f32,
    terminal: TerminalSize,
    char_aspect: f32,
) -> DisplayTarget {
    let term_cols = terminal.cols.max(1);
    let term_rows = usable_rows(terminal.rows);

    if window_w == 0 || window_h == 0 {
        log::warn!(
            "Invalid window dimensions {}x{}, using full terminal {}x{}",
            window_w,
            window_h,
            term_cols,
            term_rows
        );
        return DisplayTarget {
            cols: term_cols,
            rows: term_rows,
        };
    }

    let image_aspect = window_w as f32 / window_h as f32;
    let terminal_aspect = term_cols as f32 / (term_rows as f32 * char_aspect);

    let rows_for = |cols: i64| ((cols as f32 / image_aspect) / char_aspect) as i64;
    let cols_for = |rows: i64| ((rows as f32 * char_aspect) * image_aspect) as i64;

    let (mut cols, mut rows) = if image_aspect > terminal_aspect {
        // Relatively wide: fit to width
        let cols = (term_cols as f32 * zoom) as i64;
        (cols, rows_for(cols))
    } else {
        let rows = (term_rows as f32 * zoom) as i64;
        (cols_for(rows), rows)
    };

    cols = cols.max(1);
    rows = rows.max(1);

    if cols > term_cols as i64 {
        cols = term_cols as i64;
        rows = rows_for(cols).max(1);
    }
    if rows > term_rows as i64 {
        rows = term_rows as i64;
        cols = cols_for(rows).max(1);
    }

    let target = DisplayTarget {
        cols: cols.max(1) as u32,
        rows: rows.max(1) as u32,
    };
    log::info!(
        "Calculated display dimensions: {}x{} (window: {}x{}, zoom: {:.2}, char H/W ratio: {:.2})",
        target.cols,
        target.rows,
        window_w,
        window_h,
        zoom,
        char_aspect
    );
    target
}

/// Like [`solve`], but explicit `width`/`height` overrides take precedence.
///
/// With only one override the other axis follows from the window's aspect
/// ratio and `char_aspect`. The result is always clamped to the terminal.
pub fn solve_with_overrides(
    window_w: u32,
    window_h: u32,
    width: Option<u32>,
    height: Option<u32>,
    zoom: f32,
    terminal: TerminalSize,
    char_aspect: f32,
) -> DisplayTarget {
    let width = width.filter(|&w| w > 0);
    let height = height.filter(|&h| h > 0);

    let (cols, rows) = match (width, height) {
        (None, None) => return solve(window_w, window_h, zoom, terminal, char_aspect),
        (Some(w), Some(h)) => (w as i64, h as i64),
        (Some(w), None) => {
            let scale = w as f32 / window_w.max(1) as f32;
            (w as i64, (window_h as f32 * scale / char_aspect) as i64)
        }
        (None, Some(h)) => {
            let scale = h as f32 / window_h.max(1) as f32;
            ((window_w as f32 * scale * char_aspect) as i64, h as i64)
        }
    };
    log::info!(
        "User specified dimensions: {}x{} (calculated: {}x{})",
        width.unwrap_or(0),
        height.unwrap_or(0),
        cols,
        rows
    );

    let term_cols = terminal.cols.max(1) as i64;
    let term_rows = usable_rows(terminal.rows) as i64;
    DisplayTarget {
        cols: cols.clamp(1, term_cols) as u32,
        rows: rows.clamp(1, term_rows) as u32,
    }
}
