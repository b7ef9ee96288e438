//! View window selection (zoom and pan) in source pixel coordinates.

/// A rectangle inside a source buffer.
///
/// Always satisfies `x + w <= image width`, `y + h <= image height` and
/// `w, h >= 1` for the image it was selected from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewWindow {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl ViewWindow {
    /// The whole image.
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            w: width.max(1),
            h: height.max(1),
        }
    }

    /// Select the region shown for a zoom factor and pan offset.
    ///
    /// Zooming in shrinks the window (`2.0` shows half of each axis). The
    /// offsets are clamped so the window never leaves the image; negative
    /// offsets pin it to the top-left corner.
    ///
    /// # Arguments
    /// * `img_width` / `img_height` - Size of the (already oriented) image
    /// * `zoom` - Zoom factor, expected to be positive
    /// * `offset_x` / `offset_y` - Requested top-left corner in image pixels
    pub fn select(
        img_width: u32,
        img_height: u32,
        zoom: f32,
        offset_x: i64,
        offset_y: i64,
    ) -> Self {
        let zoom = if zoom > 0.0 && zoom.is_finite() { zoom } else { 1.0 };
        let img_w = img_width.max(1);
        let img_h = img_height.max(1);

        let w = ((img_w as f32 / zoom) as u32).clamp(1, img_w);
        let h = ((img_h as f32 / zoom) as u32).clamp(1, img_h);

        let x = offset_x.clamp(0, (img_w - w) as i64) as u32;
        let y = offset_y.clamp(0, (img_h - h) as i64) as u32;

        Self { x, y, w, h }
    }

    /// True when the window lies inside a `width x height` image.
    pub fn fits(&self, width: u32, height: u32) -> bool {
        self.w >= 1
            && self.h >= 1
            && self.x as u64 + self.w as u64 <= width as u64
            && self.y as u64 + self.h as u64 <= height as u64
    }
}
