//! In-memory frame buffer for 128x64 SSD1306 panels.

/// Display width in pixels
pub const WIDTH: usize = 128;
/// Display height in pixels
pub const HEIGHT: usize = 64;
/// Number of 8-pixel-tall pages
pub const PAGES: usize = HEIGHT / 8;

/// 1bpp frame buffer in SSD1306 page order.
///
/// Each byte covers eight vertically stacked pixels of one column; bit 0
/// is the topmost pixel of the page.
#[derive(Clone)]
pub struct FrameBuffer {
    pages: [[u8; WIDTH]; PAGES],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Creates a blank (all off) frame buffer.
    pub const fn new() -> Self {
        Self {
            pages: [[0; WIDTH]; PAGES],
        }
    }

    /// Fills every pixel with `on`.
    pub fn clear(&mut self, on: bool) {
        let fill = if on { 0xFF } else { 0x00 };
        for page in self.pages.iter_mut() {
            page.fill(fill);
        }
    }

    /// Sets a pixel state.
    ///
    /// Returns `true` when pixel is in bounds, `false` otherwise.
    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) -> bool {
        if x >= WIDTH || y >= HEIGHT {
            return false;
        }

        let mask = 1u8 << (y % 8);
        let byte = &mut self.pages[y / 8][x];
        if on {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }

        true
    }

    /// Reads a pixel state.
    pub fn pixel(&self, x: usize, y: usize) -> Option<bool> {
        if x >= WIDTH || y >= HEIGHT {
            return None;
        }

        Some(self.pages[y / 8][x] & (1 << (y % 8)) != 0)
    }

    /// Returns one page (8 pixel rows) of column bytes.
    pub fn page(&self, page: usize) -> Option<&[u8; WIDTH]> {
        self.pages.get(page)
    }

    /// Number of pixels currently on.
    pub fn lit_count(&self) -> u32 {
        self.pages
            .iter()
            .flat_map(|page| page.iter())
            .map(|byte| byte.count_ones())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_read_pixel() {
        let mut fb = FrameBuffer::new();
        assert!(fb.set_pixel(3, 9, true));
        assert_eq!(fb.pixel(3, 9), Some(true));
        assert_eq!(fb.pixel(3, 8), Some(false));
        // Page 1, bit 1
        assert_eq!(fb.page(1).map(|p| p[3]), Some(0b0000_0010));

        assert!(fb.set_pixel(3, 9, false));
        assert_eq!(fb.pixel(3, 9), Some(false));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut fb = FrameBuffer::new();
        assert!(!fb.set_pixel(WIDTH, 0, true));
        assert!(!fb.set_pixel(0, HEIGHT, true));
        assert_eq!(fb.pixel(WIDTH, 0), None);
        assert_eq!(fb.lit_count(), 0);
    }

    #[test]
    fn test_clear() {
        let mut fb = FrameBuffer::new();
        fb.clear(true);
        assert_eq!(fb.lit_count(), (WIDTH * HEIGHT) as u32);
        fb.clear(false);
        assert_eq!(fb.lit_count(), 0);
    }
}
