//! Monochrome drawing surface

/// Display errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus transfer to the display failed
    Communication,
    /// Display not initialized
    NotInitialized,
}

/// Pixel color on a monochrome display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    Off,
    On,
}

/// Axis-aligned rectangle in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle shrunk by `inset` pixels on every side
    pub fn inset(&self, inset: u16) -> Self {
        Self {
            x: self.x + inset,
            y: self.y + inset,
            width: self.width.saturating_sub(2 * inset),
            height: self.height.saturating_sub(2 * inset),
        }
    }
}

/// Buffered monochrome drawing surface
///
/// Drawing calls only touch the local buffer; `flush` transmits it.
pub trait Canvas {
    /// Surface size in pixels `(width, height)`
    fn size(&self) -> (u16, u16);

    /// Fill the whole buffer with one color
    fn clear(&mut self, color: Color);

    /// Draw a rectangle, filled or as a 1-pixel outline
    fn draw_rect(&mut self, rect: Rect, color: Color, filled: bool);

    /// Transmit the buffer to the display
    fn flush(&mut self) -> Result<(), DisplayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inset() {
        let r = Rect::new(0, 0, 128, 64);
        assert_eq!(r.inset(1), Rect::new(1, 1, 126, 62));
        assert_eq!(r.inset(0), r);
    }

    #[test]
    fn test_inset_saturates() {
        let r = Rect::new(0, 0, 3, 3);
        assert_eq!(r.inset(2).width, 0);
    }
}
