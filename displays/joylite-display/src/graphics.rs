//! embedded-graphics support for the frame buffer
//!
//! Primitives are rasterized straight into the page buffer. Pixels off
//! the panel are dropped, so shapes clip at the edges.

use core::convert::Infallible;

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*, Pixel};

use crate::framebuffer::{FrameBuffer, HEIGHT, WIDTH};

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            // Negative coordinates fail the conversion; set_pixel rejects the far side
            if let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) {
                self.set_pixel(x, y, color.is_on());
            }
        }
        Ok(())
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::{
        pixelcolor::BinaryColor,
        prelude::*,
        primitives::{Line, PrimitiveStyle, Rectangle},
    };

    use crate::FrameBuffer;

    #[test]
    fn test_line_clipped_at_edges() {
        let mut fb = FrameBuffer::new();
        Line::new(Point::new(-5, 0), Point::new(200, 0))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut fb)
            .unwrap();
        assert_eq!(fb.lit_count(), 128);
        assert_eq!(fb.pixel(0, 0), Some(true));
        assert_eq!(fb.pixel(127, 0), Some(true));
    }

    #[test]
    fn test_rect_clipped_at_corner() {
        let mut fb = FrameBuffer::new();
        Rectangle::new(Point::new(124, 60), Size::new(8, 8))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut fb)
            .unwrap();
        // Only the 4x4 on-panel part lands
        assert_eq!(fb.lit_count(), 16);
        assert_eq!(fb.pixel(127, 63), Some(true));
    }
}
