//! Frame composition
//!
//! Clears the surface, draws the filled sprite and, when the border is
//! non-zero, nested 1-pixel outlines along the display edge.

use crate::mapping::PixelPosition;
use crate::state::BorderState;
use crate::traits::{Canvas, Color, Rect};

/// Draw one frame into the canvas buffer (does not flush)
pub fn compose<C: Canvas>(canvas: &mut C, position: PixelPosition, sprite: u16, border: BorderState) {
    canvas.clear(Color::Off);

    canvas.draw_rect(
        Rect::new(position.x, position.y, sprite, sprite),
        Color::On,
        true,
    );

    let (width, height) = canvas.size();
    let edge = Rect::new(0, 0, width, height);
    for ring in 0..border.thickness() as u16 {
        canvas.draw_rect(edge.inset(ring), Color::On, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::DisplayError;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Op {
        Clear(Color),
        Rect(Rect, bool),
    }

    struct Recorder {
        ops: [Option<Op>; 8],
        len: usize,
    }

    impl Recorder {
        fn new() -> Self {
            Self {
                ops: [None; 8],
                len: 0,
            }
        }

        fn push(&mut self, op: Op) {
            self.ops[self.len] = Some(op);
            self.len += 1;
        }
    }

    impl Canvas for Recorder {
        fn size(&self) -> (u16, u16) {
            (128, 64)
        }

        fn clear(&mut self, color: Color) {
            self.push(Op::Clear(color));
        }

        fn draw_rect(&mut self, rect: Rect, _color: Color, filled: bool) {
            self.push(Op::Rect(rect, filled));
        }

        fn flush(&mut self) -> Result<(), DisplayError> {
            Ok(())
        }
    }

    #[test]
    fn test_no_border() {
        let mut canvas = Recorder::new();
        compose(&mut canvas, PixelPosition::new(60, 28), 8, BorderState::None);
        assert_eq!(canvas.len, 2);
        assert_eq!(canvas.ops[0], Some(Op::Clear(Color::Off)));
        assert_eq!(canvas.ops[1], Some(Op::Rect(Rect::new(60, 28, 8, 8), true)));
    }

    #[test]
    fn test_thick_border_rings() {
        let mut canvas = Recorder::new();
        compose(&mut canvas, PixelPosition::new(2, 2), 8, BorderState::Thick);
        assert_eq!(canvas.len, 4);
        assert_eq!(canvas.ops[2], Some(Op::Rect(Rect::new(0, 0, 128, 64), false)));
        assert_eq!(canvas.ops[3], Some(Op::Rect(Rect::new(1, 1, 126, 62), false)));
    }
}
