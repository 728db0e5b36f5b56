//! Coordinate mapper
//!
//! `pixel = center ± round(delta / scale)` (add for X, subtract for Y so
//! that pushing the stick up moves the sprite up), then clamped to
//! `[border, extent - sprite - border]` on each axis.

use crate::config::{DisplayConfig, SignalConfig};
use crate::input::AxisPair;

use super::scale::Scale;

/// Sprite top-left corner in display pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PixelPosition {
    pub x: u16,
    pub y: u16,
}

impl PixelPosition {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Clamp `value` into `[lo, hi]`
///
/// Unlike `Ord::clamp` this never panics; if `lo > hi` the result is `hi`.
pub fn clamp(value: i32, lo: i32, hi: i32) -> i32 {
    value.max(lo).min(hi)
}

/// Maps conditioned deltas to clamped sprite positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CoordinateMapper {
    width: u16,
    height: u16,
    sprite: u16,
    scale: AxisPair<Scale>,
    center: PixelPosition,
}

impl CoordinateMapper {
    /// Build a mapper; scale factors are computed here once
    pub fn new(signal: &SignalConfig, display: &DisplayConfig) -> Self {
        let travel_x = display.width.saturating_sub(display.sprite_size);
        let travel_y = display.height.saturating_sub(display.sprite_size);

        Self {
            width: display.width,
            height: display.height,
            sprite: display.sprite_size,
            scale: AxisPair::new(
                Scale::new(signal.adc_range, travel_x),
                Scale::new(signal.adc_range, travel_y),
            ),
            center: PixelPosition::new(travel_x / 2, travel_y / 2),
        }
    }

    /// Sprite position for a centered joystick
    pub fn center(&self) -> PixelPosition {
        self.center
    }

    /// Per-axis scale factors
    pub fn scale(&self) -> AxisPair<Scale> {
        self.scale
    }

    /// Inclusive bounds `(min, max)` of the sprite's top-left corner
    /// for a given border thickness
    pub fn bounds(&self, border: u8) -> (PixelPosition, PixelPosition) {
        let b = border as u16;
        let max_x = self.width.saturating_sub(self.sprite).saturating_sub(b);
        let max_y = self.height.saturating_sub(self.sprite).saturating_sub(b);
        (PixelPosition::new(b, b), PixelPosition::new(max_x, max_y))
    }

    /// Map a conditioned delta pair to a clamped sprite position
    pub fn target(&self, delta: AxisPair<i16>, border: u8) -> PixelPosition {
        let (min, max) = self.bounds(border);

        let x = (self.center.x as i32).saturating_add(self.scale.x.apply(delta.x));
        let y = (self.center.y as i32).saturating_sub(self.scale.y.apply(delta.y));

        PixelPosition {
            x: clamp(x, min.x as i32, max.x as i32) as u16,
            y: clamp(y, min.y as i32, max.y as i32) as u16,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoardConfig;
    use proptest::prelude::*;

    fn mapper() -> CoordinateMapper {
        let board = BoardConfig::BITDOGLAB;
        CoordinateMapper::new(&board.signal, &board.display)
    }

    #[test]
    fn test_center() {
        let m = mapper();
        assert_eq!(m.center(), PixelPosition::new(60, 28));
        assert_eq!(m.target(AxisPair::new(0, 0), 0), PixelPosition::new(60, 28));
        assert_eq!(m.target(AxisPair::new(0, 0), 2), PixelPosition::new(60, 28));
    }

    #[test]
    fn test_full_right_clamps_to_edge() {
        let m = mapper();
        // offset round(2047 / 17.07) = 120 overshoots; clamp to 128 - 8 - border
        assert_eq!(m.target(AxisPair::new(2047, 0), 0).x, 120);
        assert_eq!(m.target(AxisPair::new(2047, 0), 1).x, 119);
        assert_eq!(m.target(AxisPair::new(2047, 0), 2).x, 118);
    }

    #[test]
    fn test_full_left_clamps_to_border() {
        let m = mapper();
        assert_eq!(m.target(AxisPair::new(-2048, 0), 0).x, 0);
        assert_eq!(m.target(AxisPair::new(-2048, 0), 2).x, 2);
    }

    #[test]
    fn test_y_axis_inverted() {
        let m = mapper();
        // Stick up (positive delta) moves the sprite toward row 0
        let up = m.target(AxisPair::new(0, 400), 0);
        let down = m.target(AxisPair::new(0, -400), 0);
        assert!(up.y < 28);
        assert!(down.y > 28);
        assert_eq!(m.target(AxisPair::new(0, 2047), 0).y, 0);
        assert_eq!(m.target(AxisPair::new(0, -2048), 1).y, 55);
    }

    #[test]
    fn test_small_delta_moves_proportionally() {
        let m = mapper();
        // 512 * 240 / 4096 = 30
        assert_eq!(m.target(AxisPair::new(512, 0), 0).x, 90);
        // 512 * 112 / 4096 = 14
        assert_eq!(m.target(AxisPair::new(0, 512), 0).y, 14);
    }

    #[test]
    fn test_extreme_geometry_stays_in_bounds() {
        let mut board = BoardConfig::BITDOGLAB;
        board.signal.adc_range = u16::MAX;
        board.signal.center_x = 32767;
        board.signal.center_y = 32767;
        board.display.width = u16::MAX;
        assert_eq!(board.validate(), Ok(()));

        let m = CoordinateMapper::new(&board.signal, &board.display);
        let full_left = crate::input::condition(0, 32767, 180);
        assert_eq!(m.target(AxisPair::new(full_left, 0), 0).x, 0);

        let full_right = crate::input::condition(u16::MAX - 1, 32767, 180);
        let (_, max) = m.bounds(0);
        assert_eq!(m.target(AxisPair::new(full_right, 0), 0).x, max.x);
    }

    #[test]
    fn test_bounds() {
        let m = mapper();
        let (min, max) = m.bounds(1);
        assert_eq!(min, PixelPosition::new(1, 1));
        assert_eq!(max, PixelPosition::new(119, 55));
    }

    #[test]
    fn test_clamp_basic() {
        assert_eq!(clamp(5, 0, 10), 5);
        assert_eq!(clamp(-3, 0, 10), 0);
        assert_eq!(clamp(42, 0, 10), 10);
    }

    proptest! {
        #[test]
        fn prop_clamp_idempotent(x in any::<i32>(), a in -1000i32..1000, b in -1000i32..1000) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let once = clamp(x, lo, hi);
            prop_assert_eq!(clamp(once, lo, hi), once);
            prop_assert!(once >= lo && once <= hi);
        }

        #[test]
        fn prop_target_within_drawable_region(
            raw_x in 0u16..4096,
            raw_y in 0u16..4096,
            border in 0u8..=2,
        ) {
            let board = BoardConfig::BITDOGLAB;
            let m = mapper();
            let delta = AxisPair::new(
                crate::input::condition(raw_x, board.signal.center_x, board.signal.deadzone),
                crate::input::condition(raw_y, board.signal.center_y, board.signal.deadzone),
            );
            let pos = m.target(delta, border);
            let b = border as u16;
            prop_assert!(pos.x >= b && pos.x <= 128 - 8 - b);
            prop_assert!(pos.y >= b && pos.y <= 64 - 8 - b);
        }
    }
}
