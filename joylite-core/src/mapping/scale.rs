//! Analog-units-per-pixel scale factor
//!
//! The scale factor `analog_range / travel / 2` is generally not an
//! integer (4096 / 120 / 2 = 17.07 on a 128-pixel axis with an 8-pixel
//! sprite). It is stored as an exact rational computed once from the
//! board constants, so per-tick mapping is integer-only.

/// Exact analog-to-pixel ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Scale {
    /// Pixels of offset per `den` analog units
    num: i32,
    /// Analog units
    den: i32,
}

impl Scale {
    /// Build the scale for an axis
    ///
    /// - `analog_range`: number of ADC codes (4096 for 12-bit)
    /// - `travel`: pixels the sprite can move along the axis
    ///   (display extent minus sprite size)
    pub const fn new(analog_range: u16, travel: u16) -> Self {
        Self {
            num: 2 * travel as i32,
            den: if analog_range == 0 { 1 } else { analog_range as i32 },
        }
    }

    /// Convert an analog delta to a pixel offset, rounding half away from zero
    ///
    /// The product is formed in `i64`; `num` can be up to 2 * 65535.
    pub fn apply(&self, delta: i16) -> i32 {
        let offset = div_round(delta as i64 * self.num as i64, self.den as i64);
        offset.clamp(i32::MIN as i64, i32::MAX as i64) as i32
    }

    /// Analog units per pixel, scaled by 1000 (for logging)
    pub fn units_per_pixel_x1000(&self) -> i32 {
        if self.num == 0 {
            return 0;
        }
        self.den * 1000 / self.num
    }
}

/// Integer division rounding half away from zero (`d` > 0)
fn div_round(n: i64, d: i64) -> i64 {
    if n >= 0 {
        (n + d / 2) / d
    } else {
        -((-n + d / 2) / d)
    }
}
