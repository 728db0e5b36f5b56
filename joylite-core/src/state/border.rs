//! Display border thickness

/// Border drawn around the display edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum BorderState {
    #[default]
    None = 0,
    Thin = 1,
    Thick = 2,
}

impl BorderState {
    /// Border thickness in pixels
    pub const fn thickness(self) -> u8 {
        self as u8
    }

    /// Next state in the 0 -> 1 -> 2 -> 0 cycle
    pub const fn next(self) -> Self {
        match self {
            BorderState::None => BorderState::Thin,
            BorderState::Thin => BorderState::Thick,
            BorderState::Thick => BorderState::None,
        }
    }

    /// Decode a stored thickness (values above 2 wrap modulo 3)
    pub const fn from_raw(raw: u8) -> Self {
        match raw % 3 {
            0 => BorderState::None,
            1 => BorderState::Thin,
            _ => BorderState::Thick,
        }
    }
}
