//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod adc;
pub mod canvas;
pub mod clock;
pub mod led;

pub use adc::{AdcError, AnalogInput};
pub use canvas::{Canvas, Color, DisplayError, Rect};
pub use clock::Clock;
pub use led::{Dimmer, Indicator};
