//! Render decision and frame composition
//!
//! The display is only redrawn and transmitted when the border or the
//! sprite position changed, saving I2C transfers on idle ticks.

pub mod decision;
pub mod frame;

pub use decision::{RenderDecision, RenderEvent, RenderState};
pub use frame::compose;
