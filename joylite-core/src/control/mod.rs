//! Button handler and polling loop
//!
//! The button handler is the only writer of toggle state; the polling
//! loop samples the joystick, decides whether to redraw, and drives the
//! LED duty levels every tick.

pub mod handler;
pub mod poll;

pub use handler::{ButtonAction, ButtonHandler};
pub use poll::{PollLoop, Redraw, TickReport};
