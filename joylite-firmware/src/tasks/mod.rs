//! Embassy async tasks
//!
//! The button task plays the interrupt handler role; the polling task
//! runs the 10 ms sample/render/dim loop. They share state only through
//! `crate::shared`.

pub mod buttons;
pub mod poll;

pub use buttons::buttons_task;
pub use poll::{poll_task, Display};
