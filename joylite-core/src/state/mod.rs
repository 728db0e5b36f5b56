//! Toggle state shared between the button handler and the polling loop

pub mod border;
pub mod shared;

pub use border::BorderState;
pub use shared::SharedState;
