//! Board configuration
//!
//! The firmware targets a single board, so configuration is a typed
//! compile-time constant that is validated once at startup.

pub mod board;

pub use board::{
    BoardConfig, ConfigError, DisplayConfig, PinMap, PwmConfig, SignalConfig, TimingConfig,
};
