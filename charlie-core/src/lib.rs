//! Charlie Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, den Charlieplex-Treiber und die Badge-Statemachine.

#![no_std]

#[macro_use]
mod fmt;

pub mod badge;
pub mod charlieplex;
pub mod logic;
pub mod traits;
pub mod types;
pub mod wake;

// Re-exports für einfachen Zugriff
pub use badge::Badge;
pub use charlieplex::{Charlieplex, LED_TABLE, LinePair};
pub use logic::{ANIMATION_STEPS, animation_sequence, glow};
pub use traits::{LedError, LedMatrix, PinDriver, PowerControl};
pub use types::{LED_COUNT, LINE_COUNT, LedId, Level, PinMode, PowerState, Timing};
pub use wake::WakeSignal;
