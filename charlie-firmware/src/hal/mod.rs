// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul implementiert die Traits aus charlie-core
// für die ESP32-C6 Hardware.

pub mod flex_lines;
pub mod power;
pub mod wake_button;

pub use flex_lines::FlexLines;
pub use power::EspPower;
pub use wake_button::{ButtonLine, WAKE, bind_wake_button};
