// Library-Root: Hardware-Adapter und Konfiguration
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;

// Re-exports von charlie-core
pub use charlie_core::{
    Badge, Charlieplex, LedError, LedId, LedMatrix, PinDriver, PowerControl, PowerState, Timing,
    WakeSignal,
};

// ============================================================================
// Testing-Strategie
// ============================================================================
//
// Diese Crate kompiliert nur für riscv32imac-unknown-none-elf (esp-hal).
// Sämtliche Logik liegt deshalb in charlie-core:
//
// - Charlieplex-Treiber über das PinDriver-Trait
// - Statemachine über LedMatrix, PowerControl, embedded-hal InputPin/DelayNs
//
// Die Host-Tests in charlie-tests setzen Mocks für diese Traits ein.
// Hier bleiben nur dünne Adapter (FlexLines, EspPower, ButtonLine),
// die auf der Hardware per Sichtprüfung verifiziert werden.
