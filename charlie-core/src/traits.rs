//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use crate::types::{LedId, Level, PinMode};

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    /// Kennung außerhalb von 0..=11 (Programmierfehler)
    InvalidIdentifier(u8),
}

/// Trait für die gemeinsam genutzten LED-Leitungen
///
/// Adressiert die Leitungen über ihren logischen Index `0..LINE_COUNT`.
/// Entspricht einem Port mit Richtungs- und Datenregister.
///
/// # Implementierungen
/// - **Production:** FlexLines (ESP32-C6 GPIO Flex Pins)
/// - **Testing:** MockPins (in-memory Register)
pub trait PinDriver {
    /// Setzt die Richtung einer Leitung
    fn set_mode(&mut self, line: usize, mode: PinMode);

    /// Setzt den Ausgangs-Latch einer Leitung
    fn set_level(&mut self, line: usize, level: Level);

    /// Liest den aktuellen Pegel einer Leitung
    fn read_level(&self, line: usize) -> Level;

    /// Liest die aktuell konfigurierte Richtung einer Leitung
    fn mode(&self, line: usize) -> PinMode;
}

/// Trait für eine LED-Matrix, die immer nur eine LED gleichzeitig zeigt
///
/// Die Statemachine kennt nur dieses Trait, nicht die Leitungen.
pub trait LedMatrix {
    /// Schaltet alle Leitungen hochohmig
    fn release_all(&mut self);

    /// Lässt genau eine LED leuchten
    fn light(&mut self, led: LedId);

    /// Wie `light`, aber mit ungeprüfter Kennung
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::InvalidIdentifier` zurück, wenn `id` > 11 ist.
    /// In diesem Fall wird keine Leitung verändert.
    fn activate(&mut self, id: u8) -> Result<(), LedError> {
        let led = LedId::try_from(id)?;
        self.light(led);
        Ok(())
    }
}

/// Trait für die Stromspar-Primitive des Controllers
///
/// # Implementierungen
/// - **Production:** EspPower (RTC Watchdog + Light Sleep)
/// - **Testing:** MockPower (zählt Aufrufe, simuliert den Interrupt)
pub trait PowerControl {
    /// Schaltet alle Watchdogs ab
    fn disable_watchdog(&mut self);

    /// Schaltet den Analog-Digital-Wandler ab
    fn disable_adc(&mut self);

    /// Aktiviert den externen Pin-Change-Interrupt
    fn arm_wake_interrupt(&mut self);

    /// Sperrt den externen Interrupt während der Animation
    fn mask_wake_interrupt(&mut self);

    /// Hält die CPU im tiefsten Schlafmodus an
    ///
    /// Kehrt erst nach dem externen Interrupt zurück; die Ausführung
    /// geht direkt nach dem Aufruf weiter.
    fn enter_sleep(&mut self);
}
