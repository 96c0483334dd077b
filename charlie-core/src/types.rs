//! Core Types für die Charlieplex-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

use crate::traits::LedError;

/// Anzahl der gemeinsam genutzten LED-Leitungen
pub const LINE_COUNT: usize = 4;

/// Anzahl der adressierbaren Charlieplex-Zustände (Leitungspaar × Polarität)
pub const LED_COUNT: usize = 12;

/// Pin-Modus einer LED-Leitung
///
/// Der Taster (Eingang mit Pull-Up) ist keine LED-Leitung und wird direkt
/// über die HAL eingerichtet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinMode {
    /// Treibt die Leitung mit dem gesetzten Pegel
    Output,
    /// Hochohmig (Tri-State), kein Pull-Widerstand
    Input,
}

/// Logischer Pegel einer Leitung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    High,
    Low,
}

/// Logische LED-Kennung im Bereich 0..=11
///
/// Kann nur über `TryFrom<u8>` oder die Konstanten erzeugt werden,
/// ist also immer gültig.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LedId(u8);

impl LedId {
    /// Erste LED der Rotation
    pub const FIRST: LedId = LedId(0);
    /// Kurzes Aufblitzen beim Alarm-Muster
    pub const ALERT: LedId = LedId(5);
    /// Oberste LED (letzte der Rotation)
    pub const TOP: LedId = LedId(11);

    /// Erzeugt eine LedId zur Compile-Zeit
    ///
    /// Bricht die Konstanten-Auswertung ab, wenn `id` außerhalb liegt.
    pub const fn new(id: u8) -> Self {
        assert!((id as usize) < LED_COUNT, "LED id out of range");
        LedId(id)
    }

    /// Numerischer Wert der Kennung
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Alle gültigen Kennungen in aufsteigender Reihenfolge
    pub fn all() -> impl DoubleEndedIterator<Item = LedId> {
        (0..LED_COUNT as u8).map(LedId)
    }
}

impl TryFrom<u8> for LedId {
    type Error = LedError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        if (id as usize) < LED_COUNT {
            Ok(LedId(id))
        } else {
            Err(LedError::InvalidIdentifier(id))
        }
    }
}

impl From<LedId> for u8 {
    fn from(id: LedId) -> u8 {
        id.0
    }
}

/// Zustand der Power- & Animations-Statemachine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PowerState {
    /// Alle Leitungen frei, CPU schläft bis zum externen Interrupt
    #[default]
    Asleep,
    /// Rotation im und gegen den Uhrzeigersinn
    Animating,
    /// Quittungs-Muster bei gedrücktem Taster, danach Schlaf
    Alerting,
}

/// Zeitparameter für Helligkeit und Alarm-Muster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Durchläufe der Helligkeitsschleife pro Animationsschritt
    pub glow_cycles: u16,
    /// Spin-Pausen, während die LED leuchtet
    pub on_spins: u8,
    /// Spin-Pausen, während alle Leitungen frei sind
    pub off_spins: u8,
    /// Leuchtdauer der Alarm-LED in Millisekunden
    pub alert_flash_ms: u32,
    /// Pause zwischen den beiden Alarm-LEDs in Millisekunden
    pub alert_gap_ms: u32,
    /// Leuchtdauer der oberen LED vor dem Schlafen in Millisekunden
    pub alert_hold_ms: u32,
}

impl Timing {
    /// Werte des ursprünglichen Badges
    pub const DEFAULT: Timing = Timing {
        glow_cycles: 4096,
        on_spins: 4,
        off_spins: 10,
        alert_flash_ms: 10,
        alert_gap_ms: 10,
        alert_hold_ms: 200,
    };
}

impl Default for Timing {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for LedId {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "LED{}", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PinMode {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            PinMode::Output => defmt::write!(fmt, "Output"),
            PinMode::Input => defmt::write!(fmt, "Input"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Level {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Level::High => defmt::write!(fmt, "High"),
            Level::Low => defmt::write!(fmt, "Low"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PowerState {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            PowerState::Asleep => defmt::write!(fmt, "Asleep"),
            PowerState::Animating => defmt::write!(fmt, "Animating"),
            PowerState::Alerting => defmt::write!(fmt, "Alerting"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Timing {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "Timing {{ glow: {}, on: {}, off: {}, alert: {}/{}/{} ms }}",
            self.glow_cycles,
            self.on_spins,
            self.off_spins,
            self.alert_flash_ms,
            self.alert_gap_ms,
            self.alert_hold_ms
        )
    }
}
