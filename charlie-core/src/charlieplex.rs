//! Charlieplex-Treiber
//!
//! Zwölf LED-Zustände über vier gemeinsam genutzte Leitungen. Pro Zustand
//! werden genau zwei Leitungen getrieben (eine HIGH, eine LOW), alle
//! anderen bleiben hochohmig. Dadurch fließt nur durch die adressierte LED
//! Strom.

use crate::traits::{LedMatrix, PinDriver};
use crate::types::{LED_COUNT, LINE_COUNT, LedId, Level, PinMode};

/// Leitungspaar einer LED: `source` liefert Strom (HIGH), `sink` nimmt ihn auf (LOW)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinePair {
    pub source: u8,
    pub sink: u8,
}

const fn pair(source: u8, sink: u8) -> LinePair {
    LinePair { source, sink }
}

/// Feste Zuordnung LED-Kennung → Leitungspaar
///
/// Jedes der sechs Leitungspaare kommt in beiden Polaritäten vor.
pub static LED_TABLE: [LinePair; LED_COUNT] = [
    pair(0, 1), // 0
    pair(1, 0), // 1
    pair(1, 2), // 2
    pair(2, 1), // 3
    pair(2, 3), // 4
    pair(3, 2), // 5
    pair(0, 2), // 6
    pair(2, 0), // 7
    pair(1, 3), // 8
    pair(3, 1), // 9
    pair(0, 3), // 10
    pair(3, 0), // 11
];

/// Charlieplex-Treiber über einen `PinDriver`
pub struct Charlieplex<P: PinDriver> {
    pins: P,
}

impl<P: PinDriver> Charlieplex<P> {
    /// Übernimmt die Leitungen und schaltet sie sofort hochohmig
    pub fn new(pins: P) -> Self {
        let mut driver = Self { pins };
        driver.release_all();
        driver
    }

    /// Leitungspaar einer LED
    pub fn pair_for(led: LedId) -> LinePair {
        LED_TABLE[led.index() as usize]
    }

    /// Zugriff auf die Leitungen (z.B. für Assertions in Tests)
    pub fn pins(&self) -> &P {
        &self.pins
    }

    /// Gibt die Leitungen wieder frei
    pub fn into_inner(self) -> P {
        self.pins
    }
}

impl<P: PinDriver> LedMatrix for Charlieplex<P> {
    fn release_all(&mut self) {
        for line in 0..LINE_COUNT {
            self.pins.set_mode(line, PinMode::Input);
            self.pins.set_level(line, Level::Low);
        }
    }

    fn light(&mut self, led: LedId) {
        let LinePair { source, sink } = Self::pair_for(led);

        // Vorher alles lösen, sonst leuchten kurz zwei LEDs
        self.release_all();

        self.pins.set_mode(source as usize, PinMode::Output);
        self.pins.set_mode(sink as usize, PinMode::Output);
        self.pins.set_level(source as usize, Level::High);
        self.pins.set_level(sink as usize, Level::Low);
    }
}
