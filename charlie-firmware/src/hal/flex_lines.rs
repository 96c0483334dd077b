// LED-Leitungen über ESP32-C6 GPIO Flex Pins
//
// Ein Flex Pin kann zur Laufzeit zwischen Ausgang und hochohmigem Eingang
// wechseln. Genau das braucht Charlieplexing.

use charlie_core::{LINE_COUNT, Level, PinDriver, PinMode};
use esp_hal::gpio::{Flex, InputConfig, Level as GpioLevel, OutputConfig, Pull};

/// Die vier gemeinsam genutzten LED-Leitungen
///
/// Merkt sich den Modus jeder Leitung, weil Flex den Ausgangstreiber
/// nicht zurücklesen kann. `set_mode` schaltet nur den Treiber um, die
/// Helligkeitsschleife ruft es tausendfach auf.
pub struct FlexLines<'d> {
    lines: [Flex<'d>; LINE_COUNT],
    modes: [PinMode; LINE_COUNT],
}

impl<'d> FlexLines<'d> {
    /// Übernimmt die Pins und schaltet alle hochohmig
    ///
    /// # Parameter
    /// - `lines`: Flex Pins in der Reihenfolge Leitung 0..=3
    pub fn new(mut lines: [Flex<'d>; LINE_COUNT]) -> Self {
        let input = InputConfig::default().with_pull(Pull::None);
        for line in lines.iter_mut() {
            line.apply_output_config(&OutputConfig::default());
            line.apply_input_config(&input);
            line.set_output_enable(false);
            line.set_low();
            // Eingangspuffer bleibt an, damit read_level immer funktioniert
            line.set_input_enable(true);
        }

        Self {
            lines,
            modes: [PinMode::Input; LINE_COUNT],
        }
    }
}

impl PinDriver for FlexLines<'_> {
    fn set_mode(&mut self, line: usize, mode: PinMode) {
        // Pull bleibt aus `new` auf None, nur der Ausgangstreiber schaltet
        self.lines[line].set_output_enable(mode == PinMode::Output);
        self.modes[line] = mode;
    }

    fn set_level(&mut self, line: usize, level: Level) {
        let level = match level {
            Level::High => GpioLevel::High,
            Level::Low => GpioLevel::Low,
        };
        self.lines[line].set_level(level);
    }

    fn read_level(&self, line: usize) -> Level {
        if self.lines[line].is_high() {
            Level::High
        } else {
            Level::Low
        }
    }

    fn mode(&self, line: usize) -> PinMode {
        self.modes[line]
    }
}
