//! Mock-Hardware für die Host-Tests
//!
//! Alle Mocks schreiben in ein gemeinsames Event-Log, damit sich die
//! Reihenfolge über Treiber, Power und Delay hinweg prüfen lässt.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use charlie_core::{
    LINE_COUNT, LedId, LedMatrix, Level, PinDriver, PinMode, PowerControl, Timing, WakeSignal,
};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorKind, ErrorType, InputPin};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Release,
    Light(u8),
    Delay(u32),
    WatchdogOff,
    AdcOff,
    Arm,
    Mask,
    Sleep,
}

pub type Log = Rc<RefCell<Vec<Event>>>;

pub fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

/// Nur die `Light`-Events, als Kennungen
pub fn lit_ids(log: &Log) -> Vec<u8> {
    log.borrow()
        .iter()
        .filter_map(|event| match event {
            Event::Light(id) => Some(*id),
            _ => None,
        })
        .collect()
}

/// Timing mit einem Helligkeits-Durchlauf und ohne Spins
pub fn fast_timing() -> Timing {
    Timing {
        glow_cycles: 1,
        on_spins: 0,
        off_spins: 0,
        ..Timing::DEFAULT
    }
}

// ============================================================================
// Mock Pins (Richtungs- und Datenregister)
// ============================================================================

pub struct MockPins {
    pub modes: [PinMode; LINE_COUNT],
    pub levels: [Level; LINE_COUNT],
    pub write_count: usize,
}

impl MockPins {
    /// Zustand nach dem Reset: alle Leitungen als Ausgang HIGH
    pub fn new() -> Self {
        Self {
            modes: [PinMode::Output; LINE_COUNT],
            levels: [Level::High; LINE_COUNT],
            write_count: 0,
        }
    }

    pub fn driven_lines(&self) -> Vec<usize> {
        (0..LINE_COUNT)
            .filter(|&line| self.modes[line] == PinMode::Output)
            .collect()
    }

    pub fn all_released(&self) -> bool {
        self.modes.iter().all(|mode| *mode == PinMode::Input)
            && self.levels.iter().all(|level| *level == Level::Low)
    }
}

impl PinDriver for MockPins {
    fn set_mode(&mut self, line: usize, mode: PinMode) {
        self.modes[line] = mode;
        self.write_count += 1;
    }

    fn set_level(&mut self, line: usize, level: Level) {
        self.levels[line] = level;
        self.write_count += 1;
    }

    fn read_level(&self, line: usize) -> Level {
        self.levels[line]
    }

    fn mode(&self, line: usize) -> PinMode {
        self.modes[line]
    }
}

// ============================================================================
// Mock LED Matrix
// ============================================================================

pub struct MockMatrix {
    log: Log,
}

impl MockMatrix {
    pub fn new(log: &Log) -> Self {
        Self { log: log.clone() }
    }
}

impl LedMatrix for MockMatrix {
    fn release_all(&mut self) {
        self.log.borrow_mut().push(Event::Release);
    }

    fn light(&mut self, led: LedId) {
        self.log.borrow_mut().push(Event::Light(led.index()));
    }
}

// ============================================================================
// Mock Power Control
// ============================================================================

pub struct MockPower<'a> {
    log: Log,
    wake: &'a WakeSignal,
    /// Interrupts pro Schlaf (simuliert prellende oder gehaltene Flanken)
    pub edges_per_sleep: usize,
    /// Interrupt schon beim Scharfschalten (Flanke kurz vor dem Schlaf)
    pub edge_on_arm: bool,
    pub pending_on_sleep: bool,
    pub watchdog_disabled: usize,
    pub adc_disabled: usize,
    pub armed: usize,
    pub masked: usize,
    pub sleeps: usize,
    pub wakes: usize,
    pub latch_set_on_sleep: bool,
}

impl<'a> MockPower<'a> {
    pub fn new(log: &Log, wake: &'a WakeSignal) -> Self {
        Self {
            log: log.clone(),
            wake,
            edges_per_sleep: 1,
            edge_on_arm: false,
            pending_on_sleep: false,
            watchdog_disabled: 0,
            adc_disabled: 0,
            armed: 0,
            masked: 0,
            sleeps: 0,
            wakes: 0,
            latch_set_on_sleep: false,
        }
    }
}

impl PowerControl for MockPower<'_> {
    fn disable_watchdog(&mut self) {
        self.watchdog_disabled += 1;
        self.log.borrow_mut().push(Event::WatchdogOff);
    }

    fn disable_adc(&mut self) {
        self.adc_disabled += 1;
        self.log.borrow_mut().push(Event::AdcOff);
    }

    fn arm_wake_interrupt(&mut self) {
        self.armed += 1;
        self.log.borrow_mut().push(Event::Arm);

        if self.edge_on_arm && self.wake.on_interrupt() {
            self.wakes += 1;
        }
    }

    fn mask_wake_interrupt(&mut self) {
        self.masked += 1;
        self.log.borrow_mut().push(Event::Mask);
    }

    fn enter_sleep(&mut self) {
        self.sleeps += 1;
        self.latch_set_on_sleep = self.wake.is_sleep_enabled();
        self.pending_on_sleep = self.wake.is_pending();
        self.log.borrow_mut().push(Event::Sleep);

        for _ in 0..self.edges_per_sleep {
            if self.wake.on_interrupt() {
                self.wakes += 1;
            }
        }
    }
}

// ============================================================================
// Mock Wake Line (aktiv LOW)
// ============================================================================

#[derive(Debug)]
pub struct MockLineError;

impl embedded_hal::digital::Error for MockLineError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Liefert die vorgegebenen Zustände nacheinander, danach "frei"
pub struct MockLine {
    pub pressed: VecDeque<bool>,
    pub read_count: usize,
    pub fail_next_read: bool,
}

impl MockLine {
    pub fn idle() -> Self {
        Self::sequence(&[])
    }

    pub fn sequence(pressed: &[bool]) -> Self {
        Self {
            pressed: pressed.iter().copied().collect(),
            read_count: 0,
            fail_next_read: false,
        }
    }
}

impl ErrorType for MockLine {
    type Error = MockLineError;
}

impl InputPin for MockLine {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.is_low().map(|low| !low)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.read_count += 1;
        if self.fail_next_read {
            self.fail_next_read = false;
            return Err(MockLineError);
        }
        Ok(self.pressed.pop_front().unwrap_or(false))
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

pub struct MockDelay {
    log: Log,
}

impl MockDelay {
    pub fn new(log: &Log) -> Self {
        Self { log: log.clone() }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Event::Delay(ms));
    }
}
