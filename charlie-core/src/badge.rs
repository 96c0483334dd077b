//! Power- & Animations-Statemachine
//!
//! Schläft nach dem Start sofort ein. Nach dem Wecken läuft die Rotation,
//! solange der Taster frei ist. Ist er gedrückt, quittiert das Badge mit
//! dem Alarm-Muster und schläft wieder ein.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

use crate::logic::{animation_sequence, glow};
use crate::traits::{LedMatrix, PowerControl};
use crate::types::{LedId, PowerState, Timing};
use crate::wake::WakeSignal;

/// Die komplette Badge-Logik über austauschbare Hardware
///
/// # Trait-basierte Abstraktion
/// - `M: LedMatrix` - Charlieplex-Treiber oder Mock
/// - `L: InputPin` - Taster/Reset-Leitung, aktiv LOW
/// - `P: PowerControl` - Watchdog, ADC, Interrupt, Schlaf
/// - `D: DelayNs` - blockierendes Delay für das Alarm-Muster
pub struct Badge<'a, M, L, P, D> {
    matrix: M,
    line: L,
    power: P,
    delay: D,
    wake: &'a WakeSignal,
    timing: Timing,
    state: PowerState,
}

impl<'a, M, L, P, D> Badge<'a, M, L, P, D>
where
    M: LedMatrix,
    L: InputPin,
    P: PowerControl,
    D: DelayNs,
{
    pub fn new(
        matrix: M,
        line: L,
        power: P,
        delay: D,
        wake: &'a WakeSignal,
        timing: Timing,
    ) -> Self {
        Self {
            matrix,
            line,
            power,
            delay,
            wake,
            timing,
            state: PowerState::Asleep,
        }
    }

    pub fn state(&self) -> PowerState {
        self.state
    }

    pub fn matrix(&self) -> &M {
        &self.matrix
    }

    pub fn power(&self) -> &P {
        &self.power
    }

    /// Erster Schlaf direkt nach dem Pin-Setup
    pub fn boot(&mut self) {
        info!("Boot: {}", self.timing);
        self.sleep();
    }

    /// Endlosschleife der Firmware
    pub fn run(&mut self) -> ! {
        self.boot();
        loop {
            self.step();
        }
    }

    /// Eine Iteration der Hauptschleife
    ///
    /// Taster gedrückt: Alarm-Muster, danach Schlaf.
    /// Taster frei: ein Animations-Durchlauf, kein Schlaf.
    pub fn step(&mut self) {
        if self.wake.take() {
            // Bis zum nächsten Schlaf keine weiteren Weck-Interrupts
            self.power.mask_wake_interrupt();
            debug!("Wake consumed");
        }

        if self.line_active() {
            self.alert();
            self.sleep();
        } else {
            self.animate();
        }
    }

    /// Ein kompletter Durchlauf im und gegen den Uhrzeigersinn
    pub fn animate(&mut self) {
        self.set_state(PowerState::Animating);
        for led in animation_sequence() {
            glow(&mut self.matrix, led, &self.timing);
        }
    }

    /// Quittungs-Muster: kurz LED 5, dann länger die oberste LED
    pub fn alert(&mut self) {
        self.set_state(PowerState::Alerting);

        self.matrix.release_all();
        self.matrix.light(LedId::ALERT);
        self.delay.delay_ms(self.timing.alert_flash_ms);

        self.matrix.release_all();
        self.delay.delay_ms(self.timing.alert_gap_ms);

        self.matrix.light(LedId::TOP);
        self.delay.delay_ms(self.timing.alert_hold_ms);
    }

    /// Schlafen bis zum externen Interrupt
    ///
    /// Kehrt nach dem Wecken zurück, der Zustand ist dann `Animating`.
    /// Kam der Interrupt schon zwischen Scharfschalten und Schlafbefehl,
    /// ist der Latch gelöscht und die CPU wird gar nicht erst angehalten.
    pub fn sleep(&mut self) {
        self.set_state(PowerState::Asleep);

        self.matrix.release_all();
        self.power.disable_watchdog();
        self.power.disable_adc();

        // Latch vor dem Interrupt setzen, sonst geht eine frühe Flanke verloren
        self.wake.enable_sleep();
        self.power.arm_wake_interrupt();

        if self.wake.is_sleep_enabled() {
            self.power.enter_sleep();
        } else {
            debug!("Wake arrived before sleep, staying awake");
        }

        // Hier geht es nach dem Interrupt weiter
        self.wake.disable_sleep();
        self.set_state(PowerState::Animating);
    }

    fn line_active(&mut self) -> bool {
        match self.line.is_low() {
            Ok(pressed) => pressed,
            Err(_) => {
                warn!("Wake line read failed, treating as idle");
                false
            }
        }
    }

    fn set_state(&mut self, next: PowerState) {
        if self.state != next {
            info!("State: {} -> {}", self.state, next);
            self.state = next;
        }
    }
}
