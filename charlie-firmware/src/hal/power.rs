// Stromspar-Primitive des ESP32-C6
//
// Watchdogs aus, Weck-Taster scharf, Light Sleep. Nach dem Light Sleep
// läuft die CPU direkt hinter `sleep_light` weiter.

use charlie_core::PowerControl;
use defmt::debug;
use esp_hal::peripherals::TIMG0;
use esp_hal::rtc_cntl::Rtc;
use esp_hal::rtc_cntl::sleep::GpioWakeupSource;
use esp_hal::timer::timg::Wdt;

use super::wake_button::{self, WAKE};

/// Real Hardware Power Control
///
/// Kapselt RTC (Light Sleep + RTC-Watchdog) und den TIMG0-Watchdog.
pub struct EspPower<'d> {
    rtc: Rtc<'d>,
    timg_wdt: Wdt<TIMG0<'d>>,
}

impl<'d> EspPower<'d> {
    /// Erstellt EspPower
    ///
    /// # Parameter
    /// - `rtc`: RTC Controller (aus LPWR Peripheral)
    /// - `timg_wdt`: Watchdog der Timer Group 0
    pub fn new(rtc: Rtc<'d>, timg_wdt: Wdt<TIMG0<'d>>) -> Self {
        Self { rtc, timg_wdt }
    }
}

impl PowerControl for EspPower<'_> {
    fn disable_watchdog(&mut self) {
        self.rtc.rwdt.disable();
        self.timg_wdt.disable();
    }

    fn disable_adc(&mut self) {
        // ADC wird nie initialisiert, SAR-ADC bleibt clock-gated
        debug!("ADC stays powered down");
    }

    fn arm_wake_interrupt(&mut self) {
        wake_button::arm();
    }

    fn mask_wake_interrupt(&mut self) {
        wake_button::mask();
    }

    fn enter_sleep(&mut self) {
        let wake_source = GpioWakeupSource::new();
        // Latch unter gesperrten Interrupts prüfen: eine Flanke nach der
        // Prüfung weckt über die Wakeup-Source, der Handler läuft danach
        critical_section::with(|_| {
            if WAKE.is_sleep_enabled() {
                self.rtc.sleep_light(&[&wake_source]);
            }
        });
    }
}
