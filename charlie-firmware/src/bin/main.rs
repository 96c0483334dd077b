// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_hal bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

use defmt::info;

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::delay::Delay;
use esp_hal::gpio::Flex;
use esp_hal::main;
use esp_hal::rtc_cntl::Rtc;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use charlie_badge::config::TIMING;
use charlie_badge::hal::{ButtonLine, EspPower, FlexLines, WAKE, bind_wake_button};
use charlie_badge::{Badge, Charlieplex};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert die Leitungen und den Taster, schläft dann sofort ein.
/// Kein Async-Runtime: die Helligkeitsschleife darf nicht unterbrochen werden.
#[main]
fn main() -> ! {
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    info!("Charlieplex Badge startet");

    // LED-Leitungen 0..=3 auf GPIO18..=GPIO21
    let lines = FlexLines::new([
        Flex::new(peripherals.GPIO18),
        Flex::new(peripherals.GPIO19),
        Flex::new(peripherals.GPIO20),
        Flex::new(peripherals.GPIO21),
    ]);

    // BOOT-Taster (GPIO9, aktiv LOW) mit Pull-Up + Interrupt-Handler
    bind_wake_button(peripherals.IO_MUX, peripherals.GPIO9);

    // Power: RTC für Light Sleep, Watchdogs zum Abschalten
    let rtc = Rtc::new(peripherals.LPWR);
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let power = EspPower::new(rtc, timg0.wdt);

    let mut badge = Badge::new(
        Charlieplex::new(lines),
        ButtonLine,
        power,
        Delay::new(),
        &WAKE,
        TIMING,
    );

    // Erst schlafen, dann Animation/Alarm endlos
    badge.run()
}
