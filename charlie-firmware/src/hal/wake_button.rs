// Weck-Taster: GPIO-Interrupt und Lesezugriff für die Hauptschleife
//
// Der Taster liegt in einer Critical-Section-Mutex, weil sowohl der
// Interrupt-Handler als auch die Hauptschleife darauf zugreifen.

use core::cell::RefCell;
use core::convert::Infallible;

use charlie_core::WakeSignal;
use critical_section::Mutex;
use defmt::warn;
use embedded_hal::digital::{ErrorType, InputPin as HalInputPin};
use esp_hal::gpio::{Event, Input, InputConfig, InputPin, Io, Pull, WakeEvent};
use esp_hal::{handler, peripherals, ram};

/// Weck-Flag: gesetzt vom Interrupt, konsumiert von der Hauptschleife
pub static WAKE: WakeSignal = WakeSignal::new();

/// Taster-Pin (aktiv LOW, interner Pull-Up)
static BUTTON: Mutex<RefCell<Option<Input<'static>>>> = Mutex::new(RefCell::new(None));

/// Richtet den Taster als Eingang mit Pull-Up ein und registriert den Handler
///
/// Der Interrupt ist danach noch nicht scharf, siehe `arm`.
pub fn bind_wake_button(mux: peripherals::IO_MUX<'static>, pin: impl InputPin + 'static) {
    let mut io = Io::new(mux);
    io.set_interrupt_handler(handle_wake_edge);

    let config = InputConfig::default().with_pull(Pull::Up);
    let button = Input::new(pin, config);

    critical_section::with(|cs| {
        BUTTON.borrow_ref_mut(cs).replace(button);
    });
}

/// Aktiviert Flanken-Interrupt und Light-Sleep-Wakeup
pub(crate) fn arm() {
    critical_section::with(|cs| {
        if let Some(button) = BUTTON.borrow_ref_mut(cs).as_mut() {
            button.clear_interrupt();
            button.listen(Event::FallingEdge);
            if button.wakeup_enable(true, WakeEvent::LowLevel).is_err() {
                warn!("Wake button cannot wake from sleep");
            }
        }
    });
}

/// Sperrt den Flanken-Interrupt bis zum nächsten Schlaf
pub(crate) fn mask() {
    critical_section::with(|cs| {
        if let Some(button) = BUTTON.borrow_ref_mut(cs).as_mut() {
            button.unlisten();
        }
    });
}

/// Interrupt-Handler: quittiert den Interrupt und setzt das Weck-Flag
///
/// Keine Pin-Manipulation, kein Delay, kein Logging.
#[handler]
#[ram]
fn handle_wake_edge() {
    let is_wake_edge = critical_section::with(|cs| {
        let mut cell = BUTTON.borrow_ref_mut(cs);
        if let Some(button) = cell.as_mut() {
            let is_set = button.is_interrupt_set();
            button.clear_interrupt();
            is_set
        } else {
            false
        }
    });

    if is_wake_edge {
        WAKE.on_interrupt();
    }
}

/// Lesezugriff auf den Taster für die Statemachine
///
/// Ist der Taster (noch) nicht gebunden, gilt die Leitung als frei.
pub struct ButtonLine;

impl ErrorType for ButtonLine {
    type Error = Infallible;
}

impl HalInputPin for ButtonLine {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.is_low().map(|low| !low)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(critical_section::with(|cs| {
            BUTTON
                .borrow_ref(cs)
                .as_ref()
                .is_some_and(|button| button.is_low())
        }))
    }
}
