//! Weck-Signal zwischen Interrupt-Handler und Hauptschleife
//!
//! Ein Produzent (Interrupt) setzt das Flag, ein Konsument (Hauptschleife)
//! löscht es. Auf einem Single-Core ohne Preemption reichen dafür Atomics.

use core::sync::atomic::{AtomicBool, Ordering};

/// Sleep-Enable-Latch und Pending-Wake-Flag
pub struct WakeSignal {
    sleep_enabled: AtomicBool,
    wake_pending: AtomicBool,
}

impl WakeSignal {
    pub const fn new() -> Self {
        Self {
            sleep_enabled: AtomicBool::new(false),
            wake_pending: AtomicBool::new(false),
        }
    }

    /// Setzt den Sleep-Enable-Latch direkt vor dem Schlafbefehl
    pub fn enable_sleep(&self) {
        self.sleep_enabled.store(true, Ordering::Release);
    }

    /// Löscht den Sleep-Enable-Latch nach dem Aufwachen
    pub fn disable_sleep(&self) {
        self.sleep_enabled.store(false, Ordering::Release);
    }

    pub fn is_sleep_enabled(&self) -> bool {
        self.sleep_enabled.load(Ordering::Acquire)
    }

    /// Aus dem Interrupt-Handler aufzurufen
    ///
    /// Gibt `true` zurück, wenn dieser Aufruf das Wecken ausgelöst hat.
    /// Weitere Interrupts vor dem Konsumieren ändern nichts.
    pub fn on_interrupt(&self) -> bool {
        self.sleep_enabled.store(false, Ordering::Release);
        !self.wake_pending.swap(true, Ordering::AcqRel)
    }

    pub fn is_pending(&self) -> bool {
        self.wake_pending.load(Ordering::Acquire)
    }

    /// Konsumiert ein anstehendes Wecken
    pub fn take(&self) -> bool {
        self.wake_pending.swap(false, Ordering::AcqRel)
    }
}

impl Default for WakeSignal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupt_sets_pending_once() {
        let signal = WakeSignal::new();
        assert!(signal.on_interrupt());
        assert!(!signal.on_interrupt());
        assert!(!signal.on_interrupt());
        assert!(signal.is_pending());
    }

    #[test]
    fn test_take_consumes_pending() {
        let signal = WakeSignal::new();
        signal.on_interrupt();
        assert!(signal.take());
        assert!(!signal.take());
        assert!(!signal.is_pending());
    }

    #[test]
    fn test_interrupt_clears_sleep_latch() {
        let signal = WakeSignal::new();
        signal.enable_sleep();
        assert!(signal.is_sleep_enabled());
        signal.on_interrupt();
        assert!(!signal.is_sleep_enabled());
    }

    #[test]
    fn test_new_edge_after_take_wakes_again() {
        let signal = WakeSignal::new();
        assert!(signal.on_interrupt());
        signal.take();
        assert!(signal.on_interrupt());
    }
}
