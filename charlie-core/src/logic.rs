//! Pure Animations-Logik
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use crate::traits::LedMatrix;
use crate::types::{LED_COUNT, LedId, Timing};

/// Schritte eines Animations-Durchlaufs: 12 vorwärts, 12 rückwärts, 1 Abschluss
pub const ANIMATION_STEPS: usize = 2 * LED_COUNT + 1;

/// Reihenfolge eines kompletten Durchlaufs
///
/// Im Uhrzeigersinn 0..=11, gegen den Uhrzeigersinn 11..=0,
/// zum Schluss noch einmal die oberste LED.
///
/// ```
/// # use charlie_core::animation_sequence;
/// let steps: Vec<u8> = animation_sequence().map(|led| led.index()).collect();
/// assert_eq!(&steps[..3], &[0, 1, 2]);
/// assert_eq!(&steps[11..14], &[11, 11, 10]);
/// assert_eq!(steps.last(), Some(&11));
/// ```
pub fn animation_sequence() -> impl Iterator<Item = LedId> {
    LedId::all()
        .chain(LedId::all().rev())
        .chain(core::iter::once(LedId::TOP))
}

/// Lässt eine LED per Duty-Cycle sichtbar leuchten
///
/// Enge Schleife aus Einschalten, kurzer Pause, Ausschalten, längerer Pause.
/// Keine Unterbrechungs- oder Yield-Punkte.
pub fn glow<M: LedMatrix>(matrix: &mut M, led: LedId, timing: &Timing) {
    for _ in 0..timing.glow_cycles {
        matrix.light(led);
        spin(timing.on_spins);
        matrix.release_all();
        spin(timing.off_spins);
    }
}

#[inline(always)]
fn spin(count: u8) {
    for _ in 0..count {
        core::hint::spin_loop();
    }
}
