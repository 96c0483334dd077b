// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

use charlie_core::Timing;

// ============================================================================
// Helligkeit (Duty-Cycle Schleife)
// ============================================================================

/// Durchläufe der Helligkeitsschleife pro Animationsschritt
/// Wird zur Build-Zeit aus BADGE_GLOW_CYCLES geladen (optional, siehe .env)
pub const GLOW_CYCLES: u16 = match option_env!("BADGE_GLOW_CYCLES") {
    Some(value) => parse_u16(value),
    None => Timing::DEFAULT.glow_cycles,
};

/// Spin-Pausen, während die LED an ist
pub const ON_SPINS: u8 = 4;

/// Spin-Pausen, während alle Leitungen frei sind
/// Verhältnis ON/OFF bestimmt die wahrgenommene Helligkeit
pub const OFF_SPINS: u8 = 10;

// ============================================================================
// Alarm-Muster (Taster gedrückt)
// ============================================================================

/// Leuchtdauer der Alarm-LED (5) in Millisekunden
pub const ALERT_FLASH_MS: u32 = 10;

/// Pause nach der Alarm-LED in Millisekunden
pub const ALERT_GAP_MS: u32 = 10;

/// Leuchtdauer der oberen LED (11) vor dem Schlafen in Millisekunden
pub const ALERT_HOLD_MS: u32 = 200;

/// Zusammengefasste Zeitparameter für die Statemachine
pub const TIMING: Timing = Timing {
    glow_cycles: GLOW_CYCLES,
    on_spins: ON_SPINS,
    off_spins: OFF_SPINS,
    alert_flash_ms: ALERT_FLASH_MS,
    alert_gap_ms: ALERT_GAP_MS,
    alert_hold_ms: ALERT_HOLD_MS,
};

/// Parst eine Dezimalzahl zur Compile-Zeit
///
/// Ungültige Werte brechen den Build ab.
const fn parse_u16(value: &str) -> u16 {
    let bytes = value.as_bytes();
    assert!(!bytes.is_empty(), "BADGE_GLOW_CYCLES ist leer");

    let mut result: u32 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let digit = bytes[i];
        assert!(digit.is_ascii_digit(), "BADGE_GLOW_CYCLES ist keine Zahl");
        result = result * 10 + (digit - b'0') as u32;
        assert!(result <= u16::MAX as u32, "BADGE_GLOW_CYCLES zu groß");
        i += 1;
    }
    result as u16
}
