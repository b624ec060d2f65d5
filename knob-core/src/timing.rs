//! Zeit-Gates für Rate-Limiting
//!
//! Die Zeit kommt als monotone Millisekunden von außen (Embassy `Instant`
//! im Firmware-Code, feste Werte in Tests).

/// Periodisches Zeitfenster
///
/// `is_elapsed()` liefert `true` sobald seit dem letzten Auslösen
/// mindestens `period_ms` vergangen sind und startet das Fenster neu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalGate {
    period_ms: u64,
    last_ms: u64,
}

impl IntervalGate {
    pub const fn new(period_ms: u64) -> Self {
        Self {
            period_ms,
            last_ms: 0,
        }
    }

    pub const fn period_ms(&self) -> u64 {
        self.period_ms
    }

    /// Startet das Zeitfenster ab `now_ms` neu
    pub fn arm(&mut self, now_ms: u64) {
        self.last_ms = now_ms;
    }

    pub fn is_elapsed(&mut self, now_ms: u64) -> bool {
        if now_ms.saturating_sub(self.last_ms) >= self.period_ms {
            self.last_ms = now_ms;
            true
        } else {
            false
        }
    }
}
