//! Eingabe-Dekodierung: Drehencoder und Taster
//!
//! Reine Zustandsautomaten, die Pegel und Zeitstempel bekommen und
//! daraus `Key`- bzw. `ScreenEvent`-Werte machen.

use crate::types::{Key, ScreenEvent};

/// Gültige Gray-Code-Übergänge, Index = (vorher << 2) | jetzt
///
/// Ungültige Sprünge (beide Spuren gleichzeitig) zählen als 0.
const TRANSITIONS: [i8; 16] = [0, -1, 1, 0, 1, 0, 0, -1, -1, 0, 0, 1, 0, 1, -1, 0];

/// Quadratur-Decoder für einen mechanischen Drehencoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadratureDecoder {
    state: u8,
    steps: i8,
}

impl QuadratureDecoder {
    /// Gültige Übergänge pro Rastung
    pub const STEPS_PER_DETENT: i8 = 4;

    /// Startet mit den aktuellen Pegeln der Spuren A und B
    pub const fn new(a: bool, b: bool) -> Self {
        Self {
            state: encode(a, b),
            steps: 0,
        }
    }

    /// Neue Pegel auswerten, `Some(key)` nach einer vollen Rastung
    pub fn update(&mut self, a: bool, b: bool) -> Option<Key> {
        let next = encode(a, b);
        let index = ((self.state << 2) | next) as usize;
        self.state = next;
        self.steps += TRANSITIONS[index];

        if self.steps >= Self::STEPS_PER_DETENT {
            self.steps = 0;
            Some(Key::Right)
        } else if self.steps <= -Self::STEPS_PER_DETENT {
            self.steps = 0;
            Some(Key::Left)
        } else {
            None
        }
    }
}

const fn encode(a: bool, b: bool) -> u8 {
    ((a as u8) << 1) | b as u8
}

/// Unterscheidet kurzen Klick und langen Druck
///
/// `LongPressed` kommt einmal, sobald die Taste lange genug gehalten wird.
/// Das Loslassen danach erzeugt kein weiteres Event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonClassifier {
    long_press_ms: u64,
    pressed_at: Option<u64>,
    long_reported: bool,
}

impl ButtonClassifier {
    pub const DEFAULT_LONG_PRESS_MS: u64 = 400;

    pub const fn new(long_press_ms: u64) -> Self {
        Self {
            long_press_ms,
            pressed_at: None,
            long_reported: false,
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed_at.is_some()
    }

    pub fn press(&mut self, now_ms: u64) {
        self.pressed_at = Some(now_ms);
        self.long_reported = false;
    }

    /// Während die Taste gehalten wird periodisch aufrufen
    pub fn poll(&mut self, now_ms: u64) -> Option<ScreenEvent> {
        let pressed_at = self.pressed_at?;
        if !self.long_reported && now_ms.saturating_sub(pressed_at) >= self.long_press_ms {
            self.long_reported = true;
            return Some(ScreenEvent::LongPressed);
        }
        None
    }

    pub fn release(&mut self, now_ms: u64) -> Option<ScreenEvent> {
        let pressed_at = self.pressed_at.take()?;
        if self.long_reported {
            return None;
        }
        if now_ms.saturating_sub(pressed_at) >= self.long_press_ms {
            Some(ScreenEvent::LongPressed)
        } else {
            Some(ScreenEvent::Clicked)
        }
    }
}

impl Default for ButtonClassifier {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LONG_PRESS_MS)
    }
}
