//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use rgb::RGB8;

use crate::types::AnnouncementClip;
use crate::view::{MenuView, PanelView};

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    WriteFailed,
}

/// Trait für SmartLED Hardware-Zugriff
///
/// Abstrahiert den Zugriff auf RGB LEDs (WS2812/Neopixel).
///
/// # Implementierungen
/// - **Production:** RmtLedWriter (ESP32 RMT Peripheral)
/// - **Testing:** MockLedWriter (in-memory Mock)
pub trait SmartLedWriter: Send {
    /// Schreibt eine RGB-Farbe auf die LED
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write(&mut self, color: RGB8) -> Result<(), LedError>;
}

/// Fehler-Typ für Audio-Wiedergabe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioError {
    /// Ansage verworfen weil das Panel nicht mehr aktiv ist
    Skipped,
    /// Ausgabegerät hat die Wiedergabe abgebrochen
    PlaybackFailed,
}

/// Trait für die Wiedergabe von Sprach-Clips
///
/// # Implementierungen
/// - **Production:** BuzzerPlayer (Tonfolgen auf GPIO-Buzzer)
/// - **Testing:** MockPlayer (zeichnet Clips auf)
#[allow(async_fn_in_trait)]
pub trait AnnouncementPlayer {
    /// Spielt einen Clip vollständig ab
    async fn play(&mut self, clip: AnnouncementClip) -> Result<(), AudioError>;
}

/// Fehler-Typ für Display-Ausgabe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayError {
    /// Controller hat die Initialisierung abgelehnt
    InitFailed,
    DrawFailed,
}

/// Trait für das runde Panel-Display
pub trait PanelDisplay {
    fn show_panel(&mut self, view: &PanelView) -> Result<(), DisplayError>;

    fn show_menu(&mut self, view: &MenuView) -> Result<(), DisplayError>;
}

/// Freigabe für einen Display-/LED-Refresh
///
/// Binäres Semaphor: `try_take()` verbraucht eine erteilte Freigabe
/// ohne zu warten.
pub trait RefreshPermit {
    fn try_take(&self) -> bool;
}

/// Immer erteilte Freigabe (für Layer ohne Audio-Kopplung und Tests)
pub struct AlwaysPermit;

impl RefreshPermit for AlwaysPermit {
    fn try_take(&self) -> bool {
        true
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LedError {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "WriteFailed")
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for AudioError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            AudioError::Skipped => defmt::write!(fmt, "Skipped"),
            AudioError::PlaybackFailed => defmt::write!(fmt, "PlaybackFailed"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DisplayError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            DisplayError::InitFailed => defmt::write!(fmt, "InitFailed"),
            DisplayError::DrawFailed => defmt::write!(fmt, "DrawFailed"),
        }
    }
}
