// Library-Root: Hardware-Anbindung und Embassy Tasks für das Licht-Panel
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von knob-core
pub use knob_core::{
    AnnouncementPipeline, AnnouncementPlayer, Brightness, LightPanel, MenuPanel, PanelDisplay,
    ScreenEvent, SmartLedWriter,
};

// Embassy Channel-Typen
use embassy_sync::blocking_mutex::raw::{CriticalSectionRawMutex, NoopRawMutex};
use embassy_sync::channel::{Channel, Receiver, Sender};
use embassy_time::Instant;

use crate::config::{ANNOUNCE_QUEUE_DEPTH, INPUT_QUEUE_DEPTH};

/// Millisekunden seit Boot
///
/// Die Zustandsautomaten in knob-core rechnen mit nackten Millisekunden,
/// damit sie auf dem Host ohne embassy-time testbar bleiben.
pub fn now_ms() -> u64 {
    Instant::now().as_millis()
}

// ============================================================================
// Type-Aliase für Channel-Typen
// ============================================================================
//
// Statt:  Sender<'static, NoopRawMutex, ScreenEvent, 8>
// Nutze:  InputEventSender

/// Channel für Eingabe-Events (Encoder/Taster → UI Task)
pub type InputEventChannel = Channel<NoopRawMutex, ScreenEvent, INPUT_QUEUE_DEPTH>;

/// Sender für Eingabe-Events (Input Tasks)
pub type InputEventSender = Sender<'static, NoopRawMutex, ScreenEvent, INPUT_QUEUE_DEPTH>;

/// Receiver für Eingabe-Events (UI Task)
pub type InputEventReceiver = Receiver<'static, NoopRawMutex, ScreenEvent, INPUT_QUEUE_DEPTH>;

/// Ansage-Pipeline zwischen UI Task und Audio Task
///
/// Queue + Wiedergabe-Semaphor + Refresh-Freigabe. CriticalSectionRawMutex,
/// weil die Freigabe auch aus dem Audio Task heraus signalisiert wird.
pub type AnnouncePipeline = AnnouncementPipeline<CriticalSectionRawMutex, ANNOUNCE_QUEUE_DEPTH>;
