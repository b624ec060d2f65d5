//! Licht-Panel: Zustandsautomat des Zwei-Farben-Bildschirms
//!
//! Der Firmware-UI-Task ruft die Methoden synchron aus seiner Event-Loop auf:
//! - `on_event()` für Encoder-/Taster-Events
//! - `on_timer()` periodisch (Tick), rate-limitiert durch ein eigenes Gate
//!
//! Hardware wird nie direkt angesprochen: Rückgabewerte beschreiben
//! was der Aufrufer mit LED, Display und Audio-Queue tun soll.

use rgb::RGB8;

use crate::logic::{LED_OFF, light_color};
use crate::timing::IntervalGate;
use crate::traits::RefreshPermit;
use crate::types::{Brightness, ColorTemperature, Key, LayerId, LightAttributes, ScreenEvent};
use crate::view::PanelView;

/// Zeitkonstanten des Panels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelTiming {
    /// Mindestabstand zwischen zwei LED-/Display-Refreshes
    pub refresh_ms: u64,
    /// Mindestabstand zwischen zwei akzeptierten Encoder-Schritten
    pub key_guard_ms: u64,
}

impl Default for PanelTiming {
    fn default() -> Self {
        Self {
            refresh_ms: 20,
            key_guard_ms: 200,
        }
    }
}

/// Antwort auf ein Eingabe-Event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelResponse {
    /// Nichts zu tun (Event verworfen oder nur Zustand geändert)
    None,
    /// Neue Helligkeit ansagen
    Announce(Brightness),
    /// Zu einem anderen Layer wechseln
    GoTo(LayerId),
}

/// Ergebnis eines Refreshs: neue LED-Farbe und Bildschirminhalt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelRefresh {
    pub attributes: LightAttributes,
    pub color: RGB8,
    pub view: PanelView,
}

pub struct LightPanel {
    current: LightAttributes,
    /// Zuletzt auf Hardware angewendeter Zustand, `None` erzwingt den ersten Refresh
    applied: Option<LightAttributes>,
    editing: bool,
    key_gate: IntervalGate,
    refresh_gate: IntervalGate,
}

impl LightPanel {
    pub const fn new(timing: PanelTiming) -> Self {
        Self {
            current: LightAttributes::new(Brightness::DEFAULT, ColorTemperature::Warm),
            applied: None,
            editing: false,
            key_gate: IntervalGate::new(timing.key_guard_ms),
            refresh_gate: IntervalGate::new(timing.refresh_ms),
        }
    }

    pub fn attributes(&self) -> LightAttributes {
        self.current
    }

    pub fn applied(&self) -> Option<LightAttributes> {
        self.applied
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Layer wird angezeigt: Startzustand 50 % warm, erster Refresh erzwungen
    pub fn on_enter(&mut self, now_ms: u64) {
        self.current = LightAttributes::default();
        self.applied = None;
        self.editing = false;
        self.key_gate.arm(now_ms);
        self.refresh_gate.arm(now_ms);
    }

    /// Layer wird verlassen: LED aus
    pub fn on_exit(&mut self) -> RGB8 {
        self.editing = false;
        LED_OFF
    }

    pub fn on_event(&mut self, event: ScreenEvent, now_ms: u64) -> PanelResponse {
        match event {
            ScreenEvent::Focused => {
                self.editing = true;
                PanelResponse::None
            }
            ScreenEvent::Key(key) => self.on_key(key, now_ms),
            ScreenEvent::Clicked => {
                self.current.temperature = self.current.temperature.toggled();
                PanelResponse::None
            }
            ScreenEvent::LongPressed => PanelResponse::GoTo(LayerId::Menu),
        }
    }

    fn on_key(&mut self, key: Key, now_ms: u64) -> PanelResponse {
        if !self.editing || !self.key_gate.is_elapsed(now_ms) {
            return PanelResponse::None;
        }

        let brightness = self.current.brightness;
        self.current.brightness = match key {
            Key::Right => brightness.step_up(),
            Key::Left => brightness.step_down(),
        };

        // Auch am Anschlag ansagen: der Nutzer hört dass die Grenze erreicht ist
        PanelResponse::Announce(self.current.brightness)
    }

    /// Periodischer Refresh
    ///
    /// Liefert nur dann etwas, wenn das Refresh-Gate offen ist und sich der
    /// Zustand seit dem letzten Refresh geändert hat. Eine Helligkeits-
    /// änderung braucht zusätzlich eine Freigabe vom Audio-Pfad.
    pub fn on_timer(&mut self, now_ms: u64, permit: &impl RefreshPermit) -> Option<PanelRefresh> {
        if !self.refresh_gate.is_elapsed(now_ms) {
            return None;
        }

        let current = self.current;
        if let Some(applied) = self.applied {
            if applied == current {
                // Freigabe einer Ansage ohne Zustandsänderung (z.B. am Anschlag) verwerfen
                permit.try_take();
                return None;
            }
            if applied.brightness != current.brightness && !permit.try_take() {
                return None;
            }
        }

        self.applied = Some(current);
        Some(PanelRefresh {
            attributes: current,
            color: light_color(current),
            view: PanelView::from_attributes(current),
        })
    }
}

impl Default for LightPanel {
    fn default() -> Self {
        Self::new(PanelTiming::default())
    }
}
