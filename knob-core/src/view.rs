//! View-Modelle für das Display
//!
//! Beschreiben WAS angezeigt wird, gezeichnet wird im Firmware-Crate.

use heapless::String;

use crate::logic::{LABEL_CAPACITY, brightness_label};
use crate::menu::MenuEntry;
use crate::types::{ColorTemperature, LightAttributes};

/// Stufen-Anzeige rund um das Label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelIndicator {
    /// Licht aus ("geschlossen"-Symbol)
    Off,
    /// Anzahl leuchtender Segmente (1..=4)
    Lit { segments: u8 },
}

impl LevelIndicator {
    pub const SEGMENTS: u8 = 4;
}

/// Alles was der Licht-Bildschirm zeigt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    /// Farbvariante für Hintergrund und Stufen-Anzeige
    pub tint: ColorTemperature,
    pub level: LevelIndicator,
    pub label: String<LABEL_CAPACITY>,
}

impl PanelView {
    pub fn from_attributes(attrs: LightAttributes) -> Self {
        let level = if attrs.brightness.is_off() {
            LevelIndicator::Off
        } else {
            LevelIndicator::Lit {
                segments: attrs.brightness.level_index(),
            }
        };
        Self {
            tint: attrs.temperature,
            level,
            label: brightness_label(attrs.brightness),
        }
    }
}

/// Menü-Ansicht: Einträge plus markierter Index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuView {
    pub entries: &'static [MenuEntry],
    pub selected: usize,
}
