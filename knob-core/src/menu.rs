//! Menü-Layer: Ziel des langen Tastendrucks
//!
//! Der Cursor bewegt sich mit dem Encoder, Klick öffnet den markierten Eintrag.

use crate::types::{Key, LayerId, ScreenEvent};
use crate::view::MenuView;

/// Ein Menü-Eintrag: Beschriftung und Ziel-Layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub target: LayerId,
}

/// Feste Eintragsliste des Geräte-Menüs
pub const MENU_ENTRIES: &[MenuEntry] = &[MenuEntry {
    label: "Licht",
    target: LayerId::LightPanel,
}];

pub struct MenuPanel {
    entries: &'static [MenuEntry],
    selected: usize,
}

impl MenuPanel {
    pub const fn new(entries: &'static [MenuEntry]) -> Self {
        Self {
            entries,
            selected: 0,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Verarbeitet ein Event, `Some(ziel)` wenn ein Layer geöffnet werden soll
    pub fn on_event(&mut self, event: ScreenEvent) -> Option<LayerId> {
        match event {
            ScreenEvent::Key(Key::Left) => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            ScreenEvent::Key(Key::Right) => {
                if self.selected + 1 < self.entries.len() {
                    self.selected += 1;
                }
                None
            }
            ScreenEvent::Clicked => self.entries.get(self.selected).map(|entry| entry.target),
            ScreenEvent::Focused | ScreenEvent::LongPressed => None,
        }
    }

    pub fn view(&self) -> MenuView {
        MenuView {
            entries: self.entries,
            selected: self.selected,
        }
    }
}

impl Default for MenuPanel {
    fn default() -> Self {
        Self::new(MENU_ENTRIES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_ENTRIES: &[MenuEntry] = &[
        MenuEntry {
            label: "Licht",
            target: LayerId::LightPanel,
        },
        MenuEntry {
            label: "Zurück",
            target: LayerId::Menu,
        },
    ];

    #[test]
    fn test_cursor_saturates() {
        let mut menu = MenuPanel::new(TWO_ENTRIES);
        menu.on_event(ScreenEvent::Key(Key::Left));
        assert_eq!(menu.selected(), 0);
        menu.on_event(ScreenEvent::Key(Key::Right));
        menu.on_event(ScreenEvent::Key(Key::Right));
        assert_eq!(menu.selected(), 1);
    }

    #[test]
    fn test_click_opens_selected_entry() {
        let mut menu = MenuPanel::default();
        assert_eq!(
            menu.on_event(ScreenEvent::Clicked),
            Some(LayerId::LightPanel)
        );
    }

    #[test]
    fn test_long_press_is_ignored() {
        let mut menu = MenuPanel::default();
        assert_eq!(menu.on_event(ScreenEvent::LongPressed), None);
    }
}
