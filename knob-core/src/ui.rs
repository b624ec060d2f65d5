//! Layer-Steuerung der UI-Loop
//!
//! Hält Licht-Panel und Menü, verteilt Eingabe-Events an die aktive Layer
//! und erledigt die Übergänge (Panel verlassen → LED aus + Ansagen stoppen,
//! Panel betreten → Pipeline aktivieren + Fokus).
//!
//! Keine Hardware-Zugriffe: jeder Schritt liefert ein `UiOutput`, das der
//! Aufrufer auf LED und Display anwendet und loggt.

use embassy_sync::blocking_mutex::raw::RawMutex;
use rgb::RGB8;

use crate::announce::{AnnounceError, AnnouncementPipeline};
use crate::menu::MenuPanel;
use crate::panel::{LightPanel, PanelResponse, PanelTiming};
use crate::types::{Brightness, LayerId, ScreenEvent};
use crate::view::{MenuView, PanelView};

/// Zu zeichnender Bildschirm
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Panel(PanelView),
    Menu(MenuView),
}

/// Ergebnis eines UI-Schritts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiOutput {
    /// Neue LED-Farbe
    pub led: Option<RGB8>,
    pub frame: Option<Frame>,
    /// Layer die in diesem Schritt betreten wurde
    pub entered: Option<LayerId>,
    /// Angeforderte Ansage und ob sie eingereiht wurde
    pub announcement: Option<(Brightness, Result<(), AnnounceError>)>,
}

pub struct UiController<'p, M: RawMutex, const N: usize> {
    pipeline: &'p AnnouncementPipeline<M, N>,
    panel: LightPanel,
    menu: MenuPanel,
    active: LayerId,
}

impl<'p, M: RawMutex, const N: usize> UiController<'p, M, N> {
    /// Noch nichts betreten; erst `start()` aktiviert Panel und Pipeline
    pub fn new(timing: PanelTiming, pipeline: &'p AnnouncementPipeline<M, N>) -> Self {
        Self {
            pipeline,
            panel: LightPanel::new(timing),
            menu: MenuPanel::default(),
            active: LayerId::LightPanel,
        }
    }

    pub fn active(&self) -> LayerId {
        self.active
    }

    pub fn panel(&self) -> &LightPanel {
        &self.panel
    }

    pub fn menu(&self) -> &MenuPanel {
        &self.menu
    }

    /// Erste Layer nach dem Boot: Licht-Panel
    pub fn start(&mut self, now_ms: u64) -> UiOutput {
        let mut out = UiOutput::default();
        self.enter(LayerId::LightPanel, now_ms, &mut out);
        out
    }

    pub fn on_event(&mut self, event: ScreenEvent, now_ms: u64) -> UiOutput {
        let mut out = UiOutput::default();

        let target = match self.active {
            LayerId::LightPanel => match self.panel.on_event(event, now_ms) {
                PanelResponse::None => None,
                PanelResponse::Announce(level) => {
                    out.announcement = Some((level, self.pipeline.request(level)));
                    None
                }
                PanelResponse::GoTo(layer) => Some(layer),
            },
            LayerId::Menu => {
                let target = self.menu.on_event(event);
                if target.is_none() {
                    out.frame = Some(Frame::Menu(self.menu.view()));
                }
                target
            }
        };

        if let Some(layer) = target {
            self.exit(&mut out);
            self.enter(layer, now_ms, &mut out);
        }
        out
    }

    /// Layer-Timer: nur das Panel hat periodische Arbeit
    pub fn on_tick(&mut self, now_ms: u64) -> UiOutput {
        let mut out = UiOutput::default();
        if self.active != LayerId::LightPanel {
            return out;
        }

        if let Some(refresh) = self.panel.on_timer(now_ms, self.pipeline) {
            out.led = Some(refresh.color);
            out.frame = Some(Frame::Panel(refresh.view));
        }
        out
    }

    fn enter(&mut self, layer: LayerId, now_ms: u64, out: &mut UiOutput) {
        self.active = layer;
        match layer {
            LayerId::LightPanel => {
                self.pipeline.activate();
                self.panel.on_enter(now_ms);
                self.panel.on_event(ScreenEvent::Focused, now_ms);
            }
            LayerId::Menu => out.frame = Some(Frame::Menu(self.menu.view())),
        }
        out.entered = Some(layer);
    }

    /// Panel verlassen: LED aus, wartende Ansagen verwerfen
    fn exit(&mut self, out: &mut UiOutput) {
        if self.active == LayerId::LightPanel {
            out.led = Some(self.panel.on_exit());
            self.pipeline.deactivate();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::LED_OFF;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    type Pipeline = AnnouncementPipeline<NoopRawMutex, 4>;

    #[test]
    fn test_start_enters_focused_panel() {
        let pipeline = Pipeline::new();
        let mut ui = UiController::new(PanelTiming::default(), &pipeline);
        let out = ui.start(0);

        assert_eq!(out.entered, Some(LayerId::LightPanel));
        assert!(ui.panel().is_editing());
        assert!(pipeline.is_active());
    }

    #[test]
    fn test_long_press_leaves_panel_for_menu() {
        let pipeline = Pipeline::new();
        let mut ui = UiController::new(PanelTiming::default(), &pipeline);
        ui.start(0);

        let out = ui.on_event(ScreenEvent::LongPressed, 500);
        assert_eq!(ui.active(), LayerId::Menu);
        assert_eq!(out.led, Some(LED_OFF));
        assert_eq!(out.entered, Some(LayerId::Menu));
        assert!(matches!(out.frame, Some(Frame::Menu(_))));
        assert!(!pipeline.is_active());
    }

    #[test]
    fn test_menu_ignores_ticks() {
        let pipeline = Pipeline::new();
        let mut ui = UiController::new(PanelTiming::default(), &pipeline);
        ui.start(0);
        ui.on_event(ScreenEvent::LongPressed, 500);
        assert_eq!(ui.on_tick(1000), UiOutput::default());
    }
}
