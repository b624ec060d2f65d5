//! Knob Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, Pure Functions und die Zustandsautomaten
//! des Zwei-Farben-Licht-Panels.

#![no_std]

pub mod announce;
pub mod input;
pub mod logic;
pub mod menu;
pub mod panel;
pub mod timing;
pub mod traits;
pub mod types;
pub mod ui;
pub mod view;

// Re-exports für einfachen Zugriff
pub use announce::{AnnounceError, Announcement, AnnouncementPipeline};
pub use input::{ButtonClassifier, QuadratureDecoder};
pub use logic::{LED_OFF, ToneStep, announcement_for, brightness_label, clip_pattern, light_color};
pub use menu::{MENU_ENTRIES, MenuEntry, MenuPanel};
pub use panel::{LightPanel, PanelRefresh, PanelResponse, PanelTiming};
pub use timing::IntervalGate;
pub use traits::{
    AlwaysPermit, AnnouncementPlayer, AudioError, DisplayError, LedError, PanelDisplay,
    RefreshPermit, SmartLedWriter,
};
pub use types::{
    AnnouncementClip, Brightness, ColorTemperature, InvalidBrightness, Key, LayerId,
    LightAttributes, ScreenEvent,
};
pub use ui::{Frame, UiController, UiOutput};
pub use view::{LevelIndicator, MenuView, PanelView};
