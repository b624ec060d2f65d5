//! Gemeinsame Mocks für die Host-Tests
//!
//! Jede Test-Datei bindet dieses Modul mit `mod common;` ein.

#![allow(dead_code)]

use knob_core::{
    AnnouncementClip, AnnouncementPlayer, AudioError, DisplayError, LedError, MenuView,
    PanelDisplay, PanelView, SmartLedWriter,
};
use rgb::RGB8;

// ============================================================================
// Mock LED Writer
// ============================================================================

#[derive(Default)]
pub struct MockLedWriter {
    pub last_color: Option<RGB8>,
    pub write_count: usize,
    pub fail_next_write: bool,
}

impl MockLedWriter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SmartLedWriter for MockLedWriter {
    fn write(&mut self, color: RGB8) -> Result<(), LedError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(LedError::WriteFailed);
        }

        self.last_color = Some(color);
        self.write_count += 1;
        Ok(())
    }
}

// ============================================================================
// Mock Player
// ============================================================================

#[derive(Default)]
pub struct MockPlayer {
    pub played: Vec<AnnouncementClip>,
    pub fail_next_play: bool,
}

impl MockPlayer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AnnouncementPlayer for MockPlayer {
    async fn play(&mut self, clip: AnnouncementClip) -> Result<(), AudioError> {
        if self.fail_next_play {
            self.fail_next_play = false;
            return Err(AudioError::PlaybackFailed);
        }
        self.played.push(clip);
        Ok(())
    }
}

// ============================================================================
// Mock Display
// ============================================================================

#[derive(Default)]
pub struct MockDisplay {
    pub panel_frames: Vec<PanelView>,
    pub menu_frames: Vec<MenuView>,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_panel(&self) -> Option<&PanelView> {
        self.panel_frames.last()
    }
}

impl PanelDisplay for MockDisplay {
    fn show_panel(&mut self, view: &PanelView) -> Result<(), DisplayError> {
        self.panel_frames.push(view.clone());
        Ok(())
    }

    fn show_menu(&mut self, view: &MenuView) -> Result<(), DisplayError> {
        self.menu_frames.push(*view);
        Ok(())
    }
}
