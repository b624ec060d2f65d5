//! Integration Tests für das Licht-Panel
//!
//! Diese Tests laufen auf dem Host (x86_64) und spielen die UI-Loop der
//! Firmware mit Mock-LED, Mock-Display und echter Ansage-Pipeline nach.

mod common;

use common::{MockDisplay, MockLedWriter, MockPlayer};
use embassy_futures::block_on;
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use knob_core::{
    AnnouncementClip, AnnouncementPipeline, Brightness, ColorTemperature, Key, LED_OFF, LayerId,
    LevelIndicator, LightPanel, PanelDisplay, PanelResponse, PanelTiming, ScreenEvent,
    SmartLedWriter,
};
use rgb::RGB8;

type Pipeline = AnnouncementPipeline<NoopRawMutex, 4>;

// ============================================================================
// Test-Harness: bildet ui_task nach
// ============================================================================

struct Harness {
    panel: LightPanel,
    pipeline: Pipeline,
    led: MockLedWriter,
    display: MockDisplay,
    now_ms: u64,
}

impl Harness {
    fn entered() -> Self {
        let mut harness = Self {
            panel: LightPanel::new(PanelTiming::default()),
            pipeline: Pipeline::new(),
            led: MockLedWriter::new(),
            display: MockDisplay::new(),
            now_ms: 0,
        };
        harness.panel.on_enter(0);
        harness.pipeline.activate();
        harness.panel.on_event(ScreenEvent::Focused, 0);
        harness
    }

    fn advance(&mut self, ms: u64) {
        self.now_ms += ms;
    }

    fn event(&mut self, event: ScreenEvent) -> PanelResponse {
        let response = self.panel.on_event(event, self.now_ms);
        if let PanelResponse::Announce(level) = response {
            let _ = self.pipeline.request(level);
        }
        response
    }

    /// Ein Timer-Tick, `true` wenn LED und Display aktualisiert wurden
    fn tick(&mut self) -> bool {
        match self.panel.on_timer(self.now_ms, &self.pipeline) {
            Some(refresh) => {
                let _ = self.led.write(refresh.color);
                let _ = self.display.show_panel(&refresh.view);
                true
            }
            None => false,
        }
    }

    /// Worker-Task: alle wartenden Ansagen abspielen
    fn drain_announcements(&mut self, player: &mut MockPlayer) {
        while self.pipeline.pending() > 0 {
            let announcement = block_on(self.pipeline.next());
            let _ = block_on(self.pipeline.play(announcement, player));
        }
    }

    fn exit(&mut self) {
        let off = self.panel.on_exit();
        self.pipeline.deactivate();
        let _ = self.led.write(off);
    }
}

// ============================================================================
// Tests: Betreten und erster Refresh
// ============================================================================

#[test]
fn test_first_refresh_shows_defaults() {
    let mut h = Harness::entered();
    h.advance(20);
    assert!(h.tick());

    assert_eq!(h.led.last_color, Some(RGB8 { r: 127, g: 127, b: 25 }));
    let view = h.display.last_panel().unwrap();
    assert_eq!(view.label.as_str(), "50%");
    assert_eq!(view.tint, ColorTemperature::Warm);
    assert_eq!(view.level, LevelIndicator::Lit { segments: 2 });
}

#[test]
fn test_refresh_is_rate_limited() {
    let mut h = Harness::entered();
    h.advance(5);
    assert!(!h.tick());
    h.advance(15);
    assert!(h.tick());
}

#[test]
fn test_duplicate_state_writes_led_once() {
    let mut h = Harness::entered();
    for _ in 0..10 {
        h.advance(20);
        h.tick();
    }
    assert_eq!(h.led.write_count, 1);
    assert_eq!(h.display.panel_frames.len(), 1);
}

// ============================================================================
// Tests: Helligkeit + Ansage
// ============================================================================

#[test]
fn test_brightness_change_waits_for_announcement() {
    let mut h = Harness::entered();
    let mut player = MockPlayer::new();
    h.advance(20);
    h.tick();

    h.advance(200);
    assert_eq!(
        h.event(ScreenEvent::Key(Key::Right)),
        PanelResponse::Announce(Brightness::new(75).unwrap())
    );
    assert_eq!(h.pipeline.pending(), 1);

    // Startfreigabe wurde vom ersten Refresh nicht verbraucht
    h.advance(20);
    assert!(h.tick());
    assert_eq!(h.led.last_color, Some(RGB8 { r: 191, g: 191, b: 38 }));

    h.advance(200);
    h.event(ScreenEvent::Key(Key::Right));
    h.advance(20);
    assert!(!h.tick());

    h.drain_announcements(&mut player);
    h.advance(20);
    assert!(h.tick());
    assert_eq!(h.led.last_color, Some(RGB8 { r: 255, g: 255, b: 51 }));
    assert_eq!(
        player.played,
        vec![
            AnnouncementClip::SeventyFivePercent,
            AnnouncementClip::OneHundredPercent
        ]
    );
}

#[test]
fn test_announcement_at_bound_does_not_release_next_change() {
    let mut h = Harness::entered();
    let mut player = MockPlayer::new();
    h.advance(20);
    h.tick();

    // Auf 100 % und alles ansagen lassen
    for _ in 0..2 {
        h.advance(200);
        h.event(ScreenEvent::Key(Key::Right));
    }
    h.drain_announcements(&mut player);
    h.advance(20);
    assert!(h.tick());
    assert_eq!(h.led.last_color, Some(RGB8 { r: 255, g: 255, b: 51 }));

    // Am Anschlag: Ansage läuft, Zustand bleibt gleich
    h.advance(200);
    h.event(ScreenEvent::Key(Key::Right));
    h.drain_announcements(&mut player);
    h.advance(20);
    assert!(!h.tick());

    // Echte Änderung muss auf ihre eigene Ansage warten
    h.advance(200);
    h.event(ScreenEvent::Key(Key::Left));
    h.advance(20);
    assert!(!h.tick());
    assert_eq!(h.pipeline.pending(), 1);

    h.drain_announcements(&mut player);
    h.advance(20);
    assert!(h.tick());
    assert_eq!(h.led.last_color, Some(RGB8 { r: 191, g: 191, b: 38 }));
}

#[test]
fn test_dimming_to_zero_shows_off_indicator() {
    let mut h = Harness::entered();
    let mut player = MockPlayer::new();
    for _ in 0..3 {
        h.advance(200);
        h.event(ScreenEvent::Key(Key::Left));
    }
    h.drain_announcements(&mut player);
    h.advance(20);
    h.tick();

    assert_eq!(h.led.last_color, Some(LED_OFF));
    let view = h.display.last_panel().unwrap();
    assert_eq!(view.label.as_str(), "--");
    assert_eq!(view.level, LevelIndicator::Off);
    assert_eq!(player.played.last(), Some(&AnnouncementClip::ZeroPercent));
}

#[test]
fn test_brightness_stays_on_grid() {
    let mut h = Harness::entered();
    let keys = [
        Key::Right,
        Key::Right,
        Key::Right,
        Key::Left,
        Key::Right,
        Key::Left,
        Key::Left,
        Key::Left,
        Key::Left,
        Key::Left,
    ];
    for key in keys {
        h.advance(200);
        h.event(ScreenEvent::Key(key));
        let percent = h.panel.attributes().brightness.percent();
        assert!(percent <= 100);
        assert_eq!(percent % 25, 0);
    }
    assert_eq!(h.panel.attributes().brightness, Brightness::MIN);
}

#[test]
fn test_full_queue_does_not_stall_display() {
    let mut h = Harness::entered();
    h.advance(20);
    h.tick();
    // Startfreigabe verbrauchen
    assert!(knob_core::RefreshPermit::try_take(&h.pipeline));

    for _ in 0..5 {
        h.advance(200);
        h.event(ScreenEvent::Key(Key::Left));
    }
    assert_eq!(h.pipeline.pending(), 4);

    // Fünfte Ansage lief auf volle Queue und hat den Refresh freigegeben
    h.advance(20);
    assert!(h.tick());
    assert_eq!(h.led.last_color, Some(LED_OFF));
}

// ============================================================================
// Tests: Farbtemperatur
// ============================================================================

#[test]
fn test_click_switches_to_cool_without_announcement() {
    let mut h = Harness::entered();
    h.advance(20);
    h.tick();

    h.event(ScreenEvent::Clicked);
    assert_eq!(h.pipeline.pending(), 0);
    h.advance(20);
    assert!(h.tick());
    assert_eq!(h.led.last_color, Some(RGB8 { r: 127, g: 127, b: 127 }));
    assert_eq!(h.display.last_panel().unwrap().tint, ColorTemperature::Cool);
}

// ============================================================================
// Tests: Navigation und Verlassen
// ============================================================================

#[test]
fn test_long_press_requests_menu() {
    let mut h = Harness::entered();
    assert_eq!(
        h.event(ScreenEvent::LongPressed),
        PanelResponse::GoTo(LayerId::Menu)
    );
}

#[test]
fn test_exit_turns_led_off_and_drops_announcements() {
    let mut h = Harness::entered();
    h.advance(200);
    h.event(ScreenEvent::Key(Key::Right));
    assert_eq!(h.pipeline.pending(), 1);

    h.exit();
    assert_eq!(h.led.last_color, Some(LED_OFF));
    assert_eq!(h.pipeline.pending(), 0);
    assert!(!h.pipeline.is_active());
}

#[test]
fn test_reenter_forces_refresh() {
    let mut h = Harness::entered();
    h.advance(20);
    h.tick();
    h.exit();

    h.panel.on_enter(h.now_ms);
    h.pipeline.activate();
    h.advance(20);
    assert!(h.tick());
    assert_eq!(h.led.write_count, 3);
}

// ============================================================================
// Tests: MockLedWriter
// ============================================================================

#[test]
fn test_led_failure_does_not_block_next_refresh() {
    let mut h = Harness::entered();
    h.led.fail_next_write = true;
    h.advance(20);
    assert!(h.tick());
    assert_eq!(h.led.write_count, 0);

    h.event(ScreenEvent::Clicked);
    h.advance(20);
    assert!(h.tick());
    assert_eq!(h.led.write_count, 1);
}
