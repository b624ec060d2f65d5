// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
//
// Pin-Belegung (ESP32-C6 DevKit). esp-hal vergibt Pins als typisierte
// Peripherals, die Zuordnung steht deshalb direkt in bin/main.rs:
//   GPIO8  WS2812 LED (RMT)
//   GPIO2  Encoder Spur A, GPIO3 Encoder Spur B
//   GPIO9  Encoder-Taster (BOOT-Taste)
//   GPIO10 Buzzer
//   GPIO6  Display SDA, GPIO7 Display SCL (I2C0)

// ============================================================================
// LED Konfiguration
// ============================================================================

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

/// Anzahl der LEDs im Strip
pub const LED_COUNT: usize = 1;

// ============================================================================
// Eingabe Konfiguration (Drehencoder mit Taster)
// ============================================================================

/// Entprell-Zeit für den Taster in Millisekunden
pub const BUTTON_DEBOUNCE_MS: u64 = 20;

/// Haltezeit ab der ein Druck als "lang" gilt
pub const LONG_PRESS_MS: u64 = 400;

/// Abfrage-Intervall während der Taster gehalten wird
pub const BUTTON_POLL_MS: u64 = 25;

/// Kapazität der Eingabe-Queue (Encoder/Taster → UI Task)
pub const INPUT_QUEUE_DEPTH: usize = 8;

// ============================================================================
// UI Timing
// ============================================================================

/// Tick-Intervall der UI-Loop (Layer-Timer)
pub const UI_TICK_MS: u64 = 10;

/// Mindestabstand zwischen zwei LED-/Display-Refreshes
pub const REFRESH_INTERVAL_MS: u64 = 20;

/// Mindestabstand zwischen zwei akzeptierten Encoder-Schritten
/// Schnellere Drehungen werden verworfen
pub const KEY_GUARD_MS: u64 = 200;

// ============================================================================
// Audio Konfiguration
// ============================================================================

/// Kapazität der Ansage-Queue (UI → Audio Task)
pub const ANNOUNCE_QUEUE_DEPTH: usize = 4;

/// Pause nach jeder Ansage, bevor die nächste abgespielt wird
pub const ANNOUNCE_COOLDOWN_MS: u64 = 100;

// ============================================================================
// Display Konfiguration (SSD1306 OLED, 128x64)
// ============================================================================

/// I2C-Takt für das Display in kHz
pub const DISPLAY_I2C_KHZ: u32 = 400;

/// Display-Auflösung in Pixeln
pub const DISPLAY_WIDTH: i32 = 128;
pub const DISPLAY_HEIGHT: i32 = 64;

/// Stufen-Anzeige: vier Segmente am unteren Rand
pub const LEVEL_SEGMENT_WIDTH: u32 = 26;
pub const LEVEL_SEGMENT_HEIGHT: u32 = 8;
pub const LEVEL_SEGMENT_GAP: u32 = 4;
pub const LEVEL_BAR_Y: i32 = 52;

/// Durchmesser des Farbtemperatur-Symbols oben links
pub const TINT_ICON_DIAMETER: u32 = 12;
