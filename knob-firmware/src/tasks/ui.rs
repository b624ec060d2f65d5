// UI Task - GUI Event-Loop für Licht-Panel und Menü
use defmt::{debug, error, info, warn};
use embassy_futures::select::{Either, select};
use embassy_time::{Duration, Ticker};
use esp_hal_smartled::smart_led_buffer;

use knob_core::{Frame, PanelDisplay, PanelTiming, SmartLedWriter, UiController, UiOutput};

use crate::config::{KEY_GUARD_MS, LED_COUNT, REFRESH_INTERVAL_MS, RMT_CLOCK_MHZ, UI_TICK_MS};
use crate::hal::RmtLedWriter;
use crate::{AnnouncePipeline, InputEventReceiver, now_ms};

/// Ergebnis eines UI-Schritts auf LED und Display anwenden
///
/// Fehler werden geloggt, die Loop läuft weiter.
fn apply<L: SmartLedWriter, D: PanelDisplay>(led: &mut L, display: &mut D, out: UiOutput) {
    if let Some((level, queued)) = out.announcement {
        debug!("Brightness changed to {}%", level.percent());
        if let Err(e) = queued {
            warn!("Announcement for {}% not queued: {}", level.percent(), e);
        }
    }

    if let Some(color) = out.led {
        if let Err(e) = led.write(color) {
            error!("Failed to write to LED: {}", e);
        }
    }

    match out.frame {
        Some(Frame::Panel(view)) => {
            if let Err(e) = display.show_panel(&view) {
                error!("Failed to draw light panel: {}", e);
            }
        }
        Some(Frame::Menu(view)) => {
            if let Err(e) = display.show_menu(&view) {
                error!("Failed to draw menu: {}", e);
            }
        }
        None => {}
    }

    if let Some(layer) = out.entered {
        info!("Entered layer {}", layer);
    }
}

/// UI Logic - testbare Event-Loop ohne Hardware-Abhängigkeit
///
/// Verarbeitet Eingabe-Events synchron in der aktiven Layer und treibt
/// alle `UI_TICK_MS` deren Timer. Die Layer-Übergänge selbst erledigt
/// `UiController` aus knob-core.
///
/// # Parameter
/// - `led`: LED Writer (Hardware oder Mock)
/// - `display`: Panel-Display (Hardware oder Mock)
/// - `events`: Receiver für Encoder-/Taster-Events
/// - `pipeline`: Ansage-Pipeline, geteilt mit dem Audio Task
pub async fn ui_logic<L: SmartLedWriter, D: PanelDisplay>(
    mut led: L,
    mut display: D,
    events: InputEventReceiver,
    pipeline: &AnnouncePipeline,
) -> ! {
    let timing = PanelTiming {
        refresh_ms: REFRESH_INTERVAL_MS,
        key_guard_ms: KEY_GUARD_MS,
    };
    let mut ui = UiController::new(timing, pipeline);
    apply(&mut led, &mut display, ui.start(now_ms()));

    let mut ticker = Ticker::every(Duration::from_millis(UI_TICK_MS));
    loop {
        let out = match select(events.receive(), ticker.next()).await {
            Either::First(event) => ui.on_event(event, now_ms()),
            Either::Second(()) => ui.on_tick(now_ms()),
        };
        apply(&mut led, &mut display, out);
    }
}

/// UI Task - Embassy Task für parallele Ausführung
///
/// Initialisiert die LED-Hardware und ruft dann `ui_logic()` auf.
///
/// # Parameter
/// - `gpio8`: GPIO8 Peripheral für LED-Datenleitung
/// - `rmt_peripheral`: RMT Peripheral für präzises Timing
/// - `display`: bereits initialisiertes Panel-Display
/// - `events`: Receiver für Eingabe-Events
/// - `pipeline`: Ansage-Pipeline
#[embassy_executor::task]
pub async fn ui_task(
    gpio8: esp_hal::peripherals::GPIO8<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
    display: crate::hal::PanelScreen<esp_hal::i2c::master::I2c<'static, esp_hal::Blocking>>,
    events: InputEventReceiver,
    pipeline: &'static AnnouncePipeline,
) {
    // Buffer für SmartLED Daten erstellen
    let mut rmt_buffer = smart_led_buffer!(LED_COUNT);

    // Hardware-Init: ohne RMT gibt es kein Licht, Abbruch wie bei den anderen Peripherals
    let led = RmtLedWriter::new(gpio8, rmt_peripheral, RMT_CLOCK_MHZ, &mut rmt_buffer)
        .expect("Failed to initialize LED");

    ui_logic(led, display, events, pipeline).await
}
