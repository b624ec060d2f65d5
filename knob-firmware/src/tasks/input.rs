// Input Tasks - Drehencoder und Taster → ScreenEvents
use defmt::{debug, info};
use embassy_futures::select::{Either, select};
use embassy_time::Timer;
use esp_hal::gpio::Input;

use knob_core::{ButtonClassifier, QuadratureDecoder, ScreenEvent};

use crate::config::{BUTTON_DEBOUNCE_MS, BUTTON_POLL_MS, LONG_PRESS_MS};
use crate::{InputEventSender, now_ms};

/// Event in die Queue stellen, ohne den Input Task zu blockieren
///
/// Ist die Queue voll, hängt die UI hinterher; das Event wird verworfen.
fn forward(sender: &InputEventSender, event: ScreenEvent) {
    if sender.try_send(event).is_err() {
        debug!("Input queue full, dropping {}", event);
    }
}

/// Encoder Task - dekodiert die beiden Spuren flankengesteuert
///
/// Jede vollständige Rastung erzeugt genau ein `ScreenEvent::Key`.
#[embassy_executor::task]
pub async fn encoder_task(
    mut track_a: Input<'static>,
    mut track_b: Input<'static>,
    sender: InputEventSender,
) {
    let mut decoder = QuadratureDecoder::new(track_a.is_high(), track_b.is_high());
    info!("Encoder task started");

    loop {
        select(track_a.wait_for_any_edge(), track_b.wait_for_any_edge()).await;

        if let Some(key) = decoder.update(track_a.is_high(), track_b.is_high()) {
            forward(&sender, ScreenEvent::Key(key));
        }
    }
}

/// Taster Task - entprellt und unterscheidet Klick / langen Druck
///
/// Taster ist active-low (interner Pull-Up). Während er gehalten wird,
/// wird alle `BUTTON_POLL_MS` geprüft ob die Lang-Druck-Schwelle erreicht
/// ist, damit `LongPressed` schon vor dem Loslassen ausgelöst wird.
#[embassy_executor::task]
pub async fn button_task(mut button: Input<'static>, sender: InputEventSender) {
    let mut classifier = ButtonClassifier::new(LONG_PRESS_MS);
    info!("Button task started");

    loop {
        button.wait_for_falling_edge().await;

        // Entprellen: nach kurzer Wartezeit muss der Taster noch gedrückt sein
        Timer::after_millis(BUTTON_DEBOUNCE_MS).await;
        if !button.is_low() {
            continue;
        }

        classifier.press(now_ms());

        loop {
            match select(button.wait_for_high(), Timer::after_millis(BUTTON_POLL_MS)).await {
                Either::First(()) => {
                    if let Some(event) = classifier.release(now_ms()) {
                        forward(&sender, event);
                    }
                    break;
                }
                Either::Second(()) => {
                    if let Some(event) = classifier.poll(now_ms()) {
                        forward(&sender, event);
                    }
                }
            }
        }

        // Prellen beim Loslassen ignorieren
        Timer::after_millis(BUTTON_DEBOUNCE_MS).await;
    }
}
