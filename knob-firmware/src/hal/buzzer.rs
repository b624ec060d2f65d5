// Buzzer Player - spielt Ansage-Clips als Tonfolgen
//
// Aktiver Buzzer an einem GPIO: High = Ton, Low = Stille.
// Sprach-Samples gibt es auf dem Board nicht, jeder Clip wird über
// `clip_pattern()` in eine Folge aus Beeps und Pausen übersetzt.

use embassy_time::Timer;
use esp_hal::gpio::Output;

use knob_core::{AnnouncementClip, AnnouncementPlayer, AudioError, ToneStep, clip_pattern};

pub struct BuzzerPlayer<'a> {
    pin: Output<'a>,
}

impl<'a> BuzzerPlayer<'a> {
    pub fn new(mut pin: Output<'a>) -> Self {
        pin.set_low();
        Self { pin }
    }
}

impl AnnouncementPlayer for BuzzerPlayer<'_> {
    async fn play(&mut self, clip: AnnouncementClip) -> Result<(), AudioError> {
        for step in clip_pattern(clip) {
            match *step {
                ToneStep::Beep { ms } => {
                    self.pin.set_high();
                    Timer::after_millis(ms as u64).await;
                    self.pin.set_low();
                }
                ToneStep::Pause { ms } => Timer::after_millis(ms as u64).await,
            }
        }
        // Pin nie im High-Zustand zurücklassen
        self.pin.set_low();
        Ok(())
    }
}
