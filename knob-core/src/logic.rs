//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use core::fmt::Write;

use heapless::String;
use rgb::RGB8;

use crate::types::{AnnouncementClip, Brightness, ColorTemperature, LightAttributes};

/// LED ausgeschaltet
pub const LED_OFF: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

/// Vollausschlag der Kanäle bei kaltweiß
const COOL_FULL: RGB8 = RGB8 {
    r: 0xFF,
    g: 0xFF,
    b: 0xFF,
};

/// Vollausschlag der Kanäle bei warmweiß (Blau stark reduziert)
const WARM_FULL: RGB8 = RGB8 {
    r: 0xFF,
    g: 0xFF,
    b: 0x33,
};

/// Maximale Länge des Helligkeits-Labels ("100%")
pub const LABEL_CAPACITY: usize = 8;

/// Berechnet die LED-Farbe aus Helligkeit und Farbtemperatur
///
/// Jeder Kanal wird mit `(voll * prozent) / 100` skaliert.
///
/// # Beispiele
///
/// ```
/// # use knob_core::{light_color, Brightness, ColorTemperature, LightAttributes};
/// # use rgb::RGB8;
/// let attrs = LightAttributes::new(Brightness::MAX, ColorTemperature::Warm);
/// assert_eq!(light_color(attrs), RGB8 { r: 255, g: 255, b: 51 });
/// ```
pub fn light_color(attrs: LightAttributes) -> RGB8 {
    let full = match attrs.temperature {
        ColorTemperature::Cool => COOL_FULL,
        ColorTemperature::Warm => WARM_FULL,
    };
    let percent = attrs.brightness.percent();
    RGB8 {
        r: scale_channel(full.r, percent),
        g: scale_channel(full.g, percent),
        b: scale_channel(full.b, percent),
    }
}

fn scale_channel(full: u8, percent: u8) -> u8 {
    // percent <= 100, daher passt das Ergebnis immer in u8
    ((full as u16 * percent as u16) / 100) as u8
}

/// Wählt den Sprach-Clip für eine Helligkeitsstufe
pub fn announcement_for(brightness: Brightness) -> AnnouncementClip {
    match brightness.level_index() {
        0 => AnnouncementClip::ZeroPercent,
        1 => AnnouncementClip::TwentyFivePercent,
        2 => AnnouncementClip::FiftyPercent,
        3 => AnnouncementClip::SeventyFivePercent,
        _ => AnnouncementClip::OneHundredPercent,
    }
}

/// Text für das Helligkeits-Label: "50%" oder "--" wenn aus
pub fn brightness_label(brightness: Brightness) -> String<LABEL_CAPACITY> {
    let mut label = String::new();
    // Kapazität reicht immer für "100%"
    if brightness.is_off() {
        let _ = label.push_str("--");
    } else {
        let _ = write!(label, "{}%", brightness.percent());
    }
    label
}

/// Ein Schritt einer Buzzer-Tonfolge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneStep {
    Beep { ms: u32 },
    Pause { ms: u32 },
}

const SHORT_BEEP: ToneStep = ToneStep::Beep { ms: 80 };
const GAP: ToneStep = ToneStep::Pause { ms: 120 };

const PATTERN_ZERO: &[ToneStep] = &[ToneStep::Beep { ms: 400 }];
const PATTERN_25: &[ToneStep] = &[SHORT_BEEP];
const PATTERN_50: &[ToneStep] = &[SHORT_BEEP, GAP, SHORT_BEEP];
const PATTERN_75: &[ToneStep] = &[SHORT_BEEP, GAP, SHORT_BEEP, GAP, SHORT_BEEP];
const PATTERN_100: &[ToneStep] = &[
    SHORT_BEEP, GAP, SHORT_BEEP, GAP, SHORT_BEEP, GAP, SHORT_BEEP,
];

/// Tonfolge mit der ein Clip auf dem Buzzer wiedergegeben wird
///
/// 0 % ist ein langer Ton, jede 25 %-Stufe darüber ein kurzer Ton.
pub fn clip_pattern(clip: AnnouncementClip) -> &'static [ToneStep] {
    match clip {
        AnnouncementClip::ZeroPercent => PATTERN_ZERO,
        AnnouncementClip::TwentyFivePercent => PATTERN_25,
        AnnouncementClip::FiftyPercent => PATTERN_50,
        AnnouncementClip::SeventyFivePercent => PATTERN_75,
        AnnouncementClip::OneHundredPercent => PATTERN_100,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(percent: u8, temperature: ColorTemperature) -> LightAttributes {
        LightAttributes::new(Brightness::new(percent).unwrap(), temperature)
    }

    #[test]
    fn test_light_color_cool_full() {
        let color = light_color(attrs(100, ColorTemperature::Cool));
        assert_eq!(color, RGB8 { r: 255, g: 255, b: 255 });
    }

    #[test]
    fn test_light_color_warm_half() {
        // 255 * 50 / 100 = 127, 0x33 * 50 / 100 = 25
        let color = light_color(attrs(50, ColorTemperature::Warm));
        assert_eq!(color, RGB8 { r: 127, g: 127, b: 25 });
    }

    #[test]
    fn test_light_color_off_is_black() {
        assert_eq!(light_color(attrs(0, ColorTemperature::Warm)), LED_OFF);
        assert_eq!(light_color(attrs(0, ColorTemperature::Cool)), LED_OFF);
    }

    #[test]
    fn test_announcement_for_every_level() {
        let expected = [
            (0, AnnouncementClip::ZeroPercent),
            (25, AnnouncementClip::TwentyFivePercent),
            (50, AnnouncementClip::FiftyPercent),
            (75, AnnouncementClip::SeventyFivePercent),
            (100, AnnouncementClip::OneHundredPercent),
        ];
        for (percent, clip) in expected {
            assert_eq!(announcement_for(Brightness::new(percent).unwrap()), clip);
        }
    }

    #[test]
    fn test_brightness_label() {
        assert_eq!(brightness_label(Brightness::MIN).as_str(), "--");
        assert_eq!(brightness_label(Brightness::DEFAULT).as_str(), "50%");
        assert_eq!(brightness_label(Brightness::MAX).as_str(), "100%");
    }

    #[test]
    fn test_clip_pattern_beep_count_matches_level() {
        let beeps = |clip| {
            clip_pattern(clip)
                .iter()
                .filter(|step| matches!(step, ToneStep::Beep { .. }))
                .count()
        };
        assert_eq!(beeps(AnnouncementClip::ZeroPercent), 1);
        assert_eq!(beeps(AnnouncementClip::TwentyFivePercent), 1);
        assert_eq!(beeps(AnnouncementClip::SeventyFivePercent), 3);
        assert_eq!(beeps(AnnouncementClip::OneHundredPercent), 4);
    }
}
