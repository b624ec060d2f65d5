//! Core Types für das Zwei-Farben-Licht-Panel
//!
//! Datenstrukturen ohne Hardware-Dependencies

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Helligkeit in Prozent
///
/// Invariante: Wert ist immer ein Vielfaches von 25 im Bereich 0..=100.
/// Der Konstruktor weist alle anderen Werte ab, die Step-Funktionen
/// sättigen an den Grenzen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Brightness(u8);

impl Brightness {
    pub const STEP: u8 = 25;
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(100);
    pub const DEFAULT: Self = Self(50);

    /// Erstellt eine Helligkeit, `None` wenn der Wert nicht auf dem 25er-Raster liegt
    pub const fn new(percent: u8) -> Option<Self> {
        if percent <= Self::MAX.0 && percent % Self::STEP == 0 {
            Some(Self(percent))
        } else {
            None
        }
    }

    pub const fn percent(self) -> u8 {
        self.0
    }

    /// Stufen-Index 0..=4 (0 % → 0, 100 % → 4)
    pub const fn level_index(self) -> u8 {
        self.0 / Self::STEP
    }

    pub const fn is_off(self) -> bool {
        self.0 == 0
    }

    /// Eine Stufe heller, bleibt bei 100 % stehen
    pub const fn step_up(self) -> Self {
        if self.0 < Self::MAX.0 {
            Self(self.0 + Self::STEP)
        } else {
            self
        }
    }

    /// Eine Stufe dunkler, bleibt bei 0 % stehen
    pub const fn step_down(self) -> Self {
        if self.0 > Self::MIN.0 {
            Self(self.0 - Self::STEP)
        } else {
            self
        }
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for Brightness {
    type Error = InvalidBrightness;

    fn try_from(percent: u8) -> Result<Self, Self::Error> {
        Self::new(percent).ok_or(InvalidBrightness(percent))
    }
}

impl From<Brightness> for u8 {
    fn from(value: Brightness) -> Self {
        value.0
    }
}

/// Fehler: Prozentwert liegt nicht auf dem 25er-Raster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidBrightness(pub u8);

impl core::fmt::Display for InvalidBrightness {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "brightness {}% is not a multiple of 25 in 0..=100", self.0)
    }
}

/// Farbtemperatur der Leuchte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorTemperature {
    #[default]
    Warm,
    Cool,
}

impl ColorTemperature {
    /// Wechselt zwischen Warm und Kalt
    pub const fn toggled(self) -> Self {
        match self {
            Self::Warm => Self::Cool,
            Self::Cool => Self::Warm,
        }
    }

    /// Index für Bild-/Farbvarianten (0 = warm, 1 = kalt)
    pub const fn index(self) -> usize {
        match self {
            Self::Warm => 0,
            Self::Cool => 1,
        }
    }
}

/// Einstellbarer Zustand des Panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LightAttributes {
    pub brightness: Brightness,
    pub temperature: ColorTemperature,
}

impl LightAttributes {
    pub const fn new(brightness: Brightness, temperature: ColorTemperature) -> Self {
        Self {
            brightness,
            temperature,
        }
    }
}

/// Richtungs-Tasten (Encoder-Drehung wird als Tasten-Event geliefert)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
}

/// Eingabe-Events die ein Layer verarbeitet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEvent {
    /// Layer hat den Eingabe-Fokus bekommen
    Focused,
    /// Encoder-Drehung
    Key(Key),
    /// Kurzer Druck auf den Encoder-Taster
    Clicked,
    /// Langer Druck (einmal pro Betätigung)
    LongPressed,
}

/// Sprach-Clips, ein Clip pro Helligkeitsstufe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AnnouncementClip {
    ZeroPercent,
    TwentyFivePercent,
    FiftyPercent,
    SeventyFivePercent,
    OneHundredPercent,
}

/// Bildschirme (Layer) zwischen denen navigiert werden kann
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerId {
    LightPanel,
    Menu,
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Brightness {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}%", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ColorTemperature {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            ColorTemperature::Warm => defmt::write!(fmt, "Warm"),
            ColorTemperature::Cool => defmt::write!(fmt, "Kalt"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LightAttributes {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "LightAttributes {{ brightness: {}, temperature: {} }}",
            self.brightness,
            self.temperature
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Key {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Key::Left => defmt::write!(fmt, "Left"),
            Key::Right => defmt::write!(fmt, "Right"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ScreenEvent {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            ScreenEvent::Focused => defmt::write!(fmt, "Focused"),
            ScreenEvent::Key(key) => defmt::write!(fmt, "Key({})", key),
            ScreenEvent::Clicked => defmt::write!(fmt, "Clicked"),
            ScreenEvent::LongPressed => defmt::write!(fmt, "LongPressed"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for AnnouncementClip {
    fn format(&self, fmt: defmt::Formatter) {
        let name = match self {
            AnnouncementClip::ZeroPercent => "ZeroPercent",
            AnnouncementClip::TwentyFivePercent => "TwentyFivePercent",
            AnnouncementClip::FiftyPercent => "FiftyPercent",
            AnnouncementClip::SeventyFivePercent => "SeventyFivePercent",
            AnnouncementClip::OneHundredPercent => "OneHundredPercent",
        };
        defmt::write!(fmt, "{}", name)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LayerId {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LayerId::LightPanel => defmt::write!(fmt, "LightPanel"),
            LayerId::Menu => defmt::write!(fmt, "Menu"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brightness_rejects_off_grid_values() {
        assert_eq!(Brightness::new(30), None);
        assert_eq!(Brightness::new(125), None);
        assert_eq!(Brightness::new(75).map(Brightness::percent), Some(75));
    }

    #[test]
    fn test_brightness_steps_saturate() {
        assert_eq!(Brightness::MAX.step_up(), Brightness::MAX);
        assert_eq!(Brightness::MIN.step_down(), Brightness::MIN);
        assert_eq!(Brightness::DEFAULT.step_up().percent(), 75);
        assert_eq!(Brightness::DEFAULT.step_down().percent(), 25);
    }

    #[test]
    fn test_brightness_try_from() {
        assert_eq!(Brightness::try_from(100), Ok(Brightness::MAX));
        assert_eq!(Brightness::try_from(51), Err(InvalidBrightness(51)));
    }

    #[test]
    fn test_level_index() {
        assert_eq!(Brightness::MIN.level_index(), 0);
        assert_eq!(Brightness::DEFAULT.level_index(), 2);
        assert_eq!(Brightness::MAX.level_index(), 4);
    }

    #[test]
    fn test_color_temperature_toggle() {
        assert_eq!(ColorTemperature::Warm.toggled(), ColorTemperature::Cool);
        assert_eq!(ColorTemperature::Cool.toggled(), ColorTemperature::Warm);
        assert_eq!(ColorTemperature::default(), ColorTemperature::Warm);
    }

    #[test]
    fn test_light_attributes_default() {
        let attrs = LightAttributes::default();
        assert_eq!(attrs.brightness.percent(), 50);
        assert_eq!(attrs.temperature, ColorTemperature::Warm);
    }
}
