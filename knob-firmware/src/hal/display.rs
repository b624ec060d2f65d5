//! SSD1306 OLED (128x64) - Zeichnen von Panel und Menü
//!
//! Das Display ist monochrom: die Farbtemperatur wird als Symbol
//! dargestellt (gefüllte Sonne = warm, Umriss = kalt), die Helligkeit als
//! vier Segmente plus großes Label.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_10X20};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::{DisplayConfig, DisplayRotation, DisplaySize128x64, I2CInterface};
use ssd1306::{I2CDisplayInterface, Ssd1306};

use knob_core::{
    ColorTemperature, DisplayError, LevelIndicator, MenuView, PanelDisplay, PanelView,
};

use crate::config::{
    DISPLAY_HEIGHT, DISPLAY_WIDTH, LEVEL_BAR_Y, LEVEL_SEGMENT_GAP, LEVEL_SEGMENT_HEIGHT,
    LEVEL_SEGMENT_WIDTH, TINT_ICON_DIAMETER,
};

/// Konkreter Display-Treiber, generisch über die I2C-Implementierung
pub type Ssd1306Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Initialisiert das SSD1306 und löscht den Bildschirm
///
/// # Fehlerbehandlung
/// Gibt `DisplayError::InitFailed` zurück wenn der Controller nicht antwortet
pub fn init_ssd1306<I2C>(i2c: I2C) -> Result<Ssd1306Display<I2C>, DisplayError>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    display.init().map_err(|_| DisplayError::InitFailed)?;
    display.clear_buffer();
    display.flush().map_err(|_| DisplayError::InitFailed)?;
    Ok(display)
}

fn small_text() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyle::new(&FONT_6X10, BinaryColor::On)
}

fn on_fill() -> PrimitiveStyle<BinaryColor> {
    PrimitiveStyle::with_fill(BinaryColor::On)
}

fn on_stroke() -> PrimitiveStyle<BinaryColor> {
    PrimitiveStyle::with_stroke(BinaryColor::On, 1)
}

/// Linke Kante der Segment-Leiste (horizontal zentriert)
const fn level_bar_x() -> i32 {
    let bar_width = LEVEL_SEGMENT_WIDTH * 4 + LEVEL_SEGMENT_GAP * 3;
    (DISPLAY_WIDTH - bar_width as i32) / 2
}

fn draw_tint<D>(target: &mut D, tint: ColorTemperature) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let icon = Circle::new(Point::new(2, 2), TINT_ICON_DIAMETER);
    let (style, caption) = match tint {
        ColorTemperature::Warm => (on_fill(), "warm"),
        ColorTemperature::Cool => (on_stroke(), "kalt"),
    };
    icon.into_styled(style).draw(target)?;

    let caption_x = 2 + TINT_ICON_DIAMETER as i32 + 4;
    Text::with_baseline(caption, Point::new(caption_x, 3), small_text(), Baseline::Top)
        .draw(target)?;
    Ok(())
}

fn draw_level<D>(target: &mut D, level: LevelIndicator) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let x0 = level_bar_x();

    let segments = match level {
        LevelIndicator::Off => {
            // Licht aus: durchgestrichener Rahmen statt Segmente
            let width = LEVEL_SEGMENT_WIDTH * 4 + LEVEL_SEGMENT_GAP * 3;
            let frame = Rectangle::new(
                Point::new(x0, LEVEL_BAR_Y),
                Size::new(width, LEVEL_SEGMENT_HEIGHT),
            );
            frame.into_styled(on_stroke()).draw(target)?;
            let bottom = LEVEL_BAR_Y + LEVEL_SEGMENT_HEIGHT as i32 - 1;
            Line::new(
                Point::new(x0, bottom),
                Point::new(x0 + width as i32 - 1, LEVEL_BAR_Y),
            )
            .into_styled(on_stroke())
            .draw(target)?;
            return Ok(());
        }
        LevelIndicator::Lit { segments } => segments,
    };

    for index in 0..LevelIndicator::SEGMENTS {
        let x = x0 + (index as u32 * (LEVEL_SEGMENT_WIDTH + LEVEL_SEGMENT_GAP)) as i32;
        let style = if index < segments { on_fill() } else { on_stroke() };
        Rectangle::new(
            Point::new(x, LEVEL_BAR_Y),
            Size::new(LEVEL_SEGMENT_WIDTH, LEVEL_SEGMENT_HEIGHT),
        )
        .into_styled(style)
        .draw(target)?;
    }
    Ok(())
}

/// Zeichnet den Licht-Bildschirm in einen (bereits gelöschten) Puffer
pub fn draw_panel<D>(target: &mut D, view: &PanelView) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    draw_tint(target, view.tint)?;

    let centered = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Middle)
        .build();
    Text::with_text_style(
        view.label.as_str(),
        Point::new(DISPLAY_WIDTH / 2, DISPLAY_HEIGHT / 2 + 2),
        MonoTextStyle::new(&FONT_10X20, BinaryColor::On),
        centered,
    )
    .draw(target)?;

    draw_level(target, view.level)
}

/// Zeichnet das Menü: eine Zeile pro Eintrag, `>` vor der Auswahl
pub fn draw_menu<D>(target: &mut D, view: &MenuView) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    Text::with_baseline("MENU", Point::new(0, 0), small_text(), Baseline::Top).draw(target)?;
    Line::new(Point::new(0, 11), Point::new(DISPLAY_WIDTH - 1, 11))
        .into_styled(on_stroke())
        .draw(target)?;

    for (row, entry) in view.entries.iter().take(4).enumerate() {
        let y = 16 + row as i32 * 12;
        let marker = if row == view.selected { ">" } else { " " };
        Text::with_baseline(marker, Point::new(0, y), small_text(), Baseline::Top)
            .draw(target)?;
        Text::with_baseline(entry.label, Point::new(12, y), small_text(), Baseline::Top)
            .draw(target)?;
    }
    Ok(())
}

/// PanelDisplay-Implementierung für das SSD1306
///
/// Jeder Aufruf zeichnet den kompletten Bildschirm neu und überträgt den
/// Puffer; bei 128x64 Pixeln ist das schneller als Teil-Updates zu
/// verwalten.
pub struct PanelScreen<I2C> {
    display: Ssd1306Display<I2C>,
}

impl<I2C> PanelScreen<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    pub fn new(display: Ssd1306Display<I2C>) -> Self {
        Self { display }
    }
}

impl<I2C> PanelDisplay for PanelScreen<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn show_panel(&mut self, view: &PanelView) -> Result<(), DisplayError> {
        self.display.clear_buffer();
        draw_panel(&mut self.display, view).map_err(|_| DisplayError::DrawFailed)?;
        self.display.flush().map_err(|_| DisplayError::DrawFailed)
    }

    fn show_menu(&mut self, view: &MenuView) -> Result<(), DisplayError> {
        self.display.clear_buffer();
        draw_menu(&mut self.display, view).map_err(|_| DisplayError::DrawFailed)?;
        self.display.flush().map_err(|_| DisplayError::DrawFailed)
    }
}
