// Hardware Abstraction Layer (HAL) Module
//
// Konkrete Implementierungen der knob-core Traits für ESP32-C6:
// WS2812 über RMT, Buzzer über GPIO, SSD1306 über I2C.

pub mod buzzer;
pub mod display;
pub mod led_writer;

pub use buzzer::BuzzerPlayer;
pub use display::{PanelScreen, Ssd1306Display, init_ssd1306};
pub use led_writer::RmtLedWriter;
