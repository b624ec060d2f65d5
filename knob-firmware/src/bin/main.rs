// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull};
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::time::Rate;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use knob_light_panel::config::DISPLAY_I2C_KHZ;
use knob_light_panel::hal::{BuzzerPlayer, PanelScreen, init_ssd1306};
use knob_light_panel::tasks::{announcement_task, button_task, encoder_task, ui_task};
use knob_light_panel::{AnnouncePipeline, InputEventChannel};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, startet Embassy Runtime und spawnt Tasks.
/// Danach schläft main() - alle Arbeit läuft in Tasks.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // Pin-Belegung siehe Kopf von config.rs
    // Display: SSD1306 an I2C0 (SDA = GPIO6, SCL = GPIO7)
    let i2c = I2c::new(
        peripherals.I2C0,
        I2cConfig::default().with_frequency(Rate::from_khz(DISPLAY_I2C_KHZ)),
    )
    .expect("Failed to initialize I2C")
    .with_sda(peripherals.GPIO6)
    .with_scl(peripherals.GPIO7);
    let display = PanelScreen::new(init_ssd1306(i2c).expect("Failed to initialize display"));

    // Encoder (GPIO2/GPIO3) und Taster (GPIO9, BOOT), alle active-low mit Pull-Up
    let pull_up = || InputConfig::default().with_pull(Pull::Up);
    let track_a = Input::new(peripherals.GPIO2, pull_up());
    let track_b = Input::new(peripherals.GPIO3, pull_up());
    let button = Input::new(peripherals.GPIO9, pull_up());

    // Buzzer an GPIO10
    let buzzer = BuzzerPlayer::new(Output::new(
        peripherals.GPIO10,
        Level::Low,
        OutputConfig::default(),
    ));

    // Eingabe-Channel (Encoder/Taster → UI Task)
    static INPUT_CHANNEL: static_cell::StaticCell<InputEventChannel> =
        static_cell::StaticCell::new();
    let input_channel = &*INPUT_CHANNEL.init(InputEventChannel::new());

    // Ansage-Pipeline (UI Task → Audio Task)
    // Queue + Wiedergabe-Semaphor + Refresh-Freigabe in einer Struktur
    static PIPELINE: static_cell::StaticCell<AnnouncePipeline> = static_cell::StaticCell::new();
    let pipeline = &*PIPELINE.init(AnnouncePipeline::new());

    // Audio-Worker läuft für die gesamte Laufzeit, das Panel (de)aktiviert ihn
    spawner
        .spawn(announcement_task(buzzer, pipeline))
        .unwrap();

    // Spawn UI Task (LED + Display + Layer-Logik)
    spawner
        .spawn(ui_task(
            peripherals.GPIO8,
            peripherals.RMT,
            display,
            input_channel.receiver(),
            pipeline,
        ))
        .unwrap();

    // Spawn Input Tasks
    spawner
        .spawn(encoder_task(track_a, track_b, input_channel.sender()))
        .unwrap();
    spawner
        .spawn(button_task(button, input_channel.sender()))
        .unwrap();

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
