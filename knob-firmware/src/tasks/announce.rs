// Announcement Task - Audio-Worker für Helligkeits-Ansagen
use defmt::{debug, error, info, warn};
use embassy_time::Timer;

use knob_core::{AnnouncementPlayer, AudioError};

use crate::AnnouncePipeline;
use crate::config::ANNOUNCE_COOLDOWN_MS;
use crate::hal::BuzzerPlayer;

/// Announcement Logic - testbare Worker-Schleife
///
/// Wartet auf die nächste Helligkeit in der Queue, spielt den passenden
/// Clip (Wiedergabe-Semaphor + Refresh-Freigabe übernimmt die Pipeline)
/// und pausiert danach `ANNOUNCE_COOLDOWN_MS`.
///
/// Läuft für die gesamte Laufzeit; Einträge aus einer beendeten
/// Panel-Sitzung werden verworfen statt abgespielt.
pub async fn announcement_logic<P: AnnouncementPlayer>(
    mut player: P,
    pipeline: &AnnouncePipeline,
) -> ! {
    loop {
        let announcement = pipeline.next().await;
        let level = announcement.level();

        // Aus einer beendeten Panel-Sitzung (auch wenn das Panel inzwischen wieder aktiv ist)
        if !pipeline.is_current(&announcement) {
            debug!("Dropping stale announcement for {}%", level.percent());
            continue;
        }

        info!("Playing sound for current brightness: {}%", level.percent());
        match pipeline.play(announcement, &mut player).await {
            Ok(clip) => debug!("Clip {} done", clip),
            // Panel wurde zwischen Abfrage und Wiedergabe verlassen
            Err(AudioError::Skipped) => warn!("Announcement for {}% skipped", level.percent()),
            Err(e) => error!("Announcement for {}% failed: {}", level.percent(), e),
        }

        Timer::after_millis(ANNOUNCE_COOLDOWN_MS).await;
    }
}

/// Announcement Task - Embassy Task, einmal beim Boot gestartet
///
/// # Parameter
/// - `buzzer`: Buzzer-Player (GPIO bereits als Output konfiguriert)
/// - `pipeline`: Ansage-Pipeline, geteilt mit dem UI Task
#[embassy_executor::task]
pub async fn announcement_task(buzzer: BuzzerPlayer<'static>, pipeline: &'static AnnouncePipeline) {
    announcement_logic(buzzer, pipeline).await
}
