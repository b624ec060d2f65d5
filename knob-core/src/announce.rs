//! Ansage-Pipeline: UI-Pfad → Queue → Audio-Worker
//!
//! Producer ist die synchrone UI-Event-Loop (`request()`, nie blockierend),
//! Consumer ist ein eigener Task (`next()` + `play()`).
//!
//! - `queue`: begrenzte Queue mit Helligkeitsstufen
//! - `playback`: binäres Semaphor, serialisiert die Wiedergabe
//! - `refresh`: binäres Semaphor, gibt den nächsten Helligkeits-Refresh frei
//!
//! Der Raw-Mutex-Typ ist generisch: `CriticalSectionRawMutex` auf dem
//! Target, `NoopRawMutex` in Host-Tests.

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::{Channel, TrySendError};
use embassy_sync::mutex::Mutex;
use embassy_sync::signal::Signal;

use crate::logic::announcement_for;
use crate::traits::{AnnouncementPlayer, AudioError, RefreshPermit};
use crate::types::{AnnouncementClip, Brightness};

/// Fehler beim Einreihen einer Ansage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnounceError {
    /// Queue voll, Ansage verworfen
    QueueFull,
    /// Panel ist nicht aktiv
    Inactive,
}

/// Eingereihte Ansage
///
/// Trägt die Sitzung (Anzahl `activate()`-Aufrufe) in der sie angefordert
/// wurde. Ansagen aus einer früheren Sitzung werden nicht mehr abgespielt,
/// auch wenn das Panel inzwischen wieder aktiv ist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Announcement {
    level: Brightness,
    session: u32,
}

impl Announcement {
    pub fn level(&self) -> Brightness {
        self.level
    }
}

pub struct AnnouncementPipeline<M: RawMutex, const N: usize> {
    queue: Channel<M, Announcement, N>,
    playback: Mutex<M, ()>,
    refresh: Signal<M, ()>,
    active: AtomicBool,
    session: AtomicU32,
}

impl<M: RawMutex, const N: usize> AnnouncementPipeline<M, N> {
    pub const fn new() -> Self {
        Self {
            queue: Channel::new(),
            playback: Mutex::new(()),
            refresh: Signal::new(),
            active: AtomicBool::new(false),
            session: AtomicU32::new(0),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Panel wird angezeigt
    ///
    /// Erteilt eine erste Refresh-Freigabe, damit der erste Helligkeits-
    /// Refresh nach dem Betreten nicht auf eine Ansage wartet.
    pub fn activate(&self) {
        self.session.fetch_add(1, Ordering::AcqRel);
        self.active.store(true, Ordering::Release);
        self.refresh.signal(());
    }

    /// Panel wird verlassen: wartende Ansagen verwerfen
    pub fn deactivate(&self) {
        self.active.store(false, Ordering::Release);
        while self.queue.try_receive().is_ok() {}
        self.refresh.reset();
    }

    /// Reiht eine Ansage ein (nicht blockierend, aus dem UI-Pfad)
    ///
    /// Bei voller Queue wird die Refresh-Freigabe direkt erteilt, sonst
    /// bliebe die Anzeige auf dem alten Stand stehen.
    pub fn request(&self, level: Brightness) -> Result<(), AnnounceError> {
        if !self.is_active() {
            return Err(AnnounceError::Inactive);
        }
        let announcement = Announcement {
            level,
            session: self.session.load(Ordering::Acquire),
        };
        match self.queue.try_send(announcement) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => {
                self.refresh.signal(());
                Err(AnnounceError::QueueFull)
            }
        }
    }

    /// Anzahl wartender Ansagen
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Wartet auf die nächste Ansage (Worker-Seite)
    pub async fn next(&self) -> Announcement {
        self.queue.receive().await
    }

    /// `true` wenn die Ansage aus der laufenden Sitzung stammt und das
    /// Panel aktiv ist
    pub fn is_current(&self, announcement: &Announcement) -> bool {
        self.is_active() && announcement.session == self.session.load(Ordering::Acquire)
    }

    /// Spielt eine Ansage ab
    ///
    /// Hält das Wiedergabe-Semaphor für die Dauer des Clips und gibt zu
    /// Beginn den Refresh frei, so dass LED und Display mit dem Clip
    /// umschalten. Ansagen aus einer beendeten Sitzung liefern
    /// `AudioError::Skipped`.
    pub async fn play<P: AnnouncementPlayer>(
        &self,
        announcement: Announcement,
        player: &mut P,
    ) -> Result<AnnouncementClip, AudioError> {
        if !self.is_current(&announcement) {
            return Err(AudioError::Skipped);
        }

        let _playback = self.playback.lock().await;
        // Während auf das Semaphor gewartet wurde, kann das Panel verlassen worden sein
        if !self.is_current(&announcement) {
            return Err(AudioError::Skipped);
        }
        self.refresh.signal(());

        let clip = announcement_for(announcement.level);
        player.play(clip).await?;
        Ok(clip)
    }

    /// `true` solange ein Clip abgespielt wird
    pub fn is_playing(&self) -> bool {
        self.playback.try_lock().is_err()
    }
}

impl<M: RawMutex, const N: usize> Default for AnnouncementPipeline<M, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: RawMutex, const N: usize> RefreshPermit for AnnouncementPipeline<M, N> {
    fn try_take(&self) -> bool {
        self.refresh.try_take().is_some()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for AnnounceError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            AnnounceError::QueueFull => defmt::write!(fmt, "QueueFull"),
            AnnounceError::Inactive => defmt::write!(fmt, "Inactive"),
        }
    }
}
