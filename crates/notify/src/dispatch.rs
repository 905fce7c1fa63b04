//! Transition dispatch: icon, pop-up, sound.

use std::time::Duration;

use netstatus_assets::Sound;
use netstatus_state::{Preferences, Transition};
use netstatus_tray::{IconKind, TrayHandle};

use crate::audio::AudioBackend;
use crate::backend::{NotificationBackend, Urgency};

/// Hold after starting a clip so playback start-up does not overlap the next
/// probe cycle.
pub const SOUND_GRACE: Duration = Duration::from_millis(250);

/// Notification summary line.
const APP_TITLE: &str = "NetStatus";

/// Side-effect dispatcher for connectivity transitions.
pub struct Notifier {
    notifications: Box<dyn NotificationBackend>,
    audio: Box<dyn AudioBackend>,
}

impl Notifier {
    pub fn new(notifications: Box<dyn NotificationBackend>, audio: Box<dyn AudioBackend>) -> Self {
        Self {
            notifications,
            audio,
        }
    }

    /// Applies one transition: global icon, optional pop-up, optional sound.
    ///
    /// Pop-up and playback failures are logged and swallowed; a lost cue is
    /// not worth taking the monitor down.
    pub async fn dispatch(&self, transition: Transition, prefs: &Preferences, tray: &TrayHandle) {
        let (icon, message, urgency, clip) = match transition {
            Transition::CameUp => (
                IconKind::Idle,
                "Internet connection is up.",
                Urgency::Normal,
                Sound::Online,
            ),
            Transition::WentDown => (
                IconKind::Error,
                "Internet connection is DOWN.",
                Urgency::Critical,
                Sound::Offline,
            ),
        };

        tray.set_icon(icon).await;

        if prefs.notifications_enabled() {
            if let Err(e) = self.notifications.push(APP_TITLE, message, urgency) {
                tracing::warn!(error = %e, "failed to push notification");
            }
        }

        if prefs.sounds_enabled() {
            match self.audio.play(clip.bytes()) {
                Ok(()) => tokio::time::sleep(SOUND_GRACE).await,
                Err(e) => tracing::error!(error = %e, "failed to play transition sound"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::AudioError;
    use crate::backend::NotifyError;
    use netstatus_tray::TrayUpdate;
    use std::sync::{Arc, Mutex};
    use std::time::Instant;

    #[derive(Default, Clone)]
    struct RecordingNotifications {
        pushes: Arc<Mutex<Vec<(String, String, Urgency)>>>,
    }

    impl NotificationBackend for RecordingNotifications {
        fn push(&self, title: &str, message: &str, urgency: Urgency) -> Result<(), NotifyError> {
            self.pushes
                .lock()
                .unwrap()
                .push((title.into(), message.into(), urgency));
            Ok(())
        }
    }

    #[derive(Default, Clone)]
    struct RecordingAudio {
        plays: Arc<Mutex<Vec<usize>>>,
        fail: bool,
    }

    impl AudioBackend for RecordingAudio {
        fn play(&self, clip: &'static [u8]) -> Result<(), AudioError> {
            if self.fail {
                return Err(AudioError::Decode("scripted failure".into()));
            }
            self.plays.lock().unwrap().push(clip.len());
            Ok(())
        }
    }

    fn notifier(
        notifications: RecordingNotifications,
        audio: RecordingAudio,
    ) -> Notifier {
        Notifier::new(Box::new(notifications), Box::new(audio))
    }

    #[tokio::test]
    async fn came_up_pushes_normal_urgency() {
        let pushes = RecordingNotifications::default();
        let audio = RecordingAudio::default();
        let n = notifier(pushes.clone(), audio.clone());
        let (tray, mut rx) = TrayHandle::new();

        n.dispatch(Transition::CameUp, &Preferences::default(), &tray)
            .await;

        let recorded = pushes.pushes.lock().unwrap();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].0, "NetStatus");
        assert_eq!(recorded[0].1, "Internet connection is up.");
        assert_eq!(recorded[0].2, Urgency::Normal);

        assert_eq!(rx.recv().await, Some(TrayUpdate::Icon(IconKind::Idle)));
        assert_eq!(audio.plays.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn went_down_pushes_critical_urgency() {
        let pushes = RecordingNotifications::default();
        let n = notifier(pushes.clone(), RecordingAudio::default());
        let (tray, mut rx) = TrayHandle::new();

        n.dispatch(Transition::WentDown, &Preferences::default(), &tray)
            .await;

        let recorded = pushes.pushes.lock().unwrap();
        assert_eq!(recorded[0].1, "Internet connection is DOWN.");
        assert_eq!(recorded[0].2, Urgency::Critical);

        assert_eq!(rx.recv().await, Some(TrayUpdate::Icon(IconKind::Error)));
    }

    #[tokio::test]
    async fn disabled_notifications_suppress_pushes() {
        let pushes = RecordingNotifications::default();
        let audio = RecordingAudio::default();
        let n = notifier(pushes.clone(), audio.clone());
        let (tray, _rx) = TrayHandle::new();
        let prefs = Preferences::new(true, false);

        n.dispatch(Transition::CameUp, &prefs, &tray).await;

        assert!(pushes.pushes.lock().unwrap().is_empty());
        // Sounds still play.
        assert_eq!(audio.plays.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn disabled_sounds_suppress_playback() {
        let audio = RecordingAudio::default();
        let n = notifier(RecordingNotifications::default(), audio.clone());
        let (tray, _rx) = TrayHandle::new();
        let prefs = Preferences::new(false, true);

        n.dispatch(Transition::WentDown, &prefs, &tray).await;

        assert!(audio.plays.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn icon_changes_even_with_all_cues_disabled() {
        let n = notifier(RecordingNotifications::default(), RecordingAudio::default());
        let (tray, mut rx) = TrayHandle::new();
        let prefs = Preferences::new(false, false);

        n.dispatch(Transition::WentDown, &prefs, &tray).await;

        assert_eq!(rx.recv().await, Some(TrayUpdate::Icon(IconKind::Error)));
    }

    #[tokio::test]
    async fn playback_holds_the_grace_delay() {
        let n = notifier(RecordingNotifications::default(), RecordingAudio::default());
        let (tray, _rx) = TrayHandle::new();

        let started = Instant::now();
        n.dispatch(Transition::CameUp, &Preferences::default(), &tray)
            .await;
        assert!(started.elapsed() >= SOUND_GRACE);
    }

    #[tokio::test]
    async fn playback_failure_skips_grace_and_survives() {
        let audio = RecordingAudio {
            fail: true,
            ..RecordingAudio::default()
        };
        let n = notifier(RecordingNotifications::default(), audio);
        let (tray, _rx) = TrayHandle::new();

        let started = Instant::now();
        n.dispatch(Transition::CameUp, &Preferences::default(), &tray)
            .await;
        assert!(started.elapsed() < SOUND_GRACE);
    }
}
