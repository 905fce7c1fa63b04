//! Transition side effects: desktop pop-ups and audio cues.
//!
//! The OS notification daemon and the audio device layer are external
//! collaborators; this crate consumes them through the
//! [`NotificationBackend`] and [`AudioBackend`] capability contracts and
//! provides the default implementations used by the desktop app.

mod audio;
mod backend;
mod dispatch;

pub use audio::{AudioBackend, AudioError, CommandPlayer, WavFormat, parse_wav_header};
pub use backend::{DesktopNotifications, NotificationBackend, NotifyError, Urgency};
pub use dispatch::{Notifier, SOUND_GRACE};
