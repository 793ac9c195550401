use super::state::{EngineCommand, PlaybackControlState, PlaybackEvent, PlaybackRate};
use dioxus::logger::tracing::{debug, warn};
use std::fmt;

/// Error reported by a playback engine command.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// The media element backing the engine is not in the document.
    ElementMissing,
    /// The engine refused the command.
    Rejected(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::ElementMissing => write!(f, "media element is not mounted"),
            EngineError::Rejected(reason) => write!(f, "engine rejected command: {reason}"),
        }
    }
}

impl std::error::Error for EngineError {}

/// Capability set of the media primitive a playback control drives.
pub trait PlaybackEngine {
    fn play(&self) -> Result<(), EngineError>;
    fn pause(&self) -> Result<(), EngineError>;
    fn current_time(&self) -> f64;
    fn set_current_time(&self, seconds: f64) -> Result<(), EngineError>;
    /// Only meaningful after the loaded-metadata notification.
    fn duration(&self) -> f64;
    fn volume(&self) -> f64;
    fn set_volume(&self, volume: f64) -> Result<(), EngineError>;
    fn muted(&self) -> bool;
    fn set_muted(&self, muted: bool) -> Result<(), EngineError>;
    fn set_playback_rate(&self, rate: f64) -> Result<(), EngineError>;
}

/// User input on the control surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    TogglePlaying,
    Scrub(f64),
    /// Skip back by this many seconds.
    Rewind(f64),
    /// Skip ahead by this many seconds.
    FastForward(f64),
    ChangeRate(PlaybackRate),
    ToggleMuted,
    VolumeScrub(f64),
}

/// Notifications raised by the engine. They carry no payload; handlers
/// re-read the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    LoadedMetadata,
    TimeUpdate,
    Play,
    Pause,
    VolumeChange,
}

impl Gesture {
    /// Whether sampling this gesture reads the engine.
    pub fn reads_engine(self) -> bool {
        matches!(self, Gesture::Rewind(_) | Gesture::FastForward(_))
    }

    /// Build the reducer event, reading the engine where the gesture needs it.
    pub fn sample<E: PlaybackEngine + ?Sized>(self, engine: &E) -> PlaybackEvent {
        match self {
            Gesture::TogglePlaying => PlaybackEvent::TogglePlaying,
            Gesture::Scrub(to) => PlaybackEvent::Scrub { to },
            Gesture::Rewind(by) => PlaybackEvent::Rewind {
                from: engine.current_time(),
                by,
            },
            Gesture::FastForward(by) => PlaybackEvent::FastForward {
                from: engine.current_time(),
                by,
            },
            Gesture::ChangeRate(rate) => PlaybackEvent::ChangeRate(rate),
            Gesture::ToggleMuted => PlaybackEvent::ToggleMuted,
            Gesture::VolumeScrub(volume) => PlaybackEvent::VolumeScrub { volume },
        }
    }
}

impl Notification {
    pub fn reads_engine(self) -> bool {
        !matches!(self, Notification::Play | Notification::Pause)
    }

    pub fn sample<E: PlaybackEngine + ?Sized>(self, engine: &E) -> PlaybackEvent {
        match self {
            Notification::LoadedMetadata => PlaybackEvent::MetadataLoaded {
                duration: engine.duration(),
            },
            Notification::TimeUpdate => PlaybackEvent::TimeUpdated {
                current_time: engine.current_time(),
            },
            Notification::Play => PlaybackEvent::Played,
            Notification::Pause => PlaybackEvent::Paused,
            Notification::VolumeChange => PlaybackEvent::VolumeChanged {
                volume: engine.volume(),
                muted: engine.muted(),
            },
        }
    }
}

impl EngineCommand {
    pub fn execute<E: PlaybackEngine + ?Sized>(self, engine: &E) -> Result<(), EngineError> {
        match self {
            EngineCommand::Play => engine.play(),
            EngineCommand::Pause => engine.pause(),
            EngineCommand::Seek(seconds) => engine.set_current_time(seconds),
            EngineCommand::SetRate(rate) => engine.set_playback_rate(rate),
            EngineCommand::SetMuted(muted) => engine.set_muted(muted),
            EngineCommand::SetVolume(volume) => engine.set_volume(volume),
        }
    }
}

/// Run one event through the reducer and forward the resulting commands.
pub fn dispatch<E: PlaybackEngine + ?Sized>(
    state: &mut PlaybackControlState,
    engine: &E,
    event: PlaybackEvent,
) {
    for command in state.apply(event) {
        debug!(?command, origin = ?event.origin(), "engine command");
        if let Err(err) = command.execute(engine) {
            warn!(?command, "playback command failed: {err}");
            if command == EngineCommand::Play {
                // Optimistic play did not take; the engine is still paused.
                state.apply(PlaybackEvent::Paused);
            }
        }
    }
}

pub fn dispatch_gesture<E: PlaybackEngine + ?Sized>(
    state: &mut PlaybackControlState,
    engine: &E,
    gesture: Gesture,
) {
    let event = gesture.sample(engine);
    dispatch(state, engine, event);
}

pub fn dispatch_notification<E: PlaybackEngine + ?Sized>(
    state: &mut PlaybackControlState,
    engine: &E,
    notification: Notification,
) {
    let event = notification.sample(engine);
    dispatch(state, engine, event);
}
