use std::fmt;

/// Playback rates offered by the rate buttons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaybackRate {
    Half,
    OneAndQuarter,
    OneAndHalf,
    OneAndThreeQuarters,
    Double,
}

impl PlaybackRate {
    pub const ALL: [PlaybackRate; 5] = [
        PlaybackRate::Half,
        PlaybackRate::OneAndQuarter,
        PlaybackRate::OneAndHalf,
        PlaybackRate::OneAndThreeQuarters,
        PlaybackRate::Double,
    ];

    pub fn as_f64(self) -> f64 {
        match self {
            PlaybackRate::Half => 0.5,
            PlaybackRate::OneAndQuarter => 1.25,
            PlaybackRate::OneAndHalf => 1.5,
            PlaybackRate::OneAndThreeQuarters => 1.75,
            PlaybackRate::Double => 2.0,
        }
    }
}

impl fmt::Display for PlaybackRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.as_f64())
    }
}

/// Where an event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOrigin {
    Gesture,
    Notification,
}

/// A single input to the reducer. Gesture variants carry whatever the handler
/// had to read from the engine before acting; notification variants carry the
/// engine readings taken when the notification fired.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaybackEvent {
    TogglePlaying,
    Scrub { to: f64 },
    Rewind { from: f64, by: f64 },
    FastForward { from: f64, by: f64 },
    ChangeRate(PlaybackRate),
    ToggleMuted,
    VolumeScrub { volume: f64 },
    MetadataLoaded { duration: f64 },
    TimeUpdated { current_time: f64 },
    Played,
    Paused,
    VolumeChanged { volume: f64, muted: bool },
}

impl PlaybackEvent {
    pub fn origin(&self) -> EventOrigin {
        match self {
            PlaybackEvent::TogglePlaying
            | PlaybackEvent::Scrub { .. }
            | PlaybackEvent::Rewind { .. }
            | PlaybackEvent::FastForward { .. }
            | PlaybackEvent::ChangeRate(_)
            | PlaybackEvent::ToggleMuted
            | PlaybackEvent::VolumeScrub { .. } => EventOrigin::Gesture,
            PlaybackEvent::MetadataLoaded { .. }
            | PlaybackEvent::TimeUpdated { .. }
            | PlaybackEvent::Played
            | PlaybackEvent::Paused
            | PlaybackEvent::VolumeChanged { .. } => EventOrigin::Notification,
        }
    }
}

/// Command the reducer asks the engine to carry out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineCommand {
    Play,
    Pause,
    Seek(f64),
    SetRate(f64),
    SetMuted(bool),
    SetVolume(f64),
}

/// UI-side mirror of the engine's transport state.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackControlState {
    pub is_playing: bool,
    pub duration: f64,
    pub media_time: f64,
    pub is_muted: bool,
    /// Last audible volume; mute toggling leaves it alone.
    pub volume: f64,
}

impl Default for PlaybackControlState {
    fn default() -> Self {
        Self {
            is_playing: false,
            duration: 0.0,
            media_time: 0.0,
            is_muted: false,
            volume: 1.0,
        }
    }
}

impl PlaybackControlState {
    /// Value the volume scrubber should display.
    pub fn effective_volume(&self) -> f64 {
        if self.is_muted {
            0.0
        } else {
            self.volume
        }
    }

    /// Apply one event and return the engine commands it produces.
    pub fn apply(&mut self, event: PlaybackEvent) -> Vec<EngineCommand> {
        match event {
            PlaybackEvent::TogglePlaying => {
                let was_playing = self.is_playing;
                self.is_playing = !was_playing;
                if was_playing {
                    vec![EngineCommand::Pause]
                } else {
                    vec![EngineCommand::Play]
                }
            }
            PlaybackEvent::Scrub { to } => {
                self.media_time = to;
                vec![EngineCommand::Seek(to)]
            }
            PlaybackEvent::Rewind { from, by } => {
                let target = (from - by).max(0.0);
                self.media_time = target;
                vec![EngineCommand::Seek(target)]
            }
            PlaybackEvent::FastForward { from, by } => {
                let target = (from + by).min(self.duration);
                self.media_time = target;
                vec![EngineCommand::Seek(target)]
            }
            PlaybackEvent::ChangeRate(rate) => vec![EngineCommand::SetRate(rate.as_f64())],
            PlaybackEvent::ToggleMuted => {
                self.is_muted = !self.is_muted;
                vec![EngineCommand::SetMuted(self.is_muted)]
            }
            PlaybackEvent::VolumeScrub { volume } => {
                self.volume = volume;
                let mut commands = vec![EngineCommand::SetVolume(volume)];
                // Raising the volume while muted unmutes instead of waiting for
                // the engine's queued volumechange to reconcile.
                if volume > 0.0 && self.is_muted {
                    self.is_muted = false;
                    commands.push(EngineCommand::SetMuted(false));
                }
                commands
            }
            PlaybackEvent::MetadataLoaded { duration } => {
                // Streams report an infinite duration and unloaded media NaN.
                self.duration = if duration.is_finite() && duration > 0.0 {
                    duration
                } else {
                    0.0
                };
                Vec::new()
            }
            PlaybackEvent::TimeUpdated { current_time } => {
                self.media_time = current_time;
                Vec::new()
            }
            PlaybackEvent::Played => {
                self.is_playing = true;
                Vec::new()
            }
            PlaybackEvent::Paused => {
                self.is_playing = false;
                Vec::new()
            }
            PlaybackEvent::VolumeChanged { volume, muted } => {
                if muted || volume == 0.0 {
                    self.is_muted = true;
                } else {
                    self.is_muted = false;
                    self.volume = volume;
                }
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(duration: f64, media_time: f64) -> PlaybackControlState {
        PlaybackControlState {
            duration,
            media_time,
            ..PlaybackControlState::default()
        }
    }

    #[test]
    fn test_initial_state() {
        let state = PlaybackControlState::default();
        assert!(!state.is_playing);
        assert_eq!(state.duration, 0.0);
        assert_eq!(state.media_time, 0.0);
        assert!(!state.is_muted);
        assert_eq!(state.volume, 1.0);
    }

    #[test]
    fn test_skip_clamps_for_all_positions() {
        for duration in [0.0, 7.5, 10.0, 15.0, 120.0, 3600.0] {
            let mut t = 0.0;
            while t <= duration {
                let mut state = loaded(duration, t);
                state.apply(PlaybackEvent::Rewind { from: t, by: 15.0 });
                assert_eq!(state.media_time, (t - 15.0f64).max(0.0));

                let mut state = loaded(duration, t);
                state.apply(PlaybackEvent::FastForward { from: t, by: 15.0 });
                assert_eq!(state.media_time, (t + 15.0f64).min(duration));

                t += 2.5;
            }
        }
    }

    #[test]
    fn test_fast_forward_then_rewind() {
        let mut state = loaded(120.0, 50.0);
        let commands = state.apply(PlaybackEvent::FastForward { from: 50.0, by: 15.0 });
        assert_eq!(state.media_time, 65.0);
        assert_eq!(commands, vec![EngineCommand::Seek(65.0)]);

        let commands = state.apply(PlaybackEvent::Rewind { from: 65.0, by: 15.0 });
        assert_eq!(state.media_time, 50.0);
        assert_eq!(commands, vec![EngineCommand::Seek(50.0)]);
    }

    #[test]
    fn test_fast_forward_clamps_to_duration() {
        let mut state = loaded(10.0, 2.0);
        state.apply(PlaybackEvent::FastForward { from: 2.0, by: 15.0 });
        assert_eq!(state.media_time, 10.0);
    }

    #[test]
    fn test_fast_forward_before_metadata_stays_at_zero() {
        let mut state = PlaybackControlState::default();
        let commands = state.apply(PlaybackEvent::FastForward { from: 0.0, by: 15.0 });
        assert_eq!(state.media_time, 0.0);
        assert_eq!(commands, vec![EngineCommand::Seek(0.0)]);
    }

    #[test]
    fn test_rewind_clamps_to_zero() {
        let mut state = loaded(60.0, 5.0);
        state.apply(PlaybackEvent::Rewind { from: 5.0, by: 15.0 });
        assert_eq!(state.media_time, 0.0);
    }

    #[test]
    fn test_toggle_playing_is_optimistic_and_involutive() {
        let mut state = PlaybackControlState::default();
        assert_eq!(state.apply(PlaybackEvent::TogglePlaying), vec![EngineCommand::Play]);
        assert!(state.is_playing);
        assert_eq!(state.apply(PlaybackEvent::TogglePlaying), vec![EngineCommand::Pause]);
        assert!(!state.is_playing);
    }

    #[test]
    fn test_play_pause_notifications() {
        let mut state = PlaybackControlState::default();
        state.apply(PlaybackEvent::Played);
        assert!(state.is_playing);
        state.apply(PlaybackEvent::Paused);
        assert!(!state.is_playing);
    }

    #[test]
    fn test_metadata_loaded_is_idempotent() {
        let mut state = PlaybackControlState::default();
        state.apply(PlaybackEvent::MetadataLoaded { duration: 93.4 });
        let first = state.clone();
        state.apply(PlaybackEvent::MetadataLoaded { duration: 93.4 });
        assert_eq!(state, first);
        assert_eq!(state.duration, 93.4);
    }

    #[test]
    fn test_metadata_loaded_non_finite_duration() {
        let mut state = PlaybackControlState::default();
        state.apply(PlaybackEvent::MetadataLoaded { duration: f64::INFINITY });
        assert_eq!(state.duration, 0.0);
        state.apply(PlaybackEvent::MetadataLoaded { duration: f64::NAN });
        assert_eq!(state.duration, 0.0);
    }

    #[test]
    fn test_time_update_mirrors_engine() {
        let mut state = loaded(100.0, 0.0);
        assert!(state.apply(PlaybackEvent::TimeUpdated { current_time: 42.25 }).is_empty());
        assert_eq!(state.media_time, 42.25);
    }

    #[test]
    fn test_scrub_sets_time_and_seeks() {
        let mut state = loaded(100.0, 0.0);
        let commands = state.apply(PlaybackEvent::Scrub { to: 33.3 });
        assert_eq!(state.media_time, 33.3);
        assert_eq!(commands, vec![EngineCommand::Seek(33.3)]);
    }

    #[test]
    fn test_change_rate_leaves_state_untouched() {
        let mut state = loaded(100.0, 12.0);
        let before = state.clone();
        let commands = state.apply(PlaybackEvent::ChangeRate(PlaybackRate::OneAndHalf));
        assert_eq!(commands, vec![EngineCommand::SetRate(1.5)]);
        assert_eq!(state, before);
    }

    #[test]
    fn test_toggle_muted_keeps_volume() {
        let mut state = PlaybackControlState {
            volume: 0.4,
            ..PlaybackControlState::default()
        };
        assert_eq!(state.apply(PlaybackEvent::ToggleMuted), vec![EngineCommand::SetMuted(true)]);
        assert!(state.is_muted);
        assert_eq!(state.volume, 0.4);
        assert_eq!(state.effective_volume(), 0.0);
        assert_eq!(state.apply(PlaybackEvent::ToggleMuted), vec![EngineCommand::SetMuted(false)]);
        assert_eq!(state.effective_volume(), 0.4);
    }

    #[test]
    fn test_volume_changed_invariant() {
        let cases = [
            (0.0, false),
            (0.0, true),
            (0.3, true),
            (0.3, false),
            (1.0, false),
        ];
        for (volume, muted) in cases {
            let mut state = PlaybackControlState {
                volume: 0.8,
                ..PlaybackControlState::default()
            };
            state.apply(PlaybackEvent::VolumeChanged { volume, muted });
            assert_eq!(state.is_muted, muted || volume == 0.0);
            if state.is_muted {
                assert_eq!(state.volume, 0.8);
            } else {
                assert_eq!(state.volume, volume);
            }
        }
    }

    #[test]
    fn test_volume_scrub_when_unmuted() {
        let mut state = PlaybackControlState::default();
        let commands = state.apply(PlaybackEvent::VolumeScrub { volume: 0.7 });
        assert_eq!(state.volume, 0.7);
        assert!(!state.is_muted);
        assert_eq!(commands, vec![EngineCommand::SetVolume(0.7)]);
    }

    #[test]
    fn test_volume_scrub_unmutes() {
        let mut state = PlaybackControlState {
            is_muted: true,
            ..PlaybackControlState::default()
        };
        let commands = state.apply(PlaybackEvent::VolumeScrub { volume: 0.5 });
        assert!(!state.is_muted);
        assert_eq!(
            commands,
            vec![EngineCommand::SetVolume(0.5), EngineCommand::SetMuted(false)]
        );
    }

    #[test]
    fn test_volume_scrub_to_zero_waits_for_engine() {
        let mut state = PlaybackControlState::default();
        let commands = state.apply(PlaybackEvent::VolumeScrub { volume: 0.0 });
        assert_eq!(commands, vec![EngineCommand::SetVolume(0.0)]);
        assert!(!state.is_muted);
        state.apply(PlaybackEvent::VolumeChanged { volume: 0.0, muted: false });
        assert!(state.is_muted);
    }

    #[test]
    fn test_event_origin() {
        assert_eq!(PlaybackEvent::TogglePlaying.origin(), EventOrigin::Gesture);
        assert_eq!(PlaybackEvent::VolumeScrub { volume: 1.0 }.origin(), EventOrigin::Gesture);
        assert_eq!(PlaybackEvent::Played.origin(), EventOrigin::Notification);
        assert_eq!(
            PlaybackEvent::VolumeChanged { volume: 1.0, muted: false }.origin(),
            EventOrigin::Notification
        );
    }

    #[test]
    fn test_rate_labels() {
        let labels: Vec<String> = PlaybackRate::ALL.iter().map(|r| r.to_string()).collect();
        assert_eq!(labels, vec!["0.5x", "1.25x", "1.5x", "1.75x", "2x"]);
    }
}
