use crate::config::PlayerSettings;
use crate::playback::{
    dispatch_gesture, dispatch_notification, Gesture, Notification, PlaybackControlState,
    PlaybackEvent, WebAudioEngine,
};
#[cfg(not(target_arch = "wasm32"))]
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use uuid::Uuid;

mod controls;

use controls::{
    MuteButton, PlayPauseButton, RateButtons, SeekScrubber, SkipButtons, TimeReadout,
    VolumeScrubber,
};

/// Handle shared with the control buttons and the transcript through context.
#[derive(Clone)]
pub struct PlaybackController {
    state: Signal<PlaybackControlState>,
    engine: WebAudioEngine,
}

impl PlaybackController {
    pub fn new(state: Signal<PlaybackControlState>, engine: WebAudioEngine) -> Self {
        Self { state, engine }
    }

    fn gesture_now(&self, gesture: Gesture) {
        let mut state = self.state;
        state.with_mut(|state| dispatch_gesture(state, &self.engine, gesture));
    }

    fn notify_now(&self, notification: Notification) {
        let mut state = self.state;
        state.with_mut(|state| dispatch_notification(state, &self.engine, notification));
    }

    #[cfg(target_arch = "wasm32")]
    pub fn gesture(&self, gesture: Gesture) {
        self.gesture_now(gesture);
    }

    #[cfg(target_arch = "wasm32")]
    pub fn notify(&self, notification: Notification) {
        self.notify_now(notification);
    }

    // Webview renderers read the element asynchronously, so handlers that
    // read it wait for a fresh snapshot first.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn gesture(&self, gesture: Gesture) {
        if !gesture.reads_engine() {
            self.gesture_now(gesture);
            return;
        }
        let controller = self.clone();
        spawn(async move {
            match controller.engine.refresh().await {
                Ok(_) => controller.gesture_now(gesture),
                Err(err) => warn!(?gesture, "skipped, element unreadable: {err}"),
            }
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn notify(&self, notification: Notification) {
        if !notification.reads_engine() {
            self.notify_now(notification);
            return;
        }
        let controller = self.clone();
        spawn(async move {
            match controller.engine.refresh().await {
                Ok(_) => controller.notify_now(notification),
                Err(err) => warn!(?notification, "skipped, element unreadable: {err}"),
            }
        });
    }

    pub fn current(&self) -> PlaybackControlState {
        (self.state)()
    }
}

#[component]
pub fn PlaybackControl(
    src: String,
    transcript: Element,
    #[props(default)] settings: PlayerSettings,
) -> Element {
    let element_id = use_hook(|| format!("playback-{}", Uuid::new_v4()));
    let mut state = use_signal(PlaybackControlState::default);
    let on_play_rejected = use_callback(move |()| {
        state.with_mut(|state| {
            state.apply(PlaybackEvent::Paused);
        });
    });

    let controller = use_hook(|| {
        let engine = WebAudioEngine::new(element_id.clone()).on_play_rejected(on_play_rejected);
        PlaybackController::new(state, engine)
    });
    use_context_provider(|| controller.clone());
    let preload = settings.preload.clone();

    rsx! {
        div { class: "playback-control",
            div { class: "playback-controls",
                PlayPauseButton {}
                TimeReadout {}
                SeekScrubber {
                    input_id: format!("{element_id}-scrubber"),
                    step: settings.seek_step,
                }
                SkipButtons { skip_seconds: settings.skip_seconds }
                RateButtons {}
                MuteButton {}
                VolumeScrubber {
                    input_id: format!("{element_id}-volume"),
                    step: settings.volume_step,
                }
            }
            audio {
                id: "{element_id}",
                src: "{src}",
                preload: "{preload}",
                controls: settings.native_controls,
                onloadedmetadata: {
                    let controller = controller.clone();
                    move |_| controller.notify(Notification::LoadedMetadata)
                },
                ontimeupdate: {
                    let controller = controller.clone();
                    move |_| controller.notify(Notification::TimeUpdate)
                },
                onplay: {
                    let controller = controller.clone();
                    move |_| controller.notify(Notification::Play)
                },
                onpause: {
                    let controller = controller.clone();
                    move |_| controller.notify(Notification::Pause)
                },
                onvolumechange: {
                    let controller = controller.clone();
                    move |_| controller.notify(Notification::VolumeChange)
                },
            }
            div { class: "playback-transcript", {transcript} }
        }
    }
}
