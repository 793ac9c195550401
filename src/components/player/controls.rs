use super::PlaybackController;
use crate::components::Icon;
use crate::playback::{Gesture, PlaybackRate};
use crate::time_format::{format_human_read_time, format_time};
use dioxus::prelude::*;

fn skip_label(seconds: f64) -> String {
    if seconds.fract() == 0.0 {
        format!("{}", seconds as i64)
    } else {
        format!("{seconds}")
    }
}

/// Play/Pause button
#[component]
pub(super) fn PlayPauseButton() -> Element {
    let controller = use_context::<PlaybackController>();
    let playing = controller.current().is_playing;

    rsx! {
        button {
            r#type: "button",
            class: "control-button play-pause",
            onclick: move |_| controller.gesture(Gesture::TogglePlaying),
            if playing {
                Icon { name: "pause".to_string(), class: "icon".to_string() }
                "Pause"
            } else {
                Icon { name: "play".to_string(), class: "icon".to_string() }
                "Play"
            }
        }
    }
}

/// Elapsed and total time read-outs
#[component]
pub(super) fn TimeReadout() -> Element {
    let controller = use_context::<PlaybackController>();
    let state = controller.current();
    let elapsed = format_time(state.media_time);
    let total = format_time(state.duration);

    rsx! {
        span { class: "elapsed", "Elapsed time: {elapsed}" }
        span { class: "duration", "Total time: {total}" }
    }
}

#[component]
pub(super) fn SeekScrubber(input_id: String, step: f64) -> Element {
    let controller = use_context::<PlaybackController>();
    let state = controller.current();
    let narration = format_human_read_time(state.media_time);

    rsx! {
        label { r#for: "{input_id}", "Scrubber" }
        input {
            id: "{input_id}",
            r#type: "range",
            min: "0",
            max: "{state.duration}",
            step: "{step}",
            value: "{state.media_time}",
            "aria-valuetext": "{narration}",
            class: "scrubber",
            oninput: move |e: Event<FormData>| {
                if let Ok(seconds) = e.value().parse::<f64>() {
                    controller.gesture(Gesture::Scrub(seconds));
                }
            },
        }
    }
}

/// Rewind / fast-forward by the configured skip interval
#[component]
pub(super) fn SkipButtons(skip_seconds: f64) -> Element {
    let controller = use_context::<PlaybackController>();
    let label = skip_label(skip_seconds);

    rsx! {
        button {
            r#type: "button",
            class: "control-button",
            onclick: {
                let controller = controller.clone();
                move |_| controller.gesture(Gesture::Rewind(skip_seconds))
            },
            Icon { name: "rewind".to_string(), class: "icon".to_string() }
            "Rewind {label} sec"
        }
        button {
            r#type: "button",
            class: "control-button",
            onclick: move |_| controller.gesture(Gesture::FastForward(skip_seconds)),
            Icon {
                name: "fast-forward".to_string(),
                class: "icon".to_string(),
            }
            "Fast forward {label} sec"
        }
    }
}

#[component]
pub(super) fn RateButtons() -> Element {
    let controller = use_context::<PlaybackController>();

    rsx! {
        div { class: "rate-buttons",
            for rate in PlaybackRate::ALL {
                button {
                    key: "{rate}",
                    r#type: "button",
                    class: "control-button rate",
                    onclick: {
                        let controller = controller.clone();
                        move |_| controller.gesture(Gesture::ChangeRate(rate))
                    },
                    "{rate}"
                }
            }
        }
    }
}

#[component]
pub(super) fn MuteButton() -> Element {
    let controller = use_context::<PlaybackController>();
    let muted = controller.current().is_muted;

    rsx! {
        button {
            r#type: "button",
            class: "control-button mute",
            onclick: move |_| controller.gesture(Gesture::ToggleMuted),
            if muted {
                Icon {
                    name: "volume-muted".to_string(),
                    class: "icon".to_string(),
                }
                "Unmute"
            } else {
                Icon { name: "volume".to_string(), class: "icon".to_string() }
                "Mute"
            }
        }
    }
}

/// Volume scrubber - shows zero while muted
#[component]
pub(super) fn VolumeScrubber(input_id: String, step: f64) -> Element {
    let controller = use_context::<PlaybackController>();
    let volume = controller.current().effective_volume();

    rsx! {
        label { r#for: "{input_id}", class: "visually-hidden", "Volume" }
        input {
            id: "{input_id}",
            r#type: "range",
            min: "0",
            max: "1",
            step: "{step}",
            value: "{volume}",
            class: "volume-scrubber",
            oninput: move |e: Event<FormData>| {
                if let Ok(val) = e.value().parse::<f64>() {
                    controller.gesture(Gesture::VolumeScrub(val.clamp(0.0, 1.0)));
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::skip_label;

    #[test]
    fn test_skip_label() {
        assert_eq!(skip_label(15.0), "15");
        assert_eq!(skip_label(7.5), "7.5");
    }
}
