// Transcript paragraphs rendered under the playback controls.
use crate::components::{Icon, PlaybackController};
use crate::config::TranscriptLine;
use crate::playback::Gesture;
use crate::time_format::format_time;
use dioxus::prelude::*;

/// Index of the paragraph being spoken at `media_time`: the latest timed
/// paragraph that starts at or before it.
pub fn active_line(lines: &[TranscriptLine], media_time: f64) -> Option<usize> {
    lines
        .iter()
        .enumerate()
        .filter_map(|(idx, line)| line.start.map(|start| (idx, start)))
        .filter(|(_, start)| *start <= media_time)
        .max_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)))
        .map(|(idx, _)| idx)
}

/// Where a timestamp click should seek, kept inside the loaded media.
/// Before metadata arrives the duration is 0, so every target is 0.
pub fn seek_target(start: f64, duration: f64) -> f64 {
    start.clamp(0.0, duration.max(0.0))
}

/// Timestamps only seek once a controller exists and the media has a length.
fn timestamps_enabled(has_controller: bool, duration: f64) -> bool {
    has_controller && duration > 0.0
}

#[component]
pub fn Transcript(lines: Vec<TranscriptLine>) -> Element {
    let controller = try_use_context::<PlaybackController>();
    let state = controller.as_ref().map(|c| c.current());
    let active = state
        .as_ref()
        .and_then(|s| active_line(&lines, s.media_time));
    let duration = state.as_ref().map(|s| s.duration).unwrap_or(0.0);
    let seekable = timestamps_enabled(controller.is_some(), duration);

    rsx! {
        div { class: "transcript",
            for (idx, line) in lines.iter().enumerate() {
                p {
                    key: "{idx}",
                    class: if active == Some(idx) { "transcript-line active" } else { "transcript-line" },
                    if let Some(start) = line.start {
                        button {
                            r#type: "button",
                            class: "transcript-timestamp",
                            disabled: !seekable,
                            onclick: {
                                let controller = controller.clone();
                                move |_| {
                                    if let Some(controller) = controller.as_ref() {
                                        controller.gesture(Gesture::Scrub(seek_target(start, duration)));
                                    }
                                }
                            },
                            Icon { name: "clock".to_string(), class: "icon-small".to_string() }
                            {format_time(start)}
                        }
                    }
                    if let Some(speaker) = line.speaker.as_ref() {
                        span { class: "transcript-speaker", "{speaker}: " }
                    }
                    "{line.text}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(start: Option<f64>, text: &str) -> TranscriptLine {
        TranscriptLine {
            speaker: None,
            start,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_active_line_follows_media_time() {
        let lines = vec![
            line(Some(0.0), "intro"),
            line(None, "aside"),
            line(Some(12.0), "topic"),
            line(Some(40.5), "outro"),
        ];
        assert_eq!(active_line(&lines, 0.0), Some(0));
        assert_eq!(active_line(&lines, 11.9), Some(0));
        assert_eq!(active_line(&lines, 12.0), Some(2));
        assert_eq!(active_line(&lines, 100.0), Some(3));
    }

    #[test]
    fn test_active_line_without_timestamps() {
        let lines = vec![line(None, "one"), line(None, "two")];
        assert_eq!(active_line(&lines, 5.0), None);
        let lines = vec![line(Some(3.0), "late start")];
        assert_eq!(active_line(&lines, 1.0), None);
    }

    #[test]
    fn test_seek_target() {
        assert_eq!(seek_target(30.0, 120.0), 30.0);
        assert_eq!(seek_target(130.0, 120.0), 120.0);
        assert_eq!(seek_target(-2.0, 120.0), 0.0);
    }

    #[test]
    fn test_seek_target_before_metadata() {
        assert_eq!(seek_target(30.0, 0.0), 0.0);
        assert_eq!(seek_target(-2.0, 0.0), 0.0);
        assert!(!timestamps_enabled(true, 0.0));
        assert!(!timestamps_enabled(false, 120.0));
        assert!(timestamps_enabled(true, 120.0));
    }
}
