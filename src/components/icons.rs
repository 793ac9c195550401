use dioxus::prelude::*;

/// Glyphs drawn by the playback control, all on a 24x24 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Glyph {
    Play,
    Pause,
    Rewind,
    FastForward,
    Volume,
    VolumeMuted,
    Clock,
    Dot,
}

impl Glyph {
    fn from_name(name: &str) -> Self {
        match name {
            "play" => Glyph::Play,
            "pause" => Glyph::Pause,
            "rewind" => Glyph::Rewind,
            "fast-forward" => Glyph::FastForward,
            "volume" => Glyph::Volume,
            "volume-muted" => Glyph::VolumeMuted,
            "clock" => Glyph::Clock,
            _ => Glyph::Dot,
        }
    }

    /// Filled shapes; everything else is drawn as a 2px outline.
    fn is_solid(self) -> bool {
        matches!(self, Glyph::Play | Glyph::Pause | Glyph::Dot)
    }

    fn paths(self) -> &'static [&'static str] {
        match self {
            Glyph::Play => &["M7 4.5v15a1 1 0 0 0 1.5.86l12-7.5a1 1 0 0 0 0-1.72l-12-7.5A1 1 0 0 0 7 4.5z"],
            Glyph::Pause => &["M6 4h4v16H6z", "M14 4h4v16h-4z"],
            // circular arrows, the skip length is spelled out next to them
            Glyph::Rewind => &["M4 4v5h5", "M4.6 9A8 8 0 1 1 4 13"],
            Glyph::FastForward => &["M20 4v5h-5", "M19.4 9A8 8 0 1 0 20 13"],
            Glyph::Volume => &[
                "M4 9h3l5-4v14l-5-4H4z",
                "M15.5 9a4 4 0 0 1 0 6",
                "M18.5 6a8 8 0 0 1 0 12",
            ],
            Glyph::VolumeMuted => &["M4 9h3l5-4v14l-5-4H4z", "M16 9.5l5 5", "M21 9.5l-5 5"],
            Glyph::Clock => &["M12 3a9 9 0 1 0 0 18a9 9 0 1 0 0-18z", "M12 7v5l3.5 2"],
            Glyph::Dot => &["M12 8a4 4 0 1 0 0 8a4 4 0 1 0 0-8z"],
        }
    }
}

#[component]
pub fn Icon(name: String, class: String) -> Element {
    let glyph = Glyph::from_name(&name);
    let (fill, stroke) = if glyph.is_solid() {
        ("currentColor", "none")
    } else {
        ("none", "currentColor")
    };

    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 24 24",
            fill: "{fill}",
            stroke: "{stroke}",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for d in glyph.paths() {
                path { d: "{d}" }
            }
        }
    }
}
