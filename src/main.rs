use dioxus::logger::tracing::{info, warn, Level};
use dioxus::prelude::*;

mod components;
mod config;
mod playback;
mod time_format;

use components::{PlaybackControl, Transcript};
use config::Episode;

const PLAYER_CSS: Asset = asset!("/assets/styling/player.css");
const EPISODE_JSON: &str = include_str!("../assets/episode.json");

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {err}");
    }
    dioxus::launch(App);
}

fn load_episode() -> Episode {
    match Episode::from_json(EPISODE_JSON) {
        Ok(episode) => {
            info!(
                src = %episode.src,
                lines = episode.transcript.len(),
                "loaded episode manifest"
            );
            episode
        }
        Err(err) => {
            warn!("{err}; falling back to defaults");
            Episode::default()
        }
    }
}

#[component]
fn App() -> Element {
    let episode = use_hook(load_episode);

    rsx! {
        document::Title { {episode.title.clone().unwrap_or_else(|| "Transcript Player".to_string())} }
        document::Meta { name: "theme-color", content: "#a38449" }
        document::Stylesheet { href: PLAYER_CSS }

        main { class: "app",
            if let Some(title) = episode.title.as_ref() {
                h1 { class: "episode-title", "{title}" }
            }
            PlaybackControl {
                src: episode.src.clone(),
                settings: episode.settings.clone(),
                transcript: rsx! {
                    Transcript { lines: episode.transcript.clone() }
                },
            }
        }
    }
}
