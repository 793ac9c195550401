//! Playback state mirroring and the engine seam it drives.

mod engine;
mod state;
mod web_engine;

pub use engine::*;
pub use state::*;
pub use web_engine::*;
