//! The components module contains the playback control and its companions.

mod icons;
mod player;
mod transcript;

pub use icons::*;
pub use player::*;
pub use transcript::*;
