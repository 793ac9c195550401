use serde::{Deserialize, Serialize};

/// Error type for loading the episode manifest.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Parse(String),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "failed to parse episode manifest: {msg}"),
            ConfigError::Invalid(msg) => write!(f, "invalid player settings: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Tunables for a playback control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSettings {
    #[serde(default = "default_skip_seconds")]
    pub skip_seconds: f64,
    #[serde(default = "default_step")]
    pub seek_step: f64,
    #[serde(default = "default_step")]
    pub volume_step: f64,
    #[serde(default = "default_true")]
    pub native_controls: bool,
    #[serde(default = "default_preload")]
    pub preload: String,
}

fn default_skip_seconds() -> f64 {
    15.0
}

fn default_step() -> f64 {
    0.1
}

fn default_true() -> bool {
    true
}

fn default_preload() -> String {
    "metadata".to_string()
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            skip_seconds: default_skip_seconds(),
            seek_step: default_step(),
            volume_step: default_step(),
            native_controls: true,
            preload: default_preload(),
        }
    }
}

impl PlayerSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.skip_seconds.is_finite() || self.skip_seconds <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "skip_seconds must be positive, got {}",
                self.skip_seconds
            )));
        }
        for (name, step) in [("seek_step", self.seek_step), ("volume_step", self.volume_step)] {
            if !step.is_finite() || step <= 0.0 || step > 1.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be in (0, 1], got {step}"
                )));
            }
        }
        if !matches!(self.preload.as_str(), "none" | "metadata" | "auto") {
            return Err(ConfigError::Invalid(format!(
                "preload must be none, metadata or auto, got {:?}",
                self.preload
            )));
        }
        Ok(())
    }
}

/// One transcript paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptLine {
    #[serde(default)]
    pub speaker: Option<String>,
    /// Offset into the media, in seconds.
    #[serde(default)]
    pub start: Option<f64>,
    pub text: String,
}

/// Media source plus the transcript shown under the controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub src: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub transcript: Vec<TranscriptLine>,
    #[serde(default)]
    pub settings: PlayerSettings,
}

impl Default for Episode {
    fn default() -> Self {
        Self {
            src: String::new(),
            title: None,
            transcript: Vec::new(),
            settings: PlayerSettings::default(),
        }
    }
}

impl Episode {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let episode: Episode =
            serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        if episode.src.trim().is_empty() {
            return Err(ConfigError::Invalid("src must not be empty".to_string()));
        }
        episode.settings.validate()?;
        Ok(episode)
    }
}
