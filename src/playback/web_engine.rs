// Browser-backed playback engine: drives the control's own <audio> element.
use super::engine::{EngineError, PlaybackEngine};
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

#[cfg(not(target_arch = "wasm32"))]
use serde::Deserialize;
#[cfg(not(target_arch = "wasm32"))]
use std::{cell::Cell, rc::Rc};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement};

/// Engine handle bound to an `<audio>` element by DOM id.
#[derive(Clone)]
pub struct WebAudioEngine {
    element_id: String,
    on_play_rejected: Option<Callback<()>>,
    #[cfg(not(target_arch = "wasm32"))]
    readings: Rc<Cell<ElementSnapshot>>,
}

#[cfg(not(target_arch = "wasm32"))]
/// Element readings taken in one `eval` round trip. `duration` is null in
/// JSON while it is NaN or infinite on the element.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ElementSnapshot {
    pub current_time: f64,
    pub duration: Option<f64>,
    pub volume: f64,
    pub muted: bool,
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for ElementSnapshot {
    fn default() -> Self {
        Self {
            current_time: 0.0,
            duration: None,
            volume: 1.0,
            muted: false,
        }
    }
}

impl WebAudioEngine {
    pub fn new(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
            on_play_rejected: None,
            #[cfg(not(target_arch = "wasm32"))]
            readings: Rc::new(Cell::new(ElementSnapshot::default())),
        }
    }

    /// Called when the browser rejects the play promise after `play` returned.
    pub fn on_play_rejected(mut self, callback: Callback<()>) -> Self {
        self.on_play_rejected = Some(callback);
        self
    }
}

#[cfg(target_arch = "wasm32")]
impl WebAudioEngine {
    fn audio(&self) -> Option<HtmlAudioElement> {
        let document = window()?.document()?;
        document
            .get_element_by_id(&self.element_id)?
            .dyn_into::<HtmlAudioElement>()
            .ok()
    }

    fn with_audio(&self, f: impl FnOnce(&HtmlAudioElement)) -> Result<(), EngineError> {
        let audio = self.audio().ok_or(EngineError::ElementMissing)?;
        f(&audio);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
fn js_reason(value: &wasm_bindgen::JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &"name".into())
                .ok()
                .and_then(|name| name.as_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(target_arch = "wasm32")]
impl PlaybackEngine for WebAudioEngine {
    fn play(&self) -> Result<(), EngineError> {
        let audio = self.audio().ok_or(EngineError::ElementMissing)?;
        let promise = audio
            .play()
            .map_err(|err| EngineError::Rejected(js_reason(&err)))?;
        let on_rejected = self.on_play_rejected;
        spawn(async move {
            if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                warn!("play request rejected: {}", js_reason(&err));
                if let Some(callback) = on_rejected {
                    callback.call(());
                }
            }
        });
        Ok(())
    }

    fn pause(&self) -> Result<(), EngineError> {
        let audio = self.audio().ok_or(EngineError::ElementMissing)?;
        audio
            .pause()
            .map_err(|err| EngineError::Rejected(js_reason(&err)))
    }

    fn current_time(&self) -> f64 {
        self.audio().map(|a| a.current_time()).unwrap_or(0.0)
    }

    fn set_current_time(&self, seconds: f64) -> Result<(), EngineError> {
        self.with_audio(|a| a.set_current_time(seconds))
    }

    fn duration(&self) -> f64 {
        self.audio().map(|a| a.duration()).unwrap_or(f64::NAN)
    }

    fn volume(&self) -> f64 {
        self.audio().map(|a| a.volume()).unwrap_or(1.0)
    }

    fn set_volume(&self, volume: f64) -> Result<(), EngineError> {
        self.with_audio(|a| a.set_volume(volume.clamp(0.0, 1.0)))
    }

    fn muted(&self) -> bool {
        self.audio().map(|a| a.muted()).unwrap_or(false)
    }

    fn set_muted(&self, muted: bool) -> Result<(), EngineError> {
        self.with_audio(|a| a.set_muted(muted))
    }

    fn set_playback_rate(&self, rate: f64) -> Result<(), EngineError> {
        self.with_audio(|a| a.set_playback_rate(rate))
    }
}

// Webview renderers have no direct DOM handle. Commands go through `eval`
// and report back asynchronously; reads come from the last snapshot, which
// the controller refreshes before any handler that reads the element.
#[cfg(not(target_arch = "wasm32"))]
const COMMAND_OK: &str = "ok";
#[cfg(not(target_arch = "wasm32"))]
const COMMAND_MISSING: &str = "missing";

#[cfg(not(target_arch = "wasm32"))]
fn command_script(element_id: &str, statement: &str) -> String {
    format!(
        r#"return (async function () {{
            const a = document.getElementById({element_id:?});
            if (!a) return "{COMMAND_MISSING}";
            try {{
                await {statement};
                return "{COMMAND_OK}";
            }} catch (e) {{
                return String((e && e.name) || e);
            }}
        }})();"#
    )
}

#[cfg(not(target_arch = "wasm32"))]
fn snapshot_script(element_id: &str) -> String {
    format!(
        r#"return (function () {{
            const a = document.getElementById({element_id:?});
            if (!a) return null;
            return {{
              current_time: Number.isFinite(a.currentTime) ? a.currentTime : 0,
              duration: Number.isFinite(a.duration) ? a.duration : null,
              volume: a.volume,
              muted: !!a.muted,
            }};
        }})();"#
    )
}

#[cfg(not(target_arch = "wasm32"))]
fn command_outcome(status: &str) -> Result<(), EngineError> {
    match status {
        COMMAND_OK => Ok(()),
        COMMAND_MISSING => Err(EngineError::ElementMissing),
        reason => Err(EngineError::Rejected(reason.to_string())),
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl WebAudioEngine {
    /// Replace the cached readings.
    pub fn store(&self, snapshot: ElementSnapshot) {
        self.readings.set(snapshot);
    }

    /// Read the element's state in one round trip and cache it.
    pub async fn refresh(&self) -> Result<ElementSnapshot, EngineError> {
        let eval = document::eval(&snapshot_script(&self.element_id));
        let snapshot = eval
            .join::<Option<ElementSnapshot>>()
            .await
            .map_err(|err| EngineError::Rejected(err.to_string()))?
            .ok_or(EngineError::ElementMissing)?;
        self.store(snapshot);
        Ok(snapshot)
    }

    fn command(&self, statement: &str, is_play: bool) -> Result<(), EngineError> {
        let eval = document::eval(&command_script(&self.element_id, statement));
        let on_rejected = self.on_play_rejected;
        let statement = statement.to_string();
        spawn(async move {
            let outcome = match eval.join::<String>().await {
                Ok(status) => command_outcome(&status),
                Err(err) => Err(EngineError::Rejected(err.to_string())),
            };
            if let Err(err) = outcome {
                warn!("{statement} failed: {err}");
                if is_play {
                    if let Some(callback) = on_rejected {
                        callback.call(());
                    }
                }
            }
        });
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PlaybackEngine for WebAudioEngine {
    fn play(&self) -> Result<(), EngineError> {
        self.command("a.play()", true)
    }

    fn pause(&self) -> Result<(), EngineError> {
        self.command("a.pause()", false)
    }

    fn current_time(&self) -> f64 {
        self.readings.get().current_time
    }

    fn set_current_time(&self, seconds: f64) -> Result<(), EngineError> {
        self.command(&format!("(a.currentTime = {seconds})"), false)
    }

    fn duration(&self) -> f64 {
        self.readings.get().duration.unwrap_or(f64::NAN)
    }

    fn volume(&self) -> f64 {
        self.readings.get().volume
    }

    fn set_volume(&self, volume: f64) -> Result<(), EngineError> {
        self.command(&format!("(a.volume = {})", volume.clamp(0.0, 1.0)), false)
    }

    fn muted(&self) -> bool {
        self.readings.get().muted
    }

    fn set_muted(&self, muted: bool) -> Result<(), EngineError> {
        self.command(&format!("(a.muted = {muted})"), false)
    }

    fn set_playback_rate(&self, rate: f64) -> Result<(), EngineError> {
        self.command(&format!("(a.playbackRate = {rate})"), false)
    }
}
