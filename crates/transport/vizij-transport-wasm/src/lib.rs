use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use vizij_transport_core::{
    Clock, Config, Direction, Playback, PlayerCommand, PlayerStore, RawTime, TransportError,
};

/// Milliseconds from the JS host: `performance.now()` when the global has it,
/// `Date.now()` otherwise.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsClock;

impl Clock for JsClock {
    fn now(&self) -> RawTime {
        performance_now().unwrap_or_else(js_sys::Date::now)
    }
}

fn performance_now() -> Option<f64> {
    let perf = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("performance")).ok()?;
    if jsvalue_is_undefined_or_null(&perf) {
        return None;
    }
    let now: js_sys::Function = js_sys::Reflect::get(&perf, &JsValue::from_str("now"))
        .ok()?
        .dyn_into()
        .ok()?;
    now.call0(&perf).ok()?.as_f64()
}

#[wasm_bindgen]
pub struct VizijTransport {
    store: PlayerStore<JsClock>,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn js_err(e: TransportError) -> JsError {
    JsError::new(&format!("{} error: {e}", e.category()))
}

fn optional<T: serde::de::DeserializeOwned>(v: JsValue, what: &str) -> Result<Option<T>, JsError> {
    if jsvalue_is_undefined_or_null(&v) {
        return Ok(None);
    }
    swb::from_value(v)
        .map(Some)
        .map_err(|e| JsError::new(&format!("{what} error: {e}")))
}

#[wasm_bindgen]
impl VizijTransport {
    /// Create a transport. Pass a JSON config object or undefined/null for defaults.
    /// Example:
    ///   new VizijTransport({ default_duration_ms: 2400 })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<VizijTransport, JsError> {
        console_error_panic_hook::set_once();

        let cfg: Config = optional(config, "config")?.unwrap_or_default();
        Ok(VizijTransport {
            store: PlayerStore::new(JsClock, cfg),
        })
    }

    /// Current player record as a plain object.
    #[wasm_bindgen]
    pub fn player(&self) -> Result<JsValue, JsError> {
        swb::to_value(self.store.player()).map_err(|e| JsError::new(&format!("player error: {e}")))
    }

    /// Advance one frame (no-op while stopped). Returns the player record.
    #[wasm_bindgen]
    pub fn tick(&mut self) -> Result<JsValue, JsError> {
        self.store.tick();
        self.player()
    }

    /// Apply a command object (or array of commands) matching `PlayerCommand`.
    #[wasm_bindgen]
    pub fn apply(&mut self, cmds: JsValue) -> Result<(), JsError> {
        let s = js_sys::JSON::stringify(&cmds)
            .map_err(|e| JsError::new(&format!("apply stringify error: {:?}", e)))?
            .as_string()
            .ok_or_else(|| JsError::new("apply: stringify produced non-string"))?;
        self.store.apply_json(&s).map_err(js_err)
    }

    /// Start playback. `direction` is "forward", "reverse" or undefined.
    #[wasm_bindgen]
    pub fn play(&mut self, speed: Option<f64>, direction: JsValue) -> Result<(), JsError> {
        let direction: Option<Direction> = optional(direction, "direction")?;
        self.store
            .apply(PlayerCommand::Play { speed, direction })
            .map_err(js_err)
    }

    #[wasm_bindgen]
    pub fn pause(&mut self) -> Result<(), JsError> {
        self.store.apply(PlayerCommand::Pause).map_err(js_err)
    }

    #[wasm_bindgen]
    pub fn seek(&mut self, stamp: f64) -> Result<(), JsError> {
        self.store.apply(PlayerCommand::Seek { stamp }).map_err(js_err)
    }

    #[wasm_bindgen]
    pub fn reset(&mut self, stamp: Option<f64>) -> Result<(), JsError> {
        self.store.apply(PlayerCommand::Reset { stamp }).map_err(js_err)
    }

    #[wasm_bindgen(js_name = set_bounds)]
    pub fn set_bounds(&mut self, start: f64, end: f64) -> Result<(), JsError> {
        self.store
            .apply(PlayerCommand::SetBounds { start, end })
            .map_err(js_err)
    }

    #[wasm_bindgen(js_name = set_viewport)]
    pub fn set_viewport(&mut self, start: f64, end: f64) -> Result<(), JsError> {
        self.store
            .apply(PlayerCommand::SetViewport { start, end })
            .map_err(js_err)
    }

    #[wasm_bindgen(js_name = set_duration)]
    pub fn set_duration(&mut self, duration: f64) -> Result<(), JsError> {
        self.store
            .apply(PlayerCommand::SetDuration { duration })
            .map_err(js_err)
    }

    /// `playback` is "loop", "bounce" or "once".
    #[wasm_bindgen(js_name = set_playback)]
    pub fn set_playback(&mut self, playback: JsValue) -> Result<(), JsError> {
        let playback: Playback = optional(playback, "playback")?
            .ok_or_else(|| JsError::new("set_playback: playback is null/undefined"))?;
        self.store
            .apply(PlayerCommand::SetPlayback { playback })
            .map_err(js_err)
    }
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
