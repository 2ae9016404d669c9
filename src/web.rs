//! JavaScript bindings for the browser build (feature `web`).
//!
//! The page owns the frame loop: it forwards `mouseenter`/`mouseleave` to
//! [`BunAnimationHandle::hover_start`] / [`BunAnimationHandle::hover_end`]
//! and calls [`BunAnimationHandle::tick`] from `requestAnimationFrame`.
//! Every state change is published as a `bunpeek-state` `CustomEvent` on
//! `window` whose detail is the JSON snapshot.

use wasm_bindgen::prelude::*;
use web_time::{Duration, Instant};

use crate::animation::{AnimationState, BunAnimation};
use crate::icons::{order_icons, Icon};
use crate::options::DEFAULT_PRIORITY;

/// Name of the event dispatched on every state change.
pub const STATE_EVENT: &str = "bunpeek-state";

/// Route panics and `log` output to the browser console. Call once at
/// startup.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("console logger already installed");
    }
}

/// Hover sequencer exported to JavaScript.
#[wasm_bindgen]
pub struct BunAnimationHandle {
    inner: BunAnimation,
}

#[wasm_bindgen]
impl BunAnimationHandle {
    /// Sequencer with optional move and suspension durations in
    /// milliseconds (600 and 500 when omitted).
    #[wasm_bindgen(constructor)]
    pub fn new(
        animation_duration_ms: Option<u32>,
        suspension_time_ms: Option<u32>,
    ) -> Self {
        let animation =
            Duration::from_millis(animation_duration_ms.unwrap_or(600).into());
        let suspension =
            Duration::from_millis(suspension_time_ms.unwrap_or(500).into());
        let mut inner = BunAnimation::with_durations(animation, suspension);
        let _ = inner.subscribe(dispatch_state);
        Self { inner }
    }

    /// Pointer entered the trigger region. Returns false when a run (or its
    /// grace window) is still active.
    #[wasm_bindgen(js_name = hoverStart)]
    pub fn hover_start(&mut self) -> bool {
        self.inner.hover_start(Instant::now())
    }

    /// Pointer left the trigger region.
    #[wasm_bindgen(js_name = hoverEnd)]
    pub fn hover_end(&mut self) {
        self.inner.hover_end(Instant::now());
    }

    /// Fire due timers. Returns true if the state changed.
    pub fn tick(&mut self) -> bool {
        self.inner.update(Instant::now()).changed
    }

    /// Current snapshot as JSON.
    #[wasm_bindgen(js_name = stateJson)]
    pub fn state_json(&self) -> String {
        state_to_json(&self.inner.state())
    }

    /// Milliseconds until the next timer fires, if any are pending.
    #[wasm_bindgen(js_name = msUntilNextTimer)]
    pub fn ms_until_next_timer(&self) -> Option<f64> {
        let deadline = self.inner.next_deadline()?;
        Some(
            deadline
                .saturating_duration_since(Instant::now())
                .as_secs_f64()
                * 1000.0,
        )
    }
}

/// Order a JSON array of icon names with the default priority list and
/// return the ordered names as a JSON array.
#[wasm_bindgen(js_name = orderedIconNames)]
pub fn ordered_icon_names(names_json: &str) -> Result<String, JsError> {
    let names: Vec<String> = serde_json::from_str(names_json)
        .map_err(|e| JsError::new(&e.to_string()))?;
    let icons: Vec<Icon<()>> =
        names.into_iter().map(|name| Icon::new(name, ())).collect();
    let ordered: Vec<&str> = order_icons(&icons, &DEFAULT_PRIORITY)
        .into_iter()
        .map(|icon| icon.name.as_str())
        .collect();
    serde_json::to_string(&ordered).map_err(|e| JsError::new(&e.to_string()))
}

fn state_to_json(state: &AnimationState) -> String {
    serde_json::to_string(state).unwrap_or_default()
}

fn dispatch_state(state: &AnimationState) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let init = web_sys::CustomEventInit::new();
    init.set_detail(&JsValue::from_str(&state_to_json(state)));
    match web_sys::CustomEvent::new_with_event_init_dict(STATE_EVENT, &init) {
        Ok(event) => {
            if let Err(e) = window.dispatch_event(&event) {
                log::warn!("failed to dispatch {STATE_EVENT}: {e:?}");
            }
        }
        Err(e) => log::warn!("failed to create {STATE_EVENT}: {e:?}"),
    }
}
