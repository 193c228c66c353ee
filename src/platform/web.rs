//! Browser bindings
//!
//! JavaScript polls its buttons and keys, pushes commands, and calls
//! `frame()` from `requestAnimationFrame`. Each frame returns the scene as JSON
//! for the text overlay; `vertices()` returns the same scene as a triangle list
//! for the host's WebGPU pipeline.

use wasm_bindgen::prelude::*;

use crate::renderer::{Vertex, as_bytes, scene_vertices};
use crate::settings::{Geometry, LayoutPreset};
use crate::sim::{Command, Controller};

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Rocket Frames starting...");
}

fn now_ms() -> Option<f64> {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
}

/// Session handle owned by the host page
#[wasm_bindgen]
pub struct WebSimulation {
    controller: Controller,
    last_frame_ms: Option<f64>,
}

#[wasm_bindgen]
impl WebSimulation {
    /// Session sized for the given canvas width
    #[wasm_bindgen(constructor)]
    pub fn new(screen_width: u32) -> WebSimulation {
        let preset = LayoutPreset::for_screen_width(screen_width);
        log::info!("Layout preset: {}", preset.as_str());
        Self::with_geometry(Geometry::from_preset(preset))
    }

    /// Session from a JSON geometry document
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: &str) -> Result<WebSimulation, JsValue> {
        let geometry = Geometry::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::with_geometry(geometry))
    }

    fn with_geometry(geometry: Geometry) -> WebSimulation {
        WebSimulation {
            controller: Controller::new(geometry),
            last_frame_ms: None,
        }
    }

    pub fn start(&mut self) {
        self.controller.push(Command::Start);
    }

    pub fn pause(&mut self) {
        self.controller.push(Command::Pause);
    }

    pub fn resume(&mut self) {
        self.controller.push(Command::Resume);
    }

    pub fn stop(&mut self) {
        self.controller.push(Command::Stop);
    }

    #[wasm_bindgen(js_name = seekBackward)]
    pub fn seek_backward(&mut self, step: f64) {
        self.controller.push(Command::SeekBackward(step));
    }

    #[wasm_bindgen(js_name = seekForward)]
    pub fn seek_forward(&mut self, step: f64) {
        self.controller.push(Command::SeekForward(step));
    }

    #[wasm_bindgen(js_name = setVelocity)]
    pub fn set_velocity(&mut self, fraction: f64) {
        self.controller.push(Command::SetVelocity(fraction));
    }

    #[wasm_bindgen(js_name = toggleTransformMode)]
    pub fn toggle_transform_mode(&mut self) {
        self.controller.push(Command::ToggleTransformMode);
    }

    /// Advance by the wall time since the previous frame and return the scene JSON
    pub fn frame(&mut self) -> Result<String, JsValue> {
        let now = now_ms();
        let elapsed = match (now, self.last_frame_ms) {
            (Some(now), Some(last)) => (now - last).min(100.0),
            _ => 0.0,
        };
        self.last_frame_ms = now;

        let scene = self.controller.tick(elapsed);
        serde_json::to_string(&scene).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Current scene tessellated into `position: vec2f, color: vec4f` vertices
    pub fn vertices(&self) -> Vec<u8> {
        as_bytes(&scene_vertices(&self.controller.scene())).to_vec()
    }

    /// Byte stride of one vertex in [`vertices`](Self::vertices)
    #[wasm_bindgen(js_name = vertexStride)]
    pub fn vertex_stride() -> u32 {
        Vertex::desc().array_stride as u32
    }
}
