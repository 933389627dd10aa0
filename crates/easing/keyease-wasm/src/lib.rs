use js_sys::{Array, JSON};
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use keyease_core::{
    CurveKind, KeyframeInterval, PlaceholderSet, PresetConfig, PresetError, PresetLibrary,
};

#[wasm_bindgen]
pub struct KeyEase {
    core: PresetLibrary,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn js_err(e: PresetError) -> JsError {
    JsError::new(&e.to_string())
}

fn kinds_to_array(kinds: Vec<CurveKind>) -> Array {
    kinds
        .into_iter()
        .map(|k| JsValue::from_str(&k.name()))
        .collect()
}

#[wasm_bindgen]
impl KeyEase {
    /// Create a preset library. Pass a JSON config object or undefined/null for defaults.
    /// Example:
    ///   new KeyEase({ literal_precision: 4 })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<KeyEase, JsError> {
        console_error_panic_hook::set_once();

        let cfg = if jsvalue_is_undefined_or_null(&config) {
            PresetConfig::default()
        } else {
            // Stringify so partial objects go through the core's defaulting parser
            let text = JSON::stringify(&config)
                .map_err(|e| JsError::new(&format!("config stringify error: {:?}", e)))?
                .as_string()
                .ok_or_else(|| JsError::new("config: stringify produced non-string"))?;
            PresetConfig::from_json(&text).map_err(js_err)?
        };

        Ok(KeyEase {
            core: PresetLibrary::new(cfg),
        })
    }

    /// Every curve name `evaluate` accepts.
    #[wasm_bindgen(js_name = listCurveKinds)]
    pub fn list_curve_kinds(&self) -> Array {
        kinds_to_array(self.core.list_curve_kinds())
    }

    /// Curve names that have a preset template.
    #[wasm_bindgen(js_name = presetKinds)]
    pub fn preset_kinds(&self) -> Array {
        kinds_to_array(self.core.preset_kinds())
    }

    /// Parsed template as `{ curve, convention, shape, regions: [{ role, text }] }`.
    #[wasm_bindgen(js_name = getTemplate)]
    pub fn get_template(&self, name: String) -> Result<JsValue, JsError> {
        let template = self.core.get_template(&name).map_err(js_err)?;
        swb::to_value(&template).map_err(|e| JsError::new(&format!("template error: {e}")))
    }

    /// Host expression text for one keyframe interval.
    #[wasm_bindgen]
    pub fn render(
        &self,
        name: String,
        start_value: f64,
        end_value: f64,
        start_frame: f64,
        end_frame: f64,
    ) -> Result<String, JsError> {
        self.core
            .render(&name, start_value, end_value, start_frame, end_frame)
            .map_err(js_err)
    }

    /// Like `render`, split into `{ curve, helpers, setup, body }`.
    #[wasm_bindgen(js_name = renderParts)]
    pub fn render_parts(
        &self,
        name: String,
        start_value: f64,
        end_value: f64,
        start_frame: f64,
        end_frame: f64,
    ) -> Result<JsValue, JsError> {
        let interval = KeyframeInterval::new(start_value, end_value, start_frame, end_frame);
        let parts = self
            .core
            .render_parts(&name, &PlaceholderSet::from_interval(&interval))
            .map_err(js_err)?;
        swb::to_value(&parts).map_err(|e| JsError::new(&format!("render error: {e}")))
    }

    /// Evaluate a curve directly at `frame`.
    #[wasm_bindgen]
    pub fn evaluate(
        &self,
        name: String,
        frame: f64,
        start_value: f64,
        end_value: f64,
        start_frame: f64,
        end_frame: f64,
    ) -> Result<f64, JsError> {
        self.core
            .evaluate(&name, frame, start_value, end_value, start_frame, end_frame)
            .map_err(js_err)
    }
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
