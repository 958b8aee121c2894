//! WebAssembly bindings for DOT rendering.
//!
//! Thin JavaScript-accessible wrappers; all logic lives in the `dot` module and
//! the modules it drives.

use crate::dot::render_json;
use crate::escape::encode_name;
use wasm_bindgen::prelude::*;

/// Install the panic hook so Rust panics show up in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Render a JSON snapshot with an optional JSON visibility policy.
///
/// Returns `{ source, lineCount }`.
#[wasm_bindgen]
pub fn render_graph_json(snapshot: &str, policy: Option<String>) -> Result<JsValue, JsValue> {
    let source = render_json(snapshot, policy.as_deref())
        .map_err(|e| JsValue::from_str(&format!("Failed to render graph: {}", e)))?;
    serde_wasm_bindgen::to_value(&source)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Encode a qualified name the way node and edge ids are encoded.
#[wasm_bindgen]
pub fn encode_element_name(name: &str) -> String {
    encode_name(name)
}
