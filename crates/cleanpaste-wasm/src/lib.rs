use wasm_bindgen::prelude::*;

/// Clean pasted text of whitespace artifacts while leaving fenced code
/// blocks untouched.
#[wasm_bindgen]
pub fn normalize(text: &str) -> String {
    cleanpaste::normalize(text)
}

/// Build the diagnostic view of `text`.
/// Returns an array of `{ text, is_removed }` segment objects.
#[wasm_bindgen]
pub fn highlight(text: &str) -> Result<JsValue, JsError> {
    let segments = cleanpaste::highlight(text);
    serde_wasm_bindgen::to_value(&segments)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Quick check whether `text` contains anything `normalize` would remove.
/// Callers gate the diagnostic view on this.
#[wasm_bindgen]
pub fn has_removable_content(text: &str) -> bool {
    cleanpaste::has_removable_content(text)
}
