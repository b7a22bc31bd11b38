//! Diagnostics logging. Failure causes are logged here instead of being
//! surfaced to the user.

#[cfg(target_arch = "wasm32")]
pub fn log_error(scope: &str, details: &str) {
    let line = format!("[{scope}] {details}");
    web_sys::console::error_1(&wasm_bindgen::JsValue::from_str(&line));
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log_error(scope: &str, details: &str) {
    eprintln!("[{scope}] {details}");
}
