//! Browser console sink for tracing output.

use std::sync::Once;

use rollcall_core::logging::LoggingBuilder;
use tracing::Level;
use wasm_bindgen::JsValue;
use web_sys::console;

static INIT: Once = Once::new();

/// Write one formatted log line to the matching console method.
pub fn write(level: &Level, line: &str) {
    let line = JsValue::from_str(line);
    match *level {
        Level::ERROR => console::error_1(&line),
        Level::WARN => console::warn_1(&line),
        Level::INFO => console::info_1(&line),
        _ => console::debug_1(&line),
    }
}

/// Install the console subscriber. Only the first call's filter takes effect.
pub fn init(filter: &str) {
    INIT.call_once(|| {
        if let Err(err) = LoggingBuilder::new(write).with_filter(filter).init() {
            console::warn_1(&JsValue::from_str(&err.to_string()));
        }
    });
}
