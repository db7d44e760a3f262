use crate::core::tier::Environment;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Snapshot viewport width, pixel ratio and Network Information hints.
///
/// `navigator.connection` is not in every browser, so it is read reflectively.
pub fn sample(window: &web::Window) -> Environment {
    let viewport_width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let mut env = Environment {
        viewport_width,
        device_pixel_ratio: window.device_pixel_ratio(),
        ..Environment::default()
    };
    let navigator = window.navigator();
    let connection = js_sys::Reflect::get(&navigator, &JsValue::from_str("connection"))
        .ok()
        .filter(|c| c.is_object());
    if let Some(conn) = connection {
        env.effective_type = js_sys::Reflect::get(&conn, &JsValue::from_str("effectiveType"))
            .ok()
            .and_then(|v| v.as_string());
        env.save_data = js_sys::Reflect::get(&conn, &JsValue::from_str("saveData"))
            .ok()
            .and_then(|v| v.as_bool())
            .unwrap_or(false);
    }
    env
}

pub fn viewport_width(window: &web::Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}
