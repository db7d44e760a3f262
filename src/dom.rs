use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Resize the canvas backing store to its CSS size times the capped pixel ratio.
/// Returns the new `(width, height)` in device pixels.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, pixel_ratio_cap: f64) -> (u32, u32) {
    let dpr = web::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0)
        .min(pixel_ratio_cap);
    let rect = canvas.get_bounding_client_rect();
    let w_px = ((rect.width() * dpr) as u32).max(1);
    let h_px = ((rect.height() * dpr) as u32).max(1);
    if canvas.width() != w_px {
        canvas.set_width(w_px);
    }
    if canvas.height() != h_px {
        canvas.set_height(h_px);
    }
    (w_px, h_px)
}

/// Pointer position relative to the element, normalized to `[0, 1]` with the
/// origin at the top-left. `None` when the element has no layout box.
pub fn client_to_uv(el: &web::Element, client_x: i32, client_y: i32) -> Option<(f32, f32)> {
    let rect = el.get_bounding_client_rect();
    let w = rect.width();
    let h = rect.height();
    if w <= 0.0 || h <= 0.0 {
        return None;
    }
    let u = ((client_x as f64 - rect.left()) / w) as f32;
    let v = ((client_y as f64 - rect.top()) / h) as f32;
    Some((u, v))
}

pub fn css_aspect(el: &web::Element) -> f32 {
    let rect = el.get_bounding_client_rect();
    if rect.height() > 0.0 {
        (rect.width() / rect.height()) as f32
    } else {
        1.0
    }
}

/// Event target as an element, if it is one.
pub fn target_element(ev: &web::Event) -> Option<web::Element> {
    ev.target().and_then(|t| t.dyn_into::<web::Element>().ok())
}

/// Closest ancestor-or-self of the event target matching `selector`.
pub fn closest_from_event(ev: &web::Event, selector: &str) -> Option<web::Element> {
    target_element(ev).and_then(|el| el.closest(selector).ok().flatten())
}

pub fn set_style(el: &web::Element, props: &[(&str, &str)]) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        let style = html.style();
        for (k, v) in props {
            _ = style.set_property(k, v);
        }
    }
}

pub fn create_element(document: &web::Document, tag: &str, class: &str) -> anyhow::Result<web::Element> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{}> failed: {:?}", tag, e))?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    Ok(el)
}

/// Inject a `<style>` element once per document, keyed by id.
pub fn ensure_style(document: &web::Document, id: &str, css: &str) {
    if document.get_element_by_id(id).is_some() {
        return;
    }
    let Ok(style) = document.create_element("style") else {
        return;
    };
    style.set_id(id);
    style.set_text_content(Some(css));
    if let Some(head) = document.head() {
        _ = head.append_child(&style);
    } else if let Some(body) = document.body() {
        _ = body.append_child(&style);
    }
}
