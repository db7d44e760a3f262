use crate::core::markup;
use crate::core::presentation::{ModalState, Presentation};
use crate::core::venue::ResolvedConfig;
use crate::dom;
use web_sys as web;

pub fn render(root: &web::Element, config: &ResolvedConfig, presentation: &Presentation) {
    let html = match presentation.modal() {
        ModalState::Closed => String::new(),
        ModalState::Info(corner) => markup::info_modal(config.venue_at(corner)),
        ModalState::Booking(corner) => {
            let error = presentation.last_error().map(|e| e.to_string());
            markup::booking_modal(
                config.venue_at(corner),
                presentation.booking(),
                error.as_deref(),
            )
        }
    };
    root.set_inner_html(&html);
    lock_page_scroll(presentation.modal().is_open());
    if presentation.modal().is_open() {
        focus_first(root);
    }
}

/// Refresh the running total without re-rendering the form.
pub fn update_total(root: &web::Element, text: &str) {
    let selector = format!("[{}]", markup::TOTAL_ATTR);
    if let Ok(Some(el)) = root.query_selector(&selector) {
        el.set_text_content(Some(text));
    }
}

const SCROLL_LOCK_ATTR: &str = "data-venue-scroll-lock";

/// Lock or release body scrolling. Only a lock taken here is ever released.
pub fn lock_page_scroll(locked: bool) {
    let Some(body) = dom::window_document().and_then(|d| d.body()) else {
        return;
    };
    let style = body.style();
    if locked {
        _ = style.set_property("overflow", "hidden");
        _ = body.set_attribute(SCROLL_LOCK_ATTR, "");
    } else if body.has_attribute(SCROLL_LOCK_ATTR) {
        _ = style.remove_property("overflow");
        _ = body.remove_attribute(SCROLL_LOCK_ATTR);
    }
}

fn focus_first(root: &web::Element) {
    use wasm_bindgen::JsCast;
    let target = root
        .query_selector("input, select, textarea")
        .ok()
        .flatten()
        .or_else(|| root.query_selector("button").ok().flatten());
    if let Some(el) = target.and_then(|el| el.dyn_into::<web::HtmlElement>().ok()) {
        _ = el.focus();
    }
}
