use super::Shared;
use crate::core::booking::{format_usd, BookingField};
use crate::core::markup::{
    ACTION_BACK, ACTION_BOOK_FROM_INFO, ACTION_BOOK_NOW, ACTION_CLOSE, ACTION_LEARN_MORE,
    BACKDROP_ATTR,
};
use crate::core::presentation::UiAction;
use crate::core::venue::Corner;
use crate::dom;
use crate::modal;
use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Delegated click handling for the overlay card buttons.
pub fn wire_overlay_actions(shared: &Shared, overlay_root: &web::Element) -> EventListener {
    let shared = shared.clone();
    EventListener::new(overlay_root, "click", move |ev| {
        let Some(button) = dom::closest_from_event(ev, "[data-action]") else {
            return;
        };
        let corner = button
            .get_attribute("data-corner")
            .and_then(|c| Corner::parse(&c));
        let action = match (button.get_attribute("data-action").as_deref(), corner) {
            (Some(ACTION_LEARN_MORE), Some(c)) => UiAction::LearnMore(c),
            (Some(ACTION_BOOK_NOW), Some(c)) => UiAction::BookNow(c),
            _ => return,
        };
        shared.dispatch(action);
    })
}

pub fn wire_modal(shared: &Shared, modal_root: &web::Element) -> Vec<EventListener> {
    vec![
        wire_modal_click(shared, modal_root),
        wire_modal_submit(shared, modal_root),
        wire_modal_edit(shared, modal_root, "input"),
        wire_modal_edit(shared, modal_root, "change"),
    ]
}

fn wire_modal_click(shared: &Shared, modal_root: &web::Element) -> EventListener {
    let shared = shared.clone();
    EventListener::new(modal_root, "click", move |ev| {
        if let Some(button) = dom::closest_from_event(ev, "[data-action]") {
            let action = match button.get_attribute("data-action").as_deref() {
                Some(ACTION_CLOSE) => UiAction::Close,
                Some(ACTION_BOOK_FROM_INFO) => UiAction::BookFromInfo,
                Some(ACTION_BACK) => UiAction::Back,
                _ => return,
            };
            shared.dispatch(action);
            return;
        }
        // only a click on the backdrop itself, not bubbling from the dialog
        let on_backdrop = dom::target_element(ev)
            .map(|el| el.has_attribute(BACKDROP_ATTR))
            .unwrap_or(false);
        if on_backdrop {
            shared.dispatch(UiAction::Close);
        }
    })
}

fn wire_modal_submit(shared: &Shared, modal_root: &web::Element) -> EventListener {
    let shared = shared.clone();
    let root = modal_root.clone();
    EventListener::new_with_options(
        modal_root,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |ev| {
            ev.prevent_default();
            // pick up values autofill may have set without an input event
            if let Ok(fields) = root.query_selector_all("[name]") {
                let mut st = shared.state.borrow_mut();
                for i in 0..fields.length() {
                    let Some(node) = fields.item(i) else {
                        continue;
                    };
                    if let Some((field, value)) = node
                        .dyn_ref::<web::Element>()
                        .and_then(read_control)
                    {
                        st.set_field(field, &value);
                    }
                }
            }
            shared.dispatch(UiAction::Submit);
        },
    )
}

fn wire_modal_edit(shared: &Shared, modal_root: &web::Element, event_type: &'static str) -> EventListener {
    let shared = shared.clone();
    let root = modal_root.clone();
    EventListener::new(modal_root, event_type, move |ev| {
        let Some(el) = dom::target_element(ev) else {
            return;
        };
        let Some((field, value)) = read_control(&el) else {
            return;
        };
        let (stored, total) = {
            let mut st = shared.state.borrow_mut();
            st.set_field(field, &value);
            let booking = st.presentation().booking();
            (booking.draft().get(field), booking.quote().total)
        };
        // reflect truncation back into the control
        if stored != value && field != BookingField::Duration {
            if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
                input.set_value(&stored);
            }
        }
        if field == BookingField::Duration {
            modal::update_total(&root, &format_usd(total as f64));
        }
    })
}

/// `(field, value)` for a named booking form control.
fn read_control(el: &web::Element) -> Option<(BookingField, String)> {
    let field = BookingField::from_name(&el.get_attribute("name")?)?;
    let value = if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        input.value()
    } else if let Some(select) = el.dyn_ref::<web::HtmlSelectElement>() {
        select.value()
    } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        area.value()
    } else {
        return None;
    };
    Some((field, value))
}

/// Escape closes whichever modal is open.
pub fn wire_escape(shared: &Shared, document: &web::Document) -> EventListener {
    let shared = shared.clone();
    EventListener::new(document, "keydown", move |ev| {
        let Some(kev) = ev.dyn_ref::<web::KeyboardEvent>() else {
            return;
        };
        if kev.key() != "Escape" {
            return;
        }
        let open = shared.state.borrow().presentation().modal().is_open();
        if open {
            shared.dispatch(UiAction::Close);
        }
    })
}
