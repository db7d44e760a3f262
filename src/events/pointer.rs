use super::Shared;
use crate::core::camera::Camera;
use crate::core::constants::OVERLAY_ATTR;
use crate::core::interaction::{PointerKind, PressTarget};
use crate::core::markup::BACKDROP_ATTR;
use crate::core::venue::Corner;
use crate::dom;
use gloo_events::{EventListener, EventListenerOptions, EventListenerPhase};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub shared: Shared,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub overlay_root: web::Element,
    /// Kind of the most recent pointer-down, for `click` events that do not
    /// carry a pointer type.
    pub last_kind: Rc<Cell<PointerKind>>,
}

pub fn wire_input_handlers(w: &InputWiring) -> Vec<EventListener> {
    vec![
        wire_pointermove(w),
        wire_pointerleave(w),
        wire_pointerdown(w),
        wire_click(w),
        wire_global_press(w, "mousedown"),
        wire_global_press(w, "touchstart"),
        wire_overlay_hover(w, "mouseenter", true),
        wire_overlay_hover(w, "mouseleave", false),
    ]
}

/// Tile under a client-space point, picked with the same camera the renderer uses.
fn pick_at(w: &InputWiring, client_x: i32, client_y: i32) -> Option<Corner> {
    let (u, v) = dom::client_to_uv(&w.canvas, client_x, client_y)?;
    let camera = Camera::new(dom::css_aspect(&w.canvas));
    let (ro, rd) = camera.ray_from_uv(u, v);
    w.shared.state.borrow().pick(ro, rd)
}

fn pointer_kind(ev: &web::Event) -> Option<(PointerKind, &web::PointerEvent)> {
    let pe = ev.dyn_ref::<web::PointerEvent>()?;
    Some((PointerKind::parse(&pe.pointer_type()), pe))
}

fn wire_pointermove(w: &InputWiring) -> EventListener {
    let w = w.clone();
    EventListener::new(&w.canvas.clone(), "pointermove", move |ev| {
        let Some((kind, pe)) = pointer_kind(ev) else {
            return;
        };
        if !kind.can_hover() {
            return;
        }
        let picked = pick_at(&w, pe.client_x(), pe.client_y());
        let now = w.shared.clock.now();
        w.shared.state.borrow_mut().pointer_over(picked, kind, now);
    })
}

fn wire_pointerleave(w: &InputWiring) -> EventListener {
    let w = w.clone();
    EventListener::new(&w.canvas.clone(), "pointerleave", move |ev| {
        let Some((kind, _)) = pointer_kind(ev) else {
            return;
        };
        let now = w.shared.clock.now();
        w.shared.state.borrow_mut().pointer_left(kind, now);
    })
}

fn wire_pointerdown(w: &InputWiring) -> EventListener {
    let w = w.clone();
    EventListener::new(&w.canvas.clone(), "pointerdown", move |ev| {
        let Some((kind, pe)) = pointer_kind(ev) else {
            return;
        };
        w.last_kind.set(kind);
        let picked = pick_at(&w, pe.client_x(), pe.client_y());
        if kind == PointerKind::Touch {
            if let Some(corner) = picked {
                log::info!("[pointer] tap {}", corner.as_str());
            }
        }
        w.shared.state.borrow_mut().pointer_down(picked, kind);
    })
}

fn wire_click(w: &InputWiring) -> EventListener {
    let w = w.clone();
    EventListener::new(&w.canvas.clone(), "click", move |ev| {
        let Some(me) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let kind = match pointer_kind(ev) {
            Some((kind, pe)) if !pe.pointer_type().is_empty() => kind,
            _ => w.last_kind.get(),
        };
        let picked = pick_at(&w, me.client_x(), me.client_y());
        let link = w
            .shared
            .state
            .borrow()
            .click_link(picked, kind)
            .map(str::to_string);
        if let Some(link) = link {
            log::info!("[pointer] following {}", link);
            navigate_top(&link);
        }
    })
}

/// Navigate the top-level browsing context, falling back to this frame when
/// the top window is not reachable.
fn navigate_top(href: &str) {
    let Some(window) = web::window() else {
        return;
    };
    let top = window.top().ok().flatten();
    let moved = top
        .map(|t| t.location().set_href(href).is_ok())
        .unwrap_or(false);
    if !moved {
        _ = window.location().set_href(href);
    }
}

fn wire_global_press(w: &InputWiring, event_type: &'static str) -> EventListener {
    let w = w.clone();
    EventListener::new_with_options(
        &w.document.clone(),
        event_type,
        EventListenerOptions {
            phase: EventListenerPhase::Capture,
            passive: true,
        },
        move |ev| {
            let target = classify_press(&w, ev);
            w.shared.state.borrow_mut().global_press(target);
        },
    )
}

fn classify_press(w: &InputWiring, ev: &web::Event) -> PressTarget {
    let Some(el) = dom::target_element(ev) else {
        return PressTarget::Outside;
    };
    // an open modal counts as part of the overlay
    let overlay_selector = format!("[{}], [{}]", OVERLAY_ATTR, BACKDROP_ATTR);
    if el.closest(&overlay_selector).ok().flatten().is_some() {
        return PressTarget::Overlay;
    }
    let node: &web::Node = el.as_ref();
    if w.canvas.contains(Some(node)) {
        return PressTarget::Surface;
    }
    PressTarget::Outside
}

fn wire_overlay_hover(w: &InputWiring, event_type: &'static str, hovered: bool) -> EventListener {
    let w = w.clone();
    EventListener::new(&w.overlay_root.clone(), event_type, move |_| {
        let now = w.shared.clock.now();
        w.shared.state.borrow_mut().overlay_hover(hovered, now);
    })
}
