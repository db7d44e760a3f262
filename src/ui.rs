use crate::core::booking::BookingStep;
use crate::core::interaction::Cursor;
use crate::core::presentation::ModalState;
use crate::core::state::WidgetState;
use crate::core::Corner;
use crate::dom;
use crate::modal;
use crate::overlay;
use web_sys as web;

#[derive(Clone, PartialEq)]
struct ModalKey {
    modal: ModalState,
    step: BookingStep,
    error: Option<String>,
}

/// Pushes state changes into the DOM, touching only the parts whose
/// visible content changed so focused inputs are not rebuilt while typing.
pub struct UiSync {
    canvas: web::HtmlCanvasElement,
    overlay_root: web::Element,
    modal_root: web::Element,
    overlay: Option<Option<Corner>>,
    modal: Option<ModalKey>,
    cursor: Option<Cursor>,
}

impl UiSync {
    pub fn new(canvas: web::HtmlCanvasElement, overlay_root: web::Element, modal_root: web::Element) -> Self {
        Self {
            canvas,
            overlay_root,
            modal_root,
            overlay: None,
            modal: None,
            cursor: None,
        }
    }

    pub fn sync(&mut self, state: &WidgetState) {
        let cursor = state.router().cursor();
        if self.cursor != Some(cursor) {
            dom::set_style(&self.canvas, &[("cursor", cursor.as_css())]);
            self.cursor = Some(cursor);
        }

        let shown = state.overlay_venue().map(|v| v.position);
        if self.overlay != Some(shown) {
            match shown {
                Some(corner) => overlay::show(&self.overlay_root, state.config(), corner),
                None => overlay::hide(&self.overlay_root),
            }
            self.overlay = Some(shown);
        }

        let presentation = state.presentation();
        let key = ModalKey {
            modal: presentation.modal(),
            step: presentation.booking().step(),
            error: presentation.last_error().map(|e| e.to_string()),
        };
        if self.modal.as_ref() != Some(&key) {
            modal::render(&self.modal_root, state.config(), presentation);
            self.modal = Some(key);
        }
    }
}
