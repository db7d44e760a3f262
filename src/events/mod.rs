pub mod pointer;
pub mod ui;

use crate::core::presentation::{Effect, UiAction};
use crate::core::state::WidgetState;
use crate::frame::Clock;
use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

/// State handles every DOM listener closes over.
#[derive(Clone)]
pub struct Shared {
    pub state: Rc<RefCell<WidgetState>>,
    pub clock: Clock,
    /// Pending confirmation auto-close. Dropping the timeout cancels it.
    pub auto_close: Rc<RefCell<Option<Timeout>>>,
}

impl Shared {
    pub fn dispatch(&self, action: UiAction) {
        let effect = self.state.borrow_mut().dispatch(action);
        self.apply(effect);
    }

    fn apply(&self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::ArmAutoClose {
                delay_ms,
                generation,
            } => {
                let state = self.state.clone();
                let timeout = Timeout::new(delay_ms, move || {
                    // a stale generation is ignored by the state machine
                    state
                        .borrow_mut()
                        .dispatch(UiAction::AutoCloseElapsed(generation));
                });
                *self.auto_close.borrow_mut() = Some(timeout);
            }
            Effect::CancelAutoClose => {
                self.auto_close.borrow_mut().take();
            }
        }
    }
}

/// Flag the frame loop to resync the canvas backing size.
pub fn wire_resize(window: &web::Window, resized: Rc<Cell<bool>>) -> EventListener {
    EventListener::new(window, "resize", move |_| resized.set(true))
}
