use crate::core::camera::Camera;
use crate::core::state::WidgetState;
use crate::dom;
use crate::render;
use crate::ui::UiSync;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Seconds since mount; the single time base for every state input.
#[derive(Clone, Copy)]
pub struct Clock {
    epoch: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }

    pub fn now(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }
}

pub struct FrameContext {
    pub state: Rc<RefCell<WidgetState>>,
    pub clock: Clock,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Rc<RefCell<Option<render::GpuState>>>,
    pub ui: UiSync,
    pub pixel_ratio_cap: f64,
    pub resized: Rc<Cell<bool>>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = self.clock.now();
        let (needs_draw, ui_dirty) = {
            let mut st = self.state.borrow_mut();
            let needs_draw = st.advance(now);
            (needs_draw, st.take_ui_dirty())
        };

        if ui_dirty {
            self.ui.sync(&self.state.borrow());
        }

        let resized = self.resized.replace(false);
        if resized {
            dom::sync_canvas_backing_size(&self.canvas, self.pixel_ratio_cap);
        }
        if !(needs_draw || resized) {
            return;
        }

        let mut gpu = self.gpu.borrow_mut();
        let Some(g) = gpu.as_mut() else {
            return;
        };
        g.resize_if_needed(self.canvas.width(), self.canvas.height());
        let camera = Camera::new(g.aspect());
        let instances = self.state.borrow().instances();
        if let Err(e) = g.render(&camera, &instances) {
            log::warn!("[gpu] frame skipped: {:?}", e);
            // try again next frame after the surface was reconfigured
            self.state.borrow_mut().request_redraw();
        }
    }
}

/// requestAnimationFrame loop that can be cancelled on unmount.
pub struct FrameLoop {
    handle: Rc<Cell<Option<i32>>>,
    stopped: Rc<Cell<bool>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    pub fn start(frame_ctx: FrameContext) -> Self {
        let frame_ctx = Rc::new(RefCell::new(frame_ctx));
        let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let stopped = Rc::new(Cell::new(false));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

        let tick_clone = tick.clone();
        let handle_tick = handle.clone();
        let stopped_tick = stopped.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if stopped_tick.get() {
                return;
            }
            frame_ctx.borrow_mut().frame();
            handle_tick.set(schedule(&tick_clone));
        }) as Box<dyn FnMut()>));
        handle.set(schedule(&tick));

        Self {
            handle,
            stopped,
            tick,
        }
    }

    pub fn stop(&self) {
        self.stopped.set(true);
        if let (Some(id), Some(w)) = (self.handle.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // the closure owns a clone of `tick`; dropping it breaks the cycle
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn schedule(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) -> Option<i32> {
    let window = web::window()?;
    let guard = tick.borrow();
    let closure = guard.as_ref()?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}
