//! Embeddable venue cube widget: a 2x2 grid of 3D logo tiles, each standing
//! for one venue, with a hover card, info and booking modals, and an iframe
//! embed loader for host pages.
//!
//! `core` is platform independent and tested on the host; everything else is
//! the browser shell and only builds for `wasm32`.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod embed;
#[cfg(target_arch = "wasm32")]
mod env;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod modal;
#[cfg(target_arch = "wasm32")]
mod mount;
#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
mod render;
#[cfg(target_arch = "wasm32")]
mod ui;

#[cfg(target_arch = "wasm32")]
pub use web_api::*;

#[cfg(target_arch = "wasm32")]
mod web_api {
    use crate::core::constants::EMBED_CONTAINER_ID;
    use crate::core::embed::{BootPlan, BootTiming};
    use crate::{embed, mount};
    use gloo_events::EventListener;
    use std::cell::RefCell;
    use wasm_bindgen::prelude::*;

    thread_local! {
        static MOUNTED: RefCell<Option<mount::MountedWidget>> = const { RefCell::new(None) };
        static EMBEDDED: RefCell<Option<embed::EmbedHandle>> = const { RefCell::new(None) };
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("venue-cube starting");
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Ok(());
        };
        match BootTiming::from_ready_state(&document.ready_state()) {
            BootTiming::Now => boot(&document),
            BootTiming::OnDomReady => {
                let doc = document.clone();
                EventListener::once(&document, "DOMContentLoaded", move |_| boot(&doc)).forget();
            }
        }
        Ok(())
    }

    fn boot(document: &web_sys::Document) {
        let plan = BootPlan::new(
            mount::find_root(document).is_some(),
            document.get_element_by_id(EMBED_CONTAINER_ID).is_some(),
        );
        if plan.is_empty() {
            log::info!("[boot] no root or embed container on the page");
            return;
        }
        // failures are already logged
        if plan.mount {
            _ = mount_widget();
        }
        if plan.embed {
            _ = embed_widget();
        }
    }

    /// Mount the widget into the first root found on the page. A previous
    /// mount is torn down first.
    #[wasm_bindgen]
    pub fn mount_widget() -> Result<(), JsValue> {
        unmount_widget();
        match mount::mount() {
            Ok(widget) => {
                MOUNTED.with(|m| *m.borrow_mut() = Some(widget));
                Ok(())
            }
            Err(e) => {
                log::error!("[mount] {:?}", e);
                Err(JsValue::from_str(&e.to_string()))
            }
        }
    }

    #[wasm_bindgen]
    pub fn unmount_widget() {
        // take first so the drop runs without the slot borrowed
        let previous = MOUNTED.with(|m| m.borrow_mut().take());
        drop(previous);
    }

    /// Inject the hosted widget as an iframe into `#venue-square-container`.
    #[wasm_bindgen]
    pub fn embed_widget() -> Result<(), JsValue> {
        let previous = EMBEDDED.with(|e| e.borrow_mut().take());
        drop(previous);
        match embed::embed() {
            Ok(handle) => {
                EMBEDDED.with(|e| *e.borrow_mut() = Some(handle));
                Ok(())
            }
            Err(e) => {
                log::error!("[embed] {:?}", e);
                Err(JsValue::from_str(&e.to_string()))
            }
        }
    }
}
