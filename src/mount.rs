use crate::core::markup::{self, MODAL_ROOT_ATTR, OVERLAY_ROOT_ATTR, SURFACE_ATTR};
use crate::core::state::WidgetState;
use crate::core::tier::RenderQuality;
use crate::core::venue::{parse_config_candidate, resolve_config, RawConfig, ResolvedConfig};
use crate::dom;
use crate::env;
use crate::events::{self, pointer, Shared};
use crate::frame::{Clock, FrameContext, FrameLoop};
use crate::modal;
use crate::render::GpuState;
use crate::ui::UiSync;
use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

const STYLE_ID: &str = "venue-cube-style";
const GLOBAL_CONFIG_KEYS: [&str; 2] = ["INTERACTIVE_VENUE_SQUARE_CONFIG", "interactiveVenueSquareConfig"];
const CONFIG_SCRIPT: &str = "script[type=\"application/json\"][data-venue-square-config]";

type PendingLogo = Rc<RefCell<Option<(u32, Vec<u8>)>>>;

/// A live widget. Dropping it tears everything down.
pub struct MountedWidget {
    root: web::Element,
    alive: Rc<Cell<bool>>,
    frame_loop: FrameLoop,
    listeners: Vec<EventListener>,
    auto_close: Rc<RefCell<Option<Timeout>>>,
    gpu: Rc<RefCell<Option<GpuState>>>,
}

impl Drop for MountedWidget {
    fn drop(&mut self) {
        self.alive.set(false);
        self.frame_loop.stop();
        self.listeners.clear();
        self.auto_close.borrow_mut().take();
        self.gpu.borrow_mut().take();
        modal::lock_page_scroll(false);
        self.root.set_inner_html("");
        log::info!("[mount] unmounted");
    }
}

/// First mount root candidate present in the document.
pub fn find_root(document: &web::Document) -> Option<web::Element> {
    document
        .query_selector("[data-venue-square-root]")
        .ok()
        .flatten()
        .or_else(|| document.get_element_by_id("interactive-venue-square"))
        .or_else(|| document.get_element_by_id("root"))
}

/// Walk the config sources in priority order; the first one that parses wins.
pub fn read_config(window: &web::Window, document: &web::Document, root: &web::Element) -> ResolvedConfig {
    let raw = global_config(window)
        .or_else(|| {
            let script = document
                .get_element_by_id("venue-square-config")
                .or_else(|| document.query_selector(CONFIG_SCRIPT).ok().flatten());
            script.and_then(|s| {
                parse_config_candidate("config script", s.text_content().as_deref())
            })
        })
        .or_else(|| {
            parse_config_candidate(
                "data-venue-config attribute",
                root.get_attribute("data-venue-config").as_deref(),
            )
        })
        .or_else(|| {
            let nested = root.query_selector(CONFIG_SCRIPT).ok().flatten()?;
            parse_config_candidate("nested config script", nested.text_content().as_deref())
        });
    if raw.is_none() {
        log::info!("[config] no host config found; using defaults");
    }
    resolve_config(raw)
}

fn global_config(window: &web::Window) -> Option<RawConfig> {
    GLOBAL_CONFIG_KEYS.iter().find_map(|key| {
        let value = js_sys::Reflect::get(window, &JsValue::from_str(key)).ok()?;
        if value.is_undefined() || value.is_null() {
            return None;
        }
        // accept either a plain object or a JSON string
        let text = match value.as_string() {
            Some(s) => s,
            None => js_sys::JSON::stringify(&value).ok()?.as_string()?,
        };
        parse_config_candidate(key, Some(&text))
    })
}

fn query(root: &web::Element, attr: &str) -> anyhow::Result<web::Element> {
    root.query_selector(&format!("[{}]", attr))
        .ok()
        .flatten()
        .ok_or_else(|| anyhow::anyhow!("widget markup is missing [{}]", attr))
}

pub fn mount() -> anyhow::Result<MountedWidget> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let root = find_root(&document).ok_or_else(|| {
        anyhow::anyhow!("no mount root ([data-venue-square-root], #interactive-venue-square or #root)")
    })?;

    let config = read_config(&window, &document, &root);
    let environment = env::sample(&window);
    let quality = RenderQuality::from_env(&environment);
    log::info!(
        "[tier] {} slow={} tile={} dpr={} aa={} shadows={}",
        quality.tier.as_str(),
        quality.slow_connection,
        quality.tile_size,
        quality.pixel_ratio,
        quality.antialias,
        quality.shadows
    );

    dom::ensure_style(&document, STYLE_ID, markup::STYLE_SHEET);
    _ = root.class_list().add_1("vc-root");
    root.set_inner_html(&markup::widget_shell(&config));
    let canvas: web::HtmlCanvasElement = query(&root, SURFACE_ATTR)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let overlay_root = query(&root, OVERLAY_ROOT_ATTR)?;
    let modal_root = query(&root, MODAL_ROOT_ATTR)?;
    dom::sync_canvas_backing_size(&canvas, quality.pixel_ratio);

    let logo_url = config.logo_texture_url.clone();
    let state = Rc::new(RefCell::new(WidgetState::new(config, quality)));
    let shared = Shared {
        state: state.clone(),
        clock: Clock::new(),
        auto_close: Rc::new(RefCell::new(None)),
    };
    let gpu: Rc<RefCell<Option<GpuState>>> = Rc::new(RefCell::new(None));
    let alive = Rc::new(Cell::new(true));
    let pending_logo: PendingLogo = Rc::new(RefCell::new(None));
    // first frame picks up the laid-out canvas size
    let resized = Rc::new(Cell::new(true));

    let wiring = pointer::InputWiring {
        shared: shared.clone(),
        canvas: canvas.clone(),
        document: document.clone(),
        overlay_root: overlay_root.clone(),
        last_kind: Rc::new(Cell::new(crate::core::PointerKind::Mouse)),
    };
    let mut listeners = pointer::wire_input_handlers(&wiring);
    listeners.push(events::ui::wire_overlay_actions(&shared, &overlay_root));
    listeners.extend(events::ui::wire_modal(&shared, &modal_root));
    listeners.push(events::ui::wire_escape(&shared, &document));
    listeners.push(events::wire_resize(&window, resized.clone()));
    listeners.extend(load_logo(
        &document,
        &logo_url,
        quality.texture_size,
        pending_logo.clone(),
        gpu.clone(),
        state.clone(),
    )?);

    spawn_gpu_init(
        canvas.clone(),
        quality,
        gpu.clone(),
        alive.clone(),
        pending_logo,
        state,
    );

    let frame_loop = FrameLoop::start(FrameContext {
        state: shared.state.clone(),
        clock: shared.clock,
        canvas: canvas.clone(),
        gpu: gpu.clone(),
        ui: UiSync::new(canvas, overlay_root, modal_root),
        pixel_ratio_cap: quality.pixel_ratio,
        resized,
    });
    log::info!("[mount] mounted");

    Ok(MountedWidget {
        root,
        alive,
        frame_loop,
        listeners,
        auto_close: shared.auto_close,
        gpu,
    })
}

fn spawn_gpu_init(
    canvas: web::HtmlCanvasElement,
    quality: RenderQuality,
    gpu: Rc<RefCell<Option<GpuState>>>,
    alive: Rc<Cell<bool>>,
    pending_logo: PendingLogo,
    state: Rc<RefCell<WidgetState>>,
) {
    spawn_local(async move {
        let mut g = match GpuState::new(&canvas, &quality).await {
            Ok(g) => g,
            Err(e) => {
                log::error!("[gpu] WebGPU init error: {:?}; overlay stays usable", e);
                return;
            }
        };
        if !alive.get() {
            log::info!("[gpu] init finished after unmount; discarding");
            return;
        }
        if let Some((size, pixels)) = pending_logo.borrow_mut().take() {
            g.set_logo(size, size, &pixels);
        }
        *gpu.borrow_mut() = Some(g);
        state.borrow_mut().request_redraw();
    });
}

/// Fetch and decode the logo at `texture_size` square. Failure leaves the
/// tiles untextured.
fn load_logo(
    document: &web::Document,
    url: &str,
    texture_size: u32,
    pending: PendingLogo,
    gpu: Rc<RefCell<Option<GpuState>>>,
    state: Rc<RefCell<WidgetState>>,
) -> anyhow::Result<Vec<EventListener>> {
    let img = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    img.set_cross_origin(Some("anonymous"));

    let img_for_load = img.clone();
    let document = document.clone();
    let on_load = EventListener::once(&img, "load", move |_| {
        let pixels = match decode_image(&document, &img_for_load, texture_size) {
            Ok(p) => p,
            Err(e) => {
                log::warn!("[gpu] logo decode failed: {:?}", e);
                return;
            }
        };
        match gpu.borrow_mut().as_mut() {
            Some(g) => g.set_logo(texture_size, texture_size, &pixels),
            None => *pending.borrow_mut() = Some((texture_size, pixels)),
        }
        state.borrow_mut().request_redraw();
    });
    let url_for_error = url.to_string();
    let on_error = EventListener::once(&img, "error", move |_| {
        log::warn!("[gpu] logo {} failed to load; tiles stay untextured", url_for_error);
    });
    img.set_src(url);
    Ok(vec![on_load, on_error])
}

fn decode_image(document: &web::Document, img: &web::HtmlImageElement, size: u32) -> anyhow::Result<Vec<u8>> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_width(size);
    canvas.set_height(size);
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let side = size as f64;
    ctx.draw_image_with_html_image_element_and_dw_and_dh(img, 0.0, 0.0, side, side)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let data = ctx
        .get_image_data(0.0, 0.0, side, side)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(data.data().0)
}
