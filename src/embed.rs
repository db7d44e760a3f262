//! Host-page loader: drops an iframe pointing at the hosted widget into
//! `#venue-square-container` and keeps it sized for the viewport.

use crate::core::constants::{EMBED_BASE_URL, EMBED_CONTAINER_ID, EMBED_LOADER_ID, EMBED_LOADER_TIMEOUT_MS};
use crate::core::embed::{
    is_mobile_agent, previous_embed_selector, responsive_size, EmbedOptions, FrameSize,
};
use crate::core::tier::TierTracker;
use crate::dom;
use crate::env;
use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Keeps the embed's listeners and loader timer alive.
pub struct EmbedHandle {
    _listeners: Vec<EventListener>,
    _loader_timeout: Timeout,
}

const LOADER_HTML: &str = concat!(
    "<div style=\"width:40px;height:40px;border:4px solid #f3f3f3;border-top:4px solid #333;",
    "border-radius:50%;animation:venue-square-spin 1s linear infinite;margin:0 auto 10px\"></div>",
    "<p>Loading Venue Square...</p>",
    "<style>@keyframes venue-square-spin{0%{transform:rotate(0deg)}100%{transform:rotate(360deg)}}</style>"
);

pub fn embed() -> anyhow::Result<EmbedHandle> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let container = document.get_element_by_id(EMBED_CONTAINER_ID).ok_or_else(|| {
        anyhow::anyhow!(
            "container #{} not found; add <div id=\"{}\"></div> to the page",
            EMBED_CONTAINER_ID,
            EMBED_CONTAINER_ID
        )
    })?;

    let selector = previous_embed_selector();
    while let Ok(Some(stale)) = container.query_selector(&selector) {
        log::debug!("[embed] removing previous {}", stale.tag_name().to_ascii_lowercase());
        stale.remove();
    }

    let opts = EmbedOptions::from_attributes(|name| container.get_attribute(name));
    let environment = env::sample(&window);
    let slow = environment.is_slow_connection();
    let mobile = is_mobile_agent(
        &window.navigator().user_agent().unwrap_or_default(),
        environment.viewport_width,
    );
    log::info!(
        "[embed] width={} height={}px responsive={} mobile={} slow={}",
        opts.width.to_css(),
        opts.height_px,
        opts.responsive,
        mobile,
        slow
    );

    let (margin_left, margin_right) = opts.position.margins();
    dom::set_style(
        &container,
        &[
            ("position", "relative"),
            ("margin-left", margin_left),
            ("margin-right", margin_right),
        ],
    );
    let initial = if opts.responsive {
        responsive_size(&opts, environment.viewport_width, slow)
    } else {
        opts.initial_size()
    };
    apply_size(&container, &initial);

    let loader = dom::create_element(&document, "div", "")?;
    loader.set_id(EMBED_LOADER_ID);
    dom::set_style(
        &loader,
        &[
            ("position", "absolute"),
            ("top", "50%"),
            ("left", "50%"),
            ("transform", "translate(-50%, -50%)"),
            ("text-align", "center"),
            ("color", "#666"),
            ("font-family", "-apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, sans-serif"),
        ],
    );
    loader.set_inner_html(LOADER_HTML);
    container
        .append_child(&loader)
        .map_err(|e| anyhow::anyhow!("append loader failed: {:?}", e))?;

    let iframe = dom::create_element(&document, "iframe", "")?;
    for (k, v) in [
        ("src", EMBED_BASE_URL),
        ("title", "Interactive Venue Square"),
        ("loading", "lazy"),
        ("allowfullscreen", "true"),
    ] {
        _ = iframe.set_attribute(k, v);
    }
    dom::set_style(
        &iframe,
        &[
            ("width", "100%"),
            ("height", "100%"),
            ("border", "none"),
            ("border-radius", "8px"),
            ("overflow", "hidden"),
        ],
    );
    if mobile {
        _ = iframe.set_attribute("scrolling", "no");
        dom::set_style(&iframe, &[("touch-action", "none")]);
    }

    let mut listeners = Vec::new();
    let loader_for_load = loader.clone();
    listeners.push(EventListener::new(&iframe, "load", move |_| {
        loader_for_load.remove();
    }));
    container
        .append_child(&iframe)
        .map_err(|e| anyhow::anyhow!("append iframe failed: {:?}", e))?;

    let loader_timeout = Timeout::new(EMBED_LOADER_TIMEOUT_MS, move || {
        if loader.parent_node().is_some() {
            loader.remove();
        }
    });

    if opts.responsive {
        let tracker = Rc::new(RefCell::new(TierTracker::new(environment.viewport_width)));
        let window_for_resize = window.clone();
        listeners.push(EventListener::new(&window, "resize", move |_| {
            let width = env::viewport_width(&window_for_resize);
            if let Some(tier) = tracker.borrow_mut().observe(width) {
                log::info!("[embed] viewport now {}", tier.as_str());
            }
            apply_size(&container, &responsive_size(&opts, width, slow));
        }));
    }

    Ok(EmbedHandle {
        _listeners: listeners,
        _loader_timeout: loader_timeout,
    })
}

fn apply_size(container: &web::Element, size: &FrameSize) {
    let width = size.width.to_css();
    let height = format!("{}px", size.height_px.round());
    dom::set_style(container, &[("width", width.as_str()), ("height", height.as_str())]);
}
