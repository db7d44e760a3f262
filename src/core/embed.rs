//! Sizing policy for the iframe embed.
//!
//! The container reads its options from `data-*` attributes; when responsive it
//! is resized at the breakpoints below, and clipped further on slow
//! connections.

use super::constants::*;

#[derive(Debug, Clone, PartialEq)]
pub enum Length {
    Px(u32),
    /// A CSS percentage kept verbatim, e.g. `"100%"`.
    Percent(String),
}

impl Length {
    pub fn parse(value: &str) -> Option<Length> {
        let v = value.trim();
        if v.ends_with('%') {
            return Some(Length::Percent(v.to_string()));
        }
        let digits: String = v
            .trim_end_matches("px")
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().ok().map(Length::Px)
    }

    pub fn to_css(&self) -> String {
        match self {
            Length::Px(px) => format!("{px}px"),
            Length::Percent(p) => p.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

impl Alignment {
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "left" => Alignment::Left,
            "right" => Alignment::Right,
            _ => Alignment::Center,
        }
    }

    /// `(margin-left, margin-right)`
    pub fn margins(self) -> (&'static str, &'static str) {
        match self {
            Alignment::Left => ("0", "auto"),
            Alignment::Center => ("auto", "auto"),
            Alignment::Right => ("auto", "0"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmbedOptions {
    pub width: Length,
    pub height_px: u32,
    pub position: Alignment,
    pub responsive: bool,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self {
            width: Length::Px(EMBED_DEFAULT_WIDTH_PX),
            height_px: EMBED_DEFAULT_HEIGHT_PX,
            position: Alignment::Center,
            responsive: false,
        }
    }
}

impl EmbedOptions {
    /// Build from a `data-*` attribute lookup such as `Element::get_attribute`.
    pub fn from_attributes(get: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            width: get("data-width")
                .and_then(|v| Length::parse(&v))
                .unwrap_or(defaults.width),
            height_px: get("data-height")
                .and_then(|v| match Length::parse(&v) {
                    Some(Length::Px(px)) => Some(px),
                    _ => None,
                })
                .unwrap_or(defaults.height_px),
            position: get("data-position")
                .map(|v| Alignment::parse(&v))
                .unwrap_or_default(),
            responsive: get("data-responsive").as_deref() == Some("true"),
        }
    }

    pub fn initial_size(&self) -> FrameSize {
        FrameSize {
            width: self.width.clone(),
            height_px: self.height_px as f64,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedBreakpoint {
    SmallMobile,
    Mobile,
    Tablet,
    Desktop,
}

impl EmbedBreakpoint {
    pub fn classify(viewport_width: f64) -> Self {
        if viewport_width <= EMBED_SMALL_MOBILE_MAX {
            EmbedBreakpoint::SmallMobile
        } else if viewport_width <= EMBED_MOBILE_MAX {
            EmbedBreakpoint::Mobile
        } else if viewport_width <= EMBED_TABLET_MAX {
            EmbedBreakpoint::Tablet
        } else {
            EmbedBreakpoint::Desktop
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrameSize {
    pub width: Length,
    pub height_px: f64,
}

/// Container size for the current viewport.
pub fn responsive_size(opts: &EmbedOptions, viewport_width: f64, slow_connection: bool) -> FrameSize {
    let full = || Length::Percent("100%".to_string());
    let mut size = match EmbedBreakpoint::classify(viewport_width) {
        EmbedBreakpoint::SmallMobile => FrameSize {
            width: full(),
            height_px: EMBED_SMALL_MOBILE_HEIGHT,
        },
        EmbedBreakpoint::Mobile => FrameSize {
            width: full(),
            height_px: EMBED_MOBILE_HEIGHT,
        },
        EmbedBreakpoint::Tablet => FrameSize {
            width: match &opts.width {
                Length::Px(px) => Length::Px((*px).min(EMBED_TABLET_MAX_WIDTH_PX)),
                pct => pct.clone(),
            },
            height_px: EMBED_TABLET_HEIGHT,
        },
        EmbedBreakpoint::Desktop => opts.initial_size(),
    };
    if slow_connection {
        size.height_px *= EMBED_SLOW_HEIGHT_FACTOR;
    }
    size
}

/// Mobile heuristic used by the embed: a handheld user agent or a narrow viewport.
pub fn is_mobile_agent(user_agent: &str, viewport_width: f64) -> bool {
    const MARKERS: [&str; 8] = [
        "Android",
        "webOS",
        "iPhone",
        "iPad",
        "iPod",
        "BlackBerry",
        "IEMobile",
        "Opera Mini",
    ];
    let ua = user_agent.to_ascii_lowercase();
    MARKERS.iter().any(|m| ua.contains(&m.to_ascii_lowercase())) || viewport_width < TABLET_MIN_WIDTH
}

/// Matches what an earlier embed left in the container: its loader and its
/// iframe. Host content is left alone.
pub fn previous_embed_selector() -> String {
    format!("#{EMBED_LOADER_ID}, iframe[src=\"{EMBED_BASE_URL}\"]")
}

/// When to start once the module has loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootTiming {
    Now,
    OnDomReady,
}

impl BootTiming {
    /// From `document.readyState`. Only `"loading"` means the page may not
    /// have its roots yet.
    pub fn from_ready_state(state: &str) -> Self {
        if state == "loading" {
            BootTiming::OnDomReady
        } else {
            BootTiming::Now
        }
    }
}

/// What the page asks for on load. A page with an embed container is a host
/// page, so it gets the iframe instead of a second in-page widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BootPlan {
    pub mount: bool,
    pub embed: bool,
}

impl BootPlan {
    pub fn new(has_root: bool, has_embed_container: bool) -> Self {
        Self {
            mount: has_root && !has_embed_container,
            embed: has_embed_container,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.mount && !self.embed
    }
}
