//! Device tier classification and the render quality derived from it.
//!
//! [`RenderQuality::from_env`] is a pure function of the environment signals
//! sampled at mount. The widget does not re-run it when the viewport changes;
//! callers that want to follow the viewport feed widths into a [`TierTracker`].

use super::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceTier {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceTier {
    pub fn classify(viewport_width: f64) -> DeviceTier {
        if viewport_width < TABLET_MIN_WIDTH {
            DeviceTier::Mobile
        } else if viewport_width < DESKTOP_MIN_WIDTH {
            DeviceTier::Tablet
        } else {
            DeviceTier::Desktop
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DeviceTier::Mobile => "mobile",
            DeviceTier::Tablet => "tablet",
            DeviceTier::Desktop => "desktop",
        }
    }
}

/// Environment signals read from the browser at mount time.
#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    pub viewport_width: f64,
    pub device_pixel_ratio: f64,
    /// `navigator.connection.effectiveType` when the browser exposes it.
    pub effective_type: Option<String>,
    pub save_data: bool,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            viewport_width: DESKTOP_MIN_WIDTH,
            device_pixel_ratio: 1.0,
            effective_type: None,
            save_data: false,
        }
    }
}

impl Environment {
    pub fn is_slow_connection(&self) -> bool {
        self.save_data || matches!(self.effective_type.as_deref(), Some("slow-2g") | Some("2g"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderQuality {
    pub tier: DeviceTier,
    pub slow_connection: bool,
    pub tile_size: f32,
    /// Effective canvas pixel ratio: device ratio clamped to the tier cap.
    pub pixel_ratio: f64,
    pub antialias: bool,
    pub shadows: bool,
    pub edge_lines: bool,
    pub low_power: bool,
    pub entrance_duration_sec: f64,
    pub texture_size: u32,
}

impl RenderQuality {
    pub fn from_env(env: &Environment) -> Self {
        let tier = DeviceTier::classify(env.viewport_width);
        let slow_connection = env.is_slow_connection();
        let reduced = tier == DeviceTier::Mobile || slow_connection;
        let (tile_size, texture_size) = match tier {
            DeviceTier::Mobile => (TILE_SIZE_MOBILE, TEXTURE_SIZE_MOBILE),
            DeviceTier::Tablet => (TILE_SIZE_TABLET, TEXTURE_SIZE_TABLET),
            DeviceTier::Desktop => (TILE_SIZE_DESKTOP, TEXTURE_SIZE_DESKTOP),
        };
        let cap = if reduced {
            PIXEL_RATIO_CAP_REDUCED
        } else {
            PIXEL_RATIO_CAP
        };
        let dpr = if env.device_pixel_ratio.is_finite() && env.device_pixel_ratio > 0.0 {
            env.device_pixel_ratio
        } else {
            1.0
        };
        Self {
            tier,
            slow_connection,
            tile_size,
            pixel_ratio: dpr.min(cap),
            antialias: !reduced,
            shadows: !reduced,
            edge_lines: !reduced,
            low_power: reduced,
            entrance_duration_sec: if reduced {
                ENTRANCE_DURATION_REDUCED_SEC
            } else {
                ENTRANCE_DURATION_SEC
            },
            texture_size,
        }
    }

    pub fn is_reduced(&self) -> bool {
        self.tier == DeviceTier::Mobile || self.slow_connection
    }
}

/// Follows viewport width changes and reports tier transitions.
#[derive(Debug, Clone, Copy)]
pub struct TierTracker {
    current: DeviceTier,
}

impl TierTracker {
    pub fn new(viewport_width: f64) -> Self {
        Self {
            current: DeviceTier::classify(viewport_width),
        }
    }

    pub fn current(&self) -> DeviceTier {
        self.current
    }

    /// Returns the new tier only when this width crosses a breakpoint.
    pub fn observe(&mut self, viewport_width: f64) -> Option<DeviceTier> {
        let next = DeviceTier::classify(viewport_width);
        if next == self.current {
            return None;
        }
        self.current = next;
        Some(next)
    }
}
