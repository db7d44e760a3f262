//! Venue data and the config resolver.
//!
//! Host pages supply a partial [`RawConfig`]; [`resolve_config`] overlays it on
//! the compiled-in defaults. The corner position is the join key between a
//! venue and its grid cell, so a resolved config always holds exactly one venue
//! per [`Corner`].

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config is empty")]
    Empty,
    #[error("config JSON is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// Grid cell `(x, y)` with `y` growing upward.
    pub fn grid_cell(self) -> (usize, usize) {
        match self {
            Corner::TopLeft => (0, 1),
            Corner::TopRight => (1, 1),
            Corner::BottomLeft => (0, 0),
            Corner::BottomRight => (1, 0),
        }
    }

    pub fn from_grid_cell(x: usize, y: usize) -> Option<Corner> {
        match (x, y) {
            (0, 1) => Some(Corner::TopLeft),
            (1, 1) => Some(Corner::TopRight),
            (0, 0) => Some(Corner::BottomLeft),
            (1, 0) => Some(Corner::BottomRight),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Corner::TopLeft => "top-left",
            Corner::TopRight => "top-right",
            Corner::BottomLeft => "bottom-left",
            Corner::BottomRight => "bottom-right",
        }
    }

    pub fn parse(s: &str) -> Option<Corner> {
        Corner::ALL.into_iter().find(|c| c.as_str() == s.trim())
    }

    /// Stable slot index in [`Corner::ALL`] order.
    pub fn index(self) -> usize {
        match self {
            Corner::TopLeft => 0,
            Corner::TopRight => 1,
            Corner::BottomLeft => 2,
            Corner::BottomRight => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub position: Corner,
    pub color: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVenue {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub position: Option<Corner>,
    pub color: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawConfig {
    pub headline: Option<String>,
    pub subheadline: Option<String>,
    pub primary_cta_label: Option<String>,
    pub secondary_cta_label: Option<String>,
    pub logo_texture_url: Option<String>,
    pub venues: Option<Vec<RawVenue>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub headline: String,
    pub subheadline: String,
    pub primary_cta_label: String,
    pub secondary_cta_label: String,
    pub logo_texture_url: String,
    /// Always four entries, in [`Corner::ALL`] order.
    pub venues: Vec<Venue>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            headline: "Discover Your Perfect Venue".to_string(),
            subheadline: "Hover or tap squares to explore our premium spaces".to_string(),
            primary_cta_label: "Learn More".to_string(),
            secondary_cta_label: "Book Now".to_string(),
            logo_texture_url: DEFAULT_LOGO_URL.to_string(),
            venues: default_venues(),
        }
    }
}

impl ResolvedConfig {
    pub fn venue_at(&self, corner: Corner) -> &Venue {
        &self.venues[corner.index()]
    }

    pub fn venue_by_id(&self, id: &str) -> Option<&Venue> {
        self.venues.iter().find(|v| v.id == id)
    }
}

pub const DEFAULT_LOGO_URL: &str = "assets/logo.png";

const IMAGE_QUERY: &str =
    "crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixlib=rb-4.1.0&q=80&w=1080";

pub fn default_venues() -> Vec<Venue> {
    let venue = |id: &str, name: &str, description: &str, photo: &str, position, color: &str| Venue {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        image_url: format!("https://images.unsplash.com/{photo}?{IMAGE_QUERY}"),
        position,
        color: color.to_string(),
        link: format!("/spaces/{id}"),
    };
    vec![
        venue(
            "wedding",
            "The Grand Ballroom",
            "Best for elegant weddings and milestone celebrations with timeless sophistication",
            "photo-1674970538959-e7475d8d376f",
            Corner::TopLeft,
            "#E8D5C4",
        ),
        venue(
            "corporate",
            "Executive Center",
            "Best for corporate events, conferences, and professional gatherings with cutting-edge technology",
            "photo-1758285477208-2300ae0c668d",
            Corner::TopRight,
            "#C4D5E8",
        ),
        venue(
            "dining",
            "The Garden Terrace",
            "Best for intimate dining experiences, cocktail receptions, and culinary showcases",
            "photo-1726533765356-2608b035ff6b",
            Corner::BottomLeft,
            "#D4E8C4",
        ),
        venue(
            "gallery",
            "The Atrium Gallery",
            "Best for art exhibitions, product launches, and creative showcases with natural lighting",
            "photo-1761386001767-4bc6f2648077",
            Corner::BottomRight,
            "#E8C4D5",
        ),
    ]
}

pub fn parse_raw_config(text: &str) -> Result<RawConfig, ConfigError> {
    if text.trim().is_empty() {
        return Err(ConfigError::Empty);
    }
    Ok(serde_json::from_str(text)?)
}

/// Parse one config candidate. Malformed JSON is logged and treated as absent.
pub fn parse_config_candidate(source: &str, text: Option<&str>) -> Option<RawConfig> {
    let text = text?;
    match parse_raw_config(text) {
        Ok(raw) => Some(raw),
        Err(ConfigError::Empty) => None,
        Err(e) => {
            log::warn!("[config] ignoring {}: {}", source, e);
            None
        }
    }
}

pub fn resolve_config(raw: Option<RawConfig>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();
    let Some(raw) = raw else {
        return defaults;
    };
    ResolvedConfig {
        headline: pick(raw.headline, defaults.headline),
        subheadline: pick(raw.subheadline, defaults.subheadline),
        primary_cta_label: pick(raw.primary_cta_label, defaults.primary_cta_label),
        secondary_cta_label: pick(raw.secondary_cta_label, defaults.secondary_cta_label),
        logo_texture_url: pick(raw.logo_texture_url, defaults.logo_texture_url),
        venues: merge_venues(defaults.venues, raw.venues.as_deref().unwrap_or(&[])),
    }
}

fn pick(value: Option<String>, fallback: String) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => fallback,
    }
}

fn merge_venues(defaults: Vec<Venue>, overrides: &[RawVenue]) -> Vec<Venue> {
    if overrides.is_empty() {
        return defaults;
    }
    let default_ids: Vec<String> = defaults.iter().map(|v| v.id.clone()).collect();
    // An entry naming a default venue by id only ever applies to that venue.
    let names_default = |o: &RawVenue| {
        o.id
            .as_deref()
            .is_some_and(|id| default_ids.iter().any(|d| d == id))
    };
    defaults
        .into_iter()
        .map(|base| {
            let found = overrides
                .iter()
                .find(|o| o.id.as_deref() == Some(base.id.as_str()))
                .or_else(|| {
                    overrides
                        .iter()
                        .find(|o| o.position == Some(base.position) && !names_default(o))
                });
            match found {
                Some(o) => apply_override(base, o),
                None => base,
            }
        })
        .collect()
}

fn apply_override(base: Venue, o: &RawVenue) -> Venue {
    let color = match o.color.as_deref() {
        Some(c) if parse_hex_color(c).is_some() => c.trim().to_string(),
        Some(c) if !c.trim().is_empty() => {
            log::warn!("[config] venue {}: invalid color {:?}, keeping default", base.id, c);
            base.color
        }
        _ => base.color,
    };
    Venue {
        id: pick(o.id.clone(), base.id),
        name: pick(o.name.clone(), base.name),
        description: pick(o.description.clone(), base.description),
        image_url: pick(o.image_url.clone(), base.image_url),
        position: base.position,
        color,
        link: pick(o.link.clone(), base.link),
    }
}

/// Parse `#rgb` or `#rrggbb` into sRGB components in `[0, 1]`.
pub fn parse_hex_color(s: &str) -> Option<[f32; 3]> {
    let hex = s.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |v: u8| v as f32 / 255.0;
    match hex.len() {
        3 => {
            let mut out = [0.0; 3];
            for (i, c) in hex.chars().enumerate() {
                let d = c.to_digit(16)? as u8;
                out[i] = channel(d * 17);
            }
            Some(out)
        }
        6 => {
            let mut out = [0.0; 3];
            for i in 0..3 {
                let v = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).ok()?;
                out[i] = channel(v);
            }
            Some(out)
        }
        _ => None,
    }
}

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Hex color to linear RGB; unparsable input maps to black.
pub fn hex_to_linear(s: &str) -> [f32; 3] {
    let [r, g, b] = parse_hex_color(s).unwrap_or([0.0; 3]);
    [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b)]
}
