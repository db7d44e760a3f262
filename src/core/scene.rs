use super::animation::Tween;
use super::constants::{EMISSIVE_IDLE, IDLE_TILE_COLOR};
use super::grid::Tile;
use super::venue::{hex_to_linear, Corner, ResolvedConfig};
use glam::Vec3;

/// Hover-driven appearance of one tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileVisual {
    pub scale: Tween,
    pub emissive: Tween,
    /// 0 = idle color, 1 = venue color.
    pub highlight: Tween,
}

impl Default for TileVisual {
    fn default() -> Self {
        Self {
            scale: Tween::new(1.0),
            emissive: Tween::new(EMISSIVE_IDLE),
            highlight: Tween::new(0.0),
        }
    }
}

impl TileVisual {
    pub fn is_settled(&self) -> bool {
        self.scale.is_settled() && self.emissive.is_settled() && self.highlight.is_settled()
    }
}

/// Everything the renderer needs for one tile, colors in linear RGB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileInstance {
    pub corner: Corner,
    pub center: Vec3,
    pub scale: f32,
    pub base_color: [f32; 3],
    pub emissive: [f32; 3],
    pub uv_rect: [f32; 4],
}

pub fn compose(
    config: &ResolvedConfig,
    tiles: &[Tile; 4],
    visuals: &[TileVisual; 4],
    eased: f32,
) -> [TileInstance; 4] {
    let idle = hex_to_linear(IDLE_TILE_COLOR);
    std::array::from_fn(|i| {
        let tile = &tiles[i];
        let visual = &visuals[i];
        let venue = hex_to_linear(&config.venue_at(tile.corner).color);
        let h = visual.highlight.value.clamp(0.0, 1.0);
        let e = visual.emissive.value.max(0.0);
        TileInstance {
            corner: tile.corner,
            center: tile.center_at(eased),
            scale: visual.scale.value,
            base_color: std::array::from_fn(|c| idle[c] + (venue[c] - idle[c]) * h),
            emissive: venue.map(|c| c * e),
            uv_rect: tile.uv_rect(),
        }
    })
}
