//! The 2x2 tile layout and ray picking against it.

use super::constants::{GRID_SIZE, TILE_DEPTH_RATIO, TILE_GAP};
use super::venue::Corner;
use glam::{Vec2, Vec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pub corner: Corner,
    pub grid_x: usize,
    pub grid_y: usize,
    /// Resting center once the entrance animation completes.
    pub rest_offset: Vec2,
}

impl Tile {
    /// Center at the given eased entrance progress.
    pub fn center_at(&self, eased: f32) -> Vec3 {
        (self.rest_offset * eased).extend(0.0)
    }

    /// Logo quadrant as `[u0, v0, du, dv]`, texture rows growing downward.
    pub fn uv_rect(&self) -> [f32; 4] {
        let cell = 1.0 / GRID_SIZE as f32;
        [
            self.grid_x as f32 * cell,
            (GRID_SIZE - 1 - self.grid_y) as f32 * cell,
            cell,
            cell,
        ]
    }
}

/// Tiles in [`Corner::ALL`] order.
pub fn tile_layout(tile_size: f32) -> [Tile; 4] {
    let pitch = tile_size + TILE_GAP;
    let offset = (GRID_SIZE - 1) as f32 * pitch / 2.0;
    Corner::ALL.map(|corner| {
        let (gx, gy) = corner.grid_cell();
        Tile {
            corner,
            grid_x: gx,
            grid_y: gy,
            rest_offset: Vec2::new(gx as f32 * pitch - offset, gy as f32 * pitch - offset),
        }
    })
}

/// Z of a tile's front face.
#[inline]
pub fn front_face_z(tile_size: f32, scale: f32) -> f32 {
    tile_size * TILE_DEPTH_RATIO * scale / 2.0
}

/// Hit-test a ray against the front faces of the tiles.
///
/// `centers` and `scales` are indexed like `tiles`. The nearest hit wins.
pub fn pick_tile(
    ray_origin: Vec3,
    ray_dir: Vec3,
    tiles: &[Tile],
    centers: &[Vec3],
    scales: &[f32],
    tile_size: f32,
) -> Option<Corner> {
    if ray_dir.z.abs() < 1e-6 {
        return None;
    }
    let mut best: Option<(Corner, f32)> = None;
    for (i, tile) in tiles.iter().enumerate() {
        let center = centers.get(i).copied().unwrap_or(Vec3::ZERO);
        let scale = scales.get(i).copied().unwrap_or(1.0);
        let face_z = center.z + front_face_z(tile_size, scale);
        let t = (face_z - ray_origin.z) / ray_dir.z;
        if t < 0.0 {
            continue;
        }
        let hit = ray_origin + ray_dir * t;
        let half = tile_size * scale / 2.0;
        if (hit.x - center.x).abs() <= half && (hit.y - center.y).abs() <= half {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((tile.corner, t)),
            }
        }
    }
    best.map(|(c, _)| c)
}
