// Host-side tests for the tile layout, camera rays and tile picking.

use glam::Vec3;
use venue_cube::core::camera::Camera;
use venue_cube::core::constants::*;
use venue_cube::core::grid::*;
use venue_cube::core::venue::Corner;

const SIZE: f32 = 2.0;

fn rest_centers(tiles: &[Tile; 4]) -> Vec<Vec3> {
    tiles.iter().map(|t| t.center_at(1.0)).collect()
}

#[test]
fn layout_is_centered_with_a_gap() {
    let tiles = tile_layout(SIZE);
    let half_pitch = (SIZE + TILE_GAP) / 2.0;
    let tl = tiles[Corner::TopLeft.index()];
    let br = tiles[Corner::BottomRight.index()];
    assert_eq!(tl.corner, Corner::TopLeft);
    assert!((tl.rest_offset.x + half_pitch).abs() < 1e-6);
    assert!((tl.rest_offset.y - half_pitch).abs() < 1e-6);
    assert!((br.rest_offset.x - half_pitch).abs() < 1e-6);
    assert!((br.rest_offset.y + half_pitch).abs() < 1e-6);
    let sum = tiles.iter().fold(glam::Vec2::ZERO, |acc, t| acc + t.rest_offset);
    assert!(sum.length() < 1e-6);
}

#[test]
fn entrance_starts_from_the_grid_center() {
    for tile in tile_layout(SIZE) {
        assert_eq!(tile.center_at(0.0), Vec3::ZERO);
        assert_eq!(tile.center_at(1.0), tile.rest_offset.extend(0.0));
    }
}

#[test]
fn uv_quadrants_cover_the_logo_once() {
    let tiles = tile_layout(SIZE);
    assert_eq!(tiles[Corner::TopLeft.index()].uv_rect(), [0.0, 0.0, 0.5, 0.5]);
    assert_eq!(tiles[Corner::TopRight.index()].uv_rect(), [0.5, 0.0, 0.5, 0.5]);
    assert_eq!(tiles[Corner::BottomLeft.index()].uv_rect(), [0.0, 0.5, 0.5, 0.5]);
    assert_eq!(tiles[Corner::BottomRight.index()].uv_rect(), [0.5, 0.5, 0.5, 0.5]);
}

#[test]
fn ray_through_each_tile_center_picks_that_tile() {
    let tiles = tile_layout(SIZE);
    let centers = rest_centers(&tiles);
    let scales = [1.0; 4];
    let eye = Vec3::new(0.0, 0.0, CAMERA_Z);
    for (i, tile) in tiles.iter().enumerate() {
        let target = centers[i] + Vec3::Z * front_face_z(SIZE, 1.0);
        let dir = (target - eye).normalize();
        assert_eq!(
            pick_tile(eye, dir, &tiles, &centers, &scales, SIZE),
            Some(tile.corner)
        );
    }
}

#[test]
fn center_ray_falls_through_the_gap() {
    let tiles = tile_layout(SIZE);
    let centers = rest_centers(&tiles);
    let camera = Camera::new(1.0);
    let (ro, rd) = camera.ray_from_uv(0.5, 0.5);
    assert!((rd - Vec3::NEG_Z).length() < 1e-4);
    assert_eq!(pick_tile(ro, rd, &tiles, &centers, &[1.0; 4], SIZE), None);
}

#[test]
fn rays_outside_the_grid_or_parallel_miss() {
    let tiles = tile_layout(SIZE);
    let centers = rest_centers(&tiles);
    let eye = Vec3::new(0.0, 0.0, CAMERA_Z);
    let far_corner = Vec3::new(5.0, 5.0, 0.0);
    let dir = (far_corner - eye).normalize();
    assert_eq!(pick_tile(eye, dir, &tiles, &centers, &[1.0; 4], SIZE), None);
    assert_eq!(pick_tile(eye, Vec3::X, &tiles, &centers, &[1.0; 4], SIZE), None);
    // pointing away from the tiles
    assert_eq!(pick_tile(eye, Vec3::Z, &tiles, &centers, &[1.0; 4], SIZE), None);
}

#[test]
fn hover_scale_grows_the_hit_area() {
    let tiles = tile_layout(SIZE);
    let centers = rest_centers(&tiles);
    let tl = Corner::TopLeft.index();
    // just beyond the unscaled outer edge of the top-left tile
    let edge_x = centers[tl].x - SIZE / 2.0 - 0.02;
    let origin = Vec3::new(edge_x, centers[tl].y, CAMERA_Z);
    let mut scales = [1.0; 4];
    assert_eq!(pick_tile(origin, Vec3::NEG_Z, &tiles, &centers, &scales, SIZE), None);
    scales[tl] = HOVER_SCALE;
    assert_eq!(
        pick_tile(origin, Vec3::NEG_Z, &tiles, &centers, &scales, SIZE),
        Some(Corner::TopLeft)
    );
}

#[test]
fn upper_screen_rays_hit_top_tiles() {
    let tiles = tile_layout(SIZE);
    let centers = rest_centers(&tiles);
    let camera = Camera::new(1.0);
    let (ro, rd) = camera.ray_from_uv(0.3, 0.3);
    assert_eq!(
        pick_tile(ro, rd, &tiles, &centers, &[1.0; 4], SIZE),
        Some(Corner::TopLeft)
    );
    let (ro, rd) = camera.ray_from_uv(0.7, 0.7);
    assert_eq!(
        pick_tile(ro, rd, &tiles, &centers, &[1.0; 4], SIZE),
        Some(Corner::BottomRight)
    );
}
