// Host-side tests for constants and their relationships.

use venue_cube::core::constants::*;
use venue_cube::core::TILES_WGSL;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // Layout
    assert_eq!(GRID_SIZE, 2);
    assert!(TILE_GAP > 0.0 && TILE_GAP < TILE_SIZE_MOBILE);
    assert!(FACE_INSET > 0.0 && FACE_INSET <= 1.0);
    assert!(FACE_OPACITY > 0.0 && FACE_OPACITY <= 1.0);

    // Hover never shrinks and glows brighter than idle
    assert!(HOVER_SCALE > 1.0);
    assert!(EMISSIVE_HOVER > EMISSIVE_IDLE);
    assert!(HOVER_TAU_SEC > 0.0);

    // Tiers grow with the viewport
    assert!(TABLET_MIN_WIDTH < DESKTOP_MIN_WIDTH);
    assert!(TILE_SIZE_MOBILE < TILE_SIZE_TABLET && TILE_SIZE_TABLET < TILE_SIZE_DESKTOP);
    assert!(TEXTURE_SIZE_MOBILE < TEXTURE_SIZE_TABLET && TEXTURE_SIZE_TABLET < TEXTURE_SIZE_DESKTOP);
    assert!(PIXEL_RATIO_CAP_REDUCED < PIXEL_RATIO_CAP);
    assert!(ENTRANCE_DURATION_REDUCED_SEC < ENTRANCE_DURATION_SEC);

    // Camera
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_FAR);
    assert!(CAMERA_Z > CAMERA_NEAR && CAMERA_Z < CAMERA_FAR);
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);

    // Renderer
    assert!(MSAA_SAMPLES.is_power_of_two());
    assert!(SHADOW_OPACITY > 0.0 && SHADOW_OPACITY < 1.0);
    assert!(EDGE_ALPHA > 0.0 && EDGE_ALPHA <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn booking_and_embed_values_agree() {
    assert!(MIN_GUESTS >= 1 && MIN_GUESTS < MAX_GUESTS);
    assert!(DEPOSIT_RATIO > 0.0 && DEPOSIT_RATIO < 1.0);
    assert!(STARTING_PRICE > HOURLY_RATE);
    assert!(CONFIRMATION_AUTO_CLOSE_MS > 0);

    assert!(EMBED_SMALL_MOBILE_MAX < EMBED_MOBILE_MAX && EMBED_MOBILE_MAX < EMBED_TABLET_MAX);
    // the embed's tablet band ends where the widget's desktop tier starts
    assert_eq!(EMBED_TABLET_MAX + 1.0, DESKTOP_MIN_WIDTH);
    assert!(EMBED_SMALL_MOBILE_HEIGHT < EMBED_MOBILE_HEIGHT);
    assert!(EMBED_MOBILE_HEIGHT < EMBED_TABLET_HEIGHT);
    assert!(EMBED_TABLET_MAX_WIDTH_PX < EMBED_DEFAULT_WIDTH_PX);
    assert!(EMBED_SLOW_HEIGHT_FACTOR > 0.0 && EMBED_SLOW_HEIGHT_FACTOR < 1.0);
    assert!(EMBED_BASE_URL.starts_with("https://"));
}

#[test]
fn shader_exposes_every_entry_point() {
    for entry in ["vs_tile", "fs_tile", "vs_shadow", "fs_shadow", "vs_edge", "fs_edge"] {
        assert!(TILES_WGSL.contains(&format!("fn {entry}(")), "missing {entry}");
    }
}
