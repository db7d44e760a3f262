/// Tuning values for layout, interaction, pricing and sizing.
///
/// These keep magic numbers out of the logic modules; the web shell and the
/// renderer read the same values so picking always matches what is drawn.

// Grid layout
pub const GRID_SIZE: usize = 2;
pub const TILE_GAP: f32 = 0.005; // spacing between tiles in world units
pub const TILE_DEPTH_RATIO: f32 = 0.2; // tile depth relative to its edge
pub const FACE_INSET: f32 = 0.95; // portion of the front face covered by the logo
pub const FACE_OPACITY: f32 = 0.95;

// Hover styling
pub const HOVER_SCALE: f32 = 1.05;
pub const EMISSIVE_IDLE: f32 = 0.2;
pub const EMISSIVE_HOVER: f32 = 0.5;
pub const IDLE_TILE_COLOR: &str = "#1a1a1a";
pub const HOVER_TAU_SEC: f32 = 0.08; // exponential approach time constant
pub const TWEEN_EPSILON: f32 = 1e-3;

// Interaction
pub const LEAVE_GRACE_SEC: f64 = 0.15; // deferral before a tile leave clears the active venue
pub const OVERLAY_ATTR: &str = "data-venue-overlay";

// Entrance animation (seconds)
pub const ENTRANCE_DURATION_SEC: f64 = 1.5;
pub const ENTRANCE_DURATION_REDUCED_SEC: f64 = 1.0;

// Camera
pub const CAMERA_Z: f32 = 7.0;
pub const CAMERA_FOV_DEG: f32 = 50.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;

// Device tiers (viewport CSS px)
pub const TABLET_MIN_WIDTH: f64 = 768.0;
pub const DESKTOP_MIN_WIDTH: f64 = 1024.0;

pub const TILE_SIZE_MOBILE: f32 = 1.5;
pub const TILE_SIZE_TABLET: f32 = 1.8;
pub const TILE_SIZE_DESKTOP: f32 = 2.0;

pub const TEXTURE_SIZE_MOBILE: u32 = 512;
pub const TEXTURE_SIZE_TABLET: u32 = 1024;
pub const TEXTURE_SIZE_DESKTOP: u32 = 2048;

pub const PIXEL_RATIO_CAP: f64 = 2.0;
pub const PIXEL_RATIO_CAP_REDUCED: f64 = 1.5;

// Booking
pub const HOURLY_RATE: u32 = 350;
pub const DEPOSIT_RATIO: f64 = 0.5;
pub const STARTING_PRICE: u32 = 2500;
pub const MIN_GUESTS: u32 = 1;
pub const MAX_GUESTS: u32 = 200;
pub const CARD_NUMBER_MAX_LEN: usize = 19;
pub const EXPIRY_MAX_LEN: usize = 5;
pub const CVV_MAX_LEN: usize = 4;
pub const CONFIRMATION_AUTO_CLOSE_MS: u32 = 3000;

// Embed loader
pub const EMBED_BASE_URL: &str = "https://steisaden.github.io/squareSpaceComponent/";
pub const EMBED_CONTAINER_ID: &str = "venue-square-container";
pub const EMBED_LOADER_ID: &str = "venue-square-loader";
pub const EMBED_LOADER_TIMEOUT_MS: u32 = 3000;
pub const EMBED_DEFAULT_WIDTH_PX: u32 = 800;
pub const EMBED_DEFAULT_HEIGHT_PX: u32 = 600;
pub const EMBED_SMALL_MOBILE_MAX: f64 = 479.0;
pub const EMBED_MOBILE_MAX: f64 = 767.0;
pub const EMBED_TABLET_MAX: f64 = 1023.0;
pub const EMBED_SMALL_MOBILE_HEIGHT: f64 = 350.0;
pub const EMBED_MOBILE_HEIGHT: f64 = 400.0;
pub const EMBED_TABLET_HEIGHT: f64 = 500.0;
pub const EMBED_TABLET_MAX_WIDTH_PX: u32 = 600;
pub const EMBED_SLOW_HEIGHT_FACTOR: f64 = 0.8;

// Renderer
pub const MSAA_SAMPLES: u32 = 4;
pub const AMBIENT_INTENSITY: f32 = 0.6;
pub const KEY_LIGHT_POSITION: [f32; 3] = [5.0, 5.0, 5.0];
pub const POINT_LIGHT_POSITION: [f32; 3] = [-5.0, -5.0, -5.0];
pub const POINT_LIGHT_INTENSITY: f32 = 0.5;
pub const SHADOW_OPACITY: f32 = 0.3;
pub const SHADOW_PLANE_GAP: f32 = 0.4; // distance behind the tile backs
pub const EDGE_ALPHA: f32 = 0.8;
