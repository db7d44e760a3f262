//! Platform-independent widget logic. Nothing in here touches the DOM or
//! the GPU, so it builds and tests on the host.

pub mod animation;
pub mod booking;
pub mod camera;
pub mod constants;
pub mod embed;
pub mod grid;
pub mod interaction;
pub mod markup;
pub mod presentation;
pub mod scene;
pub mod state;
pub mod tier;
pub mod venue;

pub use booking::{BookingError, BookingField, BookingForm, BookingStep, DurationHours, Quote};
pub use interaction::{Cursor, InteractionRouter, PointerKind, PressTarget};
pub use presentation::{Effect, ModalState, Presentation, UiAction};
pub use state::WidgetState;
pub use tier::{DeviceTier, Environment, RenderQuality, TierTracker};
pub use venue::{Corner, ResolvedConfig, Venue};

pub static TILES_WGSL: &str = include_str!("../../shaders/tiles.wgsl");
