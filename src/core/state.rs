//! Widget state shared by the DOM handlers and the frame loop.
//!
//! All inputs carry an explicit `now` in seconds so the whole widget can be
//! driven deterministically without a display.

use super::animation::EntranceAnimation;
use super::booking::BookingField;
use super::constants::{EMISSIVE_HOVER, EMISSIVE_IDLE, HOVER_SCALE, HOVER_TAU_SEC};
use super::grid::{pick_tile, tile_layout, Tile};
use super::interaction::{InteractionRouter, PointerKind, PressTarget};
use super::presentation::{Effect, Presentation, UiAction};
use super::scene::{compose, TileInstance, TileVisual};
use super::tier::RenderQuality;
use super::venue::{Corner, ResolvedConfig, Venue};
use glam::Vec3;

// frames longer than this are treated as a stall, not as elapsed tween time
const MAX_FRAME_DT_SEC: f64 = 0.1;

pub struct WidgetState {
    config: ResolvedConfig,
    quality: RenderQuality,
    tiles: [Tile; 4],
    visuals: [TileVisual; 4],
    router: InteractionRouter,
    presentation: Presentation,
    entrance: EntranceAnimation,
    last_tick: Option<f64>,
    ui_dirty: bool,
    redraw: bool,
}

impl WidgetState {
    pub fn new(config: ResolvedConfig, quality: RenderQuality) -> Self {
        Self {
            tiles: tile_layout(quality.tile_size),
            visuals: [TileVisual::default(); 4],
            router: InteractionRouter::new(),
            presentation: Presentation::new(),
            entrance: EntranceAnimation::new(quality.entrance_duration_sec),
            last_tick: None,
            ui_dirty: true,
            redraw: true,
            config,
            quality,
        }
    }

    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    pub fn quality(&self) -> &RenderQuality {
        &self.quality
    }

    pub fn router(&self) -> &InteractionRouter {
        &self.router
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    pub fn entrance(&self) -> &EntranceAnimation {
        &self.entrance
    }

    pub fn tiles(&self) -> &[Tile; 4] {
        &self.tiles
    }

    pub fn visual(&self, corner: Corner) -> &TileVisual {
        &self.visuals[corner.index()]
    }

    pub fn active_venue(&self) -> Option<&Venue> {
        self.router.active().map(|c| self.config.venue_at(c))
    }

    /// Venue whose overlay card is visible right now.
    pub fn overlay_venue(&self) -> Option<&Venue> {
        self.presentation
            .overlay_venue(self.router.active())
            .map(|c| self.config.venue_at(c))
    }

    pub fn instances(&self) -> [TileInstance; 4] {
        compose(&self.config, &self.tiles, &self.visuals, self.entrance.eased())
    }

    pub fn pick(&self, ray_origin: Vec3, ray_dir: Vec3) -> Option<Corner> {
        let eased = self.entrance.eased();
        let centers = self.tiles.map(|t| t.center_at(eased));
        let scales = self.visuals.map(|v| v.scale.value);
        pick_tile(
            ray_origin,
            ray_dir,
            &self.tiles,
            &centers,
            &scales,
            self.quality.tile_size,
        )
    }

    // ---------------- Inputs ----------------

    pub fn pointer_over(&mut self, picked: Option<Corner>, kind: PointerKind, now: f64) {
        let cursor = self.router.cursor();
        let changed = self.router.pointer_over(picked, kind, now);
        self.mark(changed);
        if self.router.cursor() != cursor {
            self.ui_dirty = true;
        }
    }

    pub fn pointer_left(&mut self, kind: PointerKind, now: f64) {
        self.pointer_over(None, kind, now);
    }

    pub fn pointer_down(&mut self, picked: Option<Corner>, kind: PointerKind) {
        let changed = self.router.tap(picked, kind);
        self.mark(changed);
    }

    /// Link to follow for a click on a tile. Only mouse and pen clicks count,
    /// and only once the tiles have settled into place.
    pub fn click_link(&self, picked: Option<Corner>, kind: PointerKind) -> Option<&str> {
        if !kind.can_hover() || !self.entrance.is_complete() {
            return None;
        }
        picked.map(|c| self.config.venue_at(c).link.as_str())
    }

    pub fn overlay_hover(&mut self, hovered: bool, now: f64) {
        self.router.overlay_hover(hovered, now);
    }

    pub fn global_press(&mut self, target: PressTarget) {
        let changed = self.router.global_press(target);
        self.mark(changed);
    }

    pub fn dispatch(&mut self, action: UiAction) -> Effect {
        let outcome = self.presentation.dispatch(action);
        self.mark(outcome.changed);
        outcome.effect
    }

    pub fn set_field(&mut self, field: BookingField, value: &str) {
        self.presentation.set_field(field, value);
    }

    pub fn request_redraw(&mut self) {
        self.redraw = true;
    }

    // ---------------- Frame ----------------

    /// Advance animations to `now`. Returns whether a redraw is needed.
    pub fn advance(&mut self, now: f64) -> bool {
        let dt = match self.last_tick {
            Some(prev) => (now - prev).clamp(0.0, MAX_FRAME_DT_SEC) as f32,
            None => 0.0,
        };
        self.last_tick = Some(now);

        let was_animating = !self.entrance.is_complete();
        self.entrance.tick(now);

        if self.router.tick(now) {
            self.ui_dirty = true;
        }

        let active = self.router.active();
        for (tile, visual) in self.tiles.iter().zip(self.visuals.iter_mut()) {
            let on = active == Some(tile.corner);
            visual.scale.set_target(if on { HOVER_SCALE } else { 1.0 });
            visual.emissive.set_target(if on { EMISSIVE_HOVER } else { EMISSIVE_IDLE });
            visual.highlight.set_target(if on { 1.0 } else { 0.0 });
        }
        let mut moving = false;
        for visual in self.visuals.iter_mut() {
            if !visual.is_settled() {
                moving = true;
            }
            visual.scale.step(dt, HOVER_TAU_SEC);
            visual.emissive.step(dt, HOVER_TAU_SEC);
            visual.highlight.step(dt, HOVER_TAU_SEC);
        }

        std::mem::take(&mut self.redraw) || was_animating || moving
    }

    pub fn is_settled(&self) -> bool {
        self.entrance.is_complete() && self.visuals.iter().all(|v| v.is_settled())
    }

    /// Whether the DOM overlay/modal needs refreshing since the last call.
    pub fn take_ui_dirty(&mut self) -> bool {
        std::mem::take(&mut self.ui_dirty)
    }

    fn mark(&mut self, changed: bool) {
        if changed {
            self.ui_dirty = true;
            self.redraw = true;
        }
    }
}
