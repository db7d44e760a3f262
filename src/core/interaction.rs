//! Pointer routing: hover on mouse/pen, tap on touch, outside-press dismissal.
//!
//! Every method returns `true` when the active venue changed so the caller
//! knows to refresh the overlay.

use super::constants::LEAVE_GRACE_SEC;
use super::venue::Corner;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Pen,
    Touch,
}

impl PointerKind {
    /// Map a DOM `pointerType`; unknown values are treated as a mouse.
    pub fn parse(pointer_type: &str) -> Self {
        match pointer_type {
            "touch" => PointerKind::Touch,
            "pen" => PointerKind::Pen,
            _ => PointerKind::Mouse,
        }
    }

    pub fn can_hover(self) -> bool {
        self != PointerKind::Touch
    }
}

/// Where a document-level press landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressTarget {
    Overlay,
    Surface,
    Outside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    Pointer,
}

impl Cursor {
    pub fn as_css(self) -> &'static str {
        match self {
            Cursor::Default => "default",
            Cursor::Pointer => "pointer",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InteractionRouter {
    active: Option<Corner>,
    hovered_tile: Option<Corner>,
    overlay_hovered: bool,
    pending_clear_at: Option<f64>,
    cursor: Cursor,
    /// The active venue was picked by hovering rather than a tap.
    hover_selected: bool,
}

impl InteractionRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<Corner> {
        self.active
    }

    pub fn hovered_tile(&self) -> Option<Corner> {
        self.hovered_tile
    }

    pub fn overlay_hovered(&self) -> bool {
        self.overlay_hovered
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn has_pending_clear(&self) -> bool {
        self.pending_clear_at.is_some()
    }

    /// The pointer moved over the render surface and `picked` is the tile
    /// under it (or `None` for empty space).
    pub fn pointer_over(&mut self, picked: Option<Corner>, kind: PointerKind, now: f64) -> bool {
        if !kind.can_hover() {
            return false;
        }
        if picked == self.hovered_tile {
            // empty space after the overlay card: still nothing under the pointer
            if picked.is_none() {
                self.schedule_clear(now);
            }
            return false;
        }
        self.hovered_tile = picked;
        match picked {
            Some(corner) => {
                self.hover_selected = true;
                self.set_active(corner)
            }
            None => {
                self.cursor = Cursor::Default;
                self.schedule_clear(now);
                false
            }
        }
    }

    /// The pointer left the render surface entirely.
    pub fn pointer_left_surface(&mut self, kind: PointerKind, now: f64) -> bool {
        self.pointer_over(None, kind, now)
    }

    /// A press on the surface. Only touch presses select a tile; mouse and pen
    /// already selected it on hover.
    pub fn tap(&mut self, picked: Option<Corner>, kind: PointerKind) -> bool {
        match (kind, picked) {
            (PointerKind::Touch, Some(corner)) => {
                self.hover_selected = false;
                self.set_active(corner)
            }
            _ => false,
        }
    }

    pub fn overlay_hover(&mut self, hovered: bool, now: f64) {
        self.overlay_hovered = hovered;
        if hovered {
            self.pending_clear_at = None;
        } else if self.hover_selected && self.hovered_tile.is_none() {
            self.schedule_clear(now);
        }
    }

    /// Capture-phase press anywhere in the document.
    pub fn global_press(&mut self, target: PressTarget) -> bool {
        if self.active.is_none() || target != PressTarget::Outside {
            return false;
        }
        self.active = None;
        self.overlay_hovered = false;
        self.pending_clear_at = None;
        true
    }

    /// Commit a deferred leave once its grace period has elapsed.
    pub fn tick(&mut self, now: f64) -> bool {
        match self.pending_clear_at {
            Some(at) if now >= at => {
                self.pending_clear_at = None;
                if self.overlay_hovered || self.hovered_tile.is_some() || self.active.is_none() {
                    return false;
                }
                self.active = None;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) -> bool {
        let changed = self.active.is_some();
        *self = Self::default();
        changed
    }

    /// Start the leave grace period unless one is already running.
    fn schedule_clear(&mut self, now: f64) {
        if self.active.is_some() && !self.overlay_hovered && self.pending_clear_at.is_none() {
            self.pending_clear_at = Some(now + LEAVE_GRACE_SEC);
        }
    }

    fn set_active(&mut self, corner: Corner) -> bool {
        self.pending_clear_at = None;
        self.cursor = Cursor::Pointer;
        let changed = self.active != Some(corner);
        self.active = Some(corner);
        changed
    }
}
