//! Entrance animation and hover tweens, driven by an injected clock.

use super::constants::TWEEN_EPSILON;

#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// The "break apart" entrance: tiles travel from the grid center to their
/// resting offsets over `duration_sec`.
#[derive(Debug, Clone)]
pub struct EntranceAnimation {
    duration_sec: f64,
    started_at: Option<f64>,
    progress: f32,
}

impl EntranceAnimation {
    pub fn new(duration_sec: f64) -> Self {
        Self {
            duration_sec: duration_sec.max(0.0),
            started_at: None,
            progress: 0.0,
        }
    }

    pub fn duration_sec(&self) -> f64 {
        self.duration_sec
    }

    /// Advance to `now_sec`. The first call records the start time.
    /// Returns the eased progress.
    pub fn tick(&mut self, now_sec: f64) -> f32 {
        if self.is_complete() {
            return 1.0;
        }
        let start = *self.started_at.get_or_insert(now_sec);
        let elapsed = (now_sec - start).max(0.0);
        let raw = if self.duration_sec <= 0.0 || elapsed >= self.duration_sec {
            1.0
        } else {
            (elapsed / self.duration_sec) as f32
        };
        // a clock that steps backwards never rewinds the animation
        self.progress = self.progress.max(raw.clamp(0.0, 1.0));
        self.eased()
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn eased(&self) -> f32 {
        if self.is_complete() {
            1.0
        } else {
            ease_out_cubic(self.progress)
        }
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }
}

/// Exponential approach toward a target value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub value: f32,
    pub target: f32,
}

impl Tween {
    pub fn new(value: f32) -> Self {
        Self {
            value,
            target: value,
        }
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    pub fn step(&mut self, dt_sec: f32, tau_sec: f32) {
        if self.is_settled() {
            self.value = self.target;
            return;
        }
        let alpha = if tau_sec <= 0.0 {
            1.0
        } else {
            1.0 - (-dt_sec.max(0.0) / tau_sec).exp()
        };
        self.value += (self.target - self.value) * alpha;
        if self.is_settled() {
            self.value = self.target;
        }
    }

    pub fn is_settled(&self) -> bool {
        (self.target - self.value).abs() <= TWEEN_EPSILON
    }
}
