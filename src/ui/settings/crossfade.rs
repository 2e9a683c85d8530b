// SPDX-License-Identifier: MPL-2.0
//! Cross-fade transition state for the settings content panel.
//!
//! The panel content is keyed on the selected category; when the key changes
//! the old content dissolves through the card surface into the new one. This
//! module only tracks timing and progress, the view decides how alphas map
//! onto widgets. Ticks carry an explicit `Instant` so the state machine stays
//! testable without real sleeps.

use super::Category;
use std::time::{Duration, Instant};

/// Duration of the content cross-fade.
pub const CROSSFADE_DURATION: Duration = Duration::from_millis(240);

/// Easing applied to the raw progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseInOutCubic,
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0).
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Tracks one running cross-fade between two category panels.
#[derive(Debug, Clone)]
pub struct Crossfade {
    outgoing: Option<Category>,
    started: Option<Instant>,
    duration: Duration,
    easing: Easing,
    progress: f32,
}

impl Default for Crossfade {
    fn default() -> Self {
        Self::new(CROSSFADE_DURATION)
    }
}

impl Crossfade {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            outgoing: None,
            started: None,
            duration,
            easing: Easing::EaseInOutCubic,
            progress: 1.0,
        }
    }

    /// Starts a fade away from `from` at `now`.
    ///
    /// Starting while a fade is already running retargets it: the clock
    /// restarts and the previously outgoing panel is replaced, matching what
    /// the screen shows when selection changes mid-fade.
    pub fn begin(&mut self, from: Category, now: Instant) {
        self.outgoing = Some(from);
        self.started = Some(now);
        self.progress = 0.0;
    }

    /// Advances the fade. Returns `true` while the fade is still running.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(started) = self.started else {
            return false;
        };

        let elapsed = now.saturating_duration_since(started);
        let raw = elapsed.as_secs_f32() / self.duration.as_secs_f32();

        if raw >= 1.0 {
            self.finish();
            false
        } else {
            self.progress = self.easing.apply(raw);
            true
        }
    }

    /// Completes the fade immediately (reduce-motion path).
    pub fn finish(&mut self) {
        self.outgoing = None;
        self.started = None;
        self.progress = 1.0;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.started.is_some()
    }

    /// The panel being faded out, while active.
    #[must_use]
    pub fn outgoing(&self) -> Option<Category> {
        self.outgoing
    }

    /// Eased progress in `0.0..=1.0`; `1.0` when idle.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Alpha of the dissolve scrim layered over the panel.
    ///
    /// Rises to opaque over the first half of the fade (hiding the outgoing
    /// panel) and falls back over the second half (revealing the incoming
    /// one).
    #[must_use]
    pub fn scrim_alpha(&self) -> f32 {
        if !self.is_active() {
            return 0.0;
        }
        if self.progress < 0.5 {
            self.progress * 2.0
        } else {
            (1.0 - self.progress) * 2.0
        }
    }

    /// Whether the outgoing panel is still the visible one.
    #[must_use]
    pub fn showing_outgoing(&self) -> bool {
        self.is_active() && self.progress < 0.5
    }
}
