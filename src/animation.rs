//! Time-based transitions for bars and the value axis.
//!
//! Everything here is a pure function of the elapsed time since the render
//! that started the transition, so the view only has to remember when that
//! render happened and ask for samples on each frame.

use std::time::Duration;

/// Rectangle in plot-local coordinates (origin at the top-left of the plot area).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BarGeometry {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BarGeometry {
    /// A zero-height bar sitting on the baseline.
    pub fn collapsed(x: f32, width: f32, baseline: f32) -> Self {
        Self {
            x,
            y: baseline,
            width,
            height: 0.0,
        }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }

    /// Pointer target of the bar: at least `min_height` tall, grown upwards
    /// from its bottom edge so flat bars stay reachable.
    pub fn hit_area(&self, min_height: f32) -> BarGeometry {
        if self.height >= min_height {
            return *self;
        }
        let bottom = self.y + self.height;
        BarGeometry {
            y: bottom - min_height,
            height: min_height,
            ..*self
        }
    }

    pub fn lerp(&self, to: &BarGeometry, t: f32) -> BarGeometry {
        BarGeometry {
            x: lerp(self.x, to.x, t),
            y: lerp(self.y, to.y, t),
            width: lerp(self.width, to.width, t),
            height: lerp(self.height, to.height, t),
        }
    }
}

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Cubic in-out easing, the default curve of d3 transitions.
pub fn ease_cubic_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

/// Progress in `[0, 1]` of a transition that starts after `delay`.
pub fn progress(elapsed: Duration, delay: Duration, duration: Duration) -> f32 {
    if elapsed <= delay {
        return 0.0;
    }
    if duration.is_zero() {
        return 1.0;
    }
    let t = (elapsed - delay).as_secs_f32() / duration.as_secs_f32();
    t.min(1.0)
}

/// One bar moving from `from` to `to`.
#[derive(Clone, Debug, PartialEq)]
pub struct BarTransition {
    pub from: BarGeometry,
    pub to: BarGeometry,
    pub delay: Duration,
    pub duration: Duration,
}

impl BarTransition {
    pub fn sample(&self, elapsed: Duration) -> BarGeometry {
        let t = ease_cubic_in_out(progress(elapsed, self.delay, self.duration));
        self.from.lerp(&self.to, t)
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.delay + self.duration
    }
}

/// A single entry of an entrance plan.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationStep {
    pub key: String,
    pub target: BarGeometry,
    pub delay: Duration,
}

/// Ordered (shape, target geometry, start delay) triples for one render.
///
/// Delays grow with the position in the plan; bars never wait for each other.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntrancePlan {
    pub steps: Vec<AnimationStep>,
    pub duration: Duration,
}

impl EntrancePlan {
    pub fn staggered(
        targets: impl IntoIterator<Item = (String, BarGeometry)>,
        duration: Duration,
        stagger: Duration,
    ) -> Self {
        let steps = targets
            .into_iter()
            .enumerate()
            .map(|(i, (key, target))| AnimationStep {
                key,
                target,
                delay: stagger * i as u32,
            })
            .collect();
        Self { steps, duration }
    }

    /// Time after which every step has reached its target.
    pub fn total_duration(&self) -> Duration {
        self.steps
            .iter()
            .map(|s| s.delay + self.duration)
            .max()
            .unwrap_or_default()
    }
}

/// Animated `[0, max]` domain of the value axis.
#[derive(Clone, Debug, PartialEq)]
pub struct DomainTransition {
    pub from_max: f64,
    pub to_max: f64,
    pub duration: Duration,
}

impl DomainTransition {
    pub fn settled(max: f64) -> Self {
        Self {
            from_max: max,
            to_max: max,
            duration: Duration::ZERO,
        }
    }

    pub fn sample(&self, elapsed: Duration) -> f64 {
        let t = ease_cubic_in_out(progress(elapsed, Duration::ZERO, self.duration)) as f64;
        self.from_max + (self.to_max - self.from_max) * t
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}
