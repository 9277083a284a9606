//! Easing, tweens and per-frame layout for the progress animations.

use crate::path::{Point, RoutePath};

/// Runner animation length on the map.
pub const MAP_ANIMATION_MS: f64 = 2_000.0;
/// Stroke transition length on the progress bar.
pub const TRACKER_ANIMATION_MS: f64 = 1_500.0;

/// Cubic ease-out, `1 - (1 - t)^3`, with `t` clamped to `[0, 1]`.
#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = if t.is_nan() { 1.0 } else { t.clamp(0.0, 1.0) };
    1.0 - (1.0 - t).powi(3)
}

/// Eased interpolation between two values over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub duration_ms: f64,
}

impl Tween {
    #[must_use]
    pub const fn new(from: f64, to: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            duration_ms,
        }
    }

    /// Collapse to a single step when motion is reduced.
    #[must_use]
    pub const fn with_reduced_motion(self, reduced: bool) -> Self {
        if reduced {
            Self {
                duration_ms: 0.0,
                ..self
            }
        } else {
            self
        }
    }

    /// Linear progress in `[0, 1]` after `elapsed_ms`.
    #[must_use]
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 || !self.duration_ms.is_finite() {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn sample(&self, elapsed_ms: f64) -> f64 {
        let eased = ease_out_cubic(self.progress(elapsed_ms));
        (self.to - self.from).mul_add(eased, self.from)
    }

    #[must_use]
    pub fn is_complete(&self, elapsed_ms: f64) -> bool {
        self.progress(elapsed_ms) >= 1.0
    }
}

/// Runner placement for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunnerFrame {
    /// Position in percent of the artwork.
    pub position: Point,
}

impl RunnerFrame {
    #[must_use]
    pub fn left(&self) -> String {
        format!("{}%", self.position.x)
    }

    #[must_use]
    pub fn top(&self) -> String {
        format!("{}%", self.position.y)
    }

    /// Clip for the colored overlay: everything east of the runner stays visible.
    #[must_use]
    pub fn clip_path(&self) -> String {
        format!("inset(0 0 0 {}%)", self.position.x)
    }
}

/// Drives the runner from the route start to `percent` of the route.
#[derive(Debug, Clone, PartialEq)]
pub struct RunnerAnimation {
    route: RoutePath,
    tween: Tween,
}

impl RunnerAnimation {
    #[must_use]
    pub fn new(route: RoutePath, percent: f64, duration_ms: f64, reduced_motion: bool) -> Self {
        let target = route.total_length() * percent.clamp(0.0, 100.0) / 100.0;
        let tween = Tween::new(0.0, target, duration_ms).with_reduced_motion(reduced_motion);
        Self { route, tween }
    }

    #[must_use]
    pub const fn target_length(&self) -> f64 {
        self.tween.to
    }

    #[must_use]
    pub fn frame(&self, elapsed_ms: f64) -> RunnerFrame {
        RunnerFrame {
            position: self.route.point_at_length(self.tween.sample(elapsed_ms)),
        }
    }

    #[must_use]
    pub fn is_complete(&self, elapsed_ms: f64) -> bool {
        self.tween.is_complete(elapsed_ms)
    }
}

/// Count-up display for the funded kilometres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Counter {
    tween: Tween,
}

impl Counter {
    #[must_use]
    pub const fn new(target: f64, duration_ms: f64, reduced_motion: bool) -> Self {
        Self {
            tween: Tween::new(0.0, target, duration_ms).with_reduced_motion(reduced_motion),
        }
    }

    /// Whole number shown after `elapsed_ms`; the final frame shows the exact target.
    #[must_use]
    pub fn value(&self, elapsed_ms: f64) -> f64 {
        if self.tween.is_complete(elapsed_ms) {
            return self.tween.to;
        }
        self.tween.sample(elapsed_ms).round()
    }

    #[must_use]
    pub fn is_complete(&self, elapsed_ms: f64) -> bool {
        self.tween.is_complete(elapsed_ms)
    }
}

/// Character-by-character reveal timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterSchedule {
    pub start_delay_ms: u64,
    pub char_delay_ms: u64,
}

impl Default for TypewriterSchedule {
    fn default() -> Self {
        Self {
            start_delay_ms: 500,
            char_delay_ms: 45,
        }
    }
}

impl TypewriterSchedule {
    /// Characters visible after `elapsed_ms`; reduced motion shows everything at once.
    #[must_use]
    pub fn visible_chars(&self, text: &str, elapsed_ms: u64, reduced_motion: bool) -> usize {
        let total = text.chars().count();
        if reduced_motion {
            return total;
        }
        let Some(typing) = elapsed_ms.checked_sub(self.start_delay_ms) else {
            return 0;
        };
        if self.char_delay_ms == 0 {
            return total;
        }
        usize::try_from(typing / self.char_delay_ms + 1)
            .unwrap_or(usize::MAX)
            .min(total)
    }

    /// The prefix of `text` shown after `count` characters.
    #[must_use]
    pub fn prefix(text: &str, count: usize) -> &str {
        crate::format::truncate_chars(text, count)
    }

    /// Time until the last character lands.
    #[must_use]
    pub fn total_ms(&self, text: &str) -> u64 {
        let chars = u64::try_from(text.chars().count()).unwrap_or(u64::MAX);
        self.start_delay_ms + chars.saturating_sub(1) * self.char_delay_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn easing_hits_endpoints_and_decelerates() {
        assert!(close(ease_out_cubic(0.0), 0.0));
        assert!(close(ease_out_cubic(1.0), 1.0));
        assert!(close(ease_out_cubic(0.5), 0.875));
        assert!(close(ease_out_cubic(-3.0), 0.0));
        assert!(close(ease_out_cubic(7.0), 1.0));
    }

    #[test]
    fn tween_samples_between_endpoints() {
        let tween = Tween::new(0.0, 100.0, 2_000.0);
        assert!(close(tween.sample(0.0), 0.0));
        assert!(close(tween.sample(1_000.0), 87.5));
        assert!(close(tween.sample(5_000.0), 100.0));
        assert!(!tween.is_complete(1_999.0));
        assert!(tween.is_complete(2_000.0));
    }

    #[test]
    fn reduced_motion_finishes_in_one_step() {
        let tween = Tween::new(0.0, 60.0, 1_500.0).with_reduced_motion(true);
        assert!(tween.is_complete(0.0));
        assert!(close(tween.sample(0.0), 60.0));

        let counter = Counter::new(12_000.0, MAP_ANIMATION_MS, true);
        assert!(close(counter.value(0.0), 12_000.0));

        let route = RoutePath::parse("M 100 50 L 0 50").unwrap();
        let runner = RunnerAnimation::new(route, 60.0, MAP_ANIMATION_MS, true);
        assert!(runner.is_complete(0.0));
        assert!(close(runner.frame(0.0).position.x, 40.0));

        let typed = TypewriterSchedule::default().visible_chars("Hello", 0, true);
        assert_eq!(typed, 5);
    }

    #[test]
    fn runner_frames_follow_the_route() {
        let route = RoutePath::parse("M 100 50 L 0 50").unwrap();
        let runner = RunnerAnimation::new(route, 60.0, 2_000.0, false);
        assert!(close(runner.target_length(), 60.0));
        let first = runner.frame(0.0);
        assert!(close(first.position.x, 100.0));
        assert_eq!(first.clip_path(), "inset(0 0 0 100%)");
        let last = runner.frame(2_000.0);
        assert!(close(last.position.x, 40.0));
        assert_eq!(last.clip_path(), "inset(0 0 0 40%)");
        assert_eq!(last.left(), "40%");
        assert_eq!(last.top(), "50%");
    }

    #[test]
    fn counter_rounds_mid_flight_and_lands_exactly() {
        let counter = Counter::new(1_000.5, 2_000.0, false);
        assert!(close(counter.value(1_000.0), 875.0));
        assert!(close(counter.value(2_000.0), 1_000.5));
    }

    #[test]
    fn typewriter_waits_then_types_one_char_per_delay() {
        let schedule = TypewriterSchedule::default();
        assert_eq!(schedule.visible_chars("Hello", 499, false), 0);
        assert_eq!(schedule.visible_chars("Hello", 500, false), 1);
        assert_eq!(schedule.visible_chars("Hello", 545, false), 2);
        assert_eq!(schedule.visible_chars("Hello", 10_000, false), 5);
        assert_eq!(schedule.total_ms("Hello"), 500 + 4 * 45);
        assert_eq!(TypewriterSchedule::prefix("héllo", 2), "hé");
        assert_eq!(TypewriterSchedule::prefix("hi", 9), "hi");
    }
}
