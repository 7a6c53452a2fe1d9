//! Reveal-on-view state machine and animation timing.
//!
//! A revealed block starts offset and transparent, and animates to its
//! natural position the first time any pixel of it enters the viewport.
//! The transition is latched: leaving and re-entering the viewport later
//! changes nothing.
//!
//! ```text
//!   Hidden ──observe(true)──▶ Visible   (terminal)
//!     │  ▲
//!     └──┘ observe(false)
//! ```
//!
//! The host (a browser `IntersectionObserver`, a test, anything that can
//! report "is this box on screen") feeds observations into [`RevealLatch`]
//! and applies [`RevealTiming::style`] for the current [`Visibility`].

use std::fmt::Write as _;

/// Default animation length, matching the site's 0.6s fade/slide.
pub const DEFAULT_DURATION_MS: u32 = 600;
/// Default upward offset of a hidden block, in CSS pixels.
pub const DEFAULT_OFFSET_PX: u32 = 30;
/// Default per-index delay step for grids.
pub const DEFAULT_STAGGER_MS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

/// Result of feeding one observation into a latch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// This observation flipped the block to visible.
    Revealed,
    Unchanged,
}

/// Single-shot Hidden -> Visible latch for one mounted block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealLatch {
    state: Visibility,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record whether the block currently intersects the viewport.
    pub fn observe(&mut self, intersecting: bool) -> Transition {
        match (self.state, intersecting) {
            (Visibility::Hidden, true) => {
                self.state = Visibility::Visible;
                Transition::Revealed
            }
            _ => Transition::Unchanged,
        }
    }

    /// Record a geometry sample, for hosts that poll layout instead of
    /// receiving intersection callbacks.
    pub fn observe_box(&mut self, viewport: &Viewport, rect: &Rect) -> Transition {
        self.observe(viewport.intersects(rect))
    }

    pub fn visibility(&self) -> Visibility {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == Visibility::Visible
    }

    /// Whether the host still needs to watch this block.
    pub fn wants_observation(&self) -> bool {
        !self.is_visible()
    }
}

/// Axis-aligned bounding box in viewport coordinates (CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self { top, left, width, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// Visible area of the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when at least part of `rect` lies inside the viewport.
    ///
    /// Edges only touching the viewport border do not count, and a box with
    /// no area never intersects.
    pub fn intersects(&self, rect: &Rect) -> bool {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return false;
        }
        rect.top < self.height && rect.bottom() > 0.0 && rect.left < self.width && rect.right() > 0.0
    }
}

/// How a hidden block differs from its natural state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Shifted down by this many pixels, slides up into place.
    Rise(u32),
    /// Scaled by this factor, grows to full size.
    Grow(f32),
    /// Opacity only.
    Fade,
}

impl Motion {
    fn hidden_transform(self) -> Option<String> {
        match self {
            Motion::Rise(0) | Motion::Fade => None,
            Motion::Rise(px) => Some(format!("translateY({px}px)")),
            Motion::Grow(scale) => Some(format!("scale({scale})")),
        }
    }

    fn visible_transform(self) -> Option<&'static str> {
        match self {
            Motion::Rise(0) | Motion::Fade => None,
            Motion::Rise(_) => Some("translateY(0)"),
            Motion::Grow(_) => Some("scale(1)"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    EaseOut,
    EaseInOut,
    Linear,
}

impl Easing {
    pub fn css(self) -> &'static str {
        match self {
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
            Easing::Linear => "linear",
        }
    }
}

/// Animation parameters for one reveal call site.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealTiming {
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub motion: Motion,
    pub easing: Easing,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            delay_ms: 0,
            motion: Motion::Rise(DEFAULT_OFFSET_PX),
            easing: Easing::EaseOut,
        }
    }
}

impl RevealTiming {
    /// Timing for the `index`-th element of a grid revealed in sequence.
    pub fn staggered(index: usize, step_ms: u32) -> Self {
        Self::default().with_delay(stagger_delay(index, step_ms))
    }

    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn with_motion(mut self, motion: Motion) -> Self {
        self.motion = motion;
        self
    }

    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Inline CSS for a block in the given state.
    pub fn style(&self, visibility: Visibility) -> String {
        let mut css = String::new();
        let (opacity, transform) = match visibility {
            Visibility::Hidden => (0, self.motion.hidden_transform()),
            Visibility::Visible => (1, self.motion.visible_transform().map(str::to_string)),
        };
        let _ = write!(css, "opacity:{opacity};");
        if let Some(transform) = transform {
            let _ = write!(css, "transform:{transform};");
        }
        let _ = write!(css, "transition:{};", self.transition());
        css
    }

    fn transition(&self) -> String {
        let easing = self.easing.css();
        let secs = |ms: u32| format!("{}s", f64::from(ms) / 1000.0);
        let duration = secs(self.duration_ms);
        let mut parts = vec![format!("opacity {duration} {easing}")];
        if self.motion.visible_transform().is_some() {
            parts.push(format!("transform {duration} {easing}"));
        }
        if self.delay_ms > 0 {
            let delay = secs(self.delay_ms);
            for part in &mut parts {
                part.push(' ');
                part.push_str(&delay);
            }
        }
        parts.join(",")
    }
}

/// Delay of the `index`-th element when each step adds `step_ms`.
pub fn stagger_delay(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(step_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let latch = RevealLatch::new();
        assert_eq!(latch.visibility(), Visibility::Hidden);
        assert!(latch.wants_observation());
    }

    #[test]
    fn never_reveals_before_first_intersection() {
        let mut latch = RevealLatch::new();
        for _ in 0..5 {
            assert_eq!(latch.observe(false), Transition::Unchanged);
            assert!(!latch.is_visible());
        }
    }

    #[test]
    fn reveals_once_and_stays_visible() {
        let mut latch = RevealLatch::new();
        assert_eq!(latch.observe(true), Transition::Revealed);
        let sequence = [false, true, false, false, true];
        for seen in sequence {
            assert_eq!(latch.observe(seen), Transition::Unchanged);
            assert!(latch.is_visible());
        }
        assert!(!latch.wants_observation());
    }

    #[test]
    fn visibility_is_monotonic_over_any_sequence() {
        // every 6-step on/off pattern
        for mask in 0u32..64 {
            let mut latch = RevealLatch::new();
            let mut was_visible = false;
            for bit in 0..6 {
                latch.observe(mask & (1 << bit) != 0);
                if was_visible {
                    assert!(latch.is_visible(), "pattern {mask:06b} hid a visible block");
                }
                was_visible = latch.is_visible();
            }
            assert_eq!(latch.is_visible(), mask != 0);
        }
    }

    #[test]
    fn one_pixel_overlap_intersects() {
        let viewport = Viewport::new(1280.0, 800.0);
        assert!(viewport.intersects(&Rect::new(799.0, 0.0, 100.0, 200.0)));
        assert!(viewport.intersects(&Rect::new(-199.0, 0.0, 100.0, 200.0)));
        assert!(!viewport.intersects(&Rect::new(800.0, 0.0, 100.0, 200.0)));
        assert!(!viewport.intersects(&Rect::new(-200.0, 0.0, 100.0, 200.0)));
        assert!(!viewport.intersects(&Rect::new(10.0, 1280.0, 100.0, 200.0)));
        assert!(!viewport.intersects(&Rect::new(10.0, 10.0, 0.0, 200.0)));
    }

    #[test]
    fn polled_box_reveals_when_scrolled_into_view() {
        let viewport = Viewport::new(1280.0, 800.0);
        let mut latch = RevealLatch::new();
        // block starts 1200px down the page, then the page scrolls by 500px steps
        for (scrolled, expected) in [
            (0.0, Transition::Unchanged),
            (500.0, Transition::Revealed),
            (1000.0, Transition::Unchanged),
            (0.0, Transition::Unchanged),
        ] {
            let rect = Rect::new(1200.0 - scrolled, 40.0, 600.0, 300.0);
            assert_eq!(latch.observe_box(&viewport, &rect), expected);
        }
        assert!(latch.is_visible());
    }

    #[test]
    fn default_style_slides_up_over_600ms() {
        let timing = RevealTiming::default();
        assert_eq!(
            timing.style(Visibility::Hidden),
            "opacity:0;transform:translateY(30px);transition:opacity 0.6s ease-out,transform 0.6s ease-out;"
        );
        assert_eq!(
            timing.style(Visibility::Visible),
            "opacity:1;transform:translateY(0);transition:opacity 0.6s ease-out,transform 0.6s ease-out;"
        );
    }

    #[test]
    fn staggered_delay_is_index_times_step() {
        assert_eq!(RevealTiming::staggered(0, 100).delay_ms, 0);
        assert_eq!(RevealTiming::staggered(3, 100).delay_ms, 300);
        assert_eq!(RevealTiming::staggered(2, 200).delay_ms, 400);
        let style = RevealTiming::staggered(2, 100).style(Visibility::Hidden);
        assert!(style.contains("opacity 0.6s ease-out 0.2s"));
        assert!(style.contains("transform 0.6s ease-out 0.2s"));
    }

    #[test]
    fn grow_and_fade_motions() {
        let grow = RevealTiming::default().with_motion(Motion::Grow(0.8));
        assert!(grow.style(Visibility::Hidden).contains("transform:scale(0.8);"));
        assert!(grow.style(Visibility::Visible).contains("transform:scale(1);"));

        let fade = RevealTiming::default().with_motion(Motion::Fade);
        assert_eq!(
            fade.style(Visibility::Hidden),
            "opacity:0;transition:opacity 0.6s ease-out;"
        );
    }

    #[test]
    fn stagger_saturates() {
        assert_eq!(stagger_delay(usize::MAX, 100), u32::MAX);
    }
}
