//! Scroll-reveal rules, independent of the observer API.

/// Class toggled on revealed elements.
pub const VISIBLE_CLASS: &str = "is-visible";

#[derive(Debug, Clone, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the element that must be on screen.
    pub threshold: f64,
    pub root_margin: String,
    /// Stop observing after the first reveal.
    pub once: bool,
    /// Wait before observing, so page transitions settle.
    pub delay_ms: u32,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.2,
            root_margin: "-50px 0px".to_string(),
            once: true,
            delay_ms: 400,
        }
    }
}

/// What to do with an observed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealAction {
    Show,
    /// Show and stop observing.
    ShowAndRelease,
    Hide,
    Keep,
}

impl RevealOptions {
    /// Action for an element entering observation.
    ///
    /// With motion disallowed elements are shown without observing.
    #[must_use]
    pub const fn on_register(&self, motion_allowed: bool) -> Option<RevealAction> {
        if motion_allowed {
            None
        } else {
            Some(RevealAction::Show)
        }
    }

    #[must_use]
    pub const fn on_intersection(&self, intersecting: bool) -> RevealAction {
        match (intersecting, self.once) {
            (true, true) => RevealAction::ShowAndRelease,
            (true, false) => RevealAction::Show,
            (false, false) => RevealAction::Hide,
            (false, true) => RevealAction::Keep,
        }
    }
}
