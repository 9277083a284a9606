// Accessibility helpers

use fundtrail_core::sensory::resolve_motion;
use fundtrail_core::{KeyValueStore, SensoryMode, keys};

use crate::dom;
use crate::platform::LocalStore;

/// Attribute set on `<html>` while animations are allowed.
pub const MOTION_ATTRIBUTE: &str = "data-motion-allowed";

/// Get CSS for visible focus indicators and screen reader utilities
///
/// Returns critical accessibility CSS that should be injected early in the page load.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus-visible{outline:3px solid #c8102e;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Reflect the motion preference on the root element for CSS.
pub fn apply_motion_preference(allowed: bool) {
    let Some(html) = dom::root_element() else {
        return;
    };
    let result = if allowed {
        html.set_attribute(MOTION_ATTRIBUTE, "true")
    } else {
        html.remove_attribute(MOTION_ATTRIBUTE)
    };
    if let Err(err) = result {
        log::warn!("updating {MOTION_ATTRIBUTE} failed: {}", dom::js_error_message(&err));
    }
}

/// Saved sensory mode, if any.
#[must_use]
pub fn saved_sensory_mode() -> Option<SensoryMode> {
    LocalStore
        .get_item(keys::SENSORY_MODE)
        .ok()
        .flatten()
        .and_then(|raw| raw.parse().ok())
}

/// Resolve the motion preference from storage and the system setting.
///
/// Outside a browser this is always `false`.
#[must_use]
pub fn motion_allowed() -> bool {
    if dom::window().is_none() {
        return false;
    }
    resolve_motion(saved_sensory_mode(), dom::prefers_reduced_motion())
}
