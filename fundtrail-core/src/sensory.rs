//! Motion preference.
//!
//! Motion is off unless the visitor opts in, or opts into following the
//! system `prefers-reduced-motion` setting.

use std::fmt;
use std::str::FromStr;

use log::warn;

use crate::storage::{KeyValueStore, keys};

/// Persisted preference value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensoryMode {
    MotionAllowed,
    MotionReduced,
    /// Follow the operating system setting.
    Auto,
}

impl SensoryMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MotionAllowed => "motion-allowed",
            Self::MotionReduced => "motion-reduced",
            Self::Auto => "auto",
        }
    }

    /// Whether animations may run under this mode.
    #[must_use]
    pub const fn allows_motion(self, system_prefers_reduced: bool) -> bool {
        match self {
            Self::MotionAllowed => true,
            Self::MotionReduced => false,
            Self::Auto => !system_prefers_reduced,
        }
    }
}

impl fmt::Display for SensoryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sensory mode '{0}'")]
pub struct UnknownSensoryMode(pub String);

impl FromStr for SensoryMode {
    type Err = UnknownSensoryMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "motion-allowed" => Ok(Self::MotionAllowed),
            "motion-reduced" => Ok(Self::MotionReduced),
            "auto" => Ok(Self::Auto),
            other => Err(UnknownSensoryMode(other.to_string())),
        }
    }
}

/// Resolve the effective preference; no saved mode means motion off.
#[must_use]
pub fn resolve_motion(saved: Option<SensoryMode>, system_prefers_reduced: bool) -> bool {
    saved.is_some_and(|mode| mode.allows_motion(system_prefers_reduced))
}

/// Store-backed preference operations.
pub struct MotionSettings<S> {
    store: S,
}

impl<S: KeyValueStore> MotionSettings<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Saved mode, ignoring unreadable or unknown values.
    pub fn saved_mode(&self) -> Option<SensoryMode> {
        match self.store.get_item(keys::SENSORY_MODE) {
            Ok(raw) => raw.and_then(|raw| raw.parse().ok()),
            Err(err) => {
                warn!("reading motion preference failed: {err}");
                None
            }
        }
    }

    #[must_use]
    pub fn motion_allowed(&self, system_prefers_reduced: bool) -> bool {
        resolve_motion(self.saved_mode(), system_prefers_reduced)
    }

    fn save(&self, mode: SensoryMode) {
        if let Err(err) = self.store.set_item(keys::SENSORY_MODE, mode.as_str()) {
            warn!("saving motion preference failed: {err}");
        }
    }

    /// Flip the current state and persist the explicit choice.
    pub fn toggle(&self, currently_allowed: bool) -> bool {
        let allowed = !currently_allowed;
        self.save(if allowed {
            SensoryMode::MotionAllowed
        } else {
            SensoryMode::MotionReduced
        });
        allowed
    }

    pub fn enable(&self) -> bool {
        self.save(SensoryMode::MotionAllowed);
        true
    }

    pub fn disable(&self) -> bool {
        self.save(SensoryMode::MotionReduced);
        false
    }

    pub fn set_auto(&self, system_prefers_reduced: bool) -> bool {
        self.save(SensoryMode::Auto);
        SensoryMode::Auto.allows_motion(system_prefers_reduced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn motion_is_off_by_default() {
        assert!(!resolve_motion(None, false));
        assert!(!MotionSettings::new(MemoryStore::new()).motion_allowed(false));
    }

    #[test]
    fn auto_follows_the_system() {
        assert!(resolve_motion(Some(SensoryMode::Auto), false));
        assert!(!resolve_motion(Some(SensoryMode::Auto), true));
        assert!(resolve_motion(Some(SensoryMode::MotionAllowed), true));
    }

    #[test]
    fn operations_persist_their_mode() {
        let settings = MotionSettings::new(MemoryStore::new());
        assert!(settings.toggle(false));
        assert_eq!(settings.saved_mode(), Some(SensoryMode::MotionAllowed));
        assert!(!settings.toggle(true));
        assert_eq!(settings.saved_mode(), Some(SensoryMode::MotionReduced));
        assert!(settings.enable());
        assert!(!settings.disable());
        assert!(!settings.set_auto(true));
        assert_eq!(settings.saved_mode(), Some(SensoryMode::Auto));
        assert!(settings.motion_allowed(false));
    }

    #[test]
    fn unknown_values_read_as_unset() {
        let store = MemoryStore::new();
        store.set_item(keys::SENSORY_MODE, "sparkles").unwrap();
        assert_eq!(MotionSettings::new(store).saved_mode(), None);
        assert_eq!(
            "sparkles".parse::<SensoryMode>(),
            Err(UnknownSensoryMode("sparkles".into()))
        );
    }
}
