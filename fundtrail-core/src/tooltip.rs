//! Tooltip pinning for the interactive map.
//!
//! At most one thing is pinned at a time, and a pinned tooltip suppresses hover.

use crate::waypoints::WaypointId;

/// What the user has pinned open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PinState {
    #[default]
    None,
    Waypoint(WaypointId),
    Runner,
}

/// Pointer input relevant to tooltips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipEvent {
    Hover(WaypointId),
    Leave(WaypointId),
    WaypointClick(WaypointId),
    RunnerClick,
    Touch(WaypointId),
    /// Click that landed outside any marker.
    DocumentClick,
}

/// Which tooltip is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visible {
    Waypoint(WaypointId),
    Runner,
}

/// Pin state plus the transient hover target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TooltipMachine {
    pin: PinState,
    hovered: Option<WaypointId>,
}

impl TooltipMachine {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pin: PinState::None,
            hovered: None,
        }
    }

    #[must_use]
    pub const fn pin(&self) -> PinState {
        self.pin
    }

    pub fn apply(&mut self, event: TooltipEvent) {
        match event {
            TooltipEvent::Hover(id) => {
                if self.pin == PinState::None {
                    self.hovered = Some(id);
                }
            }
            TooltipEvent::Leave(id) => {
                if self.pin == PinState::None && self.hovered == Some(id) {
                    self.hovered = None;
                }
            }
            TooltipEvent::WaypointClick(id) => {
                self.pin = if self.pin == PinState::Waypoint(id) {
                    PinState::None
                } else {
                    PinState::Waypoint(id)
                };
                self.hovered = None;
            }
            TooltipEvent::RunnerClick => {
                self.pin = if self.pin == PinState::Runner {
                    PinState::None
                } else {
                    PinState::Runner
                };
                self.hovered = None;
            }
            TooltipEvent::Touch(id) => {
                self.pin = PinState::Waypoint(id);
                self.hovered = None;
            }
            TooltipEvent::DocumentClick => {
                self.pin = PinState::None;
                self.hovered = None;
            }
        }
    }

    /// Builder-style [`apply`](Self::apply).
    #[must_use]
    pub fn on(mut self, event: TooltipEvent) -> Self {
        self.apply(event);
        self
    }

    #[must_use]
    pub fn visible(&self) -> Option<Visible> {
        match self.pin {
            PinState::Waypoint(id) => Some(Visible::Waypoint(id)),
            PinState::Runner => Some(Visible::Runner),
            PinState::None => self.hovered.map(Visible::Waypoint),
        }
    }

    #[must_use]
    pub fn visible_waypoint(&self) -> Option<WaypointId> {
        match self.visible() {
            Some(Visible::Waypoint(id)) => Some(id),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_pinned(&self, id: WaypointId) -> bool {
        self.pin == PinState::Waypoint(id)
    }

    #[must_use]
    pub fn runner_pinned(&self) -> bool {
        self.pin == PinState::Runner
    }
}
