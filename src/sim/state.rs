//! Session state and core simulation types
//!
//! Owned by the [`Controller`](super::Controller); the engine only ever reads it.

use serde::{Deserialize, Serialize};

use super::transform::{TransformLaw, TransformMode};

/// Playback state of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlayState {
    /// At rest at time zero, velocity selectable
    #[default]
    Stopped,
    /// Time frozen, seeking allowed
    Paused,
    /// Time advancing with the wall clock
    Running,
}

/// Where and when the current velocity segment began.
///
/// Rocket motion is piecewise linear: one segment per velocity change.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RocketAnchor {
    pub x_start: f64,
    pub t_start: f64,
}

/// Complete session state
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SimulationState {
    /// Platform-frame time in seconds, never negative
    pub global_time: f64,
    /// Velocity fraction of `C`, within `[0, beta_max]`
    pub beta: f64,
    pub transform_mode: TransformMode,
    pub play_state: PlayState,
    pub rocket_anchor: RocketAnchor,
}

impl SimulationState {
    /// Fresh session: stopped, at rest, Galilean
    pub fn new() -> Self {
        Self::default()
    }

    /// The transform law for the current mode and velocity
    #[inline]
    pub fn law(&self) -> TransformLaw {
        TransformLaw::new(self.transform_mode, self.beta)
    }

    /// Rocket displacement in the platform frame, integrated from the anchor
    pub fn rocket_x(&self, light_speed: f64) -> f64 {
        let dt = self.global_time - self.rocket_anchor.t_start;
        self.rocket_anchor.x_start + self.beta * light_speed * dt
    }

    /// Begin a new velocity segment at the current position and time
    pub fn reanchor(&mut self, light_speed: f64) {
        self.rocket_anchor = RocketAnchor {
            x_start: self.rocket_x(light_speed),
            t_start: self.global_time,
        };
    }
}
