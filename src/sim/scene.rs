//! Scene descriptor handed to the presentation layer
//!
//! Plain data: positions in screen pixels, clock readings in seconds with their
//! display strings. The presentation layer draws it and never writes back.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::engine::{
    PillarView, PlatformView, RocketClocks, clock_angle_upper, platform_view, rocket_frame,
    visible_pillars,
};
use super::state::{PlayState, SimulationState};
use super::transform::TransformMode;
use crate::settings::Geometry;
use crate::time_to_string;

/// A clock reading ready to display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockReading {
    pub seconds: f64,
    /// `MM:SS:CS`
    pub text: String,
    /// Hand direction on a round face
    pub hand: DVec2,
}

impl ClockReading {
    pub fn new(seconds: f64) -> Self {
        Self {
            seconds,
            text: time_to_string(seconds),
            hand: clock_angle_upper(seconds),
        }
    }
}

/// Rocket clocks as displayed: three offset faces under Lorentz, one shared face otherwise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RocketClockFaces {
    Offset {
        nose: ClockReading,
        center: ClockReading,
        tail: ClockReading,
    },
    Shared(ClockReading),
}

impl RocketClockFaces {
    fn from_clocks(clocks: &RocketClocks, mode: TransformMode) -> Self {
        match mode {
            TransformMode::Lorentz => RocketClockFaces::Offset {
                nose: ClockReading::new(clocks.nose),
                center: ClockReading::new(clocks.center),
                tail: ClockReading::new(clocks.tail),
            },
            TransformMode::Galilean => RocketClockFaces::Shared(ClockReading::new(clocks.center)),
        }
    }

    /// The face at the rocket's center
    pub fn center(&self) -> &ClockReading {
        match self {
            RocketClockFaces::Offset { center, .. } => center,
            RocketClockFaces::Shared(reading) => reading,
        }
    }
}

/// Rocket drawn on the platform panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovingRocket {
    pub screen_x: f64,
    pub length: f64,
    /// Exhaust flame shown while time is advancing
    pub thrusting: bool,
}

/// Pillar with its display strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PillarLabel {
    pub label: String,
    pub screen_x: f64,
    /// Horizontal scale of the pillar sprite
    pub width_scale: f64,
    pub clock: ClockReading,
}

impl PillarLabel {
    fn from_view(view: &PillarView, width_scale: f64) -> Self {
        Self {
            label: view.label().to_string(),
            screen_x: view.screen_x,
            width_scale,
            clock: ClockReading {
                seconds: view.proper_time,
                text: time_to_string(view.proper_time),
                hand: view.hand,
            },
        }
    }
}

/// Upper panel: platform frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformPanel {
    pub rocket: MovingRocket,
    pub pillars: Vec<PillarLabel>,
}

impl PlatformPanel {
    fn new(view: &PlatformView, rocket_length: f64, thrusting: bool, global_time: f64) -> Self {
        let clock = ClockReading::new(global_time);
        Self {
            rocket: MovingRocket {
                screen_x: view.rocket_screen_x,
                length: rocket_length,
                thrusting,
            },
            pillars: view
                .pillars
                .iter()
                .map(|p| PillarLabel {
                    label: p.label.to_string(),
                    screen_x: p.screen_x,
                    width_scale: 1.0,
                    clock: ClockReading {
                        hand: p.hand,
                        ..clock.clone()
                    },
                })
                .collect(),
        }
    }
}

/// Lower panel: rocket frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RocketPanel {
    pub rocket_screen_x: f64,
    pub rocket_length: f64,
    pub pillars: Vec<PillarLabel>,
}

/// Everything the presentation layer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub transform_mode: TransformMode,
    pub play_state: PlayState,
    pub beta: f64,
    /// Velocity readout, e.g. `"0.6 c"`
    pub velocity_text: String,
    pub lorentz_scale: f64,
    pub platform: PlatformPanel,
    pub rocket_panel: RocketPanel,
    pub rocket_clocks: RocketClockFaces,
    /// Large watch showing the rocket's own (center) time
    pub rocket_watch: ClockReading,
    /// Large watch showing platform time
    pub platform_watch: ClockReading,
}

/// Compute the full scene for the current state
pub fn build_scene(state: &SimulationState, geometry: &Geometry) -> Scene {
    let law = state.law();
    let rocket = rocket_frame(state, geometry);
    let platform = platform_view(state, geometry);
    let thrusting = state.play_state == PlayState::Running;

    let rocket_clocks = RocketClockFaces::from_clocks(&rocket.clocks, state.transform_mode);
    let rocket_watch = rocket_clocks.center().clone();

    Scene {
        transform_mode: state.transform_mode,
        play_state: state.play_state,
        beta: state.beta,
        velocity_text: format!("{} c", (state.beta * 1000.0).round() / 1000.0),
        lorentz_scale: law.length_scale,
        platform: PlatformPanel::new(&platform, rocket.length, thrusting, state.global_time),
        rocket_panel: RocketPanel {
            rocket_screen_x: geometry.rocket_home_x(),
            rocket_length: geometry.pillar_spacing,
            pillars: visible_pillars(state, geometry)
                .iter()
                .map(|view| PillarLabel::from_view(view, law.length_scale))
                .collect(),
        },
        rocket_clocks,
        rocket_watch,
        platform_watch: ClockReading::new(state.global_time),
    }
}
