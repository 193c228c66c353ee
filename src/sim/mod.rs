//! Deterministic simulation module
//!
//! All physics lives here. This module must stay pure:
//! - The engine is a function of `(SimulationState, Geometry)` only
//! - Only the controller mutates state
//! - No rendering or platform dependencies

pub mod controller;
pub mod engine;
pub mod scene;
pub mod state;
pub mod transform;

pub use controller::{Command, CommandQueue, Controller};
pub use engine::{
    PillarView, PlatformPillar, PlatformView, RocketClocks, RocketView, clock_angle_lower,
    clock_angle_upper, pillar_view, platform_view, rocket_frame, visible_pillar_range,
    visible_pillars,
};
pub use scene::{ClockReading, PillarLabel, RocketClockFaces, Scene, build_scene};
pub use state::{PlayState, RocketAnchor, SimulationState};
pub use transform::{TransformLaw, TransformMode, compute_scale};
