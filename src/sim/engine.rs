//! Kinematics engine
//!
//! Pure functions of `(SimulationState, Geometry)`. Nothing here keeps state
//! between calls, so the same inputs always produce bit-identical outputs.
//!
//! Two panels are computed:
//! - platform panel: pillars fixed, the rocket moves and wraps every `4L`
//! - rocket panel: rocket fixed, an unbounded row of pillars streams past,
//!   of which only the visibility window is materialized

use std::f64::consts::{FRAC_PI_2, TAU};

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::state::SimulationState;
use crate::consts::{CLOCK_PERIOD, PLATFORM_LAP_SPACINGS, PLATFORM_PILLARS};
use crate::settings::Geometry;

/// Three clock faces along the rocket: nose, center and tail
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RocketClocks {
    pub nose: f64,
    pub center: f64,
    pub tail: f64,
}

impl RocketClocks {
    /// True when all three faces agree (Galilean, or at rest)
    pub fn is_synchronized(&self) -> bool {
        self.nose == self.center && self.center == self.tail
    }
}

/// The rocket as seen from the platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RocketView {
    /// Displacement of the rocket center since the session started
    pub x: f64,
    /// Displayed length (`L`, or `L * scale` under Lorentz)
    pub length: f64,
    pub clocks: RocketClocks,
}

/// One pillar of the rocket panel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PillarView {
    pub index: i64,
    pub screen_x: f64,
    /// Reading of the pillar's own clock
    pub proper_time: f64,
    /// Clock hand direction (unit length before x-squash)
    pub hand: DVec2,
}

impl PillarView {
    /// Label painted on the pillar (non-negative, three digits)
    pub fn label(&self) -> i64 {
        self.index.rem_euclid(1000)
    }
}

/// One of the three fixed pillars of the platform panel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformPillar {
    pub label: i64,
    pub screen_x: f64,
    pub hand: DVec2,
}

/// The platform panel: fixed pillars, wrapping rocket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformView {
    /// How many `4L` laps the rocket has wrapped
    pub lap: i64,
    pub rocket_screen_x: f64,
    pub pillars: Vec<PlatformPillar>,
}

/// Rocket position, displayed length and its three clocks.
///
/// Position integration is identical under both laws; only the length and
/// the clock offsets depend on the transform mode.
pub fn rocket_frame(state: &SimulationState, geometry: &Geometry) -> RocketView {
    let law = state.law();
    let t = state.global_time;
    let half_length = 0.5 * geometry.pillar_spacing;

    RocketView {
        x: state.rocket_x(geometry.light_speed),
        length: geometry.pillar_spacing * law.length_scale,
        clocks: RocketClocks {
            nose: law.proper_time(t, half_length, geometry.light_speed),
            center: law.proper_time(t, 0.0, geometry.light_speed),
            tail: law.proper_time(t, -half_length, geometry.light_speed),
        },
    }
}

/// Inclusive index range of pillars within `half_window` of the observer.
///
/// The window is measured in the observer's frame, so under Lorentz the
/// contracted spacing packs more pillars into it.
pub fn visible_pillar_range(state: &SimulationState, geometry: &Geometry, half_window: f64) -> (i64, i64) {
    let law = state.law();
    let travelled = state.beta * geometry.light_speed * state.global_time;
    let spacing = law.length_scale * geometry.pillar_spacing;

    let first = ((-half_window + travelled) / spacing).ceil() as i64;
    let last = ((half_window + travelled) / spacing + 1.0).floor() as i64;
    (first, last)
}

/// Screen position and clock of pillar `index` in the rocket panel
pub fn pillar_view(index: i64, state: &SimulationState, geometry: &Geometry) -> PillarView {
    let law = state.law();
    let t = state.global_time;
    let l = geometry.pillar_spacing;
    let c = geometry.light_speed;
    // Pillar 1 sits under the rocket at t = 0
    let rest_offset = (index - 1) as f64 * l;

    let screen_x = law.length_scale * rest_offset - c * state.beta * t + geometry.rocket_home_x();
    let proper_time = law.proper_time(t, rest_offset, c);

    PillarView {
        index,
        screen_x,
        proper_time,
        hand: clock_angle_lower(proper_time, law.length_scale),
    }
}

/// All pillars inside the default visibility window, in index order
pub fn visible_pillars(state: &SimulationState, geometry: &Geometry) -> Vec<PillarView> {
    let (first, last) = visible_pillar_range(state, geometry, geometry.half_window());
    (first..=last)
        .map(|index| pillar_view(index, state, geometry))
        .collect()
}

/// Platform panel layout for the current rocket position
pub fn platform_view(state: &SimulationState, geometry: &Geometry) -> PlatformView {
    let l = geometry.pillar_spacing;
    let lap_length = PLATFORM_LAP_SPACINGS * l;
    let x = state.rocket_x(geometry.light_speed);
    let lap = ((x + 0.5 * lap_length) / lap_length).floor() as i64;
    let hand = clock_angle_upper(state.global_time);

    let pillars = (0..PLATFORM_PILLARS)
        .map(|k| PlatformPillar {
            label: (lap * PLATFORM_LAP_SPACINGS as i64 + k as i64).rem_euclid(100),
            screen_x: geometry.border + (k as f64 + 0.5) * l,
            hand,
        })
        .collect();

    PlatformView {
        lap,
        rocket_screen_x: geometry.rocket_home_x() + x - lap as f64 * lap_length,
        pillars,
    }
}

/// Hand direction for a clock reading `t`, starting at twelve o'clock and
/// sweeping clockwise once per [`CLOCK_PERIOD`]
#[inline]
pub fn clock_angle_upper(t: f64) -> DVec2 {
    let angle = FRAC_PI_2 - TAU / CLOCK_PERIOD * t;
    DVec2::new(angle.cos(), angle.sin())
}

/// Same sweep with the x-projection squashed by `scale`, matching a
/// horizontally contracted clock face
#[inline]
pub fn clock_angle_lower(t: f64, scale: f64) -> DVec2 {
    let hand = clock_angle_upper(t);
    DVec2::new(scale * hand.x, hand.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::RocketAnchor;
    use crate::sim::transform::TransformMode;
    use proptest::prelude::*;

    fn state_at(t: f64, beta: f64, mode: TransformMode) -> SimulationState {
        SimulationState {
            global_time: t,
            beta,
            transform_mode: mode,
            ..Default::default()
        }
    }

    #[test]
    fn test_rocket_clock_offsets_lorentz() {
        let geometry = Geometry::default();
        let state = state_at(10.0, 0.6, TransformMode::Lorentz);
        let view = rocket_frame(&state, &geometry);

        let expected = 0.6 * geometry.pillar_spacing * 0.5 / geometry.light_speed;
        assert!((view.clocks.nose - view.clocks.center - expected).abs() < 1e-12);
        assert!((view.clocks.center - view.clocks.tail - expected).abs() < 1e-12);
        assert!((view.clocks.center - 8.0).abs() < 1e-12);
        assert!((view.length - 0.8 * geometry.pillar_spacing).abs() < 1e-9);
    }

    #[test]
    fn test_rocket_clock_offsets_do_not_depend_on_time() {
        let geometry = Geometry::default();
        let offsets: Vec<f64> = [0.0, 1.0, 10.0, 250.0]
            .iter()
            .map(|&t| {
                let view = rocket_frame(&state_at(t, 0.6, TransformMode::Lorentz), &geometry);
                view.clocks.nose - view.clocks.tail
            })
            .collect();
        for offset in &offsets {
            assert!((offset - offsets[0]).abs() < 1e-9);
        }
    }

    #[test]
    fn test_rocket_galilean_single_clock() {
        let geometry = Geometry::default();
        let state = state_at(10.0, 0.6, TransformMode::Galilean);
        let view = rocket_frame(&state, &geometry);
        assert!(view.clocks.is_synchronized());
        assert_eq!(view.clocks.center, 10.0);
        assert_eq!(view.length, geometry.pillar_spacing);
        // Still displaces at beta * C
        assert!((view.x - 0.6 * geometry.light_speed * 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_rocket_position_from_anchor() {
        let geometry = Geometry::default();
        let state = SimulationState {
            global_time: 5.0,
            beta: 0.5,
            rocket_anchor: RocketAnchor {
                x_start: 100.0,
                t_start: 3.0,
            },
            ..Default::default()
        };
        let view = rocket_frame(&state, &geometry);
        assert!((view.x - (100.0 + 0.5 * geometry.light_speed * 2.0)).abs() < 1e-9);
    }

    #[test]
    fn test_visible_range_at_rest() {
        let geometry = Geometry::default();
        let state = state_at(0.0, 0.0, TransformMode::Galilean);
        // ceil(-2) = -2, floor(2 + 1) = 3
        assert_eq!(visible_pillar_range(&state, &geometry, geometry.half_window()), (-2, 3));
        assert_eq!(visible_pillars(&state, &geometry).len(), 6);
    }

    #[test]
    fn test_visible_range_denser_under_lorentz() {
        let geometry = Geometry::default();
        let galilean = state_at(3.0, 0.9, TransformMode::Galilean);
        let lorentz = state_at(3.0, 0.9, TransformMode::Lorentz);
        let (g0, g1) = visible_pillar_range(&galilean, &geometry, geometry.half_window());
        let (l0, l1) = visible_pillar_range(&lorentz, &geometry, geometry.half_window());
        assert!(l1 - l0 > g1 - g0);
    }

    #[test]
    fn test_pillar_view_lorentz_formula() {
        let geometry = Geometry::default();
        let state = state_at(10.0, 0.6, TransformMode::Lorentz);
        let l = geometry.pillar_spacing;
        let c = geometry.light_speed;

        let view = pillar_view(4, &state, &geometry);
        let expected_x = 0.8 * 3.0 * l - c * 0.6 * 10.0 + 1.5 * l + geometry.border;
        let expected_t = 0.8 * 10.0 + 0.6 * l / c * 3.0;
        assert!((view.screen_x - expected_x).abs() < 1e-9);
        assert!((view.proper_time - expected_t).abs() < 1e-12);
    }

    #[test]
    fn test_pillar_view_galilean_clocks_uniform() {
        let geometry = Geometry::default();
        let state = state_at(7.25, 0.3, TransformMode::Galilean);
        for view in visible_pillars(&state, &geometry) {
            assert_eq!(view.proper_time, 7.25);
        }
    }

    #[test]
    fn test_pillar_one_under_rocket_at_start() {
        let geometry = Geometry::default();
        let state = state_at(0.0, 0.7, TransformMode::Lorentz);
        let view = pillar_view(1, &state, &geometry);
        assert_eq!(view.screen_x, geometry.rocket_home_x());
        assert_eq!(view.proper_time, 0.0);
    }

    #[test]
    fn test_pillar_labels_wrap_non_negative() {
        let geometry = Geometry::default();
        let state = state_at(0.0, 0.0, TransformMode::Galilean);
        assert_eq!(pillar_view(-2, &state, &geometry).label(), 998);
        assert_eq!(pillar_view(1001, &state, &geometry).label(), 1);
    }

    #[test]
    fn test_platform_view_wraps_every_four_spacings() {
        let geometry = Geometry::default();
        let l = geometry.pillar_spacing;
        let c = geometry.light_speed;

        let start = platform_view(&state_at(0.0, 0.5, TransformMode::Galilean), &geometry);
        assert_eq!(start.lap, 0);
        assert_eq!(start.rocket_screen_x, geometry.rocket_home_x());
        let labels: Vec<i64> = start.pillars.iter().map(|p| p.label).collect();
        assert_eq!(labels, vec![0, 1, 2]);

        // Just past 2L the rocket re-enters from the left on the next lap
        let t = (2.0 * l + 1.0) / (0.5 * c);
        let wrapped = platform_view(&state_at(t, 0.5, TransformMode::Galilean), &geometry);
        assert_eq!(wrapped.lap, 1);
        assert!((wrapped.rocket_screen_x - (geometry.rocket_home_x() - 2.0 * l + 1.0)).abs() < 1e-6);
        let labels: Vec<i64> = wrapped.pillars.iter().map(|p| p.label).collect();
        assert_eq!(labels, vec![4, 5, 6]);
    }

    #[test]
    fn test_clock_angle_quarter_turns() {
        let twelve = clock_angle_upper(0.0);
        assert!((twelve - DVec2::new(0.0, 1.0)).length() < 1e-12);
        let three = clock_angle_upper(15.0);
        assert!((three - DVec2::new(1.0, 0.0)).length() < 1e-12);
        let full = clock_angle_upper(60.0);
        assert!((full - twelve).length() < 1e-12);
    }

    #[test]
    fn test_clock_angle_lower_squashes_x_only() {
        let hand = clock_angle_lower(15.0, 0.5);
        assert!((hand.x - 0.5).abs() < 1e-12);
        assert!(hand.y.abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_scale_strictly_decreasing(a in 0.0f64..0.97, step in 1e-6f64..0.01) {
            use crate::sim::transform::compute_scale;
            let b = a + step;
            prop_assert!(compute_scale(a) > compute_scale(b));
            prop_assert_eq!(compute_scale(a), (1.0 - a * a).sqrt());
        }

        #[test]
        fn prop_pillar_view_is_deterministic(
            index in -500i64..500,
            t in 0.0f64..1000.0,
            beta in 0.0f64..0.98,
            lorentz in any::<bool>(),
        ) {
            let mode = if lorentz { TransformMode::Lorentz } else { TransformMode::Galilean };
            let state = state_at(t, beta, mode);
            let geometry = Geometry::default();
            let a = pillar_view(index, &state, &geometry);
            let b = pillar_view(index, &state, &geometry);
            prop_assert_eq!(a.screen_x.to_bits(), b.screen_x.to_bits());
            prop_assert_eq!(a.proper_time.to_bits(), b.proper_time.to_bits());
        }

        #[test]
        fn prop_window_width_independent_of_time(
            t1 in 0.0f64..500.0,
            t2 in 0.0f64..500.0,
            beta in 0.0f64..0.98,
            lorentz in any::<bool>(),
        ) {
            let mode = if lorentz { TransformMode::Lorentz } else { TransformMode::Galilean };
            let geometry = Geometry::default();
            let w = geometry.half_window();
            let (a0, a1) = visible_pillar_range(&state_at(t1, beta, mode), &geometry, w);
            let (b0, b1) = visible_pillar_range(&state_at(t2, beta, mode), &geometry, w);
            // Integer rounding of the window edges moves the count by at most one
            prop_assert!(((a1 - a0) - (b1 - b0)).abs() <= 1);
            prop_assert!(a1 >= a0);
        }

        #[test]
        fn prop_lorentz_converges_to_galilean(t in 0.0f64..100.0, index in -20i64..20) {
            let geometry = Geometry::default();
            let beta = 1e-7;
            let lorentz = state_at(t, beta, TransformMode::Lorentz);
            let galilean = state_at(t, beta, TransformMode::Galilean);

            let rl = rocket_frame(&lorentz, &geometry);
            let rg = rocket_frame(&galilean, &geometry);
            prop_assert!((rl.length - rg.length).abs() < 1e-6);
            prop_assert!((rl.clocks.nose - rg.clocks.nose).abs() < 1e-6);
            prop_assert!((rl.clocks.tail - rg.clocks.tail).abs() < 1e-6);

            let pl = pillar_view(index, &lorentz, &geometry);
            let pg = pillar_view(index, &galilean, &geometry);
            prop_assert!((pl.screen_x - pg.screen_x).abs() < 1e-6);
            prop_assert!((pl.proper_time - pg.proper_time).abs() < 1e-4);
        }
    }
}
