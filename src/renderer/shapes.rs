//! Shape generation for 2D primitives
//!
//! Turns a [`Scene`] into a flat triangle list in screen pixels. Text labels
//! stay in the scene for the host to draw with its own font stack.

use glam::{DVec2, Vec2};

use super::vertex::{Vertex, colors};
use crate::consts::CLOCK_HAND_LENGTH;
use crate::sim::scene::{PillarLabel, Scene};
use crate::sim::transform::TransformMode;

/// Pillar sprite size at rest (pixels)
pub const PILLAR_SIZE: Vec2 = Vec2::new(102.0, 192.0);
/// Rocket body height (pixels)
pub const ROCKET_HEIGHT: f32 = 40.0;

/// Vertical layout of one panel
#[derive(Debug, Clone, Copy)]
struct PanelLayout {
    rocket_y: f32,
    pillar_bottom: f32,
}

const PLATFORM_PANEL: PanelLayout = PanelLayout {
    rocket_y: 150.0,
    pillar_bottom: 440.0,
};

const ROCKET_PANEL: PanelLayout = PanelLayout {
    rocket_y: 580.0,
    pillar_bottom: 870.0,
};

/// Clock face sits this far above the pillar's bottom edge
const CLOCK_RISE: f32 = 143.0;

/// Axis-aligned rectangle as two triangles
pub fn rect(center: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let h = size * 0.5;
    let (x0, y0, x1, y1) = (center.x - h.x, center.y - h.y, center.x + h.x, center.y + h.y);
    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Line segment of the given width as a quad
pub fn line(from: Vec2, to: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    let perp = Vec2::new(-dir.y, dir.x) * (width * 0.5);

    let a = from + perp;
    let b = from - perp;
    let c = to + perp;
    let d = to - perp;
    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(d.x, d.y, color),
    ]
}

/// Screen-space hand tip; screen y grows downward
fn hand_tip(center: Vec2, hand: DVec2) -> Vec2 {
    let length = CLOCK_HAND_LENGTH as f32;
    center + Vec2::new(hand.x as f32, -(hand.y as f32)) * length
}

fn pillar(label: &PillarLabel, panel: PanelLayout) -> Vec<Vertex> {
    let x = label.screen_x as f32;
    let size = Vec2::new(PILLAR_SIZE.x * label.width_scale as f32, PILLAR_SIZE.y);
    let body = Vec2::new(x, panel.pillar_bottom - size.y * 0.5);
    let clock = Vec2::new(x, panel.pillar_bottom - CLOCK_RISE);

    let mut vertices = rect(body, size, colors::PILLAR);
    vertices.extend(line(clock, hand_tip(clock, label.clock.hand), 2.0, colors::CLOCK_HAND));
    vertices
}

fn rocket(
    center_x: f32,
    length: f32,
    panel: PanelLayout,
    thrusting: bool,
    center_mark: bool,
) -> Vec<Vertex> {
    let center = Vec2::new(center_x, panel.rocket_y);
    let mut vertices = rect(center, Vec2::new(length, ROCKET_HEIGHT), colors::ROCKET);
    if center_mark {
        vertices.extend(line(
            center - Vec2::new(0.0, 60.0),
            center,
            1.0,
            colors::CENTER_MARK,
        ));
    }
    if thrusting {
        let tail = Vec2::new(center_x - length * 0.5 - 15.0, panel.rocket_y);
        vertices.extend(rect(tail, Vec2::new(30.0, ROCKET_HEIGHT * 0.5), colors::FLAME));
    }
    vertices
}

/// Tessellate both panels of a scene
pub fn scene_vertices(scene: &Scene) -> Vec<Vertex> {
    let platform = &scene.platform;
    let panel = &scene.rocket_panel;
    let pillar_count = platform.pillars.len() + panel.pillars.len();
    let mut vertices = Vec::with_capacity(pillar_count * 12 + 36);

    for label in &platform.pillars {
        vertices.extend(pillar(label, PLATFORM_PANEL));
    }
    vertices.extend(rocket(
        platform.rocket.screen_x as f32,
        platform.rocket.length as f32,
        PLATFORM_PANEL,
        platform.rocket.thrusting,
        // Only the Lorentz rocket has a distinguished center clock
        scene.transform_mode == TransformMode::Lorentz,
    ));

    for label in &panel.pillars {
        vertices.extend(pillar(label, ROCKET_PANEL));
    }
    vertices.extend(rocket(
        panel.rocket_screen_x as f32,
        panel.rocket_length as f32,
        ROCKET_PANEL,
        platform.rocket.thrusting,
        true,
    ));

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::as_bytes;
    use crate::settings::Geometry;
    use crate::sim::scene::build_scene;
    use crate::sim::state::{PlayState, SimulationState};

    #[test]
    fn test_rect_bounds() {
        let vertices = rect(Vec2::new(10.0, 20.0), Vec2::new(4.0, 6.0), colors::PILLAR);
        assert_eq!(vertices.len(), 6);
        let xs: Vec<f32> = vertices.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = vertices.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 8.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 12.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 17.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 23.0);
    }

    #[test]
    fn test_hand_tip_points_up_at_zero() {
        let tip = hand_tip(Vec2::new(100.0, 100.0), DVec2::new(0.0, 1.0));
        assert_eq!(tip, Vec2::new(100.0, 75.0));
    }

    #[test]
    fn test_scene_vertex_count() {
        let scene = build_scene(&SimulationState::new(), &Geometry::default());
        let vertices = scene_vertices(&scene);
        // 3 + 6 pillars (body + hand), two rocket bodies, one center mark, no flame
        assert_eq!(vertices.len(), 9 * 12 + 2 * 6 + 6);
        assert_eq!(as_bytes(&vertices).len(), vertices.len() * 24);
    }

    #[test]
    fn test_platform_center_mark_only_under_lorentz() {
        let geometry = Geometry::default();
        let marks = |mode| {
            let state = SimulationState {
                beta: 0.5,
                transform_mode: mode,
                ..Default::default()
            };
            scene_vertices(&build_scene(&state, &geometry))
                .iter()
                .filter(|v| v.color == colors::CENTER_MARK)
                .count()
        };
        assert_eq!(marks(TransformMode::Galilean), 6);
        assert_eq!(marks(TransformMode::Lorentz), 12);
    }

    #[test]
    fn test_contracted_pillars_are_narrower() {
        let state = SimulationState {
            global_time: 1.0,
            beta: 0.8,
            transform_mode: TransformMode::Lorentz,
            play_state: PlayState::Running,
            ..Default::default()
        };
        let scene = build_scene(&state, &Geometry::default());
        let label = &scene.rocket_panel.pillars[0];
        let vertices = pillar(label, ROCKET_PANEL);
        let width = vertices[1].position[0] - vertices[0].position[0];
        assert!((width - PILLAR_SIZE.x * 0.6).abs() < 1e-3);

        // Running rockets carry a flame
        let all = scene_vertices(&scene);
        let flames = all.iter().filter(|v| v.color == colors::FLAME).count();
        assert_eq!(flames, 12);
    }
}
