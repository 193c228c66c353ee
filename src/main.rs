//! Rocket Frames entry point
//!
//! The browser build is driven from JavaScript through `platform::web`. The
//! native binary runs a short scripted session headless and logs what a
//! learner would see.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use rocket_frames::Geometry;
    use rocket_frames::consts::SEEK_STEP_BUTTON;
    use rocket_frames::renderer::{as_bytes, scene_vertices};
    use rocket_frames::sim::{Command, Controller, RocketClockFaces, Scene};

    env_logger::init();
    log::info!("Rocket Frames (native) starting...");
    log::info!("Native mode is headless - serve the wasm build for the interactive version");

    const FRAME_MS: f64 = 1000.0 / 60.0;

    fn report(label: &str, scene: &Scene) {
        let rocket = match &scene.rocket_clocks {
            RocketClockFaces::Offset { nose, center, tail } => {
                format!("nose {} | center {} | tail {}", nose.text, center.text, tail.text)
            }
            RocketClockFaces::Shared(reading) => format!("all {}", reading.text),
        };
        let vertices = scene_vertices(scene);
        log::info!(
            "[{}] {} at {}: platform {} | rocket {} | {} pillars in view",
            label,
            scene.transform_mode.as_str(),
            scene.velocity_text,
            scene.platform_watch.text,
            rocket,
            scene.rocket_panel.pillars.len()
        );
        log::debug!(
            "[{}] {} vertices, {} bytes",
            label,
            vertices.len(),
            as_bytes(&vertices).len()
        );
    }

    let mut controller = Controller::new(Geometry::default());
    controller.push(Command::SetVelocity(0.6));
    controller.push(Command::Start);

    // Ten seconds of platform time
    for _ in 0..599 {
        controller.tick(FRAME_MS);
    }
    report("galilean", &controller.tick(FRAME_MS));

    controller.push(Command::ToggleTransformMode);
    controller.push(Command::Pause);
    report("lorentz", &controller.tick(FRAME_MS));

    for _ in 0..10 {
        controller.push(Command::SeekBackward(SEEK_STEP_BUTTON));
    }
    report("rewound", &controller.tick(FRAME_MS));

    controller.push(Command::Stop);
    report("stopped", &controller.tick(FRAME_MS));
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_start, this is just to satisfy the compiler
}
