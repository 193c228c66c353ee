//! Rocket Frames - a special-relativity classroom visualization
//!
//! A rocket travels past an endless row of pillars. The same motion is shown
//! from the platform (pillars at rest) and from the rocket (pillars streaming
//! by), under either a Galilean or a Lorentz transform.
//!
//! Core modules:
//! - `sim`: Pure kinematics engine, scene descriptor and session controller
//! - `renderer`: Tessellates a scene into GPU-ready vertices
//! - `platform`: Browser bindings (wasm32 only)
//! - `settings`: Geometry constants and screen layout presets

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{ConfigError, TimeFormatError};
pub use settings::{Geometry, LayoutPreset};

/// Simulation configuration constants
pub mod consts {
    /// Highest selectable velocity fraction (the Lorentz factor is singular at 1)
    pub const BETA_MAX: f64 = 0.98;
    /// Velocity applied by Start when the rocket is at rest
    pub const DEFAULT_START_BETA: f64 = 0.05;

    /// Invariant speed, in screen pixels per simulated second
    pub const LIGHT_SPEED: f64 = 400.0;
    /// Rest spacing between pillars == rest length of the rocket (pixels)
    pub const PILLAR_SPACING: f64 = 340.0;
    /// Left layout margin (pixels, not physics)
    pub const BORDER: f64 = 70.0;
    /// Visibility half-window around the observer, in pillar spacings
    pub const HALF_WINDOW_SPACINGS: f64 = 2.0;
    /// Largest configurable half-window; bounds the pillars built per frame
    pub const MAX_HALF_WINDOW_SPACINGS: f64 = 16.0;

    /// Seek step for a single seek-button press (seconds, before velocity scaling)
    pub const SEEK_STEP_BUTTON: f64 = 0.01;
    /// Seek step per frame while a seek key is held
    pub const SEEK_STEP_KEY: f64 = 0.0025;
    /// Keeps the seek step finite when the rocket is at rest
    pub const SEEK_EPSILON: f64 = 0.01;

    /// Simulated seconds per full sweep of a clock hand
    pub const CLOCK_PERIOD: f64 = 60.0;
    /// Clock hand length on the pillar faces (pixels)
    pub const CLOCK_HAND_LENGTH: f64 = 25.0;

    /// Platform panel repeats every this many pillar spacings
    pub const PLATFORM_LAP_SPACINGS: f64 = 4.0;
    /// Fixed pillars drawn on the platform panel
    pub const PLATFORM_PILLARS: usize = 3;
}

/// Format seconds as `MM:SS:CS`.
///
/// Negative inputs wrap by one hour first, so `-1.0` reads `59:59:00`. Each
/// field keeps the second and third digit of `field * 10 + 1001`, which is a
/// zero-padded two-digit value for everything a session reaches and silently
/// truncates past 99 minutes.
pub fn time_to_string(seconds: f64) -> String {
    let x = if seconds < 0.0 { seconds + 3600.0 } else { seconds };
    let minutes = (x / 60.0).floor();
    let secs = x.rem_euclid(60.0).floor();
    let frac = x - x.floor();

    format!(
        "{}:{}:{}",
        two_digits((minutes * 10.0 + 1001.0) as i64),
        two_digits((secs * 10.0 + 1001.0) as i64),
        two_digits((frac * 1000.0 + 1001.0).floor() as i64),
    )
}

fn two_digits(n: i64) -> String {
    n.to_string().chars().skip(1).take(2).collect()
}

/// Parse an `MM:SS:CS` string back into seconds.
pub fn parse_time_string(text: &str) -> Result<f64, TimeFormatError> {
    let fields: Vec<&str> = text.split(':').collect();
    if fields.len() != 3 {
        return Err(TimeFormatError::FieldCount {
            found: fields.len(),
        });
    }

    let mut values = [0u32; 3];
    for (slot, field) in values.iter_mut().zip(&fields) {
        if field.len() != 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TimeFormatError::BadField {
                field: (*field).to_string(),
            });
        }
        *slot = field
            .parse()
            .map_err(|_| TimeFormatError::BadField {
                field: (*field).to_string(),
            })?;
    }

    let [minutes, secs, centis] = values;
    if secs >= 60 {
        return Err(TimeFormatError::SecondsOutOfRange { seconds: secs });
    }
    Ok(minutes as f64 * 60.0 + secs as f64 + centis as f64 / 100.0)
}
