//! Transform laws between the platform frame and the rocket frame
//!
//! Both laws move the rocket at `beta * C`. They differ in two numbers:
//! - `length_scale`: contraction applied to lengths and to the moving clocks' rate
//! - `simultaneity_beta`: how strongly a clock's reading depends on its position
//!
//! Galilean is `(1, 0)`; Lorentz is `(sqrt(1 - beta^2), beta)`.

use serde::{Deserialize, Serialize};

/// Which transform the learner has selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TransformMode {
    #[default]
    Galilean,
    Lorentz,
}

impl TransformMode {
    pub fn toggled(self) -> Self {
        match self {
            TransformMode::Galilean => TransformMode::Lorentz,
            TransformMode::Lorentz => TransformMode::Galilean,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransformMode::Galilean => "Galilean",
            TransformMode::Lorentz => "Lorentz",
        }
    }
}

/// Lorentz scale `sqrt(1 - beta^2)`, i.e. `1 / gamma`.
///
/// `beta` must satisfy `|beta| < 1`; the controller clamps before calling.
/// Out-of-range input is clamped to the largest representable value below 1
/// rather than producing NaN.
#[inline]
pub fn compute_scale(beta: f64) -> f64 {
    let beta = beta.abs().min(1.0 - f64::EPSILON);
    (1.0 - beta * beta).sqrt()
}

/// The unified transform law consumed by the engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformLaw {
    /// Velocity fraction the rocket moves at (both laws)
    pub beta: f64,
    /// Length-contraction and clock-rate factor
    pub length_scale: f64,
    /// Velocity fraction used for position-dependent clock offsets
    pub simultaneity_beta: f64,
}

impl TransformLaw {
    pub fn new(mode: TransformMode, beta: f64) -> Self {
        match mode {
            TransformMode::Galilean => Self {
                beta,
                length_scale: 1.0,
                simultaneity_beta: 0.0,
            },
            TransformMode::Lorentz => Self {
                beta,
                length_scale: compute_scale(beta),
                simultaneity_beta: beta,
            },
        }
    }

    /// Reading of a clock `distance` ahead of the reference point at global time `t`.
    ///
    /// Clocks ahead (positive distance) lead, clocks behind lag.
    #[inline]
    pub fn proper_time(&self, t: f64, distance: f64, light_speed: f64) -> f64 {
        self.length_scale * t + self.simultaneity_beta * distance / light_speed
    }
}
