//! Geometry constants and screen layout presets
//!
//! Fixed for the lifetime of a session. Loaded from JSON on the web build,
//! defaults on native.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Screen layout presets, picked from the display width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LayoutPreset {
    /// 1600 px and wider
    #[default]
    Wide,
    /// Exactly 1440 px
    Standard,
    /// Every other width, drawn at 1200 px
    Compact,
}

impl LayoutPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutPreset::Wide => "Wide",
            LayoutPreset::Standard => "Standard",
            LayoutPreset::Compact => "Compact",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "wide" => Some(LayoutPreset::Wide),
            "standard" | "std" => Some(LayoutPreset::Standard),
            "compact" => Some(LayoutPreset::Compact),
            _ => None,
        }
    }

    /// Pick the preset the way the desktop build sized its window
    pub fn for_screen_width(width: u32) -> Self {
        if width >= 1600 {
            LayoutPreset::Wide
        } else if width == 1440 {
            LayoutPreset::Standard
        } else {
            LayoutPreset::Compact
        }
    }

    /// Logical canvas size for this preset
    pub fn canvas_size(&self) -> (u32, u32) {
        match self {
            LayoutPreset::Wide => (1600, 900),
            LayoutPreset::Standard => (1440, 900),
            LayoutPreset::Compact => (1200, 900),
        }
    }

    /// Rest spacing between pillars
    pub fn pillar_spacing(&self) -> f64 {
        match self {
            LayoutPreset::Wide | LayoutPreset::Standard => PILLAR_SPACING,
            LayoutPreset::Compact => 256.0,
        }
    }

    pub fn border(&self) -> f64 {
        match self {
            LayoutPreset::Wide => BORDER,
            LayoutPreset::Standard | LayoutPreset::Compact => 30.0,
        }
    }

    /// Narrower layouts cap the velocity lower so the contracted pillars stay legible
    pub fn beta_max(&self) -> f64 {
        match self {
            LayoutPreset::Wide => BETA_MAX,
            LayoutPreset::Standard | LayoutPreset::Compact => 0.965,
        }
    }
}

/// Geometry constants of a session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Geometry {
    /// `L`: rest spacing between pillars, also the rocket's rest length
    pub pillar_spacing: f64,
    /// `C`: invariant speed in pixels per simulated second
    pub light_speed: f64,
    /// Layout offset of the panels
    pub border: f64,
    /// Upper velocity clamp, strictly below 1
    pub beta_max: f64,
    /// Visibility half-window, in pillar spacings
    pub half_window_spacings: f64,
}

impl Default for Geometry {
    fn default() -> Self {
        Self::from_preset(LayoutPreset::Wide)
    }
}

impl Geometry {
    /// Geometry for a layout preset
    pub fn from_preset(preset: LayoutPreset) -> Self {
        Self {
            pillar_spacing: preset.pillar_spacing(),
            light_speed: LIGHT_SPEED,
            border: preset.border(),
            beta_max: preset.beta_max(),
            half_window_spacings: HALF_WINDOW_SPACINGS,
        }
    }

    /// Parse a (possibly partial) JSON document; missing keys keep the Wide defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let geometry: Geometry = serde_json::from_str(json)?;
        geometry.validate()?;
        log::info!(
            "Loaded geometry: L={} C={} beta_max={}",
            geometry.pillar_spacing,
            geometry.light_speed,
            geometry.beta_max
        );
        Ok(geometry)
    }

    /// Reject values the engine's preconditions cannot absorb
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |name: &'static str, value: f64| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::InvalidValue {
                    name,
                    value,
                    expected: "a finite value > 0",
                })
            }
        };
        positive("pillar_spacing", self.pillar_spacing)?;
        positive("light_speed", self.light_speed)?;
        positive("half_window_spacings", self.half_window_spacings)?;
        if self.half_window_spacings > MAX_HALF_WINDOW_SPACINGS {
            return Err(ConfigError::InvalidValue {
                name: "half_window_spacings",
                value: self.half_window_spacings,
                expected: "at most 16 spacings",
            });
        }

        if !self.border.is_finite() {
            return Err(ConfigError::InvalidValue {
                name: "border",
                value: self.border,
                expected: "a finite value",
            });
        }
        if !(self.beta_max > 0.0 && self.beta_max < 1.0) {
            return Err(ConfigError::InvalidValue {
                name: "beta_max",
                value: self.beta_max,
                expected: "0 < beta_max < 1",
            });
        }
        Ok(())
    }

    /// Half-window `W` in pixels
    #[inline]
    pub fn half_window(&self) -> f64 {
        self.half_window_spacings * self.pillar_spacing
    }

    /// Screen x where both panels center the rocket at rest
    #[inline]
    pub fn rocket_home_x(&self) -> f64 {
        self.border + 1.5 * self.pillar_spacing
    }
}
