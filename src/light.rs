//! Ambient light smoothing and display styling.
//!
//! Raw lux readings are noisy enough to make a reactive background flicker,
//! so each reading is blended into an exponential moving average before it
//! is classified and mapped to colors.

use crate::color::{self, Rgb, lerp_rgb, rgb_from_u32};

/// Weight of the previous smoothed value in the moving average.
const PRIOR_WEIGHT: f32 = 0.8;

/// Weight of the incoming raw reading.
const INPUT_WEIGHT: f32 = 0.2;

/// Readings at or above this saturate the brightness scale (lux).
const FULL_SCALE_LUX: f32 = 20_000.0;

/// Normalized brightness at which the text flips from white to black.
const TEXT_CONTRAST_SPLIT: f32 = 0.5;

/// Illuminance band of a smoothed reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightLevel {
    /// Below 10 lux.
    VeryDark,
    /// 10 to 100 lux, a dim interior.
    Dark,
    /// 100 to 1000 lux, a normally lit interior.
    Normal,
    /// 1000 to 10000 lux.
    Bright,
    /// 10000 lux and up, direct outdoor light.
    VeryBright,
}

impl LightLevel {
    /// Classify a lux reading.
    ///
    /// Upper bounds are strict and the first match wins. Non-finite
    /// readings land on [`LightLevel::VeryBright`].
    pub fn from_lux(lux: f32) -> Self {
        if !lux.is_finite() {
            return Self::VeryBright;
        }

        if lux < 10.0 {
            Self::VeryDark
        } else if lux < 100.0 {
            Self::Dark
        } else if lux < 1000.0 {
            Self::Normal
        } else if lux < 10_000.0 {
            Self::Bright
        } else {
            Self::VeryBright
        }
    }
}

/// Palette for the adaptive background.
#[derive(Debug, Clone)]
pub struct LightConfig {
    /// Background at zero brightness.
    pub dark: Rgb,
    /// Background at full brightness.
    pub light: Rgb,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            dark: rgb_from_u32(0x121212),
            light: rgb_from_u32(0xFFFFFF),
        }
    }
}

/// Snapshot of one processed light sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightState {
    /// Reading as delivered by the sensor (lux).
    pub raw_lux: f32,
    /// Exponentially smoothed reading (lux).
    pub smoothed_lux: f32,
    /// Smoothed reading rescaled to `[0, 1]` against the full scale.
    pub normalized: f32,
    /// Illuminance band of the smoothed reading.
    pub level: LightLevel,
    /// Background interpolated between the palette endpoints.
    pub background: Rgb,
    /// White over dark backgrounds, black over light ones.
    pub text: Rgb,
}

/// Stateful ambient light processor.
///
/// Owns the prior smoothed value, so each instance is an independent
/// smoothing session. The prior persists across calls until [`Self::reset`].
#[derive(Debug, Clone)]
pub struct LightProcessor {
    config: LightConfig,
    prior: Option<f32>,
}

impl LightProcessor {
    /// Create a processor with no smoothing history.
    pub const fn new(config: LightConfig) -> Self {
        Self {
            config,
            prior: None,
        }
    }

    /// Process one raw lux reading.
    ///
    /// The first reading after construction or [`Self::reset`] seeds the
    /// moving average; later readings blend into it.
    pub fn process(&mut self, raw_lux: f32) -> LightState {
        let smoothed = match self.prior {
            None => raw_lux,
            Some(prior) => prior * PRIOR_WEIGHT + raw_lux * INPUT_WEIGHT,
        };
        self.prior = Some(smoothed);

        let normalized = normalize(smoothed);
        let text = if normalized < TEXT_CONTRAST_SPLIT {
            color::WHITE
        } else {
            color::BLACK
        };

        LightState {
            raw_lux,
            smoothed_lux: smoothed,
            normalized,
            level: LightLevel::from_lux(smoothed),
            background: lerp_rgb(self.config.dark, self.config.light, normalized),
            text,
        }
    }

    /// Forget the smoothing history; the next reading reseeds it.
    pub fn reset(&mut self) {
        self.prior = None;
    }
}

impl Default for LightProcessor {
    fn default() -> Self {
        Self::new(LightConfig::default())
    }
}

/// Rescale a smoothed reading to `[0, 1]`.
///
/// Written with explicit comparisons so NaN maps to 0.0 instead of
/// propagating into the color math.
fn normalize(lux: f32) -> f32 {
    if lux >= FULL_SCALE_LUX {
        1.0
    } else if lux > 0.0 {
        lux / FULL_SCALE_LUX
    } else {
        0.0
    }
}
