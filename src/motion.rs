//! Motion classification from raw accelerometer samples.
//!
//! Stateless: every sample yields a complete [`MotionState`] on its own,
//! with no memory of earlier samples.

use libm::{fabsf, sqrtf};

/// Cross-axis tilt below this still counts as an upright hold (m/s²).
const CROSS_AXIS_LIMIT: f32 = 3.0;

/// An axis reading beyond this means gravity is dominated by that axis (m/s²).
const DOMINANT_AXIS_MIN: f32 = 6.0;

/// Device orientation derived from which axis gravity dominates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Upright, top edge up.
    Portrait,
    /// Upright, top edge down.
    PortraitInverted,
    /// Rotated onto its left edge.
    LandscapeLeft,
    /// Rotated onto its right edge.
    LandscapeRight,
    /// Lying flat, shaken, or mid-turn; no axis dominates.
    RestingOrMoving,
}

impl Orientation {
    /// Classify from the x/y gravity components.
    ///
    /// Rules are checked in order and the first match wins, so boundary
    /// values resolve to the earlier rule. Non-finite input lands on
    /// [`Orientation::RestingOrMoving`]; classification never fails.
    pub fn from_axes(x: f32, y: f32) -> Self {
        if !(x.is_finite() && y.is_finite()) {
            return Self::RestingOrMoving;
        }

        if fabsf(x) < CROSS_AXIS_LIMIT && y > DOMINANT_AXIS_MIN {
            Self::Portrait
        } else if fabsf(x) < CROSS_AXIS_LIMIT && y < -DOMINANT_AXIS_MIN {
            Self::PortraitInverted
        } else if x > DOMINANT_AXIS_MIN {
            Self::LandscapeLeft
        } else if x < -DOMINANT_AXIS_MIN {
            Self::LandscapeRight
        } else {
            Self::RestingOrMoving
        }
    }
}

/// Snapshot of one processed accelerometer sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionState {
    /// Raw x-axis acceleration (m/s²).
    pub x: f32,
    /// Raw y-axis acceleration (m/s²).
    pub y: f32,
    /// Raw z-axis acceleration (m/s²).
    pub z: f32,
    /// Euclidean norm of the acceleration vector (m/s²).
    pub magnitude: f32,
    /// Orientation label for the sample.
    pub orientation: Orientation,
}

/// Stateless accelerometer processor.
#[derive(Debug, Clone, Copy, Default)]
pub struct MotionProcessor;

impl MotionProcessor {
    /// Process one raw three-axis sample.
    pub fn process(self, x: f32, y: f32, z: f32) -> MotionState {
        MotionState {
            x,
            y,
            z,
            magnitude: sqrtf(x * x + y * y + z * z),
            orientation: Orientation::from_axes(x, y),
        }
    }
}
