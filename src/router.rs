//! Tagged sample dispatch.
//!
//! The router is the single entry point for raw deliveries: it checks the
//! kind tag and payload arity, hands well-formed samples to the matching
//! processor, and drops everything else. Sensors occasionally deliver odd
//! payloads and a bad sample must never take the pipeline down.

use heapless::Vec;

use crate::light::{LightConfig, LightProcessor, LightState};
use crate::motion::{MotionProcessor, MotionState};

/// Maximum number of values a single sample can carry.
pub const SAMPLE_VALUE_CAPACITY: usize = 4;

/// Which sensor produced a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorKind {
    Accelerometer,
    Light,
    Unknown,
}

/// One raw sensor delivery: a kind tag plus its value payload.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorSample {
    pub kind: SensorKind,
    pub values: Vec<f32, SAMPLE_VALUE_CAPACITY>,
}

impl SensorSample {
    /// Well-formed three-axis accelerometer sample (m/s²).
    pub fn accelerometer(x: f32, y: f32, z: f32) -> Self {
        Self::from_slice(SensorKind::Accelerometer, &[x, y, z])
    }

    /// Well-formed ambient light sample (lux).
    pub fn light(lux: f32) -> Self {
        Self::from_slice(SensorKind::Light, &[lux])
    }

    /// Sample with an arbitrary payload.
    ///
    /// Payloads longer than [`SAMPLE_VALUE_CAPACITY`] are truncated; the
    /// router checks arity on what remains.
    pub fn from_slice(kind: SensorKind, values: &[f32]) -> Self {
        let take = values.len().min(SAMPLE_VALUE_CAPACITY);
        let mut payload = Vec::new();
        let _ = payload.extend_from_slice(&values[..take]);
        Self {
            kind,
            values: payload,
        }
    }
}

/// State derived from one routed sample.
#[derive(Debug, Clone, PartialEq)]
pub enum DerivedState {
    Motion(MotionState),
    Light(LightState),
}

/// Dispatches tagged samples to the processor that understands them.
#[derive(Debug)]
pub struct SensorRouter {
    motion: MotionProcessor,
    light: LightProcessor,
}

impl SensorRouter {
    /// Create a router with fresh processors.
    pub const fn new(config: LightConfig) -> Self {
        Self {
            motion: MotionProcessor,
            light: LightProcessor::new(config),
        }
    }

    /// Route one sample to its processor.
    ///
    /// Accelerometer samples must carry exactly three values, light samples
    /// at least one (only the first is read). Returns `None` for anything
    /// else, without error.
    pub fn route(&mut self, sample: &SensorSample) -> Option<DerivedState> {
        match (sample.kind, sample.values.as_slice()) {
            (SensorKind::Accelerometer, &[x, y, z]) => {
                Some(DerivedState::Motion(self.motion.process(x, y, z)))
            }
            (SensorKind::Light, &[lux, ..]) => {
                Some(DerivedState::Light(self.light.process(lux)))
            }
            _ => None,
        }
    }

    /// Clear the light smoothing history; the next reading reseeds it.
    pub fn reset(&mut self) {
        self.light.reset();
    }
}
