#![no_std]

pub mod channel;
pub mod color;
pub mod light;
pub mod monitor;
pub mod motion;
pub mod router;

pub use channel::{QueueEmpty, QueueFull, SampleQueue, SampleReceiver, SampleSender};
pub use color::{Rgb, lerp_rgb, rgb_from_u32};
pub use light::{LightConfig, LightLevel, LightProcessor, LightState};
pub use monitor::{MonitorConfig, SensorAvailability, SensorMonitor};
pub use motion::{MotionProcessor, MotionState, Orientation};
pub use router::{DerivedState, SensorKind, SensorRouter, SensorSample};

/// Abstract sensor subsystem trait
///
/// Implement this trait to connect whatever sensor stack the platform has.
/// The monitor is generic over this trait and only ever asks it about
/// availability and subscription; sample delivery goes through a
/// [`SampleQueue`].
pub trait SensorHub {
    /// Report which sensors are present on this device.
    fn availability(&self) -> SensorAvailability;

    /// Begin delivering samples of the given kind.
    fn subscribe(&mut self, kind: SensorKind);

    /// Stop delivering samples of every kind.
    fn unsubscribe_all(&mut self);
}

/// Abstract display trait
///
/// Implement this trait to apply derived status and style to whatever
/// presentation the host has. Formatting and widget traversal are the
/// implementor's concern; the core only hands over state DTOs.
pub trait DisplayDriver {
    /// Apply a processed accelerometer state.
    fn show_motion(&mut self, state: &MotionState);

    /// Apply a processed light state and its display style.
    fn show_light(&mut self, state: &LightState);

    /// Show that a sensor is not present on this device.
    fn show_missing(&mut self, kind: SensorKind);
}
