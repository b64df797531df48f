//! Session lifecycle around the router.
//!
//! The monitor is the orchestrator: it captures sensor availability at
//! start, drains the sample queue, and pushes derived state to the host's
//! display driver. Subscription and rendering stay on the host side of the
//! [`crate::SensorHub`] and [`crate::DisplayDriver`] seams.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::channel::SampleReceiver;
use crate::light::LightConfig;
use crate::router::{DerivedState, SensorKind, SensorRouter};
use crate::{DisplayDriver, SensorHub};

/// Which sensors the platform actually has.
///
/// Replaces platform nullability with explicit flags; an absent sensor is
/// reported once and never reaches a processor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SensorAvailability {
    pub accelerometer: bool,
    pub light: bool,
}

/// Configuration for a monitoring session.
#[derive(Debug, Clone, Default)]
pub struct MonitorConfig {
    /// Palette used for the adaptive background.
    pub light: LightConfig,
}

/// Sensor monitoring session.
///
/// One monitor owns one router and therefore one smoothing session;
/// independent monitors never share state.
pub struct SensorMonitor<'a, const QUEUE_SIZE: usize> {
    samples: SampleReceiver<'a, QUEUE_SIZE>,
    router: SensorRouter,
    availability: SensorAvailability,
    running: bool,
}

impl<'a, const QUEUE_SIZE: usize> SensorMonitor<'a, QUEUE_SIZE> {
    /// Create a stopped monitor draining the given queue.
    pub fn new(samples: SampleReceiver<'a, QUEUE_SIZE>, config: &MonitorConfig) -> Self {
        Self {
            samples,
            router: SensorRouter::new(config.light.clone()),
            availability: SensorAvailability::default(),
            running: false,
        }
    }

    /// Subscribe to every sensor the hub reports as present and tell the
    /// display about the ones it does not.
    ///
    /// Starting an already running session changes nothing.
    pub fn start<H, D>(&mut self, hub: &mut H, display: &mut D)
    where
        H: SensorHub,
        D: DisplayDriver,
    {
        if self.running {
            return;
        }

        self.availability = hub.availability();
        if self.availability.accelerometer {
            hub.subscribe(SensorKind::Accelerometer);
        } else {
            display.show_missing(SensorKind::Accelerometer);
        }
        if self.availability.light {
            hub.subscribe(SensorKind::Light);
        } else {
            display.show_missing(SensorKind::Light);
        }

        self.running = true;
    }

    /// Unsubscribe from every sensor.
    ///
    /// Idempotent; calling it on a stopped monitor does nothing. Processor
    /// state stays frozen until [`Self::reset`] or a restart delivers new
    /// samples.
    pub fn stop<H: SensorHub>(&mut self, hub: &mut H) {
        if !self.running {
            return;
        }
        hub.unsubscribe_all();
        self.running = false;
    }

    /// Whether the session is currently subscribed.
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Availability captured at the last [`Self::start`].
    pub const fn availability(&self) -> SensorAvailability {
        self.availability
    }

    /// Drain pending samples and forward derived states to the display.
    ///
    /// Returns the number of states forwarded. Malformed samples are
    /// dropped without error. Does nothing while stopped.
    pub fn poll<D: DisplayDriver>(&mut self, display: &mut D) -> usize {
        if !self.running {
            return 0;
        }

        let mut forwarded = 0;
        while let Ok(sample) = self.samples.try_receive() {
            match self.router.route(&sample) {
                Some(DerivedState::Motion(state)) => {
                    display.show_motion(&state);
                    forwarded += 1;
                }
                Some(DerivedState::Light(state)) => {
                    display.show_light(&state);
                    forwarded += 1;
                }
                None => {
                    #[cfg(feature = "esp32-log")]
                    println!(
                        "dropping {:?} sample with {} values",
                        sample.kind,
                        sample.values.len()
                    );
                }
            }
        }
        forwarded
    }

    /// Clear the light smoothing history; the next reading reseeds it.
    pub fn reset(&mut self) {
        self.router.reset();
    }
}
