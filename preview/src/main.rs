//! Desktop preview app for ambient-composer
//!
//! Simulates the motion and light sensors with sliders and renders the
//! status card the way a host application would: background and text colors
//! come straight from the derived light state, value formatting happens
//! here on the presentation side.

use ambient_composer::{
    DisplayDriver, LightLevel, LightState, MonitorConfig, MotionState, Orientation, SampleQueue,
    SampleSender, SensorAvailability, SensorHub, SensorKind, SensorMonitor, SensorSample,
};
use eframe::egui::{self, Color32, RichText};

/// Sample queue capacity
const SAMPLE_QUEUE_SIZE: usize = 16;

/// Static queue carrying simulated samples into the monitor
static SAMPLES: SampleQueue<SAMPLE_QUEUE_SIZE> = SampleQueue::<SAMPLE_QUEUE_SIZE>::new();

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 640.0])
            .with_title("Ambient Composer Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "ambient-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

/// Simulated sensor subsystem backed by UI toggles.
struct SimulatedHub {
    availability: SensorAvailability,
    subscribed: Vec<SensorKind>,
}

impl SimulatedHub {
    fn new() -> Self {
        Self {
            availability: SensorAvailability {
                accelerometer: true,
                light: true,
            },
            subscribed: Vec::new(),
        }
    }

    fn delivers(&self, kind: SensorKind) -> bool {
        self.subscribed.contains(&kind)
    }
}

impl SensorHub for SimulatedHub {
    fn availability(&self) -> SensorAvailability {
        self.availability
    }

    fn subscribe(&mut self, kind: SensorKind) {
        self.subscribed.push(kind);
    }

    fn unsubscribe_all(&mut self) {
        self.subscribed.clear();
    }
}

/// Display driver that remembers the latest state for painting.
#[derive(Default)]
struct CardDisplay {
    motion: Option<MotionState>,
    light: Option<LightState>,
    missing: Vec<SensorKind>,
}

impl DisplayDriver for CardDisplay {
    fn show_motion(&mut self, state: &MotionState) {
        self.motion = Some(*state);
    }

    fn show_light(&mut self, state: &LightState) {
        self.light = Some(*state);
    }

    fn show_missing(&mut self, kind: SensorKind) {
        if !self.missing.contains(&kind) {
            self.missing.push(kind);
        }
    }
}

struct PreviewApp {
    monitor: SensorMonitor<'static, SAMPLE_QUEUE_SIZE>,
    sender: SampleSender<'static, SAMPLE_QUEUE_SIZE>,
    hub: SimulatedHub,
    display: CardDisplay,

    // UI state feeding the simulated sensors
    /// Simulated tilt (x, y, z) in m/s²
    tilt: [f32; 3],
    /// Simulated illuminance in lux
    lux: f32,
    /// Availability applied on the next start
    has_accelerometer: bool,
    has_light: bool,
}

impl PreviewApp {
    fn new() -> Self {
        Self {
            monitor: SensorMonitor::new(SAMPLES.receiver(), &MonitorConfig::default()),
            sender: SAMPLES.sender(),
            hub: SimulatedHub::new(),
            display: CardDisplay::default(),
            tilt: [0.0, 9.8, 0.0],
            lux: 400.0,
            has_accelerometer: true,
            has_light: true,
        }
    }

    fn start(&mut self) {
        self.hub.availability = SensorAvailability {
            accelerometer: self.has_accelerometer,
            light: self.has_light,
        };
        self.display.missing.clear();
        self.monitor.start(&mut self.hub, &mut self.display);
    }

    fn stop(&mut self) {
        self.monitor.stop(&mut self.hub);
    }

    /// Deliver one sample per subscribed sensor, UI-refresh cadence.
    fn deliver_samples(&mut self) {
        if self.hub.delivers(SensorKind::Accelerometer) {
            let [x, y, z] = self.tilt;
            let _ = self.sender.try_send(SensorSample::accelerometer(x, y, z));
        }
        if self.hub.delivers(SensorKind::Light) {
            let _ = self.sender.try_send(SensorSample::light(self.lux));
        }
    }
}

fn orientation_text(orientation: Orientation) -> &'static str {
    match orientation {
        Orientation::Portrait => "Portrait",
        Orientation::PortraitInverted => "Portrait (inverted)",
        Orientation::LandscapeLeft => "Landscape (left)",
        Orientation::LandscapeRight => "Landscape (right)",
        Orientation::RestingOrMoving => "Resting or moving",
    }
}

fn level_text(level: LightLevel) -> &'static str {
    match level {
        LightLevel::VeryDark => "Very dark",
        LightLevel::Dark => "Dark / dim interior",
        LightLevel::Normal => "Normal interior",
        LightLevel::Bright => "Bright",
        LightLevel::VeryBright => "Intense outdoor light",
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.monitor.is_running() {
            self.deliver_samples();
            self.monitor.poll(&mut self.display);
        }

        // Keep sampling while the window is idle
        ctx.request_repaint();

        egui::SidePanel::left("controls").show(ctx, |ui| {
            ui.heading("Simulated sensors");
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let running = self.monitor.is_running();
                if ui.add_enabled(!running, egui::Button::new("Start")).clicked() {
                    self.start();
                }
                if ui.add_enabled(running, egui::Button::new("Stop")).clicked() {
                    self.stop();
                }
                if ui.button("Reset smoothing").clicked() {
                    self.monitor.reset();
                }
            });

            ui.add_space(8.0);
            ui.checkbox(&mut self.has_accelerometer, "Accelerometer present");
            ui.checkbox(&mut self.has_light, "Light sensor present");
            ui.label("Availability is applied on the next start.");

            ui.add_space(12.0);
            ui.label("Tilt (m/s²):");
            ui.add(egui::Slider::new(&mut self.tilt[0], -12.0..=12.0).text("x"));
            ui.add(egui::Slider::new(&mut self.tilt[1], -12.0..=12.0).text("y"));
            ui.add(egui::Slider::new(&mut self.tilt[2], -12.0..=12.0).text("z"));

            ui.add_space(12.0);
            ui.label("Illuminance (lux):");
            ui.add(egui::Slider::new(&mut self.lux, 0.0..=30_000.0).logarithmic(true));
        });

        let (background, text) = match self.display.light {
            Some(light) => (
                Color32::from_rgb(light.background.r, light.background.g, light.background.b),
                Color32::from_rgb(light.text.r, light.text.g, light.text.b),
            ),
            None => (Color32::from_rgb(0x12, 0x12, 0x12), Color32::WHITE),
        };

        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(background))
            .show(ctx, |ui| {
                ui.add_space(24.0);

                ui.label(RichText::new("Accelerometer").heading().color(text));
                if self.display.missing.contains(&SensorKind::Accelerometer) {
                    ui.label(RichText::new("Accelerometer not available").color(text));
                } else if let Some(motion) = self.display.motion {
                    ui.label(
                        RichText::new(format!(
                            "X: {:.2} m/s²\nY: {:.2} m/s²\nZ: {:.2} m/s²\nMagnitude: {:.2} m/s²",
                            motion.x, motion.y, motion.z, motion.magnitude
                        ))
                        .monospace()
                        .color(text),
                    );
                    ui.label(
                        RichText::new(format!(
                            "Orientation: {}",
                            orientation_text(motion.orientation)
                        ))
                        .color(text),
                    );
                } else {
                    ui.label(RichText::new("Waiting for samples…").color(text));
                }

                ui.add_space(24.0);

                ui.label(RichText::new("Ambient light").heading().color(text));
                if self.display.missing.contains(&SensorKind::Light) {
                    ui.label(RichText::new("Light sensor not available").color(text));
                } else if let Some(light) = self.display.light {
                    ui.label(
                        RichText::new(format!("Light: {:.1} lx", light.smoothed_lux))
                            .monospace()
                            .color(text),
                    );
                    ui.label(
                        RichText::new(format!("Level: {}", level_text(light.level))).color(text),
                    );
                } else {
                    ui.label(RichText::new("Waiting for samples…").color(text));
                }
            });
    }
}
