use eframe::egui;
use eframe::egui::panel::Side;
use eframe::egui::Color32;
use eframe::egui::FontFamily;
use eframe::egui::FontId;
use eframe::egui::Id;
use eframe::egui::Key;
use eframe::egui::Pos2;
use eframe::egui::RichText;
use eframe::egui::Shape;
use eframe::egui::SidePanel;
use eframe::egui::Stroke;
use log::info;
use log::Level;
use trackbot::anyhow::anyhow;
use trackbot::anyhow::Context;
use trackbot::anyhow::Result;
use trackbot::config::SimulationConfig;
use trackbot::glam::Vec2;
use trackbot::simulation::Simulation;
use trackbot::utils::math::F32MathUtils;
use std::collections::VecDeque;
use std::env;
use std::fs;

const DELTA_HISTORY_COUNT: usize = 100;
const MAX_FRAME_DELTA: f32 = 0.1;

const TRACK_COLOR: Color32 = Color32::BLACK;
const WHEEL_COLOR: Color32 = Color32::BLUE;
const PROBE_COLOR: Color32 = Color32::from_rgb(255, 0, 255);

fn main() -> Result<()> {
    simple_logger::init_with_level(Level::Info)?;

    let config = match env::args().nth(1) {
        Some(path) => {
            let content = fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path))?;
            let config = toml::from_str(&content).with_context(|| format!("Failed to parse {}", path))?;
            info!("Loaded configuration from {}", path);
            config
        }
        None => SimulationConfig::default(),
    };

    let simulation = Simulation::new(config)?;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1024.0, 768.0]).with_resizable(false),
        ..Default::default()
    };

    eframe::run_native("Car Simulator", options, Box::new(|_| Box::new(SimulatorApp::new(simulation)))).map_err(|err| anyhow!("{}", err))
}

struct SimulatorApp {
    simulation: Simulation,
    delta_history: VecDeque<f32>,
    paused: bool,
}

impl SimulatorApp {
    fn new(simulation: Simulation) -> Self {
        Self { simulation, delta_history: VecDeque::new(), paused: false }
    }

    fn outline_to_screen(outline: &[Vec2], origin: Pos2) -> Vec<Pos2> {
        outline.iter().map(|point| egui::pos2(origin.x + point.x, origin.y + point.y)).collect()
    }
}

impl eframe::App for SimulatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let delta = ctx.input(|input| input.stable_dt).min(MAX_FRAME_DELTA);

        if ctx.input(|input| input.key_pressed(Key::Space)) {
            self.paused = !self.paused;
        }

        if !self.paused {
            self.simulation.advance(delta);
        }

        self.delta_history.push_back(delta);
        if self.delta_history.len() > DELTA_HISTORY_COUNT {
            self.delta_history.pop_front();
        }

        let snapshot = self.simulation.snapshot();

        SidePanel::new(Side::Right, Id::new("status")).show(ctx, |ui| {
            let font = FontId { size: 14.0, family: FontFamily::Monospace };
            let delta_average = self.delta_history.iter().sum::<f32>() / self.delta_history.len() as f32;

            ui.label(RichText::new(format!("FPS: {:.0}", 1.0 / delta_average.max(f32::EPSILON))).font(font.clone()));
            ui.label(RichText::new(format!("Delta: {:.2} ms", delta_average * 1000.0)).font(font.clone()));
            ui.separator();
            ui.label(RichText::new(format!("Ticks: {}", snapshot.ticks)).font(font.clone()));
            ui.label(RichText::new(format!("Time: {:.2} s", snapshot.time)).font(font.clone()));
            ui.label(RichText::new(format!("Turn: {:?}", snapshot.turn)).font(font.clone()));
            ui.label(RichText::new(format!("Heading: {:.1} deg", snapshot.rotation.normalize_angle().to_degrees())).font(font.clone()));
            ui.label(RichText::new(format!("Position: {:.0}, {:.0}", snapshot.position.x, snapshot.position.y)).font(font.clone()));
            ui.separator();
            ui.label(RichText::new(if self.paused { "Paused (Space resumes)" } else { "Space pauses" }).font(font));
        });

        egui::CentralPanel::default().frame(egui::Frame::none().fill(Color32::WHITE)).show(ctx, |ui| {
            let origin = ui.min_rect().min;
            let painter = ui.painter();

            for quad in &snapshot.track {
                painter.add(Shape::convex_polygon(Self::outline_to_screen(quad, origin), TRACK_COLOR, Stroke::NONE));
            }

            for wheel in &snapshot.wheels {
                painter.add(Shape::convex_polygon(Self::outline_to_screen(wheel, origin), WHEEL_COLOR, Stroke::NONE));
            }

            painter.add(Shape::convex_polygon(Self::outline_to_screen(&snapshot.plate, origin), Color32::from_rgba_unmultiplied(140, 140, 140, 220), Stroke::NONE));

            for probe in &snapshot.probes {
                painter.add(Shape::convex_polygon(Self::outline_to_screen(probe, origin), PROBE_COLOR, Stroke::NONE));
            }
        });

        ctx.request_repaint();
    }
}
