use crate::config::SimulationConfig;
use crate::physics::context::PhysicsContext;
use crate::physics::geometry;
use crate::time::FixedTimestep;
use crate::track::builder::Track;
use crate::utils::math::PolygonMathUtils;
use crate::vehicle::controller;
use crate::vehicle::controller::SensorController;
use crate::vehicle::controller::Turn;
use crate::vehicle::rig::VehicleRig;
use anyhow::Result;
use glam::Vec2;
use log::info;
use rapier2d::geometry::ColliderHandle;

pub struct Simulation {
    pub physics: PhysicsContext,
    pub track: Track,
    pub vehicle: VehicleRig,
    pub controller: SensorController,

    clock: FixedTimestep,
    config: SimulationConfig,
    ticks: u64,
}

pub struct WorldSnapshot {
    pub track: Vec<Vec<Vec2>>,
    pub wheels: Vec<Vec<Vec2>>,
    pub plate: Vec<Vec2>,
    pub probes: Vec<Vec<Vec2>>,
    pub position: Vec2,
    pub rotation: f32,
    pub turn: Turn,
    pub ticks: u64,
    pub time: f32,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;

        let segments = config.track.segments()?;
        let mut physics = PhysicsContext::default();
        let track = Track::spawn(&mut physics, &segments, config.samples_per_segment);
        let vehicle = VehicleRig::spawn(&mut physics, &config.vehicle, config.start_point(), config.start_angle())?;
        let clock = FixedTimestep::new(config.timestep);

        info!("Simulation ready: car at {} facing {:.1} degrees", config.start_point(), config.start_rotation);
        Ok(Self { physics, track, vehicle, controller: SensorController::new(), clock, config, ticks: 0 })
    }

    pub fn advance(&mut self, delta: f32) -> u32 {
        self.clock.accumulate(delta);

        let mut steps = 0;
        while self.clock.consume() {
            self.tick();
            steps += 1;
        }

        steps
    }

    pub fn tick(&mut self) {
        let left_on_track = self.probe_on_track(self.vehicle.probe_left);
        let right_on_track = self.probe_on_track(self.vehicle.probe_right);
        let turn = self.controller.decide(left_on_track, right_on_track);

        let step = self.clock.step();
        let (position, rotation) = self.physics.body_pose(self.vehicle.body);
        let (position, rotation) = controller::steer(position, rotation, turn, self.config.speed * step, self.config.turn_rate_radians() * step);

        self.physics.set_body_pose(self.vehicle.body, position, rotation);
        self.physics.step(step);
        self.ticks += 1;
    }

    // A probe outline point on a quad boundary counts as on track.
    fn probe_on_track(&self, probe: ColliderHandle) -> bool {
        let probe = &self.physics.colliders[probe];
        let points = geometry::world_vertices(probe, &self.physics.rigidbodies);

        for handle in &self.track.colliders {
            let quad = geometry::world_vertices(&self.physics.colliders[*handle], &self.physics.rigidbodies);
            if points.iter().any(|point| quad.contains_point(*point)) {
                return true;
            }
        }

        false
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        let (position, rotation) = self.physics.body_pose(self.vehicle.body);

        WorldSnapshot {
            track: self.track.colliders.iter().map(|handle| self.outline(*handle)).collect(),
            wheels: self.vehicle.wheels.iter().map(|handle| self.outline(*handle)).collect(),
            plate: self.outline(self.vehicle.plate),
            probes: [self.vehicle.probe_left, self.vehicle.probe_middle, self.vehicle.probe_right].iter().map(|handle| self.outline(*handle)).collect(),
            position,
            rotation,
            turn: self.controller.last_turn(),
            ticks: self.ticks,
            time: self.ticks as f32 * self.clock.step(),
        }
    }

    fn outline(&self, handle: ColliderHandle) -> Vec<Vec2> {
        match self.physics.colliders.get(handle) {
            Some(collider) => geometry::world_vertices(collider, &self.physics.rigidbodies),
            None => Vec::new(),
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SegmentSpec;
    use crate::config::TrackSource;

    #[test]
    fn default_setup_spawns_full_world() {
        let simulation = Simulation::new(SimulationConfig::default()).unwrap();
        let snapshot = simulation.snapshot();

        assert_eq!(snapshot.track.len(), 320);
        assert_eq!(snapshot.wheels.len(), 2);
        assert_eq!(snapshot.plate.len(), 6);
        assert_eq!(snapshot.probes.len(), 3);
        assert_eq!(snapshot.position, Vec2::new(300.0, 420.0));
        assert_eq!(snapshot.turn, Turn::Straight);
    }

    #[test]
    fn advance_runs_whole_steps_only() {
        let mut simulation = Simulation::new(SimulationConfig::default()).unwrap();
        let step = simulation.config().timestep;

        assert_eq!(simulation.advance(step * 2.5), 2);
        assert_eq!(simulation.ticks(), 2);

        assert_eq!(simulation.advance(step * 0.6), 1);
        assert_eq!(simulation.ticks(), 3);
    }

    #[test]
    fn car_holds_heading_down_a_straight() {
        let spec = SegmentSpec { start: [0.0, 200.0], middle: [0.0, -400.0], end: [0.0, -1000.0], start_width: 5.0, end_width: 5.0 };
        let mut config = SimulationConfig::default();
        config.track = TrackSource::Segments(vec![spec]);
        config.start_position = [0.0, 0.0];
        config.start_rotation = 0.0;

        let mut simulation = Simulation::new(config).unwrap();
        for _ in 0..600 {
            simulation.tick();
        }

        let snapshot = simulation.snapshot();
        assert_eq!(snapshot.turn, Turn::Straight);
        assert_eq!(snapshot.rotation, 0.0);
        assert_eq!(snapshot.position.x, 0.0);
        assert!((snapshot.position.y + 750.0).abs() < 0.1);
    }

    #[test]
    fn half_a_second_runs_near_hundred_twenty_steps() {
        let mut simulation = Simulation::new(SimulationConfig::default()).unwrap();
        let steps = simulation.advance(0.5);

        assert!((119..=121).contains(&steps));
        assert_eq!(simulation.ticks(), steps as u64);
        assert!(simulation.snapshot().position.is_finite());
    }

    #[test]
    fn car_off_the_edge_starts_turning() {
        let spec = SegmentSpec { start: [0.0, 500.0], middle: [0.0, 0.0], end: [0.0, -500.0], start_width: 5.0, end_width: 5.0 };
        let mut config = SimulationConfig::default();
        config.track = TrackSource::Segments(vec![spec]);
        config.start_position = [3.0, 0.0];
        config.start_rotation = 0.0;

        let mut simulation = Simulation::new(config).unwrap();
        simulation.tick();

        let snapshot = simulation.snapshot();
        assert_eq!(snapshot.turn, Turn::Right);
        assert!(snapshot.rotation > 0.0);
    }
}
