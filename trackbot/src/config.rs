use crate::track::curve::CurveSegment;
use crate::track::layout;
use anyhow::bail;
use anyhow::Result;
use glam::Vec2;
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Seconds of simulated time per tick
    pub timestep: f32,

    /// Forward speed in world units per second
    pub speed: f32,

    /// Steering rate in degrees per second
    pub turn_rate: f32,

    /// Quads generated per curve segment
    pub samples_per_segment: u32,

    pub start_position: [f32; 2],

    /// Initial heading in degrees, 0 points along -Y
    pub start_rotation: f32,

    pub vehicle: VehicleLayout,
    pub track: TrackSource,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct VehicleLayout {
    pub wheel_span: f32,

    /// Wheel center distance behind the probe axis
    pub wheel_offset: f32,

    pub wheel_size: [f32; 2],
    pub probe_radius: f32,

    /// Clearance between the middle and each side probe circle
    pub probe_gap: f32,

    pub plate_margin: f32,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackSource {
    Classic,
    Generated { seed: u64 },
    Segments(Vec<SegmentSpec>),
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct SegmentSpec {
    pub start: [f32; 2],
    pub middle: [f32; 2],
    pub end: [f32; 2],
    pub start_width: f32,
    pub end_width: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            timestep: 1.0 / 240.0,
            speed: 300.0,
            turn_rate: 300.0,
            samples_per_segment: 20,
            start_position: [300.0, 420.0],
            start_rotation: 80.0,
            vehicle: VehicleLayout::default(),
            track: TrackSource::Classic,
        }
    }
}

impl Default for VehicleLayout {
    fn default() -> Self {
        Self {
            wheel_span: 50.0,
            wheel_offset: 50.0,
            wheel_size: [10.0, 25.0],
            probe_radius: 1.5,
            probe_gap: 3.0,
            plate_margin: 10.0,
        }
    }
}

impl SimulationConfig {
    pub fn start_point(&self) -> Vec2 {
        Vec2::from(self.start_position)
    }

    pub fn start_angle(&self) -> f32 {
        self.start_rotation.to_radians()
    }

    pub fn turn_rate_radians(&self) -> f32 {
        self.turn_rate.to_radians()
    }

    pub fn validate(&self) -> Result<()> {
        if !self.timestep.is_finite() || self.timestep <= 0.0 {
            bail!("Timestep must be a positive number of seconds, got {}", self.timestep);
        }

        if !self.speed.is_finite() || !self.turn_rate.is_finite() {
            bail!("Speed and turn rate must be finite");
        }

        if self.samples_per_segment < 1 {
            bail!("Samples per segment must be at least 1");
        }

        if !self.start_position.iter().all(|value| value.is_finite()) || !self.start_rotation.is_finite() {
            bail!("Start pose must be finite");
        }

        self.vehicle.validate()
    }
}

impl VehicleLayout {
    pub fn probe_span(&self) -> f32 {
        self.probe_radius * 2.0 + self.probe_gap
    }

    pub fn validate(&self) -> Result<()> {
        let lengths = [self.wheel_span, self.wheel_offset, self.wheel_size[0], self.wheel_size[1], self.probe_radius, self.plate_margin];
        if lengths.iter().any(|value| !value.is_finite() || *value <= 0.0) {
            bail!("Vehicle layout lengths must be positive");
        }

        if !self.probe_gap.is_finite() || self.probe_gap < 0.0 {
            bail!("Probe gap must be zero or positive");
        }

        Ok(())
    }
}

impl TrackSource {
    pub fn segments(&self) -> Result<Vec<CurveSegment>> {
        match self {
            TrackSource::Classic => Ok(layout::classic_circuit()),
            TrackSource::Generated { seed } => Ok(layout::generated_loop(*seed)),
            TrackSource::Segments(specs) => {
                if specs.is_empty() {
                    bail!("Track segment list is empty");
                }

                for (index, spec) in specs.iter().enumerate() {
                    if [spec.start, spec.middle, spec.end].iter().flatten().any(|value| !value.is_finite()) {
                        bail!("Track segment {} has non-finite control points", index);
                    }

                    if !spec.start_width.is_finite() || spec.start_width <= 0.0 || !spec.end_width.is_finite() || spec.end_width <= 0.0 {
                        bail!("Track segment {} must have positive widths", index);
                    }
                }

                Ok(specs.iter().map(SegmentSpec::to_segment).collect())
            }
        }
    }
}

impl SegmentSpec {
    fn to_segment(&self) -> CurveSegment {
        CurveSegment::new(Vec2::from(self.start), Vec2::from(self.middle), Vec2::from(self.end), self.start_width, self.end_width)
    }
}
