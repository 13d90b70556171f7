use super::curve::CurveSegment;
use crate::physics::context::PhysicsContext;
use crate::utils::math::PolygonMathUtils;
use glam::Vec2;
use log::info;
use log::warn;
use rapier2d::na::Point2;
use rapier2d::prelude::*;

// One quadrilateral per sample interval; adjacent quads are not welded.
pub struct TrackGeometry {
    quads: Vec<[Vec2; 4]>,
}

impl TrackGeometry {
    pub fn build(segments: &[CurveSegment], samples_per_segment: u32) -> Self {
        debug_assert!(samples_per_segment >= 1);

        let mut quads = Vec::with_capacity(segments.len() * samples_per_segment as usize);

        for segment in segments {
            for index in 0..samples_per_segment {
                let near = segment.sample(index as f32 / samples_per_segment as f32);
                let far = segment.sample((index + 1) as f32 / samples_per_segment as f32);

                quads.push([
                    near.position - near.normal * near.width,
                    near.position + near.normal * near.width,
                    far.position + far.normal * far.width,
                    far.position - far.normal * far.width,
                ]);
            }
        }

        Self { quads }
    }

    pub fn quads(&self) -> &[[Vec2; 4]] {
        &self.quads
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.quads.iter().any(|quad| quad.contains_point(point))
    }
}

pub struct Track {
    pub body: RigidBodyHandle,
    pub colliders: Vec<ColliderHandle>,
    pub geometry: TrackGeometry,
}

impl Track {
    pub fn spawn(physics: &mut PhysicsContext, segments: &[CurveSegment], samples_per_segment: u32) -> Self {
        let geometry = TrackGeometry::build(segments, samples_per_segment);
        let body = physics.rigidbodies.insert(RigidBodyBuilder::fixed().build());
        let mut colliders = Vec::with_capacity(geometry.quads().len());

        for quad in geometry.quads() {
            let points = quad.map(Point2::from);

            match ColliderBuilder::convex_hull(&points) {
                Some(builder) => {
                    let handle = physics.colliders.insert_with_parent(builder.sensor(true).build(), body, &mut physics.rigidbodies);
                    colliders.push(handle);
                }
                None => warn!("Skipping collapsed track quad near {}", quad[0]),
            }
        }

        info!("Track ready: {} segments, {} quads, {} colliders", segments.len(), geometry.quads().len(), colliders.len());

        Track { body, colliders, geometry }
    }
}
