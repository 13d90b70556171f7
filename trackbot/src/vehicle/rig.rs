use crate::config::VehicleLayout;
use crate::physics::context::PhysicsContext;
use anyhow::bail;
use anyhow::Result;
use glam::Vec2;
use rapier2d::na::Point2;
use rapier2d::na::Vector2;
use rapier2d::prelude::*;

pub struct VehicleRig {
    pub body: RigidBodyHandle,
    pub wheels: [ColliderHandle; 2],
    pub plate: ColliderHandle,
    pub probe_left: ColliderHandle,
    pub probe_middle: ColliderHandle,
    pub probe_right: ColliderHandle,
}

impl VehicleRig {
    pub fn spawn(physics: &mut PhysicsContext, layout: &VehicleLayout, position: Vec2, rotation: f32) -> Result<Self> {
        let probe_span = layout.probe_span();
        let left_probe = Vec2::new(-probe_span, 0.0);
        let right_probe = Vec2::new(probe_span, 0.0);
        let left_wheel = Vec2::new(-layout.wheel_span / 2.0, layout.wheel_offset);
        let right_wheel = Vec2::new(layout.wheel_span / 2.0, layout.wheel_offset);
        let wheel_half = Vec2::new(layout.wheel_size[0] / 2.0, layout.wheel_size[1] / 2.0);
        let margin = layout.plate_margin;

        // Probe envelope on top, wheel inner edges at the waist, wheel
        // outline at the bottom.
        let plate_points = [
            left_probe + Vec2::new(-margin, -margin),
            right_probe + Vec2::new(margin, -margin),
            right_wheel + Vec2::new(-wheel_half.x, -wheel_half.y),
            right_wheel + Vec2::new(-wheel_half.x, wheel_half.y),
            left_wheel + Vec2::new(wheel_half.x, wheel_half.y),
            left_wheel + Vec2::new(wheel_half.x, -wheel_half.y),
        ];

        let body = physics.rigidbodies.insert(
            RigidBodyBuilder::kinematic_position_based()
                .translation(Vector2::new(position.x, position.y))
                .rotation(rotation)
                .build(),
        );

        let plate = match ColliderBuilder::convex_hull(&plate_points.map(Point2::from)) {
            Some(builder) => physics.colliders.insert_with_parent(builder.build(), body, &mut physics.rigidbodies),
            None => bail!("Vehicle plate polygon is degenerate"),
        };

        let wheels = [left_wheel, right_wheel].map(|offset| {
            physics.colliders.insert_with_parent(
                ColliderBuilder::cuboid(wheel_half.x, wheel_half.y).translation(Vector2::new(offset.x, offset.y)).build(),
                body,
                &mut physics.rigidbodies,
            )
        });

        let [probe_left, probe_middle, probe_right] = [left_probe, Vec2::ZERO, right_probe].map(|offset| {
            physics.colliders.insert_with_parent(
                ColliderBuilder::ball(layout.probe_radius).translation(Vector2::new(offset.x, offset.y)).sensor(true).build(),
                body,
                &mut physics.rigidbodies,
            )
        });

        Ok(Self { body, wheels, plate, probe_left, probe_middle, probe_right })
    }
}
