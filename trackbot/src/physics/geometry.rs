use glam::Vec2;
use rapier2d::na::Point2;
use rapier2d::prelude::*;
use std::f32::consts;

pub const CIRCLE_VERTEX_COUNT: usize = 16;

// Shape kinds outside the match contribute no vertices.
pub fn local_vertices(collider: &Collider) -> Vec<Vec2> {
    match collider.shape().shape_type() {
        ShapeType::Ball => {
            let ball = collider.shape().as_ball().unwrap();
            (0..CIRCLE_VERTEX_COUNT)
                .map(|index| Vec2::from_angle(index as f32 / CIRCLE_VERTEX_COUNT as f32 * consts::TAU) * ball.radius)
                .collect()
        }
        ShapeType::Cuboid => {
            let cuboid = collider.shape().as_cuboid().unwrap();
            let half = Vec2::from(cuboid.half_extents);

            vec![
                Vec2::new(-half.x, -half.y),
                Vec2::new(half.x, -half.y),
                Vec2::new(half.x, half.y),
                Vec2::new(-half.x, half.y),
            ]
        }
        ShapeType::ConvexPolygon => {
            let polygon = collider.shape().as_convex_polygon().unwrap();
            polygon.points().iter().map(|point| Vec2::new(point.x, point.y)).collect()
        }
        _ => Vec::new(),
    }
}

pub fn world_vertices(collider: &Collider, rigidbodies: &RigidBodySet) -> Vec<Vec2> {
    let pose = match collider.parent() {
        Some(handle) => match collider.position_wrt_parent() {
            Some(offset) => rigidbodies[handle].position() * offset,
            None => *rigidbodies[handle].position(),
        },
        None => *collider.position(),
    };

    local_vertices(collider)
        .iter()
        .map(|vertex| {
            let point = pose * Point2::new(vertex.x, vertex.y);
            debug_assert!(point.x.is_finite() && point.y.is_finite());
            Vec2::new(point.x, point.y)
        })
        .collect()
}
