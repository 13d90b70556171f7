use glam::Vec2;
use std::f32::consts;

const EDGE_DISTANCE_EPSILON: f32 = 0.0001;

pub trait F32MathUtils {
    fn normalize_angle(&self) -> f32;
}

pub trait Vec2MathUtils {
    fn distance_to_segment(&self, a: Vec2, b: Vec2) -> f32;
}

pub trait PolygonMathUtils {
    fn contains_point(&self, point: Vec2) -> bool;
}

impl F32MathUtils for f32 {
    fn normalize_angle(&self) -> f32 {
        let angle = (self % consts::TAU + consts::TAU) % consts::TAU;

        if angle > consts::PI {
            angle - consts::TAU
        } else {
            angle
        }
    }
}

impl Vec2MathUtils for Vec2 {
    fn distance_to_segment(&self, a: Vec2, b: Vec2) -> f32 {
        let ab = b - a;
        let ap = *self - a;
        let length_squared = ab.length_squared();

        if length_squared == 0.0 {
            return self.distance(a);
        }

        let d = ap.dot(ab) / length_squared;
        let p = if d <= 0.0 {
            a
        } else if d >= 1.0 {
            b
        } else {
            a + d * ab
        };

        self.distance(p)
    }
}

impl PolygonMathUtils for [Vec2] {
    // Points within EDGE_DISTANCE_EPSILON of an edge count as contained.
    fn contains_point(&self, point: Vec2) -> bool {
        if self.len() < 3 {
            return false;
        }

        let mut inside = false;
        let mut previous = self[self.len() - 1];

        for &current in self.iter() {
            if point.distance_to_segment(previous, current) <= EDGE_DISTANCE_EPSILON {
                return true;
            }

            if (previous.y > point.y) != (current.y > point.y) {
                let x = previous.x + (point.y - previous.y) / (current.y - previous.y) * (current.x - previous.x);
                if point.x < x {
                    inside = !inside;
                }
            }

            previous = current;
        }

        inside
    }
}
