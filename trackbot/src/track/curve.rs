use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveSegment {
    pub start: Vec2,
    pub middle: Vec2,
    pub end: Vec2,
    pub start_width: f32,
    pub end_width: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub position: Vec2,
    pub normal: Vec2,
    pub width: f32,
}

impl CurveSegment {
    pub fn new(start: Vec2, middle: Vec2, end: Vec2, start_width: f32, end_width: f32) -> Self {
        debug_assert!(start.is_finite() && middle.is_finite() && end.is_finite());
        debug_assert!(start_width > 0.0 && end_width > 0.0);

        Self { start, middle, end, start_width, end_width }
    }

    pub fn translated(&self, offset: Vec2) -> Self {
        Self { start: self.start + offset, middle: self.middle + offset, end: self.end + offset, ..*self }
    }

    pub fn sample(&self, t: f32) -> Sample {
        let start_to_middle = self.start.lerp(self.middle, t);
        let middle_to_end = self.middle.lerp(self.end, t);
        let tangent = (middle_to_end - start_to_middle).normalize_or_zero();

        // The expanded blend lands exactly on start and end at t = 0 and 1.
        let sample = Sample {
            position: self.start * ((1.0 - t) * (1.0 - t)) + self.middle * (2.0 * (1.0 - t) * t) + self.end * (t * t),
            normal: Vec2::new(tangent.y, -tangent.x),
            width: (1.0 - t) * self.start_width + t * self.end_width,
        };

        debug_assert!(sample.position.is_finite() && sample.normal.is_finite() && sample.width.is_finite());
        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_hits_segment_endpoints() {
        let segment = CurveSegment::new(Vec2::new(50.0, 0.0), Vec2::new(-50.0, 0.0), Vec2::new(-50.0, 100.0), 5.0, 5.0);

        assert_eq!(segment.sample(0.0).position, segment.start);
        assert_eq!(segment.sample(1.0).position, segment.end);
    }

    #[test]
    fn sample_endpoints_survive_a_distant_control_point() {
        let segment = CurveSegment::new(Vec2::new(0.0, 0.0), Vec2::new(1.0e8, 0.0), Vec2::new(1.0, 0.0), 5.0, 5.0);

        assert_eq!(segment.sample(0.0).position, segment.start);
        assert_eq!(segment.sample(1.0).position, segment.end);
    }

    #[test]
    fn sample_follows_quadratic_blend() {
        let segment = CurveSegment::new(Vec2::new(0.0, 0.0), Vec2::new(50.0, 100.0), Vec2::new(100.0, 0.0), 5.0, 5.0);
        let position = segment.sample(0.5).position;

        // (1-t)^2 * start + 2(1-t)t * middle + t^2 * end at t = 0.5
        assert!((position - Vec2::new(50.0, 50.0)).length() < 0.0001);
    }

    #[test]
    fn sample_normal_is_unit_and_perpendicular() {
        let segment = CurveSegment::new(Vec2::new(0.0, 0.0), Vec2::new(50.0, 0.0), Vec2::new(100.0, 0.0), 5.0, 5.0);
        let sample = segment.sample(0.25);

        assert!((sample.normal.length() - 1.0).abs() < 0.0001);
        assert!((sample.normal - Vec2::new(0.0, -1.0)).length() < 0.0001);
    }

    #[test]
    fn sample_normal_degenerates_to_zero() {
        let point = Vec2::new(7.0, 7.0);
        let segment = CurveSegment::new(point, point, point, 5.0, 5.0);

        assert_eq!(segment.sample(0.5).normal, Vec2::ZERO);
    }

    #[test]
    fn sample_width_interpolates_linearly() {
        let segment = CurveSegment::new(Vec2::new(0.0, 0.0), Vec2::new(50.0, 0.0), Vec2::new(100.0, 0.0), 5.0, 12.0);

        assert!((segment.sample(0.0).width - 5.0).abs() < 0.0001);
        assert!((segment.sample(0.5).width - 8.5).abs() < 0.0001);
        assert!((segment.sample(1.0).width - 12.0).abs() < 0.0001);

        let mut previous = segment.sample(0.0).width;
        for index in 1..=10 {
            let width = segment.sample(index as f32 / 10.0).width;
            assert!(width >= previous);
            previous = width;
        }
    }

    #[test]
    fn translated_shifts_every_control_point() {
        let segment = CurveSegment::new(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0), Vec2::new(5.0, 6.0), 5.0, 12.0);
        let moved = segment.translated(Vec2::new(100.0, 100.0));

        assert_eq!(moved.start, Vec2::new(101.0, 102.0));
        assert_eq!(moved.middle, Vec2::new(103.0, 104.0));
        assert_eq!(moved.end, Vec2::new(105.0, 106.0));
        assert_eq!(moved.start_width, segment.start_width);
        assert_eq!(moved.end_width, segment.end_width);
    }
}
