use super::curve::CurveSegment;
use glam::Vec2;
use std::f32::consts;

const CLASSIC_OFFSET: Vec2 = Vec2::new(100.0, 100.0);
const NARROW: f32 = 5.0;
const WIDE: f32 = 12.0;

pub fn classic_circuit() -> Vec<CurveSegment> {
    [
        CurveSegment::new(Vec2::new(50.0, 0.0), Vec2::new(-50.0, 0.0), Vec2::new(-50.0, 100.0), NARROW, NARROW),
        CurveSegment::new(Vec2::new(-50.0, 100.0), Vec2::new(-50.0, 150.0), Vec2::new(-50.0, 200.0), NARROW, NARROW),
        CurveSegment::new(Vec2::new(-50.0, 200.0), Vec2::new(-50.0, 300.0), Vec2::new(50.0, 300.0), NARROW, NARROW),
        CurveSegment::new(Vec2::new(50.0, 300.0), Vec2::new(75.0, 300.0), Vec2::new(100.0, 300.0), NARROW, NARROW),
        CurveSegment::new(Vec2::new(100.0, 300.0), Vec2::new(115.0, 300.0), Vec2::new(130.0, 300.0), NARROW, WIDE),
        CurveSegment::new(Vec2::new(130.0, 300.0), Vec2::new(330.0, 300.0), Vec2::new(430.0, 300.0), WIDE, WIDE),
        CurveSegment::new(Vec2::new(430.0, 300.0), Vec2::new(445.0, 300.0), Vec2::new(460.0, 300.0), WIDE, NARROW),
        CurveSegment::new(Vec2::new(460.0, 300.0), Vec2::new(560.0, 300.0), Vec2::new(560.0, 200.0), NARROW, NARROW),
        CurveSegment::new(Vec2::new(560.0, 200.0), Vec2::new(560.0, 150.0), Vec2::new(560.0, 100.0), NARROW, NARROW),
        CurveSegment::new(Vec2::new(560.0, 100.0), Vec2::new(560.0, 0.0), Vec2::new(460.0, 0.0), NARROW, NARROW),
        CurveSegment::new(Vec2::new(460.0, 0.0), Vec2::new(380.0, 0.0), Vec2::new(320.0, 0.0), NARROW, NARROW),
        CurveSegment::new(Vec2::new(320.0, 0.0), Vec2::new(292.5, 0.0), Vec2::new(265.0, 30.0), NARROW, NARROW),
        CurveSegment::new(Vec2::new(265.0, 30.0), Vec2::new(237.5, 60.0), Vec2::new(210.0, 60.0), NARROW, NARROW),
        CurveSegment::new(Vec2::new(210.0, 60.0), Vec2::new(182.5, 60.0), Vec2::new(155.0, 30.0), NARROW, NARROW),
        CurveSegment::new(Vec2::new(155.0, 30.0), Vec2::new(127.5, 0.0), Vec2::new(100.0, 0.0), NARROW, NARROW),
        CurveSegment::new(Vec2::new(100.0, 0.0), Vec2::new(75.0, 0.0), Vec2::new(50.0, 0.0), NARROW, NARROW),
    ]
    .iter()
    .map(|segment| segment.translated(CLASSIC_OFFSET))
    .collect()
}

// Neighboring segments compute their shared midpoint identically; the loop
// closes exactly.
pub fn generated_loop(seed: u64) -> Vec<CurveSegment> {
    let mut rng = fastrand::Rng::with_seed(seed);
    let count = rng.usize(8..=12);
    let center = Vec2::new(380.0, 300.0);

    let mut controls = Vec::with_capacity(count);
    let mut widths = Vec::with_capacity(count);

    for index in 0..count {
        let angle = index as f32 / count as f32 * consts::TAU;
        let radius = 160.0 + rng.f32() * 90.0;

        controls.push(center + Vec2::from_angle(angle) * radius);
        widths.push(NARROW + rng.f32() * (WIDE - NARROW));
    }

    let mut segments = Vec::with_capacity(count);

    for index in 0..count {
        let previous = (index + count - 1) % count;
        let next = (index + 1) % count;
        let start = (controls[previous] + controls[index]) / 2.0;
        let end = (controls[index] + controls[next]) / 2.0;

        segments.push(CurveSegment::new(start, controls[index], end, widths[index], widths[next]));
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_circuit_is_closed() {
        let segments = classic_circuit();

        assert_eq!(segments.len(), 16);
        for index in 0..segments.len() {
            let next = (index + 1) % segments.len();
            assert!((segments[index].end - segments[next].start).length() < 0.0001);
        }
    }

    #[test]
    fn classic_circuit_blends_between_both_widths() {
        let segments = classic_circuit();

        assert!(segments.iter().any(|segment| segment.start_width == NARROW && segment.end_width == WIDE));
        assert!(segments.iter().any(|segment| segment.start_width == WIDE && segment.end_width == NARROW));
        assert!(segments.iter().all(|segment| segment.start_width > 0.0 && segment.end_width > 0.0));
    }

    #[test]
    fn generated_loop_is_deterministic() {
        assert_eq!(generated_loop(42), generated_loop(42));
        assert_ne!(generated_loop(42), generated_loop(43));
    }

    #[test]
    fn generated_loop_is_closed_and_width_continuous() {
        for seed in [0, 7, 1337] {
            let segments = generated_loop(seed);
            assert!(segments.len() >= 8);

            for index in 0..segments.len() {
                let next = (index + 1) % segments.len();
                assert_eq!(segments[index].end, segments[next].start);
                assert_eq!(segments[index].end_width, segments[next].start_width);
            }
        }
    }
}
