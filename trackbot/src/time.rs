// After a consume loop drains the accumulator, the remainder is in [0, step).
pub struct FixedTimestep {
    step: f32,
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(step: f32) -> Self {
        debug_assert!(step.is_finite() && step > 0.0);
        Self { step, accumulator: 0.0 }
    }

    pub fn accumulate(&mut self, delta: f32) {
        debug_assert!(delta.is_finite() && delta >= 0.0);
        self.accumulator += delta;
    }

    pub fn consume(&mut self) -> bool {
        if self.accumulator >= self.step {
            self.accumulator -= self.step;
            true
        } else {
            false
        }
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(clock: &mut FixedTimestep) -> u32 {
        let mut ticks = 0;
        while clock.consume() {
            ticks += 1;
        }
        ticks
    }

    #[test]
    fn consume_without_accumulated_time_is_a_no_op() {
        let mut clock = FixedTimestep::new(1.0 / 240.0);
        assert!(!clock.consume());
        assert_eq!(clock.accumulator(), 0.0);
    }

    #[test]
    fn single_large_delta_yields_floor_of_elapsed_over_step() {
        let step = 1.0 / 240.0;
        let mut clock = FixedTimestep::new(step);
        clock.accumulate(1.0);

        let ticks = drain(&mut clock) as i64;
        let expected = (1.0f32 / step).floor() as i64;

        assert!((ticks - expected).abs() <= 1);
        assert!(clock.accumulator() >= 0.0);
        assert!(clock.accumulator() < step);
    }

    #[test]
    fn irregular_frame_deltas_yield_floor_of_total_elapsed() {
        let step = 1.0 / 240.0;
        let deltas = [0.016f32, 0.002, 0.033, 0.0001, 0.25, 0.0083, 0.04, 0.0, 0.1207];
        let mut clock = FixedTimestep::new(step);
        let mut ticks = 0i64;
        let mut total = 0.0f32;

        for delta in deltas {
            clock.accumulate(delta);
            ticks += drain(&mut clock) as i64;
            total += delta;

            assert!(clock.accumulator() >= 0.0);
            assert!(clock.accumulator() < step);
        }

        let expected = (total / step).floor() as i64;
        assert!((ticks - expected).abs() <= 1);
    }

    #[test]
    fn deltas_below_step_carry_over() {
        let step = 0.01;
        let mut clock = FixedTimestep::new(step);

        clock.accumulate(0.004);
        assert_eq!(drain(&mut clock), 0);
        clock.accumulate(0.004);
        assert_eq!(drain(&mut clock), 0);
        clock.accumulate(0.004);
        assert_eq!(drain(&mut clock), 1);
        assert!(clock.accumulator() < step);
    }
}
