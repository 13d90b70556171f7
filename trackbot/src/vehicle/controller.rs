use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Straight,
    Left,
    Right,
}

pub struct SensorController {
    last_turn: Turn,
}

impl SensorController {
    pub fn new() -> Self {
        Self { last_turn: Turn::Straight }
    }

    pub fn last_turn(&self) -> Turn {
        self.last_turn
    }

    pub fn decide(&mut self, left_on_track: bool, right_on_track: bool) -> Turn {
        let turn = if !left_on_track {
            Turn::Left
        } else if !right_on_track {
            Turn::Right
        } else {
            self.last_turn
        };

        self.last_turn = turn;
        turn
    }
}

impl Default for SensorController {
    fn default() -> Self {
        Self::new()
    }
}

pub fn steer(position: Vec2, rotation: f32, turn: Turn, distance: f32, angle: f32) -> (Vec2, f32) {
    // Local forward is -Y; the translation uses the heading before the bend.
    let position = position + Vec2::from_angle(rotation).rotate(Vec2::NEG_Y * distance);
    let rotation = match turn {
        Turn::Left => rotation - angle,
        Turn::Right => rotation + angle,
        Turn::Straight => rotation,
    };

    (position, rotation)
}
