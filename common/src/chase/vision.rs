// Line-of-sight memory with hysteresis: sight is kept for `lose_sight_time`
// seconds of continuous non-sight before it is dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VisionState {
    pub has_line_of_sight: bool,
    pub lost_sight_timer: f32,
}

impl VisionState {
    // Fold one tick of observation into the memory
    pub fn observe(&mut self, sees_target: bool, delta: f32, lose_sight_time: f32) {
        if sees_target {
            self.has_line_of_sight = true;
            self.lost_sight_timer = 0.0;
        } else if self.has_line_of_sight {
            self.lost_sight_timer += delta;
            if self.lost_sight_timer >= lose_sight_time {
                self.has_line_of_sight = false;
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
