use bevy_math::Vec2;

// Timed stun that makes the agent dance in place
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoogieState {
    pub active: bool,
    pub remaining: f32,
}

// What happened to the stun during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoogieTick {
    Inactive,
    Dancing,
    Expired,
}

impl BoogieState {
    // Start (or restart) the dance for `duration` seconds
    pub const fn start(&mut self, duration: f32) {
        self.active = true;
        self.remaining = duration;
    }

    // Count down; expiry deactivates the stun
    pub fn advance(&mut self, delta: f32) -> BoogieTick {
        if !self.active {
            return BoogieTick::Inactive;
        }

        self.remaining -= delta;
        if self.remaining <= 0.0 {
            self.active = false;
            self.remaining = 0.0;
            BoogieTick::Expired
        } else {
            BoogieTick::Dancing
        }
    }
}

// Dance velocity: two sinusoids a quarter period apart, driven by global time
#[must_use]
pub fn boogie_velocity(elapsed: f32, amplitude: f32, frequency: f32) -> Vec2 {
    let phase = elapsed * frequency;
    Vec2::new(phase.sin(), phase.cos()) * amplitude
}

// Tint pulse in [0, 1], twice the dance frequency
#[must_use]
pub fn boogie_tint(elapsed: f32, frequency: f32) -> f32 {
    (elapsed * frequency * 2.0).sin().mul_add(0.5, 0.5)
}
