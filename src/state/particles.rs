//! Decorative floating particles behind the hero

use rand::Rng;
use std::f32::consts::TAU;
use std::time::Duration;

pub const PARTICLE_COUNT: usize = 50;

/// One particle with a fixed anchor and float timing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal anchor, 0.0 to 1.0 of the hero width
    pub x: f32,
    /// Vertical anchor, 0.0 to 1.0 of the hero height
    pub y: f32,
    /// Length of one float cycle
    pub period: Duration,
    /// Time before the particle starts moving
    pub delay: Duration,
}

/// Position and brightness of a particle at a moment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleFrame {
    pub x: f32,
    pub y: f32,
    /// 0.5 at rest, 1.0 at the top of the float
    pub opacity: f32,
    /// Upward displacement, 0.0 to 1.0 of the float height
    pub lift: f32,
}

impl Particle {
    /// Random particle: anchor anywhere, period in [3s, 7s), delay in [0s, 2s)
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            x: rng.gen_range(0.0..1.0),
            y: rng.gen_range(0.0..1.0),
            period: Duration::from_secs_f32(rng.gen_range(3.0..7.0)),
            delay: Duration::from_secs_f32(rng.gen_range(0.0..2.0)),
        }
    }

    /// Float curve: rises to full lift at mid-cycle and returns
    pub fn frame(&self, elapsed: Duration) -> ParticleFrame {
        let lift = match elapsed.checked_sub(self.delay) {
            Some(active) if !self.period.is_zero() => {
                let phase = (active.as_secs_f32() / self.period.as_secs_f32()).fract();
                (1.0 - (phase * TAU).cos()) / 2.0
            }
            _ => 0.0,
        };
        ParticleFrame {
            x: self.x,
            y: self.y,
            opacity: 0.5 + lift / 2.0,
            lift,
        }
    }
}

/// The full particle field
#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Self {
        Self {
            particles: (0..count).map(|_| Particle::random(rng)).collect(),
        }
    }

    pub fn frames(&self, elapsed: Duration) -> impl Iterator<Item = ParticleFrame> + '_ {
        self.particles.iter().map(move |p| p.frame(elapsed))
    }
}
