use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::color::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// 1.0 at spawn, drops by the decay rate every frame.
    pub life: f32,
    pub color: Rgb,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, color: Rgb) -> Self {
        Self {
            pos,
            vel,
            life: 1.0,
            color,
        }
    }

    /// One frame of motion. Velocity is applied before gravity bends it.
    pub fn integrate(&mut self, gravity: f32, decay: f32) {
        self.pos += self.vel;
        self.vel.y += gravity;
        self.life -= decay;
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }
}

/// Insertion-ordered bag of live particles. No cap, no pooling.
#[derive(Debug, Clone, Default)]
pub struct ParticleStore {
    particles: Vec<Particle>,
}

impl ParticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Advances every particle one frame, then drops the ones whose life ran out.
    /// Returns how many were removed.
    pub fn step(&mut self, gravity: f32, decay: f32) -> usize {
        for particle in &mut self.particles {
            particle.integrate(gravity, decay);
        }
        let before = self.particles.len();
        self.particles.retain(Particle::is_alive);
        before - self.particles.len()
    }
}

impl Extend<Particle> for ParticleStore {
    fn extend<T: IntoIterator<Item = Particle>>(&mut self, iter: T) {
        self.particles.extend(iter);
    }
}

impl<'a> IntoIterator for &'a ParticleStore {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.particles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle(vel: Vec2) -> Particle {
        Particle::new(Vec2::new(10.0, 20.0), vel, Rgb::WHITE)
    }

    #[test]
    fn integrate_moves_then_applies_gravity() {
        let mut p = particle(Vec2::new(1.0, -2.0));
        p.integrate(0.1, 0.02);
        assert_eq!(p.pos, Vec2::new(11.0, 18.0));
        assert!((p.vel.y - -1.9).abs() < 1e-6);
        assert!((p.life - 0.98).abs() < 1e-6);
    }

    #[test]
    fn particles_leave_the_store_once_life_runs_out() {
        let mut store = ParticleStore::new();
        store.push(particle(Vec2::ZERO));
        // 0.25 is exact in binary, so life hits 0.0 on the fourth step.
        for _ in 0..3 {
            assert_eq!(store.step(0.0, 0.25), 0);
            assert_eq!(store.len(), 1);
        }
        assert_eq!(store.step(0.0, 0.25), 1);
        assert!(store.is_empty());
    }

    #[test]
    fn positions_are_not_clipped() {
        let mut store = ParticleStore::new();
        store.push(particle(Vec2::new(-500.0, 0.0)));
        store.step(0.0, 0.01);
        assert_eq!(store.as_slice()[0].pos.x, -490.0);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut store = ParticleStore::new();
        store.extend((0..5).map(|_| particle(Vec2::ONE)));
        store.clear();
        assert_eq!(store.len(), 0);
        store.clear();
        assert_eq!(store.len(), 0);
    }
}
