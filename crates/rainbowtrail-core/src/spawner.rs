//! Input events turned into new particles. Spawning cannot fail.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use crate::color::{ColorMode, Rgb};
use crate::config::{ClickBehavior, SpeedRange, TrailConfig};
use crate::particle::{Particle, ParticleStore};

fn pick_color<R: Rng + ?Sized>(mode: ColorMode, rng: &mut R) -> Rgb {
    let palette = mode.colors();
    palette[rng.gen_range(0..palette.len())]
}

fn launch<R: Rng + ?Sized>(
    at: Vec2,
    angle: f32,
    speed: &SpeedRange,
    mode: ColorMode,
    rng: &mut R,
) -> Particle {
    let speed = speed.lerp(rng.gen::<f32>());
    Particle::new(at, Vec2::from_angle(angle) * speed, pick_color(mode, rng))
}

/// Pointer moved: a few particles fly off in random directions.
pub fn spawn_trail<R: Rng + ?Sized>(
    store: &mut ParticleStore,
    at: Vec2,
    config: &TrailConfig,
    mode: ColorMode,
    rng: &mut R,
) -> usize {
    for _ in 0..config.trail_count {
        let angle = rng.gen_range(0.0..TAU);
        store.push(launch(at, angle, &config.trail_speed, mode, rng));
    }
    config.trail_count
}

/// Pointer pressed: a radial burst or a single resting particle.
pub fn spawn_click<R: Rng + ?Sized>(
    store: &mut ParticleStore,
    at: Vec2,
    config: &TrailConfig,
    mode: ColorMode,
    rng: &mut R,
) -> usize {
    match config.click {
        ClickBehavior::Single => {
            store.push(Particle::new(at, Vec2::ZERO, pick_color(mode, rng)));
            1
        }
        ClickBehavior::Burst => {
            let count = config.burst_count;
            for i in 0..count {
                let angle = i as f32 / count as f32 * TAU;
                store.push(launch(at, angle, &config.burst_speed, mode, rng));
            }
            count
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn trail_spawn_adds_configured_count_at_pointer() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut store = ParticleStore::new();
        let config = TrailConfig::default();
        let at = Vec2::new(120.0, 80.0);
        assert_eq!(spawn_trail(&mut store, at, &config, ColorMode::Rainbow, &mut rng), 3);
        assert_eq!(store.len(), 3);
        for p in &store {
            assert_eq!(p.pos, at);
            assert_eq!(p.life, 1.0);
            let speed = p.vel.length();
            assert!(speed > 2.0 - 1e-4 && speed < 5.0 + 1e-4, "speed {speed}");
            assert!(ColorMode::Rainbow.colors().contains(&p.color));
        }
    }

    #[test]
    fn burst_is_evenly_spaced() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut store = ParticleStore::new();
        let config = TrailConfig::default();
        let added = spawn_click(&mut store, Vec2::ZERO, &config, ColorMode::Palette, &mut rng);
        assert_eq!(added, 15);
        assert_eq!(store.len(), 15);
        for (i, p) in store.iter().enumerate() {
            let expected = i as f32 / 15.0 * TAU;
            let actual = p.vel.y.atan2(p.vel.x).rem_euclid(TAU);
            let diff = (actual - expected).abs();
            assert!(diff < 1e-3 || (TAU - diff) < 1e-3, "particle {i}: {actual} vs {expected}");
            let speed = p.vel.length();
            let range = config.burst_speed;
            assert!(
                speed >= range.min - 1e-4 && speed <= range.max + 1e-4,
                "particle {i}: speed {speed}"
            );
            assert!(ColorMode::Palette.colors().contains(&p.color));
        }
    }

    #[test]
    fn single_click_spawns_one_resting_particle() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut store = ParticleStore::new();
        let config = TrailConfig {
            click: ClickBehavior::Single,
            ..TrailConfig::default()
        };
        assert_eq!(spawn_click(&mut store, Vec2::ONE, &config, ColorMode::Rainbow, &mut rng), 1);
        assert_eq!(store.as_slice()[0].vel, Vec2::ZERO);
    }

    #[test]
    fn trail_count_is_configurable() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut store = ParticleStore::new();
        let config = TrailConfig {
            trail_count: 2,
            ..TrailConfig::default()
        };
        spawn_trail(&mut store, Vec2::ZERO, &config, ColorMode::Rainbow, &mut rng);
        assert_eq!(store.len(), 2);
    }
}
