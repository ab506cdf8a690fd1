use std::f32::consts::TAU;
use std::f64::consts::TAU as TAU_F64;

use glam::Vec2;
use rand::Rng;
use rainbowtrail_platform::SurfaceSize;

use crate::color::Rgb;
use crate::render::Surface;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    /// Fraction of the surface, so the field survives resizes.
    pub anchor: Vec2,
    pub radius: f32,
    pub phase: f32,
}

impl Star {
    /// Phase is reduced in f64; only the wrapped angle is narrowed.
    pub fn alpha_at(&self, elapsed: f64, twinkle_speed: f32) -> f32 {
        let angle = (elapsed * f64::from(twinkle_speed) + f64::from(self.phase)).rem_euclid(TAU_F64);
        0.2 + 0.8 * (0.5 + 0.5 * (angle as f32).sin())
    }
}

/// Twinkling background dots. Built once per session; never tied to particles.
#[derive(Debug, Clone, Default)]
pub struct StarField {
    stars: Vec<Star>,
}

impl StarField {
    pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let stars = (0..count)
            .map(|_| Star {
                anchor: Vec2::new(rng.gen(), rng.gen()),
                radius: rng.gen_range(0.5..1.5),
                phase: rng.gen_range(0.0..TAU),
            })
            .collect();
        Self { stars }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn draw(&self, surface: &mut dyn Surface, size: SurfaceSize, elapsed: f64, twinkle_speed: f32) {
        let extent = Vec2::new(size.width, size.height);
        for star in &self.stars {
            let color = Rgb::WHITE.with_alpha(star.alpha_at(elapsed, twinkle_speed));
            surface.circle(star.anchor * extent, star.radius, Some(color), None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{CommandBuffer, DrawCommand};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn stars_twinkle_within_bounds() {
        let field = StarField::generate(120, &mut StdRng::seed_from_u64(1));
        assert_eq!(field.len(), 120);
        for star in field.stars() {
            for t in [0.0, 0.4, 1.3, 7.9] {
                let a = star.alpha_at(t, 2.0);
                assert!((0.2 - 1e-6..=1.0 + 1e-6).contains(&a));
            }
        }
    }

    #[test]
    fn twinkle_keeps_its_period_a_day_in() {
        let field = StarField::generate(8, &mut StdRng::seed_from_u64(4));
        // Speed 2 rad/s gives a period of pi seconds; 27_500 periods is just under a day.
        let day = std::f64::consts::PI * 27_500.0;
        for star in field.stars() {
            for t in [0.25, 0.25 + 1.0 / 60.0, 1.1] {
                let early = star.alpha_at(t, 2.0);
                let late = star.alpha_at(day + t, 2.0);
                assert!((early - late).abs() < 1e-4, "{early} vs {late}");
            }
        }
    }

    #[test]
    fn stars_are_white_and_scaled_to_surface() {
        let field = StarField::generate(10, &mut StdRng::seed_from_u64(2));
        let mut buffer = CommandBuffer::new();
        field.draw(&mut buffer, SurfaceSize::new(800.0, 600.0), 0.5, 2.0);
        assert_eq!(buffer.len(), 10);
        for (command, star) in buffer.commands().iter().zip(field.stars()) {
            let DrawCommand::Circle { center, fill: Some(fill), .. } = command else {
                panic!("unexpected {command:?}");
            };
            assert_eq!(fill.rgb, Rgb::WHITE);
            assert_eq!(*center, star.anchor * Vec2::new(800.0, 600.0));
        }
    }
}
