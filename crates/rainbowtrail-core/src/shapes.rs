//! The five interchangeable particle shapes.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::particle::Particle;
use crate::render::{PathSegment, StrokeStyle, Surface};

const FACE_INK: Rgb = Rgb::new(20, 20, 28);

/// Draws one particle at a precomputed size and alpha.
pub trait ShapeRenderer {
    fn draw(&self, surface: &mut dyn Surface, particle: &Particle, size: f32, alpha: f32);
}

pub struct CircleShape;
pub struct SquareShape;
pub struct StarShape;
pub struct HeartShape;
pub struct SmileyShape;

/// Thin white rim at half the body's alpha.
fn outline(alpha: f32) -> StrokeStyle {
    StrokeStyle::new(1.0, Rgb::WHITE.with_alpha(alpha * 0.5))
}

impl ShapeRenderer for CircleShape {
    fn draw(&self, surface: &mut dyn Surface, particle: &Particle, size: f32, alpha: f32) {
        surface.circle(
            particle.pos,
            size,
            Some(particle.color.with_alpha(alpha)),
            Some(outline(alpha)),
        );
    }
}

impl ShapeRenderer for SquareShape {
    fn draw(&self, surface: &mut dyn Surface, particle: &Particle, size: f32, alpha: f32) {
        let half = Vec2::splat(size);
        let c = particle.pos;
        let corners = [
            c + Vec2::new(-half.x, -half.y),
            c + Vec2::new(half.x, -half.y),
            c + Vec2::new(half.x, half.y),
            c + Vec2::new(-half.x, half.y),
        ];
        surface.polygon(
            &corners,
            Some(particle.color.with_alpha(alpha)),
            Some(outline(alpha)),
        );
    }
}

/// Ten vertices alternating between outer and inner radius, first point straight up.
pub fn star_points(center: Vec2, outer: f32, inner: f32) -> [Vec2; 10] {
    let mut points = [Vec2::ZERO; 10];
    for (i, point) in points.iter_mut().enumerate() {
        let radius = if i % 2 == 0 { outer } else { inner };
        let angle = -FRAC_PI_2 + i as f32 * PI / 5.0;
        *point = center + Vec2::from_angle(angle) * radius;
    }
    points
}

impl ShapeRenderer for StarShape {
    fn draw(&self, surface: &mut dyn Surface, particle: &Particle, size: f32, alpha: f32) {
        let points = star_points(particle.pos, size, size * 0.45);
        surface.polygon(
            &points,
            Some(particle.color.with_alpha(alpha)),
            Some(outline(alpha)),
        );
    }
}

/// Four cubic lobes; dip at the top, tip at the bottom.
pub fn heart_path(center: Vec2, size: f32) -> [PathSegment; 6] {
    let at = |x: f32, y: f32| center + Vec2::new(x, y) * size;
    [
        PathSegment::MoveTo(at(0.0, -0.25)),
        PathSegment::CubicTo(at(0.0, -0.75), at(-1.0, -0.75), at(-1.0, -0.1)),
        PathSegment::CubicTo(at(-1.0, 0.4), at(0.0, 0.6), at(0.0, 1.0)),
        PathSegment::CubicTo(at(0.0, 0.6), at(1.0, 0.4), at(1.0, -0.1)),
        PathSegment::CubicTo(at(1.0, -0.75), at(0.0, -0.75), at(0.0, -0.25)),
        PathSegment::Close,
    ]
}

impl ShapeRenderer for HeartShape {
    fn draw(&self, surface: &mut dyn Surface, particle: &Particle, size: f32, alpha: f32) {
        surface.path(
            &heart_path(particle.pos, size),
            Some(particle.color.with_alpha(alpha)),
            None,
        );
    }
}

impl ShapeRenderer for SmileyShape {
    fn draw(&self, surface: &mut dyn Surface, particle: &Particle, size: f32, alpha: f32) {
        let c = particle.pos;
        let ink = FACE_INK.with_alpha(alpha);
        surface.circle(c, size, Some(particle.color.with_alpha(alpha)), None);
        let eye = (size * 0.12).max(0.8);
        for side in [-1.0, 1.0] {
            surface.circle(c + Vec2::new(side * size * 0.35, -size * 0.25), eye, Some(ink), None);
        }
        surface.arc(
            c + Vec2::new(0.0, size * 0.05),
            size * 0.5,
            0.15 * PI,
            0.85 * PI,
            StrokeStyle::new((size * 0.1).max(1.0), ink),
        );
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawMode {
    #[default]
    Circle,
    Square,
    Star,
    Heart,
    Smiley,
}

impl DrawMode {
    /// Cycle order of the draw-mode button.
    pub const ALL: [DrawMode; 5] = [
        DrawMode::Circle,
        DrawMode::Square,
        DrawMode::Star,
        DrawMode::Heart,
        DrawMode::Smiley,
    ];

    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|m| *m == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            DrawMode::Circle => "Circles",
            DrawMode::Square => "Squares",
            DrawMode::Star => "Stars",
            DrawMode::Heart => "Hearts",
            DrawMode::Smiley => "Smileys",
        }
    }

    pub fn renderer(self) -> &'static dyn ShapeRenderer {
        match self {
            DrawMode::Circle => &CircleShape,
            DrawMode::Square => &SquareShape,
            DrawMode::Star => &StarShape,
            DrawMode::Heart => &HeartShape,
            DrawMode::Smiley => &SmileyShape,
        }
    }

    /// `(minimum life scale, fixed offset)` applied to the base size.
    fn size_profile(self) -> (f32, f32) {
        match self {
            DrawMode::Circle | DrawMode::Square => (0.3, 0.0),
            DrawMode::Star | DrawMode::Heart | DrawMode::Smiley => (0.5, 2.0),
        }
    }

    pub fn display_size(self, base: f32, life: f32) -> f32 {
        let (min_scale, offset) = self.size_profile();
        base * life.max(min_scale) + offset
    }

    pub fn draw(self, surface: &mut dyn Surface, particle: &Particle, base_size: f32) {
        let size = self.display_size(base_size, particle.life);
        self.renderer().draw(surface, particle, size, particle.life);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{flatten_path, CommandBuffer, DrawCommand};

    fn particle(life: f32) -> Particle {
        Particle {
            life,
            ..Particle::new(Vec2::new(50.0, 50.0), Vec2::ZERO, Rgb::from_u32(0xFFBE0B))
        }
    }

    #[test]
    fn cycle_visits_every_mode_and_wraps() {
        let mut mode = DrawMode::Circle;
        let mut seen = Vec::new();
        for _ in 0..DrawMode::ALL.len() {
            seen.push(mode);
            mode = mode.next();
        }
        assert_eq!(seen, DrawMode::ALL);
        assert_eq!(mode, DrawMode::Circle);
    }

    #[test]
    fn size_shrinks_with_life_down_to_a_floor() {
        let close = |a: f32, b: f32| (a - b).abs() < 1e-5;
        assert!(close(DrawMode::Circle.display_size(10.0, 1.0), 10.0));
        assert!(close(DrawMode::Circle.display_size(10.0, 0.1), 3.0));
        assert!(close(DrawMode::Heart.display_size(10.0, 0.1), 7.0));
        assert!(close(DrawMode::Star.display_size(10.0, 0.8), 10.0));
    }

    #[test]
    fn every_shape_keeps_particle_channels() {
        let p = particle(0.4);
        for mode in DrawMode::ALL {
            let mut buffer = CommandBuffer::new();
            mode.draw(&mut buffer, &p, 6.0);
            let fill = match &buffer.commands()[0] {
                DrawCommand::Circle { fill, .. }
                | DrawCommand::Polygon { fill, .. }
                | DrawCommand::Path { fill, .. } => fill.expect("body is filled"),
                other => panic!("{mode:?} drew {other:?} first"),
            };
            assert_eq!(fill.rgb, p.color, "{mode:?}");
            assert_eq!(fill.alpha, 0.4, "{mode:?}");
        }
    }

    #[test]
    fn smiley_is_face_eyes_and_mouth() {
        let mut buffer = CommandBuffer::new();
        DrawMode::Smiley.draw(&mut buffer, &particle(1.0), 6.0);
        let commands = buffer.commands();
        assert_eq!(commands.len(), 4);
        assert!(matches!(commands[1], DrawCommand::Circle { .. }));
        assert!(matches!(commands[3], DrawCommand::Arc { .. }));
    }

    #[test]
    fn star_alternates_outer_and_inner_radius() {
        let center = Vec2::new(3.0, 4.0);
        let points = star_points(center, 10.0, 4.0);
        for (i, p) in points.iter().enumerate() {
            let expected = if i % 2 == 0 { 10.0 } else { 4.0 };
            assert!(((*p - center).length() - expected).abs() < 1e-4);
        }
        assert!((points[0] - Vec2::new(3.0, -6.0)).length() < 1e-4);
    }

    #[test]
    fn heart_is_symmetric_about_its_center_line() {
        let center = Vec2::new(100.0, 100.0);
        let points = flatten_path(&heart_path(center, 10.0), 6);
        let tip = points
            .iter()
            .copied()
            .fold(Vec2::splat(f32::MIN), |a, b| if b.y > a.y { b } else { a });
        assert!((tip - Vec2::new(100.0, 110.0)).length() < 1e-4);
        let min_x = points.iter().map(|p| p.x).fold(f32::MAX, f32::min);
        let max_x = points.iter().map(|p| p.x).fold(f32::MIN, f32::max);
        assert!(((100.0 - min_x) - (max_x - 100.0)).abs() < 1e-3);
    }
}
