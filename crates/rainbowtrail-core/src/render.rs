//! Drawing commands and the surface they are issued against.
//!
//! The simulation never talks to a real canvas. Shape routines draw into a
//! [`Surface`]; the session records into a [`CommandBuffer`] which the host
//! replays onto its own surface.

use glam::Vec2;

use crate::color::Rgba;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub width: f32,
    pub color: Rgba,
}

impl StrokeStyle {
    pub fn new(width: f32, color: Rgba) -> Self {
        Self { width, color }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(Vec2),
    LineTo(Vec2),
    CubicTo(Vec2, Vec2, Vec2),
    Close,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        min: Vec2,
        size: Vec2,
        color: Rgba,
    },
    Circle {
        center: Vec2,
        radius: f32,
        fill: Option<Rgba>,
        stroke: Option<StrokeStyle>,
    },
    /// Closed polygon. Not necessarily convex.
    Polygon {
        points: Vec<Vec2>,
        fill: Option<Rgba>,
        stroke: Option<StrokeStyle>,
    },
    Path {
        segments: Vec<PathSegment>,
        fill: Option<Rgba>,
        stroke: Option<StrokeStyle>,
    },
    /// Open arc, clockwise in screen space from `start` to `end` radians.
    Arc {
        center: Vec2,
        radius: f32,
        start: f32,
        end: f32,
        stroke: StrokeStyle,
    },
}

pub trait Surface {
    fn fill_rect(&mut self, min: Vec2, size: Vec2, color: Rgba);
    fn circle(&mut self, center: Vec2, radius: f32, fill: Option<Rgba>, stroke: Option<StrokeStyle>);
    fn polygon(&mut self, points: &[Vec2], fill: Option<Rgba>, stroke: Option<StrokeStyle>);
    fn path(&mut self, segments: &[PathSegment], fill: Option<Rgba>, stroke: Option<StrokeStyle>);
    fn arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32, stroke: StrokeStyle);
}

impl DrawCommand {
    pub fn replay(&self, surface: &mut dyn Surface) {
        match self {
            DrawCommand::FillRect { min, size, color } => surface.fill_rect(*min, *size, *color),
            DrawCommand::Circle {
                center,
                radius,
                fill,
                stroke,
            } => surface.circle(*center, *radius, *fill, *stroke),
            DrawCommand::Polygon { points, fill, stroke } => surface.polygon(points, *fill, *stroke),
            DrawCommand::Path {
                segments,
                fill,
                stroke,
            } => surface.path(segments, *fill, *stroke),
            DrawCommand::Arc {
                center,
                radius,
                start,
                end,
                stroke,
            } => surface.arc(*center, *radius, *start, *end, *stroke),
        }
    }

    /// An opaque rectangle wipes everything drawn before it.
    pub fn is_opaque_fill(&self) -> bool {
        matches!(self, DrawCommand::FillRect { color, .. } if color.is_opaque())
    }
}

/// A [`Surface`] that only records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandBuffer {
    commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn replay(&self, surface: &mut dyn Surface) {
        for command in &self.commands {
            command.replay(surface);
        }
    }

    pub fn starts_with_wipe(&self) -> bool {
        self.commands.first().is_some_and(DrawCommand::is_opaque_fill)
    }
}

impl Surface for CommandBuffer {
    fn fill_rect(&mut self, min: Vec2, size: Vec2, color: Rgba) {
        self.commands.push(DrawCommand::FillRect { min, size, color });
    }

    fn circle(&mut self, center: Vec2, radius: f32, fill: Option<Rgba>, stroke: Option<StrokeStyle>) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            fill,
            stroke,
        });
    }

    fn polygon(&mut self, points: &[Vec2], fill: Option<Rgba>, stroke: Option<StrokeStyle>) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            fill,
            stroke,
        });
    }

    fn path(&mut self, segments: &[PathSegment], fill: Option<Rgba>, stroke: Option<StrokeStyle>) {
        self.commands.push(DrawCommand::Path {
            segments: segments.to_vec(),
            fill,
            stroke,
        });
    }

    fn arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32, stroke: StrokeStyle) {
        self.commands.push(DrawCommand::Arc {
            center,
            radius,
            start,
            end,
            stroke,
        });
    }
}

fn cubic_point(p0: Vec2, c1: Vec2, c2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    p0 * (u * u * u) + c1 * (3.0 * u * u * t) + c2 * (3.0 * u * t * t) + p3 * (t * t * t)
}

/// Samples a path into a polyline, `steps` points per cubic segment.
/// `Close` is implied for filling; it does not repeat the first point.
pub fn flatten_path(segments: &[PathSegment], steps: usize) -> Vec<Vec2> {
    let steps = steps.max(1);
    let mut points = Vec::new();
    let mut cursor = Vec2::ZERO;
    for segment in segments {
        match *segment {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => {
                points.push(p);
                cursor = p;
            }
            PathSegment::CubicTo(c1, c2, end) => {
                for i in 1..=steps {
                    points.push(cubic_point(cursor, c1, c2, end, i as f32 / steps as f32));
                }
                cursor = end;
            }
            PathSegment::Close => {}
        }
    }
    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    points
}

/// Samples an arc into a polyline of `steps + 1` points.
pub fn arc_points(center: Vec2, radius: f32, start: f32, end: f32, steps: usize) -> Vec<Vec2> {
    let steps = steps.max(1);
    (0..=steps)
        .map(|i| {
            let angle = start + (end - start) * i as f32 / steps as f32;
            center + Vec2::from_angle(angle) * radius
        })
        .collect()
}
