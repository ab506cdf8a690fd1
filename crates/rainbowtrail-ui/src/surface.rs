use egui::{Color32, Mesh, Painter, Pos2, Rect, Shape, Stroke};
use glam::Vec2;
use rainbowtrail_core::render::{arc_points, flatten_path};
use rainbowtrail_core::{PathSegment, Rgba, StrokeStyle, Surface};

const CURVE_STEPS: usize = 10;
const ARC_STEPS: usize = 16;

pub fn to_color32(color: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(color.rgb.r, color.rgb.g, color.rgb.b, color.alpha_u8())
}

fn to_stroke(stroke: StrokeStyle) -> Stroke {
    Stroke::new(stroke.width, to_color32(stroke.color))
}

/// Replays core draw commands through an egui painter, offset to the canvas rect.
pub struct EguiSurface<'a> {
    painter: &'a Painter,
    origin: Pos2,
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: &'a Painter, origin: Pos2) -> Self {
        Self { painter, origin }
    }

    fn pos(&self, point: Vec2) -> Pos2 {
        self.origin + egui::vec2(point.x, point.y)
    }

    /// Triangle fan from the centroid. Stars and hearts are star-shaped
    /// around it, which is all the fan needs.
    fn fill_fan(&self, points: &[Pos2], color: Color32) {
        if points.len() < 3 {
            return;
        }
        let sum = points.iter().fold(egui::Vec2::ZERO, |acc, p| acc + p.to_vec2());
        let centroid = (sum / points.len() as f32).to_pos2();
        let mut mesh = Mesh::default();
        mesh.colored_vertex(centroid, color);
        for point in points {
            mesh.colored_vertex(*point, color);
        }
        let n = points.len() as u32;
        for i in 0..n {
            mesh.add_triangle(0, 1 + i, 1 + (i + 1) % n);
        }
        self.painter.add(Shape::mesh(mesh));
    }

    fn outline(&self, points: Vec<Pos2>, fill: Option<Rgba>, stroke: Option<StrokeStyle>) {
        if let Some(fill) = fill {
            self.fill_fan(&points, to_color32(fill));
        }
        if let Some(stroke) = stroke {
            self.painter.add(Shape::closed_line(points, to_stroke(stroke)));
        }
    }
}

impl Surface for EguiSurface<'_> {
    fn fill_rect(&mut self, min: Vec2, size: Vec2, color: Rgba) {
        let rect = Rect::from_min_size(self.pos(min), egui::vec2(size.x, size.y));
        self.painter.rect_filled(rect, 0.0, to_color32(color));
    }

    fn circle(&mut self, center: Vec2, radius: f32, fill: Option<Rgba>, stroke: Option<StrokeStyle>) {
        self.painter.circle(
            self.pos(center),
            radius,
            fill.map(to_color32).unwrap_or(Color32::TRANSPARENT),
            stroke.map(to_stroke).unwrap_or(Stroke::NONE),
        );
    }

    fn polygon(&mut self, points: &[Vec2], fill: Option<Rgba>, stroke: Option<StrokeStyle>) {
        let points = points.iter().map(|p| self.pos(*p)).collect();
        self.outline(points, fill, stroke);
    }

    fn path(&mut self, segments: &[PathSegment], fill: Option<Rgba>, stroke: Option<StrokeStyle>) {
        let points = flatten_path(segments, CURVE_STEPS)
            .into_iter()
            .map(|p| self.pos(p))
            .collect();
        self.outline(points, fill, stroke);
    }

    fn arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32, stroke: StrokeStyle) {
        let points = arc_points(center, radius, start, end, ARC_STEPS)
            .into_iter()
            .map(|p| self.pos(p))
            .collect();
        self.painter.add(Shape::line(points, to_stroke(stroke)));
    }
}
