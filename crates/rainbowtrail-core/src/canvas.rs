//! Accumulating canvas for hosts that repaint every frame from scratch.
//!
//! A browser canvas keeps last frame's pixels, so the translucent wash at
//! the top of each frame fades older strokes. Immediate-mode hosts have no
//! such memory; replaying the last N frames in order over an opaque
//! background produces the same picture, minus contributions older than N
//! frames (with the default wash of 0.1 and N = 32 those are under 4%).

use std::collections::VecDeque;

use glam::Vec2;
use rainbowtrail_platform::SurfaceSize;

use crate::color::Rgb;
use crate::render::{CommandBuffer, Surface};

#[derive(Debug, Clone)]
pub struct RetainedCanvas {
    frames: VecDeque<CommandBuffer>,
    depth: usize,
}

impl RetainedCanvas {
    pub fn new(depth: usize) -> Self {
        let depth = depth.max(1);
        Self {
            frames: VecDeque::with_capacity(depth),
            depth,
        }
    }

    pub fn commit(&mut self, frame: CommandBuffer) {
        if frame.starts_with_wipe() {
            self.frames.clear();
        }
        if self.frames.len() == self.depth {
            self.frames.pop_front();
        }
        self.frames.push_back(frame);
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn replay(&self, surface: &mut dyn Surface, size: SurfaceSize, background: Rgb) {
        surface.fill_rect(Vec2::ZERO, Vec2::new(size.width, size.height), background.with_alpha(1.0));
        for frame in &self.frames {
            frame.replay(surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::DrawCommand;

    fn frame(alpha: f32) -> CommandBuffer {
        let mut buffer = CommandBuffer::new();
        buffer.fill_rect(Vec2::ZERO, Vec2::ONE, Rgb::new(10, 10, 20).with_alpha(alpha));
        buffer.circle(Vec2::ONE, 1.0, Some(Rgb::WHITE.with_alpha(1.0)), None);
        buffer
    }

    #[test]
    fn keeps_only_the_newest_frames() {
        let mut canvas = RetainedCanvas::new(3);
        for _ in 0..5 {
            canvas.commit(frame(0.1));
        }
        assert_eq!(canvas.len(), 3);
    }

    #[test]
    fn opaque_frame_drops_history() {
        let mut canvas = RetainedCanvas::new(8);
        canvas.commit(frame(0.1));
        canvas.commit(frame(0.1));
        canvas.commit(frame(1.0));
        assert_eq!(canvas.len(), 1);
    }

    #[test]
    fn replay_starts_with_opaque_background() {
        let mut canvas = RetainedCanvas::new(4);
        canvas.commit(frame(0.1));
        let mut out = CommandBuffer::new();
        canvas.replay(&mut out, SurfaceSize::new(640.0, 480.0), Rgb::new(1, 2, 3));
        assert_eq!(out.len(), 3);
        assert!(out.starts_with_wipe());
        assert!(matches!(
            out.commands()[0],
            DrawCommand::FillRect { size, .. } if size == Vec2::new(640.0, 480.0)
        ));
        canvas.clear();
        assert!(canvas.is_empty());
    }
}
