//! The click chime as raw mono samples, ready for any host's audio output.

use std::f32::consts::TAU;

pub const SAMPLE_RATE: u32 = 44_100;

/// A short sine ping with an exponential tail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chime {
    pub frequency: f32,
    /// Seconds.
    pub duration: f32,
    pub gain: f32,
}

impl Default for Chime {
    fn default() -> Self {
        Self {
            frequency: 880.0,
            duration: 0.15,
            gain: 0.25,
        }
    }
}

impl Chime {
    pub fn sample_count(&self, sample_rate: u32) -> usize {
        (self.duration.max(0.0) * sample_rate as f32).round() as usize
    }

    pub fn samples(&self, sample_rate: u32) -> Vec<f32> {
        let count = self.sample_count(sample_rate);
        let dt = 1.0 / sample_rate as f32;
        // Tail reaches about -60 dB at the end.
        let falloff = 6.9 / self.duration.max(f32::EPSILON);
        (0..count)
            .map(|i| {
                let t = i as f32 * dt;
                let phase = (self.frequency * t).fract();
                (phase * TAU).sin() * self.gain * (-falloff * t).exp()
            })
            .collect()
    }
}
