//! Owned session state and the per-frame step.

use glam::Vec2;
use once_cell::unsync::OnceCell;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rainbowtrail_platform::SurfaceSize;
use tracing::{debug, trace};

use crate::config::TrailConfig;
use crate::particle::ParticleStore;
use crate::render::{CommandBuffer, Surface};
use crate::settings::Settings;
use crate::shapes::DrawMode;
use crate::spawner;
use crate::starfield::StarField;

/// Output of one [`TrailSession::tick`].
#[derive(Debug, Clone, Default)]
pub struct Frame {
    /// Composited onto the previous frame: wash, stars, then particles.
    pub trail: CommandBuffer,
}

pub struct TrailSession<R = StdRng> {
    config: TrailConfig,
    settings: Settings,
    draw_mode: DrawMode,
    particles: ParticleStore,
    stars: OnceCell<StarField>,
    rng: R,
    size: SurfaceSize,
    /// Seconds since start.
    elapsed: f64,
    needs_wipe: bool,
}

impl TrailSession<StdRng> {
    pub fn new(config: TrailConfig, settings: Settings) -> Self {
        Self::with_rng(config, settings, StdRng::from_entropy())
    }
}

impl<R: Rng> TrailSession<R> {
    pub fn with_rng(config: TrailConfig, settings: Settings, rng: R) -> Self {
        Self {
            config,
            settings: settings.clamped(),
            draw_mode: DrawMode::default(),
            particles: ParticleStore::new(),
            stars: OnceCell::new(),
            rng,
            size: SurfaceSize::default(),
            elapsed: 0.0,
            needs_wipe: true,
        }
    }

    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn draw_mode(&self) -> DrawMode {
        self.draw_mode
    }

    pub fn particles(&self) -> &ParticleStore {
        &self.particles
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn pointer_moved(&mut self, at: Vec2) -> usize {
        spawner::spawn_trail(
            &mut self.particles,
            at,
            &self.config,
            self.settings.color_mode,
            &mut self.rng,
        )
    }

    pub fn pointer_pressed(&mut self, at: Vec2) -> usize {
        let added = spawner::spawn_click(
            &mut self.particles,
            at,
            &self.config,
            self.settings.color_mode,
            &mut self.rng,
        );
        debug!("click at ({:.0}, {:.0}) spawned {added}", at.x, at.y);
        added
    }

    /// Empties the store; the next frame repaints the background opaquely.
    pub fn clear(&mut self) {
        debug!("clearing {} particles", self.particles.len());
        self.particles.clear();
        self.needs_wipe = true;
    }

    pub fn cycle_draw_mode(&mut self) -> DrawMode {
        self.draw_mode = self.draw_mode.next();
        debug!("draw mode -> {:?}", self.draw_mode);
        self.draw_mode
    }

    pub fn set_draw_mode(&mut self, mode: DrawMode) {
        self.draw_mode = mode;
    }

    pub fn apply_settings(&mut self, settings: Settings) {
        self.settings = settings.clamped();
    }

    /// Existing particles keep their absolute coordinates.
    pub fn resize(&mut self, size: SurfaceSize) {
        if size != self.size {
            debug!("surface resized to {}x{}", size.width, size.height);
            self.size = size;
            self.needs_wipe = true;
        }
    }

    /// Integrate, cull, then draw the survivors. Motion is per frame, not
    /// per second; `dt` only drives the star twinkle.
    pub fn tick(&mut self, dt: f32) -> Frame {
        self.elapsed += f64::from(dt.max(0.0));
        let removed = self
            .particles
            .step(self.config.gravity, self.settings.decay_rate);

        let mut frame = Frame::default();
        let extent = Vec2::new(self.size.width, self.size.height);
        let wash = if self.needs_wipe {
            self.needs_wipe = false;
            1.0
        } else {
            self.config.fade_alpha
        };
        frame
            .trail
            .fill_rect(Vec2::ZERO, extent, self.config.background.with_alpha(wash));

        if self.settings.show_stars {
            let (count, rng) = (self.config.star_count, &mut self.rng);
            let field = self.stars.get_or_init(|| StarField::generate(count, rng));
            field.draw(&mut frame.trail, self.size, self.elapsed, self.config.twinkle_speed);
        }

        for particle in &self.particles {
            self.draw_mode
                .draw(&mut frame.trail, particle, self.settings.size_base);
        }

        trace!("tick: {} alive, {removed} culled", self.particles.len());
        frame
    }
}
