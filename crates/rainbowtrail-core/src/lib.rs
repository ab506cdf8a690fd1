//! Rainbow Trail core: host-agnostic particles, shapes, settings and guestbook.

pub mod canvas;
pub mod chime;
pub mod color;
pub mod config;
pub mod error;
pub mod guestbook;
pub mod particle;
pub mod render;
pub mod session;
pub mod settings;
pub mod shapes;
pub mod spawner;
pub mod starfield;

pub use canvas::RetainedCanvas;
pub use chime::Chime;
pub use color::{ColorMode, Rgb, Rgba};
pub use config::{ClickBehavior, SpeedRange, TrailConfig};
pub use error::{Result, TrailError};
pub use guestbook::{Guestbook, GuestbookEntry};
pub use particle::{Particle, ParticleStore};
pub use render::{CommandBuffer, DrawCommand, PathSegment, StrokeStyle, Surface};
pub use session::{Frame, TrailSession};
pub use settings::Settings;
pub use shapes::{DrawMode, ShapeRenderer};
pub use starfield::StarField;
