//! loadburst-core (host-agnostic)
//!
//! A three-phase frame-driven animation: a radial loading wheel fills,
//! collapses in a brief explosion, then bursts into a swarm of particles
//! riding randomized cubic Bézier paths off the bottom of the view. The
//! host supplies an immediate-mode 2D surface and a frame scheduler; this
//! crate owns the phase state machine, the entities, and the math.

pub mod config;
pub mod data;
pub mod driver;
pub mod exploder;
pub mod interp;
pub mod loader;
pub mod outputs;
pub mod particle;
pub mod scheduler;
pub mod surface;

// Re-exports for consumers (adapters)
pub use config::{Config, ConfigError};
pub use data::{Color, Point};
pub use driver::{Driver, Phase};
pub use exploder::Exploder;
pub use interp::{
    cubic_bezier, ease_in_back, ease_in_back_with, ease_in_cubic, ease_in_out_cubic,
    ease_out_cubic,
};
pub use loader::Loader;
pub use outputs::{DriverEvent, Outputs};
pub use particle::Particle;
pub use scheduler::FrameScheduler;
pub use surface::{DrawSurface, NullSurface};
