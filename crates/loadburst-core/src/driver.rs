//! Driver: phase state machine and per-frame stepping.
//!
//! Owns the single Loader and Exploder, the particle swarm, and the RNG
//! that seeds each cycle's particle geometry. One `advance_frame` call per
//! host frame: update the active phase, draw it, then run at most one
//! phase transition.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{Config, ConfigError};
use crate::data::{Color, Point};
use crate::exploder::Exploder;
use crate::loader::Loader;
use crate::outputs::{DriverEvent, Outputs};
use crate::particle::Particle;
use crate::scheduler::FrameScheduler;
use crate::surface::DrawSurface;

/// Mutually exclusive animation states, cycled in order.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Exploding,
    Bursting,
}

/// Animation driver, generic over the RNG so tests can seed it.
#[derive(Debug)]
pub struct Driver<R: Rng> {
    cfg: Config,
    phase: Phase,
    loader: Loader,
    exploder: Exploder,
    particles: Vec<Particle>,
    rng: R,
    outputs: Outputs,
}

impl<R: Rng> Driver<R> {
    /// Build a driver for the given view; validates the config up front so
    /// entity constructors never see a zero duration.
    pub fn new(cfg: Config, rng: R) -> Result<Self, ConfigError> {
        cfg.validate()?;
        let center = Point::new(cfg.view_width * 0.5, cfg.view_height * 0.5);
        let mut driver = Self {
            phase: Phase::Loading,
            loader: Loader::new(center, cfg.loader_radius),
            exploder: Exploder::new(center, cfg.loader_radius, cfg.exploder_duration),
            particles: Vec::with_capacity(cfg.particle_count),
            rng,
            outputs: Outputs::default(),
            cfg,
        };
        driver.rebuild_particles();
        Ok(driver)
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn loader(&self) -> &Loader {
        &self.loader
    }

    #[inline]
    pub fn exploder(&self) -> &Exploder {
        &self.exploder
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Advance one frame: update the active phase's entities by the fixed
    /// nominal timestep, draw them, then check for a transition.
    ///
    /// Re-arms `scheduler` at the end of every frame except the one where
    /// the full cycle completes; that frame resets all entities, returns
    /// without rescheduling, and leaves the restart to the host.
    pub fn advance_frame(
        &mut self,
        surface: &mut dyn DrawSurface,
        scheduler: &mut dyn FrameScheduler,
    ) -> &Outputs {
        self.outputs.clear();

        self.update_active_phase();
        self.draw_active_phase(surface);

        match self.phase {
            Phase::Loading if self.loader.is_complete() => {
                self.set_phase(Phase::Exploding);
            }
            Phase::Exploding if self.exploder.is_complete() => {
                self.set_phase(Phase::Bursting);
            }
            Phase::Bursting if self.particles_complete() => {
                self.reset_cycle();
                // Cycle boundary: the frame chain stops here on purpose.
                return &self.outputs;
            }
            _ => {}
        }

        scheduler.request_frame();
        &self.outputs
    }

    fn update_active_phase(&mut self) {
        match self.phase {
            Phase::Loading => {
                let step = 1.0 / self.cfg.loader_frames as f32;
                let progress = self.loader.progress();
                self.loader.set_progress(progress + step);
            }
            Phase::Exploding => self.exploder.update(self.cfg.time_step),
            Phase::Bursting => {
                for p in &mut self.particles {
                    p.update(self.cfg.time_step);
                }
            }
        }
    }

    fn draw_active_phase(&self, surface: &mut dyn DrawSurface) {
        surface.clear_rect(0.0, 0.0, self.cfg.view_width, self.cfg.view_height);
        match self.phase {
            Phase::Loading => self.loader.draw(surface),
            Phase::Exploding => self.exploder.draw(surface),
            Phase::Bursting => {
                for p in &self.particles {
                    p.draw(surface);
                }
            }
        }
    }

    fn set_phase(&mut self, to: Phase) {
        let from = self.phase;
        self.phase = to;
        debug!("phase {:?} -> {:?}", from, to);
        self.outputs.push_event(DriverEvent::PhaseChanged { from, to });
    }

    fn particles_complete(&self) -> bool {
        self.particles.iter().all(Particle::is_complete)
    }

    /// Full-cycle reset: loader/exploder zeroed in place, particles
    /// discarded and respawned with fresh geometry.
    fn reset_cycle(&mut self) {
        self.loader.reset();
        self.exploder.reset();
        self.rebuild_particles();
        self.set_phase(Phase::Loading);
        debug!("cycle complete, {} particles respawned", self.particles.len());
        self.outputs.push_event(DriverEvent::CycleCompleted);
    }

    fn rebuild_particles(&mut self) {
        self.particles.clear();
        for _ in 0..self.cfg.particle_count {
            let p = self.spawn_particle();
            self.particles.push(p);
        }
    }

    /// Path: view center, through two free control points, exiting below
    /// the bottom edge.
    fn spawn_particle(&mut self) -> Particle {
        let cfg = &self.cfg;
        let p0 = Point::new(cfg.view_width * 0.5, cfg.view_height * 0.5);
        let p1 = Point::new(
            self.rng.gen::<f32>() * cfg.view_width,
            self.rng.gen::<f32>() * cfg.view_height,
        );
        let p2 = Point::new(
            self.rng.gen::<f32>() * cfg.view_width,
            self.rng.gen::<f32>() * cfg.view_height,
        );
        let p3 = Point::new(
            self.rng.gen::<f32>() * cfg.view_width,
            cfg.view_height + cfg.particle_exit_margin,
        );

        let (min, max) = (cfg.particle_duration_min, cfg.particle_duration_max);
        let duration = if min < max {
            self.rng.gen_range(min..max)
        } else {
            min
        };
        let color = Color::random(&mut self.rng);

        Particle::new(p0, p1, p2, p3, duration, color)
            .with_size(cfg.particle_width, cfg.particle_height)
    }
}
