use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::SimConfig;
use crate::error::GridError;
use crate::grid::Grid;
use crate::rules::{self, Pattern};

/// Upper bound on generations computed by a single `tick`.
pub const MAX_STEPS_PER_TICK: u32 = 4;

/// One running Game of Life: the grid plus everything the front end needs to
/// drive it on a timer.
pub struct Session {
    grid: Grid,
    scratch: Grid,
    generation: u64,
    running: bool,
    stable: bool,
    density: f64,
    tick_interval: Duration,
    last_tick: Option<Instant>,
    rng: StdRng,
}

impl Session {
    pub fn new(config: &SimConfig) -> Result<Self, GridError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let grid = Grid::new(config.width, config.height)?;
        let mut session = Self {
            scratch: grid.clone(),
            grid,
            generation: 0,
            running: false,
            stable: false,
            density: config.density,
            tick_interval: config.tick_interval,
            last_tick: None,
            rng,
        };
        if config.randomize_on_start {
            session.randomize()?;
        }
        log::info!(
            "Session created: {}x{}, density {:.2}, tick {:?}",
            config.width,
            config.height,
            config.density,
            config.tick_interval
        );
        Ok(session)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the last step left the grid unchanged.
    pub fn is_stable(&self) -> bool {
        self.stable
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Advance one generation.
    pub fn step(&mut self) {
        rules::step_into(&self.grid, &mut self.scratch);
        std::mem::swap(&mut self.grid, &mut self.scratch);
        self.generation += 1;
        self.stable = self.grid == self.scratch;
        if self.stable {
            log::debug!("Generation {} is stable", self.generation);
        }
    }

    /// Step once for every `tick_interval` elapsed since the previous tick.
    ///
    /// Returns the number of generations computed. The first tick after
    /// `play` only starts the clock.
    pub fn tick(&mut self, now: Instant) -> u32 {
        if !self.running {
            return 0;
        }
        let Some(last) = self.last_tick else {
            self.last_tick = Some(now);
            return 0;
        };

        let mut steps = 0;
        let mut due = last + self.tick_interval;
        while due <= now && steps < MAX_STEPS_PER_TICK {
            self.step();
            steps += 1;
            due += self.tick_interval;
        }
        if steps == MAX_STEPS_PER_TICK {
            self.last_tick = Some(now);
        } else if steps > 0 {
            self.last_tick = Some(due - self.tick_interval);
        }
        steps
    }

    pub fn play(&mut self) {
        if !self.running {
            log::info!("Playing from generation {}", self.generation);
        }
        self.running = true;
        self.last_tick = None;
    }

    pub fn pause(&mut self) {
        if self.running {
            log::info!("Paused at generation {}", self.generation);
        }
        self.running = false;
    }

    pub fn toggle_running(&mut self) {
        if self.running {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Flip a single cell and return its new state.
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<bool, GridError> {
        let alive = self.grid.toggle(x, y)?;
        self.stable = false;
        log::debug!("Toggled ({x}, {y}) -> {}", if alive { "alive" } else { "dead" });
        Ok(alive)
    }

    /// Refill the grid from the session's random source at the current density.
    pub fn randomize(&mut self) -> Result<(), GridError> {
        self.grid.randomize(&mut self.rng, self.density)?;
        self.reset_generation();
        log::info!(
            "Randomized grid: {} live cells at density {:.2}",
            self.grid.live_count(),
            self.density
        );
        Ok(())
    }

    pub fn clear(&mut self) {
        self.grid.clear();
        self.reset_generation();
        log::info!("Cleared grid");
    }

    /// Clear the grid and seed it with a single centred pattern.
    pub fn load_pattern(&mut self, pattern: Pattern) -> Result<(), GridError> {
        self.grid.clear();
        self.grid.place_centered(pattern)?;
        self.reset_generation();
        log::info!("Loaded pattern {}", pattern.name());
        Ok(())
    }

    pub fn set_density(&mut self, density: f64) -> Result<(), GridError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(GridError::InvalidDensity(density));
        }
        self.density = density;
        Ok(())
    }

    pub fn set_tick_interval(&mut self, interval: Duration) {
        self.tick_interval = interval;
    }

    fn reset_generation(&mut self) {
        self.generation = 0;
        self.stable = false;
        self.last_tick = None;
    }
}
