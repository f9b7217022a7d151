use std::str::FromStr;
use std::time::Duration;

use crate::error::{ConfigError, GridError};

pub const GRID_WIDTH: usize = 128;
pub const GRID_HEIGHT: usize = 96;
pub const DEFAULT_DENSITY: f64 = 0.3;
pub const DEFAULT_TICK_MS: u64 = 100;
/// Largest grid the viewer can upload: one `u32` per cell within wgpu's
/// default 128 MiB `max_storage_buffer_binding_size`.
pub const MAX_CELLS: usize = (128 << 20) / 4;

pub const WIDTH_VAR: &str = "LIFE_WIDTH";
pub const HEIGHT_VAR: &str = "LIFE_HEIGHT";
pub const DENSITY_VAR: &str = "LIFE_DENSITY";
pub const TICK_MS_VAR: &str = "LIFE_TICK_MS";
pub const SEED_VAR: &str = "LIFE_SEED";

/// Startup settings for a `Session`.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub width: usize,
    pub height: usize,
    /// Probability of a cell starting alive when randomizing
    pub density: f64,
    /// Time between generations while running
    pub tick_interval: Duration,
    /// Fixed seed for the random source; entropy when `None`
    pub seed: Option<u64>,
    pub randomize_on_start: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            density: DEFAULT_DENSITY,
            tick_interval: Duration::from_millis(DEFAULT_TICK_MS),
            seed: None,
            randomize_on_start: true,
        }
    }
}

impl SimConfig {
    /// Defaults overridden by the `LIFE_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each `LIFE_*` variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(width) = parse_var(&lookup, WIDTH_VAR)? {
            config.width = width;
        }
        if let Some(height) = parse_var(&lookup, HEIGHT_VAR)? {
            config.height = height;
        }
        if let Some(density) = parse_var(&lookup, DENSITY_VAR)? {
            config.density = density;
        }
        if let Some(ms) = parse_var(&lookup, TICK_MS_VAR)? {
            config.tick_interval = Duration::from_millis(ms);
        }
        if let Some(seed) = parse_var(&lookup, SEED_VAR)? {
            config.seed = Some(seed);
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GridError> {
        if self.width == 0 || self.height == 0 {
            return Err(GridError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        if self.width.saturating_mul(self.height) > MAX_CELLS {
            return Err(GridError::TooLarge {
                width: self.width,
                height: self.height,
            });
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(GridError::InvalidDensity(self.density));
        }
        Ok(())
    }
}

fn parse_var<T, F>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&'static str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Parse { var, value }),
    }
}
