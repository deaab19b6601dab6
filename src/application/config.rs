//! Run configuration supplied by the menu (or a JSON file) before a run.

use super::Palette;
use anyhow::Context;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV: &str = "LIFE_MENU_CONFIG";

pub const MIN_TICK_RATE: u32 = 1;
pub const MAX_TICK_RATE: u32 = 60;
/// Upper end of the menu's population slider
pub const MAX_MENU_PERCENT: f64 = 0.99;
/// Largest window edge, in pixels, a grid config may ask for
pub const MAX_WINDOW_SIDE: u32 = 8192;

/// Settings fixed for the lifetime of a run, except `tick_rate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Probability that each cell starts alive
    pub percent: f64,
    /// Target ticks per second
    pub tick_rate: u32,
    pub colors: Palette,
    /// Ignore `colors` and pick random ones at run start
    pub randomize_colors: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            percent: 0.2,
            tick_rate: 30,
            colors: Palette::default(),
            randomize_colors: false,
        }
    }
}

impl RunConfig {
    /// Clamp externally supplied values into their valid ranges.
    pub fn sanitized(mut self) -> Self {
        if self.percent.is_nan() {
            warn!("percent is NaN, using default");
            self.percent = Self::default().percent;
        }
        self.percent = self.percent.clamp(0.0, 1.0);
        self.tick_rate = clamp_tick_rate(self.tick_rate);
        self
    }
}

pub fn clamp_tick_rate(rate: u32) -> u32 {
    rate.clamp(MIN_TICK_RATE, MAX_TICK_RATE)
}

/// Grid geometry. The window is `width * cell_size` by `height * cell_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
    /// Edge length of one cell in pixels
    pub cell_size: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 30,
            height: 20,
            cell_size: 40,
        }
    }
}

impl GridConfig {
    /// Window size in pixels. Saturates instead of overflowing.
    pub fn window_size(&self) -> (u32, u32) {
        let side = |cells: usize| u32::try_from(cells).unwrap_or(u32::MAX).saturating_mul(self.cell_size);
        (side(self.width), side(self.height))
    }

    fn sanitized(self) -> Self {
        let defaults = Self::default();
        let max_cells = MAX_WINDOW_SIDE as usize;
        let mut width = if self.width == 0 { defaults.width } else { self.width };
        let mut height = if self.height == 0 { defaults.height } else { self.height };
        let mut cell_size = if self.cell_size == 0 { defaults.cell_size } else { self.cell_size };

        if width > max_cells || height > max_cells {
            warn!("grid {}x{} is larger than {} cells a side, clamping", width, height, max_cells);
            width = width.min(max_cells);
            height = height.min(max_cells);
        }
        // Both values are at most MAX_WINDOW_SIDE here
        let longest = width.max(height) as u32;
        let max_cell_size = (MAX_WINDOW_SIDE / longest).max(1);
        if cell_size > max_cell_size {
            warn!(
                "cell_size {} would make a window over {}px, using {}",
                cell_size, MAX_WINDOW_SIDE, max_cell_size
            );
            cell_size = max_cell_size;
        }
        Self { width, height, cell_size }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub grid: GridConfig,
    pub run: RunConfig,
}

impl AppConfig {
    /// Load from the file named by `LIFE_MENU_CONFIG`, or defaults if unset.
    pub fn load() -> anyhow::Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => {
                info!("{} not set, using default configuration", CONFIG_ENV);
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config = Self::from_json(&text)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        Ok(config.sanitized())
    }

    pub fn sanitized(self) -> Self {
        Self {
            grid: self.grid.sanitized(),
            run: self.run.sanitized(),
        }
    }
}
