use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::{BaseDirs, ProjectDirs};
use once_cell::sync::Lazy;

use crate::palette::DEFAULT_PALETTE_SIZE;
use crate::shades::DEFAULT_STEPS;

static LOG_FILE_NAME: &str = "palette.log";
static ENV_DATA_DIR: &str = "PALETTE_DATA_DIR";
static ENV_SEED: &str = "PALETTE_SEED";

pub const MAX_SHADE_STEPS: u32 = 32;
pub const DEFAULT_COPY_FEEDBACK: Duration = Duration::from_secs(2);
pub const DEFAULT_RESIZE_DEBOUNCE: Duration = Duration::from_millis(250);

static PROJECT_DIRS: Lazy<Option<ProjectDirs>> =
    Lazy::new(|| ProjectDirs::from("dev", "palette", "palette"));

#[derive(Debug, Clone)]
pub struct AppConfig {
    data_dir: PathBuf,
    log_path: PathBuf,
    shade_steps: u32,
    palette_size: usize,
    seed: Option<u64>,
    copy_feedback: Duration,
    resize_debounce: Duration,
}

impl AppConfig {
    /// Construct [`AppConfig`] by resolving the data directory using the provided override,
    /// environment variables, and platform defaults. The seed falls back to `PALETTE_SEED`.
    pub fn discover(data_dir_override: Option<PathBuf>) -> Result<Self> {
        let data_dir = resolve_data_dir(data_dir_override)?;
        let seed = match env::var(ENV_SEED) {
            Ok(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .with_context(|| format!("{ENV_SEED} must be an unsigned integer"))?,
            ),
            Err(_) => None,
        };
        Ok(Self::from_data_dir(data_dir).with_seed(seed))
    }

    /// Construct [`AppConfig`] directly from a resolved data directory with default settings.
    pub fn from_data_dir(data_dir: PathBuf) -> Self {
        let log_path = data_dir.join(LOG_FILE_NAME);
        Self {
            data_dir,
            log_path,
            shade_steps: DEFAULT_STEPS,
            palette_size: DEFAULT_PALETTE_SIZE,
            seed: None,
            copy_feedback: DEFAULT_COPY_FEEDBACK,
            resize_debounce: DEFAULT_RESIZE_DEBOUNCE,
        }
    }

    pub fn with_shade_steps(mut self, steps: u32) -> Self {
        self.shade_steps = steps.clamp(1, MAX_SHADE_STEPS);
        self
    }

    pub fn with_palette_size(mut self, size: usize) -> Self {
        self.palette_size = size.max(1);
        self
    }

    /// A `None` keeps whatever seed is already configured.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    pub fn with_copy_feedback(mut self, duration: Duration) -> Self {
        self.copy_feedback = duration;
        self
    }

    pub fn with_resize_debounce(mut self, duration: Duration) -> Self {
        self.resize_debounce = duration;
        self
    }

    /// Create the data directory if it is missing.
    pub fn ensure_data_dir(&self) -> Result<()> {
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir).with_context(|| {
                format!(
                    "Failed to create data directory at {}",
                    self.data_dir.display()
                )
            })?;
        }
        Ok(())
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    pub fn shade_steps(&self) -> u32 {
        self.shade_steps
    }

    pub fn palette_size(&self) -> usize {
        self.palette_size
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn copy_feedback(&self) -> Duration {
        self.copy_feedback
    }

    pub fn resize_debounce(&self) -> Duration {
        self.resize_debounce
    }
}

fn resolve_data_dir(data_dir_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = data_dir_override {
        return Ok(dir);
    }

    if let Ok(env_dir) = env::var(ENV_DATA_DIR) {
        return Ok(PathBuf::from(env_dir));
    }

    if let Some(project) = &*PROJECT_DIRS {
        return Ok(project.data_dir().to_path_buf());
    }

    if let Some(base) = BaseDirs::new() {
        return Ok(base.home_dir().join(".palette"));
    }

    Ok(env::current_dir()?.join(".palette"))
}
