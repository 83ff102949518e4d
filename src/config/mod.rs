use crate::core::controller::{DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH, GridOptions};
use crate::core::drag::{LEAVE_SNAP_THRESHOLD, ReverseDrag};
use crate::errors::{AppError, AppResult};
use crate::models::SLOT_COUNT;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_surface_width")]
    pub surface_width: f64,
    #[serde(default = "default_surface_height")]
    pub surface_height: f64,
    #[serde(default)]
    pub reverse_drag: ReverseDrag,
    #[serde(default = "default_leave_snap_threshold")]
    pub leave_snap_threshold: usize,
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_surface_width() -> f64 {
    DEFAULT_SURFACE_WIDTH
}
fn default_surface_height() -> f64 {
    DEFAULT_SURFACE_HEIGHT
}
fn default_leave_snap_threshold() -> usize {
    LEAVE_SNAP_THRESHOLD
}
fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            surface_width: default_surface_width(),
            surface_height: default_surface_height(),
            reverse_drag: ReverseDrag::default(),
            leave_snap_threshold: default_leave_snap_threshold(),
            color: default_color(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("dutylog")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".dutylog")
        }
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("dutylog.conf")
    }

    /// Config path from the `--config` override, or the default one
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        match custom {
            Some(p) => expand_tilde(p),
            None => Self::config_file(),
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if !(self.surface_width.is_finite() && self.surface_width > 0.0)
            || !(self.surface_height.is_finite() && self.surface_height > 0.0)
        {
            return Err(AppError::Config(format!(
                "surface must be positive, got {}x{}",
                self.surface_width, self.surface_height
            )));
        }
        // a leave from the last column must still be past the threshold
        if self.leave_snap_threshold >= SLOT_COUNT - 1 {
            return Err(AppError::Config(format!(
                "leave_snap_threshold must be below {}, got {}",
                SLOT_COUNT - 1,
                self.leave_snap_threshold
            )));
        }
        Ok(())
    }

    /// Write the default configuration to `path`. In test mode nothing is
    /// written and only the target is reported.
    pub fn init_all(path: &Path, is_test: bool) -> AppResult<()> {
        if is_test {
            return Ok(());
        }

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Config::default())?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Controller options for a grid on this configuration
    pub fn grid_options(&self, encoded: Option<String>, read_only: bool) -> GridOptions {
        GridOptions {
            encoded,
            read_only,
            width: self.surface_width,
            height: self.surface_height,
            reverse_drag: self.reverse_drag,
            leave_snap_threshold: self.leave_snap_threshold,
        }
    }
}
