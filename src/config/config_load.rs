// src/config/config_load.rs
//
// loading of config.toml

use log::info;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::{AnimationConfig, DotConfig, GridSection, WindowConfig};
use crate::models::{DotStyle, MotionConfig};
use crate::utilities::parse_hex_color;
use crate::views::GridConfig;

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{key}: '{value}' is not a hex colour")]
    InvalidColor { key: &'static str, value: String },
    #[error("grid.space_between_cells must be a positive number, got {0}")]
    InvalidSpacing(f32),
    #[error("{key} must be a positive number, got {value}")]
    InvalidDimension { key: &'static str, value: f32 },
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub grid: GridSection,
    pub dot: DotConfig,
    pub animation: AnimationConfig,
}

impl std::str::FromStr for Config {
    type Err = ConfigError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

impl Config {
    /// Looks next to the executable first, then in the working directory.
    /// Without a file anywhere the defaults are used.
    pub fn load() -> Result<Self, ConfigError> {
        let candidates = [
            Self::exe_dir().map(|dir| dir.join(CONFIG_FILE)),
            Some(PathBuf::from(CONFIG_FILE)),
        ];

        for path in candidates.into_iter().flatten() {
            if path.exists() {
                info!("loading config from {}", path.display());
                return Self::load_from(&path);
            }
        }

        info!("no {} found, using defaults", CONFIG_FILE);
        Ok(Self::default())
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        content.parse()
    }

    fn exe_dir() -> Option<PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let spacing = self.grid.space_between_cells;
        if spacing <= 0.0 || !spacing.is_finite() {
            return Err(ConfigError::InvalidSpacing(spacing));
        }
        for (key, value) in [
            ("dot.diameter", self.dot.diameter),
            ("animation.speed", self.animation.speed),
            ("animation.zoom", self.animation.zoom),
        ] {
            if value <= 0.0 || !value.is_finite() {
                return Err(ConfigError::InvalidDimension { key, value });
            }
        }
        self.dot_style()?;
        self.background_color()?;
        Ok(())
    }

    /// Resolves a relative image path against the executable's directory.
    pub fn resolve_image_path(&self) -> Option<PathBuf> {
        let image = self.dot.image.as_deref().filter(|path| !path.is_empty())?;
        if Path::new(image).is_absolute() {
            return Some(PathBuf::from(image));
        }
        Some(
            Self::exe_dir()
                .map(|dir| dir.join(image))
                .filter(|path| path.exists())
                .unwrap_or_else(|| PathBuf::from(image)),
        )
    }

    pub fn background_color(&self) -> Result<nannou::color::Rgba, ConfigError> {
        color(&self.window.background, "window.background")
    }

    /// Dot style without the image, which the host decodes separately.
    pub fn dot_style(&self) -> Result<DotStyle, ConfigError> {
        Ok(DotStyle {
            diameter: self.dot.diameter,
            rest_color: color(&self.dot.rest_color, "dot.rest_color")?,
            active_color: color(&self.dot.active_color, "dot.active_color")?,
            image: None,
        })
    }

    pub fn grid_config(&self) -> Result<GridConfig, ConfigError> {
        Ok(GridConfig {
            space_between_cells: self.grid.space_between_cells,
            alignment: self.grid.alignment,
            style: self.dot_style()?,
            motion: MotionConfig {
                speed: self.animation.speed,
                zoom: self.animation.zoom,
            },
        })
    }
}

fn color(value: &str, key: &'static str) -> Result<nannou::color::Rgba, ConfigError> {
    parse_hex_color(value).ok_or_else(|| ConfigError::InvalidColor {
        key,
        value: value.to_string(),
    })
}
