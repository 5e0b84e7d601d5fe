// src/config/config_types.rs
//
// Config types for the app. Every section and key is optional.

use serde::Deserialize;

use crate::models::style::{DEFAULT_DOT_DIAMETER, DEFAULT_SPEED, DEFAULT_ZOOM};
use crate::models::Alignment;
use crate::views::DEFAULT_SPACE_BETWEEN_CELLS;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub background: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 960,
            background: "ffffff".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GridSection {
    pub space_between_cells: f32,
    pub alignment: Alignment,
}

impl Default for GridSection {
    fn default() -> Self {
        Self {
            space_between_cells: DEFAULT_SPACE_BETWEEN_CELLS,
            alignment: Alignment::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DotConfig {
    pub diameter: f32,
    pub rest_color: String,
    pub active_color: String,
    pub image: Option<String>,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            diameter: DEFAULT_DOT_DIAMETER,
            rest_color: "808080".to_string(),
            active_color: "555555".to_string(),
            image: None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub speed: f32,
    pub zoom: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            zoom: DEFAULT_ZOOM,
        }
    }
}
