//! Configuration types for cameras and headless scene runs.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::camera::CameraBehavior;
use crate::surface::Size;

fn default_tick_ms() -> u32 {
    16
}

fn default_velocity() -> (i32, i32) {
    (2, 1)
}

fn default_background() -> [u8; 4] {
    [0, 0, 0, 255]
}

/// Camera geometry and behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Size of the world surface the camera looks at.
    pub source_size: Size,
    /// Size of the rendered output.
    pub output_size: Size,
    /// Size of the world region captured per frame (scaled to `output_size`).
    pub focus_size: Size,
    /// Viewport placement strategy.
    #[serde(default)]
    pub behavior: CameraBehavior,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            source_size: Size::new(640, 480),
            output_size: Size::new(320, 240),
            focus_size: Size::new(160, 120),
            behavior: CameraBehavior::Center,
        }
    }
}

impl CameraConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source_size.is_empty() {
            return Err(ConfigError::EmptySize {
                field: "source_size",
            });
        }
        if self.output_size.is_empty() {
            return Err(ConfigError::EmptySize {
                field: "output_size",
            });
        }
        if self.focus_size.is_empty() {
            return Err(ConfigError::EmptySize {
                field: "focus_size",
            });
        }
        if !self.source_size.contains(self.focus_size) {
            return Err(ConfigError::FocusExceedsSource {
                focus: self.focus_size,
                source_size: self.source_size,
            });
        }
        Ok(())
    }
}

/// Tile layers drawn into the world before the run starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileLayerConfig {
    /// Tilesheet image; rules are read from `<tilesheet>.rules` if present.
    pub tilesheet: PathBuf,
    /// Size of one tile in pixels.
    pub tile_size: Size,
    /// Layer files drawn in order. A `.csv` file is one layer; a `.tmx` file
    /// contributes all of its layers.
    pub layers: Vec<PathBuf>,
    /// Global id of the first tile in the sheet, for CSV layers. TMX files
    /// carry their own.
    #[serde(default)]
    pub firstgid: usize,
}

/// How a layer file is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerFormat {
    Csv,
    Tmx,
}

impl LayerFormat {
    /// Pick the format from the file extension; anything but `.tmx` is CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension() {
            Some(ext) if ext.eq_ignore_ascii_case("tmx") => LayerFormat::Tmx,
            _ => LayerFormat::Csv,
        }
    }
}

/// Top-level configuration for a headless run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneConfig {
    pub camera: CameraConfig,
    /// Animated GIF for the actor. A built-in two-frame sprite is used when
    /// absent.
    #[serde(default)]
    pub sprite: Option<PathBuf>,
    /// Optional tile map drawn as the world background.
    #[serde(default)]
    pub tiles: Option<TileLayerConfig>,
    /// Milliseconds per tick.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u32,
    /// Actor start position in world pixels.
    #[serde(default)]
    pub start: (i32, i32),
    /// Actor movement per tick in world pixels.
    #[serde(default = "default_velocity")]
    pub velocity: (i32, i32),
    /// World clear color (RGBA).
    #[serde(default = "default_background")]
    pub background: [u8; 4],
    /// Write the final camera output here as PNG.
    #[serde(default)]
    pub output: Option<PathBuf>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            sprite: None,
            tiles: None,
            tick_ms: default_tick_ms(),
            start: (0, 0),
            velocity: default_velocity(),
            background: default_background(),
            output: None,
        }
    }
}

impl SceneConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.camera.validate()?;
        if self.tick_ms == 0 {
            return Err(ConfigError::InvalidTickRate);
        }
        if let Some(tiles) = &self.tiles
            && tiles.tile_size.is_empty()
        {
            return Err(ConfigError::EmptySize { field: "tile_size" });
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must have non-zero width and height")]
    EmptySize { field: &'static str },
    #[error(
        "Focus size {}x{} exceeds source size {}x{}",
        .focus.width, .focus.height, .source_size.width, .source_size.height
    )]
    FocusExceedsSource { focus: Size, source_size: Size },
    #[error("Tick length must be positive")]
    InvalidTickRate,
}
