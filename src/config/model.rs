//! Configuration data model.
//!
//! Every field has a default, so an absent or partial `mandel-gl.toml`
//! still yields a complete configuration.

use serde::Deserialize;
use std::path::PathBuf;

use crate::core::view::ViewLimits;

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct ViewerConfig {
    pub window: WindowConfig,
    pub assets: AssetsConfig,
    pub view: ViewLimits,
    pub hud: HudConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub min_width: f64,
    pub min_height: f64,
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Mandel-GL".into(),
            width: 800.0,
            height: 600.0,
            min_width: 200.0,
            min_height: 200.0,
            vsync: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    pub vertex_shader: PathBuf,
    pub fragment_shader: PathBuf,
    pub texture_dir: PathBuf,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            vertex_shader: PathBuf::from("shaders/vertex.wgsl"),
            fragment_shader: PathBuf::from("shaders/fragment.wgsl"),
            texture_dir: PathBuf::from("textures"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    pub visible: bool,
}

impl Default for HudConfig {
    fn default() -> Self {
        Self { visible: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}
