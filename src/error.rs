//! Error types for the viewer.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::hue::kinds::HueKind;
use crate::core::view::ViewLimitsError;

/// Every failure the viewer can report. Setup failures are fatal.
#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("Failed to read file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Hue texture {kind} has no complete RGBA texel ({len} bytes)")]
    EmptyHueTexture { kind: HueKind, len: usize },

    #[error("Hue texture {kind} is {width} texels wide, the device allows at most {max}")]
    HueTextureTooWide { kind: HueKind, width: u32, max: u32 },

    #[error("[Creating shader] Failed to compile a shader ({stage}): {message}")]
    ShaderCompile { stage: &'static str, message: String },

    #[error("[Initializing shaders] Failed to link shader program: {0}")]
    ProgramLink(String),

    #[error("[{domain}] GPU validation failed: {message}")]
    GpuValidation { domain: &'static str, message: String },

    #[error("Failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid view limits: {0}")]
    InvalidLimits(#[from] ViewLimitsError),

    #[cfg(feature = "gui")]
    #[error("Failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[cfg(feature = "gui")]
    #[error("Failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[cfg(feature = "gui")]
    #[error("Surface error: {0}")]
    Pixels(#[from] pixels::Error),

    #[cfg(feature = "gui")]
    #[error("Failed to resize surface: {0}")]
    Texture(#[from] pixels::TextureError),
}

/// Convenience type alias for Results with [`ViewerError`]
pub type Result<T> = std::result::Result<T, ViewerError>;
