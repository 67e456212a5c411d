//! Shader source loading.
//!
//! The vertex and fragment stages live in two separate WGSL files that are read
//! at startup. Both declare bind group 0 with the same layout:
//!
//! | binding | resource | stages |
//! |---|---|---|
//! | 0 | `View` uniform (position, half frame, iterations) | vertex, fragment |
//! | 1 | hue `texture_2d<f32>` | fragment |
//! | 2 | hue sampler | fragment |

use std::path::Path;

use crate::error::{Result, ViewerError};

pub const VERTEX_ENTRY_POINT: &str = "vs_main";
pub const FRAGMENT_ENTRY_POINT: &str = "fs_main";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSources {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSources {
    pub fn load(vertex_path: &Path, fragment_path: &Path) -> Result<Self> {
        Ok(Self {
            vertex: read_source(vertex_path)?,
            fragment: read_source(fragment_path)?,
        })
    }
}

fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| ViewerError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}
