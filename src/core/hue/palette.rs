use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::core::hue::kinds::HueKind;
use crate::error::{Result, ViewerError};

const BYTES_PER_TEXEL: usize = 4;

/// A one-texel-high RGBA8 lookup table, read from a headerless byte stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuePalette {
    kind: HueKind,
    texels: Vec<u8>,
}

impl HuePalette {
    /// Interprets `bytes` as packed RGBA8 texels. A trailing partial texel is dropped.
    pub fn from_rgba_bytes(kind: HueKind, mut bytes: Vec<u8>) -> Result<Self> {
        let len = bytes.len();
        let whole = len - len % BYTES_PER_TEXEL;

        if whole == 0 {
            return Err(ViewerError::EmptyHueTexture { kind, len });
        }

        if whole != len {
            warn!(
                hue = %kind,
                dropped = len - whole,
                "Hue texture length is not a multiple of 4, dropping trailing bytes"
            );
            bytes.truncate(whole);
        }

        Ok(Self {
            kind,
            texels: bytes,
        })
    }

    /// Reads `<dir>/<stem>.rgba`.
    pub fn load(kind: HueKind, dir: &Path) -> Result<Self> {
        let path = Self::path_in(kind, dir);
        let bytes = std::fs::read(&path).map_err(|source| ViewerError::ReadFile {
            path: path.clone(),
            source,
        })?;

        debug!(hue = %kind, path = %path.display(), bytes = bytes.len(), "Read hue texture");

        Self::from_rgba_bytes(kind, bytes)
    }

    #[must_use]
    pub fn path_in(kind: HueKind, dir: &Path) -> PathBuf {
        dir.join(format!("{}.rgba", kind.file_stem()))
    }

    #[must_use]
    pub fn kind(&self) -> HueKind {
        self.kind
    }

    #[must_use]
    pub fn texels(&self) -> &[u8] {
        &self.texels
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        (self.texels.len() / BYTES_PER_TEXEL) as u32
    }
}

/// The four hue textures, in [`HueKind::ALL`] order.
#[derive(Debug, Clone)]
pub struct HuePalettes {
    palettes: Vec<HuePalette>,
}

impl HuePalettes {
    pub fn load_all(dir: &Path) -> Result<Self> {
        let palettes = HueKind::ALL
            .iter()
            .map(|&kind| HuePalette::load(kind, dir))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { palettes })
    }

    #[must_use]
    pub fn get(&self, kind: HueKind) -> &HuePalette {
        &self.palettes[kind.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &HuePalette> {
        self.palettes.iter()
    }
}
