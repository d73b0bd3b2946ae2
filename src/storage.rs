//! Filesystem collaborators: output directory handling and PNG persistence.

use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("destination path is empty")]
    EmptyPath,

    #[error("failed to create destination: {0}")]
    Io(#[from] io::Error),

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Default directory (relative to the working directory) for screenshots.
pub fn default_output_dir() -> PathBuf {
    Path::new(".").join("screenshots")
}

/// Creates `path` (and any parents) if it doesn't already exist.
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if path.as_os_str().is_empty() {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "path is empty"));
    }
    fs::create_dir_all(path)
}

/// Filesystem existence probe, injected into the path namer.
pub fn path_exists(path: &Path) -> bool {
    path.exists()
}

/// Writes `pixels` as a PNG to `dest`, creating the parent directory if
/// needed. Lossless: the file decodes back to the exact same pixel values.
pub fn save_png(pixels: &RgbaImage, dest: &Path) -> Result<(), SaveError> {
    if dest.as_os_str().is_empty() {
        return Err(SaveError::EmptyPath);
    }

    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_dir(parent)?;
        }
    }

    let file = File::create(dest)?;
    let mut writer = BufWriter::new(file);
    pixels.write_to(&mut writer, ImageFormat::Png)?;
    Ok(())
}
