use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::{DynamicImage, ImageError, ImageFormat};
use thiserror::Error;

/// Square edge lengths written on every run, in this order.
pub const ICON_SIZES: [u32; 2] = [192, 512];

#[derive(Debug, Error)]
pub enum IconError {
    #[error("Source file not found at {}", .0.display())]
    MissingSource(PathBuf),
    #[error(transparent)]
    Processing(#[from] ImageError),
}

/// One icon file that was written to the destination directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub size: u32,
    pub path: PathBuf,
}

impl GeneratedIcon {
    pub fn file_name(&self) -> String {
        icon_file_name(self.size)
    }
}

pub fn icon_file_name(size: u32) -> String {
    format!("icon-{}x{}.png", size, size)
}

/// Resize `source` into every entry of [`ICON_SIZES`] and save the results as
/// PNG files in `dest_dir`.
///
/// `dest_dir` has to exist already. Existing icons are overwritten. `on_saved`
/// runs right after each file hits the disk, so a failure on the second size
/// still leaves the first one reported and in place.
pub fn run<F>(
    source: &Path,
    dest_dir: &Path,
    mut on_saved: F,
) -> Result<Vec<GeneratedIcon>, IconError>
where
    F: FnMut(&GeneratedIcon),
{
    if !source.exists() {
        return Err(IconError::MissingSource(source.to_path_buf()));
    }

    let img = load_source(source)?;
    let mut written = Vec::with_capacity(ICON_SIZES.len());
    for size in ICON_SIZES {
        let icon = save_icon(&img, size, dest_dir)?;
        on_saved(&icon);
        written.push(icon);
    }
    Ok(written)
}

/// Decode the source, guessing the format from its content rather than the
/// file extension. The file handle is closed once decoding returns.
fn load_source(source: &Path) -> Result<DynamicImage, ImageError> {
    let reader = image::io::Reader::open(source)
        .and_then(|r| r.with_guessed_format())
        .map_err(ImageError::IoError)?;
    reader.decode()
}

fn save_icon(
    img: &DynamicImage,
    size: u32,
    dest_dir: &Path,
) -> Result<GeneratedIcon, ImageError> {
    // Forced to a square; non-square sources get stretched, never cropped.
    let resized = img.resize_exact(size, size, FilterType::Lanczos3);
    let path = dest_dir.join(icon_file_name(size));
    resized.save_with_format(&path, ImageFormat::Png)?;
    Ok(GeneratedIcon { size, path })
}
