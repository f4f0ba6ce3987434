use std::path::Path;

use image::DynamicImage;
use image::imageops::FilterType;

use crate::error::IconError;

/// Open and decode the source logo.
pub fn load_source(path: &Path) -> Result<DynamicImage, IconError> {
    image::open(path).map_err(|e| IconError::ImageDecode {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Resize to an exact square with the fixed high-quality filter.
pub fn resize_square(img: &DynamicImage, size: u32) -> DynamicImage {
    img.resize_exact(size, size, FilterType::Lanczos3)
}

/// Resize and save one PNG variant.
pub fn save_resized(img: &DynamicImage, size: u32, path: &Path) -> Result<(), IconError> {
    resize_square(img, size)
        .save(path)
        .map_err(|e| IconError::ImageSave {
            path: path.to_path_buf(),
            source: e,
        })
}
