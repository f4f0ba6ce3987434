use std::path::Path;

use image::DynamicImage;

use crate::error::IconError;
use crate::sizes::BRANDING_SIZES;
use crate::utils::resize::save_resized;

/// Write the plain `default{N}.png` size set into the branding directory.
///
/// The first resize or save failure aborts the batch; anything already
/// written stays on disk.
pub fn run(img: &DynamicImage, out_dir: &Path) -> Result<(), IconError> {
    for size in BRANDING_SIZES {
        let path = out_dir.join(format!("default{}.png", size));
        save_resized(img, size, &path)?;
        println!("Created {}", path.display());
    }
    Ok(())
}
