use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::IconError;
use crate::sizes::ICO_SIZES;
use crate::utils::resize::{load_source, resize_square};

/// Build the multi-resolution Windows ICO container.
///
/// All six resolutions are encoded into one directory, smallest first, and
/// the container is written in a single call.
pub fn run(source: &Path, output: &Path) -> Result<(), IconError> {
    let img = load_source(source)?;

    let mut icon_dir = ico::IconDir::new(ico::ResourceType::Icon);
    for size in ICO_SIZES {
        let rgba = resize_square(&img, size).to_rgba8();
        let icon_image = ico::IconImage::from_rgba_data(size, size, rgba.into_raw());
        let entry = ico::IconDirEntry::encode(&icon_image)
            .map_err(|e| IconError::IcoEncode { size, source: e })?;
        icon_dir.add_entry(entry);
    }

    let file = File::create(output).map_err(|e| IconError::IcoWrite {
        path: output.to_path_buf(),
        source: e,
    })?;
    icon_dir
        .write(BufWriter::new(file))
        .map_err(|e| IconError::IcoWrite {
            path: output.to_path_buf(),
            source: e,
        })?;

    println!("Created {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgba, RgbaImage};
    use std::fs;
    use tempfile::TempDir;

    fn write_logo(dir: &TempDir) -> std::path::PathBuf {
        let path = dir.path().join("logo.png");
        let logo =
            DynamicImage::ImageRgba8(RgbaImage::from_pixel(300, 300, Rgba([10, 200, 80, 255])));
        logo.save(&path).unwrap();
        path
    }

    #[test]
    fn embeds_all_six_resolutions_smallest_first() {
        let dir = TempDir::new().unwrap();
        let source = write_logo(&dir);
        let output = dir.path().join("app.ico");

        run(&source, &output).unwrap();

        let file = File::open(&output).unwrap();
        let icon_dir = ico::IconDir::read(file).unwrap();
        assert_eq!(icon_dir.entries().len(), ICO_SIZES.len());
        for (entry, size) in icon_dir.entries().iter().zip(ICO_SIZES) {
            assert_eq!(entry.width(), size);
            assert_eq!(entry.height(), size);
        }
    }

    #[test]
    fn undecodable_source_returns_error() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("logo.png");
        fs::write(&source, b"garbage").unwrap();
        let output = dir.path().join("app.ico");

        let result = run(&source, &output);

        assert!(matches!(result, Err(IconError::ImageDecode { .. })));
        assert!(!output.exists());
    }

    #[test]
    fn missing_output_directory_returns_error() {
        let dir = TempDir::new().unwrap();
        let source = write_logo(&dir);
        let output = dir.path().join("missing").join("app.ico");

        let result = run(&source, &output);

        assert!(matches!(result, Err(IconError::IcoWrite { .. })));
    }
}
