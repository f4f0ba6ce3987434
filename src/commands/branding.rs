use std::fs;
use std::path::Path;

use crate::commands::{export_set, icns_create, ico_create};
use crate::error::IconError;
use crate::utils::resize::load_source;

/// Regenerate the full branding icon set from the source logo.
///
/// Linear gate sequence: source must exist, then decode, then the plain PNG
/// set, then the macOS bundle, then the Windows icon. Each failure stops the
/// run; files already written stay on disk.
pub fn run(source: &Path, out_dir: &Path, stem: &str) -> Result<(), IconError> {
    if !source.exists() {
        return Err(IconError::SourceMissing(source.to_path_buf()));
    }

    let img = load_source(source)?;

    fs::create_dir_all(out_dir).map_err(|e| IconError::DirCreation {
        path: out_dir.to_path_buf(),
        source: e,
    })?;

    export_set::run(&img, out_dir)?;
    icns_create::run(source, &out_dir.join(format!("{}.icns", stem)))?;
    ico_create::run(source, &out_dir.join(format!("{}.ico", stem)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sizes::BRANDING_SIZES;
    use image::{DynamicImage, Rgba, RgbaImage};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_logo(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("logo.png");
        let logo =
            DynamicImage::ImageRgba8(RgbaImage::from_pixel(512, 512, Rgba([240, 170, 0, 255])));
        logo.save(&path).unwrap();
        path
    }

    #[test]
    fn missing_source_fails_before_creating_output() {
        let dir = TempDir::new().unwrap();
        let out_dir = dir.path().join("branding");

        let result = run(&dir.path().join("nope.png"), &out_dir, "app");

        assert!(matches!(result, Err(IconError::SourceMissing(_))));
        assert!(!out_dir.exists());
    }

    #[test]
    fn undecodable_source_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("logo.png");
        fs::write(&source, b"not an image").unwrap();
        let out_dir = dir.path().join("branding");

        let result = run(&source, &out_dir, "app");

        assert!(matches!(result, Err(IconError::ImageDecode { .. })));
        assert!(!out_dir.exists());
    }

    #[test]
    fn creates_output_directory_if_absent() {
        let dir = TempDir::new().unwrap();
        let source = write_logo(&dir);
        let out_dir = dir.path().join("browser").join("branding").join("app");

        run(&source, &out_dir, "app").unwrap();

        assert!(out_dir.is_dir());
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn full_run_produces_png_set_and_ico() {
        let dir = TempDir::new().unwrap();
        let source = write_logo(&dir);
        let out_dir = dir.path().join("branding");

        run(&source, &out_dir, "app").unwrap();

        for size in BRANDING_SIZES {
            assert!(out_dir.join(format!("default{}.png", size)).is_file());
        }
        assert!(out_dir.join("app.ico").is_file());
        // Off macOS: no bundle, and the staging dir must be gone
        assert!(!out_dir.join("app.icns").exists());
        assert!(!out_dir.join("app.iconset").exists());
    }
}
