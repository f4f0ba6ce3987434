//! macOS .icns bundle builder.
//!
//! Stages the ten iconset members next to the output path and packages them
//! with iconutil. Off macOS the packaging step is skipped; the staged PNGs
//! alone count as success.

use std::path::Path;
use std::process::Command;

use image::DynamicImage;

use crate::error::IconError;
use crate::sizes::ICONSET_SIZES;
use crate::staging::StagingDir;
use crate::utils::resize::{load_source, save_resized};

/// How far the bundle build got. Packaging only happens on macOS.
#[derive(Debug, PartialEq, Eq)]
pub enum IcnsOutcome {
    /// iconutil produced the .icns file
    Packaged,
    /// Iconset PNGs were generated but packaging was skipped (non-macOS)
    StagedOnly,
}

pub fn run(source: &Path, output: &Path) -> Result<IcnsOutcome, IconError> {
    let staging_path = output.with_extension("iconset");
    let staging = StagingDir::create(staging_path.clone()).map_err(|e| IconError::DirCreation {
        path: staging_path,
        source: e,
    })?;

    let img = load_source(source)?;
    stage_iconset(&img, staging.path())?;

    if !cfg!(target_os = "macos") {
        println!("Skipped iconutil packaging for {} (requires macOS)", output.display());
        return Ok(IcnsOutcome::StagedOnly);
    }

    let status = Command::new("iconutil")
        .args(["-c", "icns"])
        .arg(staging.path())
        .arg("-o")
        .arg(output)
        .status()
        .map_err(IconError::IconUtilLaunch)?;

    if !status.success() {
        return Err(IconError::IconUtilFailed {
            exit_code: status.code(),
        });
    }

    println!("Created {}", output.display());
    Ok(IcnsOutcome::Packaged)
}

/// Write the ten iconset members iconutil requires into `dir`.
pub fn stage_iconset(img: &DynamicImage, dir: &Path) -> Result<(), IconError> {
    for (size, filename) in ICONSET_SIZES {
        save_resized(img, size, &dir.join(filename))?;
        println!("Generated {} ({}x{})", filename, size, size);
    }
    Ok(())
}
