/// Pixel sizes for the plain `default{N}.png` branding exports.
pub const BRANDING_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];

/// Members of a macOS iconset directory, in the order iconutil lists them.
///
/// Each entry pairs the actual pixel dimension with the filename iconutil
/// requires. The `@2x` variants are double-density, so a 32px image backs
/// `icon_16x16@2x.png`.
pub const ICONSET_SIZES: [(u32, &str); 10] = [
    (16, "icon_16x16.png"),
    (32, "icon_16x16@2x.png"),
    (32, "icon_32x32.png"),
    (64, "icon_32x32@2x.png"),
    (128, "icon_128x128.png"),
    (256, "icon_128x128@2x.png"),
    (256, "icon_256x256.png"),
    (512, "icon_256x256@2x.png"),
    (512, "icon_512x512.png"),
    (1024, "icon_512x512@2x.png"),
];

/// Resolutions embedded in the Windows ICO container, smallest first.
pub const ICO_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];
