//! Generator configuration and the fixed constants behind the status icons.

use crate::error::{Error, Result};
use image::Rgba;
use std::{fmt, path::PathBuf, str::FromStr};

/// Mix ratio between the color icon and its grayscale copy.
pub const GRAY_BLEND_RATIO: f32 = 0.5;

/// The status dot is `size / DOT_DIAMETER_DIVISOR` pixels across.
pub const DOT_DIAMETER_DIVISOR: u32 = 4;

/// Distance in pixels between the dot and the bottom/right edges.
pub const DOT_INSET: u32 = 2;

/// The dot outline is `max(1, size / OUTLINE_WIDTH_DIVISOR)` pixels wide.
pub const OUTLINE_WIDTH_DIVISOR: u32 = 32;

pub const OUTLINE_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Foreign language detected.
pub const RED: Rgba<u8> = Rgba([220, 50, 50, 255]);

/// Page translated.
pub const GREEN: Rgba<u8> = Rgba([50, 180, 50, 255]);

pub const DEFAULT_SIZES: [u32; 3] = [16, 48, 128];

pub const DEFAULT_INPUT: &str = "Translator.ico";

pub const MANIFEST_FILE: &str = "icons.json";

/// One of the three visual treatments applied to the base icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variant {
    Gray,
    Red,
    Green,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Gray, Variant::Red, Variant::Green];

    /// Token used in file names and in the status manifest.
    pub fn name(self) -> &'static str {
        match self {
            Variant::Gray => "gray",
            Variant::Red => "red",
            Variant::Green => "green",
        }
    }

    pub fn file_name(self, size: u32) -> String {
        format!("icon-{}-{size}.png", self.name())
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single (variant, size, filename) job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantSpec {
    pub variant: Variant,
    pub size: u32,
    pub file_name: String,
}

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub sizes: Vec<u32>,
    pub red: Rgba<u8>,
    pub green: Rgba<u8>,
    pub blend_ratio: f32,
    pub write_manifest: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from("."),
            sizes: DEFAULT_SIZES.to_vec(),
            red: RED,
            green: GREEN,
            blend_ratio: GRAY_BLEND_RATIO,
            write_manifest: true,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(Error::InvalidConfig {
                reason: "at least one icon size is required".to_string(),
            });
        }
        if let Some(size) = self.sizes.iter().find(|&&s| s == 0) {
            return Err(Error::InvalidConfig {
                reason: format!("icon size must be positive, got {size}"),
            });
        }
        if !(0.0..=1.0).contains(&self.blend_ratio) {
            return Err(Error::InvalidConfig {
                reason: format!("blend ratio must be within [0, 1], got {}", self.blend_ratio),
            });
        }
        Ok(())
    }

    /// Dot color for a dot variant, `None` for gray.
    pub fn dot_color(&self, variant: Variant) -> Option<Rgba<u8>> {
        match variant {
            Variant::Gray => None,
            Variant::Red => Some(self.red),
            Variant::Green => Some(self.green),
        }
    }

    /// Every variant at every size, variants outermost.
    pub fn plan(&self) -> Vec<VariantSpec> {
        Variant::ALL
            .iter()
            .flat_map(|&variant| {
                self.sizes.iter().map(move |&size| VariantSpec {
                    variant,
                    size,
                    file_name: variant.file_name(size),
                })
            })
            .collect()
    }
}

/// Parse a CSS color string into an opaque RGBA pixel.
pub fn parse_color(name: &str, value: &str) -> Result<Rgba<u8>> {
    let color = css_color::Srgb::from_str(value).map_err(|_| Error::InvalidColor {
        name: name.to_string(),
        value: value.to_string(),
    })?;

    Ok(Rgba([
        (color.red * 255.).round() as u8,
        (color.green * 255.).round() as u8,
        (color.blue * 255.).round() as u8,
        255,
    ]))
}
