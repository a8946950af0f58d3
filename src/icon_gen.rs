use crate::config::{GeneratorConfig, Variant, VariantSpec, MANIFEST_FILE};
use crate::error::{Error, Result};
use crate::manifest::StatusManifest;
use crate::variant::{produce_dot_variant, produce_gray_variant};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, DynamicImage, ImageEncoder, RgbaImage,
};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Files produced by one run, in generation order.
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub icons: Vec<PathBuf>,
    pub manifest: Option<PathBuf>,
}

pub fn generate_icons(config: &GeneratorConfig) -> Result<GenerationReport> {
    config.validate()?;

    // Load source image
    let source = load_image(&config.input)?;

    // Ensure the output directory exists
    std::fs::create_dir_all(&config.output)
        .map_err(|source| Error::from_write(&config.output, source))?;

    let plan = config.plan();
    let mut report = GenerationReport::default();

    for variant in Variant::ALL {
        println!("Generating {variant} icons...");
        for spec in plan.iter().filter(|spec| spec.variant == variant) {
            let path = generate_variant(&source, spec, config)?;
            println!("  ✓ Generated {}", spec.file_name);
            report.icons.push(path);
        }
    }

    if config.write_manifest {
        let manifest_path = config.output.join(MANIFEST_FILE);
        StatusManifest::from_specs(&plan).write_to_file(&manifest_path)?;
        println!("✓ Generated {MANIFEST_FILE}");
        report.manifest = Some(manifest_path);
    }

    println!(
        "\nAll {} status icons created in {}",
        report.icons.len(),
        config.output.display()
    );
    for variant in Variant::ALL {
        let treatment = match config.dot_color(variant) {
            Some(_) => "status dot",
            None => "grayscale blend",
        };
        println!("  {variant}: {treatment}");
    }

    Ok(report)
}

/// Render one (variant, size) pair and write it into the output directory.
pub fn generate_variant(
    source: &DynamicImage,
    spec: &VariantSpec,
    config: &GeneratorConfig,
) -> Result<PathBuf> {
    let image = render_variant(source, spec.variant, spec.size, config);
    let output_path = config.output.join(&spec.file_name);
    save_png(&image, &output_path)?;
    Ok(output_path)
}

pub fn render_variant(
    source: &DynamicImage,
    variant: Variant,
    size: u32,
    config: &GeneratorConfig,
) -> RgbaImage {
    match config.dot_color(variant) {
        Some(color) => produce_dot_variant(source, size, color),
        None => produce_gray_variant(source, size, config.blend_ratio),
    }
}

pub fn load_image(path: &Path) -> Result<DynamicImage> {
    if !path.exists() {
        return Err(Error::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    image::open(path).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `image` as an RGBA PNG, replacing whatever is at `path`.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| Error::from_write(path, source))?;
    let mut out_file = BufWriter::new(file);

    write_png(image, &mut out_file).map_err(|source| Error::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    out_file
        .flush()
        .map_err(|source| Error::from_write(path, source))?;
    Ok(())
}

// Encode image data as PNG with compression
fn write_png<W: Write>(image: &RgbaImage, w: W) -> image::ImageResult<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgba8)
}
