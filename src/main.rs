use anyhow::{Context, Result};
use clap::Parser;
use status_icons::config::{parse_color, GeneratorConfig, DEFAULT_INPUT};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "status-icons",
    about = "Generate gray/red/green status icons from a single base icon"
)]
struct Args {
    /// Path to the base icon (ICO, PNG, or any format the image crate decodes).
    #[clap(value_name = "INPUT", default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = ".")]
    output: PathBuf,

    /// Icon sizes to generate for every variant.
    #[clap(
        short,
        long,
        value_delimiter = ',',
        value_name = "SIZES",
        default_value = "16,48,128"
    )]
    sizes: Vec<u32>,

    /// Dot color for the red variant (CSS color format)
    #[clap(long, default_value = "#dc3232")]
    red_color: String,

    /// Dot color for the green variant (CSS color format)
    #[clap(long, default_value = "#32b432")]
    green_color: String,

    /// Skip writing icons.json
    #[clap(long)]
    no_manifest: bool,
}

impl Args {
    fn into_config(self) -> Result<GeneratorConfig> {
        Ok(GeneratorConfig {
            red: parse_color("red", &self.red_color)?,
            green: parse_color("green", &self.green_color)?,
            input: self.input,
            output: self.output,
            sizes: self.sizes,
            write_manifest: !self.no_manifest,
            ..Default::default()
        })
    }
}

fn main() -> Result<()> {
    let config = Args::parse().into_config()?;

    status_icons::generate_icons(&config)
        .with_context(|| format!("Failed to generate icons from {}", config.input.display()))?;
    Ok(())
}
