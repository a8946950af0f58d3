use anyhow::{Context, Result};
use status_icons::variant::DotGeometry;

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "icon-red-128.png".to_string());

    let img = image::open(&path)
        .with_context(|| format!("Failed to open {path}"))?
        .to_rgba8();
    let (width, height) = img.dimensions();

    println!("Checking status dot in: {}", path);
    println!("Image dimensions: {}x{}", width, height);

    let Some(dot) = DotGeometry::for_size(width.min(height)) else {
        println!("⚠ Icon is too small to carry a status dot");
        return Ok(());
    };

    println!(
        "Expected dot area: x={}..={}, y={}..={} (outline {}px)",
        dot.x0, dot.x1, dot.y0, dot.y1, dot.outline_width
    );

    let (cx, cy) = dot.center();
    let pixel = img.get_pixel(cx, cy);
    println!("\nCenter pixel of dot (x={}, y={}):", cx, cy);
    println!("  RGBA: [{}, {}, {}, {}]", pixel[0], pixel[1], pixel[2], pixel[3]);

    let [r, g, b, _] = pixel.0;
    if r > 100 && r > g && r > b {
        println!("✓ Red status dot detected");
    } else if g > 100 && g > r && g > b {
        println!("✓ Green status dot detected");
    } else {
        println!("⚠ No red or green status dot at the expected position");
    }

    Ok(())
}
