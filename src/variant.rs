use crate::config::{
    DOT_DIAMETER_DIVISOR, DOT_INSET, OUTLINE_COLOR, OUTLINE_WIDTH_DIVISOR,
};
use image::{imageops::FilterType, DynamicImage, Rgba, RgbaImage};

/// Resize the base icon to `size`×`size` and make sure it carries alpha.
pub fn resize_base(base: &DynamicImage, size: u32) -> RgbaImage {
    base.resize_exact(size, size, FilterType::Lanczos3).to_rgba8()
}

/// "Inactive" icon: the resized base blended with its own grayscale copy.
///
/// The grayscale layer is fully opaque and alpha is blended like the color
/// channels, so transparent regions come out partially opaque.
pub fn produce_gray_variant(base: &DynamicImage, size: u32, ratio: f32) -> RgbaImage {
    let mut img = resize_base(base, size);

    for pixel in img.pixels_mut() {
        let Rgba([r, g, b, a]) = *pixel;
        let l = luma(r, g, b);
        *pixel = Rgba([
            mix(r, l, ratio),
            mix(g, l, ratio),
            mix(b, l, ratio),
            mix(a, 255, ratio),
        ]);
    }

    img
}

/// Status icon: the resized base with a colored dot in the bottom-right corner.
pub fn produce_dot_variant(base: &DynamicImage, size: u32, color: Rgba<u8>) -> RgbaImage {
    let mut img = resize_base(base, size);
    draw_status_dot(&mut img, color);
    img
}

/// ITU-R 601-2 luma, rounded.
fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * 299 + g as u32 * 587 + b as u32 * 114 + 500) / 1000) as u8
}

/// Linear blend, truncated towards zero.
fn mix(from: u8, to: u8, ratio: f32) -> u8 {
    let value = from as f32 + (to as f32 - from as f32) * ratio;
    value.clamp(0.0, 255.0) as u8
}

/// Placement of the status dot inside a square icon.
///
/// `x0..=x1` and `y0..=y1` form an inclusive bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DotGeometry {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
    pub outline_width: u32,
}

impl DotGeometry {
    /// `None` when the icon is too small for a dot.
    pub fn for_size(size: u32) -> Option<Self> {
        let diameter = size / DOT_DIAMETER_DIVISOR;
        if diameter == 0 {
            return None;
        }

        let origin = size.saturating_sub(diameter + DOT_INSET);
        Some(Self {
            x0: origin,
            y0: origin,
            x1: origin + diameter,
            y1: origin + diameter,
            outline_width: (size / OUTLINE_WIDTH_DIVISOR).max(1),
        })
    }

    pub fn diameter(&self) -> u32 {
        self.x1 - self.x0
    }

    /// The pixel at the middle of the dot.
    pub fn center(&self) -> (u32, u32) {
        let half = self.diameter() / 2;
        (self.x0 + half, self.y0 + half)
    }
}

/// Paint a filled circle with a white outline. Pixels are replaced, not blended.
pub fn draw_status_dot(img: &mut RgbaImage, color: Rgba<u8>) {
    let size = img.width().min(img.height());
    let Some(dot) = DotGeometry::for_size(size) else {
        return;
    };

    // Work in continuous coordinates where pixel i covers [i, i + 1).
    let radius = (dot.diameter() + 1) as f32 / 2.0;
    let inner_radius = radius - dot.outline_width as f32;
    let center_x = dot.x0 as f32 + radius;
    let center_y = dot.y0 as f32 + radius;

    for y in dot.y0..=dot.y1.min(img.height() - 1) {
        for x in dot.x0..=dot.x1.min(img.width() - 1) {
            let dx = x as f32 + 0.5 - center_x;
            let dy = y as f32 + 0.5 - center_y;
            let distance = (dx * dx + dy * dy).sqrt();

            if distance > radius {
                continue;
            }

            let paint = if inner_radius > 0.0 && distance <= inner_radius {
                color
            } else {
                OUTLINE_COLOR
            };
            img.put_pixel(x, y, paint);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GRAY_BLEND_RATIO, RED};
    use image::{ImageBuffer, Rgb};

    fn solid(size: u32, color: Rgba<u8>) -> DynamicImage {
        DynamicImage::ImageRgba8(ImageBuffer::from_fn(size, size, |_, _| color))
    }

    #[test]
    fn test_dot_geometry_per_size() {
        let dot = DotGeometry::for_size(16).unwrap();
        assert_eq!((dot.x0, dot.x1, dot.outline_width), (10, 14, 1));

        let dot = DotGeometry::for_size(48).unwrap();
        assert_eq!((dot.x0, dot.x1, dot.outline_width), (34, 46, 1));

        let dot = DotGeometry::for_size(128).unwrap();
        assert_eq!((dot.x0, dot.x1, dot.outline_width), (94, 126, 4));
        assert_eq!(dot.center(), (110, 110));
    }

    #[test]
    fn test_tiny_icons_get_no_dot() {
        assert!(DotGeometry::for_size(3).is_none());

        let base = solid(64, Rgba([10, 20, 30, 255]));
        let img = produce_dot_variant(&base, 3, RED);
        assert_eq!(img.dimensions(), (3, 3));
        assert!(img.pixels().all(|p| *p == Rgba([10, 20, 30, 255])));
    }

    #[test]
    fn test_dot_has_fill_and_white_outline() {
        let base = solid(256, Rgba([0, 0, 255, 255]));
        let img = produce_dot_variant(&base, 48, RED);
        let dot = DotGeometry::for_size(48).unwrap();

        let (cx, cy) = dot.center();
        assert_eq!(*img.get_pixel(cx, cy), RED);
        // Leftmost point of the circle sits on the outline.
        assert_eq!(*img.get_pixel(dot.x0, cy), OUTLINE_COLOR);
        // Bounding box corners are outside the circle.
        assert_eq!(*img.get_pixel(dot.x0, dot.y0), Rgba([0, 0, 255, 255]));
        // Top-left of the icon is untouched.
        assert_eq!(*img.get_pixel(0, 0), Rgba([0, 0, 255, 255]));
    }

    #[test]
    fn test_wide_outline_at_128() {
        let base = solid(256, Rgba([0, 0, 255, 255]));
        let img = produce_dot_variant(&base, 128, RED);
        let dot = DotGeometry::for_size(128).unwrap();
        let (_, cy) = dot.center();

        for x in 94..=97 {
            assert_eq!(*img.get_pixel(x, cy), OUTLINE_COLOR, "x = {x}");
        }
        assert_eq!(*img.get_pixel(98, cy), RED);
        assert_eq!(*img.get_pixel(dot.x0, dot.y0), Rgba([0, 0, 255, 255]));
    }

    #[test]
    fn test_gray_blend_halves_towards_luma() {
        let base = solid(32, Rgba([200, 100, 0, 128]));
        let img = produce_gray_variant(&base, 16, GRAY_BLEND_RATIO);

        // luma = (200*299 + 100*587 + 500) / 1000 = 119
        assert_eq!(*img.get_pixel(8, 8), Rgba([159, 109, 59, 191]));
    }

    #[test]
    fn test_gray_blend_lifts_transparent_pixels_to_half_alpha() {
        let base = ImageBuffer::from_fn(64, 64, |x, y| {
            if x < 16 && y < 16 {
                Rgba([0, 0, 0, 0])
            } else {
                Rgba([200, 100, 0, 255])
            }
        });
        let img = produce_gray_variant(&DynamicImage::ImageRgba8(base), 64, GRAY_BLEND_RATIO);

        assert_eq!(*img.get_pixel(2, 2), Rgba([0, 0, 0, 127]));
        assert_eq!(*img.get_pixel(40, 40), Rgba([159, 109, 59, 255]));
    }

    #[test]
    fn test_gray_variant_of_rgb_base_is_opaque_rgba() {
        let rgb = ImageBuffer::from_fn(40, 40, |x, _| Rgb([x as u8 * 6, 80, 160]));
        let img = produce_gray_variant(&DynamicImage::ImageRgb8(rgb), 16, GRAY_BLEND_RATIO);

        assert_eq!(img.dimensions(), (16, 16));
        assert!(img.pixels().all(|p| p[3] == 255));
    }

    #[test]
    fn test_ratio_bounds() {
        let base = solid(16, Rgba([200, 100, 0, 255]));
        assert_eq!(*produce_gray_variant(&base, 16, 0.0).get_pixel(0, 0), Rgba([200, 100, 0, 255]));
        assert_eq!(*produce_gray_variant(&base, 16, 1.0).get_pixel(0, 0), Rgba([119, 119, 119, 255]));
    }
}
