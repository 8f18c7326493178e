use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

/// Bar colour of the chipset ranking.
pub const CHIPSET_BAR: Color32 = Color32::from_rgb(0, 255, 255);

/// Colour of the density overlay.
pub const DENSITY_LINE: Color32 = Color32::from_rgb(40, 40, 40);

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.65, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Brand → colour
// ---------------------------------------------------------------------------

/// One colour per brand for the stacked screen-size histogram.
#[derive(Debug, Clone)]
pub struct BrandColors {
    mapping: BTreeMap<String, Color32>,
}

impl BrandColors {
    pub fn new<'a>(brands: impl IntoIterator<Item = &'a str>) -> Self {
        let brands: Vec<&str> = brands.into_iter().collect();
        let mapping = brands
            .iter()
            .zip(generate_palette(brands.len()))
            .map(|(b, c)| (b.to_string(), c))
            .collect();
        BrandColors { mapping }
    }

    pub fn color_for(&self, brand: &str) -> Color32 {
        self.mapping.get(brand).copied().unwrap_or(Color32::GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_distinct_colours() {
        let p = generate_palette(6);
        assert_eq!(p.len(), 6);
        for (i, a) in p.iter().enumerate() {
            for b in &p[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn unknown_brand_is_gray() {
        let colors = BrandColors::new(["Apple", "Samsung"]);
        assert_ne!(colors.color_for("Apple"), colors.color_for("Samsung"));
        assert_eq!(colors.color_for("Nokia"), Color32::GRAY);
    }
}
