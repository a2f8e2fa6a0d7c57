use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Fixed accents
// ---------------------------------------------------------------------------

pub const ORANGE: Color32 = Color32::from_rgb(0xF9, 0xA8, 0x25);
pub const DARK_GREY: Color32 = Color32::from_rgb(0x3A, 0x3A, 0x3A);
pub const GREY: Color32 = Color32::from_rgb(0x9E, 0x9E, 0x9E);

/// Badge backgrounds on list cards: colour, sex, age.
pub const BADGE_COLOR: Color32 = Color32::from_rgb(0xE5, 0x73, 0x73);
pub const BADGE_SEX: Color32 = Color32::from_rgb(0x4D, 0xD0, 0xE1);
pub const BADGE_AGE: Color32 = Color32::from_rgb(0xFF, 0xD5, 0x4F);

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.65, 0.80);
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
// Breed → chip colour
// ---------------------------------------------------------------------------

/// Gives every breed in the catalog its own chip colour.
#[derive(Debug, Clone)]
pub struct BreedColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl BreedColors {
    pub fn new(breeds: &BTreeSet<String>) -> Self {
        let mapping = breeds
            .iter()
            .cloned()
            .zip(generate_palette(breeds.len()))
            .collect();

        BreedColors {
            mapping,
            default_color: Color32::WHITE,
        }
    }

    pub fn color_for(&self, breed: &str) -> Color32 {
        self.mapping
            .get(breed)
            .copied()
            .unwrap_or(self.default_color)
    }
}
