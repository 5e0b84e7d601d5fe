// src/utilities/color.rs

use nannou::prelude::*;

/// Parses `"808080"`, `"#808080"` or `"808080ff"` into a colour.
pub fn parse_hex_color(hex: &str) -> Option<Rgba> {
    let digits = hex.trim().trim_start_matches('#');
    if !matches!(digits.len(), 6 | 8) || !digits.is_ascii() {
        return None;
    }

    let channel = |index: usize| -> Option<f32> {
        u8::from_str_radix(&digits[index..index + 2], 16)
            .ok()
            .map(|value| value as f32 / 255.0)
    };

    let alpha = if digits.len() == 8 { channel(6)? } else { 1.0 };
    Some(rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
}

pub fn lerp_color(start: Rgba, end: Rgba, t: f32) -> Rgba {
    rgba(
        start.red + (end.red - start.red) * t,
        start.green + (end.green - start.green) * t,
        start.blue + (end.blue - start.blue) * t,
        start.alpha + (end.alpha - start.alpha) * t,
    )
}
