use ratatui::style::Color;

// Accent colors
pub const ACCENT_BLUE: Color = Color::Rgb(124, 175, 194);     // #7CAFC2

// UI colors
pub const TEXT_DIM: Color = Color::Rgb(136, 136, 136);        // #888888
pub const TEXT_WHITE: Color = Color::Rgb(255, 255, 255);      // #FFFFFF
pub const SURFACE_BG: Color = Color::Rgb(24, 24, 24);         // #181818
pub const DIVIDER: Color = Color::Rgb(88, 88, 88);            // #585858

/// Opacity of the edge fade at the very top and bottom row
pub const FADE_ALPHA: f32 = 0.9;

/// Linear blend from `from` to `to`; `t` is clamped to 0..=1.
///
/// Non-RGB colors cannot be interpolated and switch at the midpoint.
pub fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}

/// Fade overlay opacity for a row of a column `height` rows tall.
///
/// Vertical gradient with stops (FADE_ALPHA, 0, 0, FADE_ALPHA) spread evenly
/// over the column, sampled at the row's midpoint.
pub fn fade_alpha(row: u16, height: u16) -> f32 {
    if height == 0 {
        return 0.0;
    }
    let t = (row as f32 + 0.5) / height as f32;
    if t < 1.0 / 3.0 {
        FADE_ALPHA * (1.0 - 3.0 * t)
    } else if t > 2.0 / 3.0 {
        FADE_ALPHA * (3.0 * t - 2.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        assert_eq!(blend(TEXT_DIM, TEXT_WHITE, 0.0), TEXT_DIM);
        assert_eq!(blend(TEXT_DIM, TEXT_WHITE, 1.0), TEXT_WHITE);
        assert_eq!(blend(Color::Rgb(0, 0, 0), Color::Rgb(200, 100, 50), 0.5), Color::Rgb(100, 50, 25));
        assert_eq!(blend(Color::Red, Color::Blue, 0.7), Color::Blue);
    }

    #[test]
    fn test_fade_is_symmetric_and_clear_in_middle() {
        let height = 9;
        assert!(fade_alpha(0, height) > 0.7);
        assert_eq!(fade_alpha(4, height), 0.0);
        assert!((fade_alpha(0, height) - fade_alpha(8, height)).abs() < 1e-5);
        assert!(fade_alpha(1, height) < fade_alpha(0, height));
    }
}
