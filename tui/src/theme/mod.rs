//! Theme and Colors
//!
//! Night-sky palette: deep navy background, a single electric-blue accent,
//! soft grays for body copy.

use ratatui::style::Color;

// ============================================================================
// Sky
// ============================================================================

/// Page background
pub const NIGHT: Color = Color::Rgb(5, 8, 22);

/// Modal panel background
pub const PANEL: Color = Color::Rgb(13, 20, 31);

/// Brightest star
pub const STAR: Color = Color::Rgb(235, 240, 255);

/// Shooting star head
pub const METEOR: Color = Color::Rgb(200, 230, 255);

// ============================================================================
// UI Colors
// ============================================================================

/// Accent for the name, selection and the terminal prompt
pub const ACCENT: Color = Color::Rgb(78, 170, 255);

/// Headings
pub const TEXT: Color = Color::Rgb(240, 240, 245);

/// Body copy
pub const BODY: Color = Color::Rgb(200, 204, 212);

/// Secondary text, hints, borders
pub const DIM_GRAY: Color = Color::Rgb(110, 115, 130);

/// Hijack warning
pub const WARNING_AMBER: Color = Color::Rgb(255, 190, 90);

/// Scale a color towards the background by `opacity` in `[0, 1]`
pub fn fade(color: Color, opacity: f32) -> Color {
    let (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) = (color, NIGHT) else {
        return color;
    };
    let t = opacity.clamp(0.0, 1.0);
    let mix = |c: u8, base: u8| (base as f32 + (c as f32 - base as f32) * t).round() as u8;
    Color::Rgb(mix(r, br), mix(g, bg), mix(b, bb))
}
