//! Night Sky
//!
//! Twinkling background stars and the shooting stars that streak across
//! them. Positions are percentages of the sky, mapped onto whatever cell
//! grid the layer currently has.

use std::time::Duration;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

use folio_core::{PortfolioView, Star};

use crate::theme;

/// Horizontal distance a shooting star covers over its lifetime, in percent
const METEOR_TRAVEL_X: f32 = 18.0;
/// Vertical distance a shooting star covers over its lifetime, in percent
const METEOR_TRAVEL_Y: f32 = 12.0;
/// Trail cells behind the head
const METEOR_TRAIL: u16 = 3;

/// Map percentages onto a cell inside `area`
pub fn percent_to_cell(area: Rect, left: f32, top: f32) -> (u16, u16) {
    let span = |pct: f32, len: u16| -> u16 {
        let max = len.saturating_sub(1) as f32;
        ((pct / 100.0).clamp(0.0, 1.0) * max).round() as u16
    };
    (area.x + span(left, area.width), area.y + span(top, area.height))
}

fn star_symbol(star: &Star) -> &'static str {
    if star.size > 2.5 {
        "✦"
    } else if star.size > 1.8 {
        "+"
    } else {
        "·"
    }
}

fn put(buf: &mut Buffer, x: u16, y: u16, symbol: &str, style: Style) {
    let area = buf.area;
    if x >= area.x && x < area.right() && y >= area.y && y < area.bottom() {
        buf.set_string(x, y, symbol, style);
    }
}

/// Paint the sky into a full-screen layer
pub fn render_sky(view: &PortfolioView, now: Duration, buf: &mut Buffer) {
    let area = buf.area;
    if area.width == 0 || area.height == 0 {
        return;
    }

    for star in view.sky().stars() {
        let (x, y) = percent_to_cell(area, star.left, star.top);
        let color = theme::fade(theme::STAR, star.brightness(now));
        put(buf, x, y, star_symbol(star), Style::default().fg(color));
    }

    let meteors = view.shooting_stars();
    for particle in meteors.particles() {
        let progress = meteors.progress(particle, now);
        let (hx, hy) = percent_to_cell(
            area,
            particle.x + METEOR_TRAVEL_X * progress,
            particle.y + METEOR_TRAVEL_Y * progress,
        );
        let opacity = 1.0 - progress;

        for i in (1..=METEOR_TRAIL).rev() {
            let trail = theme::fade(theme::METEOR, opacity * (1.0 - i as f32 / 4.0));
            if let (Some(x), Some(y)) = (hx.checked_sub(i * 2), hy.checked_sub(i)) {
                put(buf, x, y, "╲", Style::default().fg(trail));
            }
        }
        put(
            buf,
            hx,
            hy,
            "*",
            Style::default().fg(theme::fade(theme::METEOR, opacity)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_to_cell_corners() {
        let area = Rect::new(0, 0, 101, 11);
        assert_eq!(percent_to_cell(area, 0.0, 0.0), (0, 0));
        assert_eq!(percent_to_cell(area, 100.0, 100.0), (100, 10));
        assert_eq!(percent_to_cell(area, 50.0, 50.0), (50, 5));
        assert_eq!(percent_to_cell(area, 150.0, -3.0), (100, 0));
    }

    #[test]
    fn test_percent_to_cell_offset_area() {
        let area = Rect::new(4, 2, 1, 1);
        assert_eq!(percent_to_cell(area, 73.0, 12.0), (4, 2));
    }
}
