//! Project Detail Modal
//!
//! Bordered panel with the project title, an image carousel strip and the
//! scrollable description. Images are opaque URIs, so the carousel shows
//! their names with a cross-fade in brightness.

use std::time::Duration;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, StatefulWidget, Widget};
use unicode_width::UnicodeWidthStr;

use folio_core::{Carousel, PortfolioView};

use crate::theme;
use crate::widgets::text_block::{TextBlock, TextBlockState};

/// Close button drawn on the top border
pub const CLOSE_BUTTON: &str = "✕";

/// Rows above the description: image strip, indicator, gap
const HEADER_ROWS: u16 = 3;

/// Screen position of the close button for a modal placed at `bounds`
pub fn close_button_position(bounds: Rect) -> (u16, u16) {
    (bounds.x + bounds.width.saturating_sub(3), bounds.y)
}

/// Last path segment of an image URI
pub fn image_label(uri: &str) -> &str {
    uri.rsplit('/').find(|s| !s.is_empty()).unwrap_or(uri)
}

fn centered(buf: &mut Buffer, area: Rect, y: u16, text: &str, style: Style) {
    let width = text.width() as u16;
    let x = area.x + area.width.saturating_sub(width) / 2;
    buf.set_stringn(x, y, text, area.width as usize, style);
}

fn render_carousel(carousel: &Carousel, now: Duration, area: Rect, buf: &mut Buffer) {
    if area.height < 2 {
        return;
    }

    let (previous_opacity, current_opacity) = carousel.layer_opacities(now);
    let (image, opacity) = if previous_opacity > current_opacity {
        (carousel.previous_image(), previous_opacity)
    } else {
        (carousel.current_image(), current_opacity)
    };
    let Some(image) = image else {
        centered(
            buf,
            area,
            area.y,
            "no images",
            Style::default().fg(theme::DIM_GRAY),
        );
        return;
    };

    let strip = format!("◀  {}  ▶", image_label(image));
    centered(
        buf,
        area,
        area.y,
        &strip,
        Style::default().fg(theme::fade(theme::TEXT, opacity.max(0.25))),
    );

    let dots: Vec<&str> = (0..carousel.len())
        .map(|i| if i == carousel.current_index() { "●" } else { "○" })
        .collect();
    let mode = if carousel.is_auto_rotate() {
        "auto"
    } else {
        "paused"
    };
    centered(
        buf,
        area,
        area.y + 1,
        &format!("{}  {mode}", dots.join(" ")),
        Style::default().fg(theme::DIM_GRAY),
    );
}

/// Render the open modal into its layer
pub fn render_modal(
    view: &PortfolioView,
    now: Duration,
    buf: &mut Buffer,
    state: &mut TextBlockState,
) {
    let area = buf.area;
    if !view.modal().is_open() || area.width < 10 || area.height < 5 {
        return;
    }

    buf.set_style(area, Style::default().bg(theme::PANEL));

    let block = Block::bordered()
        .border_style(Style::default().fg(theme::DIM_GRAY))
        .title(format!(" {} ", view.modal().title()))
        .title_style(
            Style::default()
                .fg(theme::TEXT)
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(area).inner(ratatui::layout::Margin::new(1, 0));
    block.render(area, buf);

    let (close_x, close_y) = close_button_position(area);
    buf.set_string(
        close_x,
        close_y,
        CLOSE_BUTTON,
        Style::default().fg(theme::DIM_GRAY),
    );

    if let Some(carousel) = view.carousel() {
        render_carousel(carousel, now, inner, buf);
    }

    let text_area = Rect {
        y: inner.y + HEADER_ROWS,
        height: inner.height.saturating_sub(HEADER_ROWS),
        ..inner
    };
    TextBlock::new(&view.modal().body().paragraphs)
        .style(Style::default().fg(theme::BODY))
        .lead_style(Style::default().fg(theme::ACCENT))
        .render(text_area, buf, state);
}
