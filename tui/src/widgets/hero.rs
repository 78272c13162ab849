//! Hero Section
//!
//! The name card and the little terminal underneath it. While booting the
//! terminal shows the boot script; afterwards it shows the rotating typer,
//! or whatever the visitor is typing when they have taken it over.

use std::time::Duration;

use ratatui::buffer::Buffer;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Widget};
use unicode_width::UnicodeWidthStr;

use folio_core::{AnimationPhase, PortfolioView};

use crate::theme;

/// Terminal window title
pub const TERMINAL_TITLE: &str = " ~/portfolio ";

/// Cursor drawn after the typing line
pub const CURSOR: &str = "▌";

/// Cursor blink half-period
const BLINK: Duration = Duration::from_millis(500);

/// Rows the terminal needs: history, typing line, warning line and borders
pub fn terminal_height(view: &PortfolioView) -> u16 {
    u16::try_from(view.config().hero.boot_lines.len())
        .unwrap_or(u16::MAX)
        .saturating_add(4)
}

fn centered(buf: &mut Buffer, y: u16, text: &str, style: Style) {
    let area = buf.area;
    if y >= area.bottom() {
        return;
    }
    let width = text.width() as u16;
    let x = area.x + area.width.saturating_sub(width) / 2;
    buf.set_string(x, y, text, style);
}

/// Name card, rendered into the content layer above the terminal
pub fn render_hero(view: &PortfolioView, buf: &mut Buffer) {
    let area = buf.area;
    if area.height < 3 {
        return;
    }

    let profile = &view.content().profile;
    centered(
        buf,
        area.y + 1,
        &profile.name,
        Style::default()
            .fg(theme::ACCENT)
            .add_modifier(Modifier::BOLD),
    );
    if let Some(photo) = &profile.photo {
        centered(
            buf,
            area.y + 2,
            &format!("[ {photo} ]"),
            Style::default().fg(theme::DIM_GRAY),
        );
    }
}

/// The terminal box, rendered into its own opaque layer
pub fn render_terminal(view: &PortfolioView, now: Duration, buf: &mut Buffer) {
    let area = buf.area;
    if area.width < 6 || area.height < 3 {
        return;
    }

    let hero = view.hero();
    let terminal = hero.terminal();
    let focused = terminal.is_focused();

    let border = if focused { theme::ACCENT } else { theme::DIM_GRAY };
    let block = Block::bordered()
        .border_style(Style::default().fg(border))
        .title(TERMINAL_TITLE);
    let inner = block.inner(area);
    block.render(area, buf);

    let body = Style::default().fg(theme::BODY);
    let mut y = inner.y;
    for line in hero.boot().done_lines() {
        if y >= inner.bottom() {
            return;
        }
        buf.set_stringn(inner.x, y, line, inner.width as usize, body);
        y += 1;
    }
    if y >= inner.bottom() {
        return;
    }

    let blink_on = (now.as_millis() / BLINK.as_millis()) % 2 == 0;
    let cursor_style = Style::default().fg(theme::ACCENT);

    let typing_line = match hero.phase() {
        AnimationPhase::Booting => hero.boot().current_line().map(str::to_string),
        AnimationPhase::Idle => Some(format!("> {}", terminal.display_text())),
    };
    if let Some(text) = typing_line {
        let (x, _) = buf.set_stringn(inner.x, y, &text, inner.width as usize, body);
        if (focused || blink_on) && x < inner.right() {
            buf.set_string(x, y, CURSOR, cursor_style);
        }
    }
    y += 1;

    if let Some(warning) = terminal.warning() {
        if y < inner.bottom() {
            let mut style = Style::default().fg(theme::WARNING_AMBER);
            if terminal.is_user_typing() {
                style = style.add_modifier(Modifier::BOLD);
            } else {
                style = style.add_modifier(Modifier::DIM);
            }
            buf.set_stringn(
                inner.x,
                y,
                format!("! {warning}"),
                inner.width as usize,
                style,
            );
        }
    }
}
