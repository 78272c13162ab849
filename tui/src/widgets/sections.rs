//! Page Sections
//!
//! Static content for everything below the hero. Each renderer draws into
//! the content layer's buffer; nothing here holds state.

use ratatui::buffer::Buffer;
use ratatui::style::{Modifier, Style};
use textwrap::wrap;

use folio_core::{PortfolioView, Section};

use crate::theme;

/// Marker in front of the selected project
pub const SELECTED_MARKER: &str = "▸ ";

/// Writes successive lines into a buffer, stopping at the bottom edge
struct Cursor<'a> {
    buf: &'a mut Buffer,
    x: u16,
    y: u16,
}

impl<'a> Cursor<'a> {
    fn new(buf: &'a mut Buffer, x: u16, y: u16) -> Self {
        Self { buf, x, y }
    }

    fn width(&self) -> usize {
        self.buf.area.right().saturating_sub(self.x).saturating_sub(1) as usize
    }

    fn line(&mut self, text: &str, style: Style) {
        if self.y < self.buf.area.bottom() {
            let width = self.width();
            self.buf.set_stringn(self.x, self.y, text, width, style);
        }
        self.y = self.y.saturating_add(1);
    }

    fn wrapped(&mut self, text: &str, indent: &str, style: Style) {
        let width = self.width().saturating_sub(indent.len()).max(8);
        for (i, part) in wrap(text, width).iter().enumerate() {
            let lead = if i == 0 { indent } else { "  " };
            self.line(&format!("{lead}{part}"), style);
        }
    }

    fn gap(&mut self) {
        self.y = self.y.saturating_add(1);
    }
}

fn heading() -> Style {
    Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD)
}

fn body() -> Style {
    Style::default().fg(theme::BODY)
}

fn dim() -> Style {
    Style::default().fg(theme::DIM_GRAY)
}

/// Render whichever non-hero section is active
pub fn render_section(view: &PortfolioView, buf: &mut Buffer) {
    match view.section() {
        Section::Hero => {}
        Section::Projects => render_projects(view, buf),
        Section::Experience => render_experience(view, buf),
        Section::Education => render_education(view, buf),
        Section::Contact => render_contact(view, buf),
    }
}

pub fn render_projects(view: &PortfolioView, buf: &mut Buffer) {
    let area = buf.area;
    let mut out = Cursor::new(buf, area.x + 2, area.y + 1);

    for (i, project) in view.content().projects.iter().enumerate() {
        let selected = i == view.selected_project();
        let (marker, title_style) = if selected {
            (SELECTED_MARKER, heading().fg(theme::ACCENT))
        } else {
            ("  ", heading())
        };

        out.line(&format!("{marker}{}", project.title), title_style);
        out.line(&format!("  {}", project.subtitle), body());
        if !project.tags.is_empty() {
            out.line(&format!("  {}", project.tags.join(" · ")), dim());
        }
        out.gap();
    }

    out.line("↑/↓ select · Enter details", dim());
}

pub fn render_experience(view: &PortfolioView, buf: &mut Buffer) {
    let area = buf.area;
    let experience = &view.content().experience;
    let mut out = Cursor::new(buf, area.x + 2, area.y + 1);

    let tabs: Vec<String> = experience
        .iter()
        .enumerate()
        .map(|(i, e)| format!("[{}] {}", i + 1, e.organization))
        .collect();
    let mut x = out.x;
    for (i, tab) in tabs.iter().enumerate() {
        let style = if i == view.experience_tab() {
            heading()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            dim()
        };
        if out.y < out.buf.area.bottom() && x < out.buf.area.right() {
            let (end, _) = out.buf.set_stringn(x, out.y, tab, usize::MAX, style);
            x = end.saturating_add(2);
        }
    }
    out.gap();
    out.gap();

    let Some(active) = experience.get(view.experience_tab()) else {
        return;
    };
    out.line(&active.heading(), heading());
    out.line(&active.period, dim());
    out.gap();
    for highlight in &active.highlights {
        out.wrapped(highlight, "• ", body());
    }
    out.gap();
    out.line("←/→ switch tab", dim());
}

pub fn render_education(view: &PortfolioView, buf: &mut Buffer) {
    let area = buf.area;
    let mut out = Cursor::new(buf, area.x + 2, area.y + 1);

    for school in &view.content().education {
        out.line(&school.heading(), heading());
        out.line(&school.period, dim());
        out.gap();
    }
}

pub fn render_contact(view: &PortfolioView, buf: &mut Buffer) {
    let area = buf.area;
    let mut out = Cursor::new(buf, area.x + 2, area.y + 1);

    out.line(&format!("Get in touch with {}", view.content().profile.name), heading());
    out.gap();
    for link in &view.content().contact {
        out.line(&format!("{:<10} {}", link.label, link.url), body());
    }
}
