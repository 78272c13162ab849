//! TextBlock Widget
//!
//! A borderless, scrollable block of paragraphs. The first paragraph can be
//! styled as a lead (the project subtitle in the detail modal).

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::StatefulWidget;
use textwrap::wrap;

/// State for a scrollable text block
#[derive(Debug, Default)]
pub struct TextBlockState {
    /// Scroll offset (lines from top)
    pub scroll_offset: usize,
    /// Wrapped line count from the last render
    pub total_lines: usize,
}

impl TextBlockState {
    /// Scroll by delta (positive = down). Clamped on the next render.
    pub fn scroll(&mut self, delta: i32) {
        let new_offset = self.scroll_offset as i64 + delta as i64;
        self.scroll_offset = new_offset.max(0) as usize;
    }
}

/// Paragraphs separated by one blank line, wrapped to the area width
pub struct TextBlock<'a> {
    paragraphs: &'a [String],
    style: Style,
    lead_style: Option<Style>,
}

impl<'a> TextBlock<'a> {
    pub fn new(paragraphs: &'a [String]) -> Self {
        Self {
            paragraphs,
            style: Style::default(),
            lead_style: None,
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn lead_style(mut self, style: Style) -> Self {
        self.lead_style = Some(style);
        self
    }

    fn wrapped(&self, width: usize) -> Vec<(String, Style)> {
        let mut lines = Vec::new();
        for (i, paragraph) in self.paragraphs.iter().enumerate() {
            if i > 0 {
                lines.push((String::new(), self.style));
            }
            let style = match (i, self.lead_style) {
                (0, Some(lead)) => lead,
                _ => self.style,
            };
            lines.extend(
                wrap(paragraph, width)
                    .into_iter()
                    .map(|cow| (cow.into_owned(), style)),
            );
        }
        lines
    }
}

impl<'a> StatefulWidget for TextBlock<'a> {
    type State = TextBlockState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let lines = self.wrapped(area.width as usize);
        state.total_lines = lines.len();

        let max_scroll = state.total_lines.saturating_sub(area.height as usize);
        state.scroll_offset = state.scroll_offset.min(max_scroll);

        for (i, (line, style)) in lines
            .iter()
            .skip(state.scroll_offset)
            .take(area.height as usize)
            .enumerate()
        {
            buf.set_string(area.x, area.y + i as u16, line, *style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(buf: &Buffer) -> Vec<String> {
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf.content[buf.index_of(x, y)].symbol().to_string())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    #[test]
    fn test_paragraphs_wrap_with_gap() {
        let paragraphs = vec!["one two three".to_string(), "four".to_string()];
        let area = Rect::new(0, 0, 8, 5);
        let mut buf = Buffer::empty(area);
        let mut state = TextBlockState::default();

        TextBlock::new(&paragraphs).render(area, &mut buf, &mut state);

        assert_eq!(lines(&buf), vec!["one two", "three", "", "four", ""]);
        assert_eq!(state.total_lines, 4);
    }

    #[test]
    fn test_scroll_clamps_to_last_page() {
        let paragraphs: Vec<String> = (0..6).map(|i| format!("p{i}")).collect();
        let area = Rect::new(0, 0, 4, 3);
        let mut buf = Buffer::empty(area);
        let mut state = TextBlockState::default();
        state.scroll(100);

        TextBlock::new(&paragraphs).render(area, &mut buf, &mut state);

        // 6 paragraphs + 5 gaps = 11 lines, last page starts at 8
        assert_eq!(state.scroll_offset, 8);
        assert_eq!(lines(&buf), vec!["p4", "", "p5"]);

        state.scroll(-100);
        assert_eq!(state.scroll_offset, 0);
    }
}
