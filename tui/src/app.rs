//! Main Application
//!
//! The App is a thin surface over `PortfolioView`:
//! - Event loop (keyboard, mouse, resize) translated into view actions
//! - One clock read per frame, handed to `PortfolioView::advance`
//! - Layered rendering through the compositor
//!
//! # Layers
//!
//! ```text
//! z 60  status bar        key hints for the current context
//! z 50  modal             project detail + carousel (opaque)
//! z 30  terminal          hero terminal box (opaque, Home only)
//! z 20  content           active section
//! z 10  nav               section tabs
//! z  0  sky               starfield + shooting stars
//! ```

use std::time::{Duration, Instant};

use crossterm::event::{
    Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use futures::StreamExt;
use rand::seq::SliceRandom;
use ratatui::backend::Backend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::Terminal;

use folio_core::{Clock, Keystroke, PortfolioView, Section};

use crate::compositor::{Compositor, LayerId};
use crate::theme;
use crate::widgets::{hero, modal, sections, sky, TextBlockState};

/// Target ~30 FPS; the fastest cadence (boot typing) is 40 ms
const FRAME_DURATION: Duration = Duration::from_millis(33);

/// Rows of the hero above the terminal box
const HERO_CARD_HEIGHT: u16 = 4;

/// Widest the terminal box gets
const TERMINAL_MAX_WIDTH: u16 = 64;

/// Widest the modal gets
const MODAL_MAX_WIDTH: u16 = 72;

/// Lines moved by PageUp/PageDown in the modal
const MODAL_PAGE: i32 = 5;

/// Quick goodbye messages printed after the alternate screen closes
const QUICK_GOODBYES: &[&str] = &[
    "Thanks for stopping by!",
    "See you around!",
    "Come back for the next launch!",
    "Go build something cool!",
    "The terminal will miss you.",
    "Ship it!",
];

/// Main application state
pub struct App {
    // === Core State ===
    running: bool,
    goodbye_message: Option<String>,

    // === Portfolio State ===
    view: PortfolioView,
    clock: Box<dyn Clock>,

    // === UI Components ===
    compositor: Compositor,
    layers: AppLayers,
    /// Scroll state of the modal description
    modal_text: TextBlockState,
    size: (u16, u16),
}

/// Layer IDs for UI regions
struct AppLayers {
    sky: LayerId,
    nav: LayerId,
    content: LayerId,
    terminal: LayerId,
    modal: LayerId,
    status: LayerId,
}

impl App {
    /// Create the app and mount the view at the clock's current time
    pub fn new(mut view: PortfolioView, clock: Box<dyn Clock>, area: Rect) -> Self {
        let mut compositor = Compositor::new(area);
        let layers = AppLayers {
            sky: compositor.create_layer(area, 0),
            nav: compositor.create_layer(area, 10),
            content: compositor.create_layer(area, 20),
            terminal: compositor.create_layer(area, 30),
            modal: compositor.create_layer(area, 50),
            status: compositor.create_layer(area, 60),
        };
        compositor.set_opaque(layers.terminal, true);
        compositor.set_opaque(layers.modal, true);

        view.start(clock.now());

        let mut app = Self {
            running: true,
            goodbye_message: None,
            view,
            clock,
            compositor,
            layers,
            modal_text: TextBlockState::default(),
            size: (area.width, area.height),
        };
        app.layout();
        app.sync_visibility();
        app
    }

    /// Main event loop
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        let mut event_stream = EventStream::new();

        self.tick(self.clock.now());
        self.draw(terminal)?;

        while self.running {
            let frame_start = Instant::now();

            tokio::select! {
                biased;

                maybe_event = event_stream.next() => match maybe_event {
                    Some(Ok(event)) => self.handle_event(event),
                    Some(Err(e)) => tracing::warn!("terminal event error: {}", e),
                    None => self.running = false,
                },

                // Frame tick
                _ = tokio::time::sleep(Duration::from_millis(16)) => {}
            }

            self.tick(self.clock.now());
            self.draw(terminal)?;

            // Frame rate limiting
            let elapsed = frame_start.elapsed();
            if elapsed < FRAME_DURATION {
                tokio::time::sleep(FRAME_DURATION - elapsed).await;
            }
        }

        Ok(())
    }

    /// Advance the view to `now` and update layer visibility
    pub fn tick(&mut self, now: Duration) {
        self.view.advance(now);
        self.sync_visibility();
    }

    /// Action timestamp: never behind what the view has already seen
    fn now(&self) -> Duration {
        self.clock.now().max(self.view.now())
    }

    // =========================================================================
    // Input
    // =========================================================================

    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Only handle Press events (not Release or Repeat)
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(w, h) => self.handle_resize(w, h),
            _ => {}
        }
        self.sync_visibility();
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let now = self.now();

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        if self.view.hero().terminal().is_focused() {
            let typed = match key.code {
                KeyCode::Esc => {
                    self.view.blur_terminal(now);
                    return;
                }
                KeyCode::Char(c)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    Some(Keystroke::Char(c))
                }
                KeyCode::Backspace => Some(Keystroke::Backspace),
                KeyCode::Enter => Some(Keystroke::Enter),
                _ => None,
            };
            match typed {
                Some(keystroke) => {
                    self.view.terminal_key(now, keystroke);
                    return;
                }
                // Anything else navigates away from the terminal
                None => self.view.blur_terminal(now),
            }
        }

        if self.view.modal().is_open() {
            self.handle_modal_key(key.code, now);
            return;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.quit(),
            KeyCode::Tab => self.view.next_section(),
            KeyCode::BackTab => self.view.prev_section(),
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                self.view.go_to(Section::ALL[index]);
            }
            code => self.handle_section_key(code, now),
        }
    }

    fn handle_modal_key(&mut self, code: KeyCode, now: Duration) {
        match code {
            KeyCode::Esc | KeyCode::Char('q') => self.view.close_modal(),
            KeyCode::Left | KeyCode::Char('h') => self.view.carousel_prev(now),
            KeyCode::Right | KeyCode::Char('l') => self.view.carousel_next(now),
            KeyCode::Char(c @ '1'..='9') => {
                self.view.carousel_select(now, c as usize - '1' as usize);
            }
            KeyCode::Up | KeyCode::Char('k') => self.modal_text.scroll(-1),
            KeyCode::Down | KeyCode::Char('j') => self.modal_text.scroll(1),
            KeyCode::PageUp => self.modal_text.scroll(-MODAL_PAGE),
            KeyCode::PageDown => self.modal_text.scroll(MODAL_PAGE),
            _ => {}
        }
    }

    fn handle_section_key(&mut self, code: KeyCode, now: Duration) {
        match (self.view.section(), code) {
            (Section::Hero, KeyCode::Enter | KeyCode::Char('i')) => {
                self.view.focus_terminal(now);
            }
            (Section::Projects, KeyCode::Up | KeyCode::Char('k')) => {
                self.view.select_prev_project();
            }
            (Section::Projects, KeyCode::Down | KeyCode::Char('j')) => {
                self.view.select_next_project();
            }
            (Section::Projects, KeyCode::Enter) => {
                self.modal_text = TextBlockState::default();
                self.view.open_selected_project(now);
            }
            (Section::Experience, KeyCode::Left | KeyCode::Char('h')) => self.view.prev_tab(),
            (Section::Experience, KeyCode::Right | KeyCode::Char('l')) => self.view.next_tab(),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let now = self.now();

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.view.modal().is_open() {
                    let close = self
                        .compositor
                        .bounds(self.layers.modal)
                        .map(modal::close_button_position);
                    if close == Some((mouse.column, mouse.row)) {
                        self.view.close_modal();
                    }
                    return;
                }

                if self.compositor.layer_at(mouse.column, mouse.row) == Some(self.layers.terminal) {
                    self.view.focus_terminal(now);
                } else {
                    self.view.blur_terminal(now);
                }
            }
            MouseEventKind::ScrollUp if self.view.modal().is_open() => self.modal_text.scroll(-3),
            MouseEventKind::ScrollDown if self.view.modal().is_open() => self.modal_text.scroll(3),
            _ => {}
        }
    }

    fn handle_resize(&mut self, width: u16, height: u16) {
        self.size = (width, height);
        self.compositor.resize(Rect::new(0, 0, width, height));
        self.layout();
    }

    /// Generate a quick goodbye message and stop the loop
    fn quit(&mut self) {
        let mut rng = rand::thread_rng();
        self.goodbye_message = QUICK_GOODBYES.choose(&mut rng).map(|s| s.to_string());
        self.running = false;
    }

    // =========================================================================
    // Layout
    // =========================================================================

    fn layout(&mut self) {
        let (width, height) = self.size;
        let full = Rect::new(0, 0, width, height);
        let content = Rect::new(0, 1, width, height.saturating_sub(2));

        self.compositor.place(self.layers.sky, full);
        self.compositor
            .place(self.layers.nav, Rect::new(0, 0, width, height.min(1)));
        self.compositor.place(self.layers.content, content);
        self.compositor.place(
            self.layers.status,
            Rect::new(0, height.saturating_sub(1), width, height.min(1)),
        );

        let term_width = TERMINAL_MAX_WIDTH.min(width.saturating_sub(4));
        let term_height = hero::terminal_height(&self.view)
            .min(content.height.saturating_sub(HERO_CARD_HEIGHT));
        self.compositor.place(
            self.layers.terminal,
            Rect::new(
                (width.saturating_sub(term_width)) / 2,
                content.y + HERO_CARD_HEIGHT,
                term_width,
                term_height,
            ),
        );

        let modal_width = MODAL_MAX_WIDTH.min(width.saturating_sub(4));
        let modal_height = height.saturating_sub(4);
        self.compositor.place(
            self.layers.modal,
            Rect::new(
                (width.saturating_sub(modal_width)) / 2,
                height.min(2),
                modal_width,
                modal_height,
            ),
        );
    }

    fn sync_visibility(&mut self) {
        self.compositor.set_visible(
            self.layers.terminal,
            self.view.section() == Section::Hero,
        );
        self.compositor
            .set_visible(self.layers.modal, self.view.modal().is_open());
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Render every layer and return the composited frame
    pub fn render_frame(&mut self) -> &Buffer {
        let now = self.view.now();

        self.render_sky(now);
        self.render_nav();
        self.render_content();
        self.render_terminal(now);
        self.render_modal(now);
        self.render_status();

        self.compositor.composite()
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        let output = self.render_frame();

        terminal.draw(|frame| {
            let area = frame.area();
            let buf = frame.buffer_mut();

            for y in 0..area.height.min(output.area.height) {
                for x in 0..area.width.min(output.area.width) {
                    buf[(x, y)] = output[(x, y)].clone();
                }
            }
        })?;

        Ok(())
    }

    fn render_sky(&mut self, now: Duration) {
        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.sky) {
            buf.reset();
            sky::render_sky(&self.view, now, buf);
        }
    }

    fn render_nav(&mut self) {
        let active = self.view.section();
        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.nav) {
            buf.reset();
            let area = buf.area;
            if area.height == 0 {
                return;
            }

            let mut x = area.x + 1;
            for (i, section) in Section::ALL.iter().enumerate() {
                if x >= area.right() {
                    break;
                }
                let label = format!("{} {}", i + 1, section.title());
                let style = if *section == active {
                    Style::default()
                        .fg(theme::ACCENT)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                } else {
                    Style::default().fg(theme::DIM_GRAY)
                };
                let (end, _) = buf.set_stringn(x, area.y, &label, usize::MAX, style);
                x = end.saturating_add(3);
            }
        }
    }

    fn render_content(&mut self) {
        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.content) {
            buf.reset();
            match self.view.section() {
                Section::Hero => hero::render_hero(&self.view, buf),
                _ => sections::render_section(&self.view, buf),
            }
        }
    }

    fn render_terminal(&mut self, now: Duration) {
        if !self.compositor.is_visible(self.layers.terminal) {
            return;
        }
        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.terminal) {
            buf.reset();
            hero::render_terminal(&self.view, now, buf);
        }
    }

    fn render_modal(&mut self, now: Duration) {
        if !self.compositor.is_visible(self.layers.modal) {
            return;
        }
        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.modal) {
            buf.reset();
            modal::render_modal(&self.view, now, buf, &mut self.modal_text);
        }
    }

    fn render_status(&mut self) {
        let hints = if self.view.hero().terminal().is_focused() {
            " typing into the terminal | Esc to leave"
        } else if self.view.modal().is_open() {
            " ←/→ images | ↑/↓ scroll | Esc close"
        } else {
            match self.view.section() {
                Section::Hero => " Tab sections | i or click the terminal to type | q quit",
                Section::Projects => " Tab sections | ↑/↓ select | Enter details | q quit",
                Section::Experience => " Tab sections | ←/→ tabs | q quit",
                Section::Education | Section::Contact => " Tab sections | 1-5 jump | q quit",
            }
        };

        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.status) {
            buf.reset();
            let area = buf.area;
            if area.height > 0 {
                buf.set_string(area.x, area.y, hints, Style::default().fg(theme::DIM_GRAY));
            }
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn view(&self) -> &PortfolioView {
        &self.view
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Screen rectangle of the hero terminal, when it is showing
    pub fn terminal_bounds(&self) -> Option<Rect> {
        self.compositor
            .is_visible(self.layers.terminal)
            .then(|| self.compositor.bounds(self.layers.terminal))
            .flatten()
    }

    /// Screen rectangle of the modal, when it is open
    pub fn modal_bounds(&self) -> Option<Rect> {
        self.compositor
            .is_visible(self.layers.modal)
            .then(|| self.compositor.bounds(self.layers.modal))
            .flatten()
    }

    /// Get the goodbye message for display after the TUI closes
    pub fn goodbye(&self) -> Option<&str> {
        self.goodbye_message.as_deref()
    }
}
