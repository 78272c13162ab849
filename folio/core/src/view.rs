//! Portfolio View
//!
//! Top-level owner of every piece of UI state. Surfaces read it through
//! accessors and mutate it only through the action methods below; there is
//! no other shared state.

use std::time::Duration;

use crate::carousel::Carousel;
use crate::config::FolioConfig;
use crate::content::Portfolio;
use crate::hero::Hero;
use crate::hijack::Keystroke;
use crate::modal::{ModalBody, ModalState};
use crate::particles::ShootingStars;
use crate::random::RandomSource;
use crate::starfield::StarField;

/// Page sections in navigation order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Projects,
    Experience,
    Education,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::Projects,
        Section::Experience,
        Section::Education,
        Section::Contact,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::Projects => "Projects",
            Section::Experience => "Experience",
            Section::Education => "Education",
            Section::Contact => "Contact",
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.position() + len - 1) % len]
    }
}

/// All state for one portfolio session
pub struct PortfolioView {
    content: Portfolio,
    config: FolioConfig,
    rng: Box<dyn RandomSource>,
    hero: Hero,
    sky: StarField,
    shooting_stars: ShootingStars,
    modal: ModalState,
    carousel: Option<Carousel>,
    section: Section,
    selected_project: usize,
    experience_tab: usize,
    now: Duration,
}

impl PortfolioView {
    pub fn new(content: Portfolio, config: FolioConfig, mut rng: Box<dyn RandomSource>) -> Self {
        let hero = Hero::new(&config.hero, &config.timing, config.skip_boot);
        let sky = StarField::generate(rng.as_mut());
        let shooting_stars = ShootingStars::new(&config.timing);

        Self {
            content,
            config,
            rng,
            hero,
            sky,
            shooting_stars,
            modal: ModalState::new(),
            carousel: None,
            section: Section::Hero,
            selected_project: 0,
            experience_tab: 0,
            now: Duration::ZERO,
        }
    }

    /// Mount: arm the hero and the shooting stars
    pub fn start(&mut self, now: Duration) {
        self.now = now;
        self.hero.start(now);
        self.shooting_stars.start(now, self.rng.as_mut());
    }

    /// Advance every component to `now`
    pub fn advance(&mut self, now: Duration) {
        self.now = self.now.max(now);
        self.hero.advance(now);
        self.shooting_stars.advance(now, self.rng.as_mut());
        if let Some(carousel) = self.carousel.as_mut() {
            carousel.advance(now);
        }
    }

    // === Navigation ===

    pub fn go_to(&mut self, section: Section) {
        self.section = section;
    }

    pub fn next_section(&mut self) {
        self.section = self.section.next();
    }

    pub fn prev_section(&mut self) {
        self.section = self.section.prev();
    }

    pub fn select_next_project(&mut self) {
        let len = self.content.projects.len();
        if len > 0 {
            self.selected_project = (self.selected_project + 1) % len;
        }
    }

    pub fn select_prev_project(&mut self) {
        let len = self.content.projects.len();
        if len > 0 {
            self.selected_project = (self.selected_project + len - 1) % len;
        }
    }

    /// Select a project; out-of-range indices clamp to the last one
    pub fn select_project(&mut self, index: usize) {
        let len = self.content.projects.len();
        self.selected_project = index.min(len.saturating_sub(1));
    }

    /// Switch experience tab; wraps
    pub fn select_tab(&mut self, index: usize) {
        let len = self.content.experience.len();
        if len > 0 {
            self.experience_tab = index % len;
        }
    }

    pub fn next_tab(&mut self) {
        self.select_tab(self.experience_tab + 1);
    }

    pub fn prev_tab(&mut self) {
        let len = self.content.experience.len();
        if len > 0 {
            self.select_tab(self.experience_tab + len - 1);
        }
    }

    // === Modal + carousel ===

    pub fn open_selected_project(&mut self, now: Duration) {
        self.open_project(now, self.selected_project);
    }

    /// Open the detail modal for a project and start its carousel
    pub fn open_project(&mut self, now: Duration, index: usize) {
        let Some(project) = self.content.projects.get(index) else {
            return;
        };

        let mut paragraphs = vec![project.subtitle.clone()];
        paragraphs.extend(project.description.iter().cloned());
        if !project.tags.is_empty() {
            paragraphs.push(project.tags.join(" · "));
        }
        paragraphs.extend(
            project
                .links
                .iter()
                .map(|l| format!("{}: {}", l.label, l.url)),
        );

        let mut carousel = Carousel::new(
            project.images.clone(),
            self.content.profile.photo.clone(),
            &self.config.timing,
        );
        carousel.start(now);

        self.modal
            .open(project.title.clone(), ModalBody::text(paragraphs).for_project(index));
        self.carousel = Some(carousel);
        self.selected_project = index;
        tracing::debug!(project = index, "opened project modal");
    }

    /// Close the modal; its carousel and timers go with it
    pub fn close_modal(&mut self) {
        self.modal.close();
        self.carousel = None;
    }

    pub fn carousel_next(&mut self, now: Duration) {
        if let Some(c) = self.carousel.as_mut() {
            c.next(now);
        }
    }

    pub fn carousel_prev(&mut self, now: Duration) {
        if let Some(c) = self.carousel.as_mut() {
            c.prev(now);
        }
    }

    pub fn carousel_select(&mut self, now: Duration, index: usize) {
        if let Some(c) = self.carousel.as_mut() {
            c.select(now, index);
        }
    }

    // === Hero terminal ===

    pub fn focus_terminal(&mut self, now: Duration) {
        self.hero.focus(now);
    }

    pub fn blur_terminal(&mut self, now: Duration) {
        self.hero.blur(now);
    }

    pub fn terminal_key(&mut self, now: Duration, key: Keystroke) {
        self.hero.key(now, key, self.rng.as_mut());
    }

    // === Accessors ===

    pub fn content(&self) -> &Portfolio {
        &self.content
    }

    pub fn config(&self) -> &FolioConfig {
        &self.config
    }

    pub fn hero(&self) -> &Hero {
        &self.hero
    }

    pub fn sky(&self) -> &StarField {
        &self.sky
    }

    pub fn shooting_stars(&self) -> &ShootingStars {
        &self.shooting_stars
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn carousel(&self) -> Option<&Carousel> {
        self.carousel.as_ref()
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn selected_project(&self) -> usize {
        self.selected_project
    }

    pub fn experience_tab(&self) -> usize {
        self.experience_tab
    }

    /// Latest time passed to `start` or `advance`
    pub fn now(&self) -> Duration {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ms;
    use crate::hero::AnimationPhase;
    use crate::random::ScriptedRandom;

    fn view() -> PortfolioView {
        let mut v = PortfolioView::new(
            Portfolio::default(),
            FolioConfig::default(),
            Box::new(ScriptedRandom::constant(0.5)),
        );
        v.start(ms(0));
        v
    }

    #[test]
    fn test_section_cycle() {
        let mut v = view();
        assert_eq!(v.section(), Section::Hero);
        v.prev_section();
        assert_eq!(v.section(), Section::Contact);
        v.next_section();
        v.next_section();
        assert_eq!(v.section(), Section::Projects);
        v.go_to(Section::Education);
        assert_eq!(v.section().title(), "Education");
    }

    #[test]
    fn test_project_selection_wraps_and_clamps() {
        let mut v = view();
        v.select_prev_project();
        assert_eq!(v.selected_project(), 1);
        v.select_next_project();
        assert_eq!(v.selected_project(), 0);
        v.select_project(99);
        assert_eq!(v.selected_project(), 1);
    }

    #[test]
    fn test_tabs_wrap() {
        let mut v = view();
        v.prev_tab();
        assert_eq!(v.experience_tab(), 2);
        v.next_tab();
        assert_eq!(v.experience_tab(), 0);
        v.select_tab(4);
        assert_eq!(v.experience_tab(), 1);
    }

    #[test]
    fn test_open_project_builds_carousel() {
        let mut v = view();
        v.select_next_project();
        v.open_selected_project(ms(100));

        assert!(v.modal().is_open());
        assert_eq!(v.modal().title(), "Mycel OS");
        assert_eq!(v.modal().body().project, Some(1));
        let carousel = v.carousel().unwrap();
        assert_eq!(carousel.len(), 2);

        v.advance(ms(4_100));
        assert_eq!(v.carousel().unwrap().current_index(), 1);

        v.close_modal();
        assert!(!v.modal().is_open());
        assert!(v.carousel().is_none());
    }

    #[test]
    fn test_carousel_actions_without_modal_are_noops() {
        let mut v = view();
        v.carousel_next(ms(10));
        v.carousel_prev(ms(20));
        v.carousel_select(ms(30), 3);
        assert!(v.carousel().is_none());
    }

    #[test]
    fn test_open_unknown_project_ignored() {
        let mut v = view();
        v.open_project(ms(0), 42);
        assert!(!v.modal().is_open());
    }

    #[test]
    fn test_hero_boots_then_accepts_focus() {
        let mut v = view();
        v.focus_terminal(ms(10));
        assert!(!v.hero().terminal().is_focused());

        v.advance(ms(10_000));
        assert_eq!(v.hero().phase(), AnimationPhase::Idle);
        v.focus_terminal(ms(10_000));
        v.terminal_key(ms(10_010), Keystroke::Char('k'));
        assert_eq!(v.hero().terminal().display_text(), "k");
        assert!(v.hero().terminal().warning().is_some());
    }

    #[test]
    fn test_stars_spawn_over_time() {
        let mut v = view();
        assert_eq!(v.sky().stars().len(), 50);
        v.advance(ms(2_600));
        assert_eq!(v.shooting_stars().len(), 1);
    }
}
