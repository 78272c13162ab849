//! Folio Core - Headless State for the Terminal Portfolio
//!
//! Every animated or interactive piece of the portfolio lives here as a
//! plain state machine, independent of any rendering surface:
//!
//! ```text
//! PortfolioView
//!   ├── Hero
//!   │     ├── BootSequence      (line-by-line boot script)
//!   │     └── TerminalHijack    (rotating typer + visitor takeover)
//!   ├── StarField               (static twinkling background)
//!   ├── ShootingStars           (bounded, short-lived particles)
//!   ├── ModalState              (project detail dialog)
//!   └── Carousel                (project images, while the modal is open)
//! ```
//!
//! # Time and randomness
//!
//! Components never read the clock. Each one owns a [`TimerQueue`] of
//! pending callbacks and is advanced with `advance(now)`, where `now` is a
//! `Duration` since mount supplied by a [`Clock`]. Randomness comes from an
//! injected [`RandomSource`], so tests replay exact sequences.

pub mod boot;
pub mod carousel;
pub mod clock;
pub mod config;
pub mod content;
pub mod hero;
pub mod hijack;
pub mod modal;
pub mod particles;
pub mod random;
pub mod starfield;
pub mod timer;
pub mod typing;
pub mod view;

pub use boot::{BootSequence, BootSignal};
pub use carousel::Carousel;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ConfigError, ConfigSource, FolioConfig, HeroConfig, TimingConfig};
pub use content::{Education, Experience, Link, Portfolio, Profile, Project};
pub use hero::{AnimationPhase, Hero};
pub use hijack::{HijackMode, Keystroke, TerminalHijack, UserInputBuffer};
pub use modal::{ModalBody, ModalState};
pub use particles::{Particle, ParticleId, ShootingStars};
pub use random::{RandomSource, ScriptedRandom, SeededRandom, ThreadRandom};
pub use starfield::{Star, StarField};
pub use timer::{TimerId, TimerQueue};
pub use typing::{RotatingTyper, TypingPhase};
pub use view::{PortfolioView, Section};
