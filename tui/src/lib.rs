//! Folio TUI - Terminal surface for the folio portfolio
//!
//! Renders a `folio_core::PortfolioView` full screen: a twinkling night sky
//! behind the page, a hero terminal that boots and then types on its own
//! until a visitor takes it over, and a project modal with an image
//! carousel.
//!
//! # Architecture
//!
//! - **App**: event loop, input routing, one clock read per frame
//! - **Compositor**: layered rendering with z-ordering and opaque overlays
//! - **Widgets**: stateless renderers per layer, plus a scrollable text block
//! - **Cli**: flags layered over the core configuration

pub mod app;
pub mod cli;
pub mod compositor;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use cli::Cli;
