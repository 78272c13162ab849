//! Widgets
//!
//! Renderers for each layer. They read `PortfolioView` and draw into a
//! layer buffer; all state changes go through the view's actions.

pub mod hero;
pub mod modal;
pub mod sections;
pub mod sky;
pub mod text_block;

pub use text_block::{TextBlock, TextBlockState};
