//! Adeola Ogundeji's portfolio
//!
//! A single-page portfolio rendered with Leptos SSR and served by Axum, or
//! exported to a static HTML file.
//!
//! # Architecture
//!
//! - **Content**: One declarative source of text and links for both page variants
//! - **UI**: Leptos SSR components (button, card, reveal wrappers) composed into the page
//! - **Motion**: Entrance animation poses and the one-shot reveal state machine
//! - **Server**: Axum router serving the rendered document
//!
//! # Modules
//!
//! - [`content`]: Profiles, link targets and content blocks
//! - [`motion`]: Poses, triggers and [`motion::RevealMachine`]
//! - [`ui`]: Components, themes and page composition
//! - [`clock`]: Current-year source for the footer
//! - [`config`]: CLI, file and environment configuration
//! - [`server`]: HTTP surface
//! - [`export`]: Static file output

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::needless_pass_by_value)]

pub mod clock;
pub mod config;
pub mod content;
pub mod error;
pub mod export;
pub mod motion;
pub mod server;
pub mod ui;

use std::sync::Arc;

use crate::clock::Clock;
use crate::config::AppConfig;

/// Application state shared across all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Global Configuration
    pub config: Arc<AppConfig>,
    /// Source of the copyright year.
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(config: AppConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            config: Arc::new(config),
            clock,
        }
    }
}
