//! ShadCN-style reusable UI components.
//!
//! This module provides the small set of composable components the portfolio
//! page is built from, rendered via Leptos SSR.
//!
//! # Components
//!
//! - [`Button`], [`DelegatedButton`]: Style-variant button, native or delegated to one child
//! - [`Card`], [`CardContent`]: Card container
//! - [`AnimatedSection`], [`AnimatedBlock`]: Entrance-animation wrappers
//! - [`Icon`]: SVG icon components

mod button;
mod card;
mod icons;
mod reveal;

pub use button::{
    BUTTON_BASE, Button, ButtonStyles, ButtonVariant, Delegate, DelegatedButton, LinkChild,
};
pub use card::{Card, CardContent};
pub use icons::*;
pub use reveal::{AnimatedBlock, AnimatedSection};
