//! UI components and layouts.
//!
//! This module provides Leptos SSR components for rendering the portfolio,
//! following ShadCN-UI design principles.
//!
//! # Structure
//!
//! - [`components`]: Reusable ShadCN-style UI components
//! - [`page`]: Section composition for both page variants
//! - [`theme`]: Class tables for the vivid and classic variants
//! - [`document`]: HTML shell

pub mod components;
pub mod document;
pub mod page;
pub mod theme;

use leptos::prelude::*;

use crate::content::PageVariant;
use page::Page;

/// Render the complete HTML document for `variant` with `year` in the footer.
pub fn render_document(variant: PageVariant, year: i32) -> String {
    let profile = variant.profile();
    let body = Owner::new().with(|| view! { <Page variant=variant year=year /> }.to_html());
    let title = format!("{} - Portfolio", profile.name);

    document::html_shell(&title, profile.tagline, &body)
}
