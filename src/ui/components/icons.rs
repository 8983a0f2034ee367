//! SVG icon components.
//!
//! Icons are rendered inline as SVG elements so they inherit `currentColor`
//! and can be sized with utility classes.

use leptos::prelude::*;

use crate::content::IconKind;

/// Common icon size class, used when the caller passes no classes.
const ICON_SIZE: &str = "h-4 w-4";

fn icon_classes(class: &str) -> String {
    if class.is_empty() {
        ICON_SIZE.to_string()
    } else {
        class.to_string()
    }
}

/// Render the glyph for `kind`.
#[component]
pub fn Icon(
    /// Which glyph.
    kind: IconKind,
    /// CSS classes; defaults to the common icon size.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    match kind {
        IconKind::Github => view! { <GithubIcon class=class /> }.into_any(),
        IconKind::Linkedin => view! { <LinkedinIcon class=class /> }.into_any(),
        IconKind::Mail => view! { <MailIcon class=class /> }.into_any(),
        IconKind::Phone => view! { <PhoneIcon class=class /> }.into_any(),
        IconKind::Code => view! { <CodeIcon class=class /> }.into_any(),
        IconKind::Database => view! { <DatabaseIcon class=class /> }.into_any(),
        IconKind::Rocket => view! { <RocketIcon class=class /> }.into_any(),
    }
}

/// GitHub mark.
#[component]
pub fn GithubIcon(
    /// CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = icon_classes(class);

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=classes
        >
            <path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4" />
            <path d="M9 18c-4.51 2-5-2-7-2" />
        </svg>
    }
}

/// LinkedIn mark.
#[component]
pub fn LinkedinIcon(
    /// CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = icon_classes(class);

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=classes
        >
            <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z" />
            <rect x="2" y="9" width="4" height="12" />
            <circle cx="4" cy="4" r="2" />
        </svg>
    }
}

/// Envelope icon.
#[component]
pub fn MailIcon(
    /// CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = icon_classes(class);

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=classes
        >
            <rect x="2" y="4" width="20" height="16" rx="2" />
            <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
        </svg>
    }
}

/// Handset icon.
#[component]
pub fn PhoneIcon(
    /// CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = icon_classes(class);

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=classes
        >
            <path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z" />
        </svg>
    }
}

/// Code brackets icon.
#[component]
pub fn CodeIcon(
    /// CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = icon_classes(class);

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=classes
        >
            <path d="m18 16 4-4-4-4" />
            <path d="m6 8-4 4 4 4" />
            <path d="m14.5 4-5 16" />
        </svg>
    }
}

/// Database cylinder icon.
#[component]
pub fn DatabaseIcon(
    /// CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = icon_classes(class);

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=classes
        >
            <ellipse cx="12" cy="5" rx="9" ry="3" />
            <path d="M3 5V19A9 3 0 0 0 21 19V5" />
            <path d="M3 12A9 3 0 0 0 21 12" />
        </svg>
    }
}

/// Rocket icon.
#[component]
pub fn RocketIcon(
    /// CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = icon_classes(class);

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=classes
        >
            <path d="M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z" />
            <path d="m12 15-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z" />
            <path d="M9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0" />
            <path d="M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5" />
        </svg>
    }
}
