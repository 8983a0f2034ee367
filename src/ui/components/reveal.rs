//! Entrance-animation wrappers.
//!
//! Both wrappers render their element in the initial reveal state with the
//! motion's trigger and initial pose attached; the reveal script in the
//! document head advances the state in the browser.

use leptos::prelude::*;

use crate::motion::{Motion, RevealMachine};

/// `<section>` revealed by `motion`.
#[component]
pub fn AnimatedSection(
    motion: Motion,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class=class
            data-reveal=RevealMachine::new(motion.trigger).state().as_str()
            data-trigger=motion.trigger.as_str()
            style=motion.style()
        >
            {children()}
        </section>
    }
}

/// `<div>` revealed by `motion`; a plain `<div>` when there is no motion.
#[component]
pub fn AnimatedBlock(
    #[prop(default = None)] motion: Option<Motion>,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=class
            data-reveal=motion.map(|m| RevealMachine::new(m.trigger).state().as_str())
            data-trigger=motion.map(|m| m.trigger.as_str())
            style=motion.map(|m| m.style())
        >
            {children()}
        </div>
    }
}
