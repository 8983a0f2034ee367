//! Button component with style variants and child delegation.

use leptos::prelude::*;

use crate::content::LinkTarget;
use crate::ui::components::Icon;

/// Classes shared by every button regardless of variant.
pub const BUTTON_BASE: &str =
    "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-medium transition-colors";

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Neutral button.
    #[default]
    Default,
    /// Accent-filled button.
    Secondary,
    /// Bordered button.
    Outline,
}

impl ButtonVariant {
    /// Resolve a variant by name. Missing or unknown names give
    /// [`ButtonVariant::Default`].
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("secondary") => Self::Secondary,
            Some("outline") => Self::Outline,
            _ => Self::Default,
        }
    }
}

impl From<&str> for ButtonVariant {
    fn from(name: &str) -> Self {
        Self::from_name(Some(name))
    }
}

/// One palette's style string per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonStyles {
    pub default: &'static str,
    pub secondary: &'static str,
    pub outline: &'static str,
}

impl ButtonStyles {
    /// Get CSS classes for `variant`.
    #[must_use]
    pub fn classes(&self, variant: ButtonVariant) -> &'static str {
        match variant {
            ButtonVariant::Default => self.default,
            ButtonVariant::Secondary => self.secondary,
            ButtonVariant::Outline => self.outline,
        }
    }

    /// Full class list: base, variant, then caller additions.
    #[must_use]
    pub fn merge(&self, variant: ButtonVariant, extra: &str) -> String {
        let mut classes = format!("{BUTTON_BASE} {}", self.classes(variant));
        if !extra.is_empty() {
            classes.push(' ');
            classes.push_str(extra);
        }
        classes
    }
}

impl Default for ButtonStyles {
    fn default() -> Self {
        crate::ui::theme::VIVID.buttons
    }
}

/// An element that can stand in for a native button, taking over the
/// button's computed classes.
pub trait Delegate {
    fn render_with_class(self, class: String) -> AnyView;
}

/// Native button.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Button variant=ButtonVariant::Outline>"Click me"</Button>
/// }
/// ```
#[component]
pub fn Button(
    /// Button variant.
    #[prop(optional)]
    variant: ButtonVariant,
    /// Variant palette.
    #[prop(optional)]
    styles: ButtonStyles,
    /// Button type attribute.
    #[prop(default = "button")]
    button_type: &'static str,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Button content.
    children: Children,
) -> impl IntoView {
    let classes = styles.merge(variant, class);

    view! {
        <button type=button_type class=classes>
            {children()}
        </button>
    }
}

/// Button that renders its single `child` in place of a native button.
///
/// The child keeps its own element semantics; a [`LinkChild`] stays a
/// hyperlink while looking like a button.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <DelegatedButton variant=ButtonVariant::Secondary child=LinkChild::new(&GITHUB_SITE) />
/// }
/// ```
#[component]
pub fn DelegatedButton<E>(
    /// Button variant.
    #[prop(optional)]
    variant: ButtonVariant,
    /// Variant palette.
    #[prop(optional)]
    styles: ButtonStyles,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// The element that receives the button styling.
    child: E,
) -> impl IntoView
where
    E: Delegate + Send + 'static,
{
    child.render_with_class(styles.merge(variant, class))
}

/// Anchor with a leading icon, for use with [`DelegatedButton`].
#[derive(Debug, Clone, Copy)]
pub struct LinkChild {
    link: &'static LinkTarget,
    class: &'static str,
    icon_class: &'static str,
}

impl LinkChild {
    pub fn new(link: &'static LinkTarget) -> Self {
        Self {
            link,
            class: "",
            icon_class: "mr-2 h-4 w-4",
        }
    }

    /// Classes the anchor carries in addition to the button's.
    #[must_use]
    pub fn class(mut self, class: &'static str) -> Self {
        self.class = class;
        self
    }

    #[must_use]
    pub fn icon_class(mut self, class: &'static str) -> Self {
        self.icon_class = class;
        self
    }
}

impl Delegate for LinkChild {
    fn render_with_class(self, class: String) -> AnyView {
        let class = if self.class.is_empty() {
            class
        } else {
            format!("{class} {}", self.class)
        };
        let link = self.link;

        view! {
            <a href=link.href target=link.target() rel=link.rel() class=class>
                <Icon kind=link.icon class=self.icon_class />
                {link.label}
            </a>
        }
        .into_any()
    }
}
