//! Render strategies.
//!
//! A [`Theme`] is the complete set of class strings, button palette and
//! entrance motions one page variant uses. The page composer reads nothing
//! presentational from anywhere else.

use crate::content::{IconKind, PageVariant};
use crate::motion::{Motion, Pose};
use crate::ui::components::ButtonStyles;

/// Per-card accent colours, cycled by position.
#[derive(Debug, Clone, Copy)]
pub struct Accent {
    /// Project card surface.
    pub card: &'static str,
    /// Square behind the project glyph.
    pub badge: &'static str,
    /// Project glyph inside the badge.
    pub glyph: &'static str,
    /// Trailing GitHub mark on linked project cards.
    pub mark: &'static str,
    /// Bullet marker.
    pub marker: &'static str,
    /// Skill tile surface.
    pub tile: &'static str,
    /// Skill tile heading.
    pub tile_title: &'static str,
}

/// Hero link icon classes: the GitHub mark tilts, the others grow.
#[derive(Debug, Clone, Copy)]
pub struct HeroIcons {
    pub github: &'static str,
    pub other: &'static str,
}

/// Entrance motions for each animated part of the page.
#[derive(Debug, Clone, Copy)]
pub struct Motions {
    pub hero: Motion,
    pub hero_name: Option<Motion>,
    pub hero_tagline: Option<Motion>,
    pub hero_graduation: Option<Motion>,
    pub hero_links: Option<Motion>,
    pub about: Motion,
    pub projects: Motion,
    pub experience: Motion,
    pub skills: Motion,
}

#[derive(Debug)]
pub struct Theme {
    pub canvas: &'static str,
    /// Pulsing blurred blobs behind the content.
    pub backdrop: bool,
    pub section: &'static str,
    pub buttons: ButtonStyles,
    pub motions: Motions,

    pub name: &'static str,
    pub tagline: &'static str,
    pub graduation: &'static str,
    pub hero_links: &'static str,
    /// Extra classes on each hero link.
    pub hero_link: &'static str,
    pub hero_icons: HeroIcons,

    pub heading: &'static str,
    pub projects_heading: &'static str,
    pub about_icon: Option<(IconKind, &'static str)>,
    pub projects_icon: Option<(IconKind, &'static str)>,

    pub about_panel: &'static str,
    pub about_text: &'static str,

    pub project_grid: &'static str,
    /// Hover lift around each project card.
    pub project_hover: &'static str,
    pub project_link: &'static str,
    /// Show the glyph badge and trailing GitHub mark on project cards.
    pub project_badges: bool,
    pub project_title: &'static str,
    pub project_body: &'static str,

    pub bullet_list: &'static str,
    /// Render a `▸` marker before each bullet instead of list discs.
    pub bullet_markers: bool,

    pub experience_stack: &'static str,
    pub experience_hover: &'static str,
    pub experience_card: &'static str,
    pub role: &'static str,
    pub organization: &'static str,
    pub summary: &'static str,

    pub skill_grid: &'static str,
    pub skill_icons: bool,
    pub skill_text: &'static str,

    pub accents: &'static [Accent],

    pub footer: &'static str,
    pub footer_links: &'static str,
    pub footer_link: &'static str,
}

impl Theme {
    pub fn for_variant(variant: PageVariant) -> &'static Self {
        match variant {
            PageVariant::Vivid => &VIVID,
            PageVariant::Classic => &CLASSIC,
        }
    }

    /// Extra icon classes for a hero link showing `icon`.
    pub fn hero_icon(&self, icon: IconKind) -> &'static str {
        match icon {
            IconKind::Github => self.hero_icons.github,
            _ => self.hero_icons.other,
        }
    }

    /// Accent for the card at `index`.
    pub fn accent(&self, index: usize) -> &'static Accent {
        let accents: &'static [Accent] = self.accents;
        &accents[index % accents.len()]
    }
}

pub static VIVID: Theme = Theme {
    canvas: "min-h-screen bg-gradient-to-br from-indigo-950 via-purple-950 to-slate-950 \
             text-slate-100 px-6 md:px-16 py-12 relative overflow-hidden",
    backdrop: true,
    section: "max-w-5xl mx-auto mb-20 relative z-10",
    buttons: ButtonStyles {
        default: "bg-slate-800 hover:bg-slate-700 text-white",
        secondary: "bg-purple-600 hover:bg-purple-700 text-white",
        outline: "border-2 border-purple-500 hover:bg-purple-500/10 text-purple-300",
    },
    motions: Motions {
        hero: Motion::on_mount(Pose::rising(20)).duration(800),
        hero_name: Some(Motion::on_mount(Pose::scaled(0.95)).duration(500).delay(200)),
        hero_tagline: Some(Motion::on_mount(Pose::hidden()).delay(400)),
        hero_graduation: Some(Motion::on_mount(Pose::hidden()).delay(500)),
        hero_links: Some(Motion::on_mount(Pose::rising(10)).delay(600)),
        about: Motion::in_view(Pose::rising(30)).duration(600),
        projects: Motion::in_view(Pose::hidden()).duration(600),
        experience: Motion::in_view(Pose::hidden()).duration(600),
        skills: Motion::in_view(Pose::hidden()).duration(600),
    },

    name: "text-5xl md:text-7xl font-bold mb-4 bg-gradient-to-r from-purple-400 via-pink-400 \
           to-indigo-400 bg-clip-text text-transparent",
    tagline: "text-lg md:text-xl text-slate-300 max-w-3xl mb-2",
    graduation: "text-purple-400 mb-6 flex items-center gap-2",
    hero_links: "flex flex-wrap gap-4 mt-6",
    hero_link: "group",
    hero_icons: HeroIcons {
        github: "mr-2 h-4 w-4 group-hover:rotate-12 transition-transform",
        other: "mr-2 h-4 w-4 group-hover:scale-110 transition-transform",
    },

    heading: "text-3xl font-semibold mb-6 flex items-center gap-3",
    projects_heading: "text-3xl font-semibold mb-8 flex items-center gap-3",
    about_icon: Some((IconKind::Code, "h-6 w-6 text-purple-400")),
    projects_icon: Some((IconKind::Rocket, "h-6 w-6 text-indigo-400")),

    about_panel: "bg-slate-900/50 backdrop-blur-sm border border-purple-500/20 rounded-lg p-6 \
                  hover:border-purple-500/40 transition-all",
    about_text: "text-slate-300 leading-relaxed",

    project_grid: "grid md:grid-cols-2 gap-8",
    project_hover: "h-full transition-transform duration-300 hover:-translate-y-2 hover:scale-[1.02]",
    project_link: "block h-full",
    project_badges: true,
    project_title: "text-xl font-semibold",
    project_body: "text-slate-300 mb-4",

    bullet_list: "text-slate-400 text-sm space-y-2",
    bullet_markers: true,

    experience_stack: "space-y-6",
    experience_hover: "transition-transform duration-300 hover:scale-[1.01]",
    experience_card: "bg-gradient-to-br from-slate-900/60 to-purple-900/20 border-slate-700/50 \
                      backdrop-blur-sm hover:border-purple-500/40 transition-all",
    role: "text-xl font-semibold text-purple-300",
    organization: "text-slate-400 mb-2",
    summary: "text-slate-300 mt-3 mb-3",

    skill_grid: "grid md:grid-cols-3 gap-6",
    skill_icons: true,
    skill_text: "text-slate-300",

    accents: &[
        Accent {
            card: "bg-gradient-to-br from-purple-900/40 to-slate-900/40 border-purple-500/30 \
                   backdrop-blur-sm h-full hover:border-purple-500/60 transition-all cursor-pointer",
            badge: "p-2 bg-purple-500/20 rounded-lg",
            glyph: "h-6 w-6 text-purple-400",
            mark: "h-5 w-5 flex-shrink-0 text-purple-400",
            marker: "text-purple-400 mt-1",
            tile: "bg-slate-900/50 backdrop-blur-sm border border-purple-500/20 rounded-lg p-5 \
                   hover:border-purple-500/50 hover:scale-105 transition-all",
            tile_title: "font-semibold mb-3 text-purple-300 flex items-center gap-2",
        },
        Accent {
            card: "bg-gradient-to-br from-indigo-900/40 to-slate-900/40 border-indigo-500/30 \
                   backdrop-blur-sm h-full hover:border-indigo-500/60 transition-all cursor-pointer",
            badge: "p-2 bg-indigo-500/20 rounded-lg",
            glyph: "h-6 w-6 text-indigo-400",
            mark: "h-5 w-5 flex-shrink-0 text-indigo-400",
            marker: "text-indigo-400 mt-1",
            tile: "bg-slate-900/50 backdrop-blur-sm border border-indigo-500/20 rounded-lg p-5 \
                   hover:border-indigo-500/50 hover:scale-105 transition-all",
            tile_title: "font-semibold mb-3 text-indigo-300 flex items-center gap-2",
        },
        Accent {
            card: "bg-gradient-to-br from-pink-900/40 to-slate-900/40 border-pink-500/30 \
                   backdrop-blur-sm h-full hover:border-pink-500/60 transition-all cursor-pointer",
            badge: "p-2 bg-pink-500/20 rounded-lg",
            glyph: "h-6 w-6 text-pink-400",
            mark: "h-5 w-5 flex-shrink-0 text-pink-400",
            marker: "text-pink-400 mt-1",
            tile: "bg-slate-900/50 backdrop-blur-sm border border-pink-500/20 rounded-lg p-5 \
                   hover:border-pink-500/50 hover:scale-105 transition-all",
            tile_title: "font-semibold mb-3 text-pink-300 flex items-center gap-2",
        },
    ],

    footer: "max-w-5xl mx-auto text-slate-400 flex flex-col md:flex-row justify-between \
             items-center gap-4 pt-8 border-t border-slate-800 relative z-10",
    footer_links: "flex gap-6",
    footer_link: "hover:text-purple-400 transition-colors",
};

pub static CLASSIC: Theme = Theme {
    canvas: "min-h-screen bg-gradient-to-br from-slate-950 via-slate-900 to-slate-950 \
             text-slate-100 px-6 md:px-16 py-12",
    backdrop: false,
    section: "max-w-5xl mx-auto mb-20",
    buttons: ButtonStyles {
        default: "bg-slate-800 hover:bg-slate-700 text-white",
        secondary: "bg-slate-700 hover:bg-slate-600 text-white",
        outline: "border border-slate-600 hover:bg-slate-800 text-white",
    },
    motions: Motions {
        hero: Motion::on_mount(Pose::rising(20)).duration(600),
        hero_name: None,
        hero_tagline: None,
        hero_graduation: None,
        hero_links: None,
        about: Motion::in_view(Pose::hidden()).duration(600),
        projects: Motion::in_view(Pose::hidden()).duration(600),
        experience: Motion::in_view(Pose::hidden()).duration(600),
        skills: Motion::in_view(Pose::hidden()).duration(600),
    },

    name: "text-4xl md:text-6xl font-bold mb-4",
    tagline: "text-lg md:text-xl text-slate-300 max-w-3xl",
    graduation: "text-slate-400 mt-2",
    hero_links: "flex gap-4 mt-6",
    hero_link: "",
    hero_icons: HeroIcons {
        github: "mr-2 h-4 w-4",
        other: "mr-2 h-4 w-4",
    },

    heading: "text-3xl font-semibold mb-6",
    projects_heading: "text-3xl font-semibold mb-8",
    about_icon: None,
    projects_icon: None,

    about_panel: "",
    about_text: "text-slate-300 leading-relaxed",

    project_grid: "grid md:grid-cols-2 gap-8",
    project_hover: "",
    project_link: "block h-full",
    project_badges: false,
    project_title: "text-xl font-semibold mb-2",
    project_body: "text-slate-300 mb-4",

    bullet_list: "text-slate-400 text-sm list-disc ml-5 space-y-1",
    bullet_markers: false,

    experience_stack: "space-y-6",
    experience_hover: "",
    experience_card: "bg-slate-900 border-slate-800",
    role: "text-xl font-semibold",
    organization: "text-slate-400",
    summary: "text-slate-300 mt-2",

    skill_grid: "grid md:grid-cols-3 gap-6 text-slate-300",
    skill_icons: false,
    skill_text: "",

    accents: &[Accent {
        card: "bg-slate-900 border-slate-800",
        badge: "",
        glyph: "h-6 w-6",
        mark: "h-5 w-5 flex-shrink-0",
        marker: "mt-1",
        tile: "",
        tile_title: "font-semibold mb-2",
    }],

    footer: "max-w-5xl mx-auto text-slate-400 flex flex-col md:flex-row justify-between \
             items-center gap-4",
    footer_links: "flex gap-4",
    footer_link: "",
};
