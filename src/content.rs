//! Portfolio content.
//!
//! Every piece of text and every outbound link rendered by the site lives in
//! this module. Both page variants draw from the same constants; where the
//! two variants publish different content (the hero and footer link sets, the
//! contact address casing, the experience detail) each keeps its own
//! [`Profile`], assembled from the shared pieces below.

use serde::Deserialize;

/// Glyph shown next to a link, heading or tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Github,
    Linkedin,
    Mail,
    Phone,
    Code,
    Database,
    Rocket,
}

/// An outbound link with its label and glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkTarget {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: IconKind,
    /// Open in a new browsing context (`target="_blank"`).
    pub new_tab: bool,
}

impl LinkTarget {
    /// `target` attribute value, if any.
    pub fn target(&self) -> Option<&'static str> {
        self.new_tab.then_some("_blank")
    }

    /// `rel` attribute value, if any.
    pub fn rel(&self) -> Option<&'static str> {
        self.new_tab.then_some("noopener noreferrer")
    }
}

/// Heading, prose and an ordered bullet list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentBlock {
    pub heading: &'static str,
    pub body: &'static str,
    pub bullets: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub block: ContentBlock,
    pub icon: IconKind,
    /// When set, the whole card is a hyperlink.
    pub link: Option<&'static LinkTarget>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub role: &'static str,
    pub organization: &'static str,
    pub summary: &'static str,
    pub bullets: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub title: &'static str,
    pub icon: IconKind,
    pub skills: &'static [&'static str],
}

impl SkillGroup {
    /// Skills as a single comma separated line.
    pub fn joined(&self) -> String {
        self.skills.join(", ")
    }
}

/// Everything one page variant renders.
#[derive(Debug)]
pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub graduation: Option<&'static str>,
    pub hero_links: &'static [LinkTarget],
    pub about: ContentBlock,
    pub projects: &'static [Project],
    pub experience: &'static [Experience],
    pub skills: &'static [SkillGroup],
    pub footer_links: &'static [LinkTarget],
}

/// The two render strategies over the shared content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PageVariant {
    /// Gradient backdrop, staggered hero, linked project cards.
    #[default]
    Vivid,
    /// Flat slate layout.
    Classic,
}

impl PageVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vivid => "vivid",
            Self::Classic => "classic",
        }
    }

    pub fn profile(self) -> &'static Profile {
        match self {
            Self::Vivid => &VIVID_PROFILE,
            Self::Classic => &CLASSIC_PROFILE,
        }
    }
}

impl std::fmt::Display for PageVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Links
// ─────────────────────────────────────────────────────────────────────────────

pub const GITHUB_SITE: LinkTarget = LinkTarget {
    label: "GitHub",
    href: "https://github.com/adeolaogundeji/adeolaogundeji.github.io",
    icon: IconKind::Github,
    new_tab: true,
};

pub const GITHUB_PROFILE: LinkTarget = LinkTarget {
    label: "GitHub",
    href: "https://github.com/adeolaogundeji",
    icon: IconKind::Github,
    new_tab: true,
};

pub const LINKEDIN: LinkTarget = LinkTarget {
    label: "LinkedIn",
    href: "https://www.linkedin.com/in/ogundeji-adeola-327a73235/",
    icon: IconKind::Linkedin,
    new_tab: true,
};

pub const EMAIL: LinkTarget = LinkTarget {
    label: "Email",
    href: "mailto:ogundejideola0@gmail.com",
    icon: IconKind::Mail,
    new_tab: false,
};

/// Address as published by the classic layout.
pub const EMAIL_CLASSIC: LinkTarget = LinkTarget {
    href: "mailto:Ogundejiadeola0@gmail.com",
    ..EMAIL
};

pub const PHONE: LinkTarget = LinkTarget {
    label: "Phone",
    href: "tel:+12813863380",
    icon: IconKind::Phone,
    new_tab: false,
};

// ─────────────────────────────────────────────────────────────────────────────
// Shared text
// ─────────────────────────────────────────────────────────────────────────────

pub const NAME: &str = "Adeola Ogundeji";

pub const TAGLINE: &str = "Entry-Level Software Engineer focused on backend systems, \
    data-driven applications, and building software that creates real-world impact.";

pub const GRADUATION: &str = "Graduating May 2026";

pub const ABOUT: ContentBlock = ContentBlock {
    heading: "About Me",
    body: "I am a Computer Science student graduating in May 2026 with experience across \
        backend development, databases, automation, and applied software engineering. \
        I’ve worked on healthcare scheduling systems, asset management workflows serving \
        public infrastructure, and relational database design. I enjoy solving complex \
        problems, learning quickly, and building reliable systems.",
    bullets: &[],
};

pub const BOOKING_SYSTEM: ContentBlock = ContentBlock {
    heading: "Doctor’s Appointment Booking System",
    body: "Backend scheduling system built in Python to manage availability, conflict \
        resolution, and time-slot optimization for multi-user healthcare workflows.",
    bullets: &[
        "Prevented double-booking with constraint-based logic",
        "Modular architecture for scalability",
        "Simulated production-level backend design",
    ],
};

pub const CLOTHING_DATABASE: ContentBlock = ContentBlock {
    heading: "Clothing Line Database (PostgreSQL)",
    body: "Designed and implemented a normalized relational database to support inventory \
        tracking, sales operations, and analytics.",
    bullets: &[
        "Primary/foreign key constraints for integrity",
        "Complex SQL queries for analytics",
        "Realistic business use-case modeling",
    ],
};

pub const ASSET_MANAGEMENT: Experience = Experience {
    role: "Asset Management Intern",
    organization: "Office of County Engineering – Houston, TX",
    summary: "Automated verification workflows for 500,000+ public infrastructure assets \
        using Python and GIS tools, eliminating weeks of manual processing.",
    bullets: &[
        "Developed Python scripts for data validation and quality assurance",
        "Integrated GIS workflows with database systems",
        "Reduced processing time by 90% through automation",
    ],
};

pub const IT_SUPPORT: Experience = Experience {
    role: "IT Support Assistant",
    organization: "Mississippi College IT Department",
    summary: "Delivered technical support, system deployments, and documentation across \
        campus-wide systems.",
    bullets: &[],
};

pub const LANGUAGES: SkillGroup = SkillGroup {
    title: "Languages",
    icon: IconKind::Code,
    skills: &["Python", "C++", "C#", "Go", "Java", "SwiftUI", "SQL"],
};

pub const FRAMEWORKS: SkillGroup = SkillGroup {
    title: "Frameworks & Tools",
    icon: IconKind::Rocket,
    skills: &["React", "Angular", "Node.js", "Git", "Firebase"],
};

pub const OTHER_SKILLS: SkillGroup = SkillGroup {
    title: "Other",
    icon: IconKind::Database,
    skills: &[
        "PostgreSQL",
        "ArcGIS Pro",
        "Automation",
        "AI/ML (PyTorch, TensorFlow)",
    ],
};

// ─────────────────────────────────────────────────────────────────────────────
// Profiles
// ─────────────────────────────────────────────────────────────────────────────

pub static VIVID_PROFILE: Profile = Profile {
    name: NAME,
    tagline: TAGLINE,
    graduation: Some(GRADUATION),
    hero_links: &[GITHUB_SITE, LINKEDIN, EMAIL],
    about: ABOUT,
    projects: &[
        Project {
            block: BOOKING_SYSTEM,
            icon: IconKind::Code,
            link: Some(&GITHUB_PROFILE),
        },
        Project {
            block: CLOTHING_DATABASE,
            icon: IconKind::Database,
            link: Some(&GITHUB_PROFILE),
        },
    ],
    experience: &[ASSET_MANAGEMENT],
    skills: &[LANGUAGES, FRAMEWORKS, OTHER_SKILLS],
    footer_links: &[EMAIL, PHONE, LINKEDIN, GITHUB_SITE],
};

pub static CLASSIC_PROFILE: Profile = Profile {
    name: NAME,
    tagline: TAGLINE,
    graduation: None,
    hero_links: &[GITHUB_SITE, EMAIL_CLASSIC],
    about: ABOUT,
    projects: &[
        Project {
            block: BOOKING_SYSTEM,
            icon: IconKind::Code,
            link: None,
        },
        Project {
            block: CLOTHING_DATABASE,
            icon: IconKind::Database,
            link: None,
        },
    ],
    experience: &[
        Experience {
            bullets: &[],
            ..ASSET_MANAGEMENT
        },
        IT_SUPPORT,
    ],
    skills: &[
        LANGUAGES,
        FRAMEWORKS,
        SkillGroup {
            skills: &[
                "PostgreSQL",
                "ArcGIS Pro",
                "Automation Scripting",
                "AI/ML (PyTorch, TensorFlow)",
            ],
            ..OTHER_SKILLS
        },
    ],
    footer_links: &[EMAIL_CLASSIC, PHONE, GITHUB_SITE],
};
