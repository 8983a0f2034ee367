//! Portfolio page composition.
//!
//! [`Page`] lays out the six sections in document order. Content comes from
//! the variant's [`Profile`], presentation from its [`Theme`].

use leptos::prelude::*;

use crate::content::{Experience, IconKind, PageVariant, Profile, Project, SkillGroup};
use crate::ui::components::{
    AnimatedBlock, AnimatedSection, ButtonVariant, Card, CardContent, DelegatedButton, GithubIcon,
    Icon, LinkChild, RocketIcon,
};
use crate::ui::theme::{Accent, Theme};

/// The whole portfolio body for `variant`, with `year` in the copyright line.
#[component]
pub fn Page(variant: PageVariant, year: i32) -> impl IntoView {
    let theme = Theme::for_variant(variant);
    let profile = variant.profile();

    view! {
        <div class=theme.canvas data-variant=variant.as_str()>
            {theme.backdrop.then(|| view! { <Backdrop /> })}
            <Hero profile=profile theme=theme />
            <About profile=profile theme=theme />
            <Projects profile=profile theme=theme />
            <ExperienceSection profile=profile theme=theme />
            <Skills profile=profile theme=theme />
            <Footer profile=profile theme=theme year=year />
        </div>
    }
}

/// Decorative pulsing blobs behind the content.
#[component]
fn Backdrop() -> impl IntoView {
    view! {
        <div class="absolute inset-0 overflow-hidden pointer-events-none" aria-hidden="true">
            <div class="absolute w-96 h-96 bg-purple-500/10 rounded-full blur-3xl top-20 -left-48 animate-pulse"></div>
            <div
                class="absolute w-96 h-96 bg-indigo-500/10 rounded-full blur-3xl bottom-20 -right-48 animate-pulse"
                style="animation-delay: 1s"
            ></div>
        </div>
    }
}

/// Email links get the outline treatment, everything else secondary.
fn hero_variant(icon: IconKind) -> ButtonVariant {
    match icon {
        IconKind::Mail => ButtonVariant::Outline,
        _ => ButtonVariant::Secondary,
    }
}

#[component]
fn Hero(profile: &'static Profile, theme: &'static Theme) -> impl IntoView {
    let motions = &theme.motions;

    view! {
        <AnimatedSection motion=motions.hero class=theme.section>
            <AnimatedBlock motion=motions.hero_name>
                <h1 class=theme.name>{profile.name}</h1>
            </AnimatedBlock>
            <AnimatedBlock motion=motions.hero_tagline>
                <p class=theme.tagline>{profile.tagline}</p>
            </AnimatedBlock>
            {profile
                .graduation
                .map(|note| {
                    view! {
                        <AnimatedBlock motion=motions.hero_graduation>
                            <p class=theme.graduation>
                                <RocketIcon class="h-4 w-4" />
                                {note}
                            </p>
                        </AnimatedBlock>
                    }
                })}
            <AnimatedBlock motion=motions.hero_links class=theme.hero_links>
                {profile
                    .hero_links
                    .iter()
                    .map(|link| {
                        let child = LinkChild::new(link)
                            .class(theme.hero_link)
                            .icon_class(theme.hero_icon(link.icon));
                        view! {
                            <DelegatedButton
                                variant=hero_variant(link.icon)
                                styles=theme.buttons
                                child=child
                            />
                        }
                    })
                    .collect_view()}
            </AnimatedBlock>
        </AnimatedSection>
    }
}

/// Section heading with an optional leading glyph.
#[component]
fn SectionHeading(
    title: &'static str,
    class: &'static str,
    icon: Option<(IconKind, &'static str)>,
) -> impl IntoView {
    view! {
        <h2 class=class>
            {icon.map(|(kind, icon_class)| view! { <Icon kind=kind class=icon_class /> })}
            {title}
        </h2>
    }
}

#[component]
fn About(profile: &'static Profile, theme: &'static Theme) -> impl IntoView {
    view! {
        <AnimatedSection motion=theme.motions.about class=theme.section>
            <SectionHeading title=profile.about.heading class=theme.heading icon=theme.about_icon />
            <div class=theme.about_panel>
                <p class=theme.about_text>{profile.about.body}</p>
            </div>
        </AnimatedSection>
    }
}

/// Bullet list; marker glyphs take the accent colour when the theme uses them.
#[component]
fn Bullets(
    items: &'static [&'static str],
    theme: &'static Theme,
    accent: &'static Accent,
) -> impl IntoView {
    view! {
        <ul class=theme.bullet_list>
            {items
                .iter()
                .map(|item| {
                    if theme.bullet_markers {
                        view! {
                            <li class="flex items-start gap-2">
                                <span class=accent.marker>"▸"</span>
                                <span>{*item}</span>
                            </li>
                        }
                            .into_any()
                    } else {
                        view! { <li>{*item}</li> }.into_any()
                    }
                })
                .collect_view()}
        </ul>
    }
}

#[component]
fn Projects(profile: &'static Profile, theme: &'static Theme) -> impl IntoView {
    view! {
        <AnimatedSection motion=theme.motions.projects class=theme.section>
            <SectionHeading title="Projects" class=theme.projects_heading icon=theme.projects_icon />
            <div class=theme.project_grid>
                {profile
                    .projects
                    .iter()
                    .enumerate()
                    .map(|(index, project)| {
                        view! { <ProjectCard project=project theme=theme accent=theme.accent(index) /> }
                    })
                    .collect_view()}
            </div>
        </AnimatedSection>
    }
}

#[component]
fn ProjectCard(
    project: &'static Project,
    theme: &'static Theme,
    accent: &'static Accent,
) -> impl IntoView {
    let block = &project.block;
    let title = if theme.project_badges {
        view! {
            <div class="flex items-start justify-between gap-3 mb-3">
                <div class="flex items-start gap-3">
                    <div class=accent.badge>
                        <Icon kind=project.icon class=accent.glyph />
                    </div>
                    <h3 class=theme.project_title>{block.heading}</h3>
                </div>
                <GithubIcon class=accent.mark />
            </div>
        }
        .into_any()
    } else {
        view! { <h3 class=theme.project_title>{block.heading}</h3> }.into_any()
    };

    let card = view! {
        <Card class=accent.card>
            <CardContent>
                {title}
                <p class=theme.project_body>{block.body}</p>
                <Bullets items=block.bullets theme=theme accent=accent />
            </CardContent>
        </Card>
    };

    let body = match project.link {
        Some(link) => view! {
            <a href=link.href target=link.target() rel=link.rel() class=theme.project_link>
                {card}
            </a>
        }
        .into_any(),
        None => card.into_any(),
    };

    view! { <div class=theme.project_hover>{body}</div> }
}

#[component]
fn ExperienceSection(profile: &'static Profile, theme: &'static Theme) -> impl IntoView {
    view! {
        <AnimatedSection motion=theme.motions.experience class=theme.section>
            <SectionHeading title="Experience" class=theme.heading icon=None />
            <div class=theme.experience_stack>
                {profile
                    .experience
                    .iter()
                    .map(|entry| view! { <ExperienceCard entry=entry theme=theme /> })
                    .collect_view()}
            </div>
        </AnimatedSection>
    }
}

#[component]
fn ExperienceCard(entry: &'static Experience, theme: &'static Theme) -> impl IntoView {
    view! {
        <div class=theme.experience_hover>
            <Card class=theme.experience_card>
                <CardContent>
                    <h3 class=theme.role>{entry.role}</h3>
                    <p class=theme.organization>{entry.organization}</p>
                    <p class=theme.summary>{entry.summary}</p>
                    {(!entry.bullets.is_empty())
                        .then(|| {
                            view! { <Bullets items=entry.bullets theme=theme accent=theme.accent(0) /> }
                        })}
                </CardContent>
            </Card>
        </div>
    }
}

#[component]
fn Skills(profile: &'static Profile, theme: &'static Theme) -> impl IntoView {
    view! {
        <AnimatedSection motion=theme.motions.skills class=theme.section>
            <SectionHeading title="Technical Skills" class=theme.heading icon=None />
            <div class=theme.skill_grid>
                {profile
                    .skills
                    .iter()
                    .enumerate()
                    .map(|(index, group)| {
                        view! { <SkillTile group=group theme=theme accent=theme.accent(index) /> }
                    })
                    .collect_view()}
            </div>
        </AnimatedSection>
    }
}

#[component]
fn SkillTile(
    group: &'static SkillGroup,
    theme: &'static Theme,
    accent: &'static Accent,
) -> impl IntoView {
    view! {
        <div class=accent.tile>
            <h4 class=accent.tile_title>
                {theme.skill_icons.then(|| view! { <Icon kind=group.icon class="h-4 w-4" /> })}
                {group.title}
            </h4>
            <p class=theme.skill_text>{group.joined()}</p>
        </div>
    }
}

/// Copyright line and icon-only contact links. Not animated.
#[component]
fn Footer(profile: &'static Profile, theme: &'static Theme, year: i32) -> impl IntoView {
    view! {
        <footer class=theme.footer>
            <p>{format!("© {year} {}", profile.name)}</p>
            <div class=theme.footer_links>
                {profile
                    .footer_links
                    .iter()
                    .map(|link| {
                        view! {
                            <a
                                href=link.href
                                target=link.target()
                                rel=link.rel()
                                class=theme.footer_link
                                aria-label=link.label
                            >
                                <Icon kind=link.icon class="h-5 w-5" />
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use crate::content::{CLASSIC_PROFILE, PageVariant, VIVID_PROFILE};
    use crate::ui::render_document;
    use crate::ui::theme::Theme;

    const OUTBOUND: [&str; 5] = [
        "https://github.com/adeolaogundeji/adeolaogundeji.github.io",
        "https://github.com/adeolaogundeji",
        "https://www.linkedin.com/in/ogundeji-adeola-327a73235/",
        "mailto:ogundejideola0@gmail.com",
        "tel:+12813863380",
    ];

    #[test]
    fn test_vivid_contains_every_outbound_link_verbatim() {
        let html = render_document(PageVariant::Vivid, 2026);
        for href in OUTBOUND {
            assert!(html.contains(&format!(r#"href="{href}""#)), "missing {href}");
        }
    }

    #[test]
    fn test_classic_keeps_its_own_contact_set() {
        let html = render_document(PageVariant::Classic, 2026);
        assert!(html.contains(r#"href="mailto:Ogundejiadeola0@gmail.com""#));
        assert!(html.contains(r#"href="tel:+12813863380""#));
        assert!(!html.contains("linkedin.com"));
        assert!(!html.contains("mailto:ogundejideola0@gmail.com"));
    }

    #[test]
    fn test_footer_year_follows_input() {
        let first = render_document(PageVariant::Vivid, 2026);
        let second = render_document(PageVariant::Vivid, 2031);

        assert!(first.contains("© 2026 Adeola Ogundeji"));
        assert!(!first.contains("2031"));
        assert!(second.contains("© 2031 Adeola Ogundeji"));
    }

    #[test]
    fn test_every_bullet_renders_exactly_once() {
        for (variant, profile) in [
            (PageVariant::Vivid, &VIVID_PROFILE),
            (PageVariant::Classic, &CLASSIC_PROFILE),
        ] {
            let html = render_document(variant, 2026);
            let bullets = profile
                .projects
                .iter()
                .flat_map(|p| p.block.bullets)
                .chain(profile.experience.iter().flat_map(|e| e.bullets));
            for bullet in bullets {
                assert_eq!(html.matches(bullet).count(), 1, "{variant}: {bullet}");
            }
        }
    }

    #[test]
    fn test_experience_entries_per_variant() {
        let vivid = render_document(PageVariant::Vivid, 2026);
        assert!(vivid.contains("Asset Management Intern"));
        assert!(vivid.contains("Reduced processing time by 90% through automation"));
        assert!(!vivid.contains("IT Support Assistant"));

        let classic = render_document(PageVariant::Classic, 2026);
        assert!(classic.contains("Asset Management Intern"));
        assert!(classic.contains("IT Support Assistant"));
        assert!(!classic.contains("Reduced processing time"));
    }

    #[test]
    fn test_sections_in_document_order() {
        for variant in [PageVariant::Vivid, PageVariant::Classic] {
            let html = render_document(variant, 2026);
            let positions: Vec<usize> = [
                "Adeola Ogundeji</h1>",
                "About Me",
                "Projects",
                "Experience",
                "Technical Skills",
                "<footer",
            ]
            .iter()
            .map(|marker| html.find(marker).unwrap_or_else(|| panic!("{variant}: {marker}")))
            .collect();

            assert!(positions.windows(2).all(|w| w[0] < w[1]), "{variant}: {positions:?}");
        }
    }

    #[test]
    fn test_all_sections_but_footer_are_animated() {
        let html = render_document(PageVariant::Vivid, 2026);
        let body = &html[html.find("<body").unwrap()..];

        let sections = body.matches("<section").count();
        assert_eq!(sections, 5);
        for chunk in body.split("<section").skip(1) {
            let open_tag = &chunk[..chunk.find('>').unwrap()];
            assert!(open_tag.contains(r#"data-reveal="unseen""#), "{open_tag}");
        }

        let hero = body.split("<section").nth(1).unwrap();
        assert!(hero.contains(r#"data-trigger="mount""#));

        let footer = &body[body.find("<footer").unwrap()..];
        assert!(!footer.contains("data-reveal"));
    }

    #[test]
    fn test_hero_links_are_anchors_not_buttons() {
        for variant in [PageVariant::Vivid, PageVariant::Classic] {
            let html = render_document(variant, 2026);
            assert!(!html.contains("<button"), "{variant}");
            assert!(html.contains(Theme::for_variant(variant).buttons.outline), "{variant}");
            assert!(html.contains(Theme::for_variant(variant).buttons.secondary), "{variant}");
        }
    }

    #[test]
    fn test_vivid_hero_github_icon_tilts() {
        let html = render_document(PageVariant::Vivid, 2026);
        let hero = html.split("<section").nth(1).unwrap();
        assert_eq!(hero.matches("group-hover:rotate-12").count(), 1);
        assert_eq!(hero.matches("group-hover:scale-110").count(), 2);
    }

    #[test]
    fn test_vivid_project_cards_link_to_profile() {
        let html = render_document(PageVariant::Vivid, 2026);
        assert_eq!(html.matches(r#"href="https://github.com/adeolaogundeji""#).count(), 2);

        let classic = render_document(PageVariant::Classic, 2026);
        assert!(!classic.contains(r#"href="https://github.com/adeolaogundeji""#));
    }
}
