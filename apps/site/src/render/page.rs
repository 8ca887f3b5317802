//! Page root: document head, header navigation, hero, the six sections and footer.

use askama::Template;

use crate::models::portfolio::{ContactLink, Portfolio, Profile};
use crate::render::components::{
    section, CertificationsBody, ContactBody, EducationBody, ExperienceBody, ProjectsBody,
    SkillsBody,
};
use crate::render::icons::Icon;

pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

/// Header navigation in display order.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { id: "skills", label: "Skills" },
    NavItem { id: "experience", label: "Experience" },
    NavItem { id: "projects", label: "Projects" },
    NavItem { id: "education", label: "Education" },
    NavItem { id: "certs", label: "Certifications" },
    NavItem { id: "contact", label: "Contact" },
];

/// Hero button linking to a section on the same page.
pub struct CallToAction {
    pub target: &'static str,
    pub icon: Icon,
    pub label: &'static str,
}

const CALLS_TO_ACTION: &[CallToAction] = &[
    CallToAction {
        target: "contact",
        icon: Icon::Mail,
        label: "Contact",
    },
    CallToAction {
        target: "projects",
        icon: Icon::BookOpen,
        label: "See Projects",
    },
];

const STYLESHEET_SCRIPT: &str = "https://cdn.tailwindcss.com";

/// Inputs to rendering that are not part of the portfolio data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Copyright year printed in the footer.
    pub year: i32,
}

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    profile: &'a Profile,
    stylesheet_script: &'a str,
    nav: &'a [NavItem],
    ctas: &'a [CallToAction],
    hero_links: &'a [ContactLink],
    /// Rendered `section.html` fragments, in display order.
    sections: Vec<String>,
    year: i32,
}

/// Renders the complete HTML document.
pub fn render_page(portfolio: &Portfolio, options: &RenderOptions) -> askama::Result<String> {
    let sections = vec![
        section(
            "skills",
            "Technical Skills",
            Icon::Wrench,
            &SkillsBody {
                groups: &portfolio.skills,
            }
            .render()?,
        )?,
        section(
            "experience",
            "Experience",
            Icon::Briefcase,
            &ExperienceBody {
                entries: &portfolio.experience,
            }
            .render()?,
        )?,
        section(
            "projects",
            "Projects",
            Icon::BookOpen,
            &ProjectsBody {
                entries: &portfolio.projects,
            }
            .render()?,
        )?,
        section(
            "education",
            "Education",
            Icon::GraduationCap,
            &EducationBody {
                entries: &portfolio.education,
            }
            .render()?,
        )?,
        section(
            "certs",
            "Certifications",
            Icon::Award,
            &CertificationsBody {
                entries: &portfolio.certifications,
            }
            .render()?,
        )?,
        section(
            "contact",
            "Get in touch",
            Icon::Mail,
            &ContactBody {
                links: &portfolio.contact_links,
            }
            .render()?,
        )?,
    ];

    PageTemplate {
        profile: &portfolio.profile,
        stylesheet_script: STYLESHEET_SCRIPT,
        nav: NAV_ITEMS,
        ctas: CALLS_TO_ACTION,
        hero_links: &portfolio.hero_links,
        sections,
        year: options.year,
    }
    .render()
}
