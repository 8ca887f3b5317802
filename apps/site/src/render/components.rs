//! Section wrapper and the section bodies. Card, tag and link markup lives in
//! the `templates/components/` partials that the bodies include.

use askama::Template;

use crate::models::portfolio::{
    CertificationEntry, ContactLink, EducationEntry, ExperienceEntry, ProjectEntry, SkillGroup,
};
use crate::render::icons::Icon;

/// Anchorable page region: animated heading (icon + title), then `body`.
///
/// `body` must be markup produced by another template; it is inserted unescaped.
#[derive(Template)]
#[template(path = "section.html")]
pub struct SectionTemplate<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub icon: Icon,
    pub body: &'a str,
}

#[derive(Template)]
#[template(path = "sections/skills.html")]
pub struct SkillsBody<'a> {
    pub groups: &'a [SkillGroup],
}

#[derive(Template)]
#[template(path = "sections/experience.html")]
pub struct ExperienceBody<'a> {
    pub entries: &'a [ExperienceEntry],
}

#[derive(Template)]
#[template(path = "sections/projects.html")]
pub struct ProjectsBody<'a> {
    pub entries: &'a [ProjectEntry],
}

#[derive(Template)]
#[template(path = "sections/education.html")]
pub struct EducationBody<'a> {
    pub entries: &'a [EducationEntry],
}

#[derive(Template)]
#[template(path = "sections/certifications.html")]
pub struct CertificationsBody<'a> {
    pub entries: &'a [CertificationEntry],
}

#[derive(Template)]
#[template(path = "sections/contact.html")]
pub struct ContactBody<'a> {
    pub links: &'a [ContactLink],
}

/// Renders `body` inside a section wrapper.
pub fn section(id: &str, title: &str, icon: Icon, body: &str) -> askama::Result<String> {
    SectionTemplate {
        id,
        title,
        icon,
        body,
    }
    .render()
}
