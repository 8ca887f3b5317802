use serde::Serialize;

/// Named group of skill labels, rendered as one card of badges.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillGroup {
    pub name: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub organization: String,
    pub location: String,
    pub when: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EducationEntry {
    pub school: String,
    pub degree: String,
    pub location: String,
    pub when: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectEntry {
    pub name: String,
    pub stack: Vec<String>,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CertificationEntry {
    pub title: String,
    pub identifier: String,
}

/// Which kind of target a link points at, derived from its href prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkScheme {
    Mailto,
    Tel,
    Https,
    Http,
    Fragment,
    Unknown,
}

impl LinkScheme {
    pub fn of(href: &str) -> Self {
        if href.starts_with("mailto:") {
            LinkScheme::Mailto
        } else if href.starts_with("tel:") {
            LinkScheme::Tel
        } else if href.starts_with("https://") {
            LinkScheme::Https
        } else if href.starts_with("http://") {
            LinkScheme::Http
        } else if href.starts_with('#') {
            LinkScheme::Fragment
        } else {
            LinkScheme::Unknown
        }
    }
}

/// Icon shown next to a contact link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    Email,
    Phone,
    LinkedIn,
    GitHub,
    Scholar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactLink {
    pub kind: ContactKind,
    /// Visible text. For mail and phone links this is the address or number itself.
    pub label: String,
    pub href: String,
    /// Opens in a new browsing context.
    pub external: bool,
}

impl ContactLink {
    pub fn scheme(&self) -> LinkScheme {
        LinkScheme::of(&self.href)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub summary: String,
}

/// Everything the page renders, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub skills: Vec<SkillGroup>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub education: Vec<EducationEntry>,
    pub certifications: Vec<CertificationEntry>,
    /// Shortcuts shown in the hero aside.
    pub hero_links: Vec<ContactLink>,
    /// Links shown in the contact section.
    pub contact_links: Vec<ContactLink>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_detection() {
        assert_eq!(LinkScheme::of("mailto:a@b.c"), LinkScheme::Mailto);
        assert_eq!(LinkScheme::of("tel:+1555"), LinkScheme::Tel);
        assert_eq!(LinkScheme::of("https://github.com/x"), LinkScheme::Https);
        assert_eq!(LinkScheme::of("http://github.com/x"), LinkScheme::Http);
        assert_eq!(LinkScheme::of("#skills"), LinkScheme::Fragment);
        assert_eq!(LinkScheme::of("github.com/x"), LinkScheme::Unknown);
    }

    #[test]
    fn test_contact_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ContactKind::LinkedIn).unwrap();
        assert_eq!(json, "\"linked_in\"");
    }
}
