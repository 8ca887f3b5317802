use crate::models::portfolio::{ContactKind, ContactLink};

/// Glyphs used in section headings, the hero and contact links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Mail,
    Phone,
    LinkedIn,
    GitHub,
    GraduationCap,
    BookOpen,
    Briefcase,
    Wrench,
    Award,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Mail => "\u{2709}",
            Icon::Phone => "\u{260e}",
            Icon::LinkedIn => "in",
            Icon::GitHub => "\u{2325}",
            Icon::GraduationCap => "\u{1f393}",
            Icon::BookOpen => "\u{1f4d6}",
            Icon::Briefcase => "\u{1f4bc}",
            Icon::Wrench => "\u{1f527}",
            Icon::Award => "\u{1f3c5}",
        }
    }

    /// Suffix of the `icon-*` class.
    pub fn name(self) -> &'static str {
        match self {
            Icon::Mail => "mail",
            Icon::Phone => "phone",
            Icon::LinkedIn => "linkedin",
            Icon::GitHub => "github",
            Icon::GraduationCap => "graduation-cap",
            Icon::BookOpen => "book-open-text",
            Icon::Briefcase => "briefcase-business",
            Icon::Wrench => "wrench",
            Icon::Award => "award",
        }
    }
}

impl From<ContactKind> for Icon {
    fn from(kind: ContactKind) -> Self {
        match kind {
            ContactKind::Email => Icon::Mail,
            ContactKind::Phone => Icon::Phone,
            ContactKind::LinkedIn => Icon::LinkedIn,
            ContactKind::GitHub => Icon::GitHub,
            ContactKind::Scholar => Icon::GraduationCap,
        }
    }
}

impl ContactLink {
    pub fn icon(&self) -> Icon {
        Icon::from(self.kind)
    }
}
