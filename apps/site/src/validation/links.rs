use serde::Serialize;

use crate::models::portfolio::{ContactLink, LinkScheme, Portfolio};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkIssueKind {
    UnknownScheme,
    InsecureScheme,
    ExternalNotMarked,
    LocalMarkedExternal,
    TextMismatch,
    MissingTarget,
    DuplicateTarget,
}

#[derive(Debug, Clone, Serialize)]
pub struct LinkIssue {
    pub href: String,
    pub kind: LinkIssueKind,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LinkReport {
    pub passed: bool,
    pub checked: usize,
    pub issues: Vec<LinkIssue>,
}

fn issue(href: &str, kind: LinkIssueKind, message: String) -> LinkIssue {
    LinkIssue {
        href: href.to_string(),
        kind,
        message,
    }
}

/// Keeps `+` and ASCII digits, so `+1 (316) 214-8670` compares equal to `+13162148670`.
fn dial_string(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Checks one outbound link.
///
/// - mail and phone links must show the same address or number they dial
/// - web links must be `https://` and open in a new browsing context
/// - anything else is an unknown scheme
pub fn check_link(link: &ContactLink) -> Vec<LinkIssue> {
    let mut issues = Vec::new();
    let href = link.href.as_str();

    match link.scheme() {
        LinkScheme::Mailto => {
            let address = &href["mailto:".len()..];
            if !address.eq_ignore_ascii_case(link.label.trim()) {
                issues.push(issue(
                    href,
                    LinkIssueKind::TextMismatch,
                    format!("Shows '{}' but mails '{}'", link.label, address),
                ));
            }
        }
        LinkScheme::Tel => {
            let number = &href["tel:".len()..];
            if dial_string(number).is_empty() || dial_string(number) != dial_string(&link.label) {
                issues.push(issue(
                    href,
                    LinkIssueKind::TextMismatch,
                    format!("Shows '{}' but dials '{}'", link.label, number),
                ));
            }
        }
        LinkScheme::Http => issues.push(issue(
            href,
            LinkIssueKind::InsecureScheme,
            "External link should use https://".to_string(),
        )),
        LinkScheme::Https => {}
        LinkScheme::Fragment | LinkScheme::Unknown => issues.push(issue(
            href,
            LinkIssueKind::UnknownScheme,
            format!("'{href}' is not a mailto:, tel: or https:// link"),
        )),
    }

    match link.scheme() {
        LinkScheme::Https | LinkScheme::Http if !link.external => issues.push(issue(
            href,
            LinkIssueKind::ExternalNotMarked,
            "Profile link should open in a new browsing context".to_string(),
        )),
        LinkScheme::Mailto | LinkScheme::Tel if link.external => issues.push(issue(
            href,
            LinkIssueKind::LocalMarkedExternal,
            "Mail and phone links should not open a new browsing context".to_string(),
        )),
        _ => {}
    }

    issues
}

/// Every distinct `href="#..."` fragment in `html`, in first-seen order.
pub fn fragment_targets(html: &str) -> Vec<&str> {
    const MARKER: &str = "href=\"#";
    let mut targets: Vec<&str> = Vec::new();
    let mut rest = html;
    while let Some(at) = rest.find(MARKER) {
        rest = &rest[at + MARKER.len()..];
        let Some(close) = rest.find('"') else { break };
        let id = &rest[..close];
        if !targets.contains(&id) {
            targets.push(id);
        }
        rest = &rest[close..];
    }
    targets
}

/// Checks that every in-page fragment link resolves to exactly one element `id` in `html`.
pub fn check_fragment_targets(html: &str) -> Vec<LinkIssue> {
    let mut issues = Vec::new();
    for id in fragment_targets(html) {
        let href = format!("#{id}");
        let count = html.matches(&format!(" id=\"{id}\"")).count();
        match count {
            1 => {}
            0 => issues.push(issue(
                &href,
                LinkIssueKind::MissingTarget,
                format!("No element with id '{id}'"),
            )),
            n => issues.push(issue(
                &href,
                LinkIssueKind::DuplicateTarget,
                format!("{n} elements share id '{id}'"),
            )),
        }
    }
    issues
}

/// Checks every contact link in the portfolio and every in-page fragment of the rendered page.
pub fn check_portfolio(portfolio: &Portfolio, html: &str) -> LinkReport {
    let links: Vec<&ContactLink> = portfolio
        .hero_links
        .iter()
        .chain(portfolio.contact_links.iter())
        .collect();

    let mut issues: Vec<LinkIssue> = links.iter().flat_map(|l| check_link(l)).collect();
    issues.extend(check_fragment_targets(html));

    LinkReport {
        passed: issues.is_empty(),
        checked: links.len() + fragment_targets(html).len(),
        issues,
    }
}
