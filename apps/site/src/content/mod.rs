//! The portfolio's literal data. Built once at start-up and never mutated.

use crate::models::portfolio::{
    CertificationEntry, ContactKind, ContactLink, EducationEntry, ExperienceEntry, Portfolio,
    Profile, ProjectEntry, SkillGroup,
};

const EMAIL: &str = "mxalitashfeen@shockers.wichita.edu";
const PHONE_DISPLAY: &str = "+1 (316) 214\u{2011}8670";
const PHONE_HREF: &str = "tel:+13162148670";
const LINKEDIN_URL: &str = "https://www.linkedin.com/in/muhammad-tehmasib-ali-tashfeen-b683831a5/";
const GITHUB_URL: &str = "https://github.com/MuhammadTehamsibAliTashfeen";
const SCHOLAR_URL: &str = "https://scholar.google.com/citations?user=hlxSvmsAAAAJ&hl=en&oi=ao";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn group(name: &str, skills: &[&str]) -> SkillGroup {
    SkillGroup {
        name: name.to_string(),
        skills: strings(skills),
    }
}

fn link(kind: ContactKind, label: &str, href: &str, external: bool) -> ContactLink {
    ContactLink {
        kind,
        label: label.to_string(),
        href: href.to_string(),
        external,
    }
}

fn email_link() -> ContactLink {
    link(ContactKind::Email, EMAIL, &format!("mailto:{EMAIL}"), false)
}

fn phone_link() -> ContactLink {
    link(ContactKind::Phone, PHONE_DISPLAY, PHONE_HREF, false)
}

fn linkedin_link() -> ContactLink {
    link(ContactKind::LinkedIn, "LinkedIn", LINKEDIN_URL, true)
}

fn github_link() -> ContactLink {
    link(ContactKind::GitHub, "GitHub", GITHUB_URL, true)
}

fn scholar_link() -> ContactLink {
    link(ContactKind::Scholar, "Google Scholar", SCHOLAR_URL, true)
}

fn skills() -> Vec<SkillGroup> {
    vec![
        group("Languages", &["Python", "SQL", "Java"]),
        group(
            "ML / Stats",
            &[
                "Logistic Regression",
                "Regularization",
                "Tree Ensembles (XGBoost/LightGBM)",
                "Class Imbalance",
                "A/B Testing",
                "SHAP",
                "Cross-Validation",
                "Model Monitoring",
            ],
        ),
        group(
            "NLP / LLMs",
            &[
                "Prompting",
                "RAG",
                "Function Calling / Tools",
                "Agentic orchestration (LangChain / LangGraph)",
                "OpenAI & HF Ecosystem",
            ],
        ),
        group(
            "Big Data / Distributed",
            &[
                "PySpark (Spark SQL, DataFrames)",
                "Dask (DataFrame/Delayed)",
                "Parquet",
                "Delta-style patterns",
            ],
        ),
        group(
            "Cloud / MLOps",
            &[
                "AWS (S3, IAM, ECR, EKS, Batch/EMR)",
                "Docker",
                "Kubernetes",
                "Makefiles",
                "GitHub Actions",
            ],
        ),
        group(
            "Data Eng",
            &[
                "Data modeling",
                "Feature stores (files/SQL)",
                "Airflow-style orchestration",
                "Logging/Observability",
            ],
        ),
    ]
}

fn experience() -> Vec<ExperienceEntry> {
    vec![
        ExperienceEntry {
            role: "Graduate Research Assistant".to_string(),
            organization: "Wichita State University \u{2014} Software Analysis & Intelligence Laboratory"
                .to_string(),
            location: "Wichita, KS".to_string(),
            when: "Aug 2023 \u{2013} Present".to_string(),
            bullets: strings(&[
                "Built Python pipelines for large\u{2011}scale code/data processing; used Dask to parallelize feature extraction across thousands of artifacts; exploratory PySpark jobs on Parquet.",
                "Trained Logistic Regression, XGBoost, and LightGBM prototypes; evaluated with stratified CV, PR\u{2011}AUC, and SHAP explainability.",
                "Containerized ML jobs with Docker and deployed demos to Kubernetes (local & EKS\u{2011}style); added structured logging for reproducibility.",
                "Developed LLM patterns (RAG + tool calling) for static\u{2011}analysis triage; implemented agentic flows with LangChain/LangGraph.",
            ]),
        },
        ExperienceEntry {
            role: "Senior Consultant \u{2014} Technology Risk".to_string(),
            organization: "Ernst & Young Ford Rhodes".to_string(),
            location: "Islamabad, Pakistan".to_string(),
            when: "Mar 2023 \u{2013} Jun 2023".to_string(),
            bullets: strings(&[
                "Led cybersecurity audit for PTCL/Ufone covering data centers, network security, and SOC; identified vulnerabilities and compliance gaps.",
                "Assessed security controls and incident response mechanisms; aligned practices with standards and risk management best practices.",
            ]),
        },
        ExperienceEntry {
            role: "Information Systems Auditor".to_string(),
            organization: "The Bank of Punjab".to_string(),
            location: "Lahore, Pakistan".to_string(),
            when: "Nov 2020 \u{2013} Mar 2023".to_string(),
            bullets: strings(&[
                "Evaluated 100+ applications and security solutions to surface vulnerabilities and compliance issues.",
                "Produced quarterly IS assurance reports for the Board with executive\u{2011}ready risk heat maps and remediation timelines.",
            ]),
        },
        ExperienceEntry {
            role: "Executive Engineer".to_string(),
            organization: "Iron Bridge Systems".to_string(),
            location: "Lahore, Pakistan".to_string(),
            when: "Jan 2020 \u{2013} Nov 2020".to_string(),
            bullets: strings(&[
                "Implemented network & infrastructure security: Firewalls, SIEM, WAFs, AV \u{2014} reducing incidents by ~90% at client sites.",
            ]),
        },
    ]
}

fn projects() -> Vec<ProjectEntry> {
    vec![ProjectEntry {
        name: "Hospital Operations Analytics".to_string(),
        stack: strings(&[
            "Python",
            "Pandas",
            "Dask",
            "PySpark",
            "AWS S3",
            "Logistic Regression",
            "LightGBM",
            "XGBoost",
            "Kubernetes",
        ]),
        bullets: strings(&[
            "Scaled EDA and feature engineering with Dask/PySpark; added window functions and schema validation.",
            "Trained Logistic/LightGBM/XGBoost models with imbalance handling; delivered SHAP explainability and model cards.",
        ]),
    }]
}

fn education() -> Vec<EducationEntry> {
    vec![
        EducationEntry {
            school: "Wichita State University".to_string(),
            degree: "M.S. in Computer Science".to_string(),
            location: "Wichita, Kansas".to_string(),
            when: "Aug 2023 \u{2013} May 2026".to_string(),
        },
        EducationEntry {
            school: "National University of Computer and Emerging Sciences".to_string(),
            degree: "B.E. in Electrical Engineering".to_string(),
            location: "Islamabad, Pakistan".to_string(),
            when: "Aug 2015 \u{2013} May 2019".to_string(),
        },
    ]
}

fn certifications() -> Vec<CertificationEntry> {
    vec![
        CertificationEntry {
            title: "EC\u{2011}Council: Certified Ethical Hacker (CEH v11)".to_string(),
            identifier: "ECC9765324108".to_string(),
        },
        CertificationEntry {
            title: "(ISC)\u{b2} Certified in Cybersecurity".to_string(),
            identifier: "914385".to_string(),
        },
    ]
}

/// Builds the full portfolio in display order.
pub fn portfolio() -> Portfolio {
    Portfolio {
        profile: Profile {
            name: "Muhammad Tehmasib Ali Tashfeen".to_string(),
            headline: "Data Scientist & AI Engineer".to_string(),
            summary: "I build reliable data/ML systems and ship explainable models. Recent work spans \
                      large\u{2011}scale code/data processing with Dask & PySpark, model development \
                      (Logistic, LightGBM, XGBoost), and LLM\u{2011}powered static analysis agents using \
                      LangChain/LangGraph."
                .to_string(),
        },
        skills: skills(),
        experience: experience(),
        projects: projects(),
        education: education(),
        certifications: certifications(),
        hero_links: vec![
            email_link(),
            phone_link(),
            linkedin_link(),
            github_link(),
            scholar_link(),
        ],
        contact_links: vec![email_link(), phone_link(), linkedin_link(), github_link()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::portfolio::LinkScheme;

    #[test]
    fn test_every_list_is_non_empty() {
        let p = portfolio();
        assert!(!p.skills.is_empty());
        assert!(!p.experience.is_empty());
        assert!(!p.projects.is_empty());
        assert!(!p.education.is_empty());
        assert!(!p.certifications.is_empty());
        assert!(!p.hero_links.is_empty());
        assert!(!p.contact_links.is_empty());
        assert!(p.skills.iter().all(|g| !g.skills.is_empty()));
        assert!(p.experience.iter().all(|e| !e.bullets.is_empty()));
        assert!(p
            .projects
            .iter()
            .all(|e| !e.stack.is_empty() && !e.bullets.is_empty()));
    }

    #[test]
    fn test_skill_groups_keep_declaration_order() {
        let names: Vec<String> = portfolio().skills.into_iter().map(|g| g.name).collect();
        assert_eq!(
            names,
            vec![
                "Languages",
                "ML / Stats",
                "NLP / LLMs",
                "Big Data / Distributed",
                "Cloud / MLOps",
                "Data Eng",
            ]
        );
    }

    #[test]
    fn test_languages_group() {
        let p = portfolio();
        assert_eq!(p.skills[0].skills, vec!["Python", "SQL", "Java"]);
    }

    #[test]
    fn test_external_links_are_https() {
        let p = portfolio();
        for link in p.hero_links.iter().chain(p.contact_links.iter()) {
            if link.external {
                assert_eq!(link.scheme(), LinkScheme::Https, "{}", link.href);
            }
        }
    }

    #[test]
    fn test_portfolio_is_deterministic() {
        assert_eq!(portfolio(), portfolio());
    }
}
