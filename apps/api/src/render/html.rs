//! HTML fragment rendering for resumes.
//!
//! Markup lives in `templates/resume.html`; askama escapes every
//! interpolated value, attribute values included. Pure and deterministic:
//! identical inputs produce byte-identical output.

use askama::Template;
use thiserror::Error;
use tracing::error;

use crate::models::resume::{BasicInfo, EducationEntry, JobEntry, ProjectEntry};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to render resume template: {0}")]
    Template(#[from] askama::Error),
}

#[derive(Template)]
#[template(path = "resume.html")]
struct ResumeTemplate<'a> {
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    address: &'a str,
    links: Vec<&'a str>,
    sections: Vec<Section<'a>>,
    skills: Option<&'a str>,
}

#[derive(Template)]
#[template(source = "<div>Error generating resume: {{ message }}</div>", ext = "html")]
struct RenderFailure<'a> {
    message: &'a str,
}

struct Section<'a> {
    heading: &'static str,
    items: Vec<SectionItem<'a>>,
}

/// One titled entry of a section, already reduced to display strings.
struct SectionItem<'a> {
    title: &'a str,
    subtitle: &'a str,
    duration: &'a str,
    keywords: &'a str,
}

/// Renders the resume fragment.
///
/// `_education` is accepted for contract compatibility with clients that send
/// it; the fragment has no education section.
pub fn render_resume_html(
    basic_info: &BasicInfo,
    _education: &[(String, EducationEntry)],
    jobs: &[(String, JobEntry)],
    projects: &[(String, ProjectEntry)],
    skills: &str,
) -> Result<String, RenderError> {
    let mut sections = Vec::with_capacity(2);

    // A non-empty mapping keeps its heading even if every entry is skipped.
    if !jobs.is_empty() {
        let items = jobs
            .iter()
            .map(|(_, job)| job)
            .filter(|job| job.is_renderable())
            .map(|job| SectionItem {
                title: &job.company_name,
                subtitle: &job.position,
                duration: &job.duration,
                keywords: &job.keywords,
            })
            .collect();
        sections.push(Section {
            heading: "WORK EXPERIENCE",
            items,
        });
    }

    if !projects.is_empty() {
        let items = projects
            .iter()
            .map(|(_, project)| project)
            .filter(|project| project.is_renderable())
            .map(|project| SectionItem {
                title: &project.project_name,
                subtitle: &project.role,
                duration: &project.duration,
                keywords: &project.keywords,
            })
            .collect();
        sections.push(Section {
            heading: "PROJECTS",
            items,
        });
    }

    let template = ResumeTemplate {
        name: &basic_info.name,
        email: &basic_info.email,
        phone: &basic_info.phone,
        address: non_empty(&basic_info.address).unwrap_or_default(),
        links: [non_empty(&basic_info.linkedin), non_empty(&basic_info.portfolio)]
            .into_iter()
            .flatten()
            .collect(),
        sections,
        skills: Some(skills).filter(|s| !s.trim().is_empty()),
    };

    Ok(template.render()?)
}

/// Renders the fragment, substituting a minimal error block if rendering fails.
pub fn render_resume_html_or_fallback(
    basic_info: &BasicInfo,
    education: &[(String, EducationEntry)],
    jobs: &[(String, JobEntry)],
    projects: &[(String, ProjectEntry)],
    skills: &str,
) -> String {
    render_resume_html(basic_info, education, jobs, projects, skills).unwrap_or_else(|e| {
        error!("Error rendering resume HTML: {e}");
        fallback_fragment(&e)
    })
}

fn fallback_fragment(err: &RenderError) -> String {
    let message = err.to_string();
    RenderFailure { message: &message }
        .render()
        .unwrap_or_else(|_| "<div>Error generating resume</div>".to_string())
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> BasicInfo {
        BasicInfo {
            name: "Jane Doe".to_string(),
            phone: "555-1234".to_string(),
            email: "j@x.com".to_string(),
            ..Default::default()
        }
    }

    fn job(company: &str) -> JobEntry {
        JobEntry {
            company_name: company.to_string(),
            position: "Eng".to_string(),
            duration: "2020-2022".to_string(),
            keywords: "Go, SQL".to_string(),
        }
    }

    fn project(name: &str) -> ProjectEntry {
        ProjectEntry {
            project_name: name.to_string(),
            role: "Maintainer".to_string(),
            duration: "2023".to_string(),
            keywords: "Rust".to_string(),
        }
    }

    fn render(
        info: &BasicInfo,
        jobs: &[(String, JobEntry)],
        projects: &[(String, ProjectEntry)],
        skills: &str,
    ) -> String {
        render_resume_html(info, &[], jobs, projects, skills).unwrap()
    }

    fn position_of(haystack: &str, needle: &str) -> usize {
        haystack
            .find(needle)
            .unwrap_or_else(|| panic!("{needle:?} missing from output"))
    }

    #[test]
    fn test_minimal_resume_has_header_only() {
        let html = render(&jane(), &[], &[], "");

        assert!(html.contains(">Jane Doe</h1>"));
        assert!(html.contains("j@x.com | 555-1234"));
        assert!(!html.contains("WORK EXPERIENCE"));
        assert!(!html.contains("PROJECTS"));
        assert!(!html.contains("SKILLS"));
        assert!(html.starts_with("<div class=\"resume-container\""));
        assert!(html.trim_end().ends_with("</div>"));
    }

    #[test]
    fn test_links_line_absent_without_links() {
        let mut info = jane();
        info.linkedin = Some(String::new());
        let html = render(&info, &[], &[], "");
        assert!(!html.contains("<a "));
        assert_eq!(html.matches("<p ").count(), 1);
    }

    #[test]
    fn test_links_joined_with_separator() {
        let mut info = jane();
        info.linkedin = Some("https://linkedin.com/in/jane".to_string());
        info.portfolio = Some("https://jane.dev".to_string());
        let html = render(&info, &[], &[], "");

        let linkedin = position_of(&html, "href=\"https://linkedin.com/in/jane\"");
        let portfolio = position_of(&html, "href=\"https://jane.dev\"");
        assert!(linkedin < portfolio);
        assert!(html.contains("https://linkedin.com/in/jane</a> | <a href=\"https://jane.dev\""));
    }

    #[test]
    fn test_portfolio_alone_has_no_leading_separator() {
        let mut info = jane();
        info.portfolio = Some("https://jane.dev".to_string());
        let html = render(&info, &[], &[], "");
        assert!(html.contains(r#"<p style="font-size: 14px; color: #666;"><a href="https://jane.dev""#));
    }

    #[test]
    fn test_address_appended_only_when_present() {
        let mut info = jane();
        info.address = Some("Seoul".to_string());
        let html = render(&info, &[], &[], "");
        assert!(html.contains("j@x.com | 555-1234 | Seoul</p>"));

        info.address = Some(String::new());
        let html = render(&info, &[], &[], "");
        assert!(html.contains("j@x.com | 555-1234</p>"));
    }

    #[test]
    fn test_job_fields_render_in_order() {
        let jobs = vec![("1".to_string(), job("Acme"))];
        let html = render(&jane(), &jobs, &[], "");

        let heading = position_of(&html, "WORK EXPERIENCE");
        let company = position_of(&html, "Acme");
        let position = position_of(&html, ">Eng<");
        let duration = position_of(&html, "2020-2022");
        let keywords = position_of(&html, "Keywords: Go, SQL");
        assert!(heading < company);
        assert!(company < position);
        assert!(position < duration);
        assert!(duration < keywords);
    }

    #[test]
    fn test_placeholder_entries_are_skipped() {
        let jobs = vec![
            ("1".to_string(), job("")),
            ("2".to_string(), job("null")),
            ("3".to_string(), job("Initech")),
        ];
        let projects = vec![("p1".to_string(), project("null"))];
        let html = render(&jane(), &jobs, &projects, "");

        assert_eq!(html.matches("class=\"item\"").count(), 1);
        assert!(html.contains("Initech"));
        assert!(!html.contains(">null<"));
        // Heading is driven by the mapping, not by the surviving entries.
        assert!(html.contains("PROJECTS"));
        assert!(!html.contains("Maintainer"));
    }

    #[test]
    fn test_entries_follow_mapping_order() {
        let projects = vec![
            ("b".to_string(), project("Zeta")),
            ("a".to_string(), project("Alpha")),
        ];
        let html = render(&jane(), &[], &projects, "");
        assert!(position_of(&html, "Zeta") < position_of(&html, "Alpha"));
    }

    #[test]
    fn test_skills_rendered_untrimmed_when_non_blank() {
        let html = render(&jane(), &[], &[], "   ");
        assert!(!html.contains("SKILLS"));

        let html = render(&jane(), &[], &[], " Rust, Go ");
        assert!(html.contains("SKILLS"));
        assert!(html.contains("> Rust, Go </p>"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut info = jane();
        info.name = "<script>alert(1)</script>".to_string();
        info.linkedin = Some("javascript:\"x'".to_string());
        let jobs = vec![("1".to_string(), job("Smith & Sons <Ltd>"))];
        let html = render(&info, &jobs, &[], "C++ <b>");

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("href=\"javascript:&quot;x"));
        assert!(!html.contains("x'"));
        assert!(html.contains("Smith &amp; Sons &lt;Ltd&gt;"));
        assert!(html.contains("C++ &lt;b&gt;"));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let mut info = jane();
        info.address = Some("Busan".to_string());
        info.linkedin = Some("https://linkedin.com/in/jane".to_string());
        let jobs = vec![("1".to_string(), job("Acme"))];
        let projects = vec![("1".to_string(), project("Templar"))];

        let first = render(&info, &jobs, &projects, "Rust");
        let second = render(&info, &jobs, &projects, "Rust");
        assert_eq!(first, second);
    }

    #[test]
    fn test_fallback_fragment_escapes_message() {
        let html = fallback_fragment(&RenderError::Template(askama::Error::Fmt(std::fmt::Error)));
        assert!(html.starts_with("<div>Error generating resume: "));
        assert!(html.ends_with("</div>"));

        let failure = RenderFailure {
            message: "bad <input>",
        };
        assert_eq!(
            failure.render().unwrap(),
            "<div>Error generating resume: bad &lt;input&gt;</div>"
        );
    }

    #[test]
    fn test_markup_outside_text_is_not_escaped() {
        let mut info = jane();
        info.name = "Jane \"JD\" Doe".to_string();
        let html = render(&info, &[], &[], "");
        assert!(html.contains("font-family: 'Roboto'"));
        assert!(html.contains(">Jane &quot;JD&quot; Doe</h1>"));
    }
}
