//! Project drafts and admin form mapping
//!
//! `DraftForm` holds what the admin typed, as text. `into_draft` turns it into
//! a typed `ProjectDraft` whose content always matches the chosen category.

use crate::error::{Error, Result};
use crate::types::{
    Attachment, AttachmentKind, Category, DesignContent, ExecutionType, ExternalLink,
    MiscContent, Phase, PortfolioProject, ProjectContent, StrategyContent, WebsiteContent,
};
use chrono::{DateTime, NaiveDate, Utc};

/// Everything the admin supplies for a project; the repository adds the id
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDraft {
    pub title: String,
    /// Blank means "generate one"
    pub slug: String,
    pub execution: ExecutionType,
    pub date: NaiveDate,
    pub main_image: String,
    pub summary: String,
    pub content: ProjectContent,
    pub attachments: Vec<Attachment>,
    pub external_links: Vec<ExternalLink>,
}

impl ProjectDraft {
    pub fn category(&self) -> Category {
        self.content.category()
    }

    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::MissingField("title"));
        }
        if self.summary.trim().is_empty() {
            return Err(Error::MissingField("summary"));
        }
        Ok(())
    }

    /// Parse a draft from project-shaped JSON; `id` may be omitted
    pub fn from_json(text: &str) -> Result<Self> {
        let mut value: serde_json::Value = serde_json::from_str(text)?;
        if let Some(object) = value.as_object_mut() {
            object
                .entry("id")
                .or_insert_with(|| serde_json::Value::String(String::new()));
        }
        let project: PortfolioProject = serde_json::from_value(value)?;
        Ok(Self::from(&project))
    }

    pub(crate) fn into_project(
        self,
        id: String,
        slug: String,
        created_at: Option<DateTime<Utc>>,
        updated_at: Option<DateTime<Utc>>,
    ) -> PortfolioProject {
        PortfolioProject {
            id,
            slug,
            title: self.title.trim().to_string(),
            execution: self.execution,
            date: self.date,
            main_image: self.main_image.trim().to_string(),
            summary: self.summary.trim().to_string(),
            content: self.content,
            attachments: self.attachments,
            external_links: self.external_links,
            created_at,
            updated_at,
        }
    }
}

impl From<&PortfolioProject> for ProjectDraft {
    fn from(project: &PortfolioProject) -> Self {
        Self {
            title: project.title.clone(),
            slug: project.slug.clone(),
            execution: project.execution,
            date: project.date,
            main_image: project.main_image.clone(),
            summary: project.summary.clone(),
            content: project.content.clone(),
            attachments: project.attachments.clone(),
            external_links: project.external_links.clone(),
        }
    }
}

// ============================================
// Form mapping
// ============================================

/// Raw admin form state
#[derive(Debug, Clone, PartialEq)]
pub struct DraftForm {
    pub title: String,
    pub slug: String,
    pub category: Category,
    pub execution: ExecutionType,
    /// YYYY-MM-DD, as produced by `<input type="date">`
    pub date: String,
    pub main_image: String,
    pub summary: String,
    /// Comma or newline separated image URLs
    pub image_urls: String,
    /// Comma or newline separated URLs
    pub external_links: String,
    pub content: ContentFields,
    /// Non-image attachments carried through an edit untouched
    pub other_attachments: Vec<Attachment>,
}

impl Default for DraftForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            slug: String::new(),
            category: Category::Strategy,
            execution: ExecutionType::Real,
            date: String::new(),
            main_image: String::new(),
            summary: String::new(),
            image_urls: String::new(),
            external_links: String::new(),
            content: ContentFields::default(),
            other_attachments: Vec::new(),
        }
    }
}

impl DraftForm {
    pub fn from_project(project: &PortfolioProject) -> Self {
        let (images, others): (Vec<&Attachment>, Vec<&Attachment>) = project
            .attachments
            .iter()
            .partition(|a| a.kind == AttachmentKind::Image);

        Self {
            title: project.title.clone(),
            slug: project.slug.clone(),
            category: project.category(),
            execution: project.execution,
            date: project.date.format("%Y-%m-%d").to_string(),
            main_image: project.main_image.clone(),
            summary: project.summary.clone(),
            image_urls: images.iter().map(|a| a.url.as_str()).collect::<Vec<_>>().join(", "),
            external_links: project
                .external_links
                .iter()
                .map(|l| l.url.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            content: ContentFields::from_content(&project.content),
            other_attachments: others.into_iter().cloned().collect(),
        }
    }

    pub fn into_draft(&self) -> Result<ProjectDraft> {
        let date = parse_date(&self.date)?;
        let mut attachments = attachments_from_urls(&self.image_urls);
        attachments.extend(self.other_attachments.iter().cloned());

        let draft = ProjectDraft {
            title: self.title.trim().to_string(),
            slug: self.slug.trim().to_string(),
            execution: self.execution,
            date,
            main_image: self.main_image.trim().to_string(),
            summary: self.summary.trim().to_string(),
            content: self.content.into_content(self.category),
            attachments,
            external_links: links_from_urls(&self.external_links),
        };
        draft.validate()?;
        Ok(draft)
    }
}

/// Category-specific sub-form. Fields shared by several categories
/// (brief, objective, description) are kept once.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContentFields {
    pub brief: String,
    pub objective: String,
    pub description: String,
    // Strategy
    pub problem_statement: String,
    pub data_and_brief: String,
    /// One phase per line, `Title: description`
    pub phases: String,
    pub evaluation: String,
    pub conclusion: String,
    // Design
    pub problem: String,
    pub uses_ai: bool,
    pub closing: String,
    // Website
    pub architecture: String,
    pub tech_stack: String,
    pub interactive_experiences: String,
    pub deliverables: String,
    // Miscellaneous
    pub misc_label: String,
    pub highlights: String,
}

impl ContentFields {
    pub fn from_content(content: &ProjectContent) -> Self {
        match content {
            ProjectContent::Strategy(c) => Self {
                problem_statement: c.problem_statement.clone(),
                objective: c.objective.clone(),
                data_and_brief: c.data_and_brief.clone(),
                phases: format_phases(&c.phases),
                evaluation: c.evaluation.clone(),
                conclusion: c.conclusion.clone(),
                ..Default::default()
            },
            ProjectContent::Design(c) => Self {
                brief: c.brief.clone(),
                problem: c.problem.clone(),
                uses_ai: c.uses_ai,
                description: c.description.clone(),
                closing: c.closing.clone(),
                ..Default::default()
            },
            ProjectContent::Website(c) => Self {
                brief: c.brief.clone(),
                objective: c.objective.clone(),
                architecture: c.architecture.clone(),
                tech_stack: c.tech_stack.join(", "),
                interactive_experiences: c.interactive_experiences.join(", "),
                deliverables: c.deliverables.join(", "),
                ..Default::default()
            },
            ProjectContent::Miscellaneous(c) => Self {
                misc_label: c.label.clone(),
                description: c.description.clone(),
                highlights: c.highlights.join(", "),
                ..Default::default()
            },
        }
    }

    /// Build content of `category` from the fields that category uses
    pub fn into_content(&self, category: Category) -> ProjectContent {
        let text = |s: &String| s.trim().to_string();
        match category {
            Category::Strategy => ProjectContent::Strategy(StrategyContent {
                problem_statement: text(&self.problem_statement),
                objective: text(&self.objective),
                data_and_brief: text(&self.data_and_brief),
                phases: parse_phases(&self.phases),
                evaluation: text(&self.evaluation),
                conclusion: text(&self.conclusion),
            }),
            Category::Design => ProjectContent::Design(DesignContent {
                brief: text(&self.brief),
                problem: text(&self.problem),
                uses_ai: self.uses_ai,
                description: text(&self.description),
                closing: text(&self.closing),
            }),
            Category::Website => ProjectContent::Website(WebsiteContent {
                brief: text(&self.brief),
                objective: text(&self.objective),
                architecture: text(&self.architecture),
                tech_stack: split_list(&self.tech_stack),
                interactive_experiences: split_list(&self.interactive_experiences),
                deliverables: split_list(&self.deliverables),
            }),
            Category::Miscellaneous => ProjectContent::Miscellaneous(MiscContent {
                label: text(&self.misc_label),
                description: text(&self.description),
                highlights: split_list(&self.highlights),
            }),
        }
    }
}

// ============================================
// Text helpers
// ============================================

pub fn parse_date(text: &str) -> Result<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::MissingField("date"));
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| Error::InvalidDate(text.to_string()))
}

/// Split on commas and newlines, dropping blanks
pub fn split_list(text: &str) -> Vec<String> {
    text.split([',', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn attachments_from_urls(text: &str) -> Vec<Attachment> {
    split_list(text)
        .into_iter()
        .enumerate()
        .map(|(idx, url)| Attachment {
            id: format!("img-{}", idx),
            label: format!("Imagen {}", idx + 1),
            kind: AttachmentKind::Image,
            url,
        })
        .collect()
}

pub fn links_from_urls(text: &str) -> Vec<ExternalLink> {
    split_list(text)
        .into_iter()
        .map(|url| ExternalLink {
            label: url.clone(),
            url,
        })
        .collect()
}

/// `Title: description` per line, numbered in order
pub fn parse_phases(text: &str) -> Vec<Phase> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(idx, line)| {
            let (title, description) = match line.split_once(':') {
                Some((title, description)) => (title.trim(), description.trim()),
                None => (line, ""),
            };
            Phase {
                number: idx as u32 + 1,
                title: title.to_string(),
                description: description.to_string(),
            }
        })
        .collect()
}

pub fn format_phases(phases: &[Phase]) -> String {
    phases
        .iter()
        .map(|p| {
            if p.description.is_empty() {
                p.title.clone()
            } else {
                format!("{}: {}", p.title, p.description)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> DraftForm {
        DraftForm {
            title: "  Campaña Norte ".to_string(),
            category: Category::Website,
            date: "2024-08-01".to_string(),
            summary: "Sitio de campaña".to_string(),
            image_urls: "https://a.jpg, https://b.jpg".to_string(),
            external_links: "https://demo.example".to_string(),
            content: ContentFields {
                brief: "Brief".to_string(),
                tech_stack: "Rust, Leptos\nTailwind".to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_into_draft_builds_category_content() {
        let draft = filled_form().into_draft().expect("draft failed");
        assert_eq!(draft.title, "Campaña Norte");
        assert_eq!(draft.category(), Category::Website);
        match &draft.content {
            ProjectContent::Website(c) => {
                assert_eq!(c.tech_stack, vec!["Rust", "Leptos", "Tailwind"]);
                assert_eq!(c.brief, "Brief");
            }
            other => panic!("unexpected content: {:?}", other),
        }
    }

    #[test]
    fn test_into_draft_attachments_and_links() {
        let draft = filled_form().into_draft().unwrap();
        assert_eq!(draft.attachments.len(), 2);
        assert_eq!(draft.attachments[1].id, "img-1");
        assert_eq!(draft.attachments[1].label, "Imagen 2");
        assert_eq!(draft.external_links[0].label, "https://demo.example");
    }

    #[test]
    fn test_into_draft_requires_title() {
        let form = DraftForm {
            title: "   ".to_string(),
            ..filled_form()
        };
        assert!(matches!(form.into_draft(), Err(Error::MissingField("title"))));
    }

    #[test]
    fn test_into_draft_rejects_bad_date() {
        let form = DraftForm {
            date: "01/08/2024".to_string(),
            ..filled_form()
        };
        assert!(matches!(form.into_draft(), Err(Error::InvalidDate(_))));

        let form = DraftForm {
            date: String::new(),
            ..filled_form()
        };
        assert!(matches!(form.into_draft(), Err(Error::MissingField("date"))));
    }

    #[test]
    fn test_form_from_project_keeps_other_attachments() {
        let draft = filled_form().into_draft().unwrap();
        let mut project = draft.into_project("p".into(), "s".into(), None, None);
        project.attachments.push(Attachment {
            id: "doc-0".to_string(),
            label: "Brief PDF".to_string(),
            kind: AttachmentKind::Document,
            url: "https://doc.pdf".to_string(),
        });

        let form = DraftForm::from_project(&project);
        assert_eq!(form.image_urls, "https://a.jpg, https://b.jpg");
        assert_eq!(form.date, "2024-08-01");
        assert_eq!(form.other_attachments.len(), 1);

        let again = form.into_draft().unwrap();
        assert_eq!(again.attachments, project.attachments);
        assert_eq!(again.content, project.content);
    }

    #[test]
    fn test_parse_phases() {
        let phases = parse_phases("Research: entrevistas\n\n Concepto \nLanzamiento: redes: orgánico");
        assert_eq!(phases.len(), 3);
        assert_eq!(phases[0].number, 1);
        assert_eq!(phases[0].description, "entrevistas");
        assert_eq!(phases[1].title, "Concepto");
        assert_eq!(phases[1].description, "");
        assert_eq!(phases[2].number, 3);
        assert_eq!(phases[2].description, "redes: orgánico");
        assert_eq!(parse_phases(&format_phases(&phases)), phases);
    }

    #[test]
    fn test_content_fields_switch_category() {
        let fields = ContentFields {
            description: "Texto".to_string(),
            highlights: "uno, dos".to_string(),
            ..Default::default()
        };
        match fields.into_content(Category::Miscellaneous) {
            ProjectContent::Miscellaneous(c) => {
                assert_eq!(c.description, "Texto");
                assert_eq!(c.highlights, vec!["uno", "dos"]);
            }
            other => panic!("unexpected content: {:?}", other),
        }
        assert_eq!(fields.into_content(Category::Design).category(), Category::Design);
    }

    #[test]
    fn test_draft_from_json_without_id() {
        let json = r#"{"title":"Nuevo","category":"Diseño","projectType":"Ficticio",
            "date":"2025-01-05","summary":"Resumen","content":{"usoIA":true}}"#;
        let draft = ProjectDraft::from_json(json).expect("parse failed");
        assert_eq!(draft.category(), Category::Design);
        assert_eq!(draft.execution, ExecutionType::Fictional);
        assert_eq!(draft.slug, "");
    }

    #[test]
    fn test_split_list_drops_blanks() {
        assert_eq!(split_list(" a ,, b\n\n c,"), vec!["a", "b", "c"]);
        assert!(split_list("  ").is_empty());
    }
}
