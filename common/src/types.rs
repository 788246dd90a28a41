//! Portfolio data model
//!
//! Wire format follows the JSON kept in browser storage and in backup files:
//! - `category` selects the shape of `content`
//! - `projectType` carries the execution type
//! - content keys keep their historical (Spanish) names

use crate::error::{Error, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Project category (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Estrategia", alias = "Strategy")]
    Strategy,
    #[serde(rename = "Diseño", alias = "Design")]
    Design,
    #[serde(rename = "Website")]
    Website,
    #[serde(rename = "Varios", alias = "Miscellaneous")]
    Miscellaneous,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Strategy,
        Category::Design,
        Category::Website,
        Category::Miscellaneous,
    ];

    /// Wire value, also used as display label
    pub fn label(&self) -> &'static str {
        match self {
            Category::Strategy => "Estrategia",
            Category::Design => "Diseño",
            Category::Website => "Website",
            Category::Miscellaneous => "Varios",
        }
    }

    /// Accepts the wire value or the English name, case-insensitively
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim().to_lowercase();
        Category::ALL.into_iter().find(|c| {
            c.label().to_lowercase() == key || c.english_name() == key
        })
    }

    fn english_name(&self) -> &'static str {
        match self {
            Category::Strategy => "strategy",
            Category::Design => "design",
            Category::Website => "website",
            Category::Miscellaneous => "miscellaneous",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Category::from_key(s).ok_or_else(|| {
            format!("Unknown category: {}. Use Estrategia, Diseño, Website or Varios", s)
        })
    }
}

/// How the project was executed (descriptive only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ExecutionType {
    #[serde(rename = "Ficticio", alias = "Fictional")]
    Fictional,
    #[default]
    #[serde(rename = "Real")]
    Real,
    #[serde(rename = "Estudio de Caso", alias = "Case-Study")]
    CaseStudy,
}

impl ExecutionType {
    pub const ALL: [ExecutionType; 3] = [
        ExecutionType::Real,
        ExecutionType::Fictional,
        ExecutionType::CaseStudy,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExecutionType::Fictional => "Ficticio",
            ExecutionType::Real => "Real",
            ExecutionType::CaseStudy => "Estudio de Caso",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim().to_lowercase();
        match key.as_str() {
            "ficticio" | "fictional" => Some(ExecutionType::Fictional),
            "real" => Some(ExecutionType::Real),
            "estudio de caso" | "case-study" | "case study" => Some(ExecutionType::CaseStudy),
            _ => None,
        }
    }
}

impl fmt::Display for ExecutionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for ExecutionType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ExecutionType::from_key(s).ok_or_else(|| {
            format!("Unknown project type: {}. Use Real, Ficticio or \"Estudio de Caso\"", s)
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    #[default]
    Image,
    Document,
    Link,
    Video,
}

/// Downloadable or viewable material attached to a project
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Attachment {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: AttachmentKind,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExternalLink {
    pub label: String,
    pub url: String,
}

// ============================================
// Category-specific content
// ============================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StrategyContent {
    #[serde(rename = "planteamientoDelProblema")]
    pub problem_statement: String,
    #[serde(rename = "objetivo")]
    pub objective: String,
    #[serde(rename = "datosYBrief")]
    pub data_and_brief: String,
    #[serde(rename = "fases")]
    pub phases: Vec<Phase>,
    #[serde(rename = "evaluacion")]
    pub evaluation: String,
    pub conclusion: String,
}

/// One step of a strategy, numbered from 1
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Phase {
    #[serde(rename = "fase")]
    pub number: u32,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descripcion")]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DesignContent {
    pub brief: String,
    #[serde(rename = "problema")]
    pub problem: String,
    #[serde(rename = "usoIA")]
    pub uses_ai: bool,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "conclusionOPresentacion")]
    pub closing: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WebsiteContent {
    pub brief: String,
    #[serde(rename = "objetivo")]
    pub objective: String,
    #[serde(rename = "arquitectura")]
    pub architecture: String,
    #[serde(rename = "stackTecnico")]
    pub tech_stack: Vec<String>,
    #[serde(rename = "experienciasInteractivo")]
    pub interactive_experiences: Vec<String>,
    #[serde(rename = "entregables")]
    pub deliverables: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MiscContent {
    #[serde(rename = "categoria")]
    pub label: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    pub highlights: Vec<String>,
}

/// Content whose shape is selected by the project's category.
///
/// Serialized without a tag; the tag lives in the project's `category` field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProjectContent {
    Strategy(StrategyContent),
    Design(DesignContent),
    Website(WebsiteContent),
    Miscellaneous(MiscContent),
}

impl ProjectContent {
    pub fn category(&self) -> Category {
        match self {
            ProjectContent::Strategy(_) => Category::Strategy,
            ProjectContent::Design(_) => Category::Design,
            ProjectContent::Website(_) => Category::Website,
            ProjectContent::Miscellaneous(_) => Category::Miscellaneous,
        }
    }

    /// Blank content of the given category
    pub fn empty(category: Category) -> Self {
        match category {
            Category::Strategy => ProjectContent::Strategy(StrategyContent::default()),
            Category::Design => ProjectContent::Design(DesignContent::default()),
            Category::Website => ProjectContent::Website(WebsiteContent::default()),
            Category::Miscellaneous => ProjectContent::Miscellaneous(MiscContent::default()),
        }
    }

    /// Decode raw JSON content for `category`, rejecting foreign shapes
    pub fn from_value(category: Category, value: serde_json::Value) -> Result<Self> {
        if value.is_null() {
            return Ok(Self::empty(category));
        }
        let content = match category {
            Category::Strategy => ProjectContent::Strategy(decode(category, value)?),
            Category::Design => ProjectContent::Design(decode(category, value)?),
            Category::Website => ProjectContent::Website(decode(category, value)?),
            Category::Miscellaneous => ProjectContent::Miscellaneous(decode(category, value)?),
        };
        Ok(content)
    }
}

fn decode<T: DeserializeOwned>(category: Category, value: serde_json::Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| Error::ContentMismatch {
        category: category.label().to_string(),
        reason: e.to_string(),
    })
}

// ============================================
// Portfolio project
// ============================================

/// One showcased project
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "ProjectRecord")]
pub struct PortfolioProject {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub execution: ExecutionType,
    pub date: NaiveDate,
    pub main_image: String,
    pub summary: String,
    pub content: ProjectContent,
    pub attachments: Vec<Attachment>,
    pub external_links: Vec<ExternalLink>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl PortfolioProject {
    /// Category tag, always consistent with `content`
    pub fn category(&self) -> Category {
        self.content.category()
    }
}

/// Incoming wire shape; content is decoded once the category is known
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectRecord {
    id: String,
    #[serde(default)]
    slug: String,
    title: String,
    category: Category,
    #[serde(rename = "projectType", alias = "executionType", default)]
    execution: ExecutionType,
    date: NaiveDate,
    #[serde(default)]
    main_image: String,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    content: serde_json::Value,
    #[serde(default)]
    attachments: Option<Vec<Attachment>>,
    #[serde(default)]
    external_links: Option<Vec<ExternalLink>>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<ProjectRecord> for PortfolioProject {
    type Error = Error;

    fn try_from(record: ProjectRecord) -> Result<Self> {
        let content = ProjectContent::from_value(record.category, record.content)?;
        Ok(Self {
            id: record.id,
            slug: record.slug,
            title: record.title,
            execution: record.execution,
            date: record.date,
            main_image: record.main_image,
            summary: record.summary,
            content,
            attachments: record.attachments.unwrap_or_default(),
            external_links: record.external_links.unwrap_or_default(),
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }
}

/// Outgoing wire shape
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectRecordRef<'a> {
    id: &'a str,
    slug: &'a str,
    title: &'a str,
    category: Category,
    #[serde(rename = "projectType")]
    execution: ExecutionType,
    date: NaiveDate,
    main_image: &'a str,
    summary: &'a str,
    content: &'a ProjectContent,
    attachments: &'a [Attachment],
    external_links: &'a [ExternalLink],
    #[serde(skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

impl Serialize for PortfolioProject {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        ProjectRecordRef {
            id: &self.id,
            slug: &self.slug,
            title: &self.title,
            category: self.category(),
            execution: self.execution,
            date: self.date,
            main_image: &self.main_image,
            summary: &self.summary,
            content: &self.content,
            attachments: &self.attachments,
            external_links: &self.external_links,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
        .serialize(serializer)
    }
}
