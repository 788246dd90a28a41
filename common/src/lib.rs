//! Portfolio Common Library
//!
//! Data model and admin workflow shared by the web front end and the CLI:
//! gate, content store, project repository, backups and gallery filtering.

pub mod types;
pub mod error;
pub mod auth;
pub mod store;
pub mod seed;
pub mod draft;
pub mod backup;
pub mod gallery;
pub mod repository;

pub use types::{
    Attachment, AttachmentKind, Category, DesignContent, ExecutionType, ExternalLink,
    MiscContent, Phase, PortfolioProject, ProjectContent, StrategyContent, WebsiteContent,
};
pub use error::{Error, Result};
pub use auth::{digest_secret, AdminGate, GateState, DEFAULT_PASSWORD_DIGEST};
pub use store::{ContentStore, MemoryStore};
pub use seed::seed_projects;
pub use draft::{ContentFields, DraftForm, ProjectDraft};
pub use backup::{backup_file_name, parse_backup, BackupDocument};
pub use gallery::{filter_projects, CategoryFilter};
pub use repository::{DeleteOutcome, LoadOrigin, ProjectRepository};
