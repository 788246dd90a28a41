//! Project repository
//!
//! Owns the in-memory project list and the content store behind it.
//! Every mutation writes the whole list and is committed in memory only
//! after the write succeeded.

use crate::backup::{parse_backup, BackupDocument};
use crate::draft::ProjectDraft;
use crate::error::{Error, Result};
use crate::seed::seed_projects;
use crate::store::ContentStore;
use crate::types::PortfolioProject;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Where the current list came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOrigin {
    /// Read from the store
    Stored,
    /// Store was empty, showing the bundled fixture
    Seed,
    /// Store content was unreadable, showing the bundled fixture
    Recovered(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Cancelled,
    NotFound,
}

pub struct ProjectRepository<S> {
    store: S,
    projects: Vec<PortfolioProject>,
    origin: LoadOrigin,
    revision: u64,
}

impl<S: ContentStore> ProjectRepository<S> {
    /// Load from `store`, falling back to the bundled fixture
    pub fn open(store: S) -> Self {
        Self::open_with_seed(store, seed_projects())
    }

    pub fn open_with_seed(store: S, seed: Vec<PortfolioProject>) -> Self {
        let (projects, origin) = match store.load() {
            Ok(Some(projects)) => (projects, LoadOrigin::Stored),
            Ok(None) => (seed, LoadOrigin::Seed),
            Err(e) => {
                tracing::warn!("stored projects unreadable, using defaults: {}", e);
                (seed, LoadOrigin::Recovered(e.to_string()))
            }
        };
        Self {
            store,
            projects,
            origin,
            revision: 0,
        }
    }

    pub fn list(&self) -> &[PortfolioProject] {
        &self.projects
    }

    pub fn get(&self, id: &str) -> Option<&PortfolioProject> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn origin(&self) -> &LoadOrigin {
        &self.origin
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Bumped on every committed change
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Append a new project with a fresh id
    pub fn create(&mut self, draft: ProjectDraft, now: DateTime<Utc>) -> Result<&PortfolioProject> {
        draft.validate()?;
        let id = self.fresh_id();
        let slug = if draft.slug.trim().is_empty() {
            format!("slug-{}", now.timestamp_millis())
        } else {
            draft.slug.trim().to_string()
        };
        let project = draft.into_project(id, slug, Some(now), None);
        tracing::info!(id = %project.id, title = %project.title, "creating project");

        let mut next = self.projects.clone();
        next.push(project);
        self.commit(next)?;
        Ok(&self.projects[self.projects.len() - 1])
    }

    /// Replace every project with `id` in place, keeping its id and creation time.
    /// Returns the first replaced entry.
    pub fn update(&mut self, id: &str, draft: ProjectDraft, now: DateTime<Utc>) -> Result<&PortfolioProject> {
        draft.validate()?;
        let first = self
            .position(id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        tracing::info!(id = %id, "updating project");

        let mut next = self.projects.clone();
        for current in next.iter_mut().filter(|p| p.id == id) {
            let slug = if draft.slug.trim().is_empty() {
                current.slug.clone()
            } else {
                draft.slug.trim().to_string()
            };
            *current = draft
                .clone()
                .into_project(current.id.clone(), slug, current.created_at, Some(now));
        }
        self.commit(next)?;
        Ok(&self.projects[first])
    }

    /// Remove every project with `id`. Returns false (and writes nothing) if absent.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        if self.position(id).is_none() {
            return Ok(false);
        }
        tracing::info!(id = %id, "deleting project");
        let mut next = self.projects.clone();
        next.retain(|p| p.id != id);
        self.commit(next)?;
        Ok(true)
    }

    /// Delete after `confirm` approves the project about to be removed
    pub fn delete_with<F>(&mut self, id: &str, confirm: F) -> Result<DeleteOutcome>
    where
        F: FnOnce(&PortfolioProject) -> bool,
    {
        let Some(project) = self.get(id) else {
            return Ok(DeleteOutcome::NotFound);
        };
        if !confirm(project) {
            return Ok(DeleteOutcome::Cancelled);
        }
        self.delete(id)?;
        Ok(DeleteOutcome::Deleted)
    }

    pub fn export(&self, now: DateTime<Utc>) -> BackupDocument {
        BackupDocument::new(self.projects.clone(), now)
    }

    /// Replace everything with the projects of an uploaded backup.
    /// Nothing changes unless the whole document parses.
    pub fn import_json(&mut self, text: &str) -> Result<usize> {
        let projects = parse_backup(text)?;
        self.replace_all(projects)
    }

    pub fn replace_all(&mut self, projects: Vec<PortfolioProject>) -> Result<usize> {
        let count = projects.len();
        tracing::info!(count, "replacing all projects");
        self.commit(projects)?;
        Ok(count)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.projects.iter().position(|p| p.id == id)
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = format!("project-{}", Uuid::new_v4());
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    fn commit(&mut self, next: Vec<PortfolioProject>) -> Result<()> {
        self.store.save(&next)?;
        self.projects = next;
        self.origin = LoadOrigin::Stored;
        self.revision += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::DraftForm;
    use crate::store::MemoryStore;
    use crate::types::{Category, ProjectContent};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 14, 9, 0, 0).unwrap()
    }

    fn draft(title: &str) -> ProjectDraft {
        DraftForm {
            title: title.to_string(),
            category: Category::Design,
            date: "2025-02-01".to_string(),
            summary: format!("Resumen de {}", title),
            ..Default::default()
        }
        .into_draft()
        .expect("draft failed")
    }

    /// Store whose writes always fail
    struct BrokenStore;

    impl ContentStore for BrokenStore {
        fn read(&self) -> Result<Option<String>> {
            Ok(None)
        }

        fn write(&mut self, _payload: &str) -> Result<()> {
            Err(Error::Storage("quota exceeded".to_string()))
        }
    }

    // =============================================
    // Loading
    // =============================================

    #[test]
    fn test_open_empty_store_uses_seed() {
        let repo = ProjectRepository::open(MemoryStore::new());
        assert_eq!(repo.origin(), &LoadOrigin::Seed);
        assert_eq!(repo.list(), seed_projects().as_slice());
        assert_eq!(repo.store().writes(), 0);
    }

    #[test]
    fn test_open_corrupt_store_recovers() {
        let repo = ProjectRepository::open(MemoryStore::with_payload("not json"));
        assert!(matches!(repo.origin(), LoadOrigin::Recovered(_)));
        assert_eq!(repo.len(), seed_projects().len());
    }

    #[test]
    fn test_open_stored_empty_list_is_respected() {
        let repo = ProjectRepository::open(MemoryStore::with_payload("[]"));
        assert_eq!(repo.origin(), &LoadOrigin::Stored);
        assert!(repo.is_empty());
    }

    // =============================================
    // Create / update / delete
    // =============================================

    #[test]
    fn test_create_appends_and_persists() {
        let mut repo = ProjectRepository::open_with_seed(MemoryStore::new(), Vec::new());
        let created = repo.create(draft("Uno"), now()).expect("create failed").clone();

        assert!(created.id.starts_with("project-"));
        assert_eq!(created.slug, format!("slug-{}", now().timestamp_millis()));
        assert_eq!(created.created_at, Some(now()));
        assert_eq!(repo.list().last(), Some(&created));

        let reloaded = repo.store().load().unwrap().unwrap();
        assert_eq!(reloaded, repo.list());
    }

    #[test]
    fn test_create_generates_distinct_ids() {
        let mut repo = ProjectRepository::open_with_seed(MemoryStore::new(), Vec::new());
        for i in 0..20 {
            repo.create(draft(&format!("P{}", i)), now()).unwrap();
        }
        let mut ids: Vec<&str> = repo.list().iter().map(|p| p.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn test_create_keeps_user_slug() {
        let mut repo = ProjectRepository::open_with_seed(MemoryStore::new(), Vec::new());
        let mut d = draft("Uno");
        d.slug = " mi-slug ".to_string();
        assert_eq!(repo.create(d, now()).unwrap().slug, "mi-slug");
    }

    #[test]
    fn test_create_rejects_invalid_draft() {
        let mut repo = ProjectRepository::open_with_seed(MemoryStore::new(), Vec::new());
        let mut d = draft("Uno");
        d.summary.clear();
        assert!(matches!(repo.create(d, now()), Err(Error::MissingField("summary"))));
        assert_eq!(repo.store().writes(), 0);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut repo = ProjectRepository::open(MemoryStore::new());
        let before = repo.list().to_vec();
        let target = before[1].id.clone();

        let mut d = draft("Editado");
        d.content = ProjectContent::empty(Category::Website);
        let updated = repo.update(&target, d, now()).expect("update failed").clone();

        assert_eq!(repo.len(), before.len());
        assert_eq!(repo.list()[1], updated);
        assert_eq!(updated.id, target);
        assert_eq!(updated.slug, before[1].slug);
        assert_eq!(updated.category(), Category::Website);
        assert_eq!(updated.updated_at, Some(now()));
        for (i, project) in repo.list().iter().enumerate() {
            if i != 1 {
                assert_eq!(project, &before[i]);
            }
        }
    }

    #[test]
    fn test_update_unknown_id() {
        let mut repo = ProjectRepository::open(MemoryStore::new());
        let err = repo.update("missing", draft("X"), now()).unwrap_err();
        assert!(matches!(err, Error::NotFound(id) if id == "missing"));
    }

    #[test]
    fn test_delete_removes_entry() {
        let mut repo = ProjectRepository::open(MemoryStore::new());
        let id = repo.list()[0].id.clone();
        let before = repo.len();

        assert!(repo.delete(&id).unwrap());
        assert_eq!(repo.len(), before - 1);
        assert!(repo.get(&id).is_none());
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut repo = ProjectRepository::open(MemoryStore::new());
        let before = repo.len();
        assert!(!repo.delete("missing").unwrap());
        assert_eq!(repo.len(), before);
        assert_eq!(repo.store().writes(), 0);
    }

    #[test]
    fn test_delete_with_confirmation() {
        let mut repo = ProjectRepository::open(MemoryStore::new());
        let id = repo.list()[0].id.clone();

        let outcome = repo.delete_with(&id, |_| false).unwrap();
        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert!(repo.get(&id).is_some());

        let outcome = repo.delete_with(&id, |p| p.id == id).unwrap();
        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert!(repo.get(&id).is_none());

        let outcome = repo.delete_with(&id, |_| true).unwrap();
        assert_eq!(outcome, DeleteOutcome::NotFound);
    }

    #[test]
    fn test_failed_write_leaves_list_untouched() {
        let mut repo = ProjectRepository::open(BrokenStore);
        let before = repo.list().to_vec();

        assert!(repo.create(draft("X"), now()).is_err());
        assert!(repo.update(&before[0].id, draft("Y"), now()).is_err());
        assert!(repo.delete(&before[0].id).is_err());
        let backup = BackupDocument::new(Vec::new(), now()).to_json().expect("export failed");
        assert!(repo.import_json(&backup).is_err());

        assert_eq!(repo.list(), before.as_slice());
        assert_eq!(repo.origin(), &LoadOrigin::Seed);
        assert_eq!(repo.revision(), 0);
    }

    // =============================================
    // Repeated ids
    // =============================================

    fn with_duplicate_first() -> (ProjectRepository<MemoryStore>, String) {
        let mut projects = seed_projects();
        let mut copy = projects[0].clone();
        copy.title = "Copia".to_string();
        projects.push(copy);
        let id = projects[0].id.clone();
        (ProjectRepository::open_with_seed(MemoryStore::new(), projects), id)
    }

    #[test]
    fn test_delete_removes_every_entry_with_id() {
        let (mut repo, id) = with_duplicate_first();
        let before = repo.len();

        assert!(repo.delete(&id).expect("delete failed"));
        assert_eq!(repo.len(), before - 2);
        assert_eq!(repo.list().iter().filter(|p| p.id == id).count(), 0);

        let reloaded = repo.store().load().expect("load failed").expect("projects saved");
        assert!(reloaded.iter().all(|p| p.id != id));
    }

    #[test]
    fn test_update_replaces_every_entry_with_id() {
        let (mut repo, id) = with_duplicate_first();
        let before = repo.len();

        repo.update(&id, draft("Editado"), now()).expect("update failed");

        assert_eq!(repo.len(), before);
        let matching: Vec<&PortfolioProject> = repo.list().iter().filter(|p| p.id == id).collect();
        assert_eq!(matching.len(), 2);
        assert!(matching.iter().all(|p| p.title == "Editado"));
        assert_eq!(repo.list()[0].title, "Editado");
        assert_eq!(repo.list()[before - 1].title, "Editado");
    }

    #[test]
    fn test_revision_bumps_on_commit() {
        let mut repo = ProjectRepository::open(MemoryStore::new());
        assert_eq!(repo.revision(), 0);
        let id = repo.create(draft("X"), now()).expect("create failed").id.clone();
        assert_eq!(repo.revision(), 1);
        assert!(!repo.delete("missing").expect("delete failed"));
        assert_eq!(repo.revision(), 1);
        repo.delete(&id).expect("delete failed");
        assert_eq!(repo.revision(), 2);
    }

    // =============================================
    // Export / import
    // =============================================

    #[test]
    fn test_export_import_roundtrip() {
        let mut source = ProjectRepository::open(MemoryStore::new());
        source.create(draft("Nuevo"), now()).unwrap();
        let json = source.export(now()).to_json().unwrap();

        let mut target = ProjectRepository::open_with_seed(MemoryStore::new(), Vec::new());
        assert_eq!(target.import_json(&json).unwrap(), source.len());
        assert_eq!(target.list(), source.list());
    }

    #[test]
    fn test_import_failure_is_atomic() {
        let mut repo = ProjectRepository::open(MemoryStore::new());
        let before = repo.list().to_vec();

        assert!(repo.import_json("{\"projects\": [").is_err());
        assert!(repo.import_json(r#"{"projects": [{"id": 1}]}"#).is_err());
        assert_eq!(repo.list(), before.as_slice());
        assert_eq!(repo.store().writes(), 0);
    }

    // =============================================
    // Fixture scenario
    // =============================================

    #[test]
    fn test_seed_then_create_then_delete() {
        let seed = seed_projects();
        let mut repo = ProjectRepository::open(MemoryStore::new());
        let id = repo.create(draft("X"), now()).unwrap().id.clone();

        let store = repo.store().clone();
        let reopened = ProjectRepository::open(store);
        assert_eq!(reopened.len(), seed.len() + 1);
        assert_eq!(&reopened.list()[..seed.len()], seed.as_slice());
        assert_eq!(reopened.list()[seed.len()].title, "X");

        let mut reopened = reopened;
        reopened.delete(&id).unwrap();
        let again = ProjectRepository::open(reopened.store().clone());
        assert_eq!(again.list(), seed.as_slice());
    }
}
