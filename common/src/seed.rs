//! Bundled default projects, shown while nothing has been saved

use crate::types::PortfolioProject;
use serde::Deserialize;

const SEED_JSON: &str = include_str!("../data/portfolio_projects.json");

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedCollection {
    #[allow(dead_code)]
    #[serde(default)]
    last_updated: String,
    projects: Vec<PortfolioProject>,
}

/// Parse the bundled fixture. A broken fixture yields an empty list.
pub fn seed_projects() -> Vec<PortfolioProject> {
    match serde_json::from_str::<SeedCollection>(SEED_JSON) {
        Ok(collection) => collection.projects,
        Err(e) => {
            tracing::error!("bundled project fixture is invalid: {}", e);
            Vec::new()
        }
    }
}
