//! Gallery projection: exact-category filter, order preserved

use crate::types::{Category, PortfolioProject};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Selector options in display order
    pub const OPTIONS: [CategoryFilter; 5] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Strategy),
        CategoryFilter::Only(Category::Design),
        CategoryFilter::Only(Category::Website),
        CategoryFilter::Only(Category::Miscellaneous),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "Todos los proyectos",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    /// Stable value for `<select>` options
    pub fn key(&self) -> &'static str {
        match self {
            CategoryFilter::All => "Todos",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn from_key(key: &str) -> Self {
        Category::from_key(key)
            .map(CategoryFilter::Only)
            .unwrap_or(CategoryFilter::All)
    }

    pub fn matches(&self, project: &PortfolioProject) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => project.category() == *category,
        }
    }
}

pub fn filter_projects(projects: &[PortfolioProject], filter: CategoryFilter) -> Vec<&PortfolioProject> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_projects;

    #[test]
    fn test_all_returns_everything_in_order() {
        let projects = seed_projects();
        let filtered = filter_projects(&projects, CategoryFilter::All);
        let ids: Vec<&str> = filtered.iter().map(|p| p.id.as_str()).collect();
        let expected: Vec<&str> = projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_only_returns_matching_category() {
        let mut projects = seed_projects();
        let mut extra = projects[2].clone();
        extra.id = "website-2".to_string();
        projects.insert(0, extra);

        let filtered = filter_projects(&projects, CategoryFilter::Only(Category::Website));
        let ids: Vec<&str> = filtered.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["website-2", "website-feria-creativa"]);
        assert!(filtered.iter().all(|p| p.category() == Category::Website));
    }

    #[test]
    fn test_filter_on_empty_list() {
        assert!(filter_projects(&[], CategoryFilter::Only(Category::Design)).is_empty());
    }

    #[test]
    fn test_key_roundtrip() {
        for option in CategoryFilter::OPTIONS {
            assert_eq!(CategoryFilter::from_key(option.key()), option);
        }
        assert_eq!(CategoryFilter::from_key("desconocido"), CategoryFilter::All);
        assert_eq!(CategoryFilter::All.label(), "Todos los proyectos");
    }
}
