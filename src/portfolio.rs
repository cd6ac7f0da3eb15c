use std::{collections::HashSet, fmt, sync::LazyLock};

use serde::Deserialize;
use thiserror::Error;

/// Label of the catch-all category button.
pub const ALL: &str = "All";

static PROJECTS_JSON: &str = include_str!("../content/projects.json");

static CATALOG: LazyLock<Vec<Project>> = LazyLock::new(|| {
    load_catalog(PROJECTS_JSON).unwrap_or_else(|e| {
        log::error!("project catalog failed to load: {e}");
        Vec::new()
    })
});

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub description: String,
    pub demo_link: String,
    pub thumbnail_link: String,
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("couldn't parse project catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate project id {0}")]
    DuplicateId(u32),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// Whether the button labelled `label` is the current selection.
    pub fn is_selected(&self, label: &str) -> bool {
        match self {
            Self::All => label == ALL,
            Self::Category(c) => c == label,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(label: &str) -> Self {
        if label == ALL {
            Self::All
        } else {
            Self::Category(label.to_string())
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Category(c) => f.write_str(c),
        }
    }
}

/// Parse a project list, rejecting repeated ids.
pub fn load_catalog(json: &str) -> Result<Vec<Project>, CatalogError> {
    let projects: Vec<Project> = serde_json::from_str(json)?;
    let mut seen = HashSet::new();
    for p in &projects {
        if !seen.insert(p.id) {
            return Err(CatalogError::DuplicateId(p.id));
        }
    }
    Ok(projects)
}

/// The embedded project catalog, in display order.
pub fn catalog() -> &'static [Project] {
    &CATALOG
}

/// `All` followed by each category in order of first appearance.
pub fn categories(catalog: &[Project]) -> Vec<String> {
    let mut seen = HashSet::new();
    std::iter::once(ALL.to_string())
        .chain(
            catalog
                .iter()
                .filter(|p| seen.insert(p.category.as_str()))
                .map(|p| p.category.clone()),
        )
        .collect()
}

/// Projects matching `filter`, keeping catalog order.
pub fn select<'a>(catalog: &'a [Project], filter: &CategoryFilter) -> Vec<&'a Project> {
    match filter {
        CategoryFilter::All => catalog.iter().collect(),
        CategoryFilter::Category(c) => catalog.iter().filter(|p| &p.category == c).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: u32, category: &str) -> Project {
        Project {
            id,
            title: format!("Project {id}"),
            category: category.to_string(),
            description: String::new(),
            demo_link: "#".to_string(),
            thumbnail_link: String::new(),
        }
    }

    fn ids(projects: &[&Project]) -> Vec<u32> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_embedded_catalog() {
        let projects = catalog();
        assert_eq!(projects.len(), 3);
        assert_eq!(projects[0].title, "NeoUI Design System");
        assert_eq!(projects[0].category, "Web");
        assert_eq!(projects[1].category, "AI Projects");
        assert_eq!(projects[2].category, "Design");
        assert!(projects.iter().all(|p| p.thumbnail_link.starts_with("https://")));
    }

    #[test]
    fn test_categories_first_appearance() {
        assert_eq!(
            categories(catalog()),
            vec!["All", "Web", "AI Projects", "Design"]
        );

        let mixed = vec![
            project(1, "Design"),
            project(2, "Web"),
            project(3, "Design"),
            project(4, "Mobile"),
            project(5, "Web"),
        ];
        assert_eq!(categories(&mixed), vec!["All", "Design", "Web", "Mobile"]);
        assert_eq!(categories(&[]), vec!["All"]);
    }

    #[test]
    fn test_select_all_returns_catalog() {
        let all = select(catalog(), &CategoryFilter::All);
        assert_eq!(ids(&all), vec![1, 2, 3]);
        assert!(select(&[], &CategoryFilter::All).is_empty());
    }

    #[test]
    fn test_select_category_preserves_order() {
        let mixed = vec![
            project(7, "Web"),
            project(3, "Design"),
            project(9, "Web"),
            project(1, "Web"),
        ];
        for category in categories(&mixed).into_iter().skip(1) {
            let filter = CategoryFilter::from(category.as_str());
            let picked = select(&mixed, &filter);
            assert!(!picked.is_empty());
            assert!(picked.iter().all(|p| p.category == category));
        }
        let web = select(&mixed, &"Web".into());
        assert_eq!(ids(&web), vec![7, 9, 1]);
    }

    #[test]
    fn test_select_unknown_category_is_empty() {
        assert!(select(catalog(), &"Mobile".into()).is_empty());
        // labels are case sensitive
        assert!(select(catalog(), &"web".into()).is_empty());
    }

    #[test]
    fn test_filter_labels() {
        assert_eq!(CategoryFilter::from("All"), CategoryFilter::All);
        assert_eq!(CategoryFilter::default(), CategoryFilter::All);
        let ai = CategoryFilter::from("AI Projects");
        assert_eq!(ai.to_string(), "AI Projects");
        assert!(ai.is_selected("AI Projects"));
        assert!(!ai.is_selected("All"));
        assert!(CategoryFilter::All.is_selected("All"));
        assert!(!CategoryFilter::All.is_selected("Web"));
    }

    #[test]
    fn test_load_catalog_errors() {
        let dup = r##"[
            {"id": 1, "title": "a", "category": "Web", "description": "", "demo_link": "#", "thumbnail_link": ""},
            {"id": 1, "title": "b", "category": "Web", "description": "", "demo_link": "#", "thumbnail_link": ""}
        ]"##;
        assert!(matches!(load_catalog(dup), Err(CatalogError::DuplicateId(1))));
        assert!(matches!(load_catalog("{"), Err(CatalogError::Parse(_))));
        assert!(load_catalog("[]").expect("empty list is valid").is_empty());
    }
}
