use crate::topology::domain::{AppIndex, AppRecord, DependencyRecord};
use serde::Serialize;
use std::collections::HashSet;

/// Longest search query accepted, in bytes
pub const MAX_SEARCH_LENGTH: usize = 214;

/// Link between a dependency and an app that declares it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchLink {
    /// Dependency element id
    pub source: String,
    /// App element id
    pub target: String,
}

/// Outcome of filtering the dependency view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResult {
    pub dependencies: Vec<DependencyRecord>,
    pub apps: Vec<AppRecord>,
    pub links: Vec<SearchLink>,
}

/// DependencySearch filters the dependency view by dependency name
///
/// Matching is a case-sensitive substring test; an empty query matches
/// every dependency. Filtering runs in two passes:
/// 1. dependencies whose name matches are kept, and each of their
///    relationships from a known app becomes a link
/// 2. apps are kept only if some link points at them
#[derive(Debug, Clone, Default)]
pub struct DependencySearch {
    query: String,
}

impl DependencySearch {
    /// The query is used as given; callers reject anything longer than
    /// [`MAX_SEARCH_LENGTH`] before getting here
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn matches(&self, name: &str) -> bool {
        name.contains(self.query.as_str())
    }

    pub fn filter(&self, dependencies: &[DependencyRecord], apps: &[AppRecord]) -> SearchResult {
        let index = AppIndex::new(apps);

        let dependencies: Vec<DependencyRecord> = dependencies
            .iter()
            .filter(|dependency| self.matches(&dependency.name))
            .cloned()
            .collect();

        let links: Vec<SearchLink> = dependencies
            .iter()
            .flat_map(|dependency| {
                dependency
                    .relationships
                    .iter()
                    .filter(|rel| index.contains(&rel.from_id))
                    .map(|rel| SearchLink {
                        source: dependency.id.clone(),
                        target: rel.from_id.clone(),
                    })
            })
            .collect();

        let linked: HashSet<&str> = links.iter().map(|link| link.target.as_str()).collect();
        let apps = apps
            .iter()
            .filter(|app| linked.contains(app.id.as_str()))
            .cloned()
            .collect();

        SearchResult {
            dependencies,
            apps,
            links,
        }
    }
}
