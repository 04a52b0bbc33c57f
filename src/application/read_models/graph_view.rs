//! Force-layout read models for the dependency and module views

use crate::topology::domain::{AppRecord, DependencyRecord};
use crate::topology::policies::{module_radius, LayoutPreset, Point, Viewport, NODE_RADIUS};
use crate::topology::services::{SearchLink, SearchResult};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    App,
    Dependency,
}

/// Node of a force view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNodeView {
    pub id: String,
    pub kind: NodeKind,
    pub name: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    pub radius: f64,
}

impl GraphNodeView {
    fn from_dependency(dependency: &DependencyRecord) -> Self {
        Self {
            id: dependency.id.clone(),
            kind: NodeKind::Dependency,
            name: dependency.name.clone(),
            version: dependency.version.clone(),
            host: None,
            radius: NODE_RADIUS,
        }
    }

    fn from_app(app: &AppRecord, radius: f64) -> Self {
        Self {
            id: app.id.clone(),
            kind: NodeKind::App,
            name: app.name.clone(),
            version: app.version.clone(),
            host: Some(app.host.clone()),
            radius,
        }
    }
}

/// Dependency view: shared dependencies linked to the apps declaring them
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyGraphView {
    pub search: String,
    /// Dependencies first, then apps
    pub nodes: Vec<GraphNodeView>,
    pub links: Vec<SearchLink>,
    pub preset: LayoutPreset,
    pub center: Point,
}

impl DependencyGraphView {
    pub fn build(search: &str, result: SearchResult, viewport: Viewport) -> Self {
        let nodes = result
            .dependencies
            .iter()
            .map(GraphNodeView::from_dependency)
            .chain(
                result
                    .apps
                    .iter()
                    .map(|app| GraphNodeView::from_app(app, NODE_RADIUS)),
            )
            .collect();

        Self {
            search: search.to_string(),
            nodes,
            links: result.links,
            preset: LayoutPreset::dependencies(),
            center: viewport.center(),
        }
    }
}

/// Module view: every app, sized by how many remotes it loads
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleGraphView {
    pub nodes: Vec<GraphNodeView>,
    pub preset: LayoutPreset,
    pub center: Point,
}

impl ModuleGraphView {
    pub fn build(apps: &[AppRecord], viewport: Viewport) -> Self {
        Self {
            nodes: apps
                .iter()
                .map(|app| {
                    let outgoing = app
                        .relationships
                        .iter()
                        .filter(|rel| rel.from_id == app.id)
                        .count();
                    GraphNodeView::from_app(app, module_radius(outgoing))
                })
                .collect(),
            preset: LayoutPreset::modules(),
            center: viewport.center(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::domain::Relationship;

    fn app(id: &str, name: &str, targets: &[&str]) -> AppRecord {
        AppRecord {
            id: id.to_string(),
            name: name.to_string(),
            host: "shell".to_string(),
            version: "1.0".to_string(),
            relationships: targets.iter().map(|t| Relationship::new(id, *t)).collect(),
        }
    }

    #[test]
    fn test_dependency_view_orders_dependencies_before_apps() {
        let result = SearchResult {
            dependencies: vec![DependencyRecord {
                id: "dep:1".to_string(),
                name: "react".to_string(),
                version: "18.0".to_string(),
                relationships: vec![Relationship::new("app:1", "dep:1")],
            }],
            apps: vec![app("app:1", "shell", &[])],
            links: vec![SearchLink {
                source: "dep:1".to_string(),
                target: "app:1".to_string(),
            }],
        };

        let view = DependencyGraphView::build("react", result, Viewport::new(110.0, 60.0));

        assert_eq!(view.nodes[0].kind, NodeKind::Dependency);
        assert_eq!(view.nodes[1].kind, NodeKind::App);
        assert_eq!(view.links.len(), 1);
        assert_eq!(view.center, Point { x: 50.0, y: 25.0 });
        assert_eq!(view.preset.name(), "dependencies");
    }

    #[test]
    fn test_module_view_radius_follows_fan_out() {
        let apps = vec![app("app:1", "shell", &["app:2", "app:3"]), app("app:2", "cart", &[])];

        let view = ModuleGraphView::build(&apps, Viewport::default());

        assert_eq!(view.nodes[0].radius, 96.0);
        assert_eq!(view.nodes[1].radius, 48.0);
        assert_eq!(view.preset.name(), "modules");
    }

    #[test]
    fn test_node_serialization() {
        let view = ModuleGraphView::build(&[app("app:1", "shell", &[])], Viewport::default());
        let value = serde_json::to_value(&view).unwrap();

        assert_eq!(value["nodes"][0]["kind"], "app");
        assert_eq!(value["nodes"][0]["host"], "shell");
        assert_eq!(value["preset"]["alphaTarget"], 0.3);
    }
}
