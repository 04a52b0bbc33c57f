use crate::topology::domain::{AppRecord, DependencyRecord, GraphSnapshot, Relationship};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// GraphQueries shapes a graph snapshot into the records served to readers
///
/// Relationships are deduplicated and every result is ordered by name
/// (then id) so responses are stable between calls.
pub struct GraphQueries;

impl GraphQueries {
    /// All apps, each with the remote edges leaving it
    pub fn apps(snapshot: &GraphSnapshot) -> Vec<AppRecord> {
        let outgoing = Self::outgoing_remotes(snapshot);
        Self::sorted(
            snapshot
                .apps
                .iter()
                .map(|app| {
                    let relationships = outgoing
                        .get(app.id.as_str())
                        .map(|edges| edges.iter().cloned().collect())
                        .unwrap_or_default();
                    AppRecord::from_node(app, relationships)
                })
                .collect(),
        )
    }

    /// Host apps (`name == host`) with their outgoing remote edges
    pub fn host_apps(snapshot: &GraphSnapshot) -> Vec<AppRecord> {
        Self::apps(snapshot)
            .into_iter()
            .filter(AppRecord::is_host)
            .collect()
    }

    /// Apps that belong to the topology of `host`
    ///
    /// An app qualifies when it shares a remote edge, in either direction,
    /// with another app whose host is empty or equals `host`. Its
    /// relationships are the qualifying edges that leave it.
    pub fn apps_for_host(snapshot: &GraphSnapshot, host: &str) -> Vec<AppRecord> {
        let hosts: HashMap<&str, &str> = snapshot
            .apps
            .iter()
            .map(|app| (app.id.as_str(), app.host.as_str()))
            .collect();
        let in_topology = |id: &str| matches!(hosts.get(id), Some(h) if h.is_empty() || *h == host);

        let mut qualifying: BTreeMap<&str, BTreeSet<Relationship>> = BTreeMap::new();
        for edge in &snapshot.remotes {
            if !hosts.contains_key(edge.from_id.as_str()) || !hosts.contains_key(edge.to_id.as_str())
            {
                continue;
            }
            // the app at the source end qualifies through its target, and the other way round
            if in_topology(&edge.to_id) {
                qualifying
                    .entry(edge.from_id.as_str())
                    .or_default()
                    .insert(edge.clone());
            }
            if in_topology(&edge.from_id) {
                qualifying.entry(edge.to_id.as_str()).or_default();
            }
        }

        Self::sorted(
            snapshot
                .apps
                .iter()
                .filter_map(|app| {
                    qualifying
                        .get(app.id.as_str())
                        .map(|edges| AppRecord::from_node(app, edges.iter().cloned().collect()))
                })
                .collect(),
        )
    }

    /// All dependencies, each with the edges of the apps declaring it
    pub fn dependencies(snapshot: &GraphSnapshot) -> Vec<DependencyRecord> {
        let mut incoming: HashMap<&str, BTreeSet<Relationship>> = HashMap::new();
        for edge in &snapshot.dependency_edges {
            incoming
                .entry(edge.to_id.as_str())
                .or_default()
                .insert(edge.clone());
        }

        let mut records: Vec<DependencyRecord> = snapshot
            .dependencies
            .iter()
            .map(|dependency| DependencyRecord {
                id: dependency.id.clone(),
                name: dependency.name.clone(),
                version: dependency.version.clone(),
                relationships: incoming
                    .get(dependency.id.as_str())
                    .map(|edges| edges.iter().cloned().collect())
                    .unwrap_or_default(),
            })
            .collect();

        records.sort_by(|a, b| {
            a.name
                .cmp(&b.name)
                .then_with(|| a.version.cmp(&b.version))
                .then_with(|| a.id.cmp(&b.id))
        });
        records
    }

    fn outgoing_remotes(snapshot: &GraphSnapshot) -> HashMap<&str, BTreeSet<Relationship>> {
        let mut outgoing: HashMap<&str, BTreeSet<Relationship>> = HashMap::new();
        for edge in &snapshot.remotes {
            outgoing
                .entry(edge.from_id.as_str())
                .or_default()
                .insert(edge.clone());
        }
        outgoing
    }

    fn sorted(mut records: Vec<AppRecord>) -> Vec<AppRecord> {
        records.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        records
    }
}
