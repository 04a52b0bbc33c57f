mod dependency_search;
mod expansion;
mod graph_queries;
mod host_resolver;
mod tree_builder;

pub use dependency_search::{DependencySearch, SearchLink, SearchResult, MAX_SEARCH_LENGTH};
pub use expansion::ExpansionState;
pub use graph_queries::GraphQueries;
pub use host_resolver::HostResolver;
pub use tree_builder::{TreeBuilder, DEFAULT_MAX_DEPTH, DEFAULT_MAX_NODES};
