/// Mock implementations for testing
mod mock_graph_store;
mod mock_manifest_reader;
mod mock_progress_reporter;
mod mock_topology_client;

pub use mock_graph_store::FailingGraphStore;
pub use mock_manifest_reader::MockManifestReader;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_topology_client::MockTopologyClient;
