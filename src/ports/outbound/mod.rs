/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (graph storage, file system,
/// network, console).
pub mod graph_store;
pub mod manifest_reader;
pub mod progress_reporter;
pub mod topology_client;

pub use graph_store::{AppUpsert, GraphStore, OnMatch};
pub use manifest_reader::ManifestReader;
pub use progress_reporter::ProgressReporter;
pub use topology_client::TopologyClient;
