/// Data Transfer Objects for application layer
///
/// Requests and summaries passed between the adapters (HTTP, CLI) and the
/// use cases, keeping the domain layer free of transport concerns.
mod publish;
mod view_requests;

pub use publish::{PublishFailure, PublishRequest, PublishSummary};
pub use view_requests::{DependencyViewRequest, ModuleViewRequest, TreeRequest};
