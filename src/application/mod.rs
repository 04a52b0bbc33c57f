/// Application layer - Use cases, DTOs and read models
///
/// This layer orchestrates the topology services and coordinates with
/// infrastructure through ports.
pub mod dto;
pub mod read_models;
pub mod topology_service;
pub mod use_cases;

pub use topology_service::TopologyService;
