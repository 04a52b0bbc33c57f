/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (the HTTP
/// API) use to interact with the application core.
pub mod topology_port;

pub use topology_port::TopologyPort;
