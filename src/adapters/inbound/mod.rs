/// Inbound adapters - Drive the application through its inbound ports
pub mod http;
