//! Topology core: domain model, pure services and layout policies
//!
//! Nothing in here performs I/O. Stores, HTTP and the CLI live behind the
//! ports in `crate::ports`.

pub mod domain;
pub mod policies;
pub mod services;
