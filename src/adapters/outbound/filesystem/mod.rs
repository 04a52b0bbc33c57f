/// Filesystem adapters for reading manifests
mod manifest_reader;

pub use manifest_reader::JsonManifestReader;
