/// Crate-wide Result with `anyhow::Error`, so domain errors from
/// [`AtlasError`](super::error::AtlasError) travel with their context chain.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
