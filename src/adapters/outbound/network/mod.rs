/// Network adapters for the atlas server API
mod atlas_client;

pub use atlas_client::AtlasHttpClient;
