// Pixlane client library
// URL building, signing, srcset generation, and cache purging

pub mod client;
pub mod config;
pub mod constants;
pub mod domains;
pub mod encoding;
pub mod error;
pub mod params;
pub mod path;
pub mod purge;
pub mod signature;
pub mod srcset;

pub use client::Client;
pub use config::ClientConfig;
pub use domains::ShardStrategy;
pub use error::Error;
pub use params::Params;
pub use path::{Path, UrlOptions};
pub use srcset::SrcsetOptions;

/// Library version reported in the `ixlib` parameter and purge User-Agent
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
