//! Client construction surface
//!
//! A [`Client`] is built once from a validated [`ClientConfig`] and hands
//! out [`Path`] references for individual images. It owns everything that
//! outlives a single render call: the validated host list, the round-robin
//! shard cursor, and the purge credentials.

use crate::config::ClientConfig;
use crate::constants::LIBRARY_PARAM;
use crate::domains::{self, ShardCursor};
use crate::error::Error;
use crate::path::Path;
use crate::purge;

/// Entry point for building image URLs against a configured source.
#[derive(Debug)]
pub struct Client {
    config: ClientConfig,
    hosts: Vec<String>,
    cursor: ShardCursor,
    library_version: String,
}

impl Client {
    /// Validates `config` and builds a client.
    ///
    /// Fails when no host is configured or any host is not a
    /// fully-qualified domain name.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        config.validate()?;

        let hosts: Vec<String> = config.all_hosts().iter().map(|h| h.to_string()).collect();
        if hosts.len() > 1 {
            tracing::warn!(
                host_count = hosts.len(),
                "Domain sharding has been deprecated and will be removed in the next major version"
            );
        }

        let library_version = config
            .library_version
            .clone()
            .unwrap_or_else(|| crate::VERSION.to_string());

        Ok(Self {
            config,
            hosts,
            cursor: ShardCursor::new(),
            library_version,
        })
    }

    /// Creates a [`Path`] reference for one image.
    ///
    /// Picks the host per the shard strategy and attaches the
    /// `ixlib=<library>-<version>` identifier unless disabled.
    pub fn path(&self, path: &str) -> Path {
        let host = domains::select_host(
            &self.hosts,
            self.config.shard_strategy,
            path,
            &self.cursor,
        );

        let mut reference = Path::new(
            self.prefix(host),
            self.config.secure_url_token.clone(),
            path,
        );
        if self.config.include_library_param {
            reference.set(LIBRARY_PARAM, self.library_identifier());
        }
        reference
    }

    /// Submits an authenticated purge request for `path`.
    ///
    /// The purge targets the raw path below the primary host; rendering
    /// parameters play no role. Fails fast with a configuration error when
    /// no API key is set. Returns the raw HTTP response.
    pub async fn purge(&self, path: &str) -> Result<reqwest::Response, Error> {
        let api_key = self.config.api_key.as_deref().ok_or(Error::MissingApiKey)?;
        let url = format!("{}{}", self.prefix(&self.hosts[0]), path);
        purge::send(api_key, &url, &self.user_agent()).await
    }

    /// `<scheme>://<host>` for a configured host.
    fn prefix(&self, host: &str) -> String {
        let scheme = if self.config.use_https { "https" } else { "http" };
        format!("{}://{}", scheme, host)
    }

    /// The `<library>-<version>` value carried by the `ixlib` parameter.
    fn library_identifier(&self) -> String {
        format!("{}-{}", self.config.library_param, self.library_version)
    }

    /// User-Agent header sent with purge requests.
    fn user_agent(&self) -> String {
        format!("pixlane {}", self.library_identifier())
    }
}
