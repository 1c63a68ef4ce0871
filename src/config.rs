// Configuration module

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LIBRARY;
use crate::domains::ShardStrategy;
use crate::error::Error;

/// Pattern used to determine whether a host is a valid fully-qualified
/// domain name: no scheme, no path, at least two labels, and no trailing
/// hyphen on the final labels.
static DOMAIN_PATTERN: OnceLock<Regex> = OnceLock::new();

fn domain_pattern() -> &'static Regex {
    DOMAIN_PATTERN.get_or_init(|| {
        regex::RegexBuilder::new(r"^(?i)(?:[a-z\d\-_]{1,62}\.){0,125}[a-z\d](?:[a-z\d-]{0,61}[a-z\d])?\.[a-z\d]{1,63}$")
            .size_limit(64 * (1 << 20))
            .build()
            .expect("Invalid domain regex - this is a compile-time bug")
    })
}

/// Returns true when `host` passes fully-qualified-domain-name validation.
pub(crate) fn is_valid_domain(host: &str) -> bool {
    domain_pattern().is_match(host)
}

fn default_use_https() -> bool {
    true
}

fn default_include_library_param() -> bool {
    true
}

fn default_library_param() -> String {
    DEFAULT_LIBRARY.to_string()
}

/// Client configuration
///
/// Deserializable from configuration files; every field except the host is
/// optional. Validation runs at client construction, not at deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// The rendering host serving this source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Sharded host list (deprecated; prefer a single `host`)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hosts: Vec<String>,

    /// Secret token used to sign rendered URLs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secure_url_token: Option<String>,

    /// API key authorizing purge requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Render https URLs (default: true)
    #[serde(default = "default_use_https")]
    pub use_https: bool,

    /// Host-selection policy for sharded host lists
    #[serde(default)]
    pub shard_strategy: ShardStrategy,

    /// Append the `ixlib` library identifier to every URL (default: true)
    #[serde(default = "default_include_library_param")]
    pub include_library_param: bool,

    /// Library identifier prefix emitted in the `ixlib` parameter
    #[serde(default = "default_library_param")]
    pub library_param: String,

    /// Library version emitted in the `ixlib` parameter
    /// (default: this crate's version)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library_version: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: None,
            hosts: Vec::new(),
            secure_url_token: None,
            api_key: None,
            use_https: default_use_https(),
            shard_strategy: ShardStrategy::default(),
            include_library_param: default_include_library_param(),
            library_param: default_library_param(),
            library_version: None,
        }
    }
}

impl ClientConfig {
    /// Creates a config for a single host with all other fields default.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: Some(host.into()),
            ..Default::default()
        }
    }

    /// Creates a config for a single host with URL signing enabled.
    pub fn with_signing(host: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            host: Some(host.into()),
            secure_url_token: Some(token.into()),
            ..Default::default()
        }
    }

    /// Parses a config from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, Error> {
        serde_yaml::from_str(yaml).map_err(|e| Error::Config(e.to_string()))
    }

    /// Every configured host: `host` first, then the sharded `hosts` list.
    pub fn all_hosts(&self) -> Vec<&str> {
        self.host
            .iter()
            .map(String::as_str)
            .chain(self.hosts.iter().map(String::as_str))
            .collect()
    }

    /// Validates the host list.
    ///
    /// At least one host must be configured, and every host must be a
    /// fully-qualified domain name without a scheme or path element.
    pub fn validate(&self) -> Result<(), Error> {
        let hosts = self.all_hosts();
        if hosts.is_empty() {
            return Err(Error::MissingHost);
        }
        for host in hosts {
            if !is_valid_domain(host) {
                return Err(Error::invalid_host(host));
            }
        }
        Ok(())
    }
}
