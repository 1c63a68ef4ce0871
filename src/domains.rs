//! Host selection for sharded deployments
//!
//! Deployments that spread one image catalog across several hostnames pick
//! the host per image reference. Two policies exist:
//! - `Checksum` (default): a deterministic hash of the raw path, so the
//!   same reference always renders against the same host and stays
//!   browser-cacheable
//! - `Cycle`: strict round-robin over the configured host list
//!
//! Domain sharding is deprecated; configuring more than one host logs a
//! warning at client construction.

use std::sync::atomic::{AtomicUsize, Ordering};

use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};

/// Policy used to pick one of the configured hosts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShardStrategy {
    /// Deterministic pick keyed on the image path
    #[default]
    Checksum,
    /// Round-robin over the host list
    Cycle,
}

/// Round-robin cursor shared by every `Cycle`-strategy pick.
///
/// Advances atomically so concurrent callers never observe a skipped or
/// repeated host.
#[derive(Debug, Default)]
pub struct ShardCursor(AtomicUsize);

impl ShardCursor {
    pub fn new() -> Self {
        Self::default()
    }

    fn advance(&self, host_count: usize) -> usize {
        self.0.fetch_add(1, Ordering::Relaxed) % host_count
    }
}

/// Picks the host for `path` out of `hosts`.
///
/// A single-host list bypasses the strategy entirely.
pub fn select_host<'a>(
    hosts: &'a [String],
    strategy: ShardStrategy,
    path: &str,
    cursor: &ShardCursor,
) -> &'a str {
    if hosts.len() == 1 {
        return &hosts[0];
    }

    let index = match strategy {
        ShardStrategy::Checksum => checksum_index(path, hosts.len()),
        ShardStrategy::Cycle => cursor.advance(hosts.len()),
    };
    &hosts[index]
}

/// Deterministic host index for a path: the first four digest bytes of
/// the path's MD5, little-endian, modulo the host count.
fn checksum_index(path: &str, host_count: usize) -> usize {
    let digest = Md5::digest(path.as_bytes());
    let checksum = u32::from_le_bytes([digest[0], digest[1], digest[2], digest[3]]);
    checksum as usize % host_count
}
