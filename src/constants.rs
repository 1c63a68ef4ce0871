// Constants module - centralized default values for URL building
//
// This module defines all default values and lookup tables used throughout
// the codebase. Using constants instead of magic numbers improves
// maintainability and makes it easier to understand and modify defaults.

// =============================================================================
// Query parameter names
// =============================================================================

/// Query parameter carrying the URL signature
pub const SIGNATURE_PARAM: &str = "s";

/// Query parameter identifying the client library
pub const LIBRARY_PARAM: &str = "ixlib";

/// Default library identifier emitted in the `ixlib` parameter
pub const DEFAULT_LIBRARY: &str = "rust";

// =============================================================================
// Srcset defaults
// =============================================================================

/// Growth rate used when building out srcset pair widths
pub const DEFAULT_WIDTH_TOLERANCE: f64 = 0.08;

/// Default minimum srcset width
pub const MIN_WIDTH: u32 = 100;

/// Default maximum srcset width, also the max width supported by the service
pub const MAX_WIDTH: u32 = 8192;

/// Device pixel ratios targeted by a DPR srcset, in emission order
pub const TARGET_RATIOS: [u32; 5] = [1, 2, 3, 4, 5];

/// Default quality value for each DPR srcset entry, indexed by `ratio - 1`
pub const DPR_QUALITY: [u32; 5] = [75, 50, 35, 23, 20];

// =============================================================================
// Purge defaults
// =============================================================================

/// Fixed endpoint accepting purge requests
pub const PURGE_ENDPOINT: &str = "https://api.pixlane.com/api/v1/purge";

/// Returns the default quality for a device pixel ratio in `1..=5`.
pub fn dpr_quality(ratio: u32) -> u32 {
    DPR_QUALITY[(ratio - 1) as usize]
}
