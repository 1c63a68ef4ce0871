//! Srcset generation
//!
//! Expands one image reference into a `srcset` string for responsive
//! delivery. Two ladder shapes exist:
//! - a device-pixel-ratio ladder (`1x..5x`) when the merged parameters fix
//!   the rendered size (an explicit width, or an explicit height paired
//!   with an aspect ratio)
//! - a width ladder otherwise: an ascending geometric sequence of integer
//!   widths between a minimum and maximum bound
//!
//! Option validation is all-or-nothing: invalid srcset options fail before
//! any URL is generated. The option keys themselves travel in a side
//! channel and never appear in an emitted query string or signature.

use std::sync::OnceLock;

use crate::constants::{
    dpr_quality, DEFAULT_WIDTH_TOLERANCE, MAX_WIDTH, MIN_WIDTH, TARGET_RATIOS,
};
use crate::error::Error;
use crate::params::Params;
use crate::path::{Path, UrlOptions};

/// Precomputed default width ladder (100..8192 at 8% tolerance), built
/// once per process so the common no-options call never recomputes it.
static DEFAULT_TARGET_WIDTHS: OnceLock<Vec<u32>> = OnceLock::new();

/// Per-call options consumed only during srcset generation.
///
/// Never persisted on a [`Path`]; none of these surface as query
/// parameters.
#[derive(Debug, Clone, Default)]
pub struct SrcsetOptions {
    /// Explicit list of widths to emit, overriding ladder generation
    pub widths: Option<Vec<u32>>,
    /// Growth tolerance for the generated ladder (default 0.08)
    pub width_tolerance: Option<f64>,
    /// Minimum ladder width (default 100)
    pub min_width: Option<u32>,
    /// Maximum ladder width (default 8192)
    pub max_width: Option<u32>,
    /// Skip the per-ratio `q` defaults on DPR ladders
    pub disable_variable_quality: bool,
    /// Skip path percent-encoding on every generated URL
    pub disable_path_encoding: bool,
}

/// Expands `path` into a srcset string.
///
/// `overrides` are merged on top of the reference's persistent parameters
/// for this call only. Entries are `"<url> <descriptor>"` joined with
/// `",\n"`.
pub fn build_srcset(
    path: &Path,
    overrides: &Params,
    options: &SrcsetOptions,
) -> Result<String, Error> {
    let merged = path.params().merged(overrides);

    if wants_dpr_ladder(&merged) {
        build_dpr_srcset(path, &merged, options)
    } else {
        build_width_srcset(path, &merged, options)
    }
}

/// A fixed rendered size switches the srcset to DPR descriptors: an
/// explicit width always does, an explicit height only when an aspect
/// ratio pins the width as well.
fn wants_dpr_ladder(params: &Params) -> bool {
    params.contains("w") || (params.contains("h") && params.contains("ar"))
}

fn build_dpr_srcset(
    path: &Path,
    params: &Params,
    options: &SrcsetOptions,
) -> Result<String, Error> {
    let url_options = UrlOptions {
        disable_path_encoding: options.disable_path_encoding,
    };

    // an explicit quality wins over the per-ratio defaults on every rung
    let explicit_quality = params.get("q").map(str::to_string);

    let mut entries = Vec::with_capacity(TARGET_RATIOS.len());
    for ratio in TARGET_RATIOS {
        let mut rung = params.clone();
        rung.set("dpr", ratio);

        if !options.disable_variable_quality {
            match &explicit_quality {
                Some(quality) => rung.set("q", quality),
                None => rung.set("q", dpr_quality(ratio)),
            };
        }

        entries.push(format!("{} {}x", path.render(&rung, &url_options), ratio));
    }

    Ok(entries.join(",\n"))
}

fn build_width_srcset(
    path: &Path,
    params: &Params,
    options: &SrcsetOptions,
) -> Result<String, Error> {
    let widths = resolve_target_widths(options)?;
    let url_options = UrlOptions {
        disable_path_encoding: options.disable_path_encoding,
    };

    let mut entries = Vec::with_capacity(widths.len());
    for width in widths {
        let mut rung = params.clone();
        rung.set("w", width);
        entries.push(format!("{} {}w", path.render(&rung, &url_options), width));
    }

    Ok(entries.join(",\n"))
}

/// Picks the width sequence for a ladder srcset.
///
/// Priority: an explicit `widths` list, then a custom geometric
/// progression when any bound or the tolerance differs from the defaults,
/// then the precomputed default ladder. Validation happens here, before
/// any URL is built.
fn resolve_target_widths(options: &SrcsetOptions) -> Result<Vec<u32>, Error> {
    if let Some(widths) = &options.widths {
        validate_widths(widths)?;
        return Ok(widths.clone());
    }

    let tolerance = options.width_tolerance.unwrap_or(DEFAULT_WIDTH_TOLERANCE);
    let min_width = options.min_width.unwrap_or(MIN_WIDTH);
    let max_width = options.max_width.unwrap_or(MAX_WIDTH);

    if tolerance != DEFAULT_WIDTH_TOLERANCE || min_width != MIN_WIDTH || max_width != MAX_WIDTH {
        validate_range(min_width, max_width)?;
        validate_tolerance(tolerance)?;
        Ok(target_widths(tolerance, min_width, max_width))
    } else {
        Ok(default_target_widths().to_vec())
    }
}

/// Generates the ascending width sequence between `min_width` and
/// `max_width`.
///
/// The accumulator starts at `min_width` and grows by `1 + 2 * tolerance`
/// each step; each step's value is rounded when appended while the
/// accumulator itself stays fractional. Once the accumulator reaches
/// `max_width`, the exact maximum is appended as the final entry unless
/// the last generated value already equals it.
pub fn target_widths(tolerance: f64, min_width: u32, max_width: u32) -> Vec<u32> {
    let increment = 1.0 + tolerance * 2.0;
    let max = f64::from(max_width);

    let mut widths = Vec::new();
    let mut prev = f64::from(min_width);
    while prev < max {
        widths.push(prev.round() as u32);
        prev *= increment;
    }

    if widths.last() != Some(&max_width) {
        widths.push(max_width);
    }
    widths
}

/// The default 31-entry ladder (100..8192, 8% tolerance).
pub fn default_target_widths() -> &'static [u32] {
    DEFAULT_TARGET_WIDTHS
        .get_or_init(|| target_widths(DEFAULT_WIDTH_TOLERANCE, MIN_WIDTH, MAX_WIDTH))
}

fn validate_widths(widths: &[u32]) -> Result<(), Error> {
    if widths.is_empty() || widths.iter().any(|w| *w == 0) {
        return Err(Error::InvalidWidths);
    }
    Ok(())
}

fn validate_tolerance(tolerance: f64) -> Result<(), Error> {
    if !tolerance.is_finite() || tolerance <= 0.0 {
        return Err(Error::InvalidWidthTolerance { value: tolerance });
    }
    Ok(())
}

fn validate_range(min_width: u32, max_width: u32) -> Result<(), Error> {
    if min_width == 0 || max_width == 0 {
        return Err(Error::InvalidWidthRange {
            min: min_width,
            max: max_width,
        });
    }
    Ok(())
}
