//! Image reference and URL rendering
//!
//! A [`Path`] is one logical image on a configured host: the host prefix,
//! the raw path, an optional signing token, and the persistent parameter
//! set. Rendering composes `prefix + sanitized path + encoded query +
//! optional signature` into the final URL string.
//!
//! Render calls never mutate the reference. Per-call overrides are merged
//! into a transient copy of the base parameters, so repeated calls with
//! identical arguments are idempotent and one-off overrides never leak
//! into the persistent defaults.

use crate::constants::SIGNATURE_PARAM;
use crate::encoding;
use crate::error::Error;
use crate::params::Params;
use crate::signature;
use crate::srcset::{self, SrcsetOptions};

/// Per-render options for plain URL generation.
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlOptions {
    /// Skip path percent-encoding; only the leading `/` is normalized
    pub disable_path_encoding: bool,
}

/// One logical image reference with its persistent parameter set.
#[derive(Debug, Clone)]
pub struct Path {
    prefix: String,
    token: Option<String>,
    path: String,
    params: Params,
}

impl Path {
    /// Creates a reference below `prefix` (e.g. `https://demo.pixlane.net`)
    /// for `path`. When `token` is set, every rendered URL carries an
    /// `s=` signature parameter.
    pub fn new(prefix: impl Into<String>, token: Option<String>, path: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            token,
            path: path.into(),
            params: Params::new(),
        }
    }

    /// The persistent parameter set.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Sets a persistent parameter (aliases resolve to wire names).
    pub fn set(&mut self, name: &str, value: impl ToString) -> &mut Self {
        self.params.set(name, value);
        self
    }

    /// Sets a persistent multi-valued parameter, joined with `,`.
    pub fn set_list<T: ToString>(&mut self, name: &str, values: &[T]) -> &mut Self {
        self.params.set_list(name, values);
        self
    }

    /// Looks up a persistent parameter by name or alias.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    /// Removes a persistent parameter.
    pub fn remove(&mut self, name: &str) -> &mut Self {
        self.params.remove(name);
        self
    }

    /// Clears every persistent parameter.
    pub fn defaults(&mut self) -> &mut Self {
        self.params.clear();
        self
    }

    /// Sets a `rect` crop region from its four components.
    pub fn rect(&mut self, x: u32, y: u32, width: u32, height: u32) -> &mut Self {
        self.set_list("rect", &[x, y, width, height])
    }

    /// Renders the URL for the persistent parameter set.
    pub fn to_url(&self) -> String {
        self.render(&self.params, &UrlOptions::default())
    }

    /// Renders the URL with `overrides` merged on top of the persistent
    /// parameters for this call only.
    pub fn to_url_with(&self, overrides: &Params, options: &UrlOptions) -> String {
        self.render(&self.params.merged(overrides), options)
    }

    /// Expands this reference into a srcset using the default options.
    pub fn to_srcset(&self) -> Result<String, Error> {
        srcset::build_srcset(self, &Params::new(), &SrcsetOptions::default())
    }

    /// Expands this reference into a srcset with per-call parameter
    /// overrides and srcset options.
    pub fn to_srcset_with(
        &self,
        overrides: &Params,
        options: &SrcsetOptions,
    ) -> Result<String, Error> {
        srcset::build_srcset(self, overrides, options)
    }

    /// Composes the final URL for an already-merged parameter set.
    pub(crate) fn render(&self, params: &Params, options: &UrlOptions) -> String {
        let path = encoding::sanitize_path(&self.path, options.disable_path_encoding);
        let query = params.to_query();

        let path_and_query = if query.is_empty() {
            path
        } else {
            format!("{}?{}", path, query)
        };

        match &self.token {
            Some(token) => {
                let sig = signature::sign(token, &path_and_query);
                let separator = if query.is_empty() { "?" } else { "&" };
                format!(
                    "{}{}{}{}={}",
                    self.prefix, path_and_query, separator, SIGNATURE_PARAM, sig
                )
            }
            None => format!("{}{}", self.prefix, path_and_query),
        }
    }
}
