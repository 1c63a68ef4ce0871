//! Ordered rendering-parameter map
//!
//! Query parameters are stored as an insertion-ordered list of key/value
//! string pairs. Order matters: it governs query-string output and
//! therefore the signature, so entries are never sorted. Keys are unique -
//! setting an existing key overwrites its value in place, keeping the
//! original position.
//!
//! Ergonomic parameter names (`width`, `quality`, ...) resolve through a
//! static alias table to the short wire names (`w`, `q`, ...) the codec
//! emits. Only wire names are ever stored.

use crate::encoding;

/// Maps ergonomic parameter names to the short wire names that are
/// ultimately encoded and signed.
pub const ALIASES: [(&str, &str); 20] = [
    ("width", "w"),
    ("height", "h"),
    ("rotation", "rot"),
    ("noise_reduction", "nr"),
    ("sharpness", "sharp"),
    ("exposure", "exp"),
    ("vibrance", "vib"),
    ("saturation", "sat"),
    ("brightness", "bri"),
    ("contrast", "con"),
    ("highlight", "high"),
    ("shadow", "shad"),
    ("gamma", "gam"),
    ("pixelate", "px"),
    ("halftone", "htn"),
    ("watermark", "mark"),
    ("text", "txt"),
    ("format", "fm"),
    ("quality", "q"),
    ("fill_color", "fillcolor"),
];

/// Resolve an ergonomic parameter name to its wire name.
///
/// Names that are not aliased (already wire names, or custom parameters)
/// pass through unchanged. Resolution is case-sensitive.
pub fn resolve_alias(name: &str) -> &str {
    ALIASES
        .iter()
        .find(|(from, _)| *from == name)
        .map_or(name, |(_, to)| *to)
}

/// Insertion-ordered parameter map with last-writer-wins semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(String, String)>,
}

impl Params {
    /// Creates an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map from ordered string pairs, resolving aliases.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut params = Self::new();
        for (key, value) in pairs {
            params.set(key, value);
        }
        params
    }

    /// Sets a parameter, resolving aliases to wire names.
    ///
    /// Values are coerced to their string representation. An existing key
    /// keeps its position in the emission order.
    pub fn set(&mut self, name: &str, value: impl ToString) -> &mut Self {
        let key = resolve_alias(name);
        let value = value.to_string();
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key.to_string(), value)),
        }
        self
    }

    /// Sets a multi-valued parameter, joining the values with `,`.
    pub fn set_list<T: ToString>(&mut self, name: &str, values: &[T]) -> &mut Self {
        let joined = values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<String>>()
            .join(",");
        self.set(name, joined)
    }

    /// Looks up a parameter by name or alias.
    pub fn get(&self, name: &str) -> Option<&str> {
        let key = resolve_alias(name);
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true when the parameter is present.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Removes a parameter, returning its previous value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let key = resolve_alias(name);
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Removes every parameter.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns a copy with `overrides` merged on top of `self`.
    ///
    /// Overrides win on key collision; colliding keys keep the base map's
    /// position. The base map is untouched, so per-call overrides never
    /// leak into an image reference's persistent defaults.
    pub fn merged(&self, overrides: &Params) -> Params {
        let mut merged = self.clone();
        for (key, value) in overrides.iter() {
            merged.set(key, value);
        }
        merged
    }

    /// Renders the canonical query string for this parameter set.
    pub fn to_query(&self) -> String {
        encoding::encode_query(self.iter())
    }
}
