// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Lazy filtered parameter reads with per-(kind, name) memoization.
//!
//! A `FilteredAccessor` wraps one `ParameterSource` and applies a filter to a
//! named parameter on first read. The filtered result is memoized under a
//! two-part `(FilterKind, name)` key. Writing or removing a name drops its
//! cached entries under every kind; a bulk replace drops the whole cache.

use std::collections::HashMap;

use tracing::debug;

use crate::error::Error;
use crate::filter::FilterKind;
use crate::source::{Origin, ParameterSource};
use crate::value::{ParamMap, ParamValue};

/// Filtered view over one request origin's parameters.
///
/// Owns its source; the enclosing request context owns the accessor, one per
/// origin, for the lifetime of the request. Filtered reads memoize into
/// accessor state and therefore take `&mut self`.
#[derive(Debug)]
pub struct FilteredAccessor {
    source: ParameterSource,
    active: FilterKind,
    cache: HashMap<(FilterKind, String), ParamValue>,
}

impl FilteredAccessor {
    /// Wrap a source with the default `Text` filter active.
    pub fn new(source: ParameterSource) -> Self {
        Self::with_filter(source, FilterKind::Text)
    }

    /// Wrap a source with a chosen active filter.
    pub fn with_filter(source: ParameterSource, active: FilterKind) -> Self {
        Self {
            source,
            active,
            cache: HashMap::new(),
        }
    }

    pub fn origin(&self) -> Origin {
        self.source.origin()
    }

    /// The filter used by reads that do not name one explicitly.
    pub fn filter(&self) -> FilterKind {
        self.active
    }

    /// Change the active filter. Cached entries of other kinds stay valid
    /// and become reachable again if their kind is re-selected.
    pub fn set_filter(&mut self, kind: FilterKind) {
        self.active = kind;
    }

    /// Read `name` under the active filter.
    pub fn read(&mut self, name: &str) -> Result<ParamValue, Error> {
        self.read_with(self.active, name)
    }

    /// Read `name` under an explicit filter kind, leaving the active kind
    /// untouched.
    ///
    /// On a cache miss the raw value is fetched from the source, every leaf
    /// string is filtered with structure preserved, and the result is
    /// memoized. Values are returned by clone; the cache keeps the canonical
    /// copy.
    pub fn read_with(&mut self, kind: FilterKind, name: &str) -> Result<ParamValue, Error> {
        let key = (kind, name.to_string());
        if let Some(cached) = self.cache.get(&key) {
            return Ok(cached.clone());
        }

        let raw = self.source.get(name)?;
        let filtered = kind.apply(raw);
        debug!(
            name,
            kind = %kind,
            leaves = filtered.leaf_count(),
            "filtered parameter on first read"
        );
        self.cache.insert(key, filtered.clone());
        Ok(filtered)
    }

    /// Write a raw value into the source and drop cached entries for `name`
    /// under every filter kind. Subsequent reads recompute.
    pub fn write(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        let name = name.into();
        self.source.set(name.clone(), value);
        self.invalidate(&name);
    }

    /// Remove a name from the source, dropping its cached entries.
    pub fn remove(&mut self, name: &str) -> Option<ParamValue> {
        let removed = self.source.unset(name);
        if removed.is_some() {
            self.invalidate(name);
        }
        removed
    }

    /// Unfiltered existence check against the source.
    pub fn has(&self, name: &str) -> bool {
        self.source.has(name)
    }

    /// Number of raw entries in the source.
    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Replace the source's entire content and clear the whole cache.
    pub fn replace_all(&mut self, entries: ParamMap) {
        self.source.replace_all(entries);
        debug!(
            origin = %self.origin(),
            dropped = self.cache.len(),
            "replaced all parameters; cache cleared"
        );
        self.cache.clear();
    }

    /// Lazy `(name, filtered value)` iteration under the active filter, in
    /// source key order. The key list is snapshotted here; call `entries()`
    /// again to restart over current state.
    pub fn entries(&mut self) -> Entries<'_> {
        let names = self.source.keys().into_iter();
        Entries {
            accessor: self,
            names,
        }
    }

    /// Materialized `entries()`.
    pub fn to_map(&mut self) -> ParamMap {
        self.entries().collect()
    }

    pub fn source(&self) -> &ParameterSource {
        &self.source
    }

    pub fn into_source(self) -> ParameterSource {
        self.source
    }

    fn invalidate(&mut self, name: &str) {
        let before = self.cache.len();
        self.cache.retain(|(_, cached_name), _| cached_name != name);
        debug!(name, dropped = before - self.cache.len(), "invalidated cached entries");
    }
}

/// Iterator returned by [`FilteredAccessor::entries`].
pub struct Entries<'a> {
    accessor: &'a mut FilteredAccessor,
    names: std::vec::IntoIter<String>,
}

impl Iterator for Entries<'_> {
    type Item = (String, ParamValue);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let name = self.names.next()?;
            // A name gone since the snapshot is skipped.
            if let Ok(value) = self.accessor.read(&name) {
                return Some((name, value));
            }
        }
    }
}
