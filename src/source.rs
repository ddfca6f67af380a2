// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Request-scoped owner of the raw parameter mapping for one origin.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::value::{ParamMap, ParamValue};

/// Where a parameter set came from: the query string or the request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    Query,
    Body,
}

impl Origin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::Query => "query",
            Origin::Body => "body",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Origin {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "query" => Ok(Origin::Query),
            "body" => Ok(Origin::Body),
            other => Err(Error::UnknownOrigin(other.to_string())),
        }
    }
}

/// Mutable name/value store for one request origin.
///
/// Owned by the enclosing request context (via the accessor); never global.
/// Key order is the arrival order of the underlying request.
#[derive(Debug, Clone)]
pub struct ParameterSource {
    origin: Origin,
    entries: ParamMap,
}

impl ParameterSource {
    /// An empty source for the given origin.
    pub fn new(origin: Origin) -> Self {
        Self {
            origin,
            entries: ParamMap::new(),
        }
    }

    /// A source populated from an already-parsed mapping.
    pub fn from_map(origin: Origin, entries: ParamMap) -> Self {
        Self { origin, entries }
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// The raw value for `name`, or `Error::NotFound`.
    pub fn get(&self, name: &str) -> Result<&ParamValue, Error> {
        self.entries.get(name).ok_or_else(|| Error::NotFound {
            origin: self.origin,
            name: name.to_string(),
        })
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.entries.insert(name, value);
    }

    pub fn unset(&mut self, name: &str) -> Option<ParamValue> {
        self.entries.remove(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.entries.contains(name)
    }

    /// Key names in arrival order.
    pub fn keys(&self) -> Vec<String> {
        self.entries.keys().map(str::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace the entire content.
    pub fn replace_all(&mut self, entries: ParamMap) {
        self.entries = entries;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_absent_name_is_not_found() {
        let source = ParameterSource::new(Origin::Body);
        let err = source.get("missing").unwrap_err();
        assert_eq!(
            err,
            Error::NotFound {
                origin: Origin::Body,
                name: "missing".into()
            }
        );
    }

    #[test]
    fn set_get_unset_round() {
        let mut source = ParameterSource::new(Origin::Query);
        source.set("a", "1");
        assert!(source.has("a"));
        assert_eq!(source.get("a").ok(), Some(&ParamValue::Str("1".into())));

        assert_eq!(source.unset("a"), Some(ParamValue::Str("1".into())));
        assert!(!source.has("a"));
        assert!(source.get("a").is_err());
    }

    #[test]
    fn keys_follow_arrival_order() {
        let mut source = ParameterSource::new(Origin::Query);
        source.set("c", "3");
        source.set("a", "1");
        source.set("b", "2");
        assert_eq!(source.keys(), vec!["c", "a", "b"]);
    }

    #[test]
    fn replace_all_swaps_content() {
        let mut source = ParameterSource::new(Origin::Query);
        source.set("old", "x");

        let mut fresh = ParamMap::new();
        fresh.insert("new", "y");
        source.replace_all(fresh);

        assert!(!source.has("old"));
        assert!(source.has("new"));
        assert_eq!(source.len(), 1);
    }

    #[test]
    fn origin_parses_and_displays() {
        assert_eq!("query".parse::<Origin>().ok(), Some(Origin::Query));
        assert_eq!("body".parse::<Origin>().ok(), Some(Origin::Body));
        assert_eq!(Origin::Body.to_string(), "body");
        assert!(matches!(
            "cookie".parse::<Origin>(),
            Err(Error::UnknownOrigin(_))
        ));
    }
}
