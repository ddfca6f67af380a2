// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Request-scoped facade: one filtered accessor per parameter origin.

use crate::accessor::FilteredAccessor;
use crate::config::InputConfig;
use crate::helpers::urlencoded;
use crate::source::{Origin, ParameterSource};
use crate::value::ParamMap;

/// Filtered access to one request's query and body parameters.
///
/// Built once per request and passed where needed; nothing here is global,
/// so concurrent requests never share parameter state.
#[derive(Debug)]
pub struct RequestInput {
    query: FilteredAccessor,
    body: FilteredAccessor,
}

impl RequestInput {
    /// Wrap already-parsed parameter maps with the `Text` default filter.
    pub fn new(query: ParamMap, body: ParamMap) -> Self {
        Self::with_config(&InputConfig::default(), query, body)
    }

    /// Wrap already-parsed parameter maps, taking the default filter from
    /// configuration.
    pub fn with_config(config: &InputConfig, query: ParamMap, body: ParamMap) -> Self {
        Self {
            query: FilteredAccessor::with_filter(
                ParameterSource::from_map(Origin::Query, query),
                config.default_filter,
            ),
            body: FilteredAccessor::with_filter(
                ParameterSource::from_map(Origin::Body, body),
                config.default_filter,
            ),
        }
    }

    /// Parse a raw query string and form body under the configured limits.
    pub fn from_encoded(config: &InputConfig, query_string: &str, form_body: &str) -> Self {
        let query = urlencoded::parse(query_string, config);
        let body = urlencoded::parse(form_body, config);
        Self::with_config(config, query, body)
    }

    /// The query-string accessor.
    pub fn query(&mut self) -> &mut FilteredAccessor {
        &mut self.query
    }

    /// The form-body accessor.
    pub fn body(&mut self) -> &mut FilteredAccessor {
        &mut self.body
    }

    /// Accessor selected by origin tag.
    pub fn accessor(&mut self, origin: Origin) -> &mut FilteredAccessor {
        match origin {
            Origin::Query => &mut self.query,
            Origin::Body => &mut self.body,
        }
    }
}
