// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Shared test utilities to reduce duplication across test modules.

use crate::source::{Origin, ParameterSource};

/// Create a query source holding the documented example parameters.
pub fn make_query_source() -> ParameterSource {
    let mut source = ParameterSource::new(Origin::Query);
    source.set("order_id", "42abc");
    source.set("note", "<b>hi</b>");
    source
}
