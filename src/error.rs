// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Error type for parameter access and name parsing.

use std::fmt;

use crate::source::Origin;

/// Errors produced by parameter access and by parsing filter/origin names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The named parameter is absent from the source.
    NotFound {
        /// Which request origin was consulted.
        origin: Origin,
        /// The parameter name that was looked up.
        name: String,
    },
    /// A filter-kind name did not match any known kind.
    UnknownFilter(String),
    /// An origin name did not match any known origin.
    UnknownOrigin(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound { origin, name } => {
                write!(f, "no parameter '{}' in {} input", name, origin)
            }
            Error::UnknownFilter(s) => write!(f, "unknown filter kind '{}'", s),
            Error::UnknownOrigin(s) => write!(f, "unknown input origin '{}'", s),
        }
    }
}

impl std::error::Error for Error {}
