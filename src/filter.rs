// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Sanitization filter kinds and their string transforms.
//!
//! Each kind rewrites leaf strings only; containers keep their shape. The
//! transforms are total over `&str` input and never fail.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::Error;
use crate::value::{ParamMap, ParamValue};

/// Sanitization policy applied to raw parameter strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    /// Identity; the raw value passes through untouched.
    Raw,
    /// Strip tag spans and NUL bytes, encode quotes for plain-text contexts.
    Text,
    /// Retain only characters valid in an email address.
    Email,
    /// Retain only characters valid in a URL.
    Url,
    /// Retain ASCII digits plus one leading sign.
    Integer,
    /// Retain ASCII digits, one leading sign, and decimal points.
    Float,
    /// Encode HTML-special characters as entities.
    Html,
    /// Backslash-escape characters meaningful to a shell interpreter.
    ShellEscape,
}

impl FilterKind {
    /// Every filter kind.
    pub const ALL: [FilterKind; 8] = [
        FilterKind::Raw,
        FilterKind::Text,
        FilterKind::Email,
        FilterKind::Url,
        FilterKind::Integer,
        FilterKind::Float,
        FilterKind::Html,
        FilterKind::ShellEscape,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKind::Raw => "raw",
            FilterKind::Text => "text",
            FilterKind::Email => "email",
            FilterKind::Url => "url",
            FilterKind::Integer => "integer",
            FilterKind::Float => "float",
            FilterKind::Html => "html",
            FilterKind::ShellEscape => "shell_escape",
        }
    }

    /// Apply this filter to a value, rewriting every leaf string and
    /// preserving list/map structure.
    pub fn apply(&self, value: &ParamValue) -> ParamValue {
        match value {
            ParamValue::Str(s) => ParamValue::Str(self.apply_str(s)),
            ParamValue::List(items) => {
                ParamValue::List(items.iter().map(|v| self.apply(v)).collect())
            }
            ParamValue::Map(map) => {
                let filtered: ParamMap = map
                    .iter()
                    .map(|(k, v)| (k.to_string(), self.apply(v)))
                    .collect();
                ParamValue::Map(filtered)
            }
        }
    }

    /// Apply this filter to a single leaf string.
    pub fn apply_str(&self, s: &str) -> String {
        match self {
            FilterKind::Raw => s.to_string(),
            FilterKind::Text => sanitize_text(s),
            FilterKind::Email => retain(s, is_email_char),
            FilterKind::Url => retain(s, is_url_char),
            FilterKind::Integer => retain_number(s, false),
            FilterKind::Float => retain_number(s, true),
            FilterKind::Html => encode_html(s),
            FilterKind::ShellEscape => escape_shell(s),
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raw" => Ok(FilterKind::Raw),
            "text" => Ok(FilterKind::Text),
            "email" => Ok(FilterKind::Email),
            "url" => Ok(FilterKind::Url),
            "integer" => Ok(FilterKind::Integer),
            "float" => Ok(FilterKind::Float),
            "html" => Ok(FilterKind::Html),
            "shell_escape" => Ok(FilterKind::ShellEscape),
            other => Err(Error::UnknownFilter(other.to_string())),
        }
    }
}

/// Keep only characters accepted by `pred`.
fn retain(s: &str, pred: fn(char) -> bool) -> String {
    s.chars().filter(|&c| pred(c)).collect()
}

fn is_email_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!#$%&'*+-=?^_`{|}~@.[]".contains(c)
}

fn is_url_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "$-_.+!*'(),{}|\\^~[]`<>#%\";/?:@&=".contains(c)
}

/// Digits plus at most one sign, kept only while no digit has been retained.
/// With `fraction`, `.` characters are kept as well.
fn retain_number(s: &str, fraction: bool) -> String {
    let mut out = String::with_capacity(s.len());
    let mut has_sign = false;
    let mut has_digit = false;
    for c in s.chars() {
        if c.is_ascii_digit() {
            out.push(c);
            has_digit = true;
        } else if (c == '+' || c == '-') && !has_digit && !has_sign {
            out.push(c);
            has_sign = true;
        } else if fraction && c == '.' {
            out.push(c);
        }
    }
    out
}

/// Strip `<...>` spans (an unterminated `<` drops the remainder), strip NUL
/// bytes, and encode quotes as decimal entities.
fn sanitize_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        match c {
            '<' => {
                for t in chars.by_ref() {
                    if t == '>' {
                        break;
                    }
                }
            }
            '\0' => {}
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn encode_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Backslash-escape shell metacharacters. A quote character is escaped only
/// when its total count is odd, and then only the final occurrence; paired
/// quotes pass through.
fn escape_shell(s: &str) -> String {
    let single_total = s.chars().filter(|&c| c == '\'').count();
    let double_total = s.chars().filter(|&c| c == '"').count();
    let mut single_seen = 0usize;
    let mut double_seen = 0usize;

    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '#' | '&' | ';' | '`' | '|' | '*' | '?' | '~' | '<' | '>' | '^' | '(' | ')'
            | '[' | ']' | '{' | '}' | '$' | '\\' | '\n' | '\u{00FF}' => {
                out.push('\\');
                out.push(c);
            }
            '\'' => {
                single_seen += 1;
                if single_total % 2 == 1 && single_seen == single_total {
                    out.push('\\');
                }
                out.push(c);
            }
            '"' => {
                double_seen += 1;
                if double_total % 2 == 1 && double_seen == double_total {
                    out.push('\\');
                }
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}
