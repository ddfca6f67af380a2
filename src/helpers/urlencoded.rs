// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Parsing of url-encoded query strings and form bodies into parameter maps.
//!
//! Supports percent-decoding with `+` as space and the bracket syntax for
//! nested input (`user[name]=x`, `tags[]=a&tags[]=b`). Parsing is lenient:
//! malformed percent runs are kept literally and malformed bracket names
//! fall back to a literal flat key. The configured caps bound how many pairs
//! and how much nesting a request may introduce.

use tracing::warn;

use crate::config::InputConfig;
use crate::value::{ParamMap, ParamValue};

/// One bracket group in a parameter name: `[]` appends, `[key]` descends.
#[derive(Debug, PartialEq, Eq)]
enum Segment {
    Push,
    Key(String),
}

/// Parse an url-encoded pair list into a parameter map.
///
/// Pairs split on `&`; a pair without `=` maps to the empty string. A later
/// duplicate flat key overwrites the earlier one, and a structural conflict
/// (scalar vs. container) resolves in favor of the later pair.
pub fn parse(input: &str, config: &InputConfig) -> ParamMap {
    let mut map = ParamMap::new();
    let mut kept = 0usize;
    let mut over_cap = 0usize;

    for pair in input.split('&') {
        if pair.is_empty() {
            continue;
        }
        if kept >= config.max_params {
            over_cap += 1;
            continue;
        }

        let (raw_name, raw_value) = match pair.split_once('=') {
            Some((n, v)) => (n, v),
            None => (pair, ""),
        };
        let name = percent_decode(raw_name);
        let value = percent_decode(raw_value);

        let (root, segments) = parse_name(&name);
        if segments.len() > config.max_depth {
            warn!(name = %name, max_depth = config.max_depth, "dropping parameter nested too deeply");
            continue;
        }

        if !map.contains(&root) {
            map.insert(root.clone(), ParamValue::Str(String::new()));
        }
        if let Some(slot) = map.get_mut(&root) {
            place_value(slot, &segments, value);
        }
        kept += 1;
    }

    if over_cap > 0 {
        warn!(dropped = over_cap, max_params = config.max_params, "truncated parameter list");
    }
    map
}

/// Decode percent runs and `+`. Malformed runs are kept as literal text.
/// Decoded bytes that are not valid UTF-8 are replaced, not rejected.
pub fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut i = 0usize;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                match (hex_val(bytes[i + 1]), hex_val(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push(hi * 16 + lo);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_val(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Split a decoded name into its root key and bracket segments.
///
/// A name whose bracket syntax does not parse cleanly (no root, unclosed
/// group, text between groups) is returned whole as a flat key.
fn parse_name(name: &str) -> (String, Vec<Segment>) {
    let Some(open) = name.find('[') else {
        return (name.to_string(), Vec::new());
    };
    let root = &name[..open];
    if root.is_empty() {
        return (name.to_string(), Vec::new());
    }

    let mut segments = Vec::new();
    let mut rest = &name[open..];
    while !rest.is_empty() {
        if !rest.starts_with('[') {
            return (name.to_string(), Vec::new());
        }
        let Some(close) = rest.find(']') else {
            return (name.to_string(), Vec::new());
        };
        let inner = &rest[1..close];
        segments.push(if inner.is_empty() {
            Segment::Push
        } else {
            Segment::Key(inner.to_string())
        });
        rest = &rest[close + 1..];
    }
    (root.to_string(), segments)
}

/// Write `value` into `slot`, descending through the remaining segments and
/// reshaping the slot where the existing value has the wrong shape.
fn place_value(slot: &mut ParamValue, segments: &[Segment], value: String) {
    let Some((first, rest)) = segments.split_first() else {
        *slot = ParamValue::Str(value);
        return;
    };

    match first {
        Segment::Push => {
            if !matches!(slot, ParamValue::List(_)) {
                *slot = ParamValue::List(Vec::new());
            }
            if let ParamValue::List(items) = slot {
                items.push(ParamValue::Str(String::new()));
                if let Some(last) = items.last_mut() {
                    place_value(last, rest, value);
                }
            }
        }
        Segment::Key(key) => {
            if !matches!(slot, ParamValue::Map(_)) {
                *slot = ParamValue::Map(ParamMap::new());
            }
            if let ParamValue::Map(map) = slot {
                if !map.contains(key) {
                    map.insert(key.clone(), ParamValue::Str(String::new()));
                }
                if let Some(child) = map.get_mut(key) {
                    place_value(child, rest, value);
                }
            }
        }
    }
}
