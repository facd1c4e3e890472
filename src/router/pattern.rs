//! Path patterns with positional parameters
//!
//! A pattern is a `/`-separated list of segments. Each segment is either a
//! literal (`explorer`) or a named parameter (`:id`). Matching is structural
//! only: a parameter binds whatever non-empty segment sits in its position,
//! and the destination view decides whether the value is meaningful.

use anyhow::{bail, Result};
use std::fmt;

/// One segment of a parsed pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Param(String),
}

/// Values bound by parameter segments, in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    values: Vec<(String, String)>,
}

impl RouteParams {
    /// Look up a bound parameter by name
    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// The first bound value. Every declared pattern carries at most one.
    pub fn first(&self) -> Option<&str> {
        self.values.first().map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn bind(&mut self, name: &str, raw: &str) {
        // Undecodable input is handed over verbatim
        let value = urlencoding::decode(raw)
            .map(|v| v.into_owned())
            .unwrap_or_else(|_| raw.to_string());
        self.values.push((name.to_string(), value));
    }
}

/// A parsed route pattern such as `/explorer/block/:id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    source: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse a pattern. Patterns must be absolute and may not contain
    /// empty segments or unnamed parameters.
    pub fn parse(pattern: &str) -> Result<Self> {
        if !pattern.starts_with('/') {
            bail!("route pattern must start with '/': {:?}", pattern);
        }

        let mut segments = Vec::new();
        for raw in split_segments(pattern) {
            if raw.is_empty() {
                bail!("route pattern has an empty segment: {:?}", pattern);
            }
            match raw.strip_prefix(':') {
                Some("") => bail!("route pattern has an unnamed parameter: {:?}", pattern),
                Some(name) => segments.push(Segment::Param(name.to_string())),
                None => segments.push(Segment::Literal(raw.to_string())),
            }
        }

        Ok(Self {
            source: pattern.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    #[cfg(test)]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Match a location path against this pattern.
    ///
    /// `exact` requires the segment counts to agree; otherwise the pattern
    /// only has to cover a leading run of the path's segments.
    pub fn matches(&self, path: &str, exact: bool) -> Option<RouteParams> {
        // Locations are absolute, like the patterns
        if !path.starts_with('/') {
            return None;
        }
        let path = normalize(path);
        let parts: Vec<&str> = split_segments(path).collect();

        if parts.len() < self.segments.len() {
            return None;
        }
        if exact && parts.len() != self.segments.len() {
            return None;
        }

        let mut params = RouteParams::default();
        for (segment, part) in self.segments.iter().zip(parts.iter()) {
            match segment {
                Segment::Literal(lit) => {
                    if lit != part {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    if part.is_empty() {
                        return None;
                    }
                    params.bind(name, part);
                }
            }
        }

        Some(params)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Strip query, fragment and a single trailing slash from a location
pub fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => path,
    }
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    // "/" has no segments; "/a/b" has ["a", "b"]
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let empty_root = trimmed.is_empty();
    trimmed.split('/').filter(move |_| !empty_root)
}
