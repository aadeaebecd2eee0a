//! Domain paths for addressing entries in a lookup namespace
//!
//! Provides [`DomainPath`] for hierarchical addressing of domain entries and
//! [`is_descendant`] for the separator-bounded ancestry test on raw strings.

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Default hierarchy separator
pub const SEPARATOR: char = '/';

/// Path within a domain namespace
///
/// Hierarchical structure using string segments. The root path has no
/// segments and displays as `/`.
///
/// # Examples
/// - `["desc", "ActivityDesc"]` → `/desc/ActivityDesc`
/// - `["servers", "host1"]` → `/servers/host1`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DomainPath(Vec<String>);

impl DomainPath {
    /// Create new path from segments
    #[inline]
    #[must_use]
    pub fn new(segments: Vec<String>) -> Self {
        Self(segments)
    }

    /// Root path (no segments)
    #[inline]
    #[must_use]
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Parse a path string using a custom separator
    ///
    /// The empty string and a lone separator both denote the root. A single
    /// trailing separator is tolerated.
    ///
    /// # Errors
    /// Returns error if the path does not start with the separator or
    /// contains an empty segment.
    pub fn parse_with(s: &str, separator: char) -> Result<Self, PathError> {
        if s.is_empty() {
            return Ok(Self::root());
        }

        let Some(body) = s.strip_prefix(separator) else {
            return Err(PathError::MissingLeadingSeparator {
                path: s.to_string(),
                separator,
            });
        };
        let body = body.strip_suffix(separator).unwrap_or(body);
        if body.is_empty() {
            return Ok(Self::root());
        }

        let segments = body
            .split(separator)
            .map(|seg| {
                if seg.is_empty() {
                    Err(PathError::EmptySegment {
                        path: s.to_string(),
                    })
                } else {
                    Ok(seg.to_string())
                }
            })
            .collect::<Result<_, _>>()?;

        Ok(Self(segments))
    }

    /// Get path segments
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Number of segments below the root
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Check if this is the root path
    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Get parent path (if not root)
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.0.split_last().map(|(_, rest)| Self(rest.to_vec()))
    }

    /// Last segment (if not root)
    #[inline]
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Append a segment, returning new path
    #[must_use]
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut new = self.clone();
        new.0.push(segment.into());
        new
    }

    /// Check if this path is a prefix of another (or equal to it)
    ///
    /// # Examples
    /// - `/a` is prefix of `/a/b`
    /// - `/a` is NOT prefix of `/a-extra`
    #[inline]
    #[must_use]
    pub fn is_prefix_of(&self, other: &Self) -> bool {
        self.0.len() <= other.0.len() && self.0 == other.0[..self.0.len()]
    }

    /// Check if this path is a strict ancestor of another
    #[inline]
    #[must_use]
    pub fn is_ancestor_of(&self, other: &Self) -> bool {
        self.0.len() < other.0.len() && self.is_prefix_of(other)
    }

    /// Check if this path is the immediate parent of another
    #[inline]
    #[must_use]
    pub fn is_parent_of(&self, other: &Self) -> bool {
        self.0.len() + 1 == other.0.len() && self.is_prefix_of(other)
    }

    /// Check if paths overlap (one is prefix of other)
    #[inline]
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.is_prefix_of(other) || other.is_prefix_of(self)
    }

    /// Get common prefix of two paths
    #[must_use]
    pub fn common_prefix(&self, other: &Self) -> Self {
        let common = self
            .0
            .iter()
            .zip(&other.0)
            .take_while(|(a, b)| a == b)
            .map(|(a, _)| a.clone())
            .collect();
        Self(common)
    }

    /// Get relative path from ancestor
    ///
    /// # Errors
    /// Returns error if `self` is not at or below `ancestor`
    pub fn relative_to(&self, ancestor: &Self) -> Result<Self, PathError> {
        if !ancestor.is_prefix_of(self) {
            return Err(PathError::NotDescendant {
                path: self.to_string(),
                ancestor: ancestor.to_string(),
            });
        }
        Ok(Self(self.0[ancestor.0.len()..].to_vec()))
    }

    /// Compare two paths the way a pre-order listing orders siblings
    ///
    /// Segment-wise, so `/a/x` sorts before `/a-extra` even though `-`
    /// precedes `/` in byte order.
    #[inline]
    #[must_use]
    pub fn listing_order(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }

    /// Iterator over segments from root to leaf
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Render with a custom separator
    #[must_use]
    pub fn to_string_with(&self, separator: char) -> String {
        if self.0.is_empty() {
            return separator.to_string();
        }
        let mut out = String::new();
        for seg in &self.0 {
            out.push(separator);
            out.push_str(seg);
        }
        out
    }
}

/// Separator-bounded descendant test on raw path strings
///
/// `candidate` descends from `ancestor` iff it starts with `ancestor`
/// followed by `separator`. An ancestor that already ends with the separator
/// (such as the root `/`) matches any strictly longer path it prefixes.
///
/// # Examples
/// - `/a/x` descends from `/a`
/// - `/a-extra` does NOT descend from `/a`
/// - `/a` does NOT descend from `/a`
#[must_use]
pub fn is_descendant(ancestor: &str, candidate: &str, separator: char) -> bool {
    let Some(rest) = candidate.strip_prefix(ancestor) else {
        return false;
    };
    if ancestor.ends_with(separator) {
        !rest.is_empty()
    } else {
        rest.strip_prefix(separator).is_some_and(|tail| !tail.is_empty())
    }
}

impl Display for DomainPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(SEPARATOR))
    }
}

impl FromStr for DomainPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, SEPARATOR)
    }
}

impl From<Vec<String>> for DomainPath {
    fn from(segments: Vec<String>) -> Self {
        Self(segments)
    }
}

impl Serialize for DomainPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DomainPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Errors related to domain paths
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// Empty segment in path
    #[error("path '{path}' contains an empty segment")]
    EmptySegment {
        /// Offending path
        path: String,
    },

    /// Path is not rooted
    #[error("path '{path}' must start with '{separator}'")]
    MissingLeadingSeparator {
        /// Offending path
        path: String,
        /// Separator expected at the start
        separator: char,
    },

    /// Not a descendant path
    #[error("path '{path}' is not a descendant of '{ancestor}'")]
    NotDescendant {
        /// Path that was expected below `ancestor`
        path: String,
        /// Expected ancestor
        ancestor: String,
    },
}
