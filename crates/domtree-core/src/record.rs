//! Input records from a domain lookup listing

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of entry behind a domain path
///
/// Serialized as the lookup endpoint's `type` string. Unknown strings are
/// kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PathKind {
    /// Context (folder) in the domain tree
    Domain,
    /// Item registered under a domain path
    Item,
    /// Agent item
    Agent,
    /// Role path
    Role,
    /// No type reported
    #[default]
    NotApplicable,
    /// Any other type string
    Other(String),
}

impl PathKind {
    /// Wire name of this kind
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Domain => "domain",
            Self::Item => "item",
            Self::Agent => "agent",
            Self::Role => "role",
            Self::NotApplicable => "n/a",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for PathKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "domain" => Self::Domain,
            "item" => Self::Item,
            "agent" => Self::Agent,
            "role" => Self::Role,
            "n/a" | "" => Self::NotApplicable,
            _ => Self::Other(s),
        }
    }
}

impl From<PathKind> for String {
    fn from(kind: PathKind) -> Self {
        match kind {
            PathKind::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

/// Opaque fields carried from a record to its menu node
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecordPayload {
    /// Entry kind
    #[serde(rename = "type", default)]
    pub kind: PathKind,

    /// Resource URL of the entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Item UUID, when the path resolves to an item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<Uuid>,

    /// Whether a role path keeps a job list
    #[serde(rename = "hasJoblist", default, skip_serializing_if = "Option::is_none")]
    pub has_job_list: Option<bool>,
}

/// One entry of a flat, pre-ordered path listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathRecord {
    /// Display label
    pub name: String,

    /// Full hierarchical identifier; ordering and nesting key
    pub path: String,

    /// Uninterpreted payload
    #[serde(flatten)]
    pub payload: RecordPayload,
}

impl PathRecord {
    /// Create a record with an empty payload
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            payload: RecordPayload::default(),
        }
    }

    /// Create a record named after the last `/`-separated segment of `path`
    #[must_use]
    pub fn from_path(path: impl Into<String>) -> Self {
        let path = path.into();
        let name = path
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_string();
        Self::new(name, path)
    }

    /// With entry kind
    #[inline]
    #[must_use]
    pub fn with_kind(mut self, kind: PathKind) -> Self {
        self.payload.kind = kind;
        self
    }

    /// With resource URL
    #[inline]
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.payload.url = Some(url.into());
        self
    }

    /// With item UUID
    #[inline]
    #[must_use]
    pub fn with_uuid(mut self, uuid: Uuid) -> Self {
        self.payload.uuid = Some(uuid);
        self
    }
}
