//! Providers backed by listings already in memory

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use domtree_core::PathRecord;
use domtree_path::is_descendant;
use parking_lot::Mutex;
use serde::Deserialize;
use tracing::info;

use crate::error::ProviderError;
use crate::provider::{PagedResult, PathSequenceProvider};

/// Serves a fixed listing, restricted to the requested root
///
/// Rows are served in the order given; only rows strictly below the root
/// are listed, matching the lookup endpoint, which never lists the root
/// itself. `""`, `"/"` and the bare separator all name the top of the
/// hierarchy and list everything.
///
/// The positions of the rows below the most recently requested root are
/// kept between pages, so draining a listing page by page is linear.
#[derive(Debug)]
pub struct InMemoryProvider {
    records: Vec<PathRecord>,
    separator: char,
    positions: Mutex<Option<(String, Arc<[usize]>)>>,
}

impl InMemoryProvider {
    /// Create provider over a listing
    #[must_use]
    pub fn new(records: Vec<PathRecord>) -> Self {
        Self {
            records,
            separator: domtree_path::SEPARATOR,
            positions: Mutex::new(None),
        }
    }

    /// With separator used for the root filter
    #[inline]
    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self.positions = Mutex::new(None);
        self
    }

    /// Full unfiltered listing
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[PathRecord] {
        &self.records
    }

    fn is_top(&self, root: &str) -> bool {
        let mut chars = root.chars();
        match (chars.next(), chars.next()) {
            (None, _) => true,
            (Some(c), None) => c == domtree_path::SEPARATOR || c == self.separator,
            _ => false,
        }
    }

    /// Positions of the rows strictly below `root`
    fn below(&self, root: &str) -> Arc<[usize]> {
        let mut cached = self.positions.lock();
        if let Some((key, positions)) = cached.as_ref() {
            if key == root {
                return Arc::clone(positions);
            }
        }

        let positions: Arc<[usize]> = if self.is_top(root) {
            (0..self.records.len()).collect()
        } else {
            self.records
                .iter()
                .enumerate()
                .filter(|(_, r)| is_descendant(root, &r.path, self.separator))
                .map(|(i, _)| i)
                .collect()
        };
        *cached = Some((root.to_string(), Arc::clone(&positions)));
        positions
    }
}

impl Clone for InMemoryProvider {
    fn clone(&self) -> Self {
        Self::new(self.records.clone()).with_separator(self.separator)
    }
}

#[async_trait]
impl PathSequenceProvider for InMemoryProvider {
    async fn fetch_page(
        &self,
        root: &str,
        start: usize,
        batch_size: usize,
    ) -> Result<PagedResult, ProviderError> {
        let positions = self.below(root);
        let from = start.min(positions.len());
        let to = start.saturating_add(batch_size).min(positions.len());
        Ok(PagedResult {
            start,
            page_size: batch_size,
            total_rows: positions.len(),
            rows: positions[from..to]
                .iter()
                .map(|&i| self.records[i].clone())
                .collect(),
        })
    }
}

/// Listing file contents: a bare array of rows or one saved page
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ListingFile {
    Rows(Vec<PathRecord>),
    Paged(PagedResult),
}

/// Serves a listing saved as JSON
///
/// Accepts either a bare array of lookup rows or a paged response object
/// (`start`, `pageSize`, `totalRows`, `rows`).
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    inner: InMemoryProvider,
}

impl JsonFileProvider {
    /// Parse a listing from JSON text
    ///
    /// # Errors
    /// Returns [`ProviderError::Json`] if the text matches neither shape.
    pub fn from_json_str(json: &str) -> Result<Self, ProviderError> {
        let rows = match serde_json::from_str::<ListingFile>(json)? {
            ListingFile::Rows(rows) => rows,
            ListingFile::Paged(page) => page.rows,
        };
        Ok(Self {
            inner: InMemoryProvider::new(rows),
        })
    }

    /// Read and parse a listing file
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, ProviderError> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ProviderError::Io {
                path: path.display().to_string(),
                source,
            })?;
        let provider = Self::from_json_str(&text)?;
        info!(
            path = %path.display(),
            rows = provider.inner.records().len(),
            "loaded listing file"
        );
        Ok(provider)
    }

    /// With separator used for the root filter
    #[inline]
    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.inner = self.inner.with_separator(separator);
        self
    }

    /// Full unfiltered listing
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[PathRecord] {
        self.inner.records()
    }
}

#[async_trait]
impl PathSequenceProvider for JsonFileProvider {
    async fn fetch_page(
        &self,
        root: &str,
        start: usize,
        batch_size: usize,
    ) -> Result<PagedResult, ProviderError> {
        self.inner.fetch_page(root, start, batch_size).await
    }
}
