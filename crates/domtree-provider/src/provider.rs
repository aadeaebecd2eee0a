//! Path sequence provider seam
//!
//! A provider lists every path below a root, in pre-order depth-first
//! order, one page at a time. [`collect_sequence`] drains all pages so the
//! builder only ever sees a complete listing.

use async_trait::async_trait;
use domtree_core::PathRecord;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ProviderError;

/// Default page size for domain listings
pub const DEFAULT_BATCH_SIZE: usize = 75;

/// One page of a listing
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult {
    /// Offset of the first row in the full listing
    #[serde(default)]
    pub start: usize,

    /// Requested page size
    #[serde(default)]
    pub page_size: usize,

    /// Rows in the full listing
    pub total_rows: usize,

    /// Rows on this page, in listing order
    #[serde(default)]
    pub rows: Vec<PathRecord>,
}

impl PagedResult {
    /// Slice one page out of a complete listing
    #[must_use]
    pub fn slice(all: &[PathRecord], start: usize, page_size: usize) -> Self {
        let from = start.min(all.len());
        let to = start.saturating_add(page_size).min(all.len());
        Self {
            start,
            page_size,
            total_rows: all.len(),
            rows: all[from..to].to_vec(),
        }
    }
}

/// Source of pre-ordered path listings
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PathSequenceProvider: Send + Sync {
    /// Fetch up to `batch_size` rows below `root`, starting at row `start`
    async fn fetch_page(
        &self,
        root: &str,
        start: usize,
        batch_size: usize,
    ) -> Result<PagedResult, ProviderError>;
}

/// Fetch every page below `root` and return the complete listing
///
/// # Errors
/// Returns [`ProviderError::InvalidBatchSize`] for a zero batch size,
/// [`ProviderError::Incomplete`] if pages run dry before the advertised
/// total, or any error from the provider.
pub async fn collect_sequence<P>(
    provider: &P,
    root: &str,
    batch_size: usize,
) -> Result<Vec<PathRecord>, ProviderError>
where
    P: PathSequenceProvider + ?Sized,
{
    if batch_size == 0 {
        return Err(ProviderError::InvalidBatchSize);
    }

    let mut rows = Vec::new();
    let mut total;
    loop {
        let page = provider.fetch_page(root, rows.len(), batch_size).await?;
        total = page.total_rows;
        let fetched = page.rows.len();
        debug!(root, start = rows.len(), fetched, total, "fetched listing page");

        rows.extend(page.rows);
        if fetched == 0 || rows.len() >= total {
            break;
        }
    }

    if rows.len() < total {
        return Err(ProviderError::Incomplete {
            root: root.to_string(),
            expected: total,
            received: rows.len(),
        });
    }
    Ok(rows)
}
