use crate::error::{PagerError, Result};
use crate::lookup::RecordLookup;
use crate::model::{NameIndex, RecordBatch};
use tracing::{debug, warn};

/// Resolves up to `desired_count` records starting at `start_offset`.
///
/// Identifiers are looked up one at a time, in index order, and only within the
/// window `[start_offset, start_offset + desired_count)`. A failed lookup is
/// logged and skipped, leaving the batch one record shorter. The walk never
/// reads past the window, so a record belongs to exactly one page. A short
/// batch means either exhaustion or failures; the two are not told apart.
pub async fn fetch_batch<L: RecordLookup + ?Sized>(
    lookup: &L,
    index: &NameIndex,
    start_offset: usize,
    desired_count: usize,
) -> Result<RecordBatch> {
    if desired_count == 0 {
        return Err(PagerError::Api("desired count must be greater than 0".into()));
    }

    // Positions past the identifier list (fallback total) can never resolve.
    let end = index.total_count().min(index.identifiers().len());
    let start = start_offset.min(end);
    let stop = start.saturating_add(desired_count).min(end);
    let mut batch = Vec::with_capacity(stop - start);
    let mut skipped = 0usize;

    for identifier in &index.identifiers()[start..stop] {
        match lookup.lookup(identifier).await {
            Ok(record) => batch.push(record),
            Err(err) => {
                skipped += 1;
                warn!(identifier = %identifier, error = %err, "lookup failed, skipping");
            }
        }
    }

    debug!(
        start_offset,
        desired_count,
        resolved = batch.len(),
        skipped,
        next_position = stop,
        "batch fetched"
    );
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::memory::fixtures::CatalogFixture;
    use crate::lookup::memory::InMemoryLookup;

    fn identifiers(batch: &RecordBatch) -> Vec<&str> {
        batch.iter().map(|r| r.identifier.as_str()).collect()
    }

    #[tokio::test]
    async fn fetches_in_index_order() {
        let fx = CatalogFixture::with_creatures(30);
        let batch = fetch_batch(&fx.lookup, &fx.index, 10, 5).await.unwrap();

        assert_eq!(
            identifiers(&batch),
            vec!["mon-010", "mon-011", "mon-012", "mon-013", "mon-014"]
        );
    }

    #[tokio::test]
    async fn stops_at_desired_count() {
        let fx = CatalogFixture::with_creatures(30);
        let batch = fetch_batch(&fx.lookup, &fx.index, 0, 7).await.unwrap();

        assert_eq!(batch.len(), 7);
        assert_eq!(fx.lookup.calls().len(), 7);
    }

    #[tokio::test]
    async fn never_exceeds_desired_count() {
        let fx = CatalogFixture::with_creatures(50);
        for (start, desired) in [(0, 1), (0, 20), (13, 20), (40, 20), (49, 3)] {
            let batch = fetch_batch(&fx.lookup, &fx.index, start, desired)
                .await
                .unwrap();
            assert!(batch.len() <= desired, "start={start} desired={desired}");
        }
    }

    #[tokio::test]
    async fn stops_when_index_is_exhausted() {
        let fx = CatalogFixture::with_creatures(5);
        let batch = fetch_batch(&fx.lookup, &fx.index, 0, 20).await.unwrap();

        assert_eq!(batch.len(), 5);
        assert_eq!(fx.lookup.calls().len(), 5);
    }

    #[tokio::test]
    async fn failed_lookup_shrinks_batch() {
        let fx = CatalogFixture::with_names(&["a", "b", "c"]).failing("b");
        let batch = fetch_batch(&fx.lookup, &fx.index, 0, 3).await.unwrap();

        assert_eq!(identifiers(&batch), vec!["a", "c"]);
        assert_eq!(fx.lookup.calls(), vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn failures_never_read_past_the_window() {
        let fx = CatalogFixture::with_names(&["a", "b", "c", "d"]).failing("b");
        let batch = fetch_batch(&fx.lookup, &fx.index, 0, 2).await.unwrap();

        assert_eq!(identifiers(&batch), vec!["a"]);
        assert_eq!(fx.lookup.calls(), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn failure_mid_catalog_shrinks_that_page() {
        let fx = CatalogFixture::with_creatures(30).failing("mon-012");
        let batch = fetch_batch(&fx.lookup, &fx.index, 10, 5).await.unwrap();

        assert_eq!(
            identifiers(&batch),
            vec!["mon-010", "mon-011", "mon-013", "mon-014"]
        );
        assert_eq!(fx.lookup.calls().len(), 5);
    }

    #[tokio::test]
    async fn all_failures_yield_empty_batch() {
        let fx = CatalogFixture::with_names(&["a", "b", "c"])
            .failing("a")
            .failing("b")
            .failing("c");
        let batch = fetch_batch(&fx.lookup, &fx.index, 0, 3).await.unwrap();

        assert!(batch.is_empty());
    }

    #[tokio::test]
    async fn start_past_end_yields_empty_batch() {
        let fx = CatalogFixture::with_creatures(3);
        let batch = fetch_batch(&fx.lookup, &fx.index, 10, 5).await.unwrap();

        assert!(batch.is_empty());
        assert!(fx.lookup.calls().is_empty());
    }

    #[tokio::test]
    async fn zero_desired_count_is_rejected() {
        let fx = CatalogFixture::with_creatures(3);
        let result = fetch_batch(&fx.lookup, &fx.index, 0, 0).await;

        assert!(matches!(result, Err(PagerError::Api(_))));
        assert!(fx.lookup.calls().is_empty());
    }

    #[tokio::test]
    async fn fallback_index_has_nothing_to_resolve() {
        let lookup = InMemoryLookup::new();
        let index = NameIndex::with_fallback(vec![], 341);

        let batch = fetch_batch(&lookup, &index, 0, 10).await.unwrap();
        assert!(batch.is_empty());
        assert!(lookup.calls().is_empty());
    }
}
