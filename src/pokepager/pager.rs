//! # Pagination Controller
//!
//! [`Pager`] is the single owner of the page offset. Every transition goes
//! through it: `reset`, `advance`, `retreat` and `seek` compute the new
//! offset, fetch that page with [`fetch_batch`], and only then commit the new
//! offset, batch and navigation flags together.
//!
//! ## Offset Invariants
//!
//! - `offset` is always a multiple of `page_size`.
//! - `offset <= last_page_offset()`, where the last page-aligned offset is
//!   `floor((total - 1) / page_size) * page_size` (0 for an empty index).
//! - `can_prev` iff `offset > 0`; `can_next` iff `offset < last_page_offset()`.
//!   Flags are recomputed after every load, never toggled on their own.
//!
//! ## Exclusivity
//!
//! Navigation takes `&mut self`, so a single owner cannot overlap loads.
//! [`SharedPager`] is for callers that share the pager across tasks: it
//! rejects a command with [`PagerError::Busy`] while another one is in flight.

use crate::config::MAX_PAGE_SIZE;
use crate::error::{PagerError, Result};
use crate::fetch::fetch_batch;
use crate::lookup::RecordLookup;
use crate::model::{NameIndex, NavState, PageOutcome, RecordBatch};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

pub struct Pager<L: RecordLookup> {
    lookup: L,
    index: NameIndex,
    page_size: usize,
    offset: usize,
    batch: RecordBatch,
    nav: NavState,
}

impl<L: RecordLookup> Pager<L> {
    pub fn new(lookup: L, index: NameIndex, page_size: usize) -> Result<Self> {
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            return Err(PagerError::Config(format!(
                "page_size must be between 1 and {}",
                MAX_PAGE_SIZE
            )));
        }
        Ok(Self {
            lookup,
            index,
            page_size,
            offset: 0,
            batch: Vec::new(),
            nav: NavState::default(),
        })
    }

    /// Back to the first page. Always reloads.
    pub async fn reset(&mut self) -> Result<PageOutcome> {
        self.load(0).await
    }

    pub async fn advance(&mut self) -> Result<PageOutcome> {
        if self.offset + self.page_size >= self.index.total_count() {
            return Ok(PageOutcome::Unchanged);
        }
        self.load(self.offset + self.page_size).await
    }

    pub async fn retreat(&mut self) -> Result<PageOutcome> {
        if self.offset == 0 {
            return Ok(PageOutcome::Unchanged);
        }
        self.load(self.offset - self.page_size).await
    }

    /// Jumps to a 1-based page number, clamped to the first and last page.
    pub async fn seek(&mut self, page_number: usize) -> Result<PageOutcome> {
        let target = page_number
            .saturating_sub(1)
            .saturating_mul(self.page_size)
            .min(self.last_page_offset());
        self.load(target).await
    }

    async fn load(&mut self, offset: usize) -> Result<PageOutcome> {
        let batch = fetch_batch(&self.lookup, &self.index, offset, self.page_size).await?;
        self.offset = offset;
        self.batch = batch;
        self.nav = self.compute_nav();
        debug!(
            offset = self.offset,
            records = self.batch.len(),
            can_prev = self.nav.can_prev,
            can_next = self.nav.can_next,
            "page loaded"
        );
        Ok(PageOutcome::Loaded)
    }

    fn compute_nav(&self) -> NavState {
        NavState {
            can_prev: self.offset > 0,
            can_next: self.index.total_count() > 0 && self.offset < self.last_page_offset(),
        }
    }

    /// Offset of the final, possibly partial, page.
    pub fn last_page_offset(&self) -> usize {
        match self.index.total_count() {
            0 => 0,
            total => (total - 1) / self.page_size * self.page_size,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_count(&self) -> usize {
        self.index.total_count()
    }

    pub fn index(&self) -> &NameIndex {
        &self.index
    }

    pub fn batch(&self) -> &RecordBatch {
        &self.batch
    }

    pub fn nav(&self) -> NavState {
        self.nav
    }

    /// 1-based number of the current page.
    pub fn page_number(&self) -> usize {
        self.offset / self.page_size + 1
    }

    pub fn page_count(&self) -> usize {
        self.last_page_offset() / self.page_size + 1
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }
}

/// Point-in-time copy of a pager's visible state.
#[derive(Debug, Clone)]
pub struct PageView {
    pub offset: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub page_number: usize,
    pub page_count: usize,
    pub nav: NavState,
    pub batch: RecordBatch,
}

impl<L: RecordLookup> From<&Pager<L>> for PageView {
    fn from(pager: &Pager<L>) -> Self {
        Self {
            offset: pager.offset(),
            page_size: pager.page_size(),
            total_count: pager.total_count(),
            page_number: pager.page_number(),
            page_count: pager.page_count(),
            nav: pager.nav(),
            batch: pager.batch().clone(),
        }
    }
}

/// A pager shared between tasks with single-flight navigation.
pub struct SharedPager<L: RecordLookup> {
    inner: Arc<Mutex<Pager<L>>>,
}

impl<L: RecordLookup> Clone for SharedPager<L> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<L: RecordLookup> SharedPager<L> {
    pub fn new(pager: Pager<L>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(pager)),
        }
    }

    pub async fn reset(&self) -> Result<PageOutcome> {
        self.claim()?.reset().await
    }

    pub async fn advance(&self) -> Result<PageOutcome> {
        self.claim()?.advance().await
    }

    pub async fn retreat(&self) -> Result<PageOutcome> {
        self.claim()?.retreat().await
    }

    pub async fn seek(&self, page_number: usize) -> Result<PageOutcome> {
        self.claim()?.seek(page_number).await
    }

    /// Waits for any in-flight load, then copies the current state.
    pub async fn view(&self) -> PageView {
        PageView::from(&*self.inner.lock().await)
    }

    fn claim(&self) -> Result<tokio::sync::MutexGuard<'_, Pager<L>>> {
        self.inner.try_lock().map_err(|_| PagerError::Busy)
    }
}
