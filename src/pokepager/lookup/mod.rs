//! # Lookup Layer
//!
//! Resolves one identifier into one [`Record`]. The [`RecordLookup`] trait is the
//! seam between the pager and the remote catalog, the same way a store trait
//! separates business logic from persistence.
//!
//! ## Implementations
//!
//! - [`http::HttpLookup`]: production lookup, `GET <base-url>/<identifier>`
//!   - 2xx with a JSON body is a hit
//!   - any other status, transport error or undecodable body is a miss
//!
//! - [`memory::InMemoryLookup`]: canned records for testing
//!   - identifiers can be marked as failing
//!   - every call is recorded, so tests can assert order and early stop
//!
//! ## Failure Contract
//!
//! A lookup reports a miss as [`PagerError::LookupFailed`]. Callers in this
//! crate never propagate it: the batch fetcher logs and skips.
//!
//! [`PagerError::LookupFailed`]: crate::error::PagerError::LookupFailed

use crate::error::Result;
use crate::model::Record;
use async_trait::async_trait;

pub mod http;
#[cfg(any(test, feature = "test_utils"))]
pub mod memory;

/// Abstract interface for the per-identifier catalog lookup.
#[async_trait]
pub trait RecordLookup: Send + Sync {
    /// Resolve a single identifier. One call, no retries.
    async fn lookup(&self, identifier: &str) -> Result<Record>;
}

#[async_trait]
impl<L: RecordLookup + ?Sized> RecordLookup for &L {
    async fn lookup(&self, identifier: &str) -> Result<Record> {
        (**self).lookup(identifier).await
    }
}
