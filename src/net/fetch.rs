//! Cancellable catalog fetch.
//!
//! The listing page runs at most one fetch per mount. The future is wrapped
//! in `futures::future::Abortable`; tearing the page down aborts it and the
//! result comes back as [`FetchOutcome::Cancelled`], which is neither
//! reported nor applied to state.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use futures::future::{AbortHandle, AbortRegistration, Abortable};

use super::api::{CatalogError, CatalogSource};
use super::types::CatalogItem;
use crate::state::catalog::duplicate_ids;
use crate::util::diagnostics::DiagnosticSink;

/// Result of one catalog fetch.
#[derive(Debug)]
pub enum FetchOutcome {
    Loaded(Vec<CatalogItem>),
    /// Already reported to the diagnostic sink.
    Failed(CatalogError),
    Cancelled,
}

impl FetchOutcome {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Handle used to cancel an in-flight fetch.
#[derive(Clone, Debug)]
pub struct FetchHandle {
    abort: AbortHandle,
}

impl FetchHandle {
    pub fn cancel(&self) {
        self.abort.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.abort.is_aborted()
    }
}

/// Create a cancel handle and the registration the fetch future consumes.
pub fn cancellable() -> (FetchHandle, AbortRegistration) {
    let (abort, registration) = AbortHandle::new_pair();
    (FetchHandle { abort }, registration)
}

/// Fetch the catalog once, honoring cancellation.
///
/// Failures other than cancellation are reported to `sink`. Duplicate item
/// ids are logged as a warning but the list is still returned.
pub async fn fetch_catalog<S, D>(source: &S, registration: AbortRegistration, sink: &D) -> FetchOutcome
where
    S: CatalogSource,
    D: DiagnosticSink + ?Sized,
{
    match Abortable::new(source.fetch_catalog(), registration).await {
        Err(_aborted) => FetchOutcome::Cancelled,
        Ok(Ok(items)) => {
            let dupes = duplicate_ids(&items);
            if !dupes.is_empty() {
                log::warn!("catalog contains duplicate item ids: {}", dupes.join(", "));
            }
            log::debug!("catalog loaded: {} items", items.len());
            FetchOutcome::Loaded(items)
        }
        Ok(Err(e)) => {
            sink.report("catalog fetch failed", &e);
            FetchOutcome::Failed(e)
        }
    }
}
