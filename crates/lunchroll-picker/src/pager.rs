//! Multi-page nearby search.

use std::time::Duration;

use lunchroll_core::{Candidate, Coordinate, PlacesProvider, MIN_PAGE_DELAY_SECS};

use crate::delay::{PageDelay, TokioDelay};
use crate::error::PickError;

/// The provider stops issuing tokens after three pages of twenty. This bound
/// only guards against a provider that keeps returning tokens forever.
pub const MAX_PAGES: usize = 10;

/// Follows nearby-search continuation tokens until the provider stops
/// returning one, waiting `page_delay` before every follow-up request.
pub struct NearbyPager<D = TokioDelay> {
    delay: D,
    page_delay: Duration,
}

impl NearbyPager<TokioDelay> {
    /// A pager that really sleeps between pages.
    #[must_use]
    pub fn with_tokio_delay(page_delay: Duration) -> Self {
        Self::new(TokioDelay, page_delay)
    }
}

impl<D: PageDelay> NearbyPager<D> {
    /// `page_delay` is raised to the provider's token activation window if it
    /// is shorter; a token used too early is rejected.
    pub fn new(delay: D, page_delay: Duration) -> Self {
        Self {
            delay,
            page_delay: page_delay.max(Duration::from_secs(MIN_PAGE_DELAY_SECS)),
        }
    }

    #[must_use]
    pub fn page_delay(&self) -> Duration {
        self.page_delay
    }

    /// Fetches every page around `origin` and concatenates the results in
    /// arrival order.
    ///
    /// **All-or-nothing**: if any page fails, candidates from earlier pages
    /// are discarded and the error is returned.
    ///
    /// # Errors
    ///
    /// - [`PickError::Pagination`] wrapping the provider error, with the
    ///   1-based page number that failed.
    /// - [`PickError::PageLimit`] if tokens keep coming past [`MAX_PAGES`].
    pub async fn fetch_candidates<P: PlacesProvider>(
        &self,
        provider: &P,
        origin: Coordinate,
    ) -> Result<Vec<Candidate>, PickError> {
        let mut all: Vec<Candidate> = Vec::new();
        let mut token: Option<String> = None;
        let mut page = 0usize;

        loop {
            page += 1;
            if page > MAX_PAGES {
                return Err(PickError::PageLimit {
                    max_pages: MAX_PAGES,
                });
            }

            if token.is_some() {
                tracing::debug!(
                    page,
                    delay_secs = self.page_delay.as_secs(),
                    "waiting for continuation token to activate"
                );
                self.delay.wait(self.page_delay).await;
            }

            let result = provider
                .nearby_page(origin, token.as_deref())
                .await
                .map_err(|e| PickError::Pagination {
                    page,
                    source: Box::new(e),
                })?;

            tracing::debug!(
                page,
                results = result.candidates.len(),
                has_next = result.next_page_token.is_some(),
                "nearby page fetched"
            );
            all.extend(result.candidates);

            token = result.next_page_token;
            if token.is_none() {
                break;
            }
        }

        Ok(all)
    }
}
