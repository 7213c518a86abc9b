use lunchroll_core::ConfigError;
use thiserror::Error;

/// A provider error with its concrete type erased.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Terminal pipeline failures. The caller receives no records when any of
/// these is returned.
#[derive(Debug, Error)]
pub enum PickError {
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    #[error("failed to geocode '{address}': {source}")]
    Geocoding {
        address: String,
        #[source]
        source: BoxError,
    },

    /// A nearby-search page failed; results from earlier pages are discarded.
    #[error("nearby search failed on page {page}: {source}")]
    Pagination {
        page: usize,
        #[source]
        source: BoxError,
    },

    #[error("nearby search still had a continuation token after {max_pages} pages")]
    PageLimit { max_pages: usize },

    #[error("detail lookup failed for place {place_id}: {source}")]
    DetailFetch {
        place_id: String,
        #[source]
        source: BoxError,
    },

    #[error("walking distance lookup failed for place {place_id}: {source}")]
    DistanceFetch {
        place_id: String,
        #[source]
        source: BoxError,
    },
}
