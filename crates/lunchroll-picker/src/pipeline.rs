//! Pipeline orchestration.

use std::collections::HashSet;

use lunchroll_core::{
    validate_count, Blacklist, ConfigError, Coordinate, PlacesProvider, RestaurantRecord,
};
use rand::Rng;

use crate::delay::PageDelay;
use crate::enrich::enrich;
use crate::error::PickError;
use crate::filter::filter_candidates;
use crate::pager::NearbyPager;
use crate::rank::rank;
use crate::sample::{clamp_count, sample};

/// Validated inputs for one run.
#[derive(Debug, Clone)]
pub struct PickRequest {
    pub search_origin: String,
    /// Where walking distances are measured from. `None` means the search origin.
    pub walk_origin: Option<String>,
    pub count: usize,
    pub blacklist: Blacklist,
}

impl PickRequest {
    /// # Errors
    ///
    /// - [`ConfigError::CountOutOfRange`] if `count` is outside `1..=30`.
    /// - [`ConfigError::EmptyOrigin`] if `search_origin` is blank.
    pub fn new(
        search_origin: impl Into<String>,
        walk_origin: Option<String>,
        count: i64,
        blacklist: Blacklist,
    ) -> Result<Self, ConfigError> {
        let search_origin = search_origin.into();
        if search_origin.trim().is_empty() {
            return Err(ConfigError::EmptyOrigin);
        }
        let count = validate_count(count)?;
        let walk_origin = walk_origin.filter(|w| !w.trim().is_empty());
        Ok(Self {
            search_origin,
            walk_origin,
            count,
            blacklist,
        })
    }
}

/// Runs the whole pipeline and returns the picked restaurants, lowest rating
/// first.
///
/// Requests are issued one at a time: geocode the search origin, geocode a
/// distinct walk origin, page through nearby search, then one detail and one
/// distance lookup per sampled candidate. The first failure aborts the run.
///
/// A record whose enriched name is blacklisted or was already returned is
/// dropped and replaced by the next candidate in shuffled order. Each drop
/// costs an extra detail and distance lookup. If the pool runs out first,
/// fewer than `min(count, eligible)` records are returned.
///
/// # Errors
///
/// - [`PickError::Geocoding`] if either origin cannot be resolved.
/// - [`PickError::Pagination`] / [`PickError::PageLimit`] from the pager.
/// - [`PickError::DetailFetch`] / [`PickError::DistanceFetch`] from enrichment.
pub async fn pick_restaurants<P, D, R>(
    provider: &P,
    pager: &NearbyPager<D>,
    request: &PickRequest,
    rng: &mut R,
) -> Result<Vec<RestaurantRecord>, PickError>
where
    P: PlacesProvider,
    D: PageDelay,
    R: Rng + ?Sized,
{
    let search_origin = geocode(provider, &request.search_origin).await?;
    let walk_origin = match request.walk_origin.as_deref() {
        Some(address) if address != request.search_origin => geocode(provider, address).await?,
        _ => search_origin,
    };
    tracing::info!(%search_origin, %walk_origin, "origins resolved");

    let fetched = pager.fetch_candidates(provider, search_origin).await?;
    let fetched_count = fetched.len();
    let pool = filter_candidates(fetched, &request.blacklist);
    tracing::info!(
        fetched = fetched_count,
        eligible = pool.len(),
        blacklisted = request.blacklist.len(),
        "nearby candidates filtered"
    );

    let take = clamp_count(request.count, pool.len());
    if take < request.count {
        tracing::warn!(
            requested = request.count,
            available = pool.len(),
            "fewer eligible restaurants than requested; returning all of them"
        );
    }
    // Dropped picks are backfilled from the rest of the shuffled pool.
    let shuffled = sample(pool, usize::MAX, rng);

    let mut records = Vec::with_capacity(take);
    let mut seen_names = HashSet::new();
    for candidate in &shuffled {
        if records.len() == take {
            break;
        }
        let record = enrich(provider, candidate, walk_origin).await?;
        if request.blacklist.contains(&record.name) {
            tracing::warn!(
                name = %record.name,
                place_id = %candidate.place_id,
                "detail lookup returned a blacklisted name; dropping pick"
            );
        } else if seen_names.insert(record.name.clone()) {
            records.push(record);
        } else {
            tracing::warn!(
                name = %record.name,
                place_id = %candidate.place_id,
                "detail lookup returned a name already picked; dropping duplicate"
            );
        }
    }
    if records.len() < take {
        tracing::warn!(
            requested = take,
            returned = records.len(),
            "eligible pool exhausted after dropping blacklisted or duplicate names"
        );
    }

    let ranked = rank(records);
    tracing::info!(returned = ranked.len(), "restaurants picked");
    Ok(ranked)
}

async fn geocode<P: PlacesProvider>(provider: &P, address: &str) -> Result<Coordinate, PickError> {
    provider
        .geocode(address)
        .await
        .map_err(|e| PickError::Geocoding {
            address: address.to_string(),
            source: Box::new(e),
        })
}
