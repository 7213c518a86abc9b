//! Restaurant picking pipeline.
//!
//! Geocode the origin, page through a rank-by-distance nearby search, drop
//! closed and blacklisted places, shuffle and take the requested number,
//! enrich each pick with rating, website and walking distance, then order the
//! result by rating. The pipeline is generic over
//! [`lunchroll_core::PlacesProvider`] and never retries: the first failure
//! ends the run and nothing partial is returned.

pub mod delay;
pub mod enrich;
pub mod error;
pub mod filter;
pub mod pager;
pub mod pipeline;
pub mod rank;
pub mod sample;

pub use delay::{PageDelay, TokioDelay};
pub use enrich::{enrich, title_case};
pub use error::PickError;
pub use filter::filter_candidates;
pub use pager::NearbyPager;
pub use pipeline::{pick_restaurants, PickRequest};
pub use rank::rank;
pub use sample::{clamp_count, sample};
