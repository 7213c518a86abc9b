//! HTTP binding for the places / geocoding / distance-matrix provider.
//!
//! Provider JSON shapes are private to this crate; [`PlacesClient`] implements
//! [`lunchroll_core::PlacesProvider`] and hands back normalized domain types.

pub mod client;
pub mod error;

mod details;
mod distance;
mod geocode;
mod nearby;
mod provider;
mod types;

pub use client::PlacesClient;
pub use error::PlacesError;
