//! Shared domain types and configuration for lunchroll.

pub mod app_config;
pub mod blacklist;
pub mod config;
pub mod count;
pub mod provider;
pub mod restaurant;

pub use app_config::{AppConfig, Environment};
pub use blacklist::{load_blacklist, Blacklist};
pub use config::{
    load_app_config, load_app_config_from_env, DEFAULT_BASE_URL, MIN_PAGE_DELAY_SECS,
};
pub use count::{validate_count, MAX_COUNT, MIN_COUNT};
pub use provider::{NearbyPage, PlaceDetails, PlacesProvider, WalkingDistance};
pub use restaurant::{Candidate, Coordinate, RestaurantRecord};

use thiserror::Error;

/// Fatal input and configuration errors. Nothing is fetched once one of these
/// is raised.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("count must be between {min} and {max}, got {count}")]
    CountOutOfRange { count: i64, min: usize, max: usize },

    #[error("failed to read blacklist file {path}: {source}")]
    BlacklistIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("blacklist file {path} contains no names")]
    EmptyBlacklist { path: String },

    #[error("exactly one of a blacklist name list or a blacklist file must be given")]
    BlacklistSourceConflict,

    #[error("search origin must not be empty")]
    EmptyOrigin,

    #[error("invalid coordinate '{input}': {reason}")]
    InvalidCoordinate { input: String, reason: String },
}
