use crate::ConfigError;

/// Smallest number of restaurants a caller may ask for.
pub const MIN_COUNT: usize = 1;
/// Largest number of restaurants a caller may ask for.
pub const MAX_COUNT: usize = 30;

/// Validates a requested restaurant count against the accepted range.
///
/// # Errors
///
/// Returns [`ConfigError::CountOutOfRange`] when `count` is outside
/// `MIN_COUNT..=MAX_COUNT`.
pub fn validate_count(count: i64) -> Result<usize, ConfigError> {
    usize::try_from(count)
        .ok()
        .filter(|c| (MIN_COUNT..=MAX_COUNT).contains(c))
        .ok_or(ConfigError::CountOutOfRange {
            count,
            min: MIN_COUNT,
            max: MAX_COUNT,
        })
}
