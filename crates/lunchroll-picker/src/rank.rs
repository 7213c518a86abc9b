//! Final ordering of enriched records.

use std::cmp::Ordering;

use lunchroll_core::RestaurantRecord;

/// Orders records by rating, lowest first.
///
/// A missing rating sorts before every numeric rating. The sort is stable, so
/// records with equal ratings (or both unrated) keep their incoming order.
#[must_use]
pub fn rank(mut records: Vec<RestaurantRecord>) -> Vec<RestaurantRecord> {
    records.sort_by(|a, b| compare_rating(a.rating, b.rating));
    records
}

fn compare_rating(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        _ => a.is_some().cmp(&b.is_some()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, rating: Option<f64>) -> RestaurantRecord {
        RestaurantRecord {
            name: name.to_string(),
            rating,
            website: None,
            distance_text: "1 km".to_string(),
            duration_text: "12 mins".to_string(),
        }
    }

    fn names(records: &[RestaurantRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn sorts_ascending_by_rating() {
        let out = rank(vec![
            record("A", Some(4.0)),
            record("B", Some(4.5)),
            record("D", Some(3.0)),
        ]);
        assert_eq!(names(&out), vec!["D", "A", "B"]);
    }

    #[test]
    fn missing_rating_sorts_first() {
        let out = rank(vec![
            record("Rated", Some(1.0)),
            record("Unrated", None),
            record("Top", Some(5.0)),
        ]);
        assert_eq!(names(&out), vec!["Unrated", "Rated", "Top"]);
    }

    #[test]
    fn equal_ratings_keep_input_order() {
        let out = rank(vec![
            record("First", Some(4.2)),
            record("None1", None),
            record("Second", Some(4.2)),
            record("None2", None),
            record("Low", Some(2.0)),
        ]);
        assert_eq!(names(&out), vec!["None1", "None2", "Low", "First", "Second"]);
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert!(rank(Vec::new()).is_empty());
    }
}
