//! Turning a sampled candidate into a presentable record.

use lunchroll_core::{Candidate, Coordinate, PlacesProvider, RestaurantRecord};

use crate::error::PickError;

/// Fetches details and walking distance for one candidate, in that order.
///
/// The record's name comes from the detail lookup (falling back to the
/// nearby-search name when the provider omits it) and is title-cased, since
/// some listings are registered in all caps.
///
/// # Errors
///
/// - [`PickError::DetailFetch`] if the detail lookup fails; the distance is
///   then never requested.
/// - [`PickError::DistanceFetch`] if the walking distance lookup fails.
pub async fn enrich<P: PlacesProvider>(
    provider: &P,
    candidate: &Candidate,
    walk_origin: Coordinate,
) -> Result<RestaurantRecord, PickError> {
    let details = provider
        .place_details(&candidate.place_id)
        .await
        .map_err(|e| PickError::DetailFetch {
            place_id: candidate.place_id.clone(),
            source: Box::new(e),
        })?;

    let walk = provider
        .walking_distance(walk_origin, &candidate.place_id)
        .await
        .map_err(|e| PickError::DistanceFetch {
            place_id: candidate.place_id.clone(),
            source: Box::new(e),
        })?;

    let name = title_case(details.name.as_deref().unwrap_or(&candidate.name));
    tracing::debug!(
        place_id = %candidate.place_id,
        name = %name,
        rating = ?details.rating,
        distance = %walk.distance_text,
        "enriched candidate"
    );

    Ok(RestaurantRecord {
        name,
        rating: details.rating,
        website: details.website,
        distance_text: walk.distance_text,
        duration_text: walk.duration_text,
    })
}

/// Upper-cases the first letter of every word and lower-cases the rest.
///
/// A word starts after any character that is neither alphanumeric nor an
/// apostrophe, so `"MCDONALD'S"` becomes `"Mcdonald's"` and `"TEX-MEX BAR"`
/// becomes `"Tex-Mex Bar"`.
#[must_use]
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut word_start = true;
    for ch in name.chars() {
        if ch.is_alphanumeric() {
            if word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            word_start = false;
        } else {
            out.push(ch);
            word_start = !matches!(ch, '\'' | '\u{2019}');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_caps_name_is_title_cased() {
        assert_eq!(title_case("RESTAURANG PELIKAN"), "Restaurang Pelikan");
    }

    #[test]
    fn mixed_case_is_normalised() {
        assert_eq!(title_case("bistro ruby"), "Bistro Ruby");
        assert_eq!(title_case("sTUREhof"), "Sturehof");
    }

    #[test]
    fn apostrophe_does_not_start_a_word() {
        assert_eq!(title_case("MCDONALD'S"), "Mcdonald's");
        assert_eq!(title_case("JOE\u{2019}S DINER"), "Joe\u{2019}s Diner");
    }

    #[test]
    fn punctuation_starts_a_word() {
        assert_eq!(title_case("TEX-MEX BAR"), "Tex-Mex Bar");
        assert_eq!(title_case("50/50 KÖK"), "50/50 Kök");
    }

    #[test]
    fn keeps_whitespace_as_is() {
        assert_eq!(title_case("  A  B "), "  A  B ");
        assert_eq!(title_case(""), "");
    }
}
