//! Output formatting for picked restaurants.

use std::fmt::Write as _;

use lunchroll_core::RestaurantRecord;

const MISSING: &str = "\u{2014}";

/// One line per record: rating, name, distance, duration, website.
pub(crate) fn render_text(records: &[RestaurantRecord]) -> String {
    if records.is_empty() {
        return "no open restaurants matched\n".to_string();
    }

    let name_width = records
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for record in records {
        let rating = record
            .rating
            .map_or_else(|| MISSING.to_string(), |r| format!("{r:.1}"));
        let website = record.website.as_ref().map_or(MISSING, |u| u.as_str());
        let _ = writeln!(
            out,
            "{rating:>4}  {name:<name_width$}  {distance:>8}  {duration:>8}  {website}",
            name = record.name,
            distance = record.distance_text,
            duration = record.duration_text,
        );
    }
    out
}

pub(crate) fn render_json(records: &[RestaurantRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}
