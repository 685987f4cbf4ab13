use super::prelude::*;
use crate::{text, util::matching::levenshtein};

/// Inputs shorter than this never yield a suggestion; corrections on
/// short strings are too error-prone.
pub const MIN_SUGGEST_INPUT_LEN: usize = 5;

/// Up to this edit distance a candidate is always suggested.
pub const MAX_ALWAYS_SUGGEST_DISTANCE: usize = 2;

/// This edit distance is only accepted for long inputs.
pub const EXTENDED_SUGGEST_DISTANCE: usize = 3;
pub const EXTENDED_SUGGEST_MIN_INPUT_LEN: usize = 9;

/// Decides whether a user-typed city looks like a typo of a known city
/// and proposes the correction.
///
/// The known cities are expected in canonical title-case form. Ties
/// between equally distant candidates go to the first one in iteration
/// order; since the city set is rebuilt from unordered query results
/// this is not a stable contract. Lengths are counted in characters of
/// the canonicalized input.
pub fn suggest_city(input: &str, known_cities: &[String]) -> Option<String> {
    let canonical = text::canonical(input);
    if canonical.is_empty() {
        return None;
    }
    if known_cities
        .iter()
        .any(|city| city.eq_ignore_ascii_case(&canonical))
    {
        // Already a recognized city, nothing to correct.
        return None;
    }
    let (best, distance) = known_cities
        .iter()
        .map(|city| (city, levenshtein(&canonical, city)))
        .min_by_key(|(_, distance)| *distance)?;
    let input_len = canonical.chars().count();
    if input_len < MIN_SUGGEST_INPUT_LEN {
        return None;
    }
    if distance <= MAX_ALWAYS_SUGGEST_DISTANCE
        || (distance == EXTENDED_SUGGEST_DISTANCE && input_len >= EXTENDED_SUGGEST_MIN_INPUT_LEN)
    {
        return Some(best.clone());
    }
    None
}

/// Repository-backed variant collecting the distinct-city set first.
pub fn suggest_known_city<R: VenueRepo>(repo: &R, input: &str) -> Result<Option<String>> {
    let cities = repo.distinct_cities()?;
    Ok(suggest_city(input, &cities))
}
