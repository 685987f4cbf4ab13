use super::{create_venue::NewVenue, prelude::*};
use crate::text;

/// Outcome of the read-only search for an already existing venue after
/// the store rejected an insert as a uniqueness violation.
#[derive(Debug, Clone, PartialEq)]
pub enum DuplicateLookup {
    Existing(Venue),
    /// The store reported a duplicate but none could be located; the
    /// caller should prompt the user to search manually.
    Unresolved,
}

/// Locates the venue an insert collided with. Never writes.
pub fn find_existing_venue<R: VenueRepo>(
    repo: &R,
    new_venue: &NewVenue,
) -> Result<DuplicateLookup> {
    // An external place id identifies the venue more reliably than the
    // name/city fallback.
    if let Some(place_ref) = &new_venue.place_ref {
        if let Some(venue) = repo.venue_by_place_id(&place_ref.place_id)? {
            return Ok(DuplicateLookup::Existing(venue));
        }
    }
    let name_key = text::normalized_key(&new_venue.name);
    let city_key = text::normalized_key(&new_venue.city);
    let candidates = repo.venues_by_state(&text::canonical_state(&new_venue.state))?;
    Ok(candidates
        .into_iter()
        .find(|venue| {
            text::normalized_key(&venue.name) == name_key
                && text::normalized_key(&venue.city) == city_key
        })
        .map(DuplicateLookup::Existing)
        .unwrap_or(DuplicateLookup::Unresolved))
}
