use super::prelude::*;
use crate::{text, util::validate};

#[derive(Debug, Clone)]
pub struct NewVenue {
    pub name: String,
    pub city: String,
    pub state: String,
    pub venue_type: Option<String>,
    pub place_ref: Option<PlaceRef>,
}

/// Validates and canonicalizes a submission into a storable venue.
pub fn prepare_new_venue(new_venue: NewVenue) -> Result<Venue> {
    validate::venue(&new_venue.name, &new_venue.city, &new_venue.state)?;
    let NewVenue {
        name,
        city,
        state,
        venue_type,
        place_ref,
    } = new_venue;
    let venue_type = venue_type
        .map(|t| text::canonical(&t))
        .filter(|t| !t.is_empty());
    Ok(Venue {
        id: Id::new(),
        name: text::normalize_spaces(&name),
        city: text::canonical(&city),
        state: text::canonical_state(&state),
        venue_type,
        created_at: Timestamp::now(),
        place_ref,
    })
}

/// Inserts a new venue. A uniqueness conflict surfaces as a repository
/// error so that callers can run the duplicate resolver on it.
pub fn create_venue<R: VenueRepo>(repo: &R, new_venue: NewVenue) -> Result<Venue> {
    let venue = prepare_new_venue(new_venue)?;
    log::debug!(
        "Creating new venue: {} ({}, {})",
        venue.name,
        venue.city,
        venue.state
    );
    repo.create_venue(venue.clone())?;
    Ok(venue)
}
