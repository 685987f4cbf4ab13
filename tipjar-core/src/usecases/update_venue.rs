use super::prelude::*;
use crate::{text, util::validate};

/// Mutable venue fields. Only name, city and venue type can be edited;
/// everything else is fixed at creation.
#[derive(Debug, Clone)]
pub struct VenueChange {
    pub name: String,
    pub city: String,
    pub venue_type: Option<String>,
}

pub fn update_venue<R: VenueRepo>(repo: &R, id: &str, change: VenueChange) -> Result<Venue> {
    let VenueChange {
        name,
        city,
        venue_type,
    } = change;
    let mut venue = repo.get_venue(id)?;
    validate::venue(&name, &city, &venue.state)?;
    venue.name = text::normalize_spaces(&name);
    venue.city = text::canonical(&city);
    venue.venue_type = venue_type
        .map(|t| text::canonical(&t))
        .filter(|t| !t.is_empty());
    log::debug!("Updating venue {}", venue.id);
    repo.update_venue(&venue)?;
    Ok(venue)
}
