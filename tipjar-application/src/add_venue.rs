use tipjar_entities::venue::Venue;

use crate::{usecases, Result, VenueRepo};

/// What the page should tell the user after a venue submission.
#[derive(Debug, Clone, PartialEq)]
pub enum AddVenueOutcome {
    Created(Venue),
    /// The venue already exists; offer navigation to it.
    AlreadyExists(Venue),
    /// The store reported a duplicate that could not be located;
    /// prompt the user to search manually.
    DuplicateUnresolved,
}

/// Inserts a new venue and recovers from a uniqueness conflict by
/// locating the pre-existing record. A conflict is never surfaced as a
/// raw failure.
pub fn add_venue<R: VenueRepo>(repo: &R, new_venue: usecases::NewVenue) -> Result<AddVenueOutcome> {
    match usecases::create_venue(repo, new_venue.clone()) {
        Ok(venue) => Ok(AddVenueOutcome::Created(venue)),
        Err(usecases::Error::Repo(err)) if err.is_conflict() => {
            log::info!(
                "Venue insert conflicted, resolving duplicate of {} ({}, {})",
                new_venue.name,
                new_venue.city,
                new_venue.state
            );
            match usecases::find_existing_venue(repo, &new_venue)? {
                usecases::DuplicateLookup::Existing(venue) => {
                    Ok(AddVenueOutcome::AlreadyExists(venue))
                }
                usecases::DuplicateLookup::Unresolved => Ok(AddVenueOutcome::DuplicateUnresolved),
            }
        }
        Err(err) => Err(err.into()),
    }
}
