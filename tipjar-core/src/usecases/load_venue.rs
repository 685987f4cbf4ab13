use super::prelude::*;
use crate::metrics::Summarized;

#[derive(Debug, Clone)]
pub struct VenueWithReviews {
    pub venue: Venue,
    pub reviews: Vec<Review>,
    pub metrics: VenueMetrics,
}

/// Loads one venue together with its visible reviews and freshly
/// recomputed summary statistics.
pub fn load_venue<R>(repo: &R, id: &str) -> Result<VenueWithReviews>
where
    R: VenueRepo + ReviewRepo,
{
    let venue = repo.get_venue(id)?;
    let reviews = repo.reviews_of_venue(id)?;
    let metrics = venue.metrics(&reviews);
    Ok(VenueWithReviews {
        venue,
        reviews,
        metrics,
    })
}
