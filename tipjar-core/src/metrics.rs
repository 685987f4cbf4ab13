use crate::entities::{metrics::*, review::*, venue::*};

/// Summary statistics computed from the visible reviews of one venue.
pub trait Summarized {
    fn metrics(&self, _: &[Review]) -> VenueMetrics;
}

impl Summarized for Venue {
    fn metrics(&self, reviews: &[Review]) -> VenueMetrics {
        debug_assert_eq!(
            reviews.len(),
            reviews
                .iter()
                .filter(|r| r.venue_id == self.id && r.is_visible())
                .count()
        );
        reviews
            .iter()
            .fold(VenueMetricsBuilder::default(), |mut acc, r| {
                acc.add(r);
                acc
            })
            .build()
    }
}
