use super::prelude::*;

/// Per-venue review counts from the precomputed metrics procedure.
///
/// A backend without the procedure is a degraded mode, not an error:
/// counts are simply unknown and the caller renders them as such.
pub fn review_counts<R: VenueMetricsRepo>(repo: &R) -> Result<Vec<VenueReviewCount>> {
    match repo.venue_review_counts() {
        Ok(counts) => Ok(counts),
        Err(RepoError::NotFound) => {
            log::warn!("Review count procedure unavailable, continuing without counts");
            Ok(vec![])
        }
        Err(err) => Err(err.into()),
    }
}
