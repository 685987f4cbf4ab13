use tipjar_entities::review::Review;

use crate::{usecases, DeviceMemory, Result, ReviewRepo};

/// Submits an anonymous review with the one-review-per-venue-per-device
/// guard. The device-local check avoids a doomed network call once a
/// review went through; the repository uniqueness constraint stays the
/// authoritative backstop for races between tabs or devices.
pub fn submit_review<R, D>(repo: &R, device: &D, new_review: usecases::NewReview) -> Result<Review>
where
    R: ReviewRepo,
    D: DeviceMemory,
{
    if device.has_reviewed(&new_review.venue_id) {
        return Err(usecases::Error::AlreadyReviewed.into());
    }
    let venue_id = new_review.venue_id.clone();
    let review = usecases::create_review(repo, new_review)?;
    device.mark_reviewed(&venue_id);
    Ok(review)
}
