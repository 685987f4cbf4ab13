use super::prelude::*;
use crate::{text, util::validate};

#[derive(Debug, Clone)]
pub struct NewReview {
    pub venue_id: Id,
    pub role: String,
    pub tips_per_week: Option<f64>,
    pub hours_per_week: Option<f64>,
    pub tip_pool: TipPool,
    pub busy_season: Option<String>,
    pub recommended: bool,
    pub comment: Option<String>,
    pub earnings: EarningsLabel,
    pub device_token: String,
}

pub fn prepare_new_review(new_review: NewReview) -> Result<Review> {
    validate::review(
        &new_review.role,
        new_review.tips_per_week,
        new_review.hours_per_week,
    )?;
    let NewReview {
        venue_id,
        role,
        tips_per_week,
        hours_per_week,
        tip_pool,
        busy_season,
        recommended,
        comment,
        earnings,
        device_token,
    } = new_review;
    Ok(Review {
        id: Id::new(),
        venue_id,
        role: text::normalize_spaces(&role),
        tips_per_week,
        hours_per_week,
        tip_pool,
        busy_season: busy_season
            .map(|s| text::normalize_spaces(&s))
            .filter(|s| !s.is_empty()),
        recommended,
        comment: comment
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty()),
        earnings,
        created_at: Timestamp::now(),
        hidden: false,
        device_token,
    })
}

/// Stores a new anonymous review. The repository enforces one review
/// per venue and device, so a uniqueness conflict maps to
/// `AlreadyReviewed`.
pub fn create_review<R: ReviewRepo>(repo: &R, new_review: NewReview) -> Result<Review> {
    let review = prepare_new_review(new_review)?;
    log::debug!("Creating new review for venue {}", review.venue_id);
    if let Err(err) = repo.create_review(review.clone()) {
        if err.is_conflict() {
            return Err(Error::AlreadyReviewed);
        }
        return Err(err.into());
    }
    Ok(review)
}
