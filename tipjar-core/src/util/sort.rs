use crate::entities::review::Review;

/// Display order of a review list. Sorting is a pure presentation
/// transformation and never feeds back into aggregation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReviewOrder {
    #[default]
    Newest,
    TipsDesc,
    HoursDesc,
}

pub fn sort_reviews(reviews: &mut [Review], order: ReviewOrder) {
    match order {
        ReviewOrder::Newest => reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        ReviewOrder::TipsDesc => sort_desc_by(reviews, |r| r.tips_per_week),
        ReviewOrder::HoursDesc => sort_desc_by(reviews, |r| r.hours_per_week),
    }
}

// Reviews without a value for the sort field go last.
fn sort_desc_by(reviews: &mut [Review], key: impl Fn(&Review) -> Option<f64>) {
    reviews.sort_by(|a, b| {
        key(b)
            .unwrap_or(f64::NEG_INFINITY)
            .total_cmp(&key(a).unwrap_or(f64::NEG_INFINITY))
    });
}

/// Drops the reviews that lack the field the given order sorts on.
pub fn retain_sortable(reviews: &mut Vec<Review>, order: ReviewOrder) {
    match order {
        ReviewOrder::Newest => (),
        ReviewOrder::TipsDesc => reviews.retain(|r| r.tips_per_week.is_some()),
        ReviewOrder::HoursDesc => reviews.retain(|r| r.hours_per_week.is_some()),
    }
}
