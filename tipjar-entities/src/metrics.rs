use crate::{id::*, review::*};

/// Averages a stream of samples, excluding nothing by itself.
/// Callers decide which samples qualify.
#[derive(Debug, Default, Clone)]
pub struct AvgValueBuilder {
    acc: f64,
    cnt: usize,
}

impl AvgValueBuilder {
    pub fn add(&mut self, val: f64) {
        debug_assert!(val.is_finite());
        self.acc += val;
        self.cnt += 1;
    }

    pub const fn sample_count(&self) -> usize {
        self.cnt
    }

    pub fn build(self) -> Option<f64> {
        if self.cnt > 0 {
            Some(self.acc / self.cnt as f64)
        } else {
            None
        }
    }
}

/// Counts how many of the seen samples were positive and yields
/// a percentage in the range 0..=100.
#[derive(Debug, Default, Clone)]
pub struct PercentageBuilder {
    hits: usize,
    total: usize,
}

impl PercentageBuilder {
    pub fn add(&mut self, hit: bool) {
        if hit {
            self.hits += 1;
        }
        self.total += 1;
    }

    pub fn build(self) -> Option<f64> {
        if self.total > 0 {
            Some(self.hits as f64 * 100.0 / self.total as f64)
        } else {
            None
        }
    }
}

/// Per-venue summary statistics, recomputed from the visible reviews.
///
/// Averages only cover reviews that carry a finite value for the
/// respective field; the sample counts tell how many contributed.
/// All optional fields are `None` (never zero or NaN) when no review
/// qualifies.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct VenueMetrics {
    pub review_count: usize,
    pub avg_tips_per_week: Option<f64>,
    pub tips_sample_count: usize,
    pub avg_hours_per_week: Option<f64>,
    pub hours_sample_count: usize,
    pub recommended_percent: Option<f64>,
    pub tip_pool_percent: Option<f64>,
}

#[derive(Debug, Default, Clone)]
pub struct VenueMetricsBuilder {
    review_count: usize,
    tips: AvgValueBuilder,
    hours: AvgValueBuilder,
    recommended: PercentageBuilder,
    tip_pool: PercentageBuilder,
}

impl VenueMetricsBuilder {
    pub fn add(&mut self, review: &Review) {
        self.review_count += 1;
        if let Some(tips) = review.tips_per_week.filter(|v| v.is_finite()) {
            self.tips.add(tips);
        }
        if let Some(hours) = review.hours_per_week.filter(|v| v.is_finite()) {
            self.hours.add(hours);
        }
        self.recommended.add(review.recommended);
        if review.tip_pool.is_known() {
            self.tip_pool.add(review.tip_pool == TipPool::Yes);
        }
    }

    pub fn build(self) -> VenueMetrics {
        let Self {
            review_count,
            tips,
            hours,
            recommended,
            tip_pool,
        } = self;
        let tips_sample_count = tips.sample_count();
        let hours_sample_count = hours.sample_count();
        VenueMetrics {
            review_count,
            avg_tips_per_week: tips.build(),
            tips_sample_count,
            avg_hours_per_week: hours.build(),
            hours_sample_count,
            recommended_percent: recommended.build(),
            tip_pool_percent: tip_pool.build(),
        }
    }
}

/// Result row of the precomputed per-venue metrics procedure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueReviewCount {
    pub venue_id: Id,
    pub review_count: u64,
}
