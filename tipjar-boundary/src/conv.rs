use super::*;
use tipjar_entities as e;

impl From<e::venue::PlaceRef> for PlaceRef {
    fn from(from: e::venue::PlaceRef) -> Self {
        let e::venue::PlaceRef {
            place_id,
            formatted_address,
            lat,
            lng,
        } = from;
        Self {
            place_id,
            formatted_address,
            lat,
            lng,
        }
    }
}

impl From<PlaceRef> for e::venue::PlaceRef {
    fn from(from: PlaceRef) -> Self {
        let PlaceRef {
            place_id,
            formatted_address,
            lat,
            lng,
        } = from;
        Self {
            place_id,
            formatted_address,
            lat,
            lng,
        }
    }
}

impl From<e::venue::Venue> for Venue {
    fn from(from: e::venue::Venue) -> Self {
        let e::venue::Venue {
            id,
            name,
            city,
            state,
            venue_type,
            created_at,
            place_ref,
        } = from;
        Self {
            id: id.into(),
            created: created_at.into_milliseconds(),
            name,
            city,
            state,
            venue_type,
            place: place_ref.map(Into::into),
        }
    }
}

impl From<Venue> for e::venue::Venue {
    fn from(from: Venue) -> Self {
        let Venue {
            id,
            created,
            name,
            city,
            state,
            venue_type,
            place,
        } = from;
        Self {
            id: id.into(),
            name,
            city,
            state,
            venue_type,
            created_at: e::time::Timestamp::from_milliseconds(created),
            place_ref: place.map(Into::into),
        }
    }
}

impl From<e::review::EarningsLabel> for EarningsLabel {
    fn from(from: e::review::EarningsLabel) -> Self {
        use e::review::EarningsLabel::*;
        match from {
            PreTax => EarningsLabel::PreTax,
            PostTax => EarningsLabel::PostTax,
        }
    }
}

impl From<EarningsLabel> for e::review::EarningsLabel {
    fn from(from: EarningsLabel) -> Self {
        use e::review::EarningsLabel::*;
        match from {
            EarningsLabel::PreTax => PreTax,
            EarningsLabel::PostTax => PostTax,
        }
    }
}

impl From<e::review::Review> for Review {
    fn from(from: e::review::Review) -> Self {
        let e::review::Review {
            id,
            venue_id,
            role,
            tips_per_week,
            hours_per_week,
            tip_pool,
            busy_season,
            recommended,
            comment,
            earnings,
            created_at,
            hidden,
            device_token,
        } = from;
        Self {
            id: id.into(),
            venue_id: venue_id.into(),
            created: created_at.into_milliseconds(),
            role,
            tips_per_week,
            hours_per_week,
            tip_pool: tip_pool.into(),
            busy_season,
            recommended,
            comment,
            earnings: earnings.into(),
            hidden,
            device_token,
        }
    }
}

impl From<Review> for e::review::Review {
    fn from(from: Review) -> Self {
        let Review {
            id,
            venue_id,
            created,
            role,
            tips_per_week,
            hours_per_week,
            tip_pool,
            busy_season,
            recommended,
            comment,
            earnings,
            hidden,
            device_token,
        } = from;
        Self {
            id: id.into(),
            venue_id: venue_id.into(),
            role,
            tips_per_week,
            hours_per_week,
            tip_pool: tip_pool.into(),
            busy_season,
            recommended,
            comment,
            earnings: earnings.into(),
            created_at: e::time::Timestamp::from_milliseconds(created),
            hidden,
            device_token,
        }
    }
}

impl From<e::report::ReportTarget> for ReportTarget {
    fn from(from: e::report::ReportTarget) -> Self {
        use e::report::ReportTarget::*;
        match from {
            Venue => ReportTarget::Venue,
            Review => ReportTarget::Review,
        }
    }
}

impl From<ReportTarget> for e::report::ReportTarget {
    fn from(from: ReportTarget) -> Self {
        use e::report::ReportTarget::*;
        match from {
            ReportTarget::Venue => Venue,
            ReportTarget::Review => Review,
        }
    }
}

impl From<e::report::Resolution> for Resolution {
    fn from(from: e::report::Resolution) -> Self {
        let e::report::Resolution { at, by } = from;
        Self {
            at: at.into_milliseconds(),
            by,
        }
    }
}

impl From<Resolution> for e::report::Resolution {
    fn from(from: Resolution) -> Self {
        let Resolution { at, by } = from;
        Self {
            at: e::time::Timestamp::from_milliseconds(at),
            by,
        }
    }
}

impl From<e::report::Report> for Report {
    fn from(from: e::report::Report) -> Self {
        let e::report::Report {
            id,
            target,
            target_id,
            reason,
            created_at,
            resolution,
        } = from;
        Self {
            id: id.into(),
            created: created_at.into_milliseconds(),
            target: target.into(),
            target_id: target_id.into(),
            reason,
            resolved: resolution.map(Into::into),
        }
    }
}

impl From<Report> for e::report::Report {
    fn from(from: Report) -> Self {
        let Report {
            id,
            created,
            target,
            target_id,
            reason,
            resolved,
        } = from;
        Self {
            id: id.into(),
            target: target.into(),
            target_id: target_id.into(),
            reason,
            created_at: e::time::Timestamp::from_milliseconds(created),
            resolution: resolved.map(Into::into),
        }
    }
}

impl From<e::metrics::VenueMetrics> for VenueMetrics {
    fn from(from: e::metrics::VenueMetrics) -> Self {
        let e::metrics::VenueMetrics {
            review_count,
            avg_tips_per_week,
            tips_sample_count,
            avg_hours_per_week,
            hours_sample_count,
            recommended_percent,
            tip_pool_percent,
        } = from;
        Self {
            review_count: review_count as u64,
            avg_tips_per_week,
            tips_sample_count: tips_sample_count as u64,
            avg_hours_per_week,
            hours_sample_count: hours_sample_count as u64,
            recommended_percent,
            tip_pool_percent,
        }
    }
}

impl From<e::metrics::VenueReviewCount> for VenueReviewCount {
    fn from(from: e::metrics::VenueReviewCount) -> Self {
        let e::metrics::VenueReviewCount {
            venue_id,
            review_count,
        } = from;
        Self {
            venue_id: venue_id.into(),
            review_count,
        }
    }
}

impl From<VenueReviewCount> for e::metrics::VenueReviewCount {
    fn from(from: VenueReviewCount) -> Self {
        let VenueReviewCount {
            venue_id,
            review_count,
        } = from;
        Self {
            venue_id: venue_id.into(),
            review_count,
        }
    }
}
