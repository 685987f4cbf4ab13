// Low-level backend access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use std::io;

use thiserror::Error;

use crate::entities::{metrics::VenueReviewCount, report::Report, review::Review, venue::Venue};

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    Conflict,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Uniqueness violations arrive either as the dedicated variant or
    /// as an opaque backend error whose message mentions "duplicate".
    pub fn is_conflict(&self) -> bool {
        match self {
            Self::Conflict => true,
            Self::Other(err) => err.to_string().to_lowercase().contains("duplicate"),
            _ => false,
        }
    }
}

type Result<T> = std::result::Result<T, Error>;

pub trait VenueRepo {
    fn create_venue(&self, venue: Venue) -> Result<()>;
    fn update_venue(&self, venue: &Venue) -> Result<()>;

    fn get_venue(&self, id: &str) -> Result<Venue>;
    fn all_venues(&self) -> Result<Vec<Venue>>;
    fn count_venues(&self) -> Result<usize>;

    fn venues_by_state(&self, state: &str) -> Result<Vec<Venue>>;
    fn venue_by_place_id(&self, place_id: &str) -> Result<Option<Venue>>;

    // Canonical city names of all venues. The order is unspecified.
    fn distinct_cities(&self) -> Result<Vec<String>>;
}

pub trait ReviewRepo {
    // Conflicts when the device has already reviewed the venue.
    fn create_review(&self, review: Review) -> Result<()>;

    fn get_review(&self, id: &str) -> Result<Review>;

    // Only reviews that have not been hidden by moderation.
    fn reviews_of_venue(&self, venue_id: &str) -> Result<Vec<Review>>;

    fn hide_reviews(&self, ids: &[&str]) -> Result<usize>;
    fn count_reviews(&self) -> Result<usize>;
}

pub trait ReportRepo {
    fn create_report(&self, report: Report) -> Result<()>;
    fn update_report(&self, report: &Report) -> Result<()>;

    fn get_report(&self, id: &str) -> Result<Report>;
    fn unresolved_reports(&self) -> Result<Vec<Report>>;
    fn count_reports(&self) -> Result<usize>;
}

// Facade for the precomputed per-venue metrics procedure.
// `NotFound` signals that the procedure is not installed.
pub trait VenueMetricsRepo {
    fn venue_review_counts(&self) -> Result<Vec<VenueReviewCount>>;
}
