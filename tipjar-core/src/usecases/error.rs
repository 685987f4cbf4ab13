use thiserror::Error;

use crate::{
    repositories,
    util::validate::{ReviewInvalidation, VenueInvalidation},
};

#[derive(Debug, Error)]
pub enum Error {
    #[error("The venue name is invalid")]
    VenueName,
    #[error("The city is invalid")]
    City,
    #[error("The state is invalid")]
    State,
    #[error("The role is invalid")]
    Role,
    #[error("Tips per week must be a finite non-negative number")]
    TipsPerWeek,
    #[error("Hours per week must be a finite non-negative number")]
    HoursPerWeek,
    #[error("This device has already submitted a review for the venue")]
    AlreadyReviewed,
    #[error("The report has already been resolved")]
    ReportAlreadyResolved,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<VenueInvalidation> for Error {
    fn from(err: VenueInvalidation) -> Self {
        match err {
            VenueInvalidation::Name => Self::VenueName,
            VenueInvalidation::City => Self::City,
            VenueInvalidation::State => Self::State,
        }
    }
}

impl From<ReviewInvalidation> for Error {
    fn from(err: ReviewInvalidation) -> Self {
        match err {
            ReviewInvalidation::Role => Self::Role,
            ReviewInvalidation::TipsPerWeek => Self::TipsPerWeek,
            ReviewInvalidation::HoursPerWeek => Self::HoursPerWeek,
        }
    }
}

impl From<tipjar_entities::report::AlreadyResolved> for Error {
    fn from(_: tipjar_entities::report::AlreadyResolved) -> Self {
        Self::ReportAlreadyResolved
    }
}
