mod create_review;
mod create_venue;
mod error;
mod find_duplicate;
mod hide_reviews;
mod load_reports;
mod load_venue;
mod lookup_places;
mod report_abuse;
mod resolve_report;
mod review_counts;
mod suggest_city;
mod update_venue;

#[cfg(test)]
pub mod tests;

pub use self::{
    create_review::*, create_venue::*, error::Error, find_duplicate::*, hide_reviews::*,
    load_reports::*, load_venue::*, lookup_places::*, report_abuse::*, resolve_report::*,
    review_counts::*, suggest_city::*, update_venue::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::{id::*, metrics::*, report::*, review::*, time::*, venue::*},
        repositories::{Error as RepoError, *},
    };
}
