use strum::{Display, EnumString};
use thiserror::Error;

use crate::{id::*, time::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ReportTarget {
    Venue,
    Review,
}

/// Who resolved a report, and when.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub at: Timestamp,
    pub by: String,
}

/// A moderation flag raised against a review or a venue.
///
/// Transitions from unresolved to resolved exactly once.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub id         : Id,
    pub target     : ReportTarget,
    pub target_id  : Id,
    pub reason     : Option<String>,
    pub created_at : Timestamp,
    pub resolution : Option<Resolution>,
}

#[derive(Debug, Error)]
#[error("The report has already been resolved")]
pub struct AlreadyResolved;

impl Report {
    pub fn is_resolved(&self) -> bool {
        self.resolution.is_some()
    }

    pub fn resolve(&mut self, by: String) -> Result<(), AlreadyResolved> {
        if self.is_resolved() {
            return Err(AlreadyResolved);
        }
        self.resolution = Some(Resolution {
            at: Timestamp::now(),
            by,
        });
        Ok(())
    }
}
