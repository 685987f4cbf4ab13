use strum::{Display, EnumString};

use crate::{id::*, time::*};

/// Whether tips are pooled at the venue. Reviews may leave this open.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TipPool {
    Yes,
    No,
    #[default]
    Unknown,
}

impl TipPool {
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl From<Option<bool>> for TipPool {
    fn from(from: Option<bool>) -> Self {
        match from {
            Some(true) => Self::Yes,
            Some(false) => Self::No,
            None => Self::Unknown,
        }
    }
}

impl From<TipPool> for Option<bool> {
    fn from(from: TipPool) -> Self {
        match from {
            TipPool::Yes => Some(true),
            TipPool::No => Some(false),
            TipPool::Unknown => None,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EarningsLabel {
    #[default]
    PreTax,
    PostTax,
}

/// A single anonymous submission of working-conditions data.
///
/// The device token is an opaque string used only to enforce one review
/// per venue and device. It is not treated as PII.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id             : Id,
    pub venue_id       : Id,
    pub role           : String,
    pub tips_per_week  : Option<f64>,
    pub hours_per_week : Option<f64>,
    pub tip_pool       : TipPool,
    pub busy_season    : Option<String>,
    pub recommended    : bool,
    pub comment        : Option<String>,
    pub earnings       : EarningsLabel,
    pub created_at     : Timestamp,
    pub hidden         : bool,
    pub device_token   : String,
}

impl Review {
    pub fn is_visible(&self) -> bool {
        !self.hidden
    }
}
