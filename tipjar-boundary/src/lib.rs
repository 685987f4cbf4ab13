use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct PlaceRef {
    pub place_id: String,
    pub formatted_address: String,
    pub lat: f64,
    pub lng: f64,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Venue {
    pub id         : String,
    pub created    : i64,
    pub name       : String,
    pub city       : String,
    pub state      : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue_type : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place      : Option<PlaceRef>,
}

/// Tip pool on the wire is a tri-state boolean, `null` for unknown.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Review {
    pub id             : String,
    pub venue_id       : String,
    pub created        : i64,
    pub role           : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tips_per_week  : Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours_per_week : Option<f64>,
    pub tip_pool       : Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub busy_season    : Option<String>,
    pub recommended    : bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment        : Option<String>,
    pub earnings       : EarningsLabel,
    pub hidden         : bool,
    pub device_token   : String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum EarningsLabel {
    PreTax,
    PostTax,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum ReportTarget {
    Venue,
    Review,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Resolution {
    pub at: i64,
    pub by: String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Report {
    pub id        : String,
    pub created   : i64,
    pub target    : ReportTarget,
    pub target_id : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason    : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved  : Option<Resolution>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct VenueMetrics {
    pub review_count        : u64,
    pub avg_tips_per_week   : Option<f64>,
    pub tips_sample_count   : u64,
    pub avg_hours_per_week  : Option<f64>,
    pub hours_sample_count  : u64,
    pub recommended_percent : Option<f64>,
    pub tip_pool_percent    : Option<f64>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct VenueReviewCount {
    pub venue_id: String,
    pub review_count: u64,
}
