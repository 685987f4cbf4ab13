use crate::{id::*, time::*};

/// Reference to a record of the external place-lookup service.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceRef {
    pub place_id: String,
    pub formatted_address: String,
    pub lat: f64,
    pub lng: f64,
}

/// A reviewable business location.
///
/// `city` and `venue_type` are stored in canonical title-case form;
/// `(name, city, state)` is unique in intent, enforced by the backend.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Venue {
    pub id         : Id,
    pub name       : String,
    pub city       : String,
    pub state      : String,
    pub venue_type : Option<String>,
    pub created_at : Timestamp,
    pub place_ref  : Option<PlaceRef>,
}
