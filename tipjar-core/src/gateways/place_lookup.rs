/// Autocomplete result of the external place-lookup service.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceSuggestion {
    pub place_id: String,
    pub display_name: String,
    pub formatted_address: String,
    pub city: String,
    pub state: String,
    pub lat: f64,
    pub lng: f64,
}

pub trait PlaceLookupGateway {
    fn find_places(&self, text: &str) -> anyhow::Result<Vec<PlaceSuggestion>>;
}
