use crate::{
    gateways::place_lookup::{PlaceLookupGateway, PlaceSuggestion},
    text,
};

/// Queries the optional place-lookup service for venue-name
/// autocompletion. A missing gateway (no credential configured) or a
/// lookup failure degrades to manual entry instead of failing the page.
pub fn lookup_places(gateway: Option<&dyn PlaceLookupGateway>, query: &str) -> Vec<PlaceSuggestion> {
    let Some(gateway) = gateway else {
        return vec![];
    };
    let query = text::normalize_spaces(query);
    if query.is_empty() {
        return vec![];
    }
    match gateway.find_places(&query) {
        Ok(suggestions) => suggestions,
        Err(err) => {
            log::warn!("Place lookup failed: {err}");
            vec![]
        }
    }
}
