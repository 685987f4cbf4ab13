pub mod device;
pub mod place_lookup;
