use crate::entities::id::Id;

/// Device-scoped memory of the venues this device has already reviewed.
///
/// The client-side check is an optimization that avoids a doomed
/// network call; the repository uniqueness constraint remains the
/// authoritative backstop for races between tabs or devices.
pub trait DeviceMemory {
    fn has_reviewed(&self, venue_id: &Id) -> bool;
    fn mark_reviewed(&self, venue_id: &Id);
}
