//! Synchronous input validation, applied before any repository call.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VenueInvalidation {
    Name,
    City,
    State,
}

pub fn venue(name: &str, city: &str, state: &str) -> Result<(), VenueInvalidation> {
    if name.trim().is_empty() {
        return Err(VenueInvalidation::Name);
    }
    if city.trim().is_empty() {
        return Err(VenueInvalidation::City);
    }
    if state.trim().is_empty() {
        return Err(VenueInvalidation::State);
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewInvalidation {
    Role,
    TipsPerWeek,
    HoursPerWeek,
}

pub fn review(
    role: &str,
    tips_per_week: Option<f64>,
    hours_per_week: Option<f64>,
) -> Result<(), ReviewInvalidation> {
    if role.trim().is_empty() {
        return Err(ReviewInvalidation::Role);
    }
    if !is_valid_amount(tips_per_week) {
        return Err(ReviewInvalidation::TipsPerWeek);
    }
    if !is_valid_amount(hours_per_week) {
        return Err(ReviewInvalidation::HoursPerWeek);
    }
    Ok(())
}

// Optional numeric fields must be finite and non-negative when present.
fn is_valid_amount(amount: Option<f64>) -> bool {
    amount.map_or(true, |v| v.is_finite() && v >= 0.0)
}
