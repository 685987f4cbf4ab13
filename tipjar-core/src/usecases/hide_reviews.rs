use super::prelude::*;

/// Moderation soft-hide. Hidden reviews disappear from venue pages and
/// aggregation but are never hard-deleted.
pub fn hide_reviews<R: ReviewRepo>(repo: &R, ids: &[&str]) -> Result<usize> {
    log::info!("Hiding {} review(s)", ids.len());
    Ok(repo.hide_reviews(ids)?)
}
