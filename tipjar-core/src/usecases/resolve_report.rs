use super::prelude::*;

/// Marks a report as handled. A report transitions from unresolved to
/// resolved exactly once.
pub fn resolve_report<R: ReportRepo>(repo: &R, id: &str, resolved_by: &str) -> Result<Report> {
    let mut report = repo.get_report(id)?;
    report.resolve(resolved_by.to_owned())?;
    log::info!("Report {} resolved by {resolved_by}", report.id);
    repo.update_report(&report)?;
    Ok(report)
}
