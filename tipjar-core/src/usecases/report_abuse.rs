use super::prelude::*;
use crate::text;

#[derive(Debug, Clone)]
pub struct NewReport {
    pub target: ReportTarget,
    pub target_id: Id,
    pub reason: Option<String>,
}

/// Files a moderation report against a review or a venue.
pub fn report_abuse<R: ReportRepo>(repo: &R, new_report: NewReport) -> Result<Report> {
    let NewReport {
        target,
        target_id,
        reason,
    } = new_report;
    let report = Report {
        id: Id::new(),
        target,
        target_id,
        reason: reason
            .map(|r| text::normalize_spaces(&r))
            .filter(|r| !r.is_empty()),
        created_at: Timestamp::now(),
        resolution: None,
    };
    log::debug!("Reporting {} {}", report.target, report.target_id);
    repo.create_report(report.clone())?;
    Ok(report)
}
