use super::prelude::*;

pub fn unresolved_reports<R: ReportRepo>(repo: &R) -> Result<Vec<Report>> {
    Ok(repo.unresolved_reports()?)
}
