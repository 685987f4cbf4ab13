use std::{cell::RefCell, collections::HashSet, result};

use super::prelude::*;

type RepoResult<T> = result::Result<T, RepoError>;

trait EntityId {
    fn id(&self) -> &str;
}

impl EntityId for Venue {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl EntityId for Review {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl EntityId for Report {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

/// In-memory stand-in for the managed backend, mirroring its
/// uniqueness constraints.
#[derive(Default)]
pub struct MockDb {
    pub venues: RefCell<Vec<Venue>>,
    pub reviews: RefCell<Vec<Review>>,
    pub reports: RefCell<Vec<Report>>,
    // Some(rows) simulates the installed metrics procedure,
    // None its absence.
    pub review_count_rows: RefCell<Option<Vec<VenueReviewCount>>>,
}

fn get<T: Clone + EntityId>(objects: &[T], id: &str) -> RepoResult<T> {
    match objects.iter().find(|x| x.id() == id) {
        Some(x) => Ok(x.clone()),
        None => Err(RepoError::NotFound),
    }
}

fn create<T: Clone + EntityId>(objects: &mut Vec<T>, e: T) -> RepoResult<()> {
    if objects.iter().any(|x| x.id() == e.id()) {
        return Err(RepoError::Conflict);
    }
    objects.push(e);
    Ok(())
}

fn update<T: Clone + EntityId>(objects: &mut [T], e: &T) -> RepoResult<()> {
    if let Some(pos) = objects.iter().position(|x| x.id() == e.id()) {
        objects[pos] = e.clone();
        Ok(())
    } else {
        Err(RepoError::NotFound)
    }
}

impl VenueRepo for MockDb {
    fn create_venue(&self, venue: Venue) -> RepoResult<()> {
        let unique_violation = self.venues.borrow().iter().any(|v| {
            let same_key = v.name.eq_ignore_ascii_case(&venue.name)
                && v.city.eq_ignore_ascii_case(&venue.city)
                && v.state == venue.state;
            let same_place = match (&v.place_ref, &venue.place_ref) {
                (Some(a), Some(b)) => a.place_id == b.place_id,
                _ => false,
            };
            same_key || same_place
        });
        if unique_violation {
            return Err(RepoError::Conflict);
        }
        create(&mut self.venues.borrow_mut(), venue)
    }

    fn update_venue(&self, venue: &Venue) -> RepoResult<()> {
        update(&mut self.venues.borrow_mut(), venue)
    }

    fn get_venue(&self, id: &str) -> RepoResult<Venue> {
        get(&self.venues.borrow(), id)
    }

    fn all_venues(&self) -> RepoResult<Vec<Venue>> {
        Ok(self.venues.borrow().clone())
    }

    fn count_venues(&self) -> RepoResult<usize> {
        Ok(self.venues.borrow().len())
    }

    fn venues_by_state(&self, state: &str) -> RepoResult<Vec<Venue>> {
        Ok(self
            .venues
            .borrow()
            .iter()
            .filter(|v| v.state == state)
            .cloned()
            .collect())
    }

    fn venue_by_place_id(&self, place_id: &str) -> RepoResult<Option<Venue>> {
        Ok(self
            .venues
            .borrow()
            .iter()
            .find(|v| {
                v.place_ref
                    .as_ref()
                    .is_some_and(|p| p.place_id == place_id)
            })
            .cloned())
    }

    fn distinct_cities(&self) -> RepoResult<Vec<String>> {
        let mut seen = HashSet::new();
        Ok(self
            .venues
            .borrow()
            .iter()
            .filter(|v| seen.insert(v.city.clone()))
            .map(|v| v.city.clone())
            .collect())
    }
}

impl ReviewRepo for MockDb {
    fn create_review(&self, review: Review) -> RepoResult<()> {
        let unique_violation = self
            .reviews
            .borrow()
            .iter()
            .any(|r| r.venue_id == review.venue_id && r.device_token == review.device_token);
        if unique_violation {
            return Err(RepoError::Conflict);
        }
        create(&mut self.reviews.borrow_mut(), review)
    }

    fn get_review(&self, id: &str) -> RepoResult<Review> {
        get(&self.reviews.borrow(), id)
    }

    fn reviews_of_venue(&self, venue_id: &str) -> RepoResult<Vec<Review>> {
        Ok(self
            .reviews
            .borrow()
            .iter()
            .filter(|r| r.venue_id.as_str() == venue_id && r.is_visible())
            .cloned()
            .collect())
    }

    fn hide_reviews(&self, ids: &[&str]) -> RepoResult<usize> {
        let mut hidden = 0;
        for review in self.reviews.borrow_mut().iter_mut() {
            if ids.contains(&review.id.as_str()) && !review.hidden {
                review.hidden = true;
                hidden += 1;
            }
        }
        Ok(hidden)
    }

    fn count_reviews(&self) -> RepoResult<usize> {
        Ok(self.reviews.borrow().len())
    }
}

impl ReportRepo for MockDb {
    fn create_report(&self, report: Report) -> RepoResult<()> {
        create(&mut self.reports.borrow_mut(), report)
    }

    fn update_report(&self, report: &Report) -> RepoResult<()> {
        update(&mut self.reports.borrow_mut(), report)
    }

    fn get_report(&self, id: &str) -> RepoResult<Report> {
        get(&self.reports.borrow(), id)
    }

    fn unresolved_reports(&self) -> RepoResult<Vec<Report>> {
        Ok(self
            .reports
            .borrow()
            .iter()
            .filter(|r| !r.is_resolved())
            .cloned()
            .collect())
    }

    fn count_reports(&self) -> RepoResult<usize> {
        Ok(self.reports.borrow().len())
    }
}

impl VenueMetricsRepo for MockDb {
    fn venue_review_counts(&self) -> RepoResult<Vec<VenueReviewCount>> {
        match &*self.review_count_rows.borrow() {
            Some(rows) => Ok(rows.clone()),
            None => Err(RepoError::NotFound),
        }
    }
}
