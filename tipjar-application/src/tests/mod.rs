use std::{
    cell::{Cell, RefCell},
    collections::HashSet,
};

use anyhow::anyhow;

use tipjar_entities::{id::Id, review::Review, venue::Venue};

use crate::{
    error::{AppError, BError},
    prelude as flows,
    usecases, DeviceMemory, Error as RepoError, ReviewRepo, VenueRepo,
};

type RepoResult<T> = std::result::Result<T, RepoError>;

fn fixture() -> Fixture {
    let _ = env_logger::builder().is_test(true).try_init();
    Fixture::default()
}

/// In-memory backend double that counts insert attempts, so tests can
/// assert that a submission never reached the network.
#[derive(Default)]
struct Fixture {
    venues: RefCell<Vec<Venue>>,
    reviews: RefCell<Vec<Review>>,
    venue_insert_attempts: Cell<usize>,
    review_insert_attempts: Cell<usize>,
    // Reject venue inserts with an opaque backend error instead of the
    // dedicated conflict variant.
    opaque_conflict: Cell<bool>,
}

impl VenueRepo for Fixture {
    fn create_venue(&self, venue: Venue) -> RepoResult<()> {
        self.venue_insert_attempts
            .set(self.venue_insert_attempts.get() + 1);
        if self.opaque_conflict.get() {
            return Err(RepoError::Other(anyhow!(
                "23505: duplicate key value violates unique constraint"
            )));
        }
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
        self.venues.borrow_mut().push(venue);
        Ok(())
    }

    fn update_venue(&self, _: &Venue) -> RepoResult<()> {
        unimplemented!();
    }

    fn get_venue(&self, id: &str) -> RepoResult<Venue> {
        self.venues
            .borrow()
            .iter()
            .find(|v| v.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
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

impl ReviewRepo for Fixture {
    fn create_review(&self, review: Review) -> RepoResult<()> {
        self.review_insert_attempts
            .set(self.review_insert_attempts.get() + 1);
        let unique_violation = self
            .reviews
            .borrow()
            .iter()
            .any(|r| r.venue_id == review.venue_id && r.device_token == review.device_token);
        if unique_violation {
            return Err(RepoError::Conflict);
        }
        self.reviews.borrow_mut().push(review);
        Ok(())
    }

    fn get_review(&self, _: &str) -> RepoResult<Review> {
        unimplemented!();
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

    fn hide_reviews(&self, _: &[&str]) -> RepoResult<usize> {
        unimplemented!();
    }

    fn count_reviews(&self) -> RepoResult<usize> {
        Ok(self.reviews.borrow().len())
    }
}

#[derive(Default)]
struct InMemoryDevice {
    reviewed: RefCell<HashSet<String>>,
}

impl DeviceMemory for InMemoryDevice {
    fn has_reviewed(&self, venue_id: &Id) -> bool {
        self.reviewed.borrow().contains(venue_id.as_str())
    }

    fn mark_reviewed(&self, venue_id: &Id) {
        self.reviewed
            .borrow_mut()
            .insert(venue_id.as_str().to_owned());
    }
}

fn new_venue(name: &str, city: &str, state: &str) -> usecases::NewVenue {
    usecases::NewVenue {
        name: name.into(),
        city: city.into(),
        state: state.into(),
        venue_type: None,
        place_ref: None,
    }
}

fn new_review(venue_id: &str, device_token: &str) -> usecases::NewReview {
    usecases::NewReview {
        venue_id: venue_id.into(),
        role: "Server".into(),
        tips_per_week: Some(400.0),
        hours_per_week: None,
        tip_pool: Default::default(),
        busy_season: None,
        recommended: true,
        comment: None,
        earnings: Default::default(),
        device_token: device_token.into(),
    }
}

fn is_already_reviewed(err: &AppError) -> bool {
    matches!(
        err,
        AppError::Business(BError::Parameter(usecases::Error::AlreadyReviewed))
    )
}

#[test]
fn add_venue_then_resolve_the_duplicate() {
    let fixture = fixture();

    let created = match flows::add_venue(&fixture, new_venue("The Dive", "Hoboken", "NJ")).unwrap()
    {
        flows::AddVenueOutcome::Created(venue) => venue,
        other => panic!("unexpected outcome: {other:?}"),
    };

    // Re-submitting the same venue conflicts; the flow locates the
    // record that is already on file instead of surfacing an error.
    let outcome =
        flows::add_venue(&fixture, new_venue(" the  DIVE ", "hoboken", "nj")).unwrap();
    assert_eq!(flows::AddVenueOutcome::AlreadyExists(created), outcome);
    assert_eq!(1, fixture.count_venues().unwrap());
}

#[test]
fn opaque_conflict_without_a_locatable_duplicate_is_unresolved() {
    let fixture = fixture();
    fixture.opaque_conflict.set(true);

    let outcome = flows::add_venue(&fixture, new_venue("The Dive", "Hoboken", "NJ")).unwrap();
    assert_eq!(flows::AddVenueOutcome::DuplicateUnresolved, outcome);
    assert_eq!(0, fixture.count_venues().unwrap());
}

#[test]
fn second_submission_from_same_device_never_reaches_the_backend() {
    let fixture = fixture();
    let device = InMemoryDevice::default();

    flows::submit_review(&fixture, &device, new_review("v1", "device-1")).unwrap();
    assert_eq!(1, fixture.review_insert_attempts.get());

    let err = flows::submit_review(&fixture, &device, new_review("v1", "device-1")).unwrap_err();
    assert!(is_already_reviewed(&err));
    // Blocked client-side, no second insert attempt.
    assert_eq!(1, fixture.review_insert_attempts.get());

    // A different venue from the same device is fine.
    flows::submit_review(&fixture, &device, new_review("v2", "device-1")).unwrap();
}

#[test]
fn backend_uniqueness_backstops_a_racing_device() {
    let fixture = fixture();
    // Fresh device memory, e.g. a second browser tab that missed the
    // first submission.
    let device = InMemoryDevice::default();
    let other_tab = InMemoryDevice::default();

    flows::submit_review(&fixture, &device, new_review("v1", "device-1")).unwrap();
    let err =
        flows::submit_review(&fixture, &other_tab, new_review("v1", "device-1")).unwrap_err();
    assert!(is_already_reviewed(&err));
    assert_eq!(2, fixture.review_insert_attempts.get());
}

#[test]
fn validation_failure_precedes_device_marking() {
    let fixture = fixture();
    let device = InMemoryDevice::default();

    let invalid = usecases::NewReview {
        tips_per_week: Some(f64::NAN),
        ..new_review("v1", "device-1")
    };
    assert!(flows::submit_review(&fixture, &device, invalid).is_err());
    // The device must not be marked after a failed submission.
    assert!(!device.has_reviewed(&"v1".into()));
    assert_eq!(0, fixture.review_insert_attempts.get());
}
