pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{review_builder::*, venue_builder::*};

pub mod venue_builder {

    use super::*;
    use crate::{id::*, time::*, venue::*};

    #[derive(Debug)]
    pub struct VenueBuild {
        venue: Venue,
    }

    impl VenueBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.venue.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.venue.name = name.into();
            self
        }
        pub fn city(mut self, city: &str) -> Self {
            self.venue.city = city.into();
            self
        }
        pub fn state(mut self, state: &str) -> Self {
            self.venue.state = state.into();
            self
        }
        pub fn venue_type(mut self, venue_type: Option<&str>) -> Self {
            self.venue.venue_type = venue_type.map(Into::into);
            self
        }
        pub fn place_ref(mut self, place_ref: Option<PlaceRef>) -> Self {
            self.venue.place_ref = place_ref;
            self
        }
        pub fn finish(self) -> Venue {
            self.venue
        }
    }

    impl Builder for Venue {
        type Build = VenueBuild;
        fn build() -> Self::Build {
            VenueBuild {
                venue: Venue {
                    id: Id::new(),
                    name: "".into(),
                    city: "".into(),
                    state: "".into(),
                    venue_type: None,
                    created_at: Timestamp::now(),
                    place_ref: None,
                },
            }
        }
    }
}

pub mod review_builder {

    use super::*;
    use crate::{id::*, review::*, time::*};

    #[derive(Debug)]
    pub struct ReviewBuild {
        review: Review,
    }

    impl ReviewBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.review.id = id.into();
            self
        }
        pub fn venue_id(mut self, venue_id: &str) -> Self {
            self.review.venue_id = venue_id.into();
            self
        }
        pub fn role(mut self, role: &str) -> Self {
            self.review.role = role.into();
            self
        }
        pub fn tips_per_week(mut self, tips: Option<f64>) -> Self {
            self.review.tips_per_week = tips;
            self
        }
        pub fn hours_per_week(mut self, hours: Option<f64>) -> Self {
            self.review.hours_per_week = hours;
            self
        }
        pub fn tip_pool(mut self, tip_pool: TipPool) -> Self {
            self.review.tip_pool = tip_pool;
            self
        }
        pub fn recommended(mut self, recommended: bool) -> Self {
            self.review.recommended = recommended;
            self
        }
        pub fn created_at(mut self, created_at: Timestamp) -> Self {
            self.review.created_at = created_at;
            self
        }
        pub fn hidden(mut self, hidden: bool) -> Self {
            self.review.hidden = hidden;
            self
        }
        pub fn device_token(mut self, token: &str) -> Self {
            self.review.device_token = token.into();
            self
        }
        pub fn finish(self) -> Review {
            self.review
        }
    }

    impl Builder for Review {
        type Build = ReviewBuild;
        fn build() -> Self::Build {
            ReviewBuild {
                review: Review {
                    id: Id::new(),
                    venue_id: Id::new(),
                    role: "".into(),
                    tips_per_week: None,
                    hours_per_week: None,
                    tip_pool: TipPool::Unknown,
                    busy_season: None,
                    recommended: false,
                    comment: None,
                    earnings: EarningsLabel::PreTax,
                    created_at: Timestamp::now(),
                    hidden: false,
                    device_token: "".into(),
                },
            }
        }
    }
}
