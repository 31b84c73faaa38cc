//! Review entry form.
//!
//! The form holds the raw input, validates it on submit, and publishes the
//! accepted review on the channel it was given. It never talks to the product
//! card directly.

use thiserror::Error;

use storefront_events::EventChannel;

use crate::review::{REVIEW_SUBMITTED, Rating, Recommendation, Review};

/// A required form field that was left empty.
///
/// Variants are declared in the order the form checks them.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum MissingField {
    #[error("Name required.")]
    Name,
    #[error("Review required.")]
    Review,
    #[error("Rating required.")]
    Rating,
    #[error("Recommendation required.")]
    Recommendation,
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The review was published to `delivered` subscribers and the form was reset.
    Submitted { review: Review, delivered: usize },
    /// Nothing was published; the fields are left as entered.
    Rejected(Vec<MissingField>),
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted { .. })
    }
}

#[derive(Debug)]
pub struct ReviewForm<C> {
    channel: C,
    name: String,
    text: String,
    rating: Option<Rating>,
    recommend: Option<Recommendation>,
    errors: Vec<MissingField>,
}

impl<C> ReviewForm<C>
where
    C: EventChannel<Review>,
{
    pub fn new(channel: C) -> Self {
        Self {
            channel,
            name: String::new(),
            text: String::new(),
            rating: None,
            recommend: None,
            errors: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn rating(&self) -> Option<Rating> {
        self.rating
    }

    pub fn recommend(&self) -> Option<Recommendation> {
        self.recommend
    }

    /// Messages from the last submit attempt, in check order.
    pub fn errors(&self) -> &[MissingField] {
        &self.errors
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_rating(&mut self, rating: Option<Rating>) {
        self.rating = rating;
    }

    pub fn set_recommend(&mut self, recommend: Option<Recommendation>) {
        self.recommend = recommend;
    }

    /// Validate the current input and publish it as a review.
    ///
    /// All missing fields are reported, not just the first. A channel failure
    /// is returned as `Err` and leaves the input untouched.
    pub fn submit(&mut self) -> Result<SubmitOutcome, C::Error> {
        self.errors.clear();
        if self.name.is_empty() {
            self.errors.push(MissingField::Name);
        }
        if self.text.is_empty() {
            self.errors.push(MissingField::Review);
        }
        if self.rating.is_none() {
            self.errors.push(MissingField::Rating);
        }
        if self.recommend.is_none() {
            self.errors.push(MissingField::Recommendation);
        }

        let (Some(rating), Some(recommend)) = (self.rating, self.recommend) else {
            return Ok(self.rejected());
        };
        if !self.errors.is_empty() {
            return Ok(self.rejected());
        }

        let review = Review::new(self.name.clone(), self.text.clone(), rating, recommend);
        let delivered = self.channel.publish(REVIEW_SUBMITTED, review.clone())?;
        tracing::debug!(rating = rating.get(), delivered, "review submitted");

        self.reset();
        Ok(SubmitOutcome::Submitted { review, delivered })
    }

    fn rejected(&self) -> SubmitOutcome {
        tracing::debug!(missing = self.errors.len(), "review rejected");
        SubmitOutcome::Rejected(self.errors.clone())
    }

    fn reset(&mut self) {
        self.name.clear();
        self.text.clear();
        self.rating = None;
        self.recommend = None;
    }
}
