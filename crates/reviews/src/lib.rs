//! Reviews domain module.
//!
//! The review record, its rating/recommendation value objects, and the review
//! form that validates input and publishes accepted reviews on the channel.

pub mod form;
pub mod review;

pub use form::{MissingField, ReviewForm, SubmitOutcome};
pub use review::{REVIEW_SUBMITTED, Rating, Recommendation, Review};
