use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, ValueObject};
use storefront_events::{Event, Topic};

/// Topic carrying accepted reviews from the form to the product card.
pub const REVIEW_SUBMITTED: Topic = Topic::new("review-submitted");

/// Star rating, always one of 1..=5.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Options in the order the form lists them.
    pub const OPTIONS: [Rating; 5] = [Rating(5), Rating(4), Rating(3), Rating(2), Rating(1)];

    pub fn new(value: u8) -> DomainResult<Self> {
        Self::try_from(value)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = DomainError;

    fn try_from(value: u8) -> DomainResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::validation(format!("rating must be 1-5, got {value}")))
        }
    }
}

impl From<Rating> for u8 {
    fn from(value: Rating) -> Self {
        value.0
    }
}

impl FromStr for Rating {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        let value = s
            .trim()
            .parse::<u8>()
            .map_err(|e| DomainError::validation(format!("rating: {e}")))?;
        Self::try_from(value)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl ValueObject for Rating {}

/// Answer to "Would you recommend this product?".
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Yes,
    No,
}

impl Recommendation {
    pub fn as_str(self) -> &'static str {
        match self {
            Recommendation::Yes => "yes",
            Recommendation::No => "no",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Recommendation {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s.trim() {
            "yes" => Ok(Recommendation::Yes),
            "no" => Ok(Recommendation::No),
            other => Err(DomainError::validation(format!(
                "recommendation must be yes or no, got {other:?}"
            ))),
        }
    }
}

/// A submitted product review.
///
/// Only the review form constructs these, and only from complete input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    name: String,
    text: String,
    rating: Rating,
    recommend: Recommendation,
}

impl Review {
    pub(crate) fn new(name: String, text: String, rating: Rating, recommend: Recommendation) -> Self {
        Self {
            name,
            text,
            rating,
            recommend,
        }
    }

    /// Reviewer name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn recommend(&self) -> Recommendation {
        self.recommend
    }
}

impl ValueObject for Review {}

impl Event for Review {
    fn topic(&self) -> Topic {
        REVIEW_SUBMITTED
    }
}
