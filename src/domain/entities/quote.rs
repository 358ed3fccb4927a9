//! Quote entity and its bounded rating.

use serde::Serialize;

/// A quote rating, always within `[Rating::MIN, Rating::MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Returns `None` when `value` is outside the allowed range.
    pub fn new(value: i64) -> Option<Self> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Some(Self(value as u8))
        } else {
            None
        }
    }

    /// Uses `value` when it is in range, the default rating otherwise.
    pub fn or_default(value: Option<i64>) -> Self {
        value.and_then(Self::new).unwrap_or_default()
    }

    /// Moves the rating one step, or returns `None` when it already sits on the bound.
    pub fn step(self, direction: RatingDirection) -> Option<Self> {
        match direction {
            RatingDirection::Up if self.0 < Self::MAX => Some(Self(self.0 + 1)),
            RatingDirection::Down if self.0 > Self::MIN => Some(Self(self.0 - 1)),
            _ => None,
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl From<Rating> for i64 {
    fn from(rating: Rating) -> Self {
        i64::from(rating.0)
    }
}

/// Direction of a single rating adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingDirection {
    Up,
    Down,
}

impl RatingDirection {
    /// Signed change applied to the rating value.
    pub fn delta(self) -> i64 {
        match self {
            RatingDirection::Up => 1,
            RatingDirection::Down => -1,
        }
    }
}

/// Outcome of a rating adjustment.
///
/// Hitting a bound is not an error: the quote is returned unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RatingAdjustment {
    Changed(Quote),
    AtBound(Quote),
}

impl RatingAdjustment {
    pub fn quote(&self) -> &Quote {
        match self {
            RatingAdjustment::Changed(q) | RatingAdjustment::AtBound(q) => q,
        }
    }

    pub fn into_quote(self) -> Quote {
        match self {
            RatingAdjustment::Changed(q) | RatingAdjustment::AtBound(q) => q,
        }
    }
}

/// A quote attributed to an author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub id: i64,
    pub author_id: i64,
    pub text: String,
    pub rating: Rating,
    pub deleted: bool,
}

impl Quote {
    /// Creates a new Quote instance.
    pub fn new(id: i64, author_id: i64, text: String, rating: Rating, deleted: bool) -> Self {
        Self {
            id,
            author_id,
            text,
            rating,
            deleted,
        }
    }

    /// Returns true if the quote has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted
    }
}

/// Input data for creating a new quote.
#[derive(Debug, Clone)]
pub struct NewQuote {
    pub author_id: i64,
    pub text: String,
    pub rating: Rating,
}

/// Partial update for an existing quote.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuotePatch {
    pub author_id: Option<i64>,
    pub text: Option<String>,
    pub rating: Option<Rating>,
}
