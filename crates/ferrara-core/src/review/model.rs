//! Review data models

use crate::error::{Result, SiteError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest star rating
pub const MIN_RATING: u8 = 1;

/// Highest star rating
pub const MAX_RATING: u8 = 5;

/// Star rating from 1 to 5
///
/// Out-of-range values are rejected, never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Create a rating, rejecting values outside 1..=5
    pub fn new(stars: i64) -> Result<Self> {
        if (i64::from(MIN_RATING)..=i64::from(MAX_RATING)).contains(&stars) {
            Ok(Rating(stars as u8))
        } else {
            Err(SiteError::InvalidRating(stars))
        }
    }

    /// Number of stars
    pub fn stars(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = SiteError;

    fn try_from(stars: i64) -> Result<Self> {
        Rating::new(stars)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", "★".repeat(self.0 as usize))
    }
}

/// A customer review waiting to be shown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewItem {
    name: String,
    #[serde(rename = "time")]
    relative_time: String,
    text: String,
    rating: Rating,
}

impl ReviewItem {
    /// Create a review
    pub fn new(
        name: impl Into<String>,
        relative_time: impl Into<String>,
        text: impl Into<String>,
        rating: i64,
    ) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            relative_time: relative_time.into(),
            text: text.into(),
            rating: Rating::new(rating)?,
        })
    }

    /// Reviewer name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable age of the review ("1 year ago")
    pub fn relative_time(&self) -> &str {
        &self.relative_time
    }

    /// Review body
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Star rating
    pub fn rating(&self) -> Rating {
        self.rating
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_accepts_one_to_five() {
        for stars in 1..=5 {
            assert_eq!(Rating::new(stars).unwrap().stars() as i64, stars);
        }
    }

    #[test]
    fn test_rating_rejects_out_of_range() {
        assert!(matches!(Rating::new(0), Err(SiteError::InvalidRating(0))));
        assert!(matches!(Rating::new(6), Err(SiteError::InvalidRating(6))));
        assert!(Rating::new(-3).is_err());
    }

    #[test]
    fn test_rating_display() {
        assert_eq!(Rating::new(3).unwrap().to_string(), "★★★");
    }

    #[test]
    fn test_review_item_rejects_bad_rating() {
        let err = ReviewItem::new("Sarah", "1 year ago", "Great", 9).unwrap_err();
        assert!(matches!(err, SiteError::InvalidRating(9)));
    }

    #[test]
    fn test_review_item_deserialize() {
        let item: ReviewItem = toml::from_str(
            r#"
            name = "Michael Chen"
            time = "1 year ago"
            text = "Exceptional work."
            rating = 5
            "#,
        )
        .unwrap();
        assert_eq!(item.name(), "Michael Chen");
        assert_eq!(item.relative_time(), "1 year ago");
        assert_eq!(item.rating().stars(), 5);
    }

    #[test]
    fn test_review_item_deserialize_rejects_bad_rating() {
        let result = toml::from_str::<ReviewItem>(
            r#"
            name = "X"
            time = "now"
            text = "Y"
            rating = 0
            "#,
        );
        assert!(result.is_err());
    }
}
