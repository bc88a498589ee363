use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named stop on a tour's route.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoutePoint {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

/// A bookable tour offering.
///
/// `price` is an integer in minor-unit-free currency and covers the full
/// group of `max_people`; bookings pay a per-person share of it.
/// `rating` is the aggregate of the tour's reviews scaled by 10 (47 means
/// 4.7) so storage never carries fractional ratings. It is owned by the
/// rating aggregator and must not be written by anything else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tour {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
    pub duration: String,
    pub price: i32,
    pub max_people: i32,
    pub rating: i32,
    pub category: String,
    pub tags: Vec<String>,
    pub is_hot: bool,
    pub included: Vec<String>,
    pub excluded: Vec<String>,
    pub program: String,
    pub route: Option<Vec<RoutePoint>>,
    pub agency_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a tour; everything the listing needs except the
/// derived fields (id, rating, created_at).
#[derive(Debug, Clone, Deserialize)]
pub struct NewTour {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub duration: String,
    pub price: i32,
    pub max_people: i32,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_hot: bool,
    #[serde(default)]
    pub included: Vec<String>,
    #[serde(default)]
    pub excluded: Vec<String>,
    #[serde(default)]
    pub program: String,
    #[serde(default)]
    pub route: Option<Vec<RoutePoint>>,
}

impl Tour {
    /// Build a fresh listing. New tours start unrated.
    pub fn new(draft: NewTour, agency_id: Option<Uuid>) -> Result<Self, TourError> {
        if draft.title.trim().is_empty() {
            return Err(TourError::EmptyTitle);
        }
        if draft.max_people < 1 {
            return Err(TourError::InvalidCapacity(draft.max_people));
        }
        if draft.price < 0 {
            return Err(TourError::NegativePrice(draft.price));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            title: draft.title.trim().to_string(),
            description: draft.description,
            location: draft.location,
            duration: draft.duration,
            price: draft.price,
            max_people: draft.max_people,
            rating: 0,
            category: draft.category,
            tags: draft.tags,
            is_hot: draft.is_hot,
            included: draft.included,
            excluded: draft.excluded,
            program: draft.program,
            route: draft.route,
            agency_id,
            created_at: Utc::now(),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TourError {
    #[error("Tour title must not be empty")]
    EmptyTitle,

    #[error("Tour capacity must be at least 1, got {0}")]
    InvalidCapacity(i32),

    #[error("Tour price must not be negative, got {0}")]
    NegativePrice(i32),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> NewTour {
        NewTour {
            title: "Plitvice Lakes day trip".to_string(),
            description: "Guided walk through the upper lakes".to_string(),
            location: "Croatia".to_string(),
            duration: "1 day".to_string(),
            price: 15000,
            max_people: 8,
            category: "nature".to_string(),
            tags: vec!["hiking".to_string()],
            is_hot: false,
            included: vec!["transport".to_string(), "tickets".to_string()],
            excluded: vec!["lunch".to_string()],
            program: "Depart 07:00, return 20:00".to_string(),
            route: None,
        }
    }

    #[test]
    fn test_new_tour_starts_unrated() {
        let tour = Tour::new(draft(), None).unwrap();
        assert_eq!(tour.rating, 0);
        assert_eq!(tour.max_people, 8);
    }

    #[test]
    fn test_capacity_below_one_rejected() {
        let mut d = draft();
        d.max_people = 0;
        assert!(matches!(
            Tour::new(d, None),
            Err(TourError::InvalidCapacity(0))
        ));
    }

    #[test]
    fn test_blank_title_rejected() {
        let mut d = draft();
        d.title = "   ".to_string();
        assert!(matches!(Tour::new(d, None), Err(TourError::EmptyTitle)));
    }
}
