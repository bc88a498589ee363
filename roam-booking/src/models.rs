use chrono::{DateTime, Utc};
use roam_core::pii::Masked;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Booking lifecycle states. Every booking starts `pending`; any state is
/// reachable from any other, including itself. Bookings are never deleted,
/// only moved to `cancelled`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingStatus::Pending => write!(f, "pending"),
            BookingStatus::Confirmed => write!(f, "confirmed"),
            BookingStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl FromStr for BookingStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unrecognized booking status: {0}")]
pub struct UnknownStatus(pub String);

/// A reservation against one tour.
///
/// Contact fields are a snapshot taken at creation, not a live link to a
/// user record; guests book without a `user_id`. `total_price` is likewise
/// a snapshot and is never recomputed after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub tour_id: Uuid,
    pub user_id: Option<Uuid>,
    pub first_name: String,
    pub last_name: String,
    pub email: Masked<String>,
    pub phone: Masked<String>,
    pub people_count: i32,
    pub notes: Option<String>,
    pub status: BookingStatus,
    pub total_price: i32,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a booking; validated by the booking manager.
#[derive(Debug, Clone, Deserialize)]
pub struct NewBooking {
    pub tour_id: Uuid,
    pub user_id: Option<Uuid>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub people_count: i32,
    pub notes: Option<String>,
}

impl Booking {
    pub fn new(draft: NewBooking, total_price: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            tour_id: draft.tour_id,
            user_id: draft.user_id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            email: Masked(draft.email),
            phone: Masked(draft.phone),
            people_count: draft.people_count,
            notes: draft.notes,
            status: BookingStatus::Pending,
            total_price,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for s in ["pending", "confirmed", "cancelled"] {
            assert_eq!(s.parse::<BookingStatus>().unwrap().to_string(), s);
        }
    }

    #[test]
    fn test_unknown_status_rejected() {
        let err = "refunded".parse::<BookingStatus>().unwrap_err();
        assert_eq!(err.0, "refunded");
    }

    #[test]
    fn test_booking_debug_masks_contact() {
        let booking = Booking::new(
            NewBooking {
                tour_id: Uuid::new_v4(),
                user_id: None,
                first_name: "Ana".to_string(),
                last_name: "Kovač".to_string(),
                email: "ana@example.com".to_string(),
                phone: "+385911234567".to_string(),
                people_count: 2,
                notes: None,
            },
            10000,
        );
        let dump = format!("{:?}", booking);
        assert!(!dump.contains("ana@example.com"));
        assert!(!dump.contains("+385911234567"));
    }
}
