use crate::models::{Booking, BookingStatus, NewBooking};
use crate::repository::BookingRepository;
use roam_catalog::{pricing, TourRepository};
use std::sync::Arc;
use uuid::Uuid;

/// Validates and persists booking requests and drives the booking status
/// lifecycle. All storage access goes through the injected repositories, so
/// the manager is testable against a fake store.
pub struct BookingManager {
    tours: Arc<dyn TourRepository>,
    bookings: Arc<dyn BookingRepository>,
}

impl BookingManager {
    pub fn new(tours: Arc<dyn TourRepository>, bookings: Arc<dyn BookingRepository>) -> Self {
        Self { tours, bookings }
    }

    /// Create a booking against an existing tour.
    ///
    /// Preconditions fail fast before any write: contact fields must be
    /// non-empty after trimming, the tour must exist, and the party size
    /// must fit `1..=tour.max_people`. The total price is the per-person
    /// share of the tour's full-group price, snapshotted at creation.
    /// Repeat bookings per tour per contact are allowed.
    pub async fn create_booking(&self, draft: NewBooking) -> Result<Booking, BookingError> {
        let draft = NewBooking {
            first_name: require_contact("firstName", &draft.first_name)?,
            last_name: require_contact("lastName", &draft.last_name)?,
            email: require_contact("email", &draft.email)?,
            phone: require_contact("phone", &draft.phone)?,
            ..draft
        };

        let tour = self
            .tours
            .get_tour(draft.tour_id)
            .await
            .map_err(BookingError::unavailable)?
            .ok_or(BookingError::TourNotFound(draft.tour_id))?;

        if draft.people_count < 1 || draft.people_count > tour.max_people {
            return Err(BookingError::InvalidPeopleCount {
                requested: draft.people_count,
                max: tour.max_people,
            });
        }

        let total_price = pricing::booking_total(tour.price, tour.max_people, draft.people_count);
        let booking = Booking::new(draft, total_price);
        self.bookings
            .create_booking(&booking)
            .await
            .map_err(BookingError::unavailable)?;

        Ok(booking)
    }

    /// List bookings, either all of them or scoped to one tour.
    pub async fn list_bookings(&self, tour_id: Option<Uuid>) -> Result<Vec<Booking>, BookingError> {
        let result = match tour_id {
            Some(id) => self.bookings.get_bookings_by_tour(id).await,
            None => self.bookings.list_bookings().await,
        };
        result.map_err(BookingError::unavailable)
    }

    pub async fn get_booking(&self, id: Uuid) -> Result<Booking, BookingError> {
        self.bookings
            .get_booking(id)
            .await
            .map_err(BookingError::unavailable)?
            .ok_or(BookingError::NotFound(id))
    }

    /// Move a booking to a new status.
    ///
    /// The status string is parsed before storage is touched, so an
    /// unrecognized value leaves the stored status unchanged. The
    /// transition set is deliberately permissive: any state is reachable
    /// from any state.
    pub async fn update_status(&self, id: Uuid, status: &str) -> Result<Booking, BookingError> {
        let status: BookingStatus = status
            .parse()
            .map_err(|e: crate::models::UnknownStatus| BookingError::InvalidStatus(e.0))?;

        self.bookings
            .update_booking_status(id, status)
            .await
            .map_err(BookingError::unavailable)?
            .ok_or(BookingError::NotFound(id))
    }
}

fn require_contact(field: &'static str, value: &str) -> Result<String, BookingError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(BookingError::EmptyContactField { field });
    }
    Ok(trimmed.to_string())
}

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Tour not found: {0}")]
    TourNotFound(Uuid),

    #[error("Booking not found: {0}")]
    NotFound(Uuid),

    #[error("Contact field {field} must not be empty")]
    EmptyContactField { field: &'static str },

    #[error("People count {requested} is out of bounds, allowed 1..={max}")]
    InvalidPeopleCount { requested: i32, max: i32 },

    #[error("Unrecognized booking status: {0}")]
    InvalidStatus(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl BookingError {
    fn unavailable(err: roam_core::BoxError) -> Self {
        BookingError::Unavailable(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use roam_catalog::{NewTour, Tour};
    use roam_core::BoxError;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeTours {
        tours: Mutex<HashMap<Uuid, Tour>>,
    }

    impl FakeTours {
        fn insert(&self, tour: Tour) {
            self.tours.lock().unwrap().insert(tour.id, tour);
        }

        fn set_price(&self, id: Uuid, price: i32) {
            self.tours.lock().unwrap().get_mut(&id).unwrap().price = price;
        }
    }

    #[async_trait]
    impl TourRepository for FakeTours {
        async fn create_tour(&self, tour: &Tour) -> Result<(), BoxError> {
            self.insert(tour.clone());
            Ok(())
        }

        async fn get_tour(&self, id: Uuid) -> Result<Option<Tour>, BoxError> {
            Ok(self.tours.lock().unwrap().get(&id).cloned())
        }

        async fn list_tours(&self) -> Result<Vec<Tour>, BoxError> {
            Ok(self.tours.lock().unwrap().values().cloned().collect())
        }

        async fn update_tour_rating(&self, id: Uuid, rating: i32) -> Result<bool, BoxError> {
            match self.tours.lock().unwrap().get_mut(&id) {
                Some(tour) => {
                    tour.rating = rating;
                    Ok(true)
                }
                None => Ok(false),
            }
        }
    }

    #[derive(Default)]
    struct FakeBookings {
        bookings: Mutex<Vec<Booking>>,
    }

    #[async_trait]
    impl BookingRepository for FakeBookings {
        async fn create_booking(&self, booking: &Booking) -> Result<(), BoxError> {
            self.bookings.lock().unwrap().push(booking.clone());
            Ok(())
        }

        async fn get_booking(&self, id: Uuid) -> Result<Option<Booking>, BoxError> {
            Ok(self
                .bookings
                .lock()
                .unwrap()
                .iter()
                .find(|b| b.id == id)
                .cloned())
        }

        async fn list_bookings(&self) -> Result<Vec<Booking>, BoxError> {
            Ok(self.bookings.lock().unwrap().clone())
        }

        async fn get_bookings_by_tour(&self, tour_id: Uuid) -> Result<Vec<Booking>, BoxError> {
            Ok(self
                .bookings
                .lock()
                .unwrap()
                .iter()
                .filter(|b| b.tour_id == tour_id)
                .cloned()
                .collect())
        }

        async fn update_booking_status(
            &self,
            id: Uuid,
            status: BookingStatus,
        ) -> Result<Option<Booking>, BoxError> {
            let mut bookings = self.bookings.lock().unwrap();
            match bookings.iter_mut().find(|b| b.id == id) {
                Some(booking) => {
                    booking.status = status;
                    Ok(Some(booking.clone()))
                }
                None => Ok(None),
            }
        }
    }

    fn tour(price: i32, max_people: i32) -> Tour {
        Tour::new(
            NewTour {
                title: "Kornati sailing".to_string(),
                description: String::new(),
                location: "Zadar".to_string(),
                duration: "1 day".to_string(),
                price,
                max_people,
                category: "sailing".to_string(),
                tags: vec![],
                is_hot: false,
                included: vec![],
                excluded: vec![],
                program: String::new(),
                route: None,
            },
            None,
        )
        .unwrap()
    }

    fn draft(tour_id: Uuid, people_count: i32) -> NewBooking {
        NewBooking {
            tour_id,
            user_id: None,
            first_name: "Ana".to_string(),
            last_name: "Kovač".to_string(),
            email: "ana@example.com".to_string(),
            phone: "+385911234567".to_string(),
            people_count,
            notes: None,
        }
    }

    fn setup(tours: Vec<Tour>) -> (Arc<FakeTours>, Arc<FakeBookings>, BookingManager) {
        let tour_repo = Arc::new(FakeTours::default());
        for t in tours {
            tour_repo.insert(t);
        }
        let booking_repo = Arc::new(FakeBookings::default());
        let manager = BookingManager::new(tour_repo.clone(), booking_repo.clone());
        (tour_repo, booking_repo, manager)
    }

    #[tokio::test]
    async fn test_create_booking_snapshots_price() {
        let t = tour(15000, 8);
        let tour_id = t.id;
        let (_, bookings, manager) = setup(vec![t]);

        let booking = manager.create_booking(draft(tour_id, 1)).await.unwrap();
        assert_eq!(booking.total_price, 1875);
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(bookings.bookings.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_booking_unknown_tour() {
        let (_, bookings, manager) = setup(vec![]);

        let err = manager
            .create_booking(draft(Uuid::new_v4(), 2))
            .await
            .unwrap_err();
        assert!(matches!(err, BookingError::TourNotFound(_)));
        assert!(bookings.bookings.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_people_count_bounds() {
        let t = tour(20000, 4);
        let tour_id = t.id;
        let (_, bookings, manager) = setup(vec![t]);

        for people in [0, 5] {
            let err = manager
                .create_booking(draft(tour_id, people))
                .await
                .unwrap_err();
            match err {
                BookingError::InvalidPeopleCount { requested, max } => {
                    assert_eq!(requested, people);
                    assert_eq!(max, 4);
                }
                other => panic!("unexpected error: {other}"),
            }
        }
        assert!(bookings.bookings.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_blank_contact_field_rejected() {
        let t = tour(20000, 4);
        let tour_id = t.id;
        let (_, bookings, manager) = setup(vec![t]);

        let mut d = draft(tour_id, 2);
        d.email = "   ".to_string();
        let err = manager.create_booking(d).await.unwrap_err();
        assert!(matches!(
            err,
            BookingError::EmptyContactField { field: "email" }
        ));
        assert!(bookings.bookings.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_total_price_immune_to_later_price_change() {
        let t = tour(20000, 4);
        let tour_id = t.id;
        let (tours, _, manager) = setup(vec![t]);

        let booking = manager.create_booking(draft(tour_id, 2)).await.unwrap();
        assert_eq!(booking.total_price, 10000);

        tours.set_price(tour_id, 99999);
        let stored = manager.get_booking(booking.id).await.unwrap();
        assert_eq!(stored.total_price, 10000);
    }

    #[tokio::test]
    async fn test_status_update_is_unconstrained() {
        let t = tour(20000, 4);
        let tour_id = t.id;
        let (_, _, manager) = setup(vec![t]);
        let booking = manager.create_booking(draft(tour_id, 2)).await.unwrap();

        let confirmed = manager
            .update_status(booking.id, "confirmed")
            .await
            .unwrap();
        assert_eq!(confirmed.status, BookingStatus::Confirmed);

        // permissive by design: confirmed back to pending is allowed
        let reverted = manager.update_status(booking.id, "pending").await.unwrap();
        assert_eq!(reverted.status, BookingStatus::Pending);
    }

    #[tokio::test]
    async fn test_unrecognized_status_leaves_booking_untouched() {
        let t = tour(20000, 4);
        let tour_id = t.id;
        let (_, _, manager) = setup(vec![t]);
        let booking = manager.create_booking(draft(tour_id, 2)).await.unwrap();

        let err = manager
            .update_status(booking.id, "refunded")
            .await
            .unwrap_err();
        assert!(matches!(err, BookingError::InvalidStatus(s) if s == "refunded"));

        let stored = manager.get_booking(booking.id).await.unwrap();
        assert_eq!(stored.status, BookingStatus::Pending);
    }

    #[tokio::test]
    async fn test_status_update_unknown_booking() {
        let (_, _, manager) = setup(vec![]);
        let err = manager
            .update_status(Uuid::new_v4(), "confirmed")
            .await
            .unwrap_err();
        assert!(matches!(err, BookingError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_bookings_by_tour() {
        let a = tour(20000, 4);
        let b = tour(15000, 8);
        let (a_id, b_id) = (a.id, b.id);
        let (_, _, manager) = setup(vec![a, b]);

        manager.create_booking(draft(a_id, 1)).await.unwrap();
        manager.create_booking(draft(b_id, 1)).await.unwrap();
        manager.create_booking(draft(a_id, 2)).await.unwrap();

        assert_eq!(manager.list_bookings(None).await.unwrap().len(), 3);
        assert_eq!(manager.list_bookings(Some(a_id)).await.unwrap().len(), 2);
        assert_eq!(manager.list_bookings(Some(b_id)).await.unwrap().len(), 1);
    }
}
