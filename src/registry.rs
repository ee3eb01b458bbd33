use parking_lot::Mutex;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::{Booking, BookingRequest, Class, NewClass};
use crate::validation::{ensure_within, validate_booking_details, validate_class_details};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Missing or invalid class details")]
    InvalidClassDetails,
    #[error("Missing or invalid booking details")]
    InvalidBookingDetails,
    #[error("Booking date is outside of the class range")]
    InvalidRange,
    #[error("Class not found")]
    ClassNotFound,
}

#[derive(Debug, Default)]
struct Inner {
    classes: Vec<Class>,
    last_class_id: i64,
    bookings: Vec<Booking>,
}

impl Inner {
    fn find_class(&self, id: i64) -> Option<&Class> {
        self.classes.iter().find(|class| class.id == id)
    }
}

/// In-memory store of classes and bookings.
///
/// Writes hold the lock from the class lookup through the append, so a
/// request either stores exactly one record or none.
#[derive(Debug, Default)]
pub struct Registry {
    inner: Mutex<Inner>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and stores a new class, assigning the next id.
    pub fn create_class(&self, new_class: NewClass) -> Result<Class, RegistryError> {
        let (start_date, end_date) = validate_class_details(&new_class).inspect_err(|err| {
            debug!("Rejected class {:?}: {err}", new_class.name);
        })?;

        let mut inner = self.inner.lock();
        inner.last_class_id += 1;
        let class = Class {
            id: inner.last_class_id,
            name: new_class.name,
            start_date,
            end_date,
            capacity: new_class.capacity,
        };
        inner.classes.push(class.clone());

        info!("Class {} ({:?}) created", class.id, class.name);
        Ok(class)
    }

    /// All classes in creation order.
    pub fn list_classes(&self) -> Vec<Class> {
        self.inner.lock().classes.clone()
    }

    pub fn find_class(&self, id: i64) -> Option<Class> {
        self.inner.lock().find_class(id).cloned()
    }

    /// Admits a booking if the class exists and the date lies in its window.
    ///
    /// Capacity and repeated bookings are not checked.
    pub fn book(&self, request: BookingRequest) -> Result<Booking, RegistryError> {
        let class_date = validate_booking_details(&request).inspect_err(|err| {
            debug!("Rejected booking for {:?}: {err}", request.member_name);
        })?;

        let mut inner = self.inner.lock();
        let class = inner.find_class(request.class_id).ok_or_else(|| {
            debug!("Rejected booking: class {} does not exist", request.class_id);
            RegistryError::ClassNotFound
        })?;
        ensure_within(&class_date, class).inspect_err(|_| {
            debug!(
                "Rejected booking: {class_date} is outside class {} ({} - {})",
                class.id, class.start_date, class.end_date
            );
        })?;

        let booking = Booking {
            member_name: request.member_name,
            class_date,
            class_id: request.class_id,
        };
        inner.bookings.push(booking.clone());

        info!(
            "Booking for {:?} on class {} at {}",
            booking.member_name, booking.class_id, booking.class_date
        );
        Ok(booking)
    }

    /// Accepted bookings in admission order.
    pub fn bookings(&self) -> Vec<Booking> {
        self.inner.lock().bookings.clone()
    }
}
