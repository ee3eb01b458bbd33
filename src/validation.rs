use crate::models::{BookingRequest, Class, NewClass, Timestamp};
use crate::registry::RegistryError;

/// Unix seconds of `0001-01-01T00:00:00Z`, which clients send as an
/// "empty" timestamp.
const ZERO_INSTANT_SECS: i64 = -62_135_596_800;

pub fn is_unset(value: Option<&Timestamp>) -> bool {
    match value {
        None => true,
        Some(ts) => ts.timestamp() == ZERO_INSTANT_SECS && ts.timestamp_subsec_nanos() == 0,
    }
}

/// Checks a new class and returns its `(start_date, end_date)` window.
pub fn validate_class_details(class: &NewClass) -> Result<(Timestamp, Timestamp), RegistryError> {
    if class.name.is_empty() {
        return Err(RegistryError::InvalidClassDetails);
    }
    let (start, end) = match (class.start_date, class.end_date) {
        (Some(start), Some(end)) if !is_unset(Some(&start)) && !is_unset(Some(&end)) => {
            (start, end)
        }
        _ => return Err(RegistryError::InvalidClassDetails),
    };
    if class.capacity <= 0 {
        return Err(RegistryError::InvalidClassDetails);
    }
    // equal bounds are a valid zero-length window
    if start > end {
        return Err(RegistryError::InvalidRange);
    }
    Ok((start, end))
}

/// Checks the fields of a booking request and returns the requested date.
pub fn validate_booking_details(request: &BookingRequest) -> Result<Timestamp, RegistryError> {
    match request.class_date {
        Some(date)
            if !request.member_name.is_empty()
                && !is_unset(Some(&date))
                && request.class_id > 0 =>
        {
            Ok(date)
        }
        _ => Err(RegistryError::InvalidBookingDetails),
    }
}

pub fn ensure_within(date: &Timestamp, class: &Class) -> Result<(), RegistryError> {
    if *date < class.start_date || *date > class.end_date {
        return Err(RegistryError::InvalidRange);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;

    fn ts(value: &str) -> Timestamp {
        DateTime::parse_from_rfc3339(value).unwrap()
    }

    fn yoga() -> NewClass {
        NewClass {
            name: "Yoga".to_string(),
            start_date: Some(ts("2025-04-01T10:00:00Z")),
            end_date: Some(ts("2025-04-01T11:00:00Z")),
            capacity: 20,
        }
    }

    #[test]
    fn test_is_unset() {
        assert!(is_unset(None));
        assert!(is_unset(Some(&ts("0001-01-01T00:00:00Z"))));
        assert!(!is_unset(Some(&ts("0001-01-01T00:00:01Z"))));
        assert!(!is_unset(Some(&ts("2025-04-01T10:00:00Z"))));
    }

    #[test]
    fn test_validate_class_details() {
        assert!(validate_class_details(&yoga()).is_ok());

        let missing_name = NewClass {
            name: String::new(),
            ..yoga()
        };
        assert_eq!(
            validate_class_details(&missing_name),
            Err(RegistryError::InvalidClassDetails)
        );

        let missing_end = NewClass {
            end_date: None,
            ..yoga()
        };
        assert_eq!(
            validate_class_details(&missing_end),
            Err(RegistryError::InvalidClassDetails)
        );

        let zero_capacity = NewClass {
            capacity: 0,
            ..yoga()
        };
        assert_eq!(
            validate_class_details(&zero_capacity),
            Err(RegistryError::InvalidClassDetails)
        );
    }

    #[test]
    fn test_class_window_bounds() {
        let same_instant = NewClass {
            end_date: Some(ts("2025-04-01T10:00:00Z")),
            ..yoga()
        };
        assert!(validate_class_details(&same_instant).is_ok());

        let reversed = NewClass {
            end_date: Some(ts("2025-04-01T09:59:59Z")),
            ..yoga()
        };
        assert_eq!(
            validate_class_details(&reversed),
            Err(RegistryError::InvalidRange)
        );
    }

    #[test]
    fn test_missing_fields_win_over_range() {
        let both_wrong = NewClass {
            capacity: -1,
            end_date: Some(ts("2025-03-01T10:00:00Z")),
            ..yoga()
        };
        assert_eq!(
            validate_class_details(&both_wrong),
            Err(RegistryError::InvalidClassDetails)
        );
    }

    #[test]
    fn test_validate_booking_details() {
        let request = BookingRequest {
            member_name: "John".to_string(),
            class_date: Some(ts("2025-04-01T10:30:00Z")),
            class_id: 1,
        };
        assert!(validate_booking_details(&request).is_ok());

        for bad in [
            BookingRequest {
                member_name: String::new(),
                ..request.clone()
            },
            BookingRequest {
                class_date: None,
                ..request.clone()
            },
            BookingRequest {
                class_id: 0,
                ..request.clone()
            },
        ] {
            assert_eq!(
                validate_booking_details(&bad),
                Err(RegistryError::InvalidBookingDetails)
            );
        }
    }

    #[test]
    fn test_ensure_within_is_inclusive() {
        let class = Class {
            id: 1,
            name: "Yoga".to_string(),
            start_date: ts("2025-04-01T10:00:00Z"),
            end_date: ts("2025-04-01T11:00:00Z"),
            capacity: 20,
        };
        assert!(ensure_within(&ts("2025-04-01T10:00:00Z"), &class).is_ok());
        assert!(ensure_within(&ts("2025-04-01T11:00:00Z"), &class).is_ok());
        // same instant expressed in another offset
        assert!(ensure_within(&ts("2025-04-01T12:30:00+02:00"), &class).is_ok());
        assert!(ensure_within(&ts("2025-04-01T09:59:00Z"), &class).is_err());
        assert!(ensure_within(&ts("2025-04-01T11:01:00Z"), &class).is_err());
    }
}
