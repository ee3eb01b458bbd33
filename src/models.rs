use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub type Timestamp = DateTime<FixedOffset>;

/// A bookable offering published by a studio owner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct Class {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Yoga Class")]
    pub name: String,
    #[schema(value_type = String, format = "date-time", example = "2025-04-01T10:00:00Z")]
    pub start_date: Timestamp,
    #[schema(value_type = String, format = "date-time", example = "2025-04-01T11:00:00Z")]
    pub end_date: Timestamp,
    #[schema(example = 20)]
    pub capacity: i64,
}

/// Body of `POST /owner/classes`. Missing fields fall back to their unset
/// values and are rejected by validation rather than by deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(default)]
pub struct NewClass {
    pub name: String,
    #[schema(value_type = Option<String>, format = "date-time", example = "2025-04-01T10:00:00Z")]
    pub start_date: Option<Timestamp>,
    #[schema(value_type = Option<String>, format = "date-time", example = "2025-04-01T11:00:00Z")]
    pub end_date: Option<Timestamp>,
    pub capacity: i64,
}

/// A member's accepted reservation of a class.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct Booking {
    #[serde(rename = "name")]
    #[schema(example = "John")]
    pub member_name: String,
    #[serde(rename = "date")]
    #[schema(value_type = String, format = "date-time", example = "2025-04-01T10:30:00Z")]
    pub class_date: Timestamp,
    #[schema(example = 1)]
    pub class_id: i64,
}

/// Body of `POST /member/bookings`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(default)]
pub struct BookingRequest {
    #[serde(rename = "name")]
    pub member_name: String,
    #[serde(rename = "date")]
    #[schema(value_type = Option<String>, format = "date-time", example = "2025-04-01T10:30:00Z")]
    pub class_date: Option<Timestamp>,
    pub class_id: i64,
}
