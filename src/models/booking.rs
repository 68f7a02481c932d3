//! Booking records and the cursor-paginated booking connection.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A cursor-paginated page of bookings.
///
/// # Example
///
/// ```rust
/// use travelbase_api::models::BookingConnection;
///
/// let connection: BookingConnection = serde_json::from_str(r#"{
///     "totalCount": 0,
///     "pageInfo": {"hasNextPage": false, "hasPreviousPage": false,
///                  "startCursor": null, "endCursor": null},
///     "edges": []
/// }"#).unwrap();
///
/// assert!(connection.bookings().next().is_none());
/// assert_eq!(connection.next_cursor(), None);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingConnection {
    /// Total number of bookings matching the query across all pages.
    pub total_count: u64,

    /// Pagination state for this page.
    pub page_info: PageInfo,

    /// The bookings on this page, each tagged with its cursor.
    pub edges: Vec<BookingEdge>,
}

impl BookingConnection {
    /// Returns the bookings on this page in order.
    pub fn bookings(&self) -> impl Iterator<Item = &Booking> {
        self.edges.iter().map(|edge| &edge.node)
    }

    /// Returns the cursor to pass as `after` for the next page, if there is one.
    #[must_use]
    pub fn next_cursor(&self) -> Option<&str> {
        if self.page_info.has_next_page {
            self.page_info.end_cursor.as_deref()
        } else {
            None
        }
    }
}

/// Relay-style pagination state.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Whether more bookings follow this page.
    pub has_next_page: bool,

    /// Whether bookings precede this page.
    pub has_previous_page: bool,

    /// Cursor of the first edge on this page.
    #[serde(default)]
    pub start_cursor: Option<String>,

    /// Cursor of the last edge on this page.
    #[serde(default)]
    pub end_cursor: Option<String>,
}

/// A booking paired with its opaque cursor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingEdge {
    /// Opaque pagination cursor.
    pub cursor: String,
    /// The booking.
    pub node: Booking,
}

/// A booking of a rental unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// The booking ID.
    #[serde(deserialize_with = "super::id::deserialize")]
    pub id: String,

    /// Human-readable booking number.
    pub number: String,

    /// Arrival date.
    pub arrival_date: NaiveDate,

    /// Departure date.
    pub departure_date: NaiveDate,

    /// Length of stay in nights.
    pub duration: u32,

    /// Number of adults.
    pub amount_adults: u32,
    /// Number of children.
    pub amount_children: u32,
    /// Number of babies.
    pub amount_babies: u32,
    /// Number of dogs.
    pub amount_dogs: u32,

    /// Booking status as reported by the API (e.g. `ACCEPTED`, `CANCELLED`).
    pub status: String,

    /// Free-text remark left by the customer.
    #[serde(default)]
    pub customer_comment: Option<String>,

    /// Rent owed to the partner.
    pub rental_sum: f64,

    /// Total travel sum including costs and surcharges.
    pub travel_sum: f64,

    /// When the booking was made.
    pub created_at: DateTime<Utc>,

    /// When the booking last changed.
    pub updated_at: DateTime<Utc>,

    /// The booked unit (ID only).
    pub rental_unit: BookingRentalUnit,

    /// Price lines as presented to the partner, in order.
    pub partner_price_lines: Vec<PriceLine>,

    /// The order this booking belongs to.
    pub order: Order,
}

/// Reference to the rental unit of a booking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingRentalUnit {
    /// The rental unit ID.
    #[serde(deserialize_with = "super::id::deserialize")]
    pub id: String,
}

/// One line of a booking's price breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceLine {
    /// Price line category (e.g. `CHARGED_IN_ADVANCE`).
    pub category: String,

    /// Description shown on the line.
    pub label: String,

    /// Price per unit, when the line has one.
    #[serde(default)]
    pub unit_price: Option<f64>,

    /// Quantity or multiplier description (e.g. `7 nights`).
    #[serde(default)]
    pub modifier: Option<String>,

    /// Total of the line.
    pub total_price: f64,
}

/// The customer order a booking belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// The order ID.
    #[serde(deserialize_with = "super::id::deserialize")]
    pub id: String,

    /// Language of the customer (e.g. `nl`).
    #[serde(default)]
    pub locale: Option<String>,

    /// Customer first name.
    #[serde(default)]
    pub customer_first_name: Option<String>,

    /// Surname prefix such as `van der`.
    #[serde(default)]
    pub customer_infix: Option<String>,

    /// Customer last name.
    #[serde(default)]
    pub customer_last_name: Option<String>,

    /// Customer phone number.
    #[serde(default)]
    pub customer_phone_number: Option<String>,

    /// Customer email address.
    #[serde(default)]
    pub customer_email: Option<String>,

    /// Customer postal address.
    #[serde(default)]
    pub customer_address: Option<CustomerAddress>,
}

impl Order {
    /// Returns the customer's full name, joining first name, infix and last
    /// name with single spaces and skipping empty parts.
    #[must_use]
    pub fn customer_name(&self) -> String {
        [
            &self.customer_first_name,
            &self.customer_infix,
            &self.customer_last_name,
        ]
        .iter()
        .filter_map(|part| part.as_deref())
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// Postal address of a customer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerAddress {
    /// Street name.
    #[serde(default)]
    pub street: Option<String>,

    /// House number including any addition.
    #[serde(default)]
    pub number: Option<String>,

    /// Postal code.
    #[serde(default)]
    pub postal_code: Option<String>,

    /// City.
    #[serde(default)]
    pub city: Option<String>,

    /// ISO 3166-1 alpha-2 country code.
    #[serde(default)]
    pub country_code: Option<String>,

    /// Country name in the customer's language.
    #[serde(default)]
    pub country_name: Option<String>,
}
