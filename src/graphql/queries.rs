//! Read-only query documents.
//!
//! Each function returns a ready-to-execute [`Operation`]:
//!
//! | Function                       | Root field                                   |
//! |--------------------------------|----------------------------------------------|
//! | [`partners`]                   | `partners`                                   |
//! | [`partner`]                    | `partner(id)`                                |
//! | [`upcoming_bookings`]          | `partner(id) { upcomingBookings(...) }`      |
//! | [`recently_updated_bookings`]  | `partner(id) { recentlyUpdatedBookings(...) }` |
//! | [`all_bookings`]               | `partner(id) { allBookings(...) }`           |
//! | [`accommodation`]              | `accommodation(id)`                          |
//! | [`rental_unit`]                | `rentalUnit(id)`                             |

use chrono::NaiveDate;

use crate::graphql::{Field, Operation};

/// Page size used when the caller does not pass one.
pub const DEFAULT_LIMIT: u32 = 10;

/// Fields selected for every rental unit.
pub const RENTAL_UNIT_FIELDS: [&str; 7] = [
    "id",
    "name",
    "code",
    "enabled",
    "type",
    "maxAllotment",
    "includedOccupancy",
];

/// Leaf fields selected for every accommodation.
pub const ACCOMMODATION_FIELDS: [&str; 3] = ["id", "enabled", "name"];

/// Leaf fields selected for every partner.
pub const PARTNER_FIELDS: [&str; 3] = ["id", "enabled", "companyName"];

/// Leaf fields selected for every booking node.
pub const BOOKING_FIELDS: [&str; 15] = [
    "id",
    "number",
    "arrivalDate",
    "departureDate",
    "duration",
    "amountAdults",
    "amountChildren",
    "amountBabies",
    "amountDogs",
    "status",
    "customerComment",
    "rentalSum",
    "travelSum",
    "createdAt",
    "updatedAt",
];

/// Fields selected for every booking price line.
pub const PRICE_LINE_FIELDS: [&str; 5] = ["category", "label", "unitPrice", "modifier", "totalPrice"];

/// Leaf fields selected for every booking order.
pub const ORDER_FIELDS: [&str; 7] = [
    "id",
    "locale",
    "customerFirstName",
    "customerInfix",
    "customerLastName",
    "customerPhoneNumber",
    "customerEmail",
];

/// Fields selected for every customer address.
pub const ADDRESS_FIELDS: [&str; 6] = [
    "street",
    "number",
    "postalCode",
    "city",
    "countryCode",
    "countryName",
];

/// Fields selected for pagination state.
pub const PAGE_INFO_FIELDS: [&str; 4] = ["hasNextPage", "hasPreviousPage", "startCursor", "endCursor"];

/// Optional filters for [`all_bookings`].
///
/// Every filter is optional; unset filters are not sent.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use travelbase_api::BookingFilter;
///
/// let filter = BookingFilter::new()
///     .start_date(NaiveDate::from_ymd_opt(2020, 6, 1).unwrap())
///     .search_query("Jansen")
///     .rental_unit_ids([301, 302]);
///
/// assert_eq!(filter.rental_unit_ids, vec![301, 302]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingFilter {
    /// Only bookings arriving on or after this date.
    pub start_date: Option<NaiveDate>,
    /// Only bookings arriving on or before this date.
    pub end_date: Option<NaiveDate>,
    /// Free-text search (booking number, customer name, ...).
    pub search_query: Option<String>,
    /// Only bookings of these rental units. Empty means all.
    pub rental_unit_ids: Vec<u64>,
}

impl BookingFilter {
    /// Creates an empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date.
    #[must_use]
    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Sets the end date.
    #[must_use]
    pub fn end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Sets the free-text search.
    #[must_use]
    pub fn search_query(mut self, query: impl Into<String>) -> Self {
        self.search_query = Some(query.into());
        self
    }

    /// Sets the rental unit IDs to filter on.
    #[must_use]
    pub fn rental_unit_ids(mut self, ids: impl IntoIterator<Item = u64>) -> Self {
        self.rental_unit_ids = ids.into_iter().collect();
        self
    }
}

fn rental_units() -> Field {
    Field::new("rentalUnits").fields(RENTAL_UNIT_FIELDS)
}

fn with_accommodation_selection(field: Field) -> Field {
    field.fields(ACCOMMODATION_FIELDS).nested(rental_units())
}

fn with_partner_selection(field: Field) -> Field {
    field
        .fields(PARTNER_FIELDS)
        .nested(with_accommodation_selection(Field::new("accommodations")))
}

fn with_booking_connection_selection(field: Field) -> Field {
    let node = Field::new("node")
        .fields(BOOKING_FIELDS)
        .nested(Field::new("rentalUnit").field("id"))
        .nested(Field::new("partnerPriceLines").fields(PRICE_LINE_FIELDS))
        .nested(
            Field::new("order")
                .fields(ORDER_FIELDS)
                .nested(Field::new("customerAddress").fields(ADDRESS_FIELDS)),
        );

    field
        .field("totalCount")
        .nested(Field::new("pageInfo").fields(PAGE_INFO_FIELDS))
        .nested(Field::new("edges").field("cursor").nested(node))
}

/// Builds the paging arguments shared by every booking connection.
fn paged(name: &str, limit: u32, cursor: Option<&str>) -> Field {
    Field::new(name)
        .argument("first", limit)
        .optional_argument("after", cursor.filter(|c| !c.is_empty()))
}

fn bookings_under_partner(
    operation: &'static str,
    partner_id: u64,
    connection: Field,
) -> Operation {
    Operation::query(
        operation,
        Field::new("partner")
            .argument("id", partner_id)
            .nested(with_booking_connection_selection(connection)),
    )
}

/// All partners accessible with the token, with accommodations and rental units.
#[must_use]
pub fn partners() -> Operation {
    Operation::query("partners", with_partner_selection(Field::new("partners")))
}

/// A single partner with accommodations and rental units.
#[must_use]
pub fn partner(id: u64) -> Operation {
    Operation::query(
        "partner",
        with_partner_selection(Field::new("partner").argument("id", id)),
    )
}

/// Upcoming bookings of a partner.
#[must_use]
pub fn upcoming_bookings(partner_id: u64, limit: u32, cursor: Option<&str>) -> Operation {
    bookings_under_partner(
        "upcomingBookings",
        partner_id,
        paged("upcomingBookings", limit, cursor),
    )
}

/// Recently updated bookings of a partner.
#[must_use]
pub fn recently_updated_bookings(partner_id: u64, limit: u32, cursor: Option<&str>) -> Operation {
    bookings_under_partner(
        "recentlyUpdatedBookings",
        partner_id,
        paged("recentlyUpdatedBookings", limit, cursor),
    )
}

/// All bookings of a partner, optionally filtered.
#[must_use]
pub fn all_bookings(
    partner_id: u64,
    limit: u32,
    cursor: Option<&str>,
    filter: &BookingFilter,
) -> Operation {
    let search_query = filter
        .search_query
        .as_deref()
        .filter(|query| !query.is_empty());
    let rental_unit_ids =
        Some(filter.rental_unit_ids.clone()).filter(|ids| !ids.is_empty());

    let connection = paged("allBookings", limit, cursor)
        .optional_argument("startDate", filter.start_date)
        .optional_argument("endDate", filter.end_date)
        .optional_argument("searchQuery", search_query)
        .optional_argument("rentalUnitIds", rental_unit_ids);

    bookings_under_partner("allBookings", partner_id, connection)
}

/// A single accommodation with its rental units.
#[must_use]
pub fn accommodation(id: u64) -> Operation {
    Operation::query(
        "accommodation",
        with_accommodation_selection(Field::new("accommodation").argument("id", id)),
    )
}

/// A single rental unit.
#[must_use]
pub fn rental_unit(id: u64) -> Operation {
    Operation::query(
        "rentalUnit",
        Field::new("rentalUnit")
            .argument("id", id)
            .fields(RENTAL_UNIT_FIELDS),
    )
}
