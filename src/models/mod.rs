//! Typed records mirroring the Travelbase partner API schema.
//!
//! Records are built from response bodies and never mutated by the client.
//! Field names follow Rust conventions and map to the schema's camelCase
//! names via serde. Unknown fields in responses are ignored.
//!
//! - [`Partner`], [`Accommodation`], [`RentalUnit`]: the partner hierarchy
//! - [`Booking`] and [`BookingConnection`]: cursor-paginated bookings
//! - [`Allotment`] / [`AllotmentCollection`]: availability per date
//! - [`TripPricing`] / [`TripPricingCollection`]: prices per date and duration

mod allotment;
mod booking;
mod partner;
mod trip_pricing;

pub use allotment::{Allotment, AllotmentCollection};
pub use booking::{
    Booking, BookingConnection, BookingEdge, BookingRentalUnit, CustomerAddress, Order, PageInfo,
    PriceLine,
};
pub use partner::{Accommodation, Partner, RentalUnit};
pub use trip_pricing::{TripPricing, TripPricingCollection};

/// Serde helper for GraphQL `ID` fields.
///
/// The schema types IDs as `ID`, which servers may emit as either a JSON
/// string or a JSON number. Both are accepted and exposed as `String`.
pub(crate) mod id {
    use serde::de::{self, Deserializer, Visitor};
    use std::fmt;

    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string or integer ID")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_string<E: de::Error>(self, value: String) -> Result<String, E> {
            Ok(value)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<String, E> {
            Ok(value.to_string())
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(IdVisitor)
    }
}
