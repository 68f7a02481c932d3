//! Typed `data` payloads for each operation.
//!
//! Every struct here mirrors the shape of one operation's `data` object and
//! is only an intermediate step; [`TravelbaseClient`](crate::TravelbaseClient)
//! unwraps them and returns the inner value.

use serde::Deserialize;

use crate::models::{
    Accommodation, AllotmentCollection, BookingConnection, Partner, RentalUnit,
    TripPricingCollection,
};

/// `data` of the `partners` query.
#[derive(Debug, Clone, Deserialize)]
pub struct PartnersData {
    /// Every partner the token gives access to.
    pub partners: Vec<Partner>,
}

/// `data` of the `partner` query.
#[derive(Debug, Clone, Deserialize)]
pub struct PartnerData {
    /// The requested partner.
    pub partner: Partner,
}

/// `data` of the `upcomingBookings` query.
#[derive(Debug, Clone, Deserialize)]
pub struct UpcomingBookingsData {
    /// The partner the bookings belong to.
    pub partner: UpcomingBookingsPartner,
}

/// Partner object selected by the `upcomingBookings` query.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingBookingsPartner {
    /// The requested page of upcoming bookings.
    pub upcoming_bookings: BookingConnection,
}

/// `data` of the `recentlyUpdatedBookings` query.
#[derive(Debug, Clone, Deserialize)]
pub struct RecentlyUpdatedBookingsData {
    /// The partner the bookings belong to.
    pub partner: RecentlyUpdatedBookingsPartner,
}

/// Partner object selected by the `recentlyUpdatedBookings` query.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentlyUpdatedBookingsPartner {
    /// The requested page of recently updated bookings.
    pub recently_updated_bookings: BookingConnection,
}

/// `data` of the `allBookings` query.
#[derive(Debug, Clone, Deserialize)]
pub struct AllBookingsData {
    /// The partner the bookings belong to.
    pub partner: AllBookingsPartner,
}

/// Partner object selected by the `allBookings` query.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllBookingsPartner {
    /// The requested page of bookings.
    pub all_bookings: BookingConnection,
}

/// `data` of the `accommodation` query.
#[derive(Debug, Clone, Deserialize)]
pub struct AccommodationData {
    /// The requested accommodation.
    pub accommodation: Accommodation,
}

/// `data` of the `rentalUnit` query.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalUnitData {
    /// The requested rental unit.
    pub rental_unit: RentalUnit,
}

/// `data` of the `createOrReplaceAllotments` mutation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrReplaceAllotmentsData {
    /// The allotments as stored by the server.
    pub create_or_replace_allotments: AllotmentCollection,
}

/// `data` of the `createOrReplaceTripPricings` mutation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrReplaceTripPricingsData {
    /// The trip pricings as stored by the server.
    pub create_or_replace_trip_pricings: TripPricingCollection,
}

/// `data` of the `deleteTrips` mutation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTripsData {
    /// Outcome of the delete.
    pub delete_trips: DeleteTripsPayload,
}

/// Result of `deleteTrips`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteTripsPayload {
    /// Confirmation message from the server; `null` still means success.
    pub message: Option<String>,
}
