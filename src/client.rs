//! The Travelbase partner API facade.
//!
//! [`TravelbaseClient`] exposes one async method per API operation. Each call
//! builds the operation's document, performs exactly one round trip and maps
//! the response into the domain model. Nothing is retried or cached.

use chrono::NaiveDate;

use crate::clients::{GraphqlClient, TransportError};
use crate::config::TravelbaseConfig;
use crate::error::{ConfigError, TravelbaseError};
use crate::graphql::{mutations, queries, BookingFilter, DEFAULT_LIMIT};
use crate::models::{
    Accommodation, AllotmentCollection, BookingConnection, Partner, RentalUnit,
    TripPricingCollection,
};
use crate::responses::{
    AccommodationData, AllBookingsData, CreateOrReplaceAllotmentsData,
    CreateOrReplaceTripPricingsData, DeleteTripsData, PartnerData, PartnersData,
    RecentlyUpdatedBookingsData, RentalUnitData, UpcomingBookingsData,
};

/// Client for the Travelbase partner GraphQL API.
///
/// # Example
///
/// ```rust,ignore
/// use travelbase_api::TravelbaseClient;
///
/// let client = TravelbaseClient::from_env()?;
///
/// for partner in client.get_partners().await? {
///     println!("{} ({} accommodations)", partner.company_name, partner.accommodations.len());
/// }
///
/// let page = client.get_upcoming_bookings(5, Some(25), None).await?;
/// if let Some(cursor) = page.next_cursor() {
///     let next = client.get_upcoming_bookings(5, Some(25), Some(cursor)).await?;
/// }
/// ```
///
/// # Thread Safety
///
/// `TravelbaseClient` is `Send + Sync`; share one instance across tasks.
#[derive(Debug)]
pub struct TravelbaseClient {
    graphql: GraphqlClient,
}

// Verify TravelbaseClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TravelbaseClient>();
};

impl TravelbaseClient {
    /// Creates a client from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the HTTP client cannot be created.
    pub fn new(config: TravelbaseConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            graphql: GraphqlClient::new(&config)?,
        })
    }

    /// Creates a client from `TRAVELBASE_GRAPHQL_ENDPOINT` and
    /// `TRAVELBASE_GRAPHQL_APIKEY`, or their `TOR_GRAPHQL_*` counterparts.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if either variable is unset or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(TravelbaseConfig::from_env()?)
    }

    /// Creates a client from explicit credentials, falling back to the
    /// environment for each one that is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a credential is missing from both sources
    /// or invalid. An explicit empty credential is invalid.
    pub fn with_credentials(
        endpoint: Option<&str>,
        api_token: Option<&str>,
    ) -> Result<Self, ConfigError> {
        Self::new(TravelbaseConfig::resolve(endpoint, api_token)?)
    }

    /// Returns the underlying GraphQL transport.
    #[must_use]
    pub const fn graphql(&self) -> &GraphqlClient {
        &self.graphql
    }

    /// Lists every partner the token gives access to.
    ///
    /// # Errors
    ///
    /// Returns [`TravelbaseError`] on transport or mapping failure.
    pub async fn get_partners(&self) -> Result<Vec<Partner>, TravelbaseError> {
        let data: PartnersData = self.graphql.execute_as(&queries::partners()).await?;
        Ok(data.partners)
    }

    /// Fetches one partner with its accommodations and rental units.
    ///
    /// # Errors
    ///
    /// Returns [`TravelbaseError::Deserialization`] if the partner does not
    /// exist, and [`TravelbaseError::Transport`] on transport failure.
    pub async fn get_partner(&self, id: u64) -> Result<Partner, TravelbaseError> {
        let data: PartnerData = self.graphql.execute_as(&queries::partner(id)).await?;
        Ok(data.partner)
    }

    /// Fetches a page of a partner's upcoming bookings.
    ///
    /// `limit` defaults to [`DEFAULT_LIMIT`]. Pass the previous page's
    /// [`next_cursor`](BookingConnection::next_cursor) as `cursor` to continue.
    ///
    /// # Errors
    ///
    /// Returns [`TravelbaseError`] on transport or mapping failure.
    pub async fn get_upcoming_bookings(
        &self,
        partner_id: u64,
        limit: Option<u32>,
        cursor: Option<&str>,
    ) -> Result<BookingConnection, TravelbaseError> {
        let operation =
            queries::upcoming_bookings(partner_id, limit.unwrap_or(DEFAULT_LIMIT), cursor);
        let data: UpcomingBookingsData = self.graphql.execute_as(&operation).await?;
        Ok(data.partner.upcoming_bookings)
    }

    /// Fetches a page of a partner's recently updated bookings.
    ///
    /// # Errors
    ///
    /// Returns [`TravelbaseError`] on transport or mapping failure.
    pub async fn get_recently_updated_bookings(
        &self,
        partner_id: u64,
        limit: Option<u32>,
        cursor: Option<&str>,
    ) -> Result<BookingConnection, TravelbaseError> {
        let operation = queries::recently_updated_bookings(
            partner_id,
            limit.unwrap_or(DEFAULT_LIMIT),
            cursor,
        );
        let data: RecentlyUpdatedBookingsData = self.graphql.execute_as(&operation).await?;
        Ok(data.partner.recently_updated_bookings)
    }

    /// Fetches a page of all of a partner's bookings, narrowed by `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`TravelbaseError`] on transport or mapping failure.
    pub async fn get_all_bookings(
        &self,
        partner_id: u64,
        limit: Option<u32>,
        cursor: Option<&str>,
        filter: &BookingFilter,
    ) -> Result<BookingConnection, TravelbaseError> {
        let operation =
            queries::all_bookings(partner_id, limit.unwrap_or(DEFAULT_LIMIT), cursor, filter);
        let data: AllBookingsData = self.graphql.execute_as(&operation).await?;
        Ok(data.partner.all_bookings)
    }

    /// Fetches one accommodation with its rental units.
    ///
    /// # Errors
    ///
    /// Returns [`TravelbaseError`] on transport or mapping failure.
    pub async fn get_accommodation(&self, id: u64) -> Result<Accommodation, TravelbaseError> {
        let data: AccommodationData = self.graphql.execute_as(&queries::accommodation(id)).await?;
        Ok(data.accommodation)
    }

    /// Fetches one rental unit.
    ///
    /// # Errors
    ///
    /// Returns [`TravelbaseError`] on transport or mapping failure.
    pub async fn get_rental_unit(&self, id: u64) -> Result<RentalUnit, TravelbaseError> {
        let data: RentalUnitData = self.graphql.execute_as(&queries::rental_unit(id)).await?;
        Ok(data.rental_unit)
    }

    /// Replaces allotments of a rental unit and returns the stored allotments.
    ///
    /// # Errors
    ///
    /// Returns [`TravelbaseError`] on encoding, transport or mapping failure.
    pub async fn create_or_replace_allotments(
        &self,
        rental_unit_id: u64,
        allotments: &AllotmentCollection,
    ) -> Result<AllotmentCollection, TravelbaseError> {
        let operation = mutations::create_or_replace_allotments(rental_unit_id, allotments)
            .map_err(TransportError::Encode)?;
        let data: CreateOrReplaceAllotmentsData = self.graphql.execute_as(&operation).await?;
        Ok(data.create_or_replace_allotments)
    }

    /// Replaces trip pricings of a rental unit and returns the stored pricings.
    ///
    /// # Errors
    ///
    /// Returns [`TravelbaseError`] on encoding, transport or mapping failure.
    pub async fn create_or_replace_trip_pricings(
        &self,
        rental_unit_id: u64,
        trip_pricings: &TripPricingCollection,
    ) -> Result<TripPricingCollection, TravelbaseError> {
        let operation = mutations::create_or_replace_trip_pricings(rental_unit_id, trip_pricings)
            .map_err(TransportError::Encode)?;
        let data: CreateOrReplaceTripPricingsData = self.graphql.execute_as(&operation).await?;
        Ok(data.create_or_replace_trip_pricings)
    }

    /// Deletes trips of a rental unit and returns the server's message, if
    /// it sent one.
    ///
    /// Without `date` and `duration` every trip of the unit is deleted.
    ///
    /// # Errors
    ///
    /// Returns [`TravelbaseError`] on encoding, transport or mapping failure.
    pub async fn delete_trips(
        &self,
        rental_unit_id: u64,
        date: Option<NaiveDate>,
        duration: Option<u32>,
    ) -> Result<Option<String>, TravelbaseError> {
        let operation = mutations::delete_trips(rental_unit_id, date, duration)
            .map_err(TransportError::Encode)?;
        let data: DeleteTripsData = self.graphql.execute_as(&operation).await?;
        Ok(data.delete_trips.message)
    }
}
