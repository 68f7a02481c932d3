//! # Travelbase API Rust SDK
//!
//! A Rust SDK for the Travelbase partner GraphQL API, providing type-safe
//! configuration, a GraphQL document builder and typed access to partners,
//! accommodations, rental units, bookings, allotments and trip pricings.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`TravelbaseConfig`] and [`TravelbaseConfigBuilder`]
//! - Validated newtypes for the endpoint and API token
//! - Fixed, tested GraphQL documents for every operation via [`graphql`]
//! - Typed results in [`models`], with dates as [`chrono::NaiveDate`]
//! - An async facade, [`TravelbaseClient`], performing one request per call
//!
//! ## Quick Start
//!
//! ```rust
//! use travelbase_api::{ApiToken, Endpoint, TravelbaseConfig};
//!
//! let config = TravelbaseConfig::builder()
//!     .endpoint(Endpoint::new("https://api.travelbase.example/graphql").unwrap())
//!     .api_token(ApiToken::new("your-api-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.endpoint().host_name(), "api.travelbase.example");
//! ```
//!
//! Credentials can also come from the environment. Explicit values win; only
//! `None` falls back to the environment:
//!
//! ```rust,ignore
//! use travelbase_api::TravelbaseClient;
//!
//! // TRAVELBASE_GRAPHQL_ENDPOINT and TRAVELBASE_GRAPHQL_APIKEY
//! // (or TOR_GRAPHQL_ENDPOINT and TOR_GRAPHQL_APIKEY)
//! let client = TravelbaseClient::from_env()?;
//!
//! // Explicit endpoint, token from the environment
//! let client = TravelbaseClient::with_credentials(Some("https://api.example.com/graphql"), None)?;
//! ```
//!
//! ## Reading Bookings
//!
//! ```rust,ignore
//! use chrono::NaiveDate;
//! use travelbase_api::{BookingFilter, TravelbaseClient};
//!
//! let client = TravelbaseClient::from_env()?;
//!
//! let filter = BookingFilter::new()
//!     .start_date(NaiveDate::from_ymd_opt(2020, 6, 1).unwrap())
//!     .rental_unit_ids([301]);
//!
//! let mut cursor: Option<String> = None;
//! loop {
//!     let page = client.get_all_bookings(5, Some(50), cursor.as_deref(), &filter).await?;
//!     for booking in page.bookings() {
//!         println!("{} arrives {}", booking.number, booking.arrival_date);
//!     }
//!     match page.next_cursor() {
//!         Some(next) => cursor = Some(next.to_string()),
//!         None => break,
//!     }
//! }
//! ```
//!
//! ## Updating Availability
//!
//! ```rust,ignore
//! use chrono::NaiveDate;
//! use travelbase_api::models::{Allotment, AllotmentCollection};
//!
//! let allotments: AllotmentCollection = vec![
//!     Allotment::new(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(), 3),
//!     Allotment::new(NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(), 0),
//! ]
//! .into();
//!
//! let stored = client.create_or_replace_allotments(301, &allotments).await?;
//! let message = client.delete_trips(301, NaiveDate::from_ymd_opt(2020, 1, 1), Some(7)).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes and configuration validate on construction
//! - **Thread-safe**: All client types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **No hidden retries**: Each call is one request; every failure is returned

pub mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod graphql;
pub mod models;
pub mod responses;

// Re-export public types at crate root for convenience
pub use client::TravelbaseClient;
pub use config::{
    ApiToken, Endpoint, TravelbaseConfig, TravelbaseConfigBuilder, API_TOKEN_ENV_VAR,
    ENDPOINT_ENV_VAR, LEGACY_API_TOKEN_ENV_VAR, LEGACY_ENDPOINT_ENV_VAR,
};
pub use error::{ConfigError, TravelbaseError};

// Re-export transport types
pub use clients::{
    DeserializationError, GraphqlClient, GraphqlError, HttpClient, HttpResponseError,
    TransportError,
};

// Re-export query inputs and models
pub use graphql::{BookingFilter, DEFAULT_LIMIT};
pub use models::{
    Accommodation, Allotment, AllotmentCollection, Booking, BookingConnection, Partner,
    RentalUnit, TripPricing, TripPricingCollection,
};
