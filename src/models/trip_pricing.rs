//! Trip pricing records.
//!
//! A trip pricing is the price of a stay starting on `date` and lasting
//! `duration` nights.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The price of one trip (arrival date + duration).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TripPricing {
    /// The arrival date, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,

    /// Length of stay in nights.
    pub duration: u32,

    /// Price of the trip.
    pub price: f64,

    /// Price when booked as a minimum stay.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_stay_price: Option<f64>,

    /// Surcharge per person above the included occupancy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_person_price: Option<f64>,
}

impl TripPricing {
    /// Creates a trip pricing without the optional surcharges.
    #[must_use]
    pub fn new(date: NaiveDate, duration: u32, price: f64) -> Self {
        Self {
            date,
            duration,
            price,
            minimum_stay_price: None,
            extra_person_price: None,
        }
    }

    /// Sets the minimum stay price.
    #[must_use]
    pub fn with_minimum_stay_price(mut self, price: f64) -> Self {
        self.minimum_stay_price = Some(price);
        self
    }

    /// Sets the extra person price.
    #[must_use]
    pub fn with_extra_person_price(mut self, price: f64) -> Self {
        self.extra_person_price = Some(price);
        self
    }
}

/// An ordered sequence of trip pricings.
///
/// Serializes as `{"tripPricings": [...]}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TripPricingCollection {
    /// The trip pricings, in order.
    pub trip_pricings: Vec<TripPricing>,
}

impl TripPricingCollection {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            trip_pricings: Vec::new(),
        }
    }

    /// Appends a trip pricing.
    pub fn push(&mut self, pricing: TripPricing) {
        self.trip_pricings.push(pricing);
    }

    /// Returns the number of trip pricings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trip_pricings.len()
    }

    /// Returns `true` if the collection holds no trip pricings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trip_pricings.is_empty()
    }

    /// Returns an iterator over the trip pricings.
    pub fn iter(&self) -> std::slice::Iter<'_, TripPricing> {
        self.trip_pricings.iter()
    }

    /// Builds a collection from plain key-value records such as
    /// `{"date": "2020-01-01", "duration": 7, "price": 650.0}`.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if any record lacks a field or holds a
    /// value of the wrong type.
    pub fn from_records(records: &[serde_json::Value]) -> Result<Self, serde_json::Error> {
        records
            .iter()
            .map(TripPricing::deserialize)
            .collect::<Result<Vec<_>, _>>()
            .map(Self::from)
    }
}

impl From<Vec<TripPricing>> for TripPricingCollection {
    fn from(trip_pricings: Vec<TripPricing>) -> Self {
        Self { trip_pricings }
    }
}

impl FromIterator<TripPricing> for TripPricingCollection {
    fn from_iter<I: IntoIterator<Item = TripPricing>>(iter: I) -> Self {
        Self {
            trip_pricings: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for TripPricingCollection {
    type Item = TripPricing;
    type IntoIter = std::vec::IntoIter<TripPricing>;

    fn into_iter(self) -> Self::IntoIter {
        self.trip_pricings.into_iter()
    }
}

impl<'a> IntoIterator for &'a TripPricingCollection {
    type Item = &'a TripPricing;
    type IntoIter = std::slice::Iter<'a, TripPricing>;

    fn into_iter(self) -> Self::IntoIter {
        self.trip_pricings.iter()
    }
}
