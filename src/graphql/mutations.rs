//! Mutation documents.
//!
//! Every mutation declares one required `$input` variable of the operation's
//! input type and passes it as the root field's `input` argument. The input
//! object itself travels in the request's `variables`, never inlined into the
//! document text.

use chrono::NaiveDate;
use serde::Serialize;

use crate::graphql::{Field, Operation, Value, VariableDefinition, DATE_FORMAT};
use crate::models::{AllotmentCollection, TripPricingCollection};

/// Input type of `createOrReplaceAllotments`.
pub const ALLOTMENTS_INPUT_TYPE: &str = "CreateOrReplaceAllotmentsInput";

/// Input type of `createOrReplaceTripPricings`.
pub const TRIP_PRICINGS_INPUT_TYPE: &str = "CreateOrReplaceTripPricingsInput";

/// Input type of `deleteTrips`.
pub const DELETE_TRIPS_INPUT_TYPE: &str = "DeleteTripsInput";

/// Fields selected on each returned trip pricing.
pub const TRIP_PRICING_FIELDS: [&str; 5] = [
    "date",
    "duration",
    "price",
    "minimumStayPrice",
    "extraPersonPrice",
];

/// `{"rentalUnitId": ..., <collection fields>}`
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RentalUnitInput<'a, T: Serialize> {
    rental_unit_id: u64,
    #[serde(flatten)]
    payload: &'a T,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DeleteTripsInput {
    rental_unit_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration: Option<u32>,
}

fn input_mutation<I: Serialize>(
    name: &'static str,
    input_type: &str,
    root: Field,
    input: &I,
) -> Result<Operation, serde_json::Error> {
    let variables = serde_json::json!({ "input": serde_json::to_value(input)? });

    Ok(Operation::mutation(
        name,
        vec![VariableDefinition::new("input", input_type, true)],
        root.argument("input", Value::variable("input")),
        variables,
    ))
}

/// Replaces the allotments of a rental unit for the dates in `allotments`.
///
/// # Errors
///
/// Returns a [`serde_json::Error`] if the input cannot be encoded.
pub fn create_or_replace_allotments(
    rental_unit_id: u64,
    allotments: &AllotmentCollection,
) -> Result<Operation, serde_json::Error> {
    input_mutation(
        "createOrReplaceAllotments",
        ALLOTMENTS_INPUT_TYPE,
        Field::new("createOrReplaceAllotments")
            .nested(Field::new("allotments").fields(["amount", "date"])),
        &RentalUnitInput {
            rental_unit_id,
            payload: allotments,
        },
    )
}

/// Replaces the trip pricings of a rental unit for the trips in `trip_pricings`.
///
/// # Errors
///
/// Returns a [`serde_json::Error`] if the input cannot be encoded.
pub fn create_or_replace_trip_pricings(
    rental_unit_id: u64,
    trip_pricings: &TripPricingCollection,
) -> Result<Operation, serde_json::Error> {
    input_mutation(
        "createOrReplaceTripPricings",
        TRIP_PRICINGS_INPUT_TYPE,
        Field::new("createOrReplaceTripPricings")
            .nested(Field::new("tripPricings").fields(TRIP_PRICING_FIELDS)),
        &RentalUnitInput {
            rental_unit_id,
            payload: trip_pricings,
        },
    )
}

/// Deletes trips of a rental unit, optionally narrowed to an arrival date
/// and/or a duration.
///
/// A `duration` of `Some(0)` is sent as `0`; only `None` leaves it out.
///
/// # Errors
///
/// Returns a [`serde_json::Error`] if the input cannot be encoded.
pub fn delete_trips(
    rental_unit_id: u64,
    date: Option<NaiveDate>,
    duration: Option<u32>,
) -> Result<Operation, serde_json::Error> {
    input_mutation(
        "deleteTrips",
        DELETE_TRIPS_INPUT_TYPE,
        Field::new("deleteTrips").field("message"),
        &DeleteTripsInput {
            rental_unit_id,
            date: date.map(|date| date.format(DATE_FORMAT).to_string()),
            duration,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Allotment, TripPricing};
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_allotments_document_and_variables() {
        let collection: AllotmentCollection = vec![
            Allotment::new(date(2020, 1, 1), 3),
            Allotment::new(date(2020, 1, 2), 0),
        ]
        .into();

        let operation = create_or_replace_allotments(301, &collection).unwrap();

        assert_eq!(
            operation.document().to_string(),
            "mutation($input: CreateOrReplaceAllotmentsInput!) { \
             createOrReplaceAllotments(input: $input) { allotments { amount date } } }"
        );
        assert_eq!(
            operation.variables(),
            &json!({"input": {
                "rentalUnitId": 301,
                "allotments": [
                    {"date": "2020-01-01", "amount": 3},
                    {"date": "2020-01-02", "amount": 0}
                ]
            }})
        );
    }

    #[test]
    fn test_trip_pricings_selects_optional_prices() {
        let collection: TripPricingCollection =
            vec![TripPricing::new(date(2020, 7, 4), 7, 650.0)].into();

        let operation = create_or_replace_trip_pricings(301, &collection).unwrap();
        let root = operation.document().root();

        assert_eq!(root.name(), "createOrReplaceTripPricings");
        assert_eq!(
            root.child("tripPricings").unwrap().selected_names(),
            TRIP_PRICING_FIELDS.to_vec()
        );
        assert_eq!(
            operation.variables()["input"],
            json!({
                "rentalUnitId": 301,
                "tripPricings": [{"date": "2020-07-04", "duration": 7, "price": 650.0}]
            })
        );
    }

    #[test]
    fn test_delete_trips_formats_date() {
        let operation = delete_trips(301, Some(date(2020, 3, 9)), Some(7)).unwrap();

        assert_eq!(
            operation.document().to_string(),
            "mutation($input: DeleteTripsInput!) { deleteTrips(input: $input) { message } }"
        );
        assert_eq!(
            operation.variables(),
            &json!({"input": {"rentalUnitId": 301, "date": "2020-03-09", "duration": 7}})
        );
    }

    #[test]
    fn test_delete_trips_omits_absent_filters() {
        let operation = delete_trips(301, None, None).unwrap();
        assert_eq!(operation.variables(), &json!({"input": {"rentalUnitId": 301}}));
    }

    #[test]
    fn test_delete_trips_sends_zero_duration() {
        let operation = delete_trips(301, None, Some(0)).unwrap();
        assert_eq!(operation.variables()["input"]["duration"], 0);
    }
}
