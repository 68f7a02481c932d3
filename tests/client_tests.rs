//! Integration tests for the Travelbase client facade.
//!
//! Every test runs the facade against a `wiremock` server standing in for the
//! GraphQL endpoint and asserts on both the outgoing request and the mapped
//! result.

use chrono::NaiveDate;
use serde_json::{json, Value};
use travelbase_api::models::{Allotment, AllotmentCollection, TripPricing, TripPricingCollection};
use travelbase_api::{
    ApiToken, BookingFilter, ConfigError, Endpoint, TransportError, TravelbaseClient,
    TravelbaseConfig, TravelbaseError,
};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_client(server: &MockServer) -> TravelbaseClient {
    let config = TravelbaseConfig::builder()
        .endpoint(Endpoint::new(format!("{}/graphql", server.uri())).unwrap())
        .api_token(ApiToken::new("partner-token").unwrap())
        .build()
        .unwrap();

    TravelbaseClient::new(config).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn booking_edge(id: u64, cursor: &str, arrival: &str) -> Value {
    json!({
        "cursor": cursor,
        "node": {
            "id": id,
            "number": format!("TB-{id}"),
            "arrivalDate": arrival,
            "departureDate": "2020-08-08",
            "duration": 7,
            "amountAdults": 2,
            "amountChildren": 0,
            "amountBabies": 0,
            "amountDogs": 0,
            "status": "ACCEPTED",
            "customerComment": "Late arrival",
            "rentalSum": 700,
            "travelSum": 745.5,
            "createdAt": "2020-05-01T10:00:00Z",
            "updatedAt": "2020-05-01T10:00:00Z",
            "rentalUnit": {"id": 301},
            "partnerPriceLines": [],
            "order": {
                "id": id + 1000,
                "locale": "de",
                "customerFirstName": "Jan",
                "customerInfix": null,
                "customerLastName": "Visser",
                "customerPhoneNumber": null,
                "customerEmail": null,
                "customerAddress": null
            }
        }
    })
}

/// Returns the JSON body of the single request the server received.
async fn received_body(server: &MockServer) -> Value {
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    serde_json::from_slice(&requests[0].body).unwrap()
}

fn query_text(body: &Value) -> &str {
    body["query"].as_str().unwrap()
}

// ============================================================================
// Bookings
// ============================================================================

#[tokio::test]
async fn test_upcoming_bookings_maps_connection_exactly() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"partner": {"upcomingBookings": {
                "totalCount": 7,
                "pageInfo": {
                    "hasNextPage": true,
                    "hasPreviousPage": false,
                    "startCursor": "YXJyYXk6MA==",
                    "endCursor": "YXJyYXk6MQ=="
                },
                "edges": [
                    booking_edge(11, "YXJyYXk6MA==", "2020-08-01"),
                    booking_edge(12, "YXJyYXk6MQ==", "2020-08-02")
                ]
            }}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let page = client.get_upcoming_bookings(5, Some(2), None).await.unwrap();

    assert_eq!(page.total_count, 7);
    assert!(page.page_info.has_next_page);
    assert!(!page.page_info.has_previous_page);
    assert_eq!(page.next_cursor(), Some("YXJyYXk6MQ=="));

    let bookings: Vec<_> = page.bookings().collect();
    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[0].id, "11");
    assert_eq!(bookings[0].arrival_date, date(2020, 8, 1));
    assert_eq!(bookings[0].customer_comment.as_deref(), Some("Late arrival"));
    assert_eq!(bookings[1].id, "12");
    assert_eq!(bookings[1].number, "TB-12");
    assert_eq!(bookings[1].order.customer_name(), "Jan Visser");

    let body = received_body(&server).await;
    assert!(query_text(&body).contains("partner(id: 5) { upcomingBookings(first: 2) {"));
    assert_eq!(body["variables"], json!({}));
}

#[tokio::test]
async fn test_all_bookings_sends_only_supplied_filters() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"partner": {"allBookings": {
                "totalCount": 0,
                "pageInfo": {"hasNextPage": false, "hasPreviousPage": true,
                             "startCursor": null, "endCursor": null},
                "edges": []
            }}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let filter = BookingFilter::new().end_date(date(2020, 12, 31));
    let page = client
        .get_all_bookings(5, None, Some("YXJyYXk6OQ=="), &filter)
        .await
        .unwrap();

    assert_eq!(page.total_count, 0);
    assert_eq!(page.next_cursor(), None);

    let body = received_body(&server).await;
    let query = query_text(&body);
    assert!(query.contains(
        "allBookings(first: 10, after: \"YXJyYXk6OQ==\", endDate: \"2020-12-31\") {"
    ));
    assert!(!query.contains("startDate"));
    assert!(!query.contains("searchQuery"));
    assert!(!query.contains("rentalUnitIds"));
    assert!(!query.contains("null"));
}

// ============================================================================
// Partners and inventory
// ============================================================================

#[tokio::test]
async fn test_get_partners_returns_hierarchy() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"partners": [{
                "id": "5",
                "enabled": true,
                "companyName": "Dune Parks",
                "accommodations": [{
                    "id": "10", "enabled": true, "name": "North",
                    "rentalUnits": [{
                        "id": "301", "name": "Beach house", "code": "BH",
                        "enabled": true, "type": "HOME",
                        "maxAllotment": 1, "includedOccupancy": 4
                    }]
                }]
            }]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let partners = create_client(&server).get_partners().await.unwrap();

    assert_eq!(partners.len(), 1);
    assert_eq!(partners[0].company_name, "Dune Parks");
    assert_eq!(partners[0].accommodations[0].rental_units[0].code, "BH");
}

#[tokio::test]
async fn test_missing_partner_is_deserialization_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let result = create_client(&server).get_partner(404).await;

    match result {
        Err(TravelbaseError::Deserialization(e)) => assert_eq!(e.operation, "partner"),
        other => panic!("Expected Deserialization error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_get_accommodation_maps_rental_units() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"accommodation": {
                "id": 10, "enabled": false, "name": "South", "rentalUnits": []
            }}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let accommodation = create_client(&server).get_accommodation(10).await.unwrap();

    assert_eq!(accommodation.id, "10");
    assert!(!accommodation.enabled);
    assert!(accommodation.rental_units.is_empty());
}

// ============================================================================
// Mutations
// ============================================================================

#[tokio::test]
async fn test_allotments_payload_is_sent_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "variables": {"input": {
                "rentalUnitId": 301,
                "allotments": [
                    {"date": "2020-01-01", "amount": 3},
                    {"date": "2020-01-02", "amount": 0}
                ]
            }}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"createOrReplaceAllotments": {"allotments": [
                {"amount": 3, "date": "2020-01-01"},
                {"amount": 0, "date": "2020-01-02"}
            ]}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let allotments: AllotmentCollection = vec![
        Allotment::new(date(2020, 1, 1), 3),
        Allotment::new(date(2020, 1, 2), 0),
    ]
    .into();

    let stored = create_client(&server)
        .create_or_replace_allotments(301, &allotments)
        .await
        .unwrap();

    assert_eq!(stored, allotments);

    let body = received_body(&server).await;
    assert!(query_text(&body)
        .starts_with("mutation($input: CreateOrReplaceAllotmentsInput!) {"));
}

#[tokio::test]
async fn test_trip_pricings_returns_stored_pricings() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"createOrReplaceTripPricings": {"tripPricings": [
                {"date": "2020-07-04", "duration": 7, "price": 650,
                 "minimumStayPrice": 600, "extraPersonPrice": null}
            ]}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let pricings: TripPricingCollection =
        vec![TripPricing::new(date(2020, 7, 4), 7, 650.0).with_minimum_stay_price(600.0)].into();

    let stored = create_client(&server)
        .create_or_replace_trip_pricings(301, &pricings)
        .await
        .unwrap();

    assert_eq!(stored, pricings);

    let body = received_body(&server).await;
    assert_eq!(body["variables"]["input"]["tripPricings"][0]["minimumStayPrice"], 600.0);
    assert!(body["variables"]["input"]["tripPricings"][0]
        .get("extraPersonPrice")
        .is_none());
}

#[tokio::test]
async fn test_delete_trips_formats_date() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "variables": {"input": {"rentalUnitId": 301, "date": "2020-03-09"}}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"deleteTrips": {"message": "2 trips deleted"}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let message = create_client(&server)
        .delete_trips(301, Some(date(2020, 3, 9)), None)
        .await
        .unwrap();

    assert_eq!(message.as_deref(), Some("2 trips deleted"));

    let body = received_body(&server).await;
    assert_eq!(
        body["variables"],
        json!({"input": {"rentalUnitId": 301, "date": "2020-03-09"}})
    );
}

#[tokio::test]
async fn test_delete_trips_accepts_null_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"deleteTrips": {"message": null}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let message = create_client(&server)
        .delete_trips(301, None, None)
        .await
        .unwrap();

    assert_eq!(message, None);
}

// ============================================================================
// Transport
// ============================================================================

#[tokio::test]
async fn test_bearer_token_and_json_headers_are_sent() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("Authorization", "Bearer partner-token"))
        .and(header("Accept", "application/json"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"rentalUnit": {
                "id": "301", "name": "Beach house", "code": "BH", "enabled": true,
                "type": "HOME", "maxAllotment": 1, "includedOccupancy": 4
            }}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let unit = create_client(&server).get_rental_unit(301).await.unwrap();
    assert_eq!(unit.name, "Beach house");
}

#[tokio::test]
async fn test_empty_body_is_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let result = create_client(&server).get_partners().await;

    assert!(matches!(
        result,
        Err(TravelbaseError::Transport(TransportError::EmptyBody))
    ));
}

#[tokio::test]
async fn test_whitespace_body_is_deserialization_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(" \n "))
        .expect(1)
        .mount(&server)
        .await;

    let result = create_client(&server).get_partners().await;

    assert!(matches!(result, Err(TravelbaseError::Deserialization(_))));
}

#[tokio::test]
async fn test_server_error_is_transport_error_with_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .expect(1)
        .mount(&server)
        .await;

    let result = create_client(&server).get_partner(5).await;

    match result {
        Err(TravelbaseError::Transport(TransportError::Response(e))) => {
            assert_eq!(e.code, 500);
            assert_eq!(e.message, "Internal Server Error");
        }
        other => panic!("Expected Response error, got: {other:?}"),
    }
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_missing_credentials_fail_before_any_request() {
    let result = TravelbaseConfig::resolve_with(None, None, |_| None);

    assert!(matches!(result, Err(ConfigError::MissingEndpoint { .. })));
}

#[test]
fn test_with_credentials_uses_explicit_values() {
    let client = TravelbaseClient::with_credentials(
        Some("https://api.travelbase.example/graphql"),
        Some("partner-token"),
    )
    .unwrap();

    assert_eq!(
        client.graphql().http_client().endpoint().host_name(),
        "api.travelbase.example"
    );
}
