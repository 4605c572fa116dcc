//! Integration tests for the Google Directions client (wiremock-based)

use domain::GeoPoint;
use secrecy::SecretString;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_directions::{
    DirectionsClient, DirectionsConfig, DirectionsError, GoogleDirectionsClient,
};

fn config_for_mock(base_url: &str) -> DirectionsConfig {
    DirectionsConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
        api_key: Some(SecretString::from("test-key")),
    }
}

fn downtown() -> GeoPoint {
    GeoPoint::new(43.6426, -79.3871).unwrap()
}

fn uptown() -> GeoPoint {
    GeoPoint::new(43.7731, -79.2578).unwrap()
}

const fn sample_directions_json() -> &'static str {
    r#"{
        "status": "OK",
        "routes": [{
            "legs": [{
                "distance": {"text": "2.5 km", "value": 2500},
                "duration": {"text": "8 mins", "value": 480},
                "start_location": {"lat": 43.6426, "lng": -79.3871},
                "end_location": {"lat": 43.6532, "lng": -79.3832},
                "steps": [
                    {
                        "start_location": {"lat": 43.6426, "lng": -79.3871},
                        "end_location": {"lat": 43.6480, "lng": -79.3850}
                    },
                    {
                        "start_location": {"lat": 43.6480, "lng": -79.3850},
                        "end_location": {"lat": 43.6532, "lng": -79.3832}
                    }
                ]
            }]
        }]
    }"#
}

#[tokio::test]
async fn test_fetch_route_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/maps/api/directions/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_directions_json()))
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let client = GoogleDirectionsClient::new(&config).unwrap();

    let route = client.fetch_route(downtown(), uptown()).await.unwrap();
    assert_eq!(route.points.len(), 3);
    assert_eq!(route.distance_label(), "2.5 km");
    assert_eq!(route.duration_label(), "8 min");
}

#[tokio::test]
async fn test_fetch_route_sends_expected_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/maps/api/directions/json"))
        .and(query_param("origin", "43.6426,-79.3871"))
        .and(query_param("destination", "43.7731,-79.2578"))
        .and(query_param("mode", "driving"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_directions_json()))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let client = GoogleDirectionsClient::new(&config).unwrap();

    client.fetch_route(downtown(), uptown()).await.unwrap();
}

#[tokio::test]
async fn test_fetch_route_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/maps/api/directions/json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let client = GoogleDirectionsClient::new(&config).unwrap();

    let err = client.fetch_route(downtown(), uptown()).await.unwrap_err();
    assert!(matches!(err, DirectionsError::RequestFailed(_)));
    assert!(err.is_retryable());
    assert_eq!(err.to_string(), "API error: 500");
}

#[tokio::test]
async fn test_fetch_route_request_denied() {
    let server = MockServer::start().await;

    let body = r#"{
        "status": "REQUEST_DENIED",
        "routes": [],
        "error_message": "The provided API key is invalid."
    }"#;

    Mock::given(method("GET"))
        .and(path("/maps/api/directions/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let client = GoogleDirectionsClient::new(&config).unwrap();

    let err = client.fetch_route(downtown(), uptown()).await.unwrap_err();
    match err {
        DirectionsError::Api { status, message } => {
            assert_eq!(status, "REQUEST_DENIED");
            assert_eq!(message, "The provided API key is invalid.");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_route_zero_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/maps/api/directions/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"status": "ZERO_RESULTS", "routes": []}"#),
        )
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let client = GoogleDirectionsClient::new(&config).unwrap();

    let err = client.fetch_route(downtown(), uptown()).await.unwrap_err();
    assert!(matches!(err, DirectionsError::NoRouteFound));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_is_healthy_when_reachable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/maps/api/directions/json"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let client = GoogleDirectionsClient::new(&config).unwrap();

    // Reachability only; a 400 without query params still proves the host is up.
    assert!(client.is_healthy().await);
}
