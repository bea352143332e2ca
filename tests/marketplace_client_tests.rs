//! Integration tests for the marketplace client.
//!
//! These tests run the full two-request flow against a local mock server
//! and inspect what actually went over the wire.

use std::num::NonZeroU32;
use std::time::Duration;

use serde_json::{json, Value};
use stockx_api::{
    ApiKey, EndpointUrl, GraphqlError, HttpError, MarketplaceClient, MarketplaceConfig,
    PriceLevelsQuery, PxAuthorization, TransactionType,
};
use wiremock::matchers::{header, header_exists, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

const GRAPHQL_PATH: &str = "/api/graphql";

/// Creates a configuration pointing both endpoints at the mock server.
fn create_test_config(server: &MockServer) -> MarketplaceConfig {
    MarketplaceConfig::builder()
        .api_key(ApiKey::new("test-api-key").unwrap())
        .px_authorization(PxAuthorization::new("test-px-token").unwrap())
        .graphql_url(EndpointUrl::new(format!("{}{GRAPHQL_PATH}", server.uri())).unwrap())
        .web_root(EndpointUrl::new(server.uri()).unwrap())
        .priming_timeout(Duration::from_millis(200))
        .request_timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

fn create_test_client(server: &MockServer) -> MarketplaceClient {
    MarketplaceClient::new(&create_test_config(server)).unwrap()
}

async fn mount_priming(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(response)
        .mount(server)
        .await;
}

async fn mount_graphql(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(response)
        .mount(server)
        .await;
}

async fn recorded(server: &MockServer) -> Vec<Request> {
    server.received_requests().await.unwrap_or_default()
}

fn methods(requests: &[Request]) -> Vec<String> {
    requests.iter().map(|r| r.method.to_string()).collect()
}

fn body_of(request: &Request) -> Value {
    serde_json::from_slice(&request.body).unwrap()
}

fn price_levels_body() -> Value {
    json!({
        "data": {
            "variant": {
                "__typename": "Variant",
                "market": {
                    "__typename": "Market",
                    "priceLevels": {
                        "__typename": "PriceLevelConnection",
                        "edges": [
                            {
                                "__typename": "PriceLevelEdge",
                                "node": {
                                    "__typename": "PriceLevel",
                                    "amount": 210,
                                    "count": 3,
                                    "variant": {
                                        "__typename": "Variant",
                                        "id": "abc-123",
                                        "traits": { "__typename": "VariantTraits", "size": "10" }
                                    }
                                }
                            }
                        ],
                        "pageInfo": {
                            "__typename": "PageInfo",
                            "page": 2,
                            "count": 1,
                            "total": 11,
                            "hasNextPage": false
                        }
                    }
                }
            }
        }
    })
}

// ============================================================================
// Request Shape Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_price_levels_sends_expected_variables() {
    let server = MockServer::start().await;
    mount_priming(&server, ResponseTemplate::new(200)).await;
    mount_graphql(&server, ResponseTemplate::new(200).set_body_json(json!({"data": null}))).await;

    let client = create_test_client(&server);
    let query = PriceLevelsQuery::builder("abc-123", TransactionType::Bid)
        .page(2)
        .build()
        .unwrap();
    client.fetch_price_levels(&query).await.unwrap();

    let requests = recorded(&server).await;
    assert_eq!(methods(&requests), ["GET", "POST"]);

    let body = body_of(&requests[1]);
    assert_eq!(
        body["variables"],
        json!({
            "product_uuid": "abc-123",
            "transactionType": "BID",
            "country": "US",
            "currency_code": "USD",
            "page": 2
        })
    );
    assert!(body["query"]
        .as_str()
        .unwrap()
        .contains("query GetVariantPriceLevels("));
}

#[tokio::test]
async fn test_fetch_price_levels_page_embeds_ask() {
    let server = MockServer::start().await;
    mount_priming(&server, ResponseTemplate::new(200)).await;
    mount_graphql(&server, ResponseTemplate::new(200).set_body_json(json!({"data": null}))).await;

    let client = create_test_client(&server);
    client
        .fetch_price_levels_page("abc-123", TransactionType::Ask, NonZeroU32::MIN)
        .await
        .unwrap();

    let requests = recorded(&server).await;
    let body = body_of(&requests[1]);
    assert_eq!(body["variables"]["transactionType"], "ASK");
    assert_eq!(body["variables"]["page"], 1);
}

#[tokio::test]
async fn test_search_by_gtin_sends_expected_variables() {
    let server = MockServer::start().await;
    mount_priming(&server, ResponseTemplate::new(200)).await;
    mount_graphql(&server, ResponseTemplate::new(200).set_body_json(json!({"data": {"variants": []}}))).await;

    let client = create_test_client(&server);
    client.search_by_gtin("012345678905").await.unwrap();

    let requests = recorded(&server).await;
    assert_eq!(methods(&requests), ["GET", "POST"]);

    let body = body_of(&requests[1]);
    assert_eq!(
        body["variables"],
        json!({
            "gtin": "012345678905",
            "currencyCode": "USD",
            "country": "US",
            "market": "US"
        })
    );
    assert!(body["query"]
        .as_str()
        .unwrap()
        .contains("query FetchVariantsFromGTIN("));
    assert_eq!(body.as_object().unwrap().len(), 2);
}

#[tokio::test]
async fn test_requests_carry_gateway_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("x-api-key", "test-api-key"))
        .and(header("x-px-authorization", "test-px-token"))
        .and(header("apollographql-client-name", "stockx-ios-prod"))
        .and(header("sec-fetch-mode", "cors"))
        .and(header_exists("user-agent"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(header("content-type", "application/json"))
        .and(header("x-api-key", "test-api-key"))
        .and(header("x-px-authorization", "test-px-token"))
        .and(header("apollographql-client-name", "stockx-ios-prod"))
        .and(header("origin", "https://stockx.com"))
        .and(header("sec-fetch-site", "same-site"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": null})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = client.search_by_gtin("012345678905").await;

    assert!(result.is_ok(), "headers did not match: {result:?}");
}

// ============================================================================
// Ordering Tests
// ============================================================================

#[tokio::test]
async fn test_every_call_primes_before_posting() {
    let server = MockServer::start().await;
    mount_priming(&server, ResponseTemplate::new(200)).await;
    mount_graphql(&server, ResponseTemplate::new(200).set_body_json(json!({"data": null}))).await;

    let client = create_test_client(&server);
    client
        .fetch_price_levels(&PriceLevelsQuery::new("abc-123", TransactionType::Bid))
        .await
        .unwrap();
    client.search_by_gtin(196_153_044_813_u64).await.unwrap();

    let requests = recorded(&server).await;
    assert_eq!(methods(&requests), ["GET", "POST", "GET", "POST"]);
    assert_eq!(requests[0].url.path(), "/");
    assert_eq!(requests[1].url.path(), GRAPHQL_PATH);
    assert_eq!(body_of(&requests[3])["variables"]["gtin"], "196153044813");
}

#[tokio::test]
async fn test_priming_cookies_are_sent_with_query() {
    let server = MockServer::start().await;
    mount_priming(
        &server,
        ResponseTemplate::new(200).insert_header("set-cookie", "_pxhd=abc123; Path=/"),
    )
    .await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(header("cookie", "_pxhd=abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": null})))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = client.search_by_gtin("012345678905").await;

    assert!(result.is_ok(), "cookie was not replayed: {result:?}");
}

// ============================================================================
// Response Handling Tests
// ============================================================================

#[tokio::test]
async fn test_successful_body_is_returned_unchanged() {
    let server = MockServer::start().await;
    mount_priming(&server, ResponseTemplate::new(200)).await;
    mount_graphql(&server, ResponseTemplate::new(200).set_body_json(price_levels_body())).await;

    let client = create_test_client(&server);
    let result = client
        .fetch_price_levels_page("abc-123", TransactionType::Bid, NonZeroU32::new(2).unwrap())
        .await
        .unwrap();

    assert_eq!(result, price_levels_body());
}

#[tokio::test]
async fn test_graphql_errors_in_200_body_are_returned() {
    let body = json!({
        "errors": [{ "message": "Variable \"$transactionType\" got invalid value" }],
        "data": null
    });

    let server = MockServer::start().await;
    mount_priming(&server, ResponseTemplate::new(200)).await;
    mount_graphql(&server, ResponseTemplate::new(200).set_body_json(body.clone())).await;

    let client = create_test_client(&server);
    let result = client.search_by_gtin("012345678905").await.unwrap();

    assert_eq!(result, body);
}

#[tokio::test]
async fn test_client_error_status_is_rejected_regardless_of_body() {
    let server = MockServer::start().await;
    mount_priming(&server, ResponseTemplate::new(200)).await;
    mount_graphql(
        &server,
        ResponseTemplate::new(403).set_body_json(json!({"data": {"variants": []}})),
    )
    .await;

    let client = create_test_client(&server);
    let result = client.search_by_gtin("012345678905").await;

    match result {
        Err(e @ GraphqlError::Http(HttpError::Response(_))) => {
            assert!(e.is_rejected());
            assert_eq!(e.status(), Some(403));
        }
        other => panic!("Expected rejected query, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_status_is_rejected() {
    let server = MockServer::start().await;
    mount_priming(&server, ResponseTemplate::new(200)).await;
    mount_graphql(
        &server,
        ResponseTemplate::new(503).set_body_string("upstream unavailable"),
    )
    .await;

    let client = create_test_client(&server);
    let err = client
        .fetch_price_levels(&PriceLevelsQuery::new("abc-123", TransactionType::Ask))
        .await
        .unwrap_err();

    assert!(err.is_rejected());
    assert_eq!(err.status(), Some(503));
    assert!(err.to_string().contains("upstream unavailable"));
}

#[tokio::test]
async fn test_non_json_body_is_a_decode_error() {
    let server = MockServer::start().await;
    mount_priming(&server, ResponseTemplate::new(200)).await;
    mount_graphql(
        &server,
        ResponseTemplate::new(200).set_body_raw(
            "<html><body>Please verify you are a human</body></html>",
            "text/html",
        ),
    )
    .await;

    let client = create_test_client(&server);
    let err = client.search_by_gtin("012345678905").await.unwrap_err();

    assert!(err.is_decode());
    match err {
        GraphqlError::Http(HttpError::Decode(decode)) => {
            assert_eq!(decode.code, 200);
            assert!(decode.content_type.starts_with("text/html"));
        }
        other => panic!("Expected decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_utf8_body_is_a_decode_error() {
    let mut body = br#"{"data":{"name":""#.to_vec();
    body.extend_from_slice(&[0xFF, 0xFE]);
    body.extend_from_slice(br#""}}"#);

    let server = MockServer::start().await;
    mount_priming(&server, ResponseTemplate::new(200)).await;
    mount_graphql(
        &server,
        ResponseTemplate::new(200).set_body_raw(body, "application/json"),
    )
    .await;

    let client = create_test_client(&server);
    let err = client.search_by_gtin("012345678905").await.unwrap_err();

    assert!(err.is_decode());
    assert_eq!(err.status(), Some(200));
}

// ============================================================================
// Priming Failure Tests
// ============================================================================

#[tokio::test]
async fn test_priming_timeout_fails_without_posting() {
    let server = MockServer::start().await;
    mount_priming(
        &server,
        ResponseTemplate::new(200).set_delay(Duration::from_secs(2)),
    )
    .await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": null})))
        .expect(0)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let err = client
        .fetch_price_levels(&PriceLevelsQuery::new("abc-123", TransactionType::Bid))
        .await
        .unwrap_err();

    assert!(matches!(err, GraphqlError::Priming(_)));
    assert!(err.http_error().is_timeout());
    assert!(err.is_network());
    assert!(!methods(&recorded(&server).await).contains(&"POST".to_string()));
}

#[tokio::test]
async fn test_priming_error_status_does_not_block_query() {
    let server = MockServer::start().await;
    mount_priming(&server, ResponseTemplate::new(503)).await;
    mount_graphql(&server, ResponseTemplate::new(200).set_body_json(json!({"data": {"variants": []}}))).await;

    let client = create_test_client(&server);
    let result = client.search_by_gtin("012345678905").await.unwrap();

    assert_eq!(result, json!({"data": {"variants": []}}));
}

#[tokio::test]
async fn test_unreachable_host_is_a_priming_network_error() {
    let config = MarketplaceConfig::builder()
        .api_key(ApiKey::new("test-api-key").unwrap())
        .px_authorization(PxAuthorization::new("test-px-token").unwrap())
        .graphql_url(EndpointUrl::new("http://127.0.0.1:1/api/graphql").unwrap())
        .web_root(EndpointUrl::new("http://127.0.0.1:1").unwrap())
        .priming_timeout(Duration::from_secs(2))
        .build()
        .unwrap();
    let client = MarketplaceClient::new(&config).unwrap();

    let err = client.search_by_gtin("012345678905").await.unwrap_err();

    assert!(matches!(err, GraphqlError::Priming(HttpError::Network(_))));
    assert!(err.is_network());
    assert_eq!(err.status(), None);
    assert!(client.search_by_gtin("012345678905").await.ok().is_none());
}
