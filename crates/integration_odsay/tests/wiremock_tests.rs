//! Integration tests for the ODSay client (wiremock-based)

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_odsay::{LegKind, OdsayApiClient, OdsayClient, OdsayConfig};

fn config_for_mock(base_url: &str) -> OdsayConfig {
    OdsayConfig {
        base_url: base_url.to_string(),
        api_key: "test-key".to_string(),
        timeout_secs: 5,
    }
}

const fn sample_paths_json() -> &'static str {
    r#"{
        "result": {
            "searchType": 0,
            "path": [{
                "pathType": 3,
                "info": {
                    "totalTime": 45,
                    "payment": 1500,
                    "busTransitCount": 1,
                    "subwayTransitCount": 1
                },
                "subPath": [
                    { "trafficType": 3, "sectionTime": 5 },
                    {
                        "trafficType": 2,
                        "sectionTime": 15,
                        "stationCount": 7,
                        "startName": "시청앞",
                        "lane": [{ "busNo": "146" }]
                    },
                    { "trafficType": 3, "sectionTime": 5 },
                    {
                        "trafficType": 1,
                        "sectionTime": 20,
                        "stationCount": 6,
                        "startName": "강남역",
                        "lane": [{ "name": "2호선" }]
                    }
                ]
            }]
        }
    }"#
}

#[tokio::test]
async fn test_search_paths_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/api/searchPubTransPathT"))
        .and(query_param("apiKey", "test-key"))
        .and(query_param("SX", "126.9779"))
        .and(query_param("SY", "37.5663"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_paths_json()))
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let client = OdsayApiClient::new(&config).unwrap();

    let paths = client
        .search_paths(37.5663, 126.9779, 37.4979, 127.0276)
        .await
        .unwrap();

    assert_eq!(paths.len(), 1);
    let path = &paths[0];
    assert_eq!(path.total_duration_minutes, 45);
    assert_eq!(path.total_fare, 1500);
    assert_eq!(path.legs.len(), 4);
    assert_eq!(path.legs[1].kind, LegKind::Bus);
    assert_eq!(path.legs[1].line_name.as_deref(), Some("146"));
    assert_eq!(path.legs[3].kind, LegKind::Subway);
    assert_eq!(path.legs[3].line_name.as_deref(), Some("2호선"));
}

#[tokio::test]
async fn test_search_paths_in_band_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/api/searchPubTransPathT"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{ "error": { "code": "-98", "msg": "서비스 지역이 아닙니다" } }"#,
        ))
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let client = OdsayApiClient::new(&config).unwrap();

    let paths = client
        .search_paths(37.5663, 126.9779, 37.4979, 127.0276)
        .await
        .unwrap();
    assert!(paths.is_empty());
}

#[tokio::test]
async fn test_search_paths_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/api/searchPubTransPathT"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "60"))
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let client = OdsayApiClient::new(&config).unwrap();

    let result = client
        .search_paths(37.5663, 126.9779, 37.4979, 127.0276)
        .await;
    assert!(result.is_err());
    assert!(result.unwrap_err().is_retryable());
}

#[tokio::test]
async fn test_search_paths_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/api/searchPubTransPathT"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let client = OdsayApiClient::new(&config).unwrap();

    let result = client
        .search_paths(37.5663, 126.9779, 37.4979, 127.0276)
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_search_paths_empty_result() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/api/searchPubTransPathT"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{ "result": { "path": [] } }"#),
        )
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let client = OdsayApiClient::new(&config).unwrap();

    let paths = client
        .search_paths(37.5663, 126.9779, 37.4979, 127.0276)
        .await
        .unwrap();
    assert!(paths.is_empty());
}
