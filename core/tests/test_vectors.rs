//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each request vector names an operation, its inputs and the exact request
//! the builder must produce. Each response vector pairs a simulated response
//! with the parse outcome it must yield.

use motionrepo_core::{
    ApiClient, ApiError, ApiResponse, Avatar, HttpMethod, HttpResponse, Motion, PaginatedResponse, ResourceKind,
    Workout,
};
use serde_json::Value;

fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn parse_kind(s: &str) -> ResourceKind {
    match s {
        "workouts" => ResourceKind::Workouts,
        "motions" => ResourceKind::Motions,
        "avatars" => ResourceKind::Avatars,
        other => panic!("unknown resource: {other}"),
    }
}

fn headers(value: &Value) -> Vec<(String, String)> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|h| {
            let pair = h.as_array().unwrap();
            (pair[0].as_str().unwrap().to_string(), pair[1].as_str().unwrap().to_string())
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[test]
fn request_test_vectors() {
    let raw = include_str!("../../test-vectors/requests.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();
    let base_url = vectors["base_url"].as_str().unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let token = case["token"].as_str().map(str::to_string);
        let client = ApiClient::new(base_url, token);
        let input = &case["input"];

        let req = match case["operation"].as_str().unwrap() {
            "list" => client.build_list(
                parse_kind(case["resource"].as_str().unwrap()),
                input["page"].as_u64().unwrap() as u32,
                input["pageSize"].as_u64().unwrap() as u32,
            ),
            "get" => client.build_get(
                parse_kind(case["resource"].as_str().unwrap()),
                input["id"].as_str().unwrap(),
            ),
            "search" => client.build_search(
                parse_kind(case["resource"].as_str().unwrap()),
                input["query"].as_str().unwrap(),
            ),
            "health" => client.build_health(),
            other => panic!("{name}: unknown operation {other}"),
        };

        let expected = &case["expected_request"];
        assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.url, format!("{base_url}{}", expected["path"].as_str().unwrap()), "{name}: url");
        assert_eq!(req.headers, headers(&expected["headers"]), "{name}: headers");
        assert!(req.body.is_none(), "{name}: body");
    }
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

fn check_error(name: &str, err: ApiError, expected: &Value) {
    if let Some(status) = expected["status"].as_u64() {
        assert_eq!(err.status(), Some(status as u16), "{name}: status");
    }
    if expected["deserialization"].as_bool() == Some(true) {
        assert!(matches!(err, ApiError::Deserialization(_)), "{name}: {err}");
    }
}

#[test]
fn response_test_vectors() {
    let raw = include_str!("../../test-vectors/responses.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();
    let client = ApiClient::new("http://localhost:7031", None);

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let response = HttpResponse {
            status: case["response"]["status"].as_u64().unwrap() as u16,
            headers: Vec::new(),
            body: case["response"]["body"].as_str().unwrap().to_string(),
        };
        let expected = &case["expected"];
        let should_succeed = expected["ok"].as_bool().unwrap();

        match case["kind"].as_str().unwrap() {
            "paginated_workouts" => match client.parse_json::<PaginatedResponse<Workout>>(response) {
                Ok(page) => {
                    assert!(should_succeed, "{name}: expected failure");
                    assert_eq!(page.total as u64, expected["total"].as_u64().unwrap(), "{name}");
                    assert_eq!(page.page as u64, expected["page"].as_u64().unwrap(), "{name}");
                    assert_eq!(page.page_size as u64, expected["pageSize"].as_u64().unwrap(), "{name}");
                    assert_eq!(page.total_pages as u64, expected["totalPages"].as_u64().unwrap(), "{name}");
                    assert_eq!(page.data.len() as u64, expected["count"].as_u64().unwrap(), "{name}");
                }
                Err(err) => {
                    assert!(!should_succeed, "{name}: {err}");
                    check_error(name, err, expected);
                }
            },
            "single_motion" => match client.parse_json::<ApiResponse<Motion>>(response) {
                Ok(envelope) => {
                    assert!(should_succeed, "{name}: expected failure");
                    assert_eq!(envelope.success, expected["success"].as_bool().unwrap(), "{name}");
                    let motion = envelope.data.unwrap();
                    assert_eq!(motion.name.as_deref(), expected["name"].as_str(), "{name}");
                }
                Err(err) => {
                    assert!(!should_succeed, "{name}: {err}");
                    check_error(name, err, expected);
                }
            },
            "single_avatar" => match client.parse_json::<ApiResponse<Avatar>>(response) {
                Ok(envelope) => {
                    assert!(should_succeed, "{name}: expected failure");
                    assert_eq!(envelope.success, expected["success"].as_bool().unwrap(), "{name}");
                    assert!(envelope.data.is_none(), "{name}");
                    assert_eq!(envelope.error.as_deref(), expected["error"].as_str(), "{name}");
                }
                Err(err) => {
                    assert!(!should_succeed, "{name}: {err}");
                    check_error(name, err, expected);
                }
            },
            other => panic!("{name}: unknown kind {other}"),
        }
    }
}
