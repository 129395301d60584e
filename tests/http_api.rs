//! HTTP surface tests
//!
//! Exercises the router in-process with `tower::ServiceExt::oneshot`:
//! the auth matrix, envelope shapes, filter and statement validation, and
//! a full transfer round trip with shortened delays.

use accounts_service::api::{self, AppState};
use accounts_service::core::{EngineConfig, LedgerStore};
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

const API_KEY: &str = "demo-key-local-12345";

fn app() -> Router {
    app_with_config(EngineConfig::default())
}

fn app_with_config(config: EngineConfig) -> Router {
    let store = Arc::new(LedgerStore::seeded());
    let state = AppState::new(store, config, vec![API_KEY.to_string()]);
    api::router(state)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("x-api-key", API_KEY)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("x-api-key", API_KEY)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_is_open() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn missing_api_key_is_unauthorized() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/accounts")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Unauthorized");
    assert_eq!(
        json["message"],
        "API key is required. Please provide X-API-Key header."
    );
}

#[tokio::test]
async fn unknown_api_key_is_forbidden() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/accounts")
                .header("x-api-key", "wrong-key")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Forbidden");
    assert_eq!(json["message"], "Invalid API key provided.");
}

#[tokio::test]
async fn list_accounts_returns_seed_set() {
    let response = app().oneshot(get("/accounts")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["count"], 3);
    assert_eq!(json["data"][0]["id"], "acc_1001");
}

#[tokio::test]
async fn unknown_account_is_not_found() {
    let response = app().oneshot(get("/accounts/acc_9999")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Not Found");
    assert_eq!(json["message"], "Account with ID acc_9999 not found.");
    assert_eq!(json["statusCode"], 404);
}

#[tokio::test]
async fn balance_view_reports_credit_accounts_as_absolute() {
    let response = app()
        .oneshot(get("/accounts/acc_1003/balance"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["balance"], "-2500.00");
    assert_eq!(json["data"]["availableBalance"], "2500.00");
    assert_eq!(json["data"]["status"], "active");
}

#[tokio::test]
async fn transaction_lookup_by_id() {
    let response = app().oneshot(get("/transactions/txn_5001")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["accountId"], "acc_1001");
    assert_eq!(json["data"]["type"], "credit");
    assert_eq!(json["data"]["amount"], "5000.00");
}

#[tokio::test]
async fn history_rejects_bogus_type_filter() {
    let response = app()
        .oneshot(get("/accounts/acc_1001/transactions?type=bogus"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["message"],
        "Invalid transaction type. Must be one of: debit, credit, transfer."
    );
}

#[tokio::test]
async fn history_window_is_inclusive_and_newest_first() {
    let response = app()
        .oneshot(get(
            "/accounts/acc_1001/transactions?from=2024-10-04T00:00:00Z&to=2024-10-12T00:00:00Z",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["count"], 2);
    assert_eq!(json["data"][0]["id"], "txn_5007");
    assert_eq!(json["data"][1]["id"], "txn_5002");
    assert_eq!(json["filters"]["type"], Value::Null);
}

#[tokio::test]
async fn statement_requires_date_range() {
    let response = app()
        .oneshot(get("/accounts/acc_1001/statement"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["message"],
        "Both from and to date parameters are required."
    );
}

#[tokio::test]
async fn statement_summary_matches_window() {
    let response = app()
        .oneshot(get(
            "/accounts/acc_1001/statement?from=2024-10-01T00:00:00Z&to=2024-10-31T00:00:00Z",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["summary"]["totalDebits"], "225.50");
    assert_eq!(data["summary"]["totalCredits"], "5000.00");
    assert_eq!(data["summary"]["netChange"], "4774.50");
    assert_eq!(data["summary"]["transactionCount"], 4);
    assert_eq!(data["closingBalance"], "15000.00");
    assert_eq!(data["openingBalance"], "10225.50");
    assert_eq!(json["message"], "Statement generated in json format.");
}

#[tokio::test]
async fn statement_csv_renders_as_text() {
    let response = app()
        .oneshot(get(
            "/accounts/acc_1001/statement?from=2024-10-01T00:00:00Z&to=2024-10-31T00:00:00Z&format=csv",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/csv"
    );
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.starts_with("date,id,type,description,amount,currency,balanceAfter"));
    assert_eq!(text.lines().count(), 5);
}

#[tokio::test]
async fn statement_rejects_unknown_format() {
    let response = app()
        .oneshot(get(
            "/accounts/acc_1001/statement?from=2024-10-01T00:00:00Z&to=2024-10-31T00:00:00Z&format=xml",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Invalid format. Must be one of: json, pdf, csv.");
}

#[tokio::test]
async fn create_transfer_returns_queued_record() {
    let response = app()
        .oneshot(post_json(
            "/transfers",
            json!({
                "fromAccountId": "acc_1001",
                "toAccountId": "acc_1002",
                "amount": 300,
                "description": "Rent share"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "queued");
    assert_eq!(json["data"]["currency"], "CAD");
    assert!(json["data"].get("processedAt").is_none());
    assert_eq!(
        json["message"],
        "Transfer created successfully and queued for processing."
    );
}

#[tokio::test]
async fn create_transfer_same_account_rejected() {
    let response = app()
        .oneshot(post_json(
            "/transfers",
            json!({
                "fromAccountId": "acc_1001",
                "toAccountId": "acc_1001",
                "amount": 300,
                "description": "Loop"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Cannot transfer to the same account.");
}

#[tokio::test]
async fn create_transfer_insufficient_funds_rejected() {
    let response = app()
        .oneshot(post_json(
            "/transfers",
            json!({
                "fromAccountId": "acc_1001",
                "toAccountId": "acc_1002",
                "amount": 999999,
                "description": "Too much"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    let message = json["message"].as_str().unwrap();
    assert!(message.starts_with("Insufficient funds in source account"));
}

#[tokio::test]
async fn create_transfer_missing_fields_rejected() {
    let response = app()
        .oneshot(post_json("/transfers", json!({ "amount": 300 })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["message"],
        "Missing required fields: fromAccountId, toAccountId, amount, description."
    );
}

#[tokio::test]
async fn seed_transfer_status_is_terminal() {
    let response = app()
        .oneshot(get("/transfers/tfr_7001/status"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "processed");
    assert!(json["data"]["processedAt"].is_string());
    assert!(json["data"]["estimatedCompletionTime"].is_null());
}

#[tokio::test]
async fn unmatched_route_gets_json_not_found() {
    let response = app().oneshot(get("/nope")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Not Found");
    assert_eq!(json["message"], "Route GET /nope not found.");
}

#[tokio::test]
async fn transfer_round_trip_with_short_delays() {
    let app = app_with_config(EngineConfig {
        queue_delay: Duration::from_millis(10),
        settle_delay: Duration::from_millis(10),
    });

    let response = app
        .clone()
        .oneshot(post_json(
            "/transfers",
            json!({
                "fromAccountId": "acc_1001",
                "toAccountId": "acc_1002",
                "amount": 300,
                "description": "Round trip"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let transfer_id = created["data"]["id"].as_str().unwrap().to_string();

    // In-flight polls report an estimated completion time
    let response = app
        .clone()
        .oneshot(get(&format!("/transfers/{}/status", transfer_id)))
        .await
        .unwrap();
    let status = body_json(response).await;
    assert!(status["data"]["estimatedCompletionTime"].is_string());

    // Give the two short delays ample real time to elapse
    tokio::time::sleep(Duration::from_millis(300)).await;

    let response = app
        .clone()
        .oneshot(get(&format!("/transfers/{}/status", transfer_id)))
        .await
        .unwrap();
    let status = body_json(response).await;
    assert_eq!(status["data"]["status"], "processed");
    assert!(status["data"]["processedAt"].is_string());

    let response = app
        .clone()
        .oneshot(get("/accounts/acc_1001/balance"))
        .await
        .unwrap();
    let balance = body_json(response).await;
    assert_eq!(balance["data"]["balance"], "14700.00");
}
